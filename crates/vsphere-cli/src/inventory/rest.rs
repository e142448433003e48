/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// InventoryApi over the vSphere Automation REST API. The REST API has
// no generic "child entities" call, so a folder's children are
// assembled from the per-kind list calls filtered by parent folder.

use libvsphere::vsphere_model::{
    EthernetBackingType, HostFilter, NetworkType, ResourcePoolFilter,
};
use tracing::debug;

use super::{
    Datacenter, Datastore, InventoryApi, ManagedObject, Network, NicBacking, ObjectKind,
    VirtualDevice,
};
use crate::errors::{CliResult, VsphereCliError};
use crate::rpc::ApiClient;

// vCenter creates the datacenter root folders with these names
const HOST_FOLDER: &str = "host";
const VM_FOLDER: &str = "vm";
const NETWORK_FOLDER: &str = "network";
const DATASTORE_FOLDER: &str = "datastore";

fn folder(id: String, name: &str) -> ManagedObject {
    ManagedObject::new(ObjectKind::Folder, id, name)
}

fn network_kind(network_type: NetworkType) -> ObjectKind {
    match network_type {
        NetworkType::DistributedPortgroup => ObjectKind::DistributedVirtualPortgroup,
        NetworkType::OpaqueNetwork => ObjectKind::OpaqueNetwork,
        NetworkType::StandardPortgroup | NetworkType::Unknown => ObjectKind::Network,
    }
}

#[async_trait::async_trait]
impl InventoryApi for ApiClient {
    async fn find_datacenter(&self, name: &str) -> CliResult<Option<Datacenter>> {
        let Some(summary) = self
            .0
            .list_datacenters(name)
            .await?
            .into_iter()
            .find(|dc| dc.name == name)
        else {
            return Ok(None);
        };
        let info = self.0.get_datacenter(&summary.datacenter).await?;
        Ok(Some(Datacenter {
            object: ManagedObject::new(ObjectKind::Datacenter, summary.datacenter, info.name),
            host_folder: folder(info.host_folder, HOST_FOLDER),
            vm_folder: folder(info.vm_folder, VM_FOLDER),
            network_folder: folder(info.network_folder, NETWORK_FOLDER),
            datastore_folder: folder(info.datastore_folder, DATASTORE_FOLDER),
        }))
    }

    async fn child_entities(&self, parent: &ManagedObject) -> CliResult<Vec<ManagedObject>> {
        debug!("Listing children of folder {} ({})", parent.name, parent.id);
        let mut children: Vec<ManagedObject> = self
            .0
            .list_folders(&parent.id)
            .await?
            .into_iter()
            .map(|f| ManagedObject::new(ObjectKind::Folder, f.folder, f.name))
            .collect();

        children.extend(
            self.0
                .list_clusters(&parent.id)
                .await?
                .into_iter()
                .map(|c| ManagedObject::new(ObjectKind::ClusterComputeResource, c.cluster, c.name)),
        );

        // A standalone host is its own compute resource and shares the host's id.
        children.extend(
            self.0
                .list_hosts(&HostFilter::StandaloneInFolder(parent.id.clone()))
                .await?
                .into_iter()
                .map(|h| ManagedObject::new(ObjectKind::ComputeResource, h.host, h.name)),
        );

        children.extend(
            self.0
                .list_vms(&parent.id)
                .await?
                .into_iter()
                .map(|vm| ManagedObject::new(ObjectKind::VirtualMachine, vm.vm, vm.name)),
        );

        Ok(children)
    }

    async fn child_pools(&self, pool: &ManagedObject) -> CliResult<Vec<ManagedObject>> {
        debug!("Listing child pools of {} ({})", pool.name, pool.id);
        Ok(self
            .0
            .list_resource_pools(&ResourcePoolFilter::Parent(pool.id.clone()))
            .await?
            .into_iter()
            .map(|rp| ManagedObject::new(ObjectKind::ResourcePool, rp.resource_pool, rp.name))
            .collect())
    }

    async fn root_pool(&self, compute: &ManagedObject) -> CliResult<ManagedObject> {
        match compute.kind {
            ObjectKind::ClusterComputeResource => {
                let cluster = self.0.get_cluster(&compute.id).await?;
                let pool = self.0.get_resource_pool(&cluster.resource_pool).await?;
                Ok(ManagedObject::new(
                    ObjectKind::ResourcePool,
                    cluster.resource_pool,
                    pool.name,
                ))
            }
            ObjectKind::ComputeResource => self
                .0
                .list_resource_pools(&ResourcePoolFilter::RootOfHost(compute.id.clone()))
                .await?
                .into_iter()
                .next()
                .map(|rp| ManagedObject::new(ObjectKind::ResourcePool, rp.resource_pool, rp.name))
                .ok_or_else(|| {
                    VsphereCliError::GenericError(format!(
                        "Compute resource {} has no root resource pool",
                        compute.name
                    ))
                }),
            kind => Err(VsphereCliError::UnexpectedObjectKind {
                kind,
                name: compute.name.clone(),
                context: "root resource pool",
            }),
        }
    }

    async fn hosts(&self, compute: &ManagedObject) -> CliResult<Vec<ManagedObject>> {
        let filter = match compute.kind {
            ObjectKind::ClusterComputeResource => HostFilter::Cluster(compute.id.clone()),
            ObjectKind::ComputeResource => HostFilter::Host(compute.id.clone()),
            kind => {
                return Err(VsphereCliError::UnexpectedObjectKind {
                    kind,
                    name: compute.name.clone(),
                    context: "host list",
                });
            }
        };
        Ok(self
            .0
            .list_hosts(&filter)
            .await?
            .into_iter()
            .map(|h| ManagedObject::new(ObjectKind::HostSystem, h.host, h.name))
            .collect())
    }

    async fn vm_devices(&self, vm: &ManagedObject) -> CliResult<Vec<VirtualDevice>> {
        let mut devices = Vec::new();
        for nic in self.0.list_ethernet(&vm.id).await? {
            let info = self.0.get_ethernet(&vm.id, &nic.nic).await?;
            let backing = match (info.backing.backing_type, info.backing.network) {
                (EthernetBackingType::DistributedPortgroup, Some(key)) => {
                    NicBacking::DistributedPortgroup { portgroup_key: key }
                }
                (EthernetBackingType::StandardPortgroup, Some(network)) => {
                    NicBacking::StandardNetwork { network }
                }
                _ => NicBacking::Other,
            };
            devices.push(VirtualDevice::EthernetCard {
                label: info.label,
                backing,
            });
        }
        for disk in self.0.list_disks(&vm.id).await? {
            let info = self.0.get_disk(&vm.id, &disk.disk).await?;
            devices.push(VirtualDevice::Disk {
                label: info.label,
                capacity: info.capacity,
            });
        }
        Ok(devices)
    }

    async fn networks(&self, datacenter: &Datacenter) -> CliResult<Vec<Network>> {
        Ok(self
            .0
            .list_networks(&datacenter.object.id)
            .await?
            .into_iter()
            .map(|n| {
                let kind = network_kind(n.network_type);
                // REST exposes a distributed port group's key as its network id
                let key = (kind == ObjectKind::DistributedVirtualPortgroup).then(|| n.network.clone());
                Network {
                    object: ManagedObject::new(kind, n.network, n.name),
                    key,
                }
            })
            .collect())
    }

    async fn datastores(&self, datacenter: &Datacenter) -> CliResult<Vec<Datastore>> {
        Ok(self
            .0
            .list_datastores(&datacenter.object.id)
            .await?
            .into_iter()
            .map(|ds| Datastore {
                object: ManagedObject::new(ObjectKind::Datastore, ds.datastore, ds.name),
                datastore_type: ds.datastore_type,
                capacity: ds.capacity,
                free_space: ds.free_space,
            })
            .collect())
    }
}

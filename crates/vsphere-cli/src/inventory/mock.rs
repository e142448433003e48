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

// In-memory InventoryApi for resolver and command tests.

use std::collections::HashMap;

use super::{
    Datacenter, Datastore, InventoryApi, ManagedObject, Network, NicBacking, ObjectKind,
    VirtualDevice,
};
use crate::errors::{CliResult, VsphereCliError};

pub const DC_NAME: &str = "DC1";

pub fn folder(id: &str, name: &str) -> ManagedObject {
    ManagedObject::new(ObjectKind::Folder, id, name)
}

pub fn cluster(id: &str, name: &str) -> ManagedObject {
    ManagedObject::new(ObjectKind::ClusterComputeResource, id, name)
}

pub fn compute_resource(id: &str, name: &str) -> ManagedObject {
    ManagedObject::new(ObjectKind::ComputeResource, id, name)
}

pub fn pool(id: &str, name: &str) -> ManagedObject {
    ManagedObject::new(ObjectKind::ResourcePool, id, name)
}

pub fn host(id: &str, name: &str) -> ManagedObject {
    ManagedObject::new(ObjectKind::HostSystem, id, name)
}

pub fn vm(id: &str, name: &str) -> ManagedObject {
    ManagedObject::new(ObjectKind::VirtualMachine, id, name)
}

pub fn nic(label: &str, portgroup_key: &str) -> VirtualDevice {
    VirtualDevice::EthernetCard {
        label: label.to_string(),
        backing: NicBacking::DistributedPortgroup {
            portgroup_key: portgroup_key.to_string(),
        },
    }
}

pub fn portgroup(key: &str, name: &str) -> Network {
    Network {
        object: ManagedObject::new(ObjectKind::DistributedVirtualPortgroup, key, name),
        key: Some(key.to_string()),
    }
}

pub fn standard_network(id: &str, name: &str) -> Network {
    Network {
        object: ManagedObject::new(ObjectKind::Network, id, name),
        key: None,
    }
}

pub fn datacenter() -> Datacenter {
    Datacenter {
        object: ManagedObject::new(ObjectKind::Datacenter, "datacenter-2", DC_NAME),
        host_folder: folder("group-h4", "host"),
        vm_folder: folder("group-v3", "vm"),
        network_folder: folder("group-n5", "network"),
        datastore_folder: folder("group-s6", "datastore"),
    }
}

#[derive(Default)]
pub struct MockInventory {
    datacenters: Vec<Datacenter>,
    children: HashMap<String, Vec<ManagedObject>>,
    pools: HashMap<String, Vec<ManagedObject>>,
    root_pools: HashMap<String, ManagedObject>,
    hosts: HashMap<String, Vec<ManagedObject>>,
    devices: HashMap<String, Vec<VirtualDevice>>,
    networks: Vec<Network>,
    datastores: Vec<Datastore>,
}

impl MockInventory {
    /// An inventory holding the single datacenter from [`datacenter`].
    pub fn new() -> Self {
        Self {
            datacenters: vec![datacenter()],
            ..Default::default()
        }
    }

    pub fn with_children(mut self, parent: &ManagedObject, children: Vec<ManagedObject>) -> Self {
        self.children.insert(parent.id.clone(), children);
        self
    }

    pub fn with_pools(mut self, parent: &ManagedObject, pools: Vec<ManagedObject>) -> Self {
        self.pools.insert(parent.id.clone(), pools);
        self
    }

    pub fn with_root_pool(mut self, compute: &ManagedObject, root: ManagedObject) -> Self {
        self.root_pools.insert(compute.id.clone(), root);
        self
    }

    pub fn with_hosts(mut self, compute: &ManagedObject, hosts: Vec<ManagedObject>) -> Self {
        self.hosts.insert(compute.id.clone(), hosts);
        self
    }

    pub fn with_devices(mut self, vm: &ManagedObject, devices: Vec<VirtualDevice>) -> Self {
        self.devices.insert(vm.id.clone(), devices);
        self
    }

    pub fn with_networks(mut self, networks: Vec<Network>) -> Self {
        self.networks = networks;
        self
    }

    pub fn with_datastores(mut self, datastores: Vec<Datastore>) -> Self {
        self.datastores = datastores;
        self
    }
}

#[async_trait::async_trait]
impl InventoryApi for MockInventory {
    async fn find_datacenter(&self, name: &str) -> CliResult<Option<Datacenter>> {
        Ok(self
            .datacenters
            .iter()
            .find(|dc| dc.object.name == name)
            .cloned())
    }

    async fn child_entities(&self, folder: &ManagedObject) -> CliResult<Vec<ManagedObject>> {
        Ok(self.children.get(&folder.id).cloned().unwrap_or_default())
    }

    async fn child_pools(&self, pool: &ManagedObject) -> CliResult<Vec<ManagedObject>> {
        Ok(self.pools.get(&pool.id).cloned().unwrap_or_default())
    }

    async fn root_pool(&self, compute: &ManagedObject) -> CliResult<ManagedObject> {
        self.root_pools.get(&compute.id).cloned().ok_or_else(|| {
            VsphereCliError::GenericError(format!("no root pool for {}", compute.name))
        })
    }

    async fn hosts(&self, compute: &ManagedObject) -> CliResult<Vec<ManagedObject>> {
        Ok(self.hosts.get(&compute.id).cloned().unwrap_or_default())
    }

    async fn vm_devices(&self, vm: &ManagedObject) -> CliResult<Vec<VirtualDevice>> {
        Ok(self.devices.get(&vm.id).cloned().unwrap_or_default())
    }

    async fn networks(&self, _datacenter: &Datacenter) -> CliResult<Vec<Network>> {
        Ok(self.networks.clone())
    }

    async fn datastores(&self, _datacenter: &Datacenter) -> CliResult<Vec<Datastore>> {
        Ok(self.datastores.clone())
    }
}

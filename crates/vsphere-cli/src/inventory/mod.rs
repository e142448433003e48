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

//! Inventory model shared by all commands: a tree of named, typed nodes
//! and the [`InventoryApi`] capabilities needed to walk it.

pub mod resolver;
pub mod rest;

#[cfg(test)]
pub(crate) mod mock;
#[cfg(test)]
pub(crate) mod mock_server;
#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::errors::CliResult;

/// Kind of an inventory node. Child accessors differ per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
pub enum ObjectKind {
    Folder,
    Datacenter,
    ClusterComputeResource,
    ComputeResource,
    ResourcePool,
    HostSystem,
    VirtualMachine,
    Network,
    DistributedVirtualPortgroup,
    OpaqueNetwork,
    Datastore,
}

impl ObjectKind {
    /// Clusters and standalone compute resources embed a root resource pool.
    pub fn has_root_pool(self) -> bool {
        matches!(
            self,
            ObjectKind::ClusterComputeResource | ObjectKind::ComputeResource
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ManagedObject {
    pub kind: ObjectKind,
    /// Managed object reference value, e.g. `group-v3`
    pub id: String,
    pub name: String,
}

impl ManagedObject {
    pub fn new(kind: ObjectKind, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Datacenter {
    pub object: ManagedObject,
    pub host_folder: ManagedObject,
    pub vm_folder: ManagedObject,
    pub network_folder: ManagedObject,
    pub datastore_folder: ManagedObject,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Network {
    pub object: ManagedObject,
    /// Port group key, only set for distributed port groups
    pub key: Option<String>,
}

impl Network {
    pub fn is_distributed_portgroup(&self) -> bool {
        self.object.kind == ObjectKind::DistributedVirtualPortgroup
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Datastore {
    pub object: ManagedObject,
    pub datastore_type: Option<String>,
    /// Bytes
    pub capacity: Option<u64>,
    /// Bytes
    pub free_space: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NicBacking {
    DistributedPortgroup { portgroup_key: String },
    StandardNetwork { network: String },
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VirtualDevice {
    EthernetCard { label: String, backing: NicBacking },
    Disk { label: String, capacity: Option<u64> },
}

/// The remote calls the resolver and the commands need. Each method is one
/// level of the tree; walking paths is the resolver's job.
#[async_trait::async_trait]
pub trait InventoryApi: Send + Sync {
    /// Datacenter with exactly this name, if any.
    async fn find_datacenter(&self, name: &str) -> CliResult<Option<Datacenter>>;

    /// Direct children of a folder, in API order.
    async fn child_entities(&self, folder: &ManagedObject) -> CliResult<Vec<ManagedObject>>;

    /// Direct child pools of a resource pool.
    async fn child_pools(&self, pool: &ManagedObject) -> CliResult<Vec<ManagedObject>>;

    /// Root resource pool embedded in a cluster or standalone compute resource.
    async fn root_pool(&self, compute: &ManagedObject) -> CliResult<ManagedObject>;

    /// Hosts belonging to a cluster or standalone compute resource.
    async fn hosts(&self, compute: &ManagedObject) -> CliResult<Vec<ManagedObject>>;

    async fn vm_devices(&self, vm: &ManagedObject) -> CliResult<Vec<VirtualDevice>>;

    async fn networks(&self, datacenter: &Datacenter) -> CliResult<Vec<Network>>;

    async fn datastores(&self, datacenter: &Datacenter) -> CliResult<Vec<Datastore>>;
}

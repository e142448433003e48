#![allow(clippy::enum_variant_names)]
use serde::{Deserialize, Serialize};

/// Summaries are what the `/api/vcenter/<kind>` list calls return, Info types
/// are the single-object `GET /api/vcenter/<kind>/{id}` bodies.
/// Only the identifier and name are guaranteed by the API, everything else is
/// kept optional so older vCenter releases still deserialize.

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatacenterSummary {
    /// Managed object id, e.g. `datacenter-2`
    pub datacenter: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatacenterInfo {
    pub name: String,
    pub datastore_folder: String,
    pub host_folder: String,
    pub network_folder: String,
    pub vm_folder: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FolderType {
    Datacenter,
    Datastore,
    Host,
    Network,
    VirtualMachine,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSummary {
    pub folder: String,
    pub name: String,
    #[serde(rename = "type")]
    pub folder_type: FolderType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ha_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drs_enabled: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterInfo {
    pub name: String,
    /// Root resource pool of the cluster
    pub resource_pool: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePoolSummary {
    pub resource_pool: String,
    pub name: String,
}

/// Which resource pools a pool list call should return.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourcePoolFilter {
    /// Direct children of a pool
    Parent(String),
    /// The root pool ("Resources") of a standalone host
    RootOfHost(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePoolInfo {
    pub name: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HostConnectionState {
    Connected,
    Disconnected,
    NotResponding,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerState {
    PoweredOn,
    PoweredOff,
    Suspended,
    Standby,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSummary {
    pub host: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_state: Option<HostConnectionState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_state: Option<PowerState>,
}

/// Which hosts a host list call should return.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostFilter {
    /// Standalone hosts directly inside a host folder
    StandaloneInFolder(String),
    /// Members of a cluster
    Cluster(String),
    /// A single host by id
    Host(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmSummary {
    pub vm: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_state: Option<PowerState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_count: Option<u32>,
    #[serde(rename = "memory_size_MiB", skip_serializing_if = "Option::is_none")]
    pub memory_size_mib: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthernetSummary {
    pub nic: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EthernetBackingType {
    StandardPortgroup,
    HostDevice,
    DistributedPortgroup,
    OpaqueNetwork,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthernetBacking {
    #[serde(rename = "type")]
    pub backing_type: EthernetBackingType,
    /// Network id; for a distributed port group this is the port group key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributed_switch_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributed_port: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthernetInfo {
    pub label: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub nic_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    pub backing: EthernetBacking,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskSummary {
    pub disk: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskInfo {
    pub label: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub disk_type: Option<String>,
    /// Bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u64>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NetworkType {
    StandardPortgroup,
    DistributedPortgroup,
    OpaqueNetwork,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub network: String,
    pub name: String,
    #[serde(rename = "type")]
    pub network_type: NetworkType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatastoreSummary {
    pub datastore: String,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub datastore_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_space: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u64>,
}

use std::string::String;

use reqwest::StatusCode;
use urlencoding::encode;

use crate::vsphere_model::*;
use crate::{Vsphere, VsphereApiClient, VsphereApiError};

// Every compute resource's root pool carries this name
const ROOT_POOL_NAME: &str = "Resources";

// Macro for GET operations that return a list filtered by a single query parameter
macro_rules! get_filtered {
    ($self:expr, $base_url:literal, $filter:literal, $value:expr, $return_type:ty) => {{
        let url = format!("{}?{}={}", $base_url, $filter, encode($value));
        let (_status, items): (StatusCode, $return_type) = $self.client.get(&url).await?;
        Ok(items)
    }};
}

// Macro for GET operations that return one object by id
macro_rules! get_one {
    ($self:expr, $base_url:literal, $id:expr, $return_type:ty) => {{
        let url = format!("{}/{}", $base_url, encode($id));
        let (_status, item): (StatusCode, $return_type) = $self.client.get(&url).await?;
        Ok(item)
    }};
}

#[derive(Clone, Debug)]
pub struct VsphereApi {
    pub client: VsphereApiClient,
}

impl VsphereApi {
    pub fn new(client: VsphereApiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Vsphere for VsphereApi {
    fn base_url(&self) -> &str {
        self.client.base_url()
    }

    async fn logout(&self) -> Result<(), VsphereApiError> {
        self.client.logout().await
    }

    async fn list_datacenters(&self, name: &str) -> Result<Vec<DatacenterSummary>, VsphereApiError> {
        get_filtered!(self, "vcenter/datacenter", "names", name, Vec<DatacenterSummary>)
    }

    async fn get_datacenter(&self, id: &str) -> Result<DatacenterInfo, VsphereApiError> {
        get_one!(self, "vcenter/datacenter", id, DatacenterInfo)
    }

    async fn list_folders(&self, parent_folder: &str) -> Result<Vec<FolderSummary>, VsphereApiError> {
        get_filtered!(
            self,
            "vcenter/folder",
            "parent_folders",
            parent_folder,
            Vec<FolderSummary>
        )
    }

    async fn list_clusters(&self, folder: &str) -> Result<Vec<ClusterSummary>, VsphereApiError> {
        get_filtered!(self, "vcenter/cluster", "folders", folder, Vec<ClusterSummary>)
    }

    async fn get_cluster(&self, id: &str) -> Result<ClusterInfo, VsphereApiError> {
        get_one!(self, "vcenter/cluster", id, ClusterInfo)
    }

    async fn list_resource_pools(
        &self,
        filter: &ResourcePoolFilter,
    ) -> Result<Vec<ResourcePoolSummary>, VsphereApiError> {
        let url = match filter {
            ResourcePoolFilter::Parent(pool) => {
                format!("vcenter/resource-pool?parent_resource_pools={}", encode(pool))
            }
            ResourcePoolFilter::RootOfHost(host) => format!(
                "vcenter/resource-pool?hosts={}&names={ROOT_POOL_NAME}",
                encode(host)
            ),
        };
        let (_status, pools): (StatusCode, Vec<ResourcePoolSummary>) =
            self.client.get(&url).await?;
        Ok(pools)
    }

    async fn get_resource_pool(&self, id: &str) -> Result<ResourcePoolInfo, VsphereApiError> {
        get_one!(self, "vcenter/resource-pool", id, ResourcePoolInfo)
    }

    async fn list_hosts(&self, filter: &HostFilter) -> Result<Vec<HostSummary>, VsphereApiError> {
        let url = match filter {
            HostFilter::StandaloneInFolder(folder) => {
                format!("vcenter/host?folders={}&standalone=true", encode(folder))
            }
            HostFilter::Cluster(cluster) => format!("vcenter/host?clusters={}", encode(cluster)),
            HostFilter::Host(host) => format!("vcenter/host?hosts={}", encode(host)),
        };
        let (_status, hosts): (StatusCode, Vec<HostSummary>) = self.client.get(&url).await?;
        Ok(hosts)
    }

    async fn list_vms(&self, folder: &str) -> Result<Vec<VmSummary>, VsphereApiError> {
        get_filtered!(self, "vcenter/vm", "folders", folder, Vec<VmSummary>)
    }

    async fn list_ethernet(&self, vm: &str) -> Result<Vec<EthernetSummary>, VsphereApiError> {
        let url = format!("vcenter/vm/{}/hardware/ethernet", encode(vm));
        let (_status, nics): (StatusCode, Vec<EthernetSummary>) = self.client.get(&url).await?;
        Ok(nics)
    }

    async fn get_ethernet(&self, vm: &str, nic: &str) -> Result<EthernetInfo, VsphereApiError> {
        let url = format!("vcenter/vm/{}/hardware/ethernet/{}", encode(vm), encode(nic));
        let (_status, info): (StatusCode, EthernetInfo) = self.client.get(&url).await?;
        Ok(info)
    }

    async fn list_disks(&self, vm: &str) -> Result<Vec<DiskSummary>, VsphereApiError> {
        let url = format!("vcenter/vm/{}/hardware/disk", encode(vm));
        let (_status, disks): (StatusCode, Vec<DiskSummary>) = self.client.get(&url).await?;
        Ok(disks)
    }

    async fn get_disk(&self, vm: &str, disk: &str) -> Result<DiskInfo, VsphereApiError> {
        let url = format!("vcenter/vm/{}/hardware/disk/{}", encode(vm), encode(disk));
        let (_status, info): (StatusCode, DiskInfo) = self.client.get(&url).await?;
        Ok(info)
    }

    async fn list_networks(&self, datacenter: &str) -> Result<Vec<NetworkSummary>, VsphereApiError> {
        get_filtered!(
            self,
            "vcenter/network",
            "datacenters",
            datacenter,
            Vec<NetworkSummary>
        )
    }

    async fn list_datastores(
        &self,
        datacenter: &str,
    ) -> Result<Vec<DatastoreSummary>, VsphereApiError> {
        get_filtered!(
            self,
            "vcenter/datastore",
            "datacenters",
            datacenter,
            Vec<DatastoreSummary>
        )
    }
}

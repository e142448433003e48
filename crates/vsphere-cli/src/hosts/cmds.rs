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

use std::pin::Pin;

use prettytable::{Table, row};
use serde::Serialize;
use tracing::debug;

use super::args::ListHosts;
use crate::errors::{CliResult, VsphereCliError};
use crate::inventory::resolver::{
    traverse_folders_for_computeresources, traverse_folders_for_pools,
};
use crate::inventory::{Datacenter, InventoryApi};
use crate::output::{OutputFormat, write_report};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolHosts {
    #[serde(rename = "Pool")]
    pub pool: String,
    #[serde(rename = "Hosts")]
    pub hosts: Vec<HostEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostEntry {
    #[serde(rename = "Host")]
    pub host: String,
}

// collect_pool_hosts gathers every cluster and then every standalone
// compute resource below the host folder, optionally keeping only the
// ones named `pool_filter`, and lists the hosts of each.
pub async fn collect_pool_hosts(
    api: &dyn InventoryApi,
    datacenter: &Datacenter,
    pool_filter: Option<&str>,
) -> CliResult<Vec<PoolHosts>> {
    let mut pools = traverse_folders_for_pools(api, &datacenter.host_folder).await?;
    pools.extend(traverse_folders_for_computeresources(api, &datacenter.host_folder).await?);
    debug!("Found {} clusters and compute resources", pools.len());

    if let Some(name) = pool_filter {
        pools.retain(|pool| pool.name == name);
        if pools.is_empty() {
            return Err(VsphereCliError::PoolNotFound(name.to_string()));
        }
    }

    let mut records = Vec::with_capacity(pools.len());
    for pool in pools {
        let hosts = api
            .hosts(&pool)
            .await?
            .into_iter()
            .map(|host| HostEntry { host: host.name })
            .collect();
        records.push(PoolHosts {
            pool: pool.name,
            hosts,
        });
    }
    Ok(records)
}

pub async fn list(
    args: ListHosts,
    api: &dyn InventoryApi,
    datacenter: &Datacenter,
    output: &mut Pin<Box<dyn tokio::io::AsyncWrite>>,
    format: OutputFormat,
) -> CliResult<()> {
    let records = collect_pool_hosts(api, datacenter, args.pool.as_deref()).await?;
    write_report(output, format, &records, pool_hosts_to_table(&records)).await
}

// pool_hosts_to_table renders one row per pool with
// its hosts in a single cell.
pub fn pool_hosts_to_table(records: &[PoolHosts]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Pool", "Hosts"]);
    for record in records {
        let hosts = record
            .hosts
            .iter()
            .map(|entry| entry.host.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(row![record.pool, hosts]);
    }
    table
}

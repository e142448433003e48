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

use super::args::ShowPool;
use crate::errors::{CliResult, VsphereCliError};
use crate::inventory::resolver::find_pool;
use crate::inventory::{Datacenter, InventoryApi, ObjectKind};
use crate::output::{OutputFormat, write_report};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolDetails {
    pub name: String,
    pub id: String,
    pub child_pools: Vec<String>,
}

pub async fn describe_pool(
    api: &dyn InventoryApi,
    datacenter: &Datacenter,
    path: &str,
) -> CliResult<PoolDetails> {
    let pool = find_pool(api, datacenter, path).await?;
    if pool.kind != ObjectKind::ResourcePool {
        return Err(VsphereCliError::UnexpectedObjectKind {
            kind: pool.kind,
            name: pool.name,
            context: "resource pool",
        });
    }
    let child_pools = api
        .child_pools(&pool)
        .await?
        .into_iter()
        .map(|child| child.name)
        .collect();
    Ok(PoolDetails {
        name: pool.name,
        id: pool.id,
        child_pools,
    })
}

pub async fn show(
    args: ShowPool,
    api: &dyn InventoryApi,
    datacenter: &Datacenter,
    output: &mut Pin<Box<dyn tokio::io::AsyncWrite>>,
    format: OutputFormat,
) -> CliResult<()> {
    let details = describe_pool(api, datacenter, &args.path).await?;

    let mut table = Table::new();
    table.set_titles(row!["Name", "Id", "Child Pools"]);
    table.add_row(row![details.name, details.id, details.child_pools.join(", ")]);
    write_report(output, format, &details, table).await
}

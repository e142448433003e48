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

use super::args::ShowDatastore;
use crate::errors::CliResult;
use crate::inventory::resolver::find_datastore;
use crate::inventory::{Datacenter, Datastore, InventoryApi};
use crate::output::{OutputFormat, write_report};

const GIB: f64 = (1u64 << 30) as f64;

fn gib(bytes: Option<u64>) -> String {
    bytes
        .map(|b| format!("{:.1} GiB", b as f64 / GIB))
        .unwrap_or_else(|| "-".to_string())
}

pub fn datastore_to_table(datastore: &Datastore) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Name", "Id", "Type", "Capacity", "Free"]);
    table.add_row(row![
        datastore.object.name,
        datastore.object.id,
        datastore.datastore_type.as_deref().unwrap_or("-"),
        gib(datastore.capacity),
        gib(datastore.free_space),
    ]);
    table
}

pub async fn show(
    args: ShowDatastore,
    api: &dyn InventoryApi,
    datacenter: &Datacenter,
    output: &mut Pin<Box<dyn tokio::io::AsyncWrite>>,
    format: OutputFormat,
) -> CliResult<()> {
    let datastore = find_datastore(api, datacenter, &args.name).await?;
    write_report(output, format, &datastore, datastore_to_table(&datastore)).await
}

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

use super::args::ShowNetwork;
use crate::errors::CliResult;
use crate::inventory::resolver::find_network;
use crate::inventory::{Datacenter, InventoryApi, Network};
use crate::output::{OutputFormat, write_report};

pub fn network_to_table(network: &Network) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Name", "Kind", "Id", "Port Group Key"]);
    table.add_row(row![
        network.object.name,
        network.object.kind,
        network.object.id,
        network.key.as_deref().unwrap_or("-"),
    ]);
    table
}

pub async fn show(
    args: ShowNetwork,
    api: &dyn InventoryApi,
    datacenter: &Datacenter,
    output: &mut Pin<Box<dyn tokio::io::AsyncWrite>>,
    format: OutputFormat,
) -> CliResult<()> {
    let network = find_network(api, datacenter, &args.name).await?;
    write_report(output, format, &network, network_to_table(&network)).await
}

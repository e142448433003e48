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

use super::args::ListVmNetworks;
use crate::async_write;
use crate::errors::{CliResult, VsphereCliError};
use crate::inventory::resolver::{find_folder, traverse_folders_for_vm};
use crate::inventory::{Datacenter, InventoryApi, NicBacking, VirtualDevice};
use crate::output::{OutputFormat, write_report};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NicVlan {
    #[serde(rename = "NIC")]
    pub nic: String,
    #[serde(rename = "VLAN")]
    pub vlan: String,
}

// collect_nic_vlans pairs every ethernet card of the VM with the
// distributed port groups whose key equals the card's port group key.
pub async fn collect_nic_vlans(
    api: &dyn InventoryApi,
    datacenter: &Datacenter,
    folder_path: &str,
    vm_name: &str,
) -> CliResult<Vec<NicVlan>> {
    let folder = find_folder(api, datacenter, folder_path).await?;
    let vm = traverse_folders_for_vm(api, &folder, vm_name)
        .await?
        .ok_or_else(|| VsphereCliError::VmNotFound {
            name: vm_name.to_string(),
            folder: folder.name.clone(),
        })?;

    let portgroups: Vec<_> = api
        .networks(datacenter)
        .await?
        .into_iter()
        .filter(|network| network.is_distributed_portgroup())
        .collect();

    let mut records = Vec::new();
    for device in api.vm_devices(&vm).await? {
        let (label, key) = match device {
            VirtualDevice::EthernetCard {
                label,
                backing: NicBacking::DistributedPortgroup { portgroup_key },
            } => (label, portgroup_key),
            VirtualDevice::EthernetCard {
                label,
                backing: NicBacking::StandardNetwork { network },
            } => {
                debug!("{label} is attached to standard network {network}");
                continue;
            }
            VirtualDevice::EthernetCard { label, .. } => {
                debug!("{label} is not backed by a port group");
                continue;
            }
            VirtualDevice::Disk { label, capacity } => {
                debug!("Skipping disk {label} ({} bytes)", capacity.unwrap_or_default());
                continue;
            }
        };
        for portgroup in &portgroups {
            if portgroup.key.as_deref() == Some(key.as_str()) {
                records.push(NicVlan {
                    nic: label.clone(),
                    vlan: portgroup.object.name.clone(),
                });
            }
        }
    }
    Ok(records)
}

pub fn nic_vlan_lines(records: &[NicVlan]) -> String {
    records
        .iter()
        .map(|r| format!("NIC: {} VLAN: {}\n", r.nic, r.vlan))
        .collect()
}

pub async fn network_list(
    args: ListVmNetworks,
    api: &dyn InventoryApi,
    datacenter: &Datacenter,
    folder_path: &str,
    output: &mut Pin<Box<dyn tokio::io::AsyncWrite>>,
    format: OutputFormat,
) -> CliResult<()> {
    let records = collect_nic_vlans(api, datacenter, folder_path, &args.vm_name).await?;
    if format == OutputFormat::AsciiTable {
        async_write!(output, "{}", nic_vlan_lines(&records))?;
        return Ok(());
    }

    let mut table = Table::new();
    table.set_titles(row!["NIC", "VLAN"]);
    for record in &records {
        table.add_row(row![record.nic, record.vlan]);
    }
    write_report(output, format, &records, table).await
}

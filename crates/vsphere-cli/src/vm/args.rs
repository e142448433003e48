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

use clap::Parser;

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "Virtual machine network information", subcommand)]
    Network(NetworkCmd),
}

#[derive(Parser, Debug)]
pub enum NetworkCmd {
    #[clap(
        about = "List the VM's NICs attached to distributed port groups",
        visible_alias = "l"
    )]
    List(ListVmNetworks),
}

#[derive(Parser, Debug)]
pub struct ListVmNetworks {
    #[clap(help = "Name of the virtual machine")]
    pub vm_name: String,
}

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

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use crate::output::OutputFormat;
use crate::{datastore, hosts, network, pool, vm};

#[derive(Parser, Debug)]
#[clap(name = "vsphere-cli", version)]
#[clap(about = "Query vSphere inventory: hosts, pools, VMs, networks and datastores")]
pub struct CliOptions {
    #[clap(long, global = true, env = "VSPHERE_HOST", help = "vCenter host name or address")]
    pub host: Option<String>,

    #[clap(short, long, global = true, env = "VSPHERE_USER", help = "User to log in as")]
    pub user: Option<String>,

    #[clap(
        long,
        global = true,
        env = "VSPHERE_PASSWORD",
        hide_env_values = true,
        help = "Password for --user"
    )]
    pub password: Option<String>,

    #[clap(long, global = true, env = "VSPHERE_DATACENTER", help = "Datacenter to query")]
    pub datacenter: Option<String>,

    #[clap(long, global = true, help = "API path on the server [default: /api]")]
    pub path: Option<String>,

    #[clap(long, global = true, help = "API port [default: 443]")]
    pub port: Option<u16>,

    #[clap(
        long,
        global = true,
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set,
        value_name = "true|false",
        help = "Use https [default: true]"
    )]
    pub ssl: Option<bool>,

    #[clap(
        long,
        global = true,
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set,
        value_name = "true|false",
        help = "Skip server certificate verification [default: false]"
    )]
    pub insecure: Option<bool>,

    #[clap(
        long,
        global = true,
        help = "VM folder path, relative to the datacenter VM folder"
    )]
    pub folder: Option<String>,

    #[clap(
        short,
        long,
        global = true,
        value_enum,
        default_value = "ascii-table",
        help = "Report format"
    )]
    pub format: OutputFormat,

    #[clap(short, long, global = true, help = "Write the report to this file instead of stdout")]
    pub output: Option<String>,

    #[clap(
        long,
        global = true,
        help = "TOML config file [default: $HOME/.config/vsphere_cli.toml]"
    )]
    pub config: Option<PathBuf>,

    #[clap(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (-d debug, -dd trace)"
    )]
    pub debug: u8,

    #[clap(subcommand)]
    pub commands: CliCommand,
}

#[derive(Parser, Debug)]
pub enum CliCommand {
    #[clap(about = "Host information", subcommand)]
    Hosts(hosts::Cmd),
    #[clap(about = "Virtual machine information", subcommand)]
    Vm(vm::Cmd),
    #[clap(about = "Resource pool information", subcommand)]
    Pool(pool::Cmd),
    #[clap(about = "Network information", subcommand)]
    Network(network::Cmd),
    #[clap(about = "Datastore information", subcommand)]
    Datastore(datastore::Cmd),
}

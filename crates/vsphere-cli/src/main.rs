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

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cfg::cli_options::{CliCommand, CliOptions};
use crate::cfg::config_file::{ConnectionConfig, FileConfig};
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::errors::CliResult;
use crate::inventory::resolver;
use crate::output::OutputFormat;
use crate::rpc::ApiClient;

mod async_write;
mod cfg;
mod datastore;
mod errors;
mod hosts;
mod inventory;
mod network;
mod output;
mod pool;
mod rpc;
mod vm;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        eprintln!("Failed to install error reporting: {e}");
    }

    let opts = match CliOptions::try_parse() {
        Ok(opts) => opts,
        Err(e) => {
            // --help and --version land here too and are not failures
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    if let Err(e) = init_logging(opts.debug) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(opts).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

// init_logging sends logs to stderr. RUST_LOG wins when set,
// otherwise -d picks the level for this workspace's crates.
fn init_logging(debug: u8) -> color_eyre::Result<()> {
    let level = match debug {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::builder().parse(format!(
            "warn,vsphere_cli={level},libvsphere={level}"
        ))?,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        )
        .try_init()?;
    Ok(())
}

async fn run(opts: CliOptions) -> CliResult<()> {
    let file_config = FileConfig::load_or_default(opts.config.as_deref())?;
    let config = ConnectionConfig::resolve(&opts, file_config)?;
    debug!("Connection settings: {config:?}");

    let api_client = ApiClient::connect(&config).await?;
    let result = dispatch_command(
        opts.commands,
        api_client.clone(),
        &config,
        opts.format,
        opts.output.as_deref(),
    )
    .await;
    api_client.logout().await;
    result
}

async fn dispatch_command(
    command: CliCommand,
    api_client: ApiClient,
    config: &ConnectionConfig,
    format: OutputFormat,
    output_path: Option<&str>,
) -> CliResult<()> {
    let datacenter = resolver::find_datacenter(&api_client, &config.datacenter).await?;
    debug!(
        "Datacenter {} ({}): host folder {}, vm folder {}, network folder {}, datastore folder {}",
        datacenter.object.name,
        datacenter.object.id,
        datacenter.host_folder.id,
        datacenter.vm_folder.id,
        datacenter.network_folder.id,
        datacenter.datastore_folder.id,
    );

    // the report file is only created once the datacenter resolves
    let output_file = output::open_output(output_path).await?;

    let ctx = RuntimeContext {
        api_client,
        datacenter,
        config: RuntimeConfig {
            format,
            folder: config.folder.clone(),
        },
        output_file,
    };

    match command {
        CliCommand::Hosts(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Vm(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Pool(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Network(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Datastore(cmd) => cmd.dispatch(ctx).await,
    }
}

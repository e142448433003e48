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

use prettytable::Table;
use serde::Serialize;

use crate::errors::CliResult;
use crate::{async_write, async_write_table_as_csv};

// OutputFormat are the supported report formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    AsciiTable,
    Csv,
    Json,
    Yaml,
}

// open_output opens the report destination, stdout unless a
// file was given.
pub async fn open_output(path: Option<&str>) -> CliResult<Pin<Box<dyn tokio::io::AsyncWrite>>> {
    Ok(match path {
        Some(path) => Box::pin(tokio::fs::File::create(path).await?),
        None => Box::pin(tokio::io::stdout()),
    })
}

// write_report renders one command's result in the requested
// format. Structured formats serialize `records`, the table
// formats render `table`.
pub async fn write_report<T: Serialize + ?Sized>(
    output: &mut Pin<Box<dyn tokio::io::AsyncWrite>>,
    format: OutputFormat,
    records: &T,
    table: Table,
) -> CliResult<()> {
    match format {
        OutputFormat::AsciiTable => async_write!(output, "{table}")?,
        OutputFormat::Csv => async_write_table_as_csv!(output, table)?,
        OutputFormat::Json => {
            async_write!(output, "{}\n", serde_json::to_string_pretty(records)?)?
        }
        OutputFormat::Yaml => async_write!(output, "{}", serde_yaml::to_string(records)?)?,
    }
    Ok(())
}

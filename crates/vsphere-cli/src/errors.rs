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

use libvsphere::VsphereApiError;

use crate::cfg::config_file::ConfigError;
use crate::inventory::ObjectKind;

/// VsphereCliError enumerates every fatal condition a command can hit.
/// All of them end the process with exit status 1.
#[derive(thiserror::Error, Debug)]
pub enum VsphereCliError {
    #[error("Unable to connect to vSphere at {url}: {source}")]
    ApiConnectFailed {
        url: String,
        source: VsphereApiError,
    },

    #[error("vSphere API call failed: {0}")]
    ApiInvocationError(#[from] VsphereApiError),

    #[error("Argument {0} is missing")]
    MissingArgument(&'static str),

    #[error("Datacenter {0} not found")]
    DatacenterNotFound(String),

    #[error("No such {kind} {path} (no match for '{segment}')")]
    PathNotFound {
        kind: &'static str,
        path: String,
        segment: String,
    },

    #[error("Pool {0} not found")]
    PoolNotFound(String),

    #[error("Network {0} not found")]
    NetworkNotFound(String),

    #[error("Datastore {0} not found")]
    DatastoreNotFound(String),

    #[error("VM {name} not found below folder {folder}")]
    VmNotFound { name: String, folder: String },

    #[error("Unexpected object type {kind} ({name}) while resolving a {context}")]
    UnexpectedObjectKind {
        kind: ObjectKind,
        name: String,
        context: &'static str,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Generic Error: {0}")]
    GenericError(String),

    #[error("Error while writing into output: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Error while handling json: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Error while handling yaml: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type CliResult<T> = Result<T, VsphereCliError>;

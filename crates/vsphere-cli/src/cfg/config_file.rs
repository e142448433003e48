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

use std::path::{Path, PathBuf};

use libvsphere::Endpoint;
use serde::{Deserialize, Serialize};

use crate::cfg::cli_options::CliOptions;
use crate::errors::{CliResult, VsphereCliError};

const DEFAULT_PORT: u16 = 443;
const DEFAULT_PATH: &str = "/api";
const DEFAULT_CONFIG_FILE: &str = ".config/vsphere_cli.toml";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file: {path}: {error}")]
    CouldNotRead { path: String, error: std::io::Error },
    #[error("Invalid TOML in config file: {path}: {error}")]
    InvalidToml {
        path: String,
        error: toml::de::Error,
    },
}

/// FileConfig mirrors the connection flags. Every key is optional;
/// a command line value always wins over the file.
///
/// ```toml
/// host = "vcenter.example.com"
/// user = "administrator@vsphere.local"
/// password = "..."
/// datacenter = "DC1"
/// insecure = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub datacenter: Option<String>,
    pub path: Option<String>,
    pub port: Option<u16>,
    pub ssl: Option<bool>,
    pub insecure: Option<bool>,
    pub folder: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let cfg = std::fs::read_to_string(path).map_err(|error| ConfigError::CouldNotRead {
            path: path.to_string_lossy().to_string(),
            error,
        })?;
        toml::from_str::<Self>(&cfg).map_err(|error| ConfigError::InvalidToml {
            path: path.to_string_lossy().to_string(),
            error,
        })
    }

    // load_or_default reads the explicitly requested file, or the
    // default location if none was given. Only a missing *default*
    // file is tolerated.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::debug!("No config file found, using command line values only");
                Ok(Self::default())
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_CONFIG_FILE))
}

/// ConnectionConfig is the single merged view of the command line
/// and the config file, assembled once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub datacenter: String,
    pub path: String,
    pub port: u16,
    pub ssl: bool,
    pub insecure: bool,
    pub folder: String,
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("datacenter", &self.datacenter)
            .field("path", &self.path)
            .field("port", &self.port)
            .field("ssl", &self.ssl)
            .field("insecure", &self.insecure)
            .field("folder", &self.folder)
            .finish()
    }
}

impl ConnectionConfig {
    pub fn resolve(opts: &CliOptions, file: FileConfig) -> CliResult<Self> {
        let host = opts
            .host
            .clone()
            .or(file.host)
            .ok_or(VsphereCliError::MissingArgument("host"))?;
        let user = opts
            .user
            .clone()
            .or(file.user)
            .ok_or(VsphereCliError::MissingArgument("user"))?;
        let password = opts
            .password
            .clone()
            .or(file.password)
            .ok_or(VsphereCliError::MissingArgument("password"))?;
        let datacenter = opts
            .datacenter
            .clone()
            .or(file.datacenter)
            .ok_or(VsphereCliError::MissingArgument("datacenter"))?;

        Ok(Self {
            host,
            user,
            password,
            datacenter,
            path: opts
                .path
                .clone()
                .or(file.path)
                .unwrap_or_else(|| DEFAULT_PATH.to_string()),
            port: opts.port.or(file.port).unwrap_or(DEFAULT_PORT),
            ssl: opts.ssl.or(file.ssl).unwrap_or(true),
            insecure: opts.insecure.or(file.insecure).unwrap_or(false),
            folder: opts.folder.clone().or(file.folder).unwrap_or_default(),
        })
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.ssl, &self.host, self.port, &self.path)
            .with_credentials(&self.user, &self.password)
    }
}

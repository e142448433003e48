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

use std::sync::Arc;

use libvsphere::{Vsphere, VsphereClientPool};

use crate::cfg::config_file::ConnectionConfig;
use crate::errors::{CliResult, VsphereCliError};

// ApiClient wraps the one authenticated vSphere session an
// invocation uses. Cloning shares the session.
#[derive(Clone)]
pub struct ApiClient(pub Arc<dyn Vsphere>);

impl ApiClient {
    pub async fn connect(config: &ConnectionConfig) -> CliResult<Self> {
        let endpoint = config.endpoint();
        let url = endpoint.base_url.clone();
        let pool = VsphereClientPool::builder(config.insecure)
            .build()
            .map_err(|source| VsphereCliError::ApiConnectFailed {
                url: url.clone(),
                source,
            })?;
        let client = pool
            .create_client(endpoint)
            .await
            .map_err(|source| VsphereCliError::ApiConnectFailed { url, source })?;
        Ok(Self(Arc::from(client)))
    }

    // logout failures are logged, never returned.
    pub async fn logout(&self) {
        if let Err(e) = self.0.logout().await {
            tracing::warn!("Failed to close vSphere session at {}: {e}", self.0.base_url());
        }
    }
}

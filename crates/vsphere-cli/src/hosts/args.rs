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
    #[clap(
        about = "List clusters and standalone compute resources with their hosts",
        visible_alias = "l"
    )]
    List(ListHosts),
}

#[derive(Parser, Debug)]
pub struct ListHosts {
    #[clap(long, help = "Only show the cluster or compute resource with this name")]
    pub pool: Option<String>,
}

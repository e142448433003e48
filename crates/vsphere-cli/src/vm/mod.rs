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

pub mod args;
pub mod cmds;


pub use args::Cmd;

use self::args::NetworkCmd;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::CliResult;

impl Dispatch for Cmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        match self {
            Cmd::Network(NetworkCmd::List(args)) => {
                cmds::network_list(
                    args,
                    &ctx.api_client,
                    &ctx.datacenter,
                    &ctx.config.folder,
                    &mut ctx.output_file,
                    ctx.config.format,
                )
                .await
            }
        }
    }
}

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

// Path resolution over the inventory tree. Paths are `/`-separated
// child names; empty segments are skipped, so "", "/" and "//" all
// name the root. Resolution only ever descends: the first child with
// a matching name wins and a miss at any segment aborts.

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::debug;

use super::{Datacenter, Datastore, InventoryApi, ManagedObject, Network, ObjectKind};
use crate::errors::{CliResult, VsphereCliError};

pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

pub async fn find_datacenter(api: &dyn InventoryApi, name: &str) -> CliResult<Datacenter> {
    debug!("Looking up datacenter {name}");
    api.find_datacenter(name)
        .await?
        .ok_or_else(|| VsphereCliError::DatacenterNotFound(name.to_string()))
}

// find_folder walks `path` from the datacenter VM folder,
// only ever stepping into Folder children.
pub async fn find_folder(
    api: &dyn InventoryApi,
    datacenter: &Datacenter,
    path: &str,
) -> CliResult<ManagedObject> {
    let mut current = datacenter.vm_folder.clone();
    for segment in path_segments(path) {
        current = find_in_folder(api, &current, ObjectKind::Folder, segment)
            .await?
            .ok_or_else(|| not_found("folder", path, segment))?;
        debug!("Folder path {path}: matched {segment} ({})", current.id);
    }
    Ok(current)
}

// find_pool walks `path` from the datacenter host folder through
// folders, clusters and resource pools. A path ending on a cluster or
// compute resource yields its root resource pool.
pub async fn find_pool(
    api: &dyn InventoryApi,
    datacenter: &Datacenter,
    path: &str,
) -> CliResult<ManagedObject> {
    let mut current = datacenter.host_folder.clone();
    for segment in path_segments(path) {
        current = pool_children(api, &current)
            .await?
            .into_iter()
            .find(|child| child.name == segment)
            .ok_or_else(|| not_found("pool", path, segment))?;
        debug!(
            "Pool path {path}: matched {segment} ({} {})",
            current.kind, current.id
        );
    }

    if current.kind.has_root_pool() {
        return api.root_pool(&current).await;
    }
    Ok(current)
}

async fn pool_children(
    api: &dyn InventoryApi,
    node: &ManagedObject,
) -> CliResult<Vec<ManagedObject>> {
    match node.kind {
        ObjectKind::Folder => api.child_entities(node).await,
        ObjectKind::ClusterComputeResource | ObjectKind::ComputeResource => {
            let root = api.root_pool(node).await?;
            api.child_pools(&root).await
        }
        ObjectKind::ResourcePool => api.child_pools(node).await,
        kind => Err(VsphereCliError::UnexpectedObjectKind {
            kind,
            name: node.name.clone(),
            context: "resource pool",
        }),
    }
}

pub async fn find_network(
    api: &dyn InventoryApi,
    datacenter: &Datacenter,
    name: &str,
) -> CliResult<Network> {
    api.networks(datacenter)
        .await?
        .into_iter()
        .find(|network| network.object.name == name)
        .ok_or_else(|| VsphereCliError::NetworkNotFound(name.to_string()))
}

pub async fn find_datastore(
    api: &dyn InventoryApi,
    datacenter: &Datacenter,
    name: &str,
) -> CliResult<Datastore> {
    api.datastores(datacenter)
        .await?
        .into_iter()
        .find(|datastore| datastore.object.name == name)
        .ok_or_else(|| VsphereCliError::DatastoreNotFound(name.to_string()))
}

pub async fn find_all_in_folder(
    api: &dyn InventoryApi,
    folder: &ManagedObject,
    kind: ObjectKind,
) -> CliResult<Vec<ManagedObject>> {
    Ok(api
        .child_entities(folder)
        .await?
        .into_iter()
        .filter(|child| child.kind == kind)
        .collect())
}

pub async fn find_in_folder(
    api: &dyn InventoryApi,
    folder: &ManagedObject,
    kind: ObjectKind,
    name: &str,
) -> CliResult<Option<ManagedObject>> {
    Ok(find_all_in_folder(api, folder, kind)
        .await?
        .into_iter()
        .find(|child| child.name == name))
}

/// Every cluster below `folder`, in depth-first order.
pub fn traverse_folders_for_pools<'a>(
    api: &'a dyn InventoryApi,
    folder: &'a ManagedObject,
) -> BoxFuture<'a, CliResult<Vec<ManagedObject>>> {
    collect_below(api, folder, ObjectKind::ClusterComputeResource)
}

/// Every standalone compute resource below `folder`, in depth-first order.
pub fn traverse_folders_for_computeresources<'a>(
    api: &'a dyn InventoryApi,
    folder: &'a ManagedObject,
) -> BoxFuture<'a, CliResult<Vec<ManagedObject>>> {
    collect_below(api, folder, ObjectKind::ComputeResource)
}

fn collect_below<'a>(
    api: &'a dyn InventoryApi,
    folder: &'a ManagedObject,
    kind: ObjectKind,
) -> BoxFuture<'a, CliResult<Vec<ManagedObject>>> {
    async move {
        let mut found = Vec::new();
        for child in api.child_entities(folder).await? {
            if child.kind == kind {
                found.push(child);
            } else if child.kind == ObjectKind::Folder {
                found.extend(collect_below(api, &child, kind).await?);
            }
        }
        Ok(found)
    }
    .boxed()
}

/// First VM named `name` below `folder`, searched depth-first.
pub fn traverse_folders_for_vm<'a>(
    api: &'a dyn InventoryApi,
    folder: &'a ManagedObject,
    name: &'a str,
) -> BoxFuture<'a, CliResult<Option<ManagedObject>>> {
    async move {
        for child in api.child_entities(folder).await? {
            match child.kind {
                ObjectKind::VirtualMachine if child.name == name => return Ok(Some(child)),
                ObjectKind::Folder => {
                    if let Some(vm) = traverse_folders_for_vm(api, &child, name).await? {
                        return Ok(Some(vm));
                    }
                }
                _ => {}
            }
        }
        Ok(None)
    }
    .boxed()
}

fn not_found(kind: &'static str, path: &str, segment: &str) -> VsphereCliError {
    VsphereCliError::PathNotFound {
        kind,
        path: path.to_string(),
        segment: segment.to_string(),
    }
}

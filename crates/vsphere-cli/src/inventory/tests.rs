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

// Resolver behaviour against an in-memory inventory. Specific
// "categories" are:
//
// Path Walking  - segment splitting, descent and not-found reporting.
// Pool Walking  - per-kind child dispatch and root pool normalisation.
// Traversal     - recursive collection of clusters, compute resources and VMs.
// Flat Lookups  - networks and datastores by name.
// REST Mapping  - the vCenter REST calls behind each InventoryApi method.

use super::mock::*;
use super::mock_server as ms;
use super::resolver::*;
use super::*;
use crate::errors::VsphereCliError;

// A VM folder tree: vm -> a -> b -> c, plus a pool sitting
// next to a folder at the root.
fn folder_tree() -> MockInventory {
    let dc = datacenter();
    MockInventory::new()
        .with_children(
            &dc.vm_folder,
            vec![folder("group-v10", "a"), pool("resgroup-1", "PoolX")],
        )
        .with_children(&folder("group-v10", "a"), vec![folder("group-v11", "b")])
        .with_children(&folder("group-v11", "b"), vec![folder("group-v12", "c")])
}

/////////////////////////////////////////////////////////////////////////////
// Path Walking

#[test]
fn path_segments_skips_empty_segments() {
    assert_eq!(path_segments("/a//b/").collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(path_segments("").count(), 0);
    assert_eq!(path_segments("/").count(), 0);
    assert_eq!(path_segments("//").count(), 0);
}

#[tokio::test]
async fn find_folder_walks_full_path() {
    let api = folder_tree();
    let found = find_folder(&api, &datacenter(), "/a/b/c").await.unwrap();
    assert_eq!(found, folder("group-v12", "c"));
}

#[tokio::test]
async fn find_folder_reports_first_unmatched_segment() {
    let api = folder_tree();
    let err = find_folder(&api, &datacenter(), "/a/x/c")
        .await
        .expect_err("x does not exist");

    match err {
        VsphereCliError::PathNotFound {
            kind,
            path,
            segment,
        } => {
            assert_eq!(kind, "folder");
            assert_eq!(path, "/a/x/c");
            assert_eq!(segment, "x");
        }
        other => panic!("expected PathNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_paths_resolve_to_root() {
    let api = folder_tree();
    let dc = datacenter();
    for path in ["", "/", "//"] {
        assert_eq!(find_folder(&api, &dc, path).await.unwrap(), dc.vm_folder);
        assert_eq!(find_pool(&api, &dc, path).await.unwrap(), dc.host_folder);
    }
}

#[tokio::test]
async fn folder_path_only_descends_into_folders() {
    let api = folder_tree();
    let dc = datacenter();

    let found = find_folder(&api, &dc, "a").await.unwrap();
    assert_eq!(found.kind, ObjectKind::Folder);

    let err = find_folder(&api, &dc, "PoolX")
        .await
        .expect_err("a pool is not a folder");
    assert!(matches!(err, VsphereCliError::PathNotFound { segment, .. } if segment == "PoolX"));
}

#[tokio::test]
async fn find_datacenter_by_exact_name() {
    let api = MockInventory::new();
    assert_eq!(find_datacenter(&api, DC_NAME).await.unwrap(), datacenter());

    let err = find_datacenter(&api, "dc1").await.expect_err("names are case sensitive");
    assert!(matches!(err, VsphereCliError::DatacenterNotFound(name) if name == "dc1"));
}

/////////////////////////////////////////////////////////////////////////////
// Pool Walking

fn pool_tree() -> MockInventory {
    let dc = datacenter();
    let prod = cluster("domain-c8", "Prod");
    let root = pool("resgroup-9", "Resources");
    let web = pool("resgroup-20", "web");
    MockInventory::new()
        .with_children(
            &dc.host_folder,
            vec![folder("group-h30", "Site"), vm("vm-1", "stray")],
        )
        .with_children(&folder("group-h30", "Site"), vec![prod.clone()])
        .with_root_pool(&prod, root.clone())
        .with_pools(&root, vec![web.clone()])
        .with_pools(&web, vec![pool("resgroup-21", "frontend")])
}

#[tokio::test]
async fn pool_path_ending_on_cluster_returns_root_pool() {
    let api = pool_tree();
    let found = find_pool(&api, &datacenter(), "Site/Prod").await.unwrap();
    assert_eq!(found, pool("resgroup-9", "Resources"));
}

#[tokio::test]
async fn pool_path_descends_through_cluster_and_pools() {
    let api = pool_tree();
    let found = find_pool(&api, &datacenter(), "/Site/Prod/web/frontend")
        .await
        .unwrap();
    assert_eq!(found, pool("resgroup-21", "frontend"));
}

#[tokio::test]
async fn pool_path_miss_names_pool_and_segment() {
    let api = pool_tree();
    let err = find_pool(&api, &datacenter(), "Site/Prod/db")
        .await
        .expect_err("db does not exist");
    assert!(matches!(
        err,
        VsphereCliError::PathNotFound { kind: "pool", segment, .. } if segment == "db"
    ));
}

#[tokio::test]
async fn pool_path_through_vm_is_unexpected_kind() {
    let api = pool_tree();
    let err = find_pool(&api, &datacenter(), "stray/anything")
        .await
        .expect_err("a VM has no child pools");
    assert!(matches!(
        err,
        VsphereCliError::UnexpectedObjectKind {
            kind: ObjectKind::VirtualMachine,
            ..
        }
    ));
}

/////////////////////////////////////////////////////////////////////////////
// Traversal

fn host_tree() -> MockInventory {
    let dc = datacenter();
    MockInventory::new()
        .with_children(
            &dc.host_folder,
            vec![
                compute_resource("host-50", "esx-standalone"),
                folder("group-h30", "Site"),
                cluster("domain-c8", "Prod"),
            ],
        )
        .with_children(
            &folder("group-h30", "Site"),
            vec![cluster("domain-c9", "Dev"), compute_resource("host-51", "esx-lab")],
        )
}

#[tokio::test]
async fn traverse_collects_clusters_depth_first() {
    let api = host_tree();
    let dc = datacenter();
    let clusters = traverse_folders_for_pools(&api, &dc.host_folder).await.unwrap();
    let names: Vec<_> = clusters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Dev", "Prod"]);
}

#[tokio::test]
async fn traverse_collects_compute_resources() {
    let api = host_tree();
    let dc = datacenter();
    let computes = traverse_folders_for_computeresources(&api, &dc.host_folder)
        .await
        .unwrap();
    let names: Vec<_> = computes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["esx-standalone", "esx-lab"]);
}

#[tokio::test]
async fn traverse_finds_nested_vm() {
    let dc = datacenter();
    let api = MockInventory::new()
        .with_children(&dc.vm_folder, vec![folder("group-v10", "a"), vm("vm-1", "other")])
        .with_children(&folder("group-v10", "a"), vec![vm("vm-7", "web01")]);

    let found = traverse_folders_for_vm(&api, &dc.vm_folder, "web01").await.unwrap();
    assert_eq!(found, Some(vm("vm-7", "web01")));

    let missing = traverse_folders_for_vm(&api, &dc.vm_folder, "nope").await.unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn find_in_folder_filters_by_kind() {
    let api = folder_tree();
    let dc = datacenter();

    let pools = find_all_in_folder(&api, &dc.vm_folder, ObjectKind::ResourcePool)
        .await
        .unwrap();
    assert_eq!(pools, vec![pool("resgroup-1", "PoolX")]);

    let none = find_in_folder(&api, &dc.vm_folder, ObjectKind::Folder, "PoolX")
        .await
        .unwrap();
    assert_eq!(none, None);
}

/////////////////////////////////////////////////////////////////////////////
// Flat Lookups

#[tokio::test]
async fn find_network_and_datastore_by_name() {
    let api = MockInventory::new()
        .with_networks(vec![
            standard_network("network-11", "VM Network"),
            portgroup("dvportgroup-21", "VLAN10"),
        ])
        .with_datastores(vec![Datastore {
            object: ManagedObject::new(ObjectKind::Datastore, "datastore-14", "ds1"),
            datastore_type: Some("VMFS".to_string()),
            capacity: Some(1024),
            free_space: Some(512),
        }]);
    let dc = datacenter();

    let network = find_network(&api, &dc, "VLAN10").await.unwrap();
    assert_eq!(network.key.as_deref(), Some("dvportgroup-21"));
    assert!(network.is_distributed_portgroup());

    let datastore = find_datastore(&api, &dc, "ds1").await.unwrap();
    assert_eq!(datastore.object.id, "datastore-14");

    assert!(matches!(
        find_network(&api, &dc, "VLAN99").await,
        Err(VsphereCliError::NetworkNotFound(_))
    ));
    assert!(matches!(
        find_datastore(&api, &dc, "ds9").await,
        Err(VsphereCliError::DatastoreNotFound(_))
    ));
}

/////////////////////////////////////////////////////////////////////////////
// REST Mapping

// rest_find_datacenter_reads_root_folders ensures the datacenter
// lookup fills in all four root folders from the datacenter info.
#[tokio::test]
async fn rest_find_datacenter_reads_root_folders() {
    let mut server = ms::create_mock_http_server().await;
    let _login = ms::add_login(&mut server).await;
    let _dc = ms::add_datacenter(&mut server).await;

    let api = ms::connect(&server).await;
    let dc = find_datacenter(&api, DC_NAME).await.unwrap();

    assert_eq!(dc, datacenter());
}

// rest_missing_datacenter_is_not_found ensures a name the list
// call does not return exactly is reported as missing.
#[tokio::test]
async fn rest_missing_datacenter_is_not_found() {
    let mut server = ms::create_mock_http_server().await;
    let _login = ms::add_login(&mut server).await;
    let _list = ms::add_get(&mut server, "/api/vcenter/datacenter", &[("names", "DC9")], "[]").await;

    let api = ms::connect(&server).await;
    let err = find_datacenter(&api, "DC9").await.unwrap_err();

    assert!(matches!(err, VsphereCliError::DatacenterNotFound(name) if name == "DC9"));
}

// rest_child_entities_merges_per_kind_lists ensures a folder's
// children come from the folder, cluster, standalone host and VM
// lists, in that order and with the matching kinds.
#[tokio::test]
async fn rest_child_entities_merges_per_kind_lists() {
    let mut server = ms::create_mock_http_server().await;
    let _login = ms::add_login(&mut server).await;
    let _children = ms::add_folder_children(
        &mut server,
        "group-h4",
        r#"[{"folder":"group-h10","name":"Lab","type":"HOST"}]"#,
        r#"[{"cluster":"domain-c8","name":"Prod"}]"#,
        r#"[{"host":"host-50","name":"esx-lab"}]"#,
        r#"[{"vm":"vm-42","name":"web01"}]"#,
    )
    .await;

    let api = ms::connect(&server).await;
    let children = api.child_entities(&datacenter().host_folder).await.unwrap();

    assert_eq!(
        children,
        vec![
            folder("group-h10", "Lab"),
            cluster("domain-c8", "Prod"),
            compute_resource("host-50", "esx-lab"),
            vm("vm-42", "web01"),
        ]
    );
}

// rest_root_pool_of_cluster_follows_cluster_info ensures a
// cluster's root pool id comes from the cluster and its name from
// the pool.
#[tokio::test]
async fn rest_root_pool_of_cluster_follows_cluster_info() {
    let mut server = ms::create_mock_http_server().await;
    let _login = ms::add_login(&mut server).await;
    let _cluster = ms::add_get(
        &mut server,
        "/api/vcenter/cluster/domain-c8",
        &[],
        r#"{"name":"Prod","resource_pool":"resgroup-9"}"#,
    )
    .await;
    let _pool = ms::add_get(
        &mut server,
        "/api/vcenter/resource-pool/resgroup-9",
        &[],
        r#"{"name":"Resources"}"#,
    )
    .await;

    let api = ms::connect(&server).await;
    let root = api.root_pool(&cluster("domain-c8", "Prod")).await.unwrap();

    assert_eq!(root, pool("resgroup-9", "Resources"));
}

// rest_root_pool_of_standalone_host_queries_resources ensures a
// standalone compute resource's root pool is the host's
// "Resources" pool.
#[tokio::test]
async fn rest_root_pool_of_standalone_host_queries_resources() {
    let mut server = ms::create_mock_http_server().await;
    let _login = ms::add_login(&mut server).await;
    let pools = ms::add_get(
        &mut server,
        "/api/vcenter/resource-pool",
        &[("hosts", "host-50"), ("names", "Resources")],
        r#"[{"resource_pool":"resgroup-51","name":"Resources"}]"#,
    )
    .await;

    let api = ms::connect(&server).await;
    let root = api
        .root_pool(&compute_resource("host-50", "esx-lab"))
        .await
        .unwrap();

    pools.assert_async().await;
    assert_eq!(root, pool("resgroup-51", "Resources"));
}

// rest_hosts_use_cluster_or_host_filter ensures hosts of a cluster
// are listed by cluster and a standalone compute resource by its
// own host id.
#[tokio::test]
async fn rest_hosts_use_cluster_or_host_filter() {
    let mut server = ms::create_mock_http_server().await;
    let _login = ms::add_login(&mut server).await;
    let _by_cluster = ms::add_get(
        &mut server,
        "/api/vcenter/host",
        &[("clusters", "domain-c8")],
        r#"[{"host":"host-10","name":"esx01"},{"host":"host-11","name":"esx02"}]"#,
    )
    .await;
    let _by_host = ms::add_get(
        &mut server,
        "/api/vcenter/host",
        &[("hosts", "host-50")],
        r#"[{"host":"host-50","name":"esx-lab"}]"#,
    )
    .await;

    let api = ms::connect(&server).await;
    let clustered = api.hosts(&cluster("domain-c8", "Prod")).await.unwrap();
    let standalone = api
        .hosts(&compute_resource("host-50", "esx-lab"))
        .await
        .unwrap();

    assert_eq!(clustered, vec![host("host-10", "esx01"), host("host-11", "esx02")]);
    assert_eq!(standalone, vec![host("host-50", "esx-lab")]);
}

// rest_vm_devices_maps_nic_backings ensures distributed and
// standard backings are told apart and disks follow the NICs.
#[tokio::test]
async fn rest_vm_devices_maps_nic_backings() {
    let mut server = ms::create_mock_http_server().await;
    let _login = ms::add_login(&mut server).await;
    let _devices = ms::add_web01_devices(&mut server).await;

    let api = ms::connect(&server).await;
    let devices = api.vm_devices(&vm("vm-42", "web01")).await.unwrap();

    assert_eq!(
        devices,
        vec![
            nic("Network adapter 1", "dvportgroup-21"),
            VirtualDevice::EthernetCard {
                label: "Network adapter 2".to_string(),
                backing: NicBacking::StandardNetwork {
                    network: "network-11".to_string(),
                },
            },
            VirtualDevice::Disk {
                label: "Hard disk 1".to_string(),
                capacity: Some(17179869184),
            },
        ]
    );
}

// rest_networks_key_distributed_port_groups_by_id ensures only
// distributed port groups carry a key, and that it is the network id.
#[tokio::test]
async fn rest_networks_key_distributed_port_groups_by_id() {
    let mut server = ms::create_mock_http_server().await;
    let _login = ms::add_login(&mut server).await;
    let _networks = ms::add_networks(&mut server).await;

    let api = ms::connect(&server).await;
    let networks = api.networks(&datacenter()).await.unwrap();

    assert_eq!(
        networks,
        vec![
            standard_network("network-11", "VM Network"),
            portgroup("dvportgroup-21", "VLAN10"),
            portgroup("dvportgroup-22", "VLAN20"),
        ]
    );
}

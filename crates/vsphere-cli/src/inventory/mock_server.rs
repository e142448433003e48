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

// mockito-backed vCenter for tests that go through the REST
// inventory mapping.

use mockito::{Matcher, Mock, ServerGuard};

use crate::cfg::config_file::ConnectionConfig;
use crate::inventory::mock::DC_NAME;
use crate::rpc::ApiClient;

pub const USER: &str = "administrator@vsphere.local";
pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "b00a7f2c5e1d3f4a";

pub async fn create_mock_http_server() -> ServerGuard {
    mockito::Server::new_async().await
}

// connection_config points a plain http connection at `server`.
pub fn connection_config(server: &ServerGuard) -> ConnectionConfig {
    let address = server.socket_address();
    ConnectionConfig {
        host: address.ip().to_string(),
        user: USER.to_string(),
        password: PASSWORD.to_string(),
        datacenter: DC_NAME.to_string(),
        path: "/api".to_string(),
        port: address.port(),
        ssl: false,
        insecure: false,
        folder: String::new(),
    }
}

pub async fn add_login(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/api/session")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(format!("\"{TOKEN}\""))
        .create_async()
        .await
}

// add_get answers one GET whose query carries every pair in
// `query`. An empty `query` only matches requests without one.
pub async fn add_get(
    server: &mut ServerGuard,
    path: &str,
    query: &[(&str, &str)],
    response_body: &str,
) -> Mock {
    let query = match query {
        [] => Matcher::Missing,
        pairs => Matcher::AllOf(
            pairs
                .iter()
                .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.to_string()))
                .collect(),
        ),
    };
    server
        .mock("GET", path)
        .match_query(query)
        .match_header("vmware-api-session-id", TOKEN)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(response_body)
        .create_async()
        .await
}

// add_datacenter serves the lookup of DC1 with the same folder
// ids as `mock::datacenter()`.
pub async fn add_datacenter(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
        add_get(
            server,
            "/api/vcenter/datacenter",
            &[("names", DC_NAME)],
            r#"[{"datacenter":"datacenter-2","name":"DC1"}]"#,
        )
        .await,
        add_get(
            server,
            "/api/vcenter/datacenter/datacenter-2",
            &[],
            r#"{
                "name":"DC1",
                "datastore_folder":"group-s6",
                "host_folder":"group-h4",
                "network_folder":"group-n5",
                "vm_folder":"group-v3"
            }"#,
        )
        .await,
    ]
}

// add_folder_children serves the four list calls that make up a
// folder's children. Each body is a JSON array.
pub async fn add_folder_children(
    server: &mut ServerGuard,
    folder: &str,
    folders: &str,
    clusters: &str,
    standalone_hosts: &str,
    vms: &str,
) -> Vec<Mock> {
    vec![
        add_get(server, "/api/vcenter/folder", &[("parent_folders", folder)], folders).await,
        add_get(server, "/api/vcenter/cluster", &[("folders", folder)], clusters).await,
        add_get(
            server,
            "/api/vcenter/host",
            &[("folders", folder), ("standalone", "true")],
            standalone_hosts,
        )
        .await,
        add_get(server, "/api/vcenter/vm", &[("folders", folder)], vms).await,
    ]
}

// add_web01_devices serves vm-42 with a distributed NIC, a
// standard NIC and one disk.
pub async fn add_web01_devices(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
        add_get(
            server,
            "/api/vcenter/vm/vm-42/hardware/ethernet",
            &[],
            r#"[{"nic":"4000"},{"nic":"4001"}]"#,
        )
        .await,
        add_get(
            server,
            "/api/vcenter/vm/vm-42/hardware/ethernet/4000",
            &[],
            r#"{
                "label":"Network adapter 1",
                "type":"VMXNET3",
                "backing":{"type":"DISTRIBUTED_PORTGROUP","network":"dvportgroup-21"}
            }"#,
        )
        .await,
        add_get(
            server,
            "/api/vcenter/vm/vm-42/hardware/ethernet/4001",
            &[],
            r#"{
                "label":"Network adapter 2",
                "type":"E1000",
                "backing":{"type":"STANDARD_PORTGROUP","network":"network-11","network_name":"VM Network"}
            }"#,
        )
        .await,
        add_get(
            server,
            "/api/vcenter/vm/vm-42/hardware/disk",
            &[],
            r#"[{"disk":"2000"}]"#,
        )
        .await,
        add_get(
            server,
            "/api/vcenter/vm/vm-42/hardware/disk/2000",
            &[],
            r#"{"label":"Hard disk 1","type":"SCSI","capacity":17179869184}"#,
        )
        .await,
    ]
}

// add_networks serves one standard network and two distributed
// port groups for datacenter-2.
pub async fn add_networks(server: &mut ServerGuard) -> Mock {
    add_get(
        server,
        "/api/vcenter/network",
        &[("datacenters", "datacenter-2")],
        r#"[
            {"network":"network-11","name":"VM Network","type":"STANDARD_PORTGROUP"},
            {"network":"dvportgroup-21","name":"VLAN10","type":"DISTRIBUTED_PORTGROUP"},
            {"network":"dvportgroup-22","name":"VLAN20","type":"DISTRIBUTED_PORTGROUP"}
        ]"#,
    )
    .await
}

pub async fn connect(server: &ServerGuard) -> ApiClient {
    ApiClient::connect(&connection_config(server))
        .await
        .expect("login should succeed")
}

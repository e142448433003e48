mod vsphere_api;
pub mod vsphere_model;

use std::string::String;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, ClientBuilder, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::vsphere_api::VsphereApi;
use crate::vsphere_model::*;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const SESSION_HEADER: &str = "vmware-api-session-id";
const MAX_BODY_BYTES: u64 = 20 * 1024 * 1024;

#[derive(thiserror::Error, Debug)]
pub enum VsphereApiError {
    #[error("Network error talking to vSphere server at {url}. {source}")]
    NetworkError { url: String, source: reqwest::Error },

    #[error("HTTP {status_code} at {url}: {response_body}")]
    HTTPErrorCode {
        url: String,
        status_code: StatusCode,
        response_body: String,
    },

    #[error("API error {status}: {message} at {url}")]
    APIError {
        url: String,
        status: StatusCode,
        message: String,
    },

    #[error("API error {status}: no response at {url}")]
    APINoResponseError { url: String, status: StatusCode },

    #[error("Could not deserialize response from {url}. Body: {body}. {source}")]
    JsonDeserializeError {
        url: String,
        body: String,
        source: serde_json::Error,
    },

    #[error("Remote returned empty body at {url}, {source}")]
    NoContent { url: String, source: reqwest::Error },

    #[error("Login failure for user {user} at {url}: {reason}")]
    LoginFailure {
        url: String,
        user: String,
        reason: String,
    },

    #[error("Reqwest error: '{0}'")]
    ReqwestError(#[from] reqwest::Error),
}

/// Where and as whom to connect. `base_url` already carries scheme, port and
/// the API path, e.g. `https://vcenter.example.com:443/api`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Endpoint {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl Endpoint {
    pub fn new(use_ssl: bool, host: &str, port: u16, path: &str) -> Self {
        let scheme = if use_ssl { "https" } else { "http" };
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() || path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Endpoint {
            base_url: format!("{scheme}://{host}:{port}{path}"),
            ..Default::default()
        }
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = username.to_string();
        self.password = password.to_string();
        self
    }
}

#[derive(Clone, Debug)]
pub struct VsphereClientPoolBuilder {
    pub timeout: Duration,
    pub accept_invalid_certs: bool,
}

impl VsphereClientPoolBuilder {
    pub fn build(&self) -> Result<VsphereClientPool, VsphereApiError> {
        let client = ClientBuilder::new()
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .timeout(self.timeout)
            .build()?;

        Ok(VsphereClientPool { client })
    }
}

#[derive(Debug, Clone)]
pub struct VsphereClientPool {
    client: HttpClient,
}

impl VsphereClientPool {
    pub fn builder(allow_insecure: bool) -> VsphereClientPoolBuilder {
        VsphereClientPoolBuilder {
            timeout: DEFAULT_TIMEOUT,
            // vCenter appliances frequently run with self-signed certs
            accept_invalid_certs: allow_insecure,
        }
    }

    /// Opens an authenticated session against `endpoint`. The returned
    /// client sends the session token on every call until `logout`.
    pub async fn create_client(&self, endpoint: Endpoint) -> Result<Box<dyn Vsphere>, VsphereApiError> {
        let mut api = VsphereApiClient::new(self.client.clone(), endpoint);
        api.login().await?;
        Ok(Box::new(VsphereApi::new(api)))
    }
}

#[derive(Debug, Clone)]
pub struct VsphereApiClient {
    endpoint: Endpoint,
    client: HttpClient,
    session_id: Option<String>,
}

impl VsphereApiClient {
    pub fn new(client: HttpClient, endpoint: Endpoint) -> Self {
        Self {
            client,
            endpoint,
            session_id: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.endpoint.base_url
    }

    /// POST /session with basic auth. The body of a successful reply is the
    /// session token as a JSON string.
    pub async fn login(&mut self) -> Result<(), VsphereApiError> {
        let url = format!("{}/session", self.endpoint.base_url);
        let (_status, token) = match self.req::<String>(Method::POST, "session").await {
            Ok((status, Some(token))) => (status, token),
            Ok((status, None)) => {
                return Err(VsphereApiError::APINoResponseError { url, status });
            }
            Err(VsphereApiError::HTTPErrorCode {
                status_code,
                response_body,
                ..
            }) if status_code == StatusCode::UNAUTHORIZED
                || status_code == StatusCode::FORBIDDEN =>
            {
                return Err(VsphereApiError::LoginFailure {
                    url,
                    user: self.endpoint.username.clone(),
                    reason: format!("{status_code}: {response_body}"),
                });
            }
            Err(e) => return Err(e),
        };
        info!(
            "Opened vSphere session at {} as {}",
            self.endpoint.base_url, self.endpoint.username
        );
        self.session_id = Some(token);
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), VsphereApiError> {
        self.req::<serde_json::Value>(Method::DELETE, "session")
            .await?;
        info!("Closed vSphere session at {}", self.endpoint.base_url);
        Ok(())
    }

    pub async fn get<T>(&self, api: &str) -> Result<(StatusCode, T), VsphereApiError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
    {
        let (status_code, resp_opt) = self.req::<T>(Method::GET, api).await?;
        match resp_opt {
            Some(response_body) => Ok((status_code, response_body)),
            None => Err(VsphereApiError::APINoResponseError {
                url: format!("{}/{}", self.endpoint.base_url, api),
                status: status_code,
            }),
        }
    }

    async fn req<T>(
        &self,
        method: Method,
        api: &str,
    ) -> Result<(StatusCode, Option<T>), VsphereApiError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
    {
        let url = format!("{}/{}", self.endpoint.base_url, api);

        let mut req_b = match method {
            Method::GET => self.client.get(&url),
            Method::POST => self.client.post(&url),
            Method::DELETE => self.client.delete(&url),
            _ => unreachable!("Only GET, POST and DELETE http methods are used."),
        };
        req_b = req_b.header(ACCEPT, HeaderValue::from_static("application/json"));
        req_b = req_b.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        req_b = req_b.header(USER_AGENT, HeaderValue::from_static("libvsphere/0.1"));
        match self.session_id.as_ref() {
            Some(session_id) => req_b = req_b.header(SESSION_HEADER, session_id),
            None => {
                req_b = req_b.basic_auth(&self.endpoint.username, Some(&self.endpoint.password))
            }
        }
        debug!("TX {method} {url}");
        let response = req_b.send().await.map_err(|e| VsphereApiError::NetworkError {
            url: url.clone(),
            source: e,
        })?;
        let status_code = response.status();
        // check content length in case of junk responses
        if let Some(len) = response.content_length()
            && len > MAX_BODY_BYTES
        {
            return Err(VsphereApiError::APIError {
                url,
                status: status_code,
                message: format!("Content length {len} exceeds 20MB limit"),
            });
        }
        let response_buffer = response
            .bytes()
            .await
            .map_err(|e| VsphereApiError::NoContent {
                url: url.clone(),
                source: e,
            })?;
        let response_body = String::from_utf8_lossy(&response_buffer).to_string();
        debug!("RX {status_code} {}", truncate(&response_body, 1500));

        if !status_code.is_success() {
            return Err(VsphereApiError::HTTPErrorCode {
                url,
                status_code,
                response_body,
            });
        }

        if response_body.is_empty() {
            return Ok((status_code, None));
        }
        serde_json::from_str(&response_body)
            .map(|v| (status_code, Some(v)))
            .map_err(|e| VsphereApiError::JsonDeserializeError {
                url,
                body: response_body,
                source: e,
            })
    }
}

fn truncate(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// One method per vSphere Automation REST call the inventory commands use.
/// Ids are managed object reference values (`group-v3`, `domain-c8`, ...).
#[async_trait::async_trait]
pub trait Vsphere: Send + Sync + 'static {
    fn base_url(&self) -> &str;
    async fn logout(&self) -> Result<(), VsphereApiError>;

    async fn list_datacenters(&self, name: &str) -> Result<Vec<DatacenterSummary>, VsphereApiError>;
    async fn get_datacenter(&self, id: &str) -> Result<DatacenterInfo, VsphereApiError>;

    async fn list_folders(&self, parent_folder: &str) -> Result<Vec<FolderSummary>, VsphereApiError>;
    async fn list_clusters(&self, folder: &str) -> Result<Vec<ClusterSummary>, VsphereApiError>;
    async fn get_cluster(&self, id: &str) -> Result<ClusterInfo, VsphereApiError>;
    async fn list_resource_pools(
        &self,
        filter: &ResourcePoolFilter,
    ) -> Result<Vec<ResourcePoolSummary>, VsphereApiError>;
    async fn get_resource_pool(&self, id: &str) -> Result<ResourcePoolInfo, VsphereApiError>;
    async fn list_hosts(&self, filter: &HostFilter) -> Result<Vec<HostSummary>, VsphereApiError>;
    async fn list_vms(&self, folder: &str) -> Result<Vec<VmSummary>, VsphereApiError>;

    async fn list_ethernet(&self, vm: &str) -> Result<Vec<EthernetSummary>, VsphereApiError>;
    async fn get_ethernet(&self, vm: &str, nic: &str) -> Result<EthernetInfo, VsphereApiError>;
    async fn list_disks(&self, vm: &str) -> Result<Vec<DiskSummary>, VsphereApiError>;
    async fn get_disk(&self, vm: &str, disk: &str) -> Result<DiskInfo, VsphereApiError>;

    async fn list_networks(&self, datacenter: &str) -> Result<Vec<NetworkSummary>, VsphereApiError>;
    async fn list_datastores(
        &self,
        datacenter: &str,
    ) -> Result<Vec<DatastoreSummary>, VsphereApiError>;
}

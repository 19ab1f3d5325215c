//! HTTP/JSON transport for the AAP service.
//!
//! Resources live under `<target>/v1/applications`; application-scoped
//! resources nest below `/v1/applications/{application_id}/...`. Each call
//! drives `reqwest` on a current-thread runtime owned by the client.

use crate::client::AapClient;
use crate::error::ClientError;
use crate::models::{
    Application, ApplicationUpdate, Identity, IdentitySource, IdentityUpdate, ListQuery,
    NamedRecordUpdate, NewApplication, NewIdentity, NewNamedRecord, Tenant,
};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::debug;

const AAP_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const AAP_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const API_VERSION: &str = "v1";

const APPLICATIONS: &str = "applications";
const IDENTITY_SOURCES: &str = "identity-sources";
const IDENTITIES: &str = "identities";
const TENANTS: &str = "tenants";

/// Map transport failures to client errors.
fn map_http_error(error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::Request(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ClientError::Request(format!("Connection error: {}", error))
    } else {
        ClientError::Request(format!("HTTP error: {}", error))
    }
}

/// Parse a target such as `localhost:9092` or `https://aap.example.com` into a base URL.
pub fn parse_target(target: &str) -> Result<Url, ClientError> {
    let trimmed = target.trim();
    if trimmed.is_empty() {
        return Err(ClientError::InvalidTarget(target.to_string()));
    }
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };
    let url = Url::parse(&candidate).map_err(|_| ClientError::InvalidTarget(target.to_string()))?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(ClientError::InvalidTarget(target.to_string())),
    }
}

/// AAP client speaking JSON over HTTP.
pub struct HttpAapClient {
    client: Client,
    runtime: Runtime,
    target: String,
    base_url: Url,
}

impl HttpAapClient {
    pub fn new(target: &str) -> Result<Self, ClientError> {
        let base_url = parse_target(target)?;
        let client = Client::builder()
            .connect_timeout(AAP_HTTP_CONNECT_TIMEOUT)
            .timeout(AAP_HTTP_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Runtime(format!("Failed to create HTTP client: {}", e)))?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Runtime(format!("Failed to create runtime: {}", e)))?;
        Ok(Self {
            client,
            runtime,
            target: target.to_string(),
            base_url,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Absolute URL for `/v1/<segments...>`; segments are percent-encoded.
    pub fn endpoint<I>(&self, segments: I) -> Result<Url, ClientError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidTarget(self.target.clone()))?
            .pop_if_empty()
            .push(API_VERSION)
            .extend(segments);
        Ok(url)
    }

    fn request<I>(&self, method: Method, segments: I) -> Result<RequestBuilder, ClientError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let url = self.endpoint(segments)?;
        debug!(method = %method, url = %url, "AAP request");
        Ok(self.client.request(method, url))
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        self.runtime.block_on(async {
            let response = request.send().await.map_err(map_http_error)?;
            let status = response.status();
            if !status.is_success() {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(ClientError::Status {
                    status: status.as_u16(),
                    message,
                });
            }
            response
                .json::<T>()
                .await
                .map_err(|e| ClientError::Decode(e.to_string()))
        })
    }

    fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: Vec<String>,
        body: &B,
    ) -> Result<T, ClientError> {
        let request = self.request(method, segments)?.json(body);
        self.send(request)
    }

    fn list<T: DeserializeOwned>(
        &self,
        segments: Vec<String>,
        query: &ListQuery,
    ) -> Result<Vec<T>, ClientError> {
        let request = self.request(Method::GET, segments)?.query(query);
        self.send(request)
    }

    fn delete<T: DeserializeOwned>(&self, segments: Vec<String>) -> Result<T, ClientError> {
        let request = self.request(Method::DELETE, segments)?;
        self.send(request)
    }
}

fn application_path(application_id: i64) -> Vec<String> {
    vec![APPLICATIONS.to_string(), application_id.to_string()]
}

fn scoped_path(application_id: i64, collection: &str, id: Option<&str>) -> Vec<String> {
    let mut segments = application_path(application_id);
    segments.push(collection.to_string());
    if let Some(id) = id {
        segments.push(id.to_string());
    }
    segments
}

impl AapClient for HttpAapClient {
    fn create_application(&self, application: &NewApplication) -> Result<Application, ClientError> {
        self.send_json(Method::POST, vec![APPLICATIONS.to_string()], application)
    }

    fn update_application(
        &self,
        application: &ApplicationUpdate,
    ) -> Result<Application, ClientError> {
        self.send_json(
            Method::PUT,
            application_path(application.application_id),
            application,
        )
    }

    fn delete_application(&self, application_id: i64) -> Result<Application, ClientError> {
        self.delete(application_path(application_id))
    }

    fn fetch_applications(&self, query: &ListQuery) -> Result<Vec<Application>, ClientError> {
        self.list(vec![APPLICATIONS.to_string()], query)
    }

    fn create_identity_source(
        &self,
        identity_source: &NewNamedRecord,
    ) -> Result<IdentitySource, ClientError> {
        self.send_json(
            Method::POST,
            scoped_path(identity_source.application_id, IDENTITY_SOURCES, None),
            identity_source,
        )
    }

    fn update_identity_source(
        &self,
        identity_source: &NamedRecordUpdate,
    ) -> Result<IdentitySource, ClientError> {
        self.send_json(
            Method::PUT,
            scoped_path(
                identity_source.application_id,
                IDENTITY_SOURCES,
                Some(&identity_source.id),
            ),
            identity_source,
        )
    }

    fn delete_identity_source(
        &self,
        application_id: i64,
        identity_source_id: &str,
    ) -> Result<IdentitySource, ClientError> {
        self.delete(scoped_path(
            application_id,
            IDENTITY_SOURCES,
            Some(identity_source_id),
        ))
    }

    fn fetch_identity_sources(
        &self,
        application_id: i64,
        query: &ListQuery,
    ) -> Result<Vec<IdentitySource>, ClientError> {
        self.list(scoped_path(application_id, IDENTITY_SOURCES, None), query)
    }

    fn create_identity(&self, identity: &NewIdentity) -> Result<Identity, ClientError> {
        self.send_json(
            Method::POST,
            scoped_path(identity.application_id, IDENTITIES, None),
            identity,
        )
    }

    fn update_identity(&self, identity: &IdentityUpdate) -> Result<Identity, ClientError> {
        self.send_json(
            Method::PUT,
            scoped_path(
                identity.application_id,
                IDENTITIES,
                Some(&identity.identity_id),
            ),
            identity,
        )
    }

    fn delete_identity(
        &self,
        application_id: i64,
        identity_id: &str,
    ) -> Result<Identity, ClientError> {
        self.delete(scoped_path(application_id, IDENTITIES, Some(identity_id)))
    }

    fn fetch_identities(
        &self,
        application_id: i64,
        query: &ListQuery,
    ) -> Result<Vec<Identity>, ClientError> {
        self.list(scoped_path(application_id, IDENTITIES, None), query)
    }

    fn create_tenant(&self, tenant: &NewNamedRecord) -> Result<Tenant, ClientError> {
        self.send_json(
            Method::POST,
            scoped_path(tenant.application_id, TENANTS, None),
            tenant,
        )
    }

    fn update_tenant(&self, tenant: &NamedRecordUpdate) -> Result<Tenant, ClientError> {
        self.send_json(
            Method::PUT,
            scoped_path(tenant.application_id, TENANTS, Some(&tenant.id)),
            tenant,
        )
    }

    fn delete_tenant(&self, application_id: i64, tenant_id: &str) -> Result<Tenant, ClientError> {
        self.delete(scoped_path(application_id, TENANTS, Some(tenant_id)))
    }

    fn fetch_tenants(
        &self,
        application_id: i64,
        query: &ListQuery,
    ) -> Result<Vec<Tenant>, ClientError> {
        self.list(scoped_path(application_id, TENANTS, None), query)
    }
}

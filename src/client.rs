//! Remote client abstraction for the AAP service.
//!
//! The command layer only talks to [`AapClient`]; the concrete transport is
//! supplied by the dependency provider (see `cli::deps`). Every call is a
//! single blocking attempt: retries and deadlines belong to the transport.

use crate::error::ClientError;
use crate::models::{
    Application, ApplicationUpdate, Identity, IdentitySource, IdentityUpdate, ListQuery,
    NamedRecordUpdate, NewApplication, NewIdentity, NewNamedRecord, Tenant,
};

pub mod http;

pub use http::HttpAapClient;

/// Capability set of the AAP service, one create/update/delete/list group per resource.
pub trait AapClient {
    fn create_application(&self, application: &NewApplication) -> Result<Application, ClientError>;
    fn update_application(&self, application: &ApplicationUpdate)
        -> Result<Application, ClientError>;
    fn delete_application(&self, application_id: i64) -> Result<Application, ClientError>;
    fn fetch_applications(&self, query: &ListQuery) -> Result<Vec<Application>, ClientError>;

    fn create_identity_source(
        &self,
        identity_source: &NewNamedRecord,
    ) -> Result<IdentitySource, ClientError>;
    fn update_identity_source(
        &self,
        identity_source: &NamedRecordUpdate,
    ) -> Result<IdentitySource, ClientError>;
    fn delete_identity_source(
        &self,
        application_id: i64,
        identity_source_id: &str,
    ) -> Result<IdentitySource, ClientError>;
    fn fetch_identity_sources(
        &self,
        application_id: i64,
        query: &ListQuery,
    ) -> Result<Vec<IdentitySource>, ClientError>;

    fn create_identity(&self, identity: &NewIdentity) -> Result<Identity, ClientError>;
    fn update_identity(&self, identity: &IdentityUpdate) -> Result<Identity, ClientError>;
    fn delete_identity(
        &self,
        application_id: i64,
        identity_id: &str,
    ) -> Result<Identity, ClientError>;
    fn fetch_identities(
        &self,
        application_id: i64,
        query: &ListQuery,
    ) -> Result<Vec<Identity>, ClientError>;

    fn create_tenant(&self, tenant: &NewNamedRecord) -> Result<Tenant, ClientError>;
    fn update_tenant(&self, tenant: &NamedRecordUpdate) -> Result<Tenant, ClientError>;
    fn delete_tenant(&self, application_id: i64, tenant_id: &str) -> Result<Tenant, ClientError>;
    fn fetch_tenants(
        &self,
        application_id: i64,
        query: &ListQuery,
    ) -> Result<Vec<Tenant>, ClientError>;
}

//! AAP resource records as returned by the remote service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Common view of a remote resource used by the command layer and renderer.
pub trait Resource: Serialize {
    /// Singular noun used in user-facing messages ("application").
    const NOUN: &'static str;
    /// Plural noun used in user-facing messages ("applications").
    const PLURAL: &'static str;
    /// Collection name used as the structured output key ("applications").
    const COLLECTION: &'static str;

    /// Unique identifier in its natural string form.
    fn id_string(&self) -> String;

    fn display_name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub application_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Application {
    const NOUN: &'static str = "application";
    const PLURAL: &'static str = "applications";
    const COLLECTION: &'static str = "applications";

    fn id_string(&self) -> String {
        self.application_id.to_string()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySource {
    pub identity_source_id: String,
    pub application_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for IdentitySource {
    const NOUN: &'static str = "identity source";
    const PLURAL: &'static str = "identity sources";
    const COLLECTION: &'static str = "identity_sources";

    fn id_string(&self) -> String {
        self.identity_source_id.clone()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// An identity; `kind` is a free-form discriminator of the identity's origin
/// (e.g. "user", "role-actor").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub identity_id: String,
    pub application_id: i64,
    pub identity_source_id: String,
    pub kind: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Identity {
    const NOUN: &'static str = "identity";
    const PLURAL: &'static str = "identities";
    const COLLECTION: &'static str = "identities";

    fn id_string(&self) -> String {
        self.identity_id.clone()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub tenant_id: String,
    pub application_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Tenant {
    const NOUN: &'static str = "tenant";
    const PLURAL: &'static str = "tenants";
    const COLLECTION: &'static str = "tenants";

    fn id_string(&self) -> String {
        self.tenant_id.clone()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Payload for creating an application; the identifier is server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationUpdate {
    pub application_id: i64,
    pub name: String,
}

/// Payload for creating an identity; the identifier is server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIdentity {
    pub application_id: i64,
    pub identity_source_id: String,
    pub kind: String,
    pub name: String,
}

/// Payload for creating a record that only carries a name under an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNamedRecord {
    pub application_id: i64,
    pub name: String,
}

/// Update payload: identifier plus the mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUpdate {
    pub identity_id: String,
    pub application_id: i64,
    pub kind: String,
    pub name: String,
}

/// Rename payload shared by tenants and identity sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRecordUpdate {
    pub id: String,
    pub application_id: i64,
    pub name: String,
}

/// Pagination and filters for list calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

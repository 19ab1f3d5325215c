//! Flag namespace: one configuration key per (command prefix, flag suffix).
//!
//! The same logical flag (e.g. `name`) is reused by several command trees;
//! prefixing it with the command family keeps the keys apart in the
//! settings store.

/// Separator between command prefix and flag suffix.
pub const FLAG_SEPARATOR: char = '.';

/// Prefix for flags that configure the AAP service connection.
pub const FLAG_PREFIX_AAP: &str = "aap";
/// Suffix of the AAP target address flag.
pub const FLAG_SUFFIX_AAP_TARGET: &str = "target";

pub const FLAG_WORKDIR: &str = "workdir";
pub const FLAG_OUTPUT: &str = "output";
pub const FLAG_VERBOSE: &str = "verbose";

pub const FLAG_APPLICATION_ID: &str = "applicationid";
pub const FLAG_IDENTITY_SOURCE_ID: &str = "identitysourceid";
pub const FLAG_IDENTITY_ID: &str = "identityid";
pub const FLAG_TENANT_ID: &str = "tenantid";
pub const FLAG_NAME: &str = "name";
pub const FLAG_KIND: &str = "kind";
pub const FLAG_PAGE: &str = "page";
pub const FLAG_PAGE_SIZE: &str = "pagesize";

/// Compose the fully-qualified configuration key for a command flag.
pub fn flag_name(prefix: &str, suffix: &str) -> String {
    format!("{}{}{}", prefix, FLAG_SEPARATOR, suffix)
}

/// Key of the AAP target address (`aap.target`).
pub fn aap_target_key() -> String {
    flag_name(FLAG_PREFIX_AAP, FLAG_SUFFIX_AAP_TARGET)
}

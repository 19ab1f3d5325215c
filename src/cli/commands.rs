//! Porcelain commands, one module per resource group. Each command reads its
//! flags from the settings store under its own prefix, builds the request and
//! hands the remote call to the shared executor.

pub mod applications;
pub mod identities;
pub mod identity_sources;
pub mod tenants;

use crate::config::flags::{flag_name, FLAG_NAME, FLAG_PAGE, FLAG_PAGE_SIZE};
use crate::config::Settings;
use crate::models::ListQuery;

/// Pagination and filters of a list command; `id_suffix` names the identifier filter flag.
pub fn build_list_query(settings: &Settings, flag_prefix: &str, id_suffix: &str) -> ListQuery {
    ListQuery {
        page: settings.get_opt_i64(&flag_name(flag_prefix, FLAG_PAGE)),
        page_size: settings.get_opt_i64(&flag_name(flag_prefix, FLAG_PAGE_SIZE)),
        id: settings.get_opt_string(&flag_name(flag_prefix, id_suffix)),
        name: settings.get_opt_string(&flag_name(flag_prefix, FLAG_NAME)),
    }
}

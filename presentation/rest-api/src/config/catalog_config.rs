use std::env;

use business::domain::food::policy::{AllowList, CatalogPolicy};

/// Build the catalog allow-list policy from environment variables
///
/// Environment variables:
/// - CATALOG_ALLOWED_TYPES: comma-separated `type` values (unset: any)
/// - CATALOG_ALLOWED_CUISINES: comma-separated cuisines (unset: any)
pub fn init_catalog_policy() -> CatalogPolicy {
    CatalogPolicy {
        kinds: allow_list_from_env("CATALOG_ALLOWED_TYPES"),
        cuisines: allow_list_from_env("CATALOG_ALLOWED_CUISINES"),
    }
}

fn allow_list_from_env(var: &str) -> AllowList {
    match env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => {
            AllowList::of(raw.split(',').map(|value| value.trim().to_string()))
        }
        _ => AllowList::Any,
    }
}

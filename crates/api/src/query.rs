//! Query-string parameter types.

use serde::Deserialize;

/// `?type=` on the link-by-type route.
///
/// Kept as a raw string so a missing or unknown value can be reported with
/// the link manager's own messages instead of axum's query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct LinkTypeQuery {
    #[serde(rename = "type")]
    pub link_type: Option<String>,
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LookupError, Result};

/// Parsed lookup response, alive for one process run only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpLookupResult {
    pub ip_address: String,
    pub is_in_eu: bool,
}

impl IpLookupResult {
    /// Extracts the `ip` field, failing with a named schema error if it is
    /// absent or not a string.
    pub fn ip_from_body(body: &Value) -> Result<&str> {
        body.get("ip")
            .and_then(Value::as_str)
            .ok_or(LookupError::Schema("ip"))
    }

    /// Extracts the `country_eu` field, failing with a named schema error if
    /// it is absent or not a boolean.
    pub fn eu_from_body(body: &Value) -> Result<bool> {
        body.get("country_eu")
            .and_then(Value::as_bool)
            .ok_or(LookupError::Schema("country_eu"))
    }
}

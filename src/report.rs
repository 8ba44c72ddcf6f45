use std::io::Write;

use serde_json::Value;

use crate::error::Result;
use crate::model::IpLookupResult;

pub const EU_NOTICE: &str = "Looks like I'm in the European Union!";

/// Writes the report lines for one lookup document.
///
/// The address line is written before `country_eu` is read, so a body missing
/// only that field still reports the address before the process fails.
pub fn write_report<W: Write>(out: &mut W, body: &Value) -> Result<IpLookupResult> {
    let ip = IpLookupResult::ip_from_body(body)?;
    writeln!(out, "My external address is {}", ip)?;

    let is_in_eu = IpLookupResult::eu_from_body(body)?;
    if is_in_eu {
        writeln!(out, "{}", EU_NOTICE)?;
    }

    Ok(IpLookupResult {
        ip_address: ip.to_string(),
        is_in_eu,
    })
}

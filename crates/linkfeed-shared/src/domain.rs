//! Display-domain derivation for submitted links.

use url::Url;

use crate::constants::UNKNOWN_DOMAIN;

/// Derive the domain shown next to a link.
///
/// The first `www.` in the host is dropped. Anything that does not parse as
/// an absolute URL with a host yields [`UNKNOWN_DOMAIN`]; this never fails.
pub fn display_domain(url: &str) -> String {
    match Url::parse(url.trim()) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => host.replacen("www.", "", 1),
            _ => UNKNOWN_DOMAIN.to_string(),
        },
        Err(_) => UNKNOWN_DOMAIN.to_string(),
    }
}

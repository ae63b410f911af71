//! Client identification from proxy headers

use axum::http::HeaderMap;

use crate::domain::admission::ClientId;

/// Derive the client identity for rate limiting
///
/// Checked in priority order: the first address of the forwarded-for chain,
/// then the direct-connection header, then the edge-proxy header. Requests
/// with none of them share the fallback identity.
pub fn client_ip(headers: &HeaderMap) -> ClientId {
    if let Some(forwarded) = header_str(headers, "x-forwarded-for") {
        // Can hold a comma-separated chain; the first hop is the client
        if let Some(ip) = forwarded.split(',').next() {
            let ip = ip.trim();
            if !ip.is_empty() {
                return ClientId::new(ip);
            }
        }
    }

    if let Some(real_ip) = header_str(headers, "x-real-ip") {
        return ClientId::new(real_ip.trim());
    }

    if let Some(cf_ip) = header_str(headers, "cf-connecting-ip") {
        return ClientId::new(cf_ip.trim());
    }

    ClientId::fallback()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
}

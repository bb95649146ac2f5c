//! Zone / relative-name decomposition
//!
//! WAPI addresses records by zone plus a name relative to that zone, while
//! ACME hands out fully qualified names such as `_acme-challenge.sub.example.com`.

/// Drop a single trailing root dot.
pub fn normalize_domain_name(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Name of `fqdn` relative to `zone`.
///
/// `_acme-challenge.sub.example.com` in `example.com` becomes
/// `_acme-challenge.sub`. When `fqdn` does not end with `.<zone>` it is
/// returned unchanged (minus a trailing root dot). The suffix comparison
/// ignores ASCII case; the returned label keeps the caller's spelling.
pub fn relative_name<'a>(fqdn: &'a str, zone: &str) -> &'a str {
    let full = normalize_domain_name(fqdn);
    let zone = normalize_domain_name(zone);

    if zone.is_empty() || full.len() <= zone.len() + 1 {
        return full;
    }

    let split = full.len() - zone.len() - 1;
    if !full.is_char_boundary(split) {
        return full;
    }
    let (head, tail) = full.split_at(split);
    match tail.strip_prefix('.') {
        Some(suffix) if suffix.eq_ignore_ascii_case(zone) => head,
        _ => full,
    }
}

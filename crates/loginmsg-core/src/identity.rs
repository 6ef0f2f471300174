//! Host identity resolution
//!
//! The banner may carry the host's fully-qualified name. Resolution is
//! best-effort: a machine without working name resolution still gets a banner,
//! just with a shorter name in it.

use std::ffi::OsString;
use std::io;
use std::net::IpAddr;

/// Name used when even the local hostname cannot be read.
pub const FALLBACK_HOST: &str = "localhost";

/// Produces the name written after the host label.
pub trait HostIdentityResolver {
    /// Fully-qualified domain name of the local host, or the best available
    /// substitute. Never fails.
    fn fqdn(&self) -> String;
}

/// Resolves the FQDN from the running system.
///
/// Reads the local hostname, resolves it forward, then reverse-resolves each
/// address; the first name containing a dot wins. Falls back to the plain
/// hostname, then to [`FALLBACK_HOST`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostIdentity;

impl HostIdentityResolver for SystemHostIdentity {
    fn fqdn(&self) -> String {
        pick_fqdn(hostname::get(), reverse_names)
    }
}

/// Walk the fallback chain: the first candidate containing a dot, then the
/// plain hostname, then [`FALLBACK_HOST`].
///
/// `candidates` is only consulted once a non-empty hostname is known.
fn pick_fqdn<I>(host: io::Result<OsString>, candidates: impl FnOnce(&str) -> I) -> String
where
    I: IntoIterator<Item = String>,
{
    let host = match host {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read local hostname, using {FALLBACK_HOST}");
            return FALLBACK_HOST.to_string();
        }
    };

    if host.is_empty() {
        tracing::warn!("local hostname is empty, using {FALLBACK_HOST}");
        return FALLBACK_HOST.to_string();
    }

    match candidates(&host).into_iter().find(|name| name.contains('.')) {
        Some(fqdn) => {
            tracing::debug!(%host, %fqdn, "resolved fully-qualified name");
            fqdn
        }
        None => {
            tracing::debug!(%host, "no qualified name found, using plain hostname");
            host
        }
    }
}

/// Reverse-resolved names for every address `host` resolves to.
fn reverse_names(host: &str) -> Vec<String> {
    let addrs: Vec<IpAddr> = match dns_lookup::lookup_host(host) {
        Ok(addrs) => addrs.into_iter().collect(),
        Err(e) => {
            tracing::debug!(%host, error = %e, "forward lookup failed");
            return Vec::new();
        }
    };
    addrs
        .iter()
        .filter_map(|ip| dns_lookup::lookup_addr(ip).ok())
        .collect()
}

/// Always reports the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHostIdentity(pub String);

impl StaticHostIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl HostIdentityResolver for StaticHostIdentity {
    fn fqdn(&self) -> String {
        self.0.clone()
    }
}

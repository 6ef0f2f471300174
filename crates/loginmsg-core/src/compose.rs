//! Banner content composition

/// Prefix of the host identity line.
pub const HOST_LABEL: &str = "Server: ";

/// Build the exact bytes written to the banner file.
///
/// `text` is always followed by a newline; when `fqdn` is given a
/// `Server: <fqdn>` line follows it.
pub fn compose_message(text: &str, fqdn: Option<&str>) -> String {
    match fqdn {
        Some(name) => format!("{text}\n{HOST_LABEL}{name}\n"),
        None => format!("{text}\n"),
    }
}

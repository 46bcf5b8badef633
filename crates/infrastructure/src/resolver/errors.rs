use dns_override_domain::DomainError;
use hickory_resolver::ResolveError;

/// Maps a hickory lookup failure onto the resolution error taxonomy.
pub fn classify_resolve_error(host: &str, error: &ResolveError) -> DomainError {
    if error.is_nx_domain() || error.is_no_records_found() {
        return DomainError::NameNotFound(host.to_string());
    }

    let message = error.to_string();
    let lower = message.to_ascii_lowercase();
    if lower.contains("timed out")
        || lower.contains("timeout")
        || lower.contains("connection")
        || lower.contains("io error")
    {
        return DomainError::TemporaryFailure(format!("{}: {}", host, message));
    }

    DomainError::NonRecoverable(format!("{}: {}", host, message))
}

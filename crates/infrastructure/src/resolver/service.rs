use dns_override_domain::DomainError;

const WELL_KNOWN_SERVICES: &[(&str, u16)] = &[
    ("ftp", 21),
    ("ssh", 22),
    ("smtp", 25),
    ("domain", 53),
    ("http", 80),
    ("https", 443),
];

/// Port for a numeric or well-known service name. No service means port 0.
pub fn service_port(service: Option<&str>) -> Result<u16, DomainError> {
    let Some(service) = service else {
        return Ok(0);
    };

    if let Ok(port) = service.parse::<u16>() {
        return Ok(port);
    }

    WELL_KNOWN_SERVICES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(service))
        .map(|&(_, port)| port)
        .ok_or_else(|| DomainError::UnknownService(service.to_string()))
}

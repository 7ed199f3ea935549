use std::net::SocketAddr;

/// # Errors
///
/// Will return `Err` if the value is not a whole number of at least 1
pub fn check_positive(value: &str) -> Result<i64, String> {
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a whole number."))?;
    if parsed < 1 {
        return Err(format!("'{value}' must be at least 1."));
    }
    Ok(parsed)
}

/// # Errors
///
/// Will return `Err` if the value is not `host:port`
pub fn check_bind_addr(value: &str) -> Result<SocketAddr, String> {
    value
        .parse()
        .map_err(|_| format!("'{value}' is not a valid bind address, expected ip:port."))
}

/// # Errors
///
/// Will return `Err` unless the value starts with http:// or https://
pub fn check_http_url(value: &str) -> Result<String, String> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.to_string())
    } else {
        Err(format!("'{value}' must be an http(s) url."))
    }
}

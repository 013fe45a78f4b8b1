// Absolute link construction for pages that must emit fully qualified URLs.

/// Builds `http://<host>[:<port>]/<path>`, omitting the port when it is 80.
pub fn absolute_url(host: &str, port: u16, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if port == 80 {
        format!("http://{host}/{path}")
    } else {
        format!("http://{host}:{port}/{path}")
    }
}

/// Server name part of a `Host` header value, without any port.
pub fn server_name(host_header: &str) -> &str {
    let host_header = host_header.trim();
    if let Some(rest) = host_header.strip_prefix('[') {
        // IPv6 literal, keep the brackets
        return match rest.find(']') {
            Some(end) => &host_header[..end + 2],
            None => host_header,
        };
    }
    match host_header.rsplit_once(':') {
        Some((name, _port)) => name,
        None => host_header,
    }
}

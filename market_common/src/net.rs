//! Shared networking constants and helpers used by client and server.

/// HTTP port the server listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3001;
/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "PORT";
/// Path of the push channel endpoint.
pub const WS_PATH: &str = "/ws";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Turn an `http(s)://` base URL into the matching `ws(s)://` push channel URL.
pub fn ws_url(base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rest = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        base.to_string()
    };
    format!("{}{}", rest, WS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_url_swaps_scheme_and_appends_path() {
        assert_eq!(ws_url("http://localhost:3001"), "ws://localhost:3001/ws");
        assert_eq!(ws_url("https://example.com/"), "wss://example.com/ws");
    }

    #[test]
    fn addr_joins_ip_and_port() {
        assert_eq!(addr("0.0.0.0", DEFAULT_PORT), "0.0.0.0:3001");
    }
}

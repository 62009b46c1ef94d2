use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "Claimbridge";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Address the HTTP API binds to unless `CLAIMBRIDGE_ADDR` overrides it.
/// Port 8000 matches the reference deployment the UI expects.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Environment variable holding a `host:port` override for the API bind address.
pub const BIND_ADDR_ENV: &str = "CLAIMBRIDGE_ADDR";

/// Environment variable overriding only the port. Ignored when
/// `CLAIMBRIDGE_ADDR` is set and valid.
pub const BIND_PORT_ENV: &str = "CLAIMBRIDGE_PORT";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    format!("{}=debug,info", env!("CARGO_PKG_NAME"))
}

/// Resolve the API bind address from the environment.
///
/// An unparsable override is logged and ignored rather than aborting startup.
pub fn bind_addr() -> SocketAddr {
    let addr_override = std::env::var(BIND_ADDR_ENV).ok();
    let port_override = std::env::var(BIND_PORT_ENV).ok();
    resolve_bind_addr(addr_override.as_deref(), port_override.as_deref())
}

/// Factored out from `bind_addr` so the override precedence can be
/// tested without mutating process environment.
fn resolve_bind_addr(addr_override: Option<&str>, port_override: Option<&str>) -> SocketAddr {
    let mut addr = match addr_override {
        Some(raw) => match raw.parse() {
            Ok(addr) => return addr,
            Err(e) => {
                tracing::warn!("Invalid {} value '{}': {}, using default", BIND_ADDR_ENV, raw, e);
                default_addr()
            }
        },
        None => default_addr(),
    };

    if let Some(raw) = port_override {
        match raw.parse::<u16>() {
            Ok(port) => addr.set_port(port),
            Err(e) => {
                tracing::warn!("Invalid {} value '{}': {}, keeping port {}", BIND_PORT_ENV, raw, e, addr.port());
            }
        }
    }

    addr
}

fn default_addr() -> SocketAddr {
    DEFAULT_BIND_ADDR
        .parse()
        .expect("default bind address is valid")
}

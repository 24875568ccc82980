use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("SERVER_HOST")
                .ok()
                .and_then(|value| {
                    value
                        .parse()
                        .map_err(|_| warn!("SERVER_HOST is not a valid IP address, using 0.0.0.0"))
                        .ok()
                })
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|value| {
                    value
                        .parse()
                        .map_err(|_| warn!("SERVER_PORT is not a valid port number, using 5000"))
                        .ok()
                })
                .unwrap_or(5000),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces_on_5000() {
        let config = AppConfig::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
    }
}

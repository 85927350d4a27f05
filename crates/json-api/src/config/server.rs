//! Listener Config

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Args;

/// Where the storefront API accepts connections.
#[derive(Debug, Args)]
pub struct ListenConfig {
    /// Interface to bind, all IPv4 interfaces by default
    #[arg(
        short = 'H',
        long,
        env = "SERVER_HOST",
        default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    )]
    pub host: IpAddr,

    /// Port for the storefront API
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,
}

impl ListenConfig {
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

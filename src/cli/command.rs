use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "contact-directory",
    version,
    about = "Contact directory served over a JSON HTTP API"
)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, env = "CONTACTS_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "CONTACTS_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Maximum log level (trace, debug, info, warn, error)
    #[arg(long, env = "CONTACTS_LOG_LEVEL", default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Cli {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_all_interfaces_port_5000() {
        let cli = Cli::try_parse_from(["contact-directory"]).unwrap();

        assert_eq!(cli.listen_addr(), "0.0.0.0:5000".parse().unwrap());
        assert_eq!(cli.log_level, Level::INFO);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "contact-directory",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.listen_addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(cli.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Cli::try_parse_from(["contact-directory", "--port", "70000"]).is_err());
    }
}

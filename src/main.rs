use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr};

use dnsreply::{ResponderConfig, DEFAULT_PORT, DEFAULT_TTL};

#[derive(Parser)]
#[command(name = "dnsreply")]
#[command(version)]
#[command(about = "Answers every DNS query over UDP with a fixed A record")]
struct Cli {
    /// Address to listen on [default: 127.0.0.1:2053]
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// TTL of the answer, in seconds
    #[arg(long, default_value_t = DEFAULT_TTL)]
    ttl: u32,

    /// Address put in every answer
    #[arg(short, long, default_value = "8.8.8.8")]
    address: Ipv4Addr,

    /// Log filter (trace, debug, info, warn, error), overrides RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn bind_addr(&self) -> SocketAddr {
        self.bind
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)))
    }
}

pub fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = cli.log_level.as_deref() {
        logger.parse_filters(level);
    }
    logger.init();

    dnsreply::run(
        cli.bind_addr(),
        ResponderConfig {
            ttl: cli.ttl,
            address: cli.address,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_uses_default_port() {
        let cli = Cli::parse_from(["dnsreply"]);
        assert_eq!(cli.bind_addr(), "127.0.0.1:2053".parse::<SocketAddr>().unwrap());
        assert_eq!(cli.ttl, DEFAULT_TTL);
        assert_eq!(cli.address, Ipv4Addr::new(8, 8, 8, 8));

        let cli = Cli::parse_from(["dnsreply", "--bind", "0.0.0.0:53"]);
        assert_eq!(cli.bind_addr(), "0.0.0.0:53".parse::<SocketAddr>().unwrap());
    }
}

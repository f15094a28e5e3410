extern crate chrono;
extern crate clap;
extern crate env_logger;
extern crate gga_ecef;
#[macro_use]
extern crate log;

use chrono::Utc;
use clap::Parser;
use std::io::{BufReader, Write};
use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener, TcpStream};
use std::process;

use gga_ecef::{LineSource, ServeError};

/// Listens for NMEA 0183 GPGGA sentences on a TCP port and prints the
/// decoded positions.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TCP port to listen on.
    port: u16,
    /// Address to bind to.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    bind: IpAddr,
    /// Accept further connections after the first one closed.
    #[arg(long)]
    keep_listening: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ServeError> {
    let addr = SocketAddr::new(cli.bind, cli.port);
    let listener = TcpListener::bind(addr).map_err(|e| (addr, e))?;
    info!("listening on {}", addr);

    loop {
        let (stream, peer) = listener.accept()?;
        info!("accepted connection from {}", peer);
        match serve(stream) {
            Ok(()) => info!("connection from {} closed", peer),
            // a broken connection only ends that connection when we keep listening
            Err(e) if cli.keep_listening => warn!("connection from {} failed: {}", peer, e),
            Err(e) => return Err(e),
        }
        if !cli.keep_listening {
            return Ok(());
        }
    }
}

/// Parses every sentence received on `stream` and prints the result.
fn serve(stream: TcpStream) -> Result<(), ServeError> {
    let stdout = std::io::stdout();
    let mut sentences = LineSource::new(BufReader::new(stream));

    while let Some(line) = sentences.next_sentence()? {
        match gga_ecef::parse(line, Utc::now().date_naive()) {
            Ok(pos) => {
                let mut out = stdout.lock();
                writeln!(out, "{}", pos)?;
                out.flush()?;
            }
            Err(e) => warn!("dropping sentence {:?}: {}", line, e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_a_single_connection_by_default() {
        let cli = Cli::try_parse_from(&["gga-ecef", "4000"]).unwrap();
        assert_eq!(cli.port, 4000);
        assert_eq!(cli.bind, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert!(!cli.keep_listening);
    }

    #[test]
    fn parses_listener_options() {
        let cli = Cli::try_parse_from(&[
            "gga-ecef",
            "--bind",
            "127.0.0.1",
            "--keep-listening",
            "10110",
        ]).unwrap();
        assert_eq!(cli.port, 10110);
        assert_eq!(cli.bind, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(cli.keep_listening);

        assert!(Cli::try_parse_from(&["gga-ecef", "--once", "4000"]).is_err());
        assert!(Cli::try_parse_from(&["gga-ecef"]).is_err());
    }
}

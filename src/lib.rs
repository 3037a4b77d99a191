//! Loopback test client for a hand-written TCP stack, plus the one-shot
//! listener it talks to.
//!
//! The client connects to `SERVER_IP:SERVER_PORT`, sends [`GREETING`] and
//! [`MESSAGE`] back-to-back, prints one bounded read of the reply and closes.

use std::io;
use std::net::{IpAddr, SocketAddr};

pub mod client;
pub mod server;

pub const SERVER_IP: &'static str = "127.0.0.1";
pub const LISTEN_IP: &'static str = "0.0.0.0";
pub const SERVER_PORT: u16 = 2222;

pub const GREETING: &'static str = "hello xv6!!!";
pub const MESSAGE: &'static str = "this message came from python!!!";
/// Reply sent by the listener once it has read from the client.
pub const ACK: &'static str = "hhhhh I've received!!!";

/// Upper bound of the client's single read.
pub const RECV_LIMIT: usize = 1024;
/// Upper bound of the listener's single read.
pub const SERVER_READ_LIMIT: usize = 1000;
pub const LISTEN_BACKLOG: u32 = 5;

/// Builds `ip:port` from a v4 or bare v6 address, reporting a malformed
/// address as `InvalidInput`.
pub fn socket_addr(ip: &str, port: u16) -> io::Result<SocketAddr> {
    let ip = ip
        .parse::<IpAddr>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    Ok(SocketAddr::new(ip, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_endpoints_parse() {
        let addr = socket_addr(SERVER_IP, SERVER_PORT).unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 2222);
        assert!(socket_addr(LISTEN_IP, SERVER_PORT).unwrap().ip().is_unspecified());
    }

    #[test]
    fn bare_ipv6_address_is_accepted() {
        let addr = socket_addr("::1", SERVER_PORT).unwrap();
        assert!(addr.is_ipv6());
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), SERVER_PORT);
    }

    #[test]
    fn malformed_address_is_invalid_input() {
        let err = socket_addr("not an ip", SERVER_PORT).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}

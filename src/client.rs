use std::io::{self, Write};
use std::net::SocketAddr;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpSocket,
};

use crate::{GREETING, MESSAGE, RECV_LIMIT};

/// Connects to `addr`, sends both messages, and returns whatever a single
/// read of at most [`RECV_LIMIT`] bytes produced.
///
/// Status lines go to `out`. Nothing is written there if the connect fails.
/// The connection is closed when the function returns, whether or not the
/// peer had more to say.
pub async fn connect_send_receive<W: Write>(addr: SocketAddr, out: &mut W) -> io::Result<Vec<u8>> {
    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    let mut stream = socket.connect(addr).await?;
    writeln!(out, "connect success")?;

    // two separate writes, no separator between them
    stream.write_all(GREETING.as_bytes()).await?;
    stream.write_all(MESSAGE.as_bytes()).await?;

    let mut buffer = vec![0; RECV_LIMIT];
    let n = stream.read(&mut buffer).await?;
    buffer.truncate(n);
    writeln!(out, "{}", String::from_utf8_lossy(&buffer))?;
    Ok(buffer)
}

use std::io::{self, Write};
use std::net::SocketAddr;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpSocket},
};

use crate::{ACK, LISTEN_BACKLOG, SERVER_READ_LIMIT};

/// Creates, binds and starts the listener, reporting each step to `out`.
pub fn create_listener<W: Write>(addr: SocketAddr, out: &mut W) -> io::Result<TcpListener> {
    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    writeln!(out, "socket create success")?;

    // the previous run's connection may still sit in TIME_WAIT on this port
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;
    writeln!(out, "bind success")?;

    let listener = socket.listen(LISTEN_BACKLOG)?;
    writeln!(out, "listen success!")?;
    Ok(listener)
}

/// Accepts a single client, reads once, answers with [`ACK`] and hangs up.
///
/// Returns the bytes read from the client. The listener is consumed so that
/// it is closed together with the client connection.
pub async fn serve_once<W: Write>(listener: TcpListener, out: &mut W) -> io::Result<Vec<u8>> {
    writeln!(out, "waiting accept...")?;
    let (mut stream, peer) = listener.accept().await?;
    writeln!(out, "accept a client!!!")?;
    writeln!(out, "client ip: {}  port: {}", peer.ip(), peer.port())?;

    let mut buffer = vec![0; SERVER_READ_LIMIT];
    let n = stream.read(&mut buffer).await?;
    buffer.truncate(n);
    writeln!(out, "n: {}", n)?;
    writeln!(out, "read: {}", String::from_utf8_lossy(&buffer))?;

    stream.write_all(ACK.as_bytes()).await?;
    writeln!(out, "write: {}", ACK.len())?;
    Ok(buffer)
}

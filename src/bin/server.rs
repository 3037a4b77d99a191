use tokio::io;
use xv6_tcp_client::{server, socket_addr, LISTEN_IP, SERVER_PORT};

#[tokio::main]
async fn main() -> io::Result<()> {
    let addr = socket_addr(LISTEN_IP, SERVER_PORT)?;
    let mut stdout = std::io::stdout();
    let listener = server::create_listener(addr, &mut stdout).map_err(|e| {
        eprintln!("Error:{};while creating listener on {}", e, addr);
        e
    })?;
    server::serve_once(listener, &mut stdout).await?;
    Ok(())
}

use tokio::io;
use xv6_tcp_client::{client, socket_addr, SERVER_IP, SERVER_PORT};

#[tokio::main]
async fn main() -> io::Result<()> {
    let addr = socket_addr(SERVER_IP, SERVER_PORT)?;
    let mut stdout = std::io::stdout();
    client::connect_send_receive(addr, &mut stdout).await?;
    Ok(())
}

use std::io;
use std::net::{TcpListener, TcpStream};

use tracing::{error, info, warn};

use rusty_maze::json_utils::{malformed_message, reply_to_message};
use rusty_maze::{init_logging, network, server_address};

fn answer(stream: &mut TcpStream, response: &serde_json::Value) -> io::Result<()> {
    network::send_message(stream, &response.to_string())
}

fn handle_client(mut stream: TcpStream) -> io::Result<()> {
    let peer = stream.peer_addr()?;
    info!(%peer, "new connection");

    loop {
        let msg = match network::receive_message(&mut stream) {
            Ok(msg) => msg,
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                info!(%peer, "client disconnected");
                return Ok(());
            }
            // trame trop grande ou non UTF-8 : le flux n'est plus synchronisé
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                warn!(%peer, %err, "unreadable frame, closing connection");
                answer(&mut stream, &malformed_message())?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        answer(&mut stream, &reply_to_message(&msg))?;
    }
}

fn main() -> io::Result<()> {
    init_logging();

    let address = server_address();
    let listener = TcpListener::bind(&address)?;
    info!(%address, "server started");

    // un client à la fois
    for stream in listener.incoming() {
        let stream = match stream {
            Ok(stream) => stream,
            Err(err) => {
                warn!(%err, "failed to accept connection");
                continue;
            }
        };
        if let Err(err) = handle_client(stream) {
            error!(%err, "client handling failed");
        }
    }
    info!("server done");
    Ok(())
}

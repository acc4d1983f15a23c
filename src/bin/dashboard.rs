use astra::Server;
use coworking_paris::responses::error_to_response;
use coworking_paris::router::handle;
use std::net::SocketAddr;

fn main() {
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting dashboard at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}

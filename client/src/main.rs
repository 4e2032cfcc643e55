use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match TcpStream::connect("127.0.0.1:8080").await {
        Ok(mut stream) => {
            if let Err(e) = stream.write_all(b"GET / HTTP/1.1\r\n\r\n").await {
                eprintln!("Failed to write to server: {}", e);
                return Err(Box::new(e) as Box<dyn std::error::Error>);
            }

            // The server closes the connection once the response is sent.
            let mut buff = Vec::new();
            match stream.read_to_end(&mut buff).await {
                Ok(_) => {
                    println!("{}", String::from_utf8_lossy(&buff));
                }
                Err(e) => {
                    eprintln!("Failed to read from server: {}", e);
                    return Err(Box::new(e) as Box<dyn std::error::Error>);
                }
            }
        }
        Err(e) => {
            eprintln!("Couldn't connect to server: {}", e);
            return Err(Box::new(e) as Box<dyn std::error::Error>);
        }
    }

    Ok(())
}

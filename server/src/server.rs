use std::future::Future;
use std::io;
use std::net::SocketAddr;

use log::{debug, error, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpSocket};

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use crate::response::RESPONSE;

/// Accepts connections and hands each one to its own detached task.
///
/// The listening socket lives exactly as long as this value: `run` and
/// `run_until` consume it, so the socket is closed whenever the loop ends.
#[derive(Debug)]
pub struct HttpServer {
    listener: TcpListener,
    config: ServerConfig,
}

impl HttpServer {
    pub async fn bind(config: ServerConfig) -> Result<Self> {
        let addr = config.addr();
        let bind_error = |source: io::Error| ServerError::Bind {
            addr: addr.clone(),
            source,
        };

        let socket_addr = tokio::net::lookup_host(addr.as_str())
            .await
            .map_err(bind_error)?
            .next()
            .ok_or_else(|| {
                bind_error(io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    "host did not resolve to any address",
                ))
            })?;

        let socket = match socket_addr {
            SocketAddr::V4(_) => TcpSocket::new_v4(),
            SocketAddr::V6(_) => TcpSocket::new_v6(),
        }
        .map_err(bind_error)?;

        // Lets a restarted server reclaim a port still in TIME_WAIT.
        socket.set_reuseaddr(true).map_err(bind_error)?;
        socket.bind(socket_addr).map_err(bind_error)?;
        let listener = socket.listen(config.backlog).map_err(bind_error)?;

        info!("Threaded HTTP Server running on http://{}", socket_addr);

        Ok(Self { listener, config })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves until the process receives Ctrl-C.
    pub async fn run(self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serves until `shutdown` resolves.
    ///
    /// Every accepted connection is spawned immediately and never joined, so
    /// the number of in-flight clients is unbounded. On shutdown the listener
    /// is closed and clients still being served are left to finish or to be
    /// dropped with the runtime.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        let Self { listener, config } = self;
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Server is shutting down...");
                    break;
                }
                accepted = listener.accept() => {
                    let (socket, peer) = accepted.map_err(ServerError::Accept)?;
                    info!("New connection from: {}", peer);

                    let read_buffer_size = config.read_buffer_size;
                    tokio::spawn(async move {
                        if let Err(e) = handle_client(socket, peer, read_buffer_size).await {
                            error!("{}", e);
                        }
                    });
                }
            }
        }

        Ok(())
    }
}

/// Serves one connection: a single read of at most `read_buffer_size` bytes,
/// then the static response, then close.
///
/// The request is only logged. An empty read still gets the full response.
/// Returns the number of request bytes read.
pub async fn handle_client<S>(mut stream: S, peer: SocketAddr, read_buffer_size: usize) -> Result<usize>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let connection_error = |source: io::Error| ServerError::Connection { peer, source };

    let mut buff = vec![0; read_buffer_size];
    let n = stream.read(&mut buff).await.map_err(connection_error)?;

    if n == 0 {
        debug!("{} sent no request data", peer);
    } else {
        let request = String::from_utf8_lossy(&buff[..n]);
        debug!("----- HTTP REQUEST from {} -----\n{}\n-----------------------------------", peer, request);
    }

    stream.write_all(RESPONSE).await.map_err(connection_error)?;
    stream.shutdown().await.map_err(connection_error)?;

    Ok(n)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

//! Server error types

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    /// The listening socket could not be set up.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// A read or write on one client connection failed.
    #[error("Error with {peer}: {source}")]
    Connection {
        peer: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Failed to accept connection: {0}")]
    Accept(#[source] io::Error),
}

impl ServerError {
    /// Whether the error stops the server, as opposed to ending a single connection.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ServerError::Connection { .. })
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_errors() {
        let bind = ServerError::Bind {
            addr: "127.0.0.1:8080".to_string(),
            source: io::Error::from(io::ErrorKind::AddrInUse),
        };
        let accept = ServerError::Accept(io::Error::from(io::ErrorKind::Other));
        let connection = ServerError::Connection {
            peer: "127.0.0.1:50000".parse().unwrap(),
            source: io::Error::from(io::ErrorKind::ConnectionReset),
        };

        assert!(bind.is_fatal());
        assert!(accept.is_fatal());
        assert!(!connection.is_fatal());
    }

    #[test]
    fn test_error_display_names_address() {
        let err = ServerError::Connection {
            peer: "127.0.0.1:50000".parse().unwrap(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"),
        };
        assert_eq!(err.to_string(), "Error with 127.0.0.1:50000: broken pipe");

        let err = ServerError::Bind {
            addr: "127.0.0.1:80".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(err.to_string(), "Failed to bind 127.0.0.1:80: permission denied");
    }
}

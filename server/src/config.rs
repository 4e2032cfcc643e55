pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BACKLOG: u32 = 5;
pub const READ_BUFFER_SIZE: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Pending connections the OS queues before `accept`. Does not limit in-flight clients.
    pub backlog: u32,
    /// Upper bound on the request bytes read from each connection.
    pub read_buffer_size: usize,
}

impl ServerConfig {
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            backlog: DEFAULT_BACKLOG,
            read_buffer_size: READ_BUFFER_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.backlog, 5);
        assert_eq!(config.read_buffer_size, 1024);
    }

    #[test]
    fn test_with_port() {
        let config = ServerConfig::default().with_port(0);
        assert_eq!(config.addr(), "127.0.0.1:0");
        assert_eq!(config.host, DEFAULT_HOST);
    }
}

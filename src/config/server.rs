use std::net::SocketAddr;
use std::path::PathBuf;

/// Which dataset the store opens. Resolved once at startup and never
/// re-read mid-process; `Test` keeps test runs off the primary database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreTarget {
    Primary,
    Test,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub store_target: StoreTarget,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        let file = match self.store_target {
            StoreTarget::Primary => "tallyman.db",
            StoreTarget::Test => "tallyman_test.db",
        };
        self.data_dir.join(file)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            data_dir: PathBuf::from("./data"),
            store_target: StoreTarget::Primary,
        }
    }
}

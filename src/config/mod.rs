mod server;

pub use server::{ServerConfig, StoreTarget};

pub mod archive;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod session;

pub use config::Config;
pub use gateway::BackendGateway;

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use error::ConfigError;
pub use state::AppState;

//! Configuration loading for the pay period service.
//!
//! The pay period tables are compiled in; configuration only covers how the
//! HTTP service is run.
//!
//! # Example
//!
//! ```no_run
//! use pay_period_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Listening on {}", loader.config().server.bind_address());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, ServerConfig, ServiceConfig};

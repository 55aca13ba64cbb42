pub use config::Config;
pub use error::{Error, Result};

mod config;
mod error;
pub mod pos;

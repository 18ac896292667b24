mod config;
mod scenario;

pub use config::*;
pub use scenario::*;

pub mod config;
pub mod scaffold;

pub use config::*;
pub use scaffold::*;

pub mod settings;

pub use settings::{DashgenConfig, OutputConfig, UiConfig};

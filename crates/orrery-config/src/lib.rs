//! Configuration and persisted runtime state for the orrery viewer.
//!
//! Two persistence layers with different formats and lifecycles:
//!
//! - [`Config`]: engine settings (window, input, debug) stored as `config.ron`,
//!   created with defaults on first run.
//! - [`ProgramState`]: user-adjusted runtime values (clear color, overlay flag,
//!   camera pose, light tuning) stored as a flat text file, read once at
//!   startup and written once at shutdown.

mod cli;
mod config;
mod error;
mod state;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, InputConfig, WindowConfig};
pub use error::ConfigError;
pub use state::{PointLightParams, ProgramState, StateFileError};

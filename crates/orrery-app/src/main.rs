//! Binary entry point for the orrery viewer.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use winit::event_loop::EventLoop;

use orrery_app::App;
use orrery_config::{CliArgs, Config, ProgramState};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("resources"));
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Config unavailable ({err}); continuing with defaults");
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    orrery_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    let state_path = args
        .state_file
        .clone()
        .unwrap_or_else(|| PathBuf::from("resources/program_state.txt"));
    let resources_dir = args
        .resources
        .clone()
        .unwrap_or_else(|| PathBuf::from("resources"));

    let mut state = ProgramState::default();
    state.load(&state_path);

    info!(
        "Orrery viewer starting: {}x{}, state file {}",
        config.window.width,
        config.window.height,
        state_path.display()
    );

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            error!("Failed to create event loop: {err}");
            std::process::exit(1);
        }
    };

    let mut app = App::new(config, state, state_path, resources_dir);
    if let Err(err) = event_loop.run_app(&mut app) {
        error!("Event loop error: {err}");
        std::process::exit(1);
    }
    if app.startup_failed {
        std::process::exit(1);
    }
}

#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Zuul **
//! A very small text adventure on a university campus.

use zuul_engine::data_paths::{CONFIG_FILE, data_path};
use zuul_engine::style::GameStyle;
use zuul_engine::{GameEngine, View, ZUUL_VERSION, load_config, load_world, run_repl};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zuul_engine", version, about = "Play the World of Zuul text adventure")]
struct Cli {
    /// Read engine settings from this file instead of the default `zuul.toml`.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Replay this command file (relative to the script root) before play starts.
    script: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(|| data_path(CONFIG_FILE));
    let config = load_config(&config_path);
    info!("Start: building Zuul world (v{ZUUL_VERSION})...");
    let world = load_world().context("while building ZuulWorld")?;
    info!("ZuulWorld built successfully.");

    let mut view = View::new();
    view.show_images = config.show_images;
    let mut engine = GameEngine::new(world, config);

    println!("{}", "THE WORLD OF ZUUL".title_style());
    engine.print_welcome(&mut view)?;
    view.flush();

    if let Some(script) = cli.script {
        info!("replaying '{script}' before interactive play");
        engine.replay_script(&mut view, &script);
        view.flush();
    }

    if engine.is_active() {
        run_repl(&mut engine, &mut view)?;
    }
    Ok(())
}

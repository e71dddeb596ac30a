#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const ZUUL_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod config;
pub mod data_paths;
pub mod engine;
pub mod error;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use config::{EngineConfig, load_config};
pub use engine::GameEngine;
pub use error::ScriptError;
pub use loader::load_world;
pub use player::Player;
pub use repl::run_repl;
pub use room::Room;
pub use view::{Presenter, View, ViewItem};
pub use world::{RoomId, ZuulWorld};

//! `repl::script` module
//!
//! Replays a text file of commands through the interpreter, one line at a time, exactly
//! as if the player had typed them. Scripts may run other scripts up to the configured
//! nesting limit.

use crate::engine::GameEngine;
use crate::error::ScriptError;
use crate::view::Presenter;

use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read a script file into its individual command lines.
///
/// # Errors
/// - `ScriptError::NotFound` if nothing exists at `path`
/// - `ScriptError::Unreadable` if it exists but cannot be read as UTF-8 text
pub fn read_script(path: &Path) -> Result<Vec<String>, ScriptError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text.lines().map(str::to_string).collect()),
        Err(source) if source.kind() == io::ErrorKind::NotFound => Err(ScriptError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(ScriptError::Unreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Run the commands in the script called `script_name`.
///
/// Any failure to start the script produces one line of feedback and is otherwise ignored.
/// Replay stops early if a line ends the session.
pub fn test_handler(engine: &mut GameEngine, view: &mut dyn Presenter, script_name: Option<&str>) {
    let Some(script_name) = script_name else {
        view.println("Test what?");
        return;
    };

    let lines = match load_lines(engine, script_name) {
        Ok(lines) => lines,
        Err(e) => {
            warn!("test '{script_name}' abandoned: {e}");
            view.println(e.player_message());
            return;
        },
    };

    info!(
        "replaying {} lines from '{script_name}' at depth {}",
        lines.len(),
        engine.script_depth + 1
    );
    engine.script_depth += 1;
    for line in &lines {
        if !engine.is_active() {
            info!("session ended during '{script_name}', skipping the rest");
            break;
        }
        engine.interpret_command(view, line);
    }
    engine.script_depth -= 1;
    info!("finished replaying '{script_name}'");
}

fn load_lines(engine: &GameEngine, script_name: &str) -> Result<Vec<String>, ScriptError> {
    if engine.script_depth >= engine.config.max_script_depth {
        return Err(ScriptError::TooDeep {
            depth: engine.config.max_script_depth,
        });
    }
    let path = engine
        .config
        .script_path(script_name)
        .ok_or_else(|| ScriptError::NotFound {
            path: PathBuf::from(script_name),
        })?;
    read_script(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::View;
    use crate::config::EngineConfig;
    use crate::loader::{LAB, OFFICE, OUTSIDE, load_world};
    use std::fs;

    fn engine_in(dir: &Path) -> GameEngine {
        let config = EngineConfig {
            script_root: dir.to_path_buf(),
            echo_input: false,
            ..EngineConfig::default()
        };
        GameEngine::new(load_world().unwrap(), config)
    }

    #[test]
    fn test_without_name_asks_what() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine_in(dir.path());
        let mut view = View::new();
        test_handler(&mut engine, &mut view, None);
        assert_eq!(view.lines(), vec!["Test what?"]);
    }

    #[test]
    fn missing_script_gives_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine_in(dir.path());
        let mut view = View::new();
        test_handler(&mut engine, &mut view, Some("missingfile.txt"));
        assert_eq!(view.lines(), vec!["The file name is incorrect."]);
        assert_eq!(engine.world.player.location, OUTSIDE);
        assert_eq!(engine.script_depth, 0);
    }

    #[test]
    fn names_outside_the_script_root_are_refused() {
        let root = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let walk = elsewhere.path().join("walk.txt");
        fs::write(&walk, "go south\n").unwrap();
        fs::create_dir(root.path().join("sub")).unwrap();
        fs::write(root.path().join("inside.txt"), "go south\n").unwrap();

        let mut engine = engine_in(&root.path().join("sub"));
        let absolute = walk.to_string_lossy().into_owned();
        for name in [absolute.as_str(), "../inside.txt"] {
            let mut view = View::new();
            test_handler(&mut engine, &mut view, Some(name));
            assert_eq!(view.lines(), vec!["The file name is incorrect."], "{name}");
        }
        assert_eq!(engine.world.player.location, OUTSIDE);
        assert!(engine.world.player.history.is_empty());
    }

    #[test]
    fn directory_is_not_a_script() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("walkthroughs")).unwrap();
        let mut engine = engine_in(dir.path());
        let mut view = View::new();
        test_handler(&mut engine, &mut view, Some("walkthroughs"));
        assert_eq!(view.lines(), vec!["The file name is incorrect."]);
    }

    #[test]
    fn script_lines_are_interpreted_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("walk.txt"), "go south\r\ngo east\n").unwrap();
        let mut engine = engine_in(dir.path());
        let mut view = View::new();
        test_handler(&mut engine, &mut view, Some("walk.txt"));
        assert_eq!(engine.world.player.location, OFFICE);
        assert_eq!(engine.world.player.history, vec![OUTSIDE, LAB]);
        assert_eq!(engine.script_depth, 0);
    }

    #[test]
    fn self_referencing_script_stops_at_depth_limit() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("loop.txt"), "go south\ntest loop.txt\n").unwrap();
        let mut engine = engine_in(dir.path());
        engine.config.max_script_depth = 3;
        let mut view = View::new();
        test_handler(&mut engine, &mut view, Some("loop.txt"));

        let too_deep = view
            .lines()
            .iter()
            .filter(|line| *line == "Too many nested test scripts.")
            .count();
        assert_eq!(too_deep, 1);
        // south from outside, then south from the lab fails twice
        assert_eq!(engine.world.player.location, LAB);
        assert_eq!(engine.world.player.history, vec![OUTSIDE]);
        assert_eq!(engine.script_depth, 0);
    }

    #[test]
    fn zero_depth_disables_scripts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("walk.txt"), "go south\n").unwrap();
        let mut engine = engine_in(dir.path());
        engine.config.max_script_depth = 0;
        let mut view = View::new();
        test_handler(&mut engine, &mut view, Some("walk.txt"));
        assert_eq!(view.lines(), vec!["Too many nested test scripts."]);
        assert_eq!(engine.world.player.location, OUTSIDE);
    }

    #[test]
    fn quit_inside_script_skips_remaining_lines() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bye.txt"), "quit\ngo east\n").unwrap();
        let mut engine = engine_in(dir.path());
        let mut view = View::new();
        test_handler(&mut engine, &mut view, Some("bye.txt"));
        assert!(!engine.is_active());
        assert_eq!(engine.world.player.location, OUTSIDE);
    }

    #[test]
    fn read_script_distinguishes_missing_from_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two.txt");
        assert!(matches!(read_script(&path), Err(ScriptError::NotFound { .. })));
        fs::write(&path, "look\n\neat").unwrap();
        assert_eq!(read_script(&path).unwrap(), vec!["look", "", "eat"]);
    }
}

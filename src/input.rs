//! Keyboard bindings
//!
//! Maps raw `KeyboardEvent::key` values to held movement directions and
//! single-press commands. Guards on when a command is legal live in the run
//! state machine; unrecognized keys simply map to nothing.

/// Movement directions (held state)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Discrete commands (single press)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Space: begin a run from the title screen
    Start,
    /// P or Escape: pause/resume mid-run
    TogglePause,
    /// R: restart after game over
    Restart,
}

/// Map a key to a movement direction (WASD or arrows, case-insensitive)
pub fn movement_binding(key: &str) -> Option<Dir> {
    match key.to_ascii_lowercase().as_str() {
        "w" | "arrowup" => Some(Dir::Up),
        "s" | "arrowdown" => Some(Dir::Down),
        "a" | "arrowleft" => Some(Dir::Left),
        "d" | "arrowright" => Some(Dir::Right),
        _ => None,
    }
}

/// Map a key to a discrete command
pub fn command_binding(key: &str) -> Option<Command> {
    match key {
        " " => Some(Command::Start),
        "p" | "P" | "Escape" => Some(Command::TogglePause),
        "r" | "R" => Some(Command::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_arrows_map_to_directions() {
        assert_eq!(movement_binding("w"), Some(Dir::Up));
        assert_eq!(movement_binding("W"), Some(Dir::Up));
        assert_eq!(movement_binding("ArrowUp"), Some(Dir::Up));
        assert_eq!(movement_binding("s"), Some(Dir::Down));
        assert_eq!(movement_binding("ArrowDown"), Some(Dir::Down));
        assert_eq!(movement_binding("a"), Some(Dir::Left));
        assert_eq!(movement_binding("ArrowLeft"), Some(Dir::Left));
        assert_eq!(movement_binding("d"), Some(Dir::Right));
        assert_eq!(movement_binding("ArrowRight"), Some(Dir::Right));
    }

    #[test]
    fn command_keys_map() {
        assert_eq!(command_binding(" "), Some(Command::Start));
        assert_eq!(command_binding("p"), Some(Command::TogglePause));
        assert_eq!(command_binding("P"), Some(Command::TogglePause));
        assert_eq!(command_binding("Escape"), Some(Command::TogglePause));
        assert_eq!(command_binding("r"), Some(Command::Restart));
        assert_eq!(command_binding("R"), Some(Command::Restart));
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        assert_eq!(movement_binding("q"), None);
        assert_eq!(movement_binding("Enter"), None);
        assert_eq!(command_binding("x"), None);
        assert_eq!(command_binding("Tab"), None);
        // Movement keys are not commands and vice versa
        assert_eq!(command_binding("w"), None);
        assert_eq!(movement_binding("Escape"), None);
    }
}

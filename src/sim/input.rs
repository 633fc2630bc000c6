//! Keyboard input → player velocity
//!
//! Only the three arrow keys matter. Key handlers write velocity directly;
//! the next tick picks it up.

use serde::{Deserialize, Serialize};

use super::state::Player;
use crate::consts::{JUMP_STRENGTH, MOVE_SPEED};

/// Keys the scene reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value; anything else is ignored
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Left => "ArrowLeft",
            Key::Right => "ArrowRight",
            Key::Up => "ArrowUp",
        }
    }
}

/// Everything that can change the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// One update-loop step
    Tick,
    /// OK button on the dialog
    DismissDialog,
}

/// Key press
pub fn handle_key_down(player: &mut Player, key: Key) {
    match key {
        Key::Left => player.vel.x = -MOVE_SPEED,
        Key::Right => player.vel.x = MOVE_SPEED,
        Key::Up => {
            if !player.airborne {
                player.vel.y = -JUMP_STRENGTH;
                player.airborne = true;
            }
        }
    }
}

/// Key release
///
/// Releasing either horizontal key stops horizontal motion, even while the
/// opposite key is still down.
pub fn handle_key_up(player: &mut Player, key: Key) {
    match key {
        Key::Left | Key::Right => player.vel.x = 0.0,
        Key::Up => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_dom_key_mapping() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom_key("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_dom_key("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_dom_key("ArrowDown"), None);
        assert_eq!(Key::from_dom_key(" "), None);
        assert_eq!(Key::from_dom_key("a"), None);
        for key in [Key::Left, Key::Right, Key::Up] {
            assert_eq!(Key::from_dom_key(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_horizontal_keys() {
        let mut player = Player::default();
        handle_key_down(&mut player, Key::Left);
        assert_eq!(player.vel.x, -5.0);
        handle_key_down(&mut player, Key::Right);
        assert_eq!(player.vel.x, 5.0);
        handle_key_up(&mut player, Key::Right);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_release_right_while_left_held_stops() {
        let mut player = Player::default();
        handle_key_down(&mut player, Key::Left);
        handle_key_down(&mut player, Key::Right);
        handle_key_up(&mut player, Key::Right);
        // Left is still held but horizontal velocity is zeroed anyway
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut player = Player::default();
        handle_key_down(&mut player, Key::Up);
        assert_eq!(player.vel.y, -12.0);
        assert!(player.airborne);

        player.vel.y = -3.0;
        handle_key_down(&mut player, Key::Up);
        assert_eq!(player.vel.y, -3.0);
    }

    #[test]
    fn test_up_release_does_nothing() {
        let mut player = Player {
            vel: Vec2::new(5.0, -7.0),
            ..Player::default()
        };
        handle_key_up(&mut player, Key::Up);
        assert_eq!(player.vel, Vec2::new(5.0, -7.0));
    }
}

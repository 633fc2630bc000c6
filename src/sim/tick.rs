//! Fixed timestep update loop
//!
//! One call to [`tick`] is one step at 60 Hz. Units are pixels and ticks; there
//! is no delta time.

use super::collision::{Aabb, lands_on};
use super::input::{InputEvent, handle_key_down, handle_key_up};
use super::state::{Player, SceneState};
use crate::consts::*;

/// Surface the player came to rest on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Ground,
    Platform(usize),
}

/// Notable things that happened during a step (informational only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player was airborne and came to rest
    Landed(Surface),
    /// Collectible picked up (index into `SceneState::collectibles`)
    Collected { index: usize },
}

/// Advance the scene by one step
pub fn tick(state: &mut SceneState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let was_airborne = state.player.airborne;
    let previous_bottom = state.player.bottom();
    let mut rest: Option<Surface> = None;

    state.time_ticks += 1;

    // 1. Candidate position from the velocity at the start of the tick
    let mut new_pos = state.player.pos + state.player.vel;

    // 2. Gravity always applies; resolution below may zero it again
    state.player.vel.y += GRAVITY;

    // 3. Ground
    if new_pos.y >= PLAYER_FLOOR_Y {
        new_pos.y = PLAYER_FLOOR_Y;
        state.player.vel.y = 0.0;
        state.player.airborne = false;
        rest = Some(Surface::Ground);
    }

    // 4. Platforms: only falling onto the top surface is blocked.
    // Every platform is checked; the last match wins.
    for (i, platform) in state.platforms.iter().enumerate() {
        let candidate = Aabb::at(new_pos, Player::SIZE);
        if lands_on(&candidate, previous_bottom, &platform.aabb()) {
            new_pos.y = platform.y - PLAYER_HEIGHT;
            state.player.vel.y = 0.0;
            state.player.airborne = false;
            rest = Some(Surface::Platform(i));
        }
    }

    // 5. Pickups, tested against the unclamped x
    let candidate = Aabb::at(new_pos, Player::SIZE);
    let hits: Vec<usize> = state
        .collectibles
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.collected && candidate.overlaps(&item.aabb()))
        .map(|(i, _)| i)
        .collect();
    for index in hits {
        if state.collect(index) {
            log::info!(
                "Collected \"{}\" ({}/{})",
                state.collectibles[index].title,
                state.score(),
                state.total()
            );
            events.push(GameEvent::Collected { index });
        }
    }

    // 6. Keep the player inside the scene horizontally
    new_pos.x = new_pos.x.clamp(0.0, PLAYER_MAX_X);

    // 7. Commit
    state.player.pos = new_pos;

    if was_airborne {
        if let Some(surface) = rest {
            log::debug!("Landed on {:?} at tick {}", surface, state.time_ticks);
            events.push(GameEvent::Landed(surface));
        }
    }

    events
}

impl SceneState {
    /// Apply one event in place
    pub fn apply(&mut self, event: InputEvent) -> Vec<GameEvent> {
        match event {
            InputEvent::KeyDown(key) => {
                handle_key_down(&mut self.player, key);
                Vec::new()
            }
            InputEvent::KeyUp(key) => {
                handle_key_up(&mut self.player, key);
                Vec::new()
            }
            InputEvent::Tick => tick(self),
            InputEvent::DismissDialog => {
                self.dismiss_dialog();
                Vec::new()
            }
        }
    }
}

/// Pure form of [`SceneState::apply`]: `(state, event) -> state`
pub fn transition(mut state: SceneState, event: InputEvent) -> (SceneState, Vec<GameEvent>) {
    let events = state.apply(event);
    (state, events)
}

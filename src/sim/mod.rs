//! Scene simulation
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Fixed step (one tick per 1/60 s, no delta time)
//! - Seeded RNG for the platform layout
//! - Input and dismissal go through `SceneState::apply`

pub mod collision;
pub mod content;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Aabb, lands_on};
pub use content::{CvEntry, default_entries, entries_or_default, load_entries};
pub use input::{InputEvent, Key, handle_key_down, handle_key_up};
pub use state::{Collectible, DialogState, Platform, Player, RngState, SceneState};
pub use tick::{GameEvent, Surface, tick, transition};

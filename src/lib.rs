//! CV Platformer - an interactive résumé played as a tiny platformer
//!
//! Core modules:
//! - `sim`: Simulation (scene state, input, fixed-step physics, pickups)
//! - `renderer`: Pure frame building plus the WebGPU painter
//! - `platform`: Browser host wiring (timer, key listeners, DOM HUD)
//! - `settings`: Runtime settings read from the page URL

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{ContentError, Error};
pub use settings::Settings;

/// Scene configuration constants
pub mod consts {
    /// Scene dimensions (pixels)
    pub const SCENE_WIDTH: f32 = 800.0;
    pub const SCENE_HEIGHT: f32 = 400.0;
    pub const GROUND_HEIGHT: f32 = 40.0;

    /// Player box
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_START_X: f32 = 50.0;

    /// Downward acceleration (px/tick²)
    pub const GRAVITY: f32 = 0.6;
    /// Upward velocity applied on jump (px/tick)
    pub const JUMP_STRENGTH: f32 = 12.0;
    /// Horizontal speed while a direction key is held (px/tick)
    pub const MOVE_SPEED: f32 = 5.0;

    /// Update loop cadence
    pub const TICK_RATE_HZ: u32 = 60;
    /// Interval between ticks in milliseconds (setInterval takes whole ms)
    pub const TICK_INTERVAL_MS: i32 = (1000 / TICK_RATE_HZ) as i32;

    /// Platform layout
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    pub const PLATFORM_FIRST_X: f32 = 200.0;
    pub const PLATFORM_SPACING: f32 = 300.0;
    /// Minimum gap between ground top and platform top
    pub const PLATFORM_BASE_LIFT: f32 = 100.0;
    /// Extra random lift, drawn from [0, PLATFORM_LIFT_JITTER)
    pub const PLATFORM_LIFT_JITTER: f32 = 100.0;

    /// Collectibles are square, offset from their platform
    pub const COLLECTIBLE_SIZE: f32 = 30.0;
    pub const COLLECTIBLE_OFFSET_X: f32 = 30.0;
    pub const COLLECTIBLE_OFFSET_Y: f32 = 40.0;

    /// Top of the ground bar
    pub const GROUND_TOP: f32 = SCENE_HEIGHT - GROUND_HEIGHT;
    /// Lowest y the player can occupy (standing on the ground)
    pub const PLAYER_FLOOR_Y: f32 = GROUND_TOP - PLAYER_HEIGHT;
    /// Rightmost x the player can occupy
    pub const PLAYER_MAX_X: f32 = SCENE_WIDTH - PLAYER_WIDTH;
}

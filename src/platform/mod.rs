//! Platform abstraction layer
//!
//! Browser host for the scene:
//! - Fixed 60 Hz timer driving the update loop
//! - Keyboard listeners
//! - DOM score readout, dialog and debug overlay
//!
//! The simulation never touches the host; everything here goes through
//! `SceneState::apply`.

#[cfg(target_arch = "wasm32")]
pub mod web;

//! Scene → frame description
//!
//! Pure: reads `SceneState`, returns what to paint. No drawing here.

use glam::Vec2;

use super::vertex::colors;
use crate::consts::*;
use crate::sim::{Aabb, SceneState};

/// A filled primitive in scene pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect { rect: Aabb, color: [f32; 4] },
    Circle { center: Vec2, radius: f32, color: [f32; 4] },
}

/// Dialog contents to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub title: String,
    pub description: String,
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub background: [f32; 4],
    /// Back to front
    pub shapes: Vec<Shape>,
    pub score_text: String,
    pub dialog: Option<DialogView>,
}

/// Build the frame for the current state
pub fn build_frame(state: &SceneState) -> Frame {
    let mut shapes = Vec::with_capacity(2 + state.platforms.len() + state.collectibles.len());

    shapes.push(Shape::Rect {
        rect: Aabb::new(0.0, GROUND_TOP, SCENE_WIDTH, GROUND_HEIGHT),
        color: colors::GROUND,
    });

    for platform in &state.platforms {
        shapes.push(Shape::Rect {
            rect: platform.aabb(),
            color: colors::PLATFORM,
        });
    }

    let radius = COLLECTIBLE_SIZE / 2.0;
    for item in state.collectibles.iter().filter(|c| !c.collected) {
        shapes.push(Shape::Circle {
            center: Vec2::new(item.x + radius, item.y + radius),
            radius,
            color: colors::COLLECTIBLE,
        });
    }

    shapes.push(Shape::Rect {
        rect: state.player.aabb(),
        color: colors::PLAYER,
    });

    let dialog = state.dialog.visible.then(|| DialogView {
        title: state.dialog.title.clone(),
        description: state.dialog.description.clone(),
    });

    Frame {
        background: colors::SKY,
        shapes,
        score_text: score_text(state),
        dialog,
    }
}

/// "Score: collected/total"
pub fn score_text(state: &SceneState) -> String {
    format!("Score: {}/{}", state.score(), state.total())
}

/// Position/velocity readout for the debug overlay
pub fn debug_text(state: &SceneState) -> String {
    let p = &state.player;
    format!(
        "tick {} pos ({:.1}, {:.1}) vel ({:.1}, {:.1}){}",
        state.time_ticks,
        p.pos.x,
        p.pos.y,
        p.vel.x,
        p.vel.y,
        if p.airborne { " airborne" } else { "" }
    )
}

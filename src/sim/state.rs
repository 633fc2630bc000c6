//! Scene state and entity types
//!
//! Everything the update loop and renderer read lives in `SceneState`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::content::CvEntry;
use crate::consts::*;

/// The player sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner (pixels)
    pub pos: Vec2,
    /// Velocity (pixels/tick)
    pub vel: Vec2,
    /// Not resting on the ground or a platform
    pub airborne: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_FLOOR_Y),
            vel: Vec2::ZERO,
            airborne: false,
        }
    }
}

impl Player {
    pub const SIZE: Vec2 = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);

    pub fn aabb(&self) -> Aabb {
        Aabb::at(self.pos, Self::SIZE)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + PLAYER_HEIGHT
    }
}

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// A floating item carrying one CV entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub x: f32,
    pub y: f32,
    pub title: String,
    pub description: String,
    pub collected: bool,
}

impl Collectible {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, COLLECTIBLE_SIZE, COLLECTIBLE_SIZE)
    }
}

/// Modal dialog contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogState {
    pub visible: bool,
    pub title: String,
    pub description: String,
}

impl DialogState {
    /// Show an entry (replaces whatever was shown)
    pub fn open(&mut self, title: &str, description: &str) {
        self.title = title.to_owned();
        self.description = description.to_owned();
        self.visible = true;
    }

    /// Hide the dialog; content is kept
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete scene state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneState {
    /// Layout seed
    pub seed: u64,
    pub player: Player,
    /// Immutable after construction
    pub platforms: Vec<Platform>,
    /// One per platform, same index
    pub collectibles: Vec<Collectible>,
    /// Indices into `collectibles`, in pickup order
    pub collected: Vec<usize>,
    pub dialog: DialogState,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SceneState {
    /// Lay out one platform and one collectible per entry
    pub fn new(seed: u64, entries: &[CvEntry]) -> Self {
        let mut rng = RngState::new(seed).to_rng();

        let platforms: Vec<Platform> = (0..entries.len())
            .map(|i| {
                let lift = PLATFORM_BASE_LIFT + rng.random::<f32>() * PLATFORM_LIFT_JITTER;
                Platform {
                    x: PLATFORM_FIRST_X + PLATFORM_SPACING * i as f32,
                    y: GROUND_TOP - lift,
                    width: PLATFORM_WIDTH,
                    height: PLATFORM_HEIGHT,
                }
            })
            .collect();

        let collectibles = platforms
            .iter()
            .zip(entries)
            .map(|(platform, entry)| Collectible {
                x: platform.x + COLLECTIBLE_OFFSET_X,
                y: platform.y - COLLECTIBLE_OFFSET_Y,
                title: entry.title.clone(),
                description: entry.description.clone(),
                collected: false,
            })
            .collect();

        log::info!("Scene laid out with seed {}: {} platforms", seed, platforms.len());
        for (i, p) in platforms.iter().enumerate() {
            log::debug!("  platform {}: x={} y={:.1}", i, p.x, p.y);
        }

        Self {
            seed,
            player: Player::default(),
            platforms,
            collectibles,
            collected: Vec::new(),
            dialog: DialogState::default(),
            time_ticks: 0,
        }
    }

    /// Number of collectibles picked up
    pub fn score(&self) -> usize {
        self.collected.len()
    }

    /// Total collectibles in the scene
    pub fn total(&self) -> usize {
        self.collectibles.len()
    }

    /// All items picked up
    pub fn is_complete(&self) -> bool {
        self.score() == self.total()
    }

    /// Close the dialog. Dismissing a hidden dialog changes nothing.
    pub fn dismiss_dialog(&mut self) {
        self.dialog.dismiss();
    }

    /// Mark collectible `index` as picked up and show its entry.
    /// Returns false if it was already collected.
    pub(crate) fn collect(&mut self, index: usize) -> bool {
        let Some(item) = self.collectibles.get_mut(index) else {
            return false;
        };
        if item.collected {
            return false;
        }
        item.collected = true;
        self.collected.push(index);
        self.dialog.open(&item.title, &item.description);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::content::default_entries;

    #[test]
    fn test_layout_matches_entries() {
        let state = SceneState::new(7, &default_entries());
        assert_eq!(state.platforms.len(), 5);
        assert_eq!(state.collectibles.len(), 5);

        for (i, (platform, item)) in state.platforms.iter().zip(&state.collectibles).enumerate() {
            assert_eq!(platform.x, 200.0 + 300.0 * i as f32);
            assert_eq!(platform.width, 100.0);
            assert_eq!(platform.height, 20.0);
            // y = 400 - 40 - 100 - [0, 100)
            assert!(platform.y <= 260.0 && platform.y >= 160.0, "y = {}", platform.y);
            assert_eq!(item.x, platform.x + 30.0);
            assert_eq!(item.y, platform.y - 40.0);
            assert!(!item.collected);
        }
    }

    #[test]
    fn test_layout_is_seeded() {
        let a = SceneState::new(42, &default_entries());
        let b = SceneState::new(42, &default_entries());
        let c = SceneState::new(43, &default_entries());
        assert_eq!(a.platforms, b.platforms);
        assert_ne!(a.platforms, c.platforms);
    }

    #[test]
    fn test_initial_player() {
        let state = SceneState::new(1, &default_entries());
        assert_eq!(state.player.pos, Vec2::new(50.0, 300.0));
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert!(!state.player.airborne);
        assert!(!state.dialog.visible);
        assert_eq!(state.score(), 0);
        assert_eq!(state.total(), 5);
    }

    #[test]
    fn test_collect_once() {
        let mut state = SceneState::new(1, &default_entries());
        assert!(state.collect(2));
        assert!(!state.collect(2));
        assert_eq!(state.collected, vec![2]);
        assert!(state.dialog.visible);
        assert_eq!(state.dialog.title, "Formation");
    }

    #[test]
    fn test_dismiss_keeps_content() {
        let mut state = SceneState::new(1, &default_entries());
        state.collect(0);
        state.dismiss_dialog();
        assert!(!state.dialog.visible);
        assert_eq!(state.dialog.title, "Infos Personnelles");

        state.dismiss_dialog();
        assert!(!state.dialog.visible);
    }

    #[test]
    fn test_empty_entries_gives_empty_scene() {
        let state = SceneState::new(1, &[]);
        assert!(state.platforms.is_empty());
        assert!(state.is_complete());
    }
}

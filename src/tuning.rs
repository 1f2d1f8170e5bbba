//! Data-driven game balance
//!
//! Shipped defaults match `consts`; a JSON file can override any subset of
//! fields. Load failures are not fatal; the game runs on defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance values for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Thrust applied per held arrow key (units/s²)
    pub turtle_acceleration: f32,
    pub turtle_max_speed: f32,
    /// Drag applied on coasting ticks (units/s²)
    pub turtle_deceleration: f32,
    /// Starfish idle spin (degrees/s)
    pub starfish_spin_rate: f32,
    /// Starfish fade-out after collection (s)
    pub collect_fade_duration: f32,
    /// Pause before the win banner starts fading in (s)
    pub banner_delay: f32,
    pub banner_fade_duration: f32,
    pub whirlpool_opacity: f32,
    pub turtle_spawn: Vec2,
    pub starfish_spawn: Vec2,
    pub world_size: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            turtle_acceleration: TURTLE_ACCELERATION,
            turtle_max_speed: TURTLE_MAX_SPEED,
            turtle_deceleration: TURTLE_DECELERATION,
            starfish_spin_rate: STARFISH_SPIN_RATE,
            collect_fade_duration: COLLECT_FADE_DURATION,
            banner_delay: BANNER_DELAY,
            banner_fade_duration: BANNER_FADE_DURATION,
            whirlpool_opacity: WHIRLPOOL_OPACITY,
            turtle_spawn: Vec2::new(20.0, 20.0),
            starfish_spawn: Vec2::new(380.0, 380.0),
            world_size: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
        }
    }
}

impl Tuning {
    /// Load overrides from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {path}");
                    tuning
                }
                Err(err) => {
                    log::warn!("Ignoring malformed tuning file {path}: {err}");
                    Self::default()
                }
            },
            Err(err) => {
                log::debug!("No tuning file at {path} ({err}); using defaults");
                Self::default()
            }
        }
    }
}

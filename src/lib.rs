//! Starfish Cove - a tiny ocean arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, physics, collisions, game state)
//! - `render`: Sprite-list building for a host renderer
//! - `assets`: Texture/frame catalog the host loader must satisfy
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the host frame rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions (world units == background pixels)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Turtle movement
    pub const TURTLE_ACCELERATION: f32 = 400.0;
    pub const TURTLE_MAX_SPEED: f32 = 200.0;
    pub const TURTLE_DECELERATION: f32 = 400.0;

    /// Speed cap for actors that never call `set_max_speed`
    pub const DEFAULT_MAX_SPEED: f32 = 1000.0;

    /// Collision polygons are octagons inscribed in the sprite box
    pub const BOUNDARY_SIDES: usize = 8;

    /// Frame time for the turtle swim cycle and the whirlpool sheet
    pub const SWIM_FRAME_DURATION: f32 = 0.1;
    pub const WHIRLPOOL_FRAME_DURATION: f32 = 0.1;

    /// Starfish spin rate (degrees per second)
    pub const STARFISH_SPIN_RATE: f32 = 30.0;

    /// Win sequence timing
    pub const COLLECT_FADE_DURATION: f32 = 1.0;
    pub const BANNER_DELAY: f32 = 1.0;
    pub const BANNER_FADE_DURATION: f32 = 1.0;
    pub const WHIRLPOOL_OPACITY: f32 = 0.25;
}

/// Unit vector for an angle in degrees (0° = +x, CCW positive)
///
/// Exact at the cardinals so opposed key thrusts cancel to a true zero.
#[inline]
pub fn vec_from_angle_deg(degrees: f32) -> Vec2 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped == 0.0 {
        Vec2::X
    } else if wrapped == 90.0 {
        Vec2::Y
    } else if wrapped == 180.0 {
        -Vec2::X
    } else if wrapped == 270.0 {
        -Vec2::Y
    } else {
        let rad = wrapped.to_radians();
        Vec2::new(rad.cos(), rad.sin())
    }
}

/// Angle of a vector in degrees, normalized to [0, 360)
#[inline]
pub fn angle_deg(v: Vec2) -> f32 {
    let deg = v.y.atan2(v.x).to_degrees();
    if deg < 0.0 { deg + 360.0 } else { deg }
}

//! Texture and frame catalog
//!
//! Decoding and upload are host concerns; the sim addresses textures by name
//! and needs only the pixel dimensions declared here. A host loader must
//! provide an image for every name in this module at the listed size.

use glam::Vec2;

/// Ocean backdrop
pub const WATER: &str = "water";
pub const WATER_SIZE: Vec2 = Vec2::new(800.0, 600.0);

/// Turtle swim cycle, one file per frame
pub const TURTLE_FRAMES: [&str; 6] = [
    "turtle-1", "turtle-2", "turtle-3", "turtle-4", "turtle-5", "turtle-6",
];
pub const TURTLE_FRAME_SIZE: Vec2 = Vec2::new(64.0, 64.0);

pub const STARFISH: &str = "starfish";
pub const STARFISH_SIZE: Vec2 = Vec2::new(32.0, 32.0);

/// Whirlpool sheet, sliced row-major
pub const WHIRLPOOL_SHEET: &str = "whirlpool";
pub const WHIRLPOOL_SHEET_SIZE: Vec2 = Vec2::new(500.0, 200.0);
pub const WHIRLPOOL_ROWS: usize = 2;
pub const WHIRLPOOL_COLS: usize = 5;

pub const YOU_WIN: &str = "you-win";
pub const YOU_WIN_SIZE: Vec2 = Vec2::new(180.0, 80.0);

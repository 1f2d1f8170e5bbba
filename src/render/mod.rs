//! Sprite-list building for a host renderer

pub mod sprites;

pub use sprites::{SpriteCommand, SpriteInstance, build_sprite_list};

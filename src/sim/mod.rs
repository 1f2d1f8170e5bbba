//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable update order (backdrop, entities, effects)
//! - No rendering or platform dependencies

pub mod action;
pub mod actor;
pub mod animation;
pub mod polygon;
pub mod state;
pub mod tick;

pub use action::{Sequence, Step};
pub use actor::Actor;
pub use animation::{Animation, Frame, PlayMode, Region};
pub use polygon::{Rect, overlap_convex_polygons};
pub use state::{GamePhase, GameState, Starfish, StarfishState, Turtle, WinBanner, Whirlpool};
pub use tick::{TickInput, tick};

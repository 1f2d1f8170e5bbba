//! Game state and entity types
//!
//! One turtle, one starfish, and the effects the win sequence spawns. All
//! actors are owned here and mutated in place by `tick`.

use glam::Vec2;

use super::action::{Sequence, Step};
use super::actor::Actor;
use super::animation::{Animation, PlayMode};
use crate::assets;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Steering toward the starfish
    Playing,
    /// Starfish collected; win visuals playing out
    Won,
}

/// Collection state; the transition is monotonic and fires exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarfishState {
    Active,
    Collected,
}

/// The player: keyboard-driven thrust, swim cycle paused while idle
#[derive(Debug, Clone)]
pub struct Turtle {
    pub actor: Actor,
}

impl Turtle {
    pub fn new(spawn: Vec2, tuning: &Tuning) -> Self {
        let mut actor = Actor::new(spawn.x, spawn.y);
        actor.set_animation(Animation::from_files(
            &assets::TURTLE_FRAMES,
            assets::TURTLE_FRAME_SIZE,
            SWIM_FRAME_DURATION,
            PlayMode::Loop,
        ));
        actor.set_acceleration(tuning.turtle_acceleration);
        actor.set_max_speed(tuning.turtle_max_speed);
        actor.set_deceleration(tuning.turtle_deceleration);
        actor.set_boundary_polygon(BOUNDARY_SIDES);
        Self { actor }
    }
}

/// The collectible: spins in place until the turtle touches it
#[derive(Debug, Clone)]
pub struct Starfish {
    pub actor: Actor,
    pub state: StarfishState,
}

impl Starfish {
    pub fn new(spawn: Vec2, tuning: &Tuning) -> Self {
        let mut actor = Actor::new(spawn.x, spawn.y);
        actor.set_animation(Animation::from_texture(
            assets::STARFISH,
            assets::STARFISH_SIZE,
        ));
        actor.set_boundary_polygon(BOUNDARY_SIDES);
        actor.actions.push(Sequence::forever(vec![Step::RotateBy {
            degrees_per_sec: tuning.starfish_spin_rate,
        }]));
        Self {
            actor,
            state: StarfishState::Active,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.state == StarfishState::Collected
    }

    /// Fire the Active→Collected transition: stop spinning, fade out, leave
    pub fn collect(&mut self, tuning: &Tuning) {
        self.state = StarfishState::Collected;
        self.actor.actions.clear();
        self.actor.actions.push(Sequence::once(vec![
            Step::FadeTo {
                target: 0.0,
                duration: tuning.collect_fade_duration,
            },
            Step::Remove,
        ]));
    }
}

/// Collection splash: a one-shot sheet animation that removes itself
#[derive(Debug, Clone)]
pub struct Whirlpool {
    pub actor: Actor,
}

impl Whirlpool {
    /// Spawned centered on a point at reduced opacity
    pub fn new(center: Vec2, tuning: &Tuning) -> Self {
        let mut actor = Actor::new(0.0, 0.0);
        actor.set_animation(Animation::from_sheet(
            assets::WHIRLPOOL_SHEET,
            assets::WHIRLPOOL_SHEET_SIZE,
            assets::WHIRLPOOL_ROWS,
            assets::WHIRLPOOL_COLS,
            WHIRLPOOL_FRAME_DURATION,
            PlayMode::Once,
        ));
        actor.center_at_position(center);
        actor.set_opacity(tuning.whirlpool_opacity);
        Self { actor }
    }
}

/// "You win" message: waits, then fades in over the arena center
#[derive(Debug, Clone)]
pub struct WinBanner {
    pub actor: Actor,
}

impl WinBanner {
    pub fn new(tuning: &Tuning) -> Self {
        let mut actor = Actor::new(0.0, 0.0);
        actor.set_animation(Animation::from_texture(
            assets::YOU_WIN,
            assets::YOU_WIN_SIZE,
        ));
        actor.center_at_position(tuning.world_size / 2.0);
        actor.set_opacity(0.0);
        actor.actions.push(Sequence::once(vec![
            Step::Delay {
                duration: tuning.banner_delay,
            },
            Step::FadeTo {
                target: 1.0,
                duration: tuning.banner_fade_duration,
            },
        ]));
        Self { actor }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Backdrop, drawn first; never collides
    pub ocean: Actor,
    pub turtle: Turtle,
    /// None once the fade-out finishes and the actor leaves the scene
    pub starfish: Option<Starfish>,
    pub whirlpools: Vec<Whirlpool>,
    pub banners: Vec<WinBanner>,
    pub tuning: Tuning,
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        let mut ocean = Actor::new(0.0, 0.0);
        ocean.set_animation(Animation::from_texture(assets::WATER, assets::WATER_SIZE));
        ocean.size = tuning.world_size;

        let turtle = Turtle::new(tuning.turtle_spawn, &tuning);
        let starfish = Starfish::new(tuning.starfish_spawn, &tuning);

        Self {
            phase: GamePhase::Playing,
            time_ticks: 0,
            ocean,
            turtle,
            starfish: Some(starfish),
            whirlpools: Vec::new(),
            banners: Vec::new(),
            tuning,
        }
    }
}

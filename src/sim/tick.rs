//! Fixed timestep simulation tick
//!
//! Advances every actor one step and runs the collection state machine.
//! Ticking continues after the win so the fades and the whirlpool play out.

use super::action::update_actions;
use super::state::{GamePhase, GameState, Turtle, Whirlpool, WinBanner};

/// Held arrow keys for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    state.ocean.advance_animation(dt);

    // Starfish: spin (or fade once collected), leave the scene when done
    if let Some(starfish) = &mut state.starfish {
        starfish.actor.advance_animation(dt);
        if update_actions(&mut starfish.actor, dt) {
            state.starfish = None;
        }
    }

    update_turtle(&mut state.turtle, input, dt);

    // Whirlpools reap themselves the tick after the final frame shows
    for pool in &mut state.whirlpools {
        pool.actor.advance_animation(dt);
    }
    state
        .whirlpools
        .retain(|pool| !pool.actor.is_animation_finished());

    for banner in &mut state.banners {
        banner.actor.advance_animation(dt);
        update_actions(&mut banner.actor, dt);
    }

    // Collection fires exactly once; the state transition is the guard
    let mut collected_center = None;
    if let Some(starfish) = &mut state.starfish {
        if !starfish.is_collected() && starfish.actor.overlaps(&state.turtle.actor) {
            starfish.collect(&state.tuning);
            collected_center = Some(starfish.actor.center());
        }
    }
    if let Some(center) = collected_center {
        state.whirlpools.push(Whirlpool::new(center, &state.tuning));
        state.banners.push(WinBanner::new(&state.tuning));
        state.phase = GamePhase::Won;
    }
}

/// Key-driven thrust, physics, swim-cycle pause, facing
fn update_turtle(turtle: &mut Turtle, input: &TickInput, dt: f32) {
    let actor = &mut turtle.actor;
    actor.advance_animation(dt);

    if input.left {
        actor.accelerate_at_angle(180.0);
    }
    if input.right {
        actor.accelerate_at_angle(0.0);
    }
    if input.up {
        actor.accelerate_at_angle(90.0);
    }
    if input.down {
        actor.accelerate_at_angle(270.0);
    }

    actor.apply_physics(dt);

    actor.animation_paused = !actor.is_moving();
    if actor.speed() > 0.0 {
        actor.rotation = actor.motion_angle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::StarfishState;
    use crate::tuning::Tuning;

    const DT: f32 = 0.1;

    fn fresh_state() -> GameState {
        GameState::new(Tuning::default())
    }

    /// State with the turtle already sitting on the starfish
    fn touching_state() -> GameState {
        let mut state = fresh_state();
        let target = state.starfish.as_ref().unwrap().actor.center();
        state.turtle.actor.center_at_position(target);
        state
    }

    #[test]
    fn test_right_key_moves_turtle() {
        let mut state = fresh_state();
        let input = TickInput {
            right: true,
            ..TickInput::default()
        };
        let x0 = state.turtle.actor.position.x;
        for _ in 0..10 {
            tick(&mut state, &input, DT);
        }
        assert!(state.turtle.actor.position.x > x0);
        assert_eq!(state.turtle.actor.rotation, 0.0);
    }

    #[test]
    fn test_turtle_faces_motion_angle() {
        let mut state = fresh_state();
        let input = TickInput {
            up: true,
            ..TickInput::default()
        };
        tick(&mut state, &input, DT);
        assert!((state.turtle.actor.rotation - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_swim_cycle_pauses_iff_stationary() {
        let mut state = fresh_state();
        let swim = TickInput {
            right: true,
            ..TickInput::default()
        };
        tick(&mut state, &swim, DT);
        assert!(!state.turtle.actor.animation_paused);

        // Coast until drag stops the turtle
        let idle = TickInput::default();
        for _ in 0..20 {
            tick(&mut state, &idle, DT);
        }
        assert!(!state.turtle.actor.is_moving());
        assert!(state.turtle.actor.animation_paused);
    }

    #[test]
    fn test_starfish_spins_while_active() {
        let mut state = fresh_state();
        let input = TickInput::default();
        for _ in 0..10 {
            tick(&mut state, &input, DT);
        }
        let starfish = state.starfish.as_ref().unwrap();
        let expected = state.tuning.starfish_spin_rate;
        assert!((starfish.actor.rotation - expected).abs() < 1e-2);
    }

    #[test]
    fn test_collection_fires_exactly_once() {
        let mut state = touching_state();
        let input = TickInput::default();

        tick(&mut state, &input, DT);
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(
            state.starfish.as_ref().unwrap().state,
            StarfishState::Collected
        );
        assert_eq!(state.whirlpools.len(), 1);
        assert_eq!(state.banners.len(), 1);

        // Overlap persists through the fade; nothing re-fires
        for _ in 0..5 {
            tick(&mut state, &input, DT);
        }
        assert_eq!(state.whirlpools.len(), 1);
        assert_eq!(state.banners.len(), 1);
    }

    #[test]
    fn test_collected_starfish_fades_and_leaves() {
        let mut state = touching_state();
        let input = TickInput::default();
        tick(&mut state, &input, DT);

        // 1 s fade, then removal
        for _ in 0..9 {
            tick(&mut state, &input, DT);
            let starfish = state.starfish.as_ref().unwrap();
            assert!(starfish.actor.opacity() < 1.0);
        }
        for _ in 0..2 {
            tick(&mut state, &input, DT);
        }
        assert!(state.starfish.is_none());
    }

    #[test]
    fn test_whirlpool_centered_on_starfish_at_quarter_opacity() {
        let mut state = touching_state();
        let starfish_center = state.starfish.as_ref().unwrap().actor.center();
        tick(&mut state, &TickInput::default(), DT);
        let pool = &state.whirlpools[0];
        assert!((pool.actor.center() - starfish_center).length() < 1e-3);
        assert!((pool.actor.opacity() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_whirlpool_leaves_one_tick_after_final_frame() {
        let mut state = touching_state();
        let input = TickInput::default();
        tick(&mut state, &input, DT);

        // 10 frames at 0.1 s; the final frame first shows at 0.9 s
        for _ in 0..9 {
            tick(&mut state, &input, DT);
        }
        assert_eq!(state.whirlpools.len(), 1);
        tick(&mut state, &input, DT);
        assert!(state.whirlpools.is_empty());
    }

    #[test]
    fn test_banner_waits_then_fades_in() {
        let mut state = touching_state();
        let input = TickInput::default();
        tick(&mut state, &input, DT);

        // Still transparent through the 1 s delay
        for _ in 0..9 {
            tick(&mut state, &input, DT);
            assert_eq!(state.banners[0].actor.opacity(), 0.0);
        }
        // Fully opaque after the 1 s fade
        for _ in 0..12 {
            tick(&mut state, &input, DT);
        }
        assert!(state.banners[0].actor.opacity() > 0.999);
        assert_eq!(state.banners.len(), 1);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut state = fresh_state();
        let input = TickInput {
            left: true,
            right: true,
            ..TickInput::default()
        };
        for _ in 0..5 {
            tick(&mut state, &input, DT);
        }
        // Opposite thrusts sum to zero acceleration, but a zero accumulator
        // is what enables drag, so the turtle simply never starts moving.
        assert!(!state.turtle.actor.is_moving());
    }
}

//! Declarative per-actor action schedules
//!
//! A sequence is an ordered list of steps advanced front-to-back each tick;
//! an actor can carry several sequences in parallel. Leftover tick time
//! carries across completed steps, so a delay followed by a fade starts the
//! fade mid-tick instead of losing the remainder.

use super::actor::Actor;

/// One step in an action sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Wait this many seconds
    Delay { duration: f32 },
    /// Linear opacity ramp to `target`, from the opacity seen when the step starts
    FadeTo { target: f32, duration: f32 },
    /// Spin at a constant rate; never completes on its own
    RotateBy { degrees_per_sec: f32 },
    /// Mark the actor for removal from the scene
    Remove,
}

/// An ordered step list run front-to-back, optionally forever
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    steps: Vec<Step>,
    repeat: bool,
    cursor: usize,
    elapsed: f32,
    start_opacity: Option<f32>,
}

impl Sequence {
    pub fn once(steps: Vec<Step>) -> Self {
        Self {
            steps,
            repeat: false,
            cursor: 0,
            elapsed: 0.0,
            start_opacity: None,
        }
    }

    pub fn forever(steps: Vec<Step>) -> Self {
        Self {
            repeat: true,
            ..Self::once(steps)
        }
    }

    fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Move to the next step, wrapping when repeating
    fn advance_cursor(&mut self) {
        self.cursor += 1;
        self.elapsed = 0.0;
        self.start_opacity = None;
        if self.repeat && self.cursor >= self.steps.len() {
            self.cursor = 0;
        }
    }
}

/// Advance all of an actor's sequences by one tick
///
/// Returns true when a `Remove` step fired; the caller owns the scene and
/// drops the actor. Finished sequences are discarded.
pub fn update_actions(actor: &mut Actor, dt: f32) -> bool {
    let mut remove = false;
    let mut sequences = std::mem::take(&mut actor.actions);

    for seq in &mut sequences {
        let mut dt_left = dt;
        // A repeating sequence of zero-duration steps would wrap without
        // consuming time; cap the walk at one full lap past the step count.
        let mut walked = 0;
        while !seq.is_finished() && walked <= seq.steps.len() {
            walked += 1;
            match seq.steps[seq.cursor] {
                Step::Delay { duration } => {
                    let remaining = duration - seq.elapsed;
                    if dt_left < remaining {
                        seq.elapsed += dt_left;
                        break;
                    }
                    dt_left -= remaining;
                    seq.advance_cursor();
                }
                Step::FadeTo { target, duration } => {
                    let start = *seq.start_opacity.get_or_insert(actor.opacity());
                    let remaining = duration - seq.elapsed;
                    if dt_left < remaining {
                        seq.elapsed += dt_left;
                        let t = seq.elapsed / duration;
                        actor.set_opacity(start + (target - start) * t);
                        break;
                    }
                    dt_left -= remaining;
                    actor.set_opacity(target);
                    seq.advance_cursor();
                }
                Step::RotateBy { degrees_per_sec } => {
                    actor.rotation += degrees_per_sec * dt_left;
                    break;
                }
                Step::Remove => {
                    remove = true;
                    seq.advance_cursor();
                    break;
                }
            }
        }
    }

    sequences.retain(|seq| !seq.is_finished());
    actor.actions = sequences;
    remove
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_actor() -> Actor {
        Actor::new(0.0, 0.0)
    }

    #[test]
    fn test_spin_forever() {
        let mut actor = plain_actor();
        actor.actions.push(Sequence::forever(vec![Step::RotateBy {
            degrees_per_sec: 30.0,
        }]));
        for _ in 0..10 {
            assert!(!update_actions(&mut actor, 0.1));
        }
        assert!((actor.rotation - 30.0).abs() < 1e-4);
        assert_eq!(actor.actions.len(), 1);
    }

    #[test]
    fn test_fade_out_then_remove() {
        let mut actor = plain_actor();
        actor.actions.push(Sequence::once(vec![
            Step::FadeTo {
                target: 0.0,
                duration: 1.0,
            },
            Step::Remove,
        ]));

        let mut removed = false;
        for _ in 0..11 {
            removed = update_actions(&mut actor, 0.1);
            if removed {
                break;
            }
        }
        assert!(removed);
        assert_eq!(actor.opacity(), 0.0);
    }

    #[test]
    fn test_fade_is_linear_from_start_opacity() {
        let mut actor = plain_actor();
        actor.set_opacity(0.5);
        actor.actions.push(Sequence::once(vec![Step::FadeTo {
            target: 0.0,
            duration: 1.0,
        }]));
        update_actions(&mut actor, 0.5);
        assert!((actor.opacity() - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_leftover_dt_crosses_step_boundary() {
        let mut actor = plain_actor();
        actor.set_opacity(0.0);
        actor.actions.push(Sequence::once(vec![
            Step::Delay { duration: 1.0 },
            Step::FadeTo {
                target: 1.0,
                duration: 1.0,
            },
        ]));

        // 0.95s of delay, then a tick that spends 0.05s finishing the delay
        // and 0.05s inside the fade.
        update_actions(&mut actor, 0.95);
        assert_eq!(actor.opacity(), 0.0);
        update_actions(&mut actor, 0.1);
        assert!((actor.opacity() - 0.05).abs() < 1e-4);
    }

    #[test]
    fn test_finished_sequence_is_discarded() {
        let mut actor = plain_actor();
        actor.actions.push(Sequence::once(vec![Step::Delay {
            duration: 0.1,
        }]));
        update_actions(&mut actor, 0.2);
        assert!(actor.actions.is_empty());
    }

    #[test]
    fn test_parallel_sequences() {
        let mut actor = plain_actor();
        actor.actions.push(Sequence::forever(vec![Step::RotateBy {
            degrees_per_sec: 90.0,
        }]));
        actor.actions.push(Sequence::once(vec![Step::FadeTo {
            target: 0.0,
            duration: 2.0,
        }]));
        update_actions(&mut actor, 1.0);
        assert!((actor.rotation - 90.0).abs() < 1e-4);
        assert!((actor.opacity() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_zero_duration_steps_do_not_hang() {
        let mut actor = plain_actor();
        actor
            .actions
            .push(Sequence::forever(vec![Step::Delay { duration: 0.0 }]));
        update_actions(&mut actor, 0.1);
        assert_eq!(actor.actions.len(), 1);
    }
}

//! Starfish Cove entry point
//!
//! Headless demo: a fixed-timestep loop with a scripted autopilot steering
//! the turtle onto the starfish, logging the run as it plays out. A host
//! with a real window feeds `TickInput` from its keyboard instead.

use starfish_cove::Tuning;
use starfish_cove::consts::{MAX_SUBSTEPS, SIM_DT};
use starfish_cove::render::build_sprite_list;
use starfish_cove::sim::{GamePhase, GameState, TickInput, tick};

/// Frame cap for the demo run (a minute of simulated time)
const MAX_FRAMES: u32 = 60 * 60;

/// Game instance holding all state
struct Game {
    state: GameState,
    accumulator: f32,
}

impl Game {
    fn new(tuning: Tuning) -> Self {
        Self {
            state: GameState::new(tuning),
            accumulator: 0.0,
        }
    }

    /// Run simulation ticks for one rendered frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = autopilot(&self.state);
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    /// True once the win visuals have fully played out
    fn finished(&self) -> bool {
        self.state.phase == GamePhase::Won
            && self.state.whirlpools.is_empty()
            && self
                .state
                .banners
                .iter()
                .all(|banner| banner.actor.opacity() >= 1.0)
    }
}

/// Hold the arrow keys that close the gap to the starfish
fn autopilot(state: &GameState) -> TickInput {
    let Some(starfish) = &state.starfish else {
        return TickInput::default();
    };
    let gap = starfish.actor.center() - state.turtle.actor.center();
    let dead_zone = 4.0;
    TickInput {
        left: gap.x < -dead_zone,
        right: gap.x > dead_zone,
        up: gap.y > dead_zone,
        down: gap.y < -dead_zone,
    }
}

fn main() {
    env_logger::init();
    log::info!("Starfish Cove starting");

    let tuning = Tuning::load_or_default("tuning.json");
    let mut game = Game::new(tuning);
    let mut last_phase = game.state.phase;

    for frame in 0..MAX_FRAMES {
        game.update(SIM_DT);

        if game.state.phase != last_phase {
            let pos = game.state.turtle.actor.position;
            log::info!(
                "Starfish collected on tick {} at turtle position ({:.1}, {:.1})",
                game.state.time_ticks,
                pos.x,
                pos.y
            );
            last_phase = game.state.phase;
        }

        if frame % 60 == 0 {
            let pos = game.state.turtle.actor.position;
            log::debug!(
                "tick {}: turtle at ({:.1}, {:.1}), speed {:.1}",
                game.state.time_ticks,
                pos.x,
                pos.y,
                game.state.turtle.actor.speed()
            );
        }

        if game.finished() {
            let sprites = build_sprite_list(&game.state);
            log::info!(
                "Win sequence complete after {} ticks ({} sprites in the final frame)",
                game.state.time_ticks,
                sprites.len()
            );
            return;
        }
    }

    log::warn!("Demo hit the frame cap without finishing the win sequence");
}

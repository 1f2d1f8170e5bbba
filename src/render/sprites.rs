//! Flattening game state into draw-ordered sprite commands
//!
//! The host owns textures and draw submission; it walks the returned list
//! back-to-front and draws one textured quad per command. The instance
//! payload is Pod so a batch can be uploaded as-is.

use bytemuck::{Pod, Zeroable};

use crate::sim::actor::Actor;
use crate::sim::state::GameState;

/// Per-sprite transform and tint, laid out for direct GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Bottom-left corner in world units
    pub position: [f32; 2],
    /// Rotation/scale pivot, local to the sprite box
    pub origin: [f32; 2],
    /// Unscaled sprite box
    pub size: [f32; 2],
    pub scale: [f32; 2],
    /// Degrees CCW about the origin
    pub rotation: f32,
    /// RGBA tint; alpha carries the actor opacity
    pub color: [f32; 4],
}

/// One textured quad for the host renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteCommand {
    /// Texture name from the asset catalog
    pub texture: &'static str,
    /// Source region in texture pixels: x, y, w, h
    pub region: [f32; 4],
    pub instance: SpriteInstance,
}

fn push_actor(out: &mut Vec<SpriteCommand>, actor: &Actor) {
    if !actor.visible {
        return;
    }
    let Some(frame) = actor.current_frame() else {
        return;
    };
    out.push(SpriteCommand {
        texture: frame.texture,
        region: [frame.region.x, frame.region.y, frame.region.w, frame.region.h],
        instance: SpriteInstance {
            position: actor.position.into(),
            origin: actor.origin.into(),
            size: actor.size.into(),
            scale: actor.scale.into(),
            rotation: actor.rotation,
            color: actor.color.into(),
        },
    });
}

/// Build the frame's sprite list, back to front
///
/// Order matches scene insertion: backdrop, starfish, turtle, then the win
/// effects on top.
pub fn build_sprite_list(state: &GameState) -> Vec<SpriteCommand> {
    let mut out = Vec::with_capacity(4 + state.whirlpools.len() + state.banners.len());
    push_actor(&mut out, &state.ocean);
    if let Some(starfish) = &state.starfish {
        push_actor(&mut out, &starfish.actor);
    }
    push_actor(&mut out, &state.turtle.actor);
    for pool in &state.whirlpools {
        push_actor(&mut out, &pool.actor);
    }
    for banner in &state.banners {
        push_actor(&mut out, &banner.actor);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;
    use crate::sim::{TickInput, tick};
    use crate::tuning::Tuning;

    #[test]
    fn test_backdrop_draws_first() {
        let state = GameState::new(Tuning::default());
        let list = build_sprite_list(&state);
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].texture, assets::WATER);
        assert_eq!(list[1].texture, assets::STARFISH);
        assert_eq!(list[2].texture, assets::TURTLE_FRAMES[0]);
    }

    #[test]
    fn test_invisible_actor_is_skipped() {
        let mut state = GameState::new(Tuning::default());
        state.ocean.visible = false;
        let list = build_sprite_list(&state);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].texture, assets::STARFISH);
    }

    #[test]
    fn test_win_effects_draw_on_top() {
        let mut state = GameState::new(Tuning::default());
        let target = state.starfish.as_ref().unwrap().actor.center();
        state.turtle.actor.center_at_position(target);
        tick(&mut state, &TickInput::default(), 0.1);

        let list = build_sprite_list(&state);
        let textures: Vec<_> = list.iter().map(|c| c.texture).collect();
        assert_eq!(
            textures,
            vec![
                assets::WATER,
                assets::STARFISH,
                // One 0.1 s tick has already advanced the swim cycle
                assets::TURTLE_FRAMES[1],
                assets::WHIRLPOOL_SHEET,
                assets::YOU_WIN,
            ]
        );
        // The whirlpool command carries the quarter opacity
        assert!((list[3].instance.color[3] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_region_tracks_animation_frame() {
        let mut state = GameState::new(Tuning::default());
        let input = TickInput {
            right: true,
            ..TickInput::default()
        };
        // Two swim frames at 0.1 s each
        tick(&mut state, &input, 0.1);
        tick(&mut state, &input, 0.05);
        let list = build_sprite_list(&state);
        assert_eq!(list[2].texture, assets::TURTLE_FRAMES[1]);
    }
}

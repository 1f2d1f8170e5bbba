//! Sprite animation frames and playback timing
//!
//! Frames reference textures by name plus a pixel region; decoding and upload
//! are host concerns. Playback is a pure function of an elapsed-time cursor,
//! which lives on the actor so a paused actor freezes mid-sequence.

use glam::Vec2;

/// Pixel-space source region within a texture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// One animation frame: a named texture and the region to sample from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub texture: &'static str,
    pub region: Region,
}

impl Frame {
    /// Frame size in pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.region.w, self.region.h)
    }
}

/// Loop vs. once-through playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Wrap back to the first frame forever
    Loop,
    /// Clamp on the final frame
    Once,
}

/// An ordered frame sequence with a fixed per-frame duration
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: Vec<Frame>,
    frame_duration: f32,
    play_mode: PlayMode,
}

impl Animation {
    /// Build from explicit frames. Panics on an empty frame list.
    pub fn new(frames: Vec<Frame>, frame_duration: f32, play_mode: PlayMode) -> Self {
        assert!(!frames.is_empty(), "animation needs at least one frame");
        Self {
            frames,
            frame_duration,
            play_mode,
        }
    }

    /// One whole-texture frame per named texture
    pub fn from_files(
        textures: &[&'static str],
        frame_size: Vec2,
        frame_duration: f32,
        play_mode: PlayMode,
    ) -> Self {
        let frames = textures
            .iter()
            .map(|&texture| Frame {
                texture,
                region: Region {
                    x: 0.0,
                    y: 0.0,
                    w: frame_size.x,
                    h: frame_size.y,
                },
            })
            .collect();
        Self::new(frames, frame_duration, play_mode)
    }

    /// A single static image
    pub fn from_texture(texture: &'static str, size: Vec2) -> Self {
        Self::from_files(&[texture], size, 1.0, PlayMode::Loop)
    }

    /// Slice a sprite sheet row-major into `rows × cols` frames
    pub fn from_sheet(
        texture: &'static str,
        sheet_size: Vec2,
        rows: usize,
        cols: usize,
        frame_duration: f32,
        play_mode: PlayMode,
    ) -> Self {
        let frame_w = sheet_size.x / cols as f32;
        let frame_h = sheet_size.y / rows as f32;
        let mut frames = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                frames.push(Frame {
                    texture,
                    region: Region {
                        x: c as f32 * frame_w,
                        y: r as f32 * frame_h,
                        w: frame_w,
                        h: frame_h,
                    },
                });
            }
        }
        Self::new(frames, frame_duration, play_mode)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn total_duration(&self) -> f32 {
        self.frame_duration * self.frames.len() as f32
    }

    /// Frame index for an elapsed-time cursor, wrapped or clamped by play mode
    pub fn frame_index_at(&self, elapsed: f32) -> usize {
        let raw = (elapsed / self.frame_duration).floor().max(0.0) as usize;
        match self.play_mode {
            PlayMode::Loop => raw % self.frames.len(),
            PlayMode::Once => raw.min(self.frames.len() - 1),
        }
    }

    pub fn frame_at(&self, elapsed: f32) -> &Frame {
        &self.frames[self.frame_index_at(elapsed)]
    }

    pub fn first_frame(&self) -> &Frame {
        &self.frames[0]
    }

    /// True once the cursor passes the final frame under `Once`; never under `Loop`
    pub fn is_finished(&self, elapsed: f32) -> bool {
        self.play_mode == PlayMode::Once && elapsed >= self.total_duration()
    }
}

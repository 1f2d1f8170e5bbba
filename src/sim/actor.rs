//! The actor record: transform, motion, boundary shape and animation cursor
//!
//! Actors are plain data mutated in place each tick. Position anchors the
//! bottom-left corner in a y-up world; rotation and scale pivot about
//! `origin`, which `set_animation` places at the sprite center.

use glam::{Vec2, Vec4};

use super::action::Sequence;
use super::animation::{Animation, Frame};
use super::polygon::{self, Rect};
use crate::consts::DEFAULT_MAX_SPEED;
use crate::{angle_deg, vec_from_angle_deg};

/// Collision shape descriptor; vertices are generated from the current size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoundaryShape {
    Rectangle,
    RegularPolygon(usize),
}

/// A positioned, drawable, updatable game object
#[derive(Debug, Clone)]
pub struct Actor {
    pub position: Vec2,
    pub size: Vec2,
    pub origin: Vec2,
    pub scale: Vec2,
    /// Degrees CCW
    pub rotation: f32,
    /// RGBA; the alpha channel is the opacity
    pub color: Vec4,
    pub visible: bool,
    pub animation_paused: bool,
    /// Pending action sequences, advanced once per tick
    pub actions: Vec<Sequence>,
    animation: Option<Animation>,
    elapsed: f32,
    velocity: Vec2,
    /// Per-tick accumulator, cleared by `apply_physics`
    acceleration_vec: Vec2,
    acceleration: f32,
    max_speed: f32,
    deceleration: f32,
    boundary: BoundaryShape,
}

impl Actor {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::ZERO,
            origin: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            color: Vec4::ONE,
            visible: true,
            animation_paused: false,
            actions: Vec::new(),
            animation: None,
            elapsed: 0.0,
            velocity: Vec2::ZERO,
            acceleration_vec: Vec2::ZERO,
            acceleration: 0.0,
            max_speed: DEFAULT_MAX_SPEED,
            deceleration: 0.0,
            boundary: BoundaryShape::Rectangle,
        }
    }

    // === Animation ===

    /// Attach an animation, sizing the actor to its first frame and centering
    /// the origin. Resets the cursor and the boundary to the sprite box.
    pub fn set_animation(&mut self, animation: Animation) {
        let size = animation.first_frame().size();
        self.size = size;
        self.origin = size / 2.0;
        self.boundary = BoundaryShape::Rectangle;
        self.elapsed = 0.0;
        self.animation = Some(animation);
    }

    /// Accumulate animation time; a paused actor freezes mid-sequence
    pub fn advance_animation(&mut self, dt: f32) {
        if !self.animation_paused {
            self.elapsed += dt;
        }
    }

    /// The frame the current cursor selects, if an animation is attached
    pub fn current_frame(&self) -> Option<&Frame> {
        self.animation.as_ref().map(|a| a.frame_at(self.elapsed))
    }

    /// True once a once-through animation has run past its last frame
    pub fn is_animation_finished(&self) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|a| a.is_finished(self.elapsed))
    }

    // === Motion ===

    /// Speed without changing direction; a stationary actor is pointed along +x
    pub fn set_speed(&mut self, speed: f32) {
        if self.velocity == Vec2::ZERO {
            self.velocity = Vec2::new(speed, 0.0);
        } else {
            self.velocity = self.velocity.normalize() * speed;
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Redirect the velocity vector; a zero vector stays zero
    pub fn set_motion_angle(&mut self, degrees: f32) {
        let speed = self.speed();
        if speed > 0.0 {
            self.velocity = vec_from_angle_deg(degrees) * speed;
        }
    }

    /// Direction of travel in degrees, [0, 360)
    pub fn motion_angle(&self) -> f32 {
        angle_deg(self.velocity)
    }

    pub fn is_moving(&self) -> bool {
        self.speed() > 0.0
    }

    pub fn set_acceleration(&mut self, acceleration: f32) {
        self.acceleration = acceleration;
    }

    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = max_speed;
    }

    pub fn set_deceleration(&mut self, deceleration: f32) {
        self.deceleration = deceleration;
    }

    /// Queue a push of `acceleration` magnitude along a heading for this tick
    pub fn accelerate_at_angle(&mut self, degrees: f32) {
        self.acceleration_vec += vec_from_angle_deg(degrees) * self.acceleration;
    }

    /// Accelerate along the facing direction
    pub fn accelerate_forward(&mut self) {
        self.accelerate_at_angle(self.rotation);
    }

    /// Integrate one tick of motion
    ///
    /// Deceleration applies only on ticks where no acceleration was queued;
    /// the accumulator is cleared afterwards, so controllers re-apply every
    /// tick while a key is held.
    pub fn apply_physics(&mut self, dt: f32) {
        self.velocity += self.acceleration_vec * dt;
        let mut speed = self.speed();
        if self.acceleration_vec == Vec2::ZERO {
            speed -= self.deceleration * dt;
        }
        speed = speed.clamp(0.0, self.max_speed);
        self.set_speed(speed);
        self.position += self.velocity * dt;
        self.acceleration_vec = Vec2::ZERO;
    }

    // === Boundary polygon / overlap ===

    /// Use the sprite box as the collision shape
    pub fn set_boundary_rectangle(&mut self) {
        self.boundary = BoundaryShape::Rectangle;
    }

    /// Use a regular n-gon inscribed in the sprite box
    pub fn set_boundary_polygon(&mut self, sides: usize) {
        self.boundary = BoundaryShape::RegularPolygon(sides);
    }

    /// Collision vertices in local space, regenerated from the current size
    pub fn local_boundary_vertices(&self) -> Vec<Vec2> {
        match self.boundary {
            BoundaryShape::Rectangle => polygon::rectangle_vertices(self.size),
            BoundaryShape::RegularPolygon(sides) => {
                polygon::regular_polygon_vertices(self.size, sides)
            }
        }
    }

    /// Collision vertices in world space
    ///
    /// Recomputed every call: position, rotation and scale all change frame
    /// to frame.
    pub fn boundary_polygon(&self) -> Vec<Vec2> {
        polygon::transform_vertices(
            &self.local_boundary_vertices(),
            self.position,
            self.origin,
            self.rotation,
            self.scale,
        )
    }

    /// Exact overlap test against another actor, cheap rejection first
    pub fn overlaps(&self, other: &Actor) -> bool {
        let a = self.boundary_polygon();
        let b = other.boundary_polygon();
        if !Rect::from_points(&a).overlaps(&Rect::from_points(&b)) {
            return false;
        }
        polygon::overlap_convex_polygons(&a, &b)
    }

    // === Placement / opacity ===

    /// Center of the sprite box in world space
    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    /// Move so the sprite box is centered on a point
    pub fn center_at_position(&mut self, point: Vec2) {
        self.position = point - self.size / 2.0;
    }

    /// Move so the sprite box is centered on another actor
    pub fn center_at_actor(&mut self, other: &Actor) {
        self.center_at_position(other.center());
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.color.w = opacity;
    }

    pub fn opacity(&self) -> f32 {
        self.color.w
    }
}

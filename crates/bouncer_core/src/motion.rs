//! Motion/bounce controller: translates the quad by its per-frame velocity
//! and reflects it elastically off the edges of the NDC playfield.

use std::fmt;

use glam::{Mat4, Vec2, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// Which axes reflected during a single `advance` call. Observability only;
/// nothing downstream branches on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BounceReport {
    pub x: bool,
    pub y: bool,
}

impl BounceReport {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Motion {
    /// Quad center in NDC, starting at the origin.
    pub position: Vec2,
    /// NDC distance per frame. Only the input mapper changes its magnitude;
    /// `advance` only flips signs, so a value set beyond the mapper's speed
    /// cap stays there.
    pub velocity: Vec2,
    /// Half-extent of the quad, constant for the run. The collision boundary
    /// is `[-1 + half_extent, 1 - half_extent]` per axis.
    pub half_extent: f32,
}

impl Motion {
    pub fn new(half_extent: f32, velocity: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity,
            half_extent,
        }
    }

    /// Translate by one frame's velocity, then reflect each axis whose
    /// bounding interval has left `[-1, 1]`. Axes are checked independently,
    /// so a corner hit flips both in the same call.
    ///
    /// The check runs against the already-translated position: reflection
    /// lands one frame after the logical crossing, allowing a small visual
    /// overlap before the bounce. That matches the original behavior and is
    /// kept on purpose; tightening it would change observable physics.
    pub fn advance(&mut self) -> BounceReport {
        self.position += self.velocity;

        let mut report = BounceReport::default();
        if self.position.x + self.half_extent > 1.0 || self.position.x - self.half_extent < -1.0 {
            self.velocity.x = -self.velocity.x;
            report.x = true;
            log_impact(Axis::X, self.velocity);
        }
        if self.position.y + self.half_extent > 1.0 || self.position.y - self.half_extent < -1.0 {
            self.velocity.y = -self.velocity.y;
            report.y = true;
            log_impact(Axis::Y, self.velocity);
        }
        report
    }

    /// True while the quad's bounding box sits strictly inside the playfield
    /// on both axes. The frame loop only maps input in that state.
    pub fn is_fully_inside(&self) -> bool {
        self.position.x + self.half_extent < 1.0
            && self.position.x - self.half_extent > -1.0
            && self.position.y + self.half_extent < 1.0
            && self.position.y - self.half_extent > -1.0
    }

    /// Translation matrix for the per-frame uniform upload.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.position.x, self.position.y, 0.0))
    }
}

fn log_impact(axis: Axis, velocity: Vec2) {
    log::info!(
        "Impact velocity at {axis}-axis: ({}, {})",
        velocity.x,
        velocity.y
    );
}

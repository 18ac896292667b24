use crate::world::BallSlice;
use nalgebra::Vector3;
use std::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum StrikeKind {
    Aerial,
    Ground,
    Jump,
    DoubleJump,
}

impl StrikeKind {
    /// Order in which strike variants are tried for a candidate slice.
    pub const PRIORITY: [StrikeKind; 4] = [
        StrikeKind::Aerial,
        StrikeKind::Ground,
        StrikeKind::Jump,
        StrikeKind::DoubleJump,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StrikeKind::Aerial => "aerial",
            StrikeKind::Ground => "ground",
            StrikeKind::Jump => "jump",
            StrikeKind::DoubleJump => "double jump",
        }
    }
}

/// A committed hit: which slice to meet and where the ball should go afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    pub kind: StrikeKind,
    pub slice: BallSlice,
    pub shot_target: Vector3<f32>,
}

impl Strike {
    pub fn new(kind: StrikeKind, slice: BallSlice, shot_target: Vector3<f32>) -> Self {
        Strike {
            kind,
            slice,
            shot_target,
        }
    }
}

impl fmt::Display for Strike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} strike at t={:.2} ({:.0}, {:.0}, {:.0})",
            self.kind.name(),
            self.slice.time,
            self.slice.position.x,
            self.slice.position.y,
            self.slice.position.z
        )
    }
}

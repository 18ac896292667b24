pub mod strike;

pub use strike::*;

use crate::collaborators::ManeuverLayer;
use crate::world::{BoostPad, WorldSnapshot};
use nalgebra::Vector3;
use std::fmt;

/// What the execution layer is asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Maneuver {
    Kickoff,
    DriveTo {
        target: Vector3<f32>,
        waste_boost: bool,
    },
    GetBoost {
        pad: BoostPad,
    },
    ParkAt {
        location: Vector3<f32>,
    },
    Shadow {
        target: Vector3<f32>,
    },
    Strike(Strike),
}

impl Maneuver {
    pub fn name(&self) -> &'static str {
        match self {
            Maneuver::Kickoff => "kickoff",
            Maneuver::DriveTo { .. } => "drive",
            Maneuver::GetBoost { .. } => "get boost",
            Maneuver::ParkAt { .. } => "park",
            Maneuver::Shadow { .. } => "shadow",
            Maneuver::Strike(_) => "strike",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ManeuverStatus {
    pub finished: bool,
    pub interruptible: bool,
}

impl ManeuverStatus {
    pub fn running(interruptible: bool) -> Self {
        ManeuverStatus {
            finished: false,
            interruptible,
        }
    }

    pub fn done() -> Self {
        ManeuverStatus {
            finished: true,
            interruptible: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManeuverRequest {
    maneuver: Maneuver,
    status: ManeuverStatus,
}

impl ManeuverRequest {
    fn new(maneuver: Maneuver, interruptible: bool) -> Self {
        ManeuverRequest {
            maneuver,
            status: ManeuverStatus::running(interruptible),
        }
    }

    pub fn kickoff() -> Self {
        Self::new(Maneuver::Kickoff, false)
    }

    pub fn drive_to(target: Vector3<f32>, interruptible: bool, waste_boost: bool) -> Self {
        Self::new(
            Maneuver::DriveTo {
                target,
                waste_boost,
            },
            interruptible,
        )
    }

    pub fn get_boost(pad: BoostPad) -> Self {
        Self::new(Maneuver::GetBoost { pad }, true)
    }

    pub fn park_at(location: Vector3<f32>) -> Self {
        Self::new(Maneuver::ParkAt { location }, true)
    }

    pub fn shadow(target: Vector3<f32>) -> Self {
        Self::new(Maneuver::Shadow { target }, true)
    }

    pub fn strike(strike: Strike) -> Self {
        Self::new(Maneuver::Strike(strike), false)
    }

    #[inline]
    pub fn maneuver(&self) -> &Maneuver {
        &self.maneuver
    }

    #[inline]
    pub fn status(&self) -> ManeuverStatus {
        self.status
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.status.finished
    }

    #[inline]
    pub fn interruptible(&self) -> bool {
        self.status.interruptible
    }

    /// Movement-only maneuvers a freshly found shot may cut short.
    pub fn is_repositioning(&self) -> bool {
        matches!(
            self.maneuver,
            Maneuver::DriveTo { .. } | Maneuver::GetBoost { .. }
        )
    }

    pub fn target_point(&self) -> Option<Vector3<f32>> {
        match &self.maneuver {
            Maneuver::Kickoff => None,
            Maneuver::DriveTo { target, .. } => Some(*target),
            Maneuver::GetBoost { pad } => Some(pad.location),
            Maneuver::ParkAt { location } => Some(*location),
            Maneuver::Shadow { target } => Some(*target),
            Maneuver::Strike(strike) => Some(strike.slice.position),
        }
    }

    /// Moves a shadowing target along with the ball. Other maneuvers keep their target.
    pub fn retarget_shadow(&mut self, new_target: Vector3<f32>) -> bool {
        match &mut self.maneuver {
            Maneuver::Shadow { target } => {
                *target = new_target;
                true
            }
            _ => false,
        }
    }

    /// Runs one tick of the maneuver through the execution layer.
    pub fn step<L: ManeuverLayer + ?Sized>(&mut self, world: &WorldSnapshot, layer: &mut L) {
        if self.status.finished {
            return;
        }

        self.status = layer.step(self, world);
    }
}

impl fmt::Display for ManeuverRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.maneuver {
            Maneuver::Strike(strike) => write!(f, "{}", strike),
            Maneuver::GetBoost { pad } => write!(f, "get boost #{}", pad.index),
            other => match self.target_point() {
                Some(target) => write!(
                    f,
                    "{} -> ({:.0}, {:.0}, {:.0})",
                    other.name(),
                    target.x,
                    target.y,
                    target.z
                ),
                None => write!(f, "{}", other.name()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::BallSlice;

    struct FinishAfter {
        remaining: u32,
    }

    impl ManeuverLayer for FinishAfter {
        fn step(&mut self, request: &ManeuverRequest, _world: &WorldSnapshot) -> ManeuverStatus {
            if self.remaining == 0 {
                return ManeuverStatus::done();
            }

            self.remaining -= 1;
            ManeuverStatus::running(request.interruptible())
        }
    }

    #[test]
    fn test_default_interruptibility() {
        let slice = BallSlice::new(Vector3::new(0.0, 0.0, 93.0), Vector3::zeros(), 1.0);

        assert!(!ManeuverRequest::kickoff().interruptible());
        assert!(!ManeuverRequest::strike(Strike::new(StrikeKind::Ground, slice, Vector3::zeros())).interruptible());
        assert!(ManeuverRequest::park_at(Vector3::zeros()).interruptible());
        assert!(ManeuverRequest::drive_to(Vector3::zeros(), false, true).is_repositioning());
        assert!(!ManeuverRequest::shadow(Vector3::zeros()).is_repositioning());
    }

    #[test]
    fn test_retarget_only_moves_shadow() {
        let mut shadow = ManeuverRequest::shadow(Vector3::zeros());
        let mut park = ManeuverRequest::park_at(Vector3::zeros());
        let new_target = Vector3::new(100.0, 200.0, 0.0);

        assert!(shadow.retarget_shadow(new_target));
        assert!(!park.retarget_shadow(new_target));
        assert_eq!(shadow.target_point(), Some(new_target));
        assert_eq!(park.target_point(), Some(Vector3::zeros()));
    }

    #[test]
    fn test_step_stops_once_finished() {
        let world = crate::test_support::world_with(
            vec![crate::test_support::blue(1, 0.0, -2000.0)],
            Vector3::new(0.0, 0.0, 93.0),
        );
        let mut layer = FinishAfter { remaining: 1 };
        let mut request = ManeuverRequest::drive_to(Vector3::zeros(), true, false);

        request.step(&world, &mut layer);
        assert!(!request.finished());

        request.step(&world, &mut layer);
        assert!(request.finished());

        request.step(&world, &mut layer);
        assert!(request.finished());
    }

    #[test]
    fn test_display_labels() {
        let request = ManeuverRequest::drive_to(Vector3::new(0.0, -3400.0, 0.0), false, true);
        assert_eq!(request.to_string(), "drive -> (0, -3400, 0)");
        assert_eq!(ManeuverRequest::kickoff().to_string(), "kickoff");
    }
}

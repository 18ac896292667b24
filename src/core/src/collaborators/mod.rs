//! Seams to the layers around the tactical core: vehicle control (drive ETA),
//! strike solvers (feasibility oracle) and maneuver execution.

pub mod eta;
pub mod oracle;

pub use eta::*;
pub use oracle::*;

use crate::maneuver::{ManeuverRequest, ManeuverStatus, Strike};
use crate::world::{Agent, WorldSnapshot};
use nalgebra::Vector3;

/// Time for an agent to reach a ground point, owned by the vehicle-control layer.
pub trait DriveEta {
    fn eta(&self, agent: &Agent, point: &Vector3<f32>) -> f32;
}

/// Feasibility of one strike variant for an agent, owned by the maneuver layer.
pub trait StrikeOracle {
    fn is_valid(&self, strike: &Strike, agent: &Agent, world: &WorldSnapshot) -> bool;
}

/// Executes one tick of a maneuver and reports its new status.
pub trait ManeuverLayer {
    fn step(&mut self, request: &ManeuverRequest, world: &WorldSnapshot) -> ManeuverStatus;
}

impl<T: DriveEta + ?Sized> DriveEta for &T {
    fn eta(&self, agent: &Agent, point: &Vector3<f32>) -> f32 {
        (**self).eta(agent, point)
    }
}

impl<T: StrikeOracle + ?Sized> StrikeOracle for &T {
    fn is_valid(&self, strike: &Strike, agent: &Agent, world: &WorldSnapshot) -> bool {
        (**self).is_valid(strike, agent, world)
    }
}

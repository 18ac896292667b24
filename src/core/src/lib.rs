pub mod collaborators;
pub mod config;
pub mod maneuver;
pub mod tactics;
pub mod utils;
pub mod world;

#[cfg(test)]
mod test_support;

pub use collaborators::{
    DriveEta, ManeuverLayer, SimpleDriveEta, SimpleStrikeOracle, StrikeOracle,
};
pub use config::TacticalConfig;
pub use maneuver::{Maneuver, ManeuverRequest, ManeuverStatus, Strike, StrikeKind};
pub use tactics::{
    Decision, DecisionReason, Playstyle, PlaystylePolarity, PlaystyleSelector, ShotCheck,
    TacticalContext, TacticalEngine,
};
pub use world::{
    Agent, AgentBuilder, BallPrediction, BallSlice, BallState, BoostPad, Field, Goal, Score,
    Target, Team, Touch, WorldSnapshot, WorldSnapshotBuilder,
};

pub use nalgebra::Vector3;
pub use utils::*;

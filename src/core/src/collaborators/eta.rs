use crate::collaborators::DriveEta;
use crate::utils::VectorExtensions;
use crate::world::Agent;
use nalgebra::Vector3;

pub const MAX_CAR_SPEED: f32 = 2300.0;
pub const THROTTLE_SPEED: f32 = 1410.0;

const TURN_RATE: f32 = 3.2;
const BOOST_CRUISE_THRESHOLD: f32 = 20.0;

/// Reference drive model: turn on the spot, then cruise in a straight line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleDriveEta;

impl SimpleDriveEta {
    fn cruise_speed(agent: &Agent) -> f32 {
        if agent.boost >= BOOST_CRUISE_THRESHOLD {
            MAX_CAR_SPEED
        } else {
            THROTTLE_SPEED.max(agent.velocity.flatten().length())
        }
    }
}

impl DriveEta for SimpleDriveEta {
    fn eta(&self, agent: &Agent, point: &Vector3<f32>) -> f32 {
        let to_target = (point - agent.position).flatten();
        let distance = to_target.length();

        if distance <= f32::EPSILON {
            return 0.0;
        }

        let turn_time = agent.forward.flatten().angle_to(&to_target) / TURN_RATE;

        turn_time + distance / Self::cruise_speed(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{AgentBuilder, Team};

    fn agent(boost: f32) -> Agent {
        AgentBuilder::new()
            .id(1)
            .index(0)
            .team(Team::Blue)
            .position(Vector3::new(0.0, 0.0, 17.0))
            .forward(Vector3::new(0.0, 1.0, 0.0))
            .boost(boost)
            .build()
            .expect("agent")
    }

    #[test]
    fn test_straight_ahead_with_boost() {
        let eta = SimpleDriveEta.eta(&agent(100.0), &Vector3::new(0.0, 2300.0, 0.0));
        assert!((eta - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_turning_costs_time() {
        let ahead = SimpleDriveEta.eta(&agent(0.0), &Vector3::new(0.0, 1410.0, 0.0));
        let behind = SimpleDriveEta.eta(&agent(0.0), &Vector3::new(0.0, -1410.0, 0.0));

        assert!((ahead - 1.0).abs() < 1e-3);
        assert!(behind > ahead + 0.9);
    }

    #[test]
    fn test_zero_distance_is_zero() {
        assert_eq!(SimpleDriveEta.eta(&agent(50.0), &Vector3::new(0.0, 0.0, 17.0)), 0.0);
    }
}

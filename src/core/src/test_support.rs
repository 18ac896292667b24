//! Fixtures shared by the unit tests.

use crate::collaborators::{SimpleDriveEta, SimpleStrikeOracle, StrikeOracle};
use crate::config::TacticalConfig;
use crate::maneuver::{Strike, StrikeKind};
use crate::tactics::{Playstyle, TacticalContext};
use crate::world::{Agent, AgentBuilder, BallState, Team, WorldSnapshot, WorldSnapshotBuilder};
use nalgebra::Vector3;

const CAR_HEIGHT: f32 = 17.0;

fn agent(id: u32, team: Team, x: f32, y: f32) -> Agent {
    AgentBuilder::new()
        .id(id)
        .index(id)
        .team(team)
        .position(Vector3::new(x, y, CAR_HEIGHT))
        .build()
        .expect("agent")
}

pub fn blue(id: u32, x: f32, y: f32) -> Agent {
    agent(id, Team::Blue, x, y)
}

pub fn orange(id: u32, x: f32, y: f32) -> Agent {
    agent(id, Team::Orange, x, y)
}

pub fn with_boost(agent: Agent, boost: f32) -> Agent {
    Agent { boost, ..agent }
}

/// World at t = 0 with a resting ball; the first agent is the controlled one.
pub fn world_with(agents: Vec<Agent>, ball: Vector3<f32>) -> WorldSnapshot {
    let me = agents.first().map(|agent| agent.id).expect("at least one agent");

    WorldSnapshotBuilder::new()
        .me(me)
        .agents(agents)
        .ball(BallState::new(ball, Vector3::zeros(), 0.0))
        .build()
        .expect("world")
}

pub fn with_context<F>(world: &WorldSnapshot, f: F)
where
    F: FnOnce(&TacticalContext<'_>),
{
    with_oracle(world, &SimpleStrikeOracle::new(SimpleDriveEta), f)
}

pub fn with_oracle<O, F>(world: &WorldSnapshot, oracle: &O, f: F)
where
    O: StrikeOracle,
    F: FnOnce(&TacticalContext<'_>),
{
    let config = TacticalConfig::default();
    let eta = SimpleDriveEta;
    let ctx = TacticalContext::new(world, &config, Playstyle::Control, &eta, oracle);

    f(&ctx)
}

/// Accepts exactly the listed strike kinds, regardless of the world.
#[derive(Debug, Clone, Default)]
pub struct FixedOracle {
    accepted: Vec<StrikeKind>,
}

impl FixedOracle {
    pub fn accepting(kinds: &[StrikeKind]) -> Self {
        FixedOracle {
            accepted: kinds.to_vec(),
        }
    }
}

impl StrikeOracle for FixedOracle {
    fn is_valid(&self, strike: &Strike, _agent: &Agent, _world: &WorldSnapshot) -> bool {
        self.accepted.contains(&strike.kind)
    }
}

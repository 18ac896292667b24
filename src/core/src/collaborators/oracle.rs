use crate::collaborators::DriveEta;
use crate::maneuver::{Strike, StrikeKind};
use crate::utils::VectorExtensions;
use crate::world::{Agent, WorldSnapshot};

const GROUND_REACH: f32 = 150.0;
const JUMP_REACH: f32 = 300.0;
const DOUBLE_JUMP_REACH: f32 = 500.0;

const AERIAL_MIN_HEIGHT: f32 = 300.0;
const AERIAL_BASE_BOOST: f32 = 30.0;
const AERIAL_BOOST_PER_UNIT: f32 = 1.0 / 50.0;

/// Approach must not come from the far side of the ball.
const MIN_APPROACH_ALIGNMENT: f32 = 0.0;

/// Reference feasibility oracle: height bands, boost budget and an ETA race.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleStrikeOracle<E: DriveEta> {
    eta: E,
}

impl<E: DriveEta> SimpleStrikeOracle<E> {
    pub fn new(eta: E) -> Self {
        SimpleStrikeOracle { eta }
    }

    fn height_allows(strike: &Strike, agent: &Agent) -> bool {
        let height = strike.slice.position.z;

        match strike.kind {
            StrikeKind::Ground => agent.grounded && height < GROUND_REACH,
            StrikeKind::Jump => agent.grounded && height < JUMP_REACH,
            StrikeKind::DoubleJump => agent.grounded && height < DOUBLE_JUMP_REACH,
            StrikeKind::Aerial => {
                height >= AERIAL_MIN_HEIGHT
                    && agent.boost >= AERIAL_BASE_BOOST + height * AERIAL_BOOST_PER_UNIT
            }
        }
    }
}

impl<E: DriveEta> super::StrikeOracle for SimpleStrikeOracle<E> {
    fn is_valid(&self, strike: &Strike, agent: &Agent, world: &WorldSnapshot) -> bool {
        let time_remaining = strike.slice.time_remaining(world.time);
        if time_remaining <= 0.0 {
            return false;
        }

        if !Self::height_allows(strike, agent) {
            return false;
        }

        let approach = agent.position.flatten().direction_to(&strike.slice.position.flatten());
        let shot = strike.slice.position.flatten().direction_to(&strike.shot_target.flatten());
        if approach.dot(&shot) <= MIN_APPROACH_ALIGNMENT {
            return false;
        }

        self.eta.eta(agent, &strike.slice.position) <= time_remaining
    }
}

use crate::collaborators::{DriveEta, StrikeOracle};
use crate::config::TacticalConfig;
use crate::tactics::ops::{
    PositioningOperationsImpl, PossessionOperationsImpl, RoleOperationsImpl,
    RotationOperationsImpl, ShotOperationsImpl, ThreatOperationsImpl,
};
use crate::tactics::playstyle::Playstyle;
use crate::world::{Agent, Goal, WorldSnapshot};
use nalgebra::Vector3;

/// Everything one tick of decision making reads. Built fresh every tick.
pub struct TacticalContext<'t> {
    pub world: &'t WorldSnapshot,
    pub config: &'t TacticalConfig,
    pub playstyle: Playstyle,
    pub drive_eta: &'t dyn DriveEta,
    pub strike_oracle: &'t dyn StrikeOracle,
}

impl<'t> TacticalContext<'t> {
    pub fn new(
        world: &'t WorldSnapshot,
        config: &'t TacticalConfig,
        playstyle: Playstyle,
        drive_eta: &'t dyn DriveEta,
        strike_oracle: &'t dyn StrikeOracle,
    ) -> Self {
        TacticalContext {
            world,
            config,
            playstyle,
            drive_eta,
            strike_oracle,
        }
    }

    #[inline]
    pub fn me(&self) -> &'t Agent {
        self.world.me()
    }

    #[inline]
    pub fn ball_position(&self) -> Vector3<f32> {
        self.world.ball.position
    }

    #[inline]
    pub fn now(&self) -> f32 {
        self.world.time
    }

    pub fn own_goal(&self, agent: &Agent) -> &'t Goal {
        self.world.field.own_goal(agent.team)
    }

    pub fn opponent_goal(&self, agent: &Agent) -> &'t Goal {
        self.world.field.opponent_goal(agent.team)
    }

    #[inline]
    pub fn eta(&self, agent: &Agent, point: &Vector3<f32>) -> f32 {
        self.drive_eta.eta(agent, point)
    }

    pub fn roles(&'t self) -> RoleOperationsImpl<'t> {
        RoleOperationsImpl::new(self)
    }

    pub fn possession(&'t self) -> PossessionOperationsImpl<'t> {
        PossessionOperationsImpl::new(self)
    }

    pub fn threat(&'t self) -> ThreatOperationsImpl<'t> {
        ThreatOperationsImpl::new(self)
    }

    pub fn shots(&'t self) -> ShotOperationsImpl<'t> {
        ShotOperationsImpl::new(self)
    }

    pub fn positioning(&'t self) -> PositioningOperationsImpl<'t> {
        PositioningOperationsImpl::new(self)
    }

    pub fn rotation(&'t self) -> RotationOperationsImpl<'t> {
        RotationOperationsImpl::new(self)
    }
}

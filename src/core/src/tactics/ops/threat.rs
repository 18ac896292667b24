use crate::tactics::TacticalContext;
use crate::utils::VectorExtensions;
use crate::world::Agent;
use nalgebra::Vector3;

pub struct ThreatOperationsImpl<'p> {
    ctx: &'p TacticalContext<'p>,
}

impl<'p> ThreatOperationsImpl<'p> {
    pub fn new(ctx: &'p TacticalContext<'p>) -> Self {
        ThreatOperationsImpl { ctx }
    }

    /// The agent stands roughly on the line between the ball and `point`.
    pub fn can_block(&self, agent: &Agent, point: &Vector3<f32>) -> bool {
        let to_point = agent.position.direction_to(point);
        let from_ball = self.ctx.ball_position().direction_to(&agent.position);

        to_point.dot(&from_ball) > self.ctx.config.threat.block_alignment
    }

    /// Blocking already, or able to beat the ball to `point`.
    pub fn can_defend(&self, agent: &Agent, point: &Vector3<f32>) -> bool {
        if self.can_block(agent, point) {
            return true;
        }

        let ball = &self.ctx.world.ball;
        let approach_speed = ball
            .velocity
            .dot(&ball.position.direction_to(point))
            .max(self.ctx.config.threat.min_ball_approach_speed);

        let ball_time = ball.position.distance_to(point) / approach_speed;

        self.ctx.eta(agent, point) < ball_time
    }
}

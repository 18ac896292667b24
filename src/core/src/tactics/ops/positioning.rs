use crate::tactics::TacticalContext;
use crate::utils::VectorExtensions;
use crate::world::{Agent, BoostPad, Field};
use nalgebra::Vector3;

/// Longest drive considered when picking the quickest pad.
const MAX_BOOST_ETA: f32 = 99.0;

/// Fallback target points used when no shot is taken.
pub struct PositioningOperationsImpl<'p> {
    ctx: &'p TacticalContext<'p>,
}

impl<'p> PositioningOperationsImpl<'p> {
    pub fn new(ctx: &'p TacticalContext<'p>) -> Self {
        PositioningOperationsImpl { ctx }
    }

    /// Rally line on the field's long axis: ball depth plus a stand-off, pulled toward midfield.
    pub fn zone5_point(&self) -> Vector3<f32> {
        let positioning = &self.ctx.config.positioning;
        let side = self.ctx.me().team.side();

        let depth = self.ctx.ball_position().y + positioning.zone5_standoff * side;

        Vector3::new(0.0, positioning.zone5_compression * depth, 0.0)
    }

    /// Between the own goal and where the ball will be once the agent gets there.
    pub fn shadow_point(&self, agent: &Agent) -> Vector3<f32> {
        let positioning = &self.ctx.config.positioning;
        let prediction = &self.ctx.world.prediction;
        let ball = self.ctx.ball_position();

        let travel_time = agent.position.distance_to(&ball) / positioning.shadow_speed;
        let index = (travel_time * prediction.sample_rate()) as usize;

        let sample = prediction
            .get(index.min(prediction.len().saturating_sub(1)))
            .map(|slice| slice.position)
            .unwrap_or(ball);

        let goal = self.ctx.own_goal(agent).location;
        let offset = agent.position.direction_to(&goal)
            * agent.position.distance_to(&sample)
            * positioning.shadow_offset;

        Field::limit_to_nearest_surface((sample + offset).flatten())
    }

    /// Goal-side of the ball on the opposite flank, ready for a second touch.
    pub fn offensive_support_point(&self) -> Vector3<f32> {
        let positioning = &self.ctx.config.positioning;
        let side = self.ctx.me().team.side();
        let ball = self.ctx.ball_position();

        let point = Vector3::new(
            -positioning.support_mirror * ball.x,
            ball.y + positioning.support_depth * side,
            0.0,
        );

        Field::limit_to_nearest_surface(point)
    }

    /// Far post of the own goal relative to the ball.
    pub fn defensive_support_point(&self) -> Vector3<f32> {
        let positioning = &self.ctx.config.positioning;
        let side = self.ctx.me().team.side();
        let ball = self.ctx.ball_position();

        Vector3::new(
            -ball.x.signum() * positioning.far_post_x,
            positioning.far_post_depth * side,
            0.0,
        )
    }

    /// Large pad behind the ball that costs the least detour, when leaving the ball is safe.
    pub fn best_boost_pad(&self) -> Option<BoostPad> {
        let ctx = self.ctx;
        let me = ctx.me();
        let ball = ctx.ball_position();
        let side = me.team.side();

        let my_distance = me.position.distance_to(&ball);
        let opponent_distance = ctx
            .world
            .opponents_of(me)
            .map(|opponent| opponent.position.distance_to(&ball))
            .fold(f32::INFINITY, f32::min);

        if opponent_distance <= my_distance {
            return None;
        }

        let angle_weight = ctx.config.positioning.boost_angle_weight;

        ctx.world
            .field
            .large_pads()
            .filter(|pad| pad.available_within(ctx.eta(me, &pad.location)))
            .filter(|pad| pad.location.y * side > ball.y * side)
            .map(|pad| {
                let heading_error = me.forward.angle_to(&me.position.direction_to(&pad.location));
                let score = me.position.distance_to(&pad.location)
                    + pad.location.distance_to(&ball)
                    + angle_weight * heading_error;

                (pad, score)
            })
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(pad, _)| *pad)
    }

    /// Quickest large pad to reach, wherever it is.
    pub fn nearest_boost_pad(&self) -> Option<BoostPad> {
        let me = self.ctx.me();

        self.ctx
            .world
            .field
            .large_pads()
            .map(|pad| (pad, self.ctx.eta(me, &pad.location)))
            .filter(|(pad, eta)| *eta < MAX_BOOST_ETA && pad.available_within(*eta))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(pad, _)| *pad)
    }
}

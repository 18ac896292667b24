use crate::tactics::TacticalContext;
use crate::utils::VectorExtensions;
use crate::world::{Agent, BallSlice};
use nalgebra::Vector3;

/// Shortest eta used when turning a closing distance into a speed.
const MIN_POWER_ETA: f32 = 1.0 / 60.0;

/// Where and when an agent first gets to the ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intercept {
    pub slice: Option<BallSlice>,
    pub location: Vector3<f32>,
    pub eta: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PossessionRecord {
    pub has_possession: bool,
    pub intercept: Option<BallSlice>,
    pub eta: f32,
    /// Margin before anyone else contests; positive when someone is faster.
    pub free_time: f32,
    pub power: f32,
}

impl PossessionRecord {
    /// `min_eta` is taken over every living agent, including the one being judged.
    #[inline]
    pub fn verdict(min_eta: f32, eta: f32, goal_side: bool, margin: f32) -> bool {
        min_eta > eta - margin && goal_side
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PossessionReport {
    pub mine: PossessionRecord,
    pub theirs: PossessionRecord,
}

pub struct PossessionOperationsImpl<'p> {
    ctx: &'p TacticalContext<'p>,
}

impl<'p> PossessionOperationsImpl<'p> {
    pub fn new(ctx: &'p TacticalContext<'p>) -> Self {
        PossessionOperationsImpl { ctx }
    }

    /// Earliest slice the agent reaches before the ball does, with a fallback eta
    /// of 0 inside close range and the heading error otherwise.
    pub fn intercept(&self, agent: &Agent) -> Intercept {
        let now = self.ctx.now();

        let slice = self
            .ctx
            .world
            .prediction
            .find(|slice| self.ctx.eta(agent, &slice.position) < slice.time_remaining(now))
            .copied();

        match slice {
            Some(slice) => Intercept {
                slice: Some(slice),
                location: slice.position,
                eta: slice.time_remaining(now),
            },
            None => {
                let location = self.ctx.ball_position();
                let close_range = self.ctx.config.possession.close_range;

                let eta = if agent.position.distance_to(&location) < close_range {
                    0.0
                } else {
                    agent.forward.angle_to(&agent.position.direction_to(&location))
                };

                Intercept {
                    slice: None,
                    location,
                    eta,
                }
            }
        }
    }

    /// How hard the ball has to be played: the larger of the relative ball speed
    /// after contact and the closing speed needed to get there.
    pub fn power(&self, agent: &Agent, intercept: Option<&BallSlice>, eta: f32) -> f32 {
        let ball = match intercept {
            Some(slice) => slice.to_ball(),
            None => self.ctx.world.ball,
        };

        let closing = (ball.position - agent.position) / eta.max(MIN_POWER_ETA);

        (ball.velocity - closing).length().max(closing.length())
    }

    pub fn evaluate(&self) -> PossessionReport {
        let world = self.ctx.world;
        let config = &self.ctx.config.possession;
        let me = self.ctx.me();

        let mut min_eta = config.no_intercept_eta;
        let mut theirs = PossessionRecord {
            has_possession: false,
            intercept: None,
            eta: config.no_intercept_eta,
            free_time: 0.0,
            power: 0.0,
        };

        for agent in world.living_agents() {
            let intercept = self.intercept(agent);

            if intercept.eta < min_eta {
                min_eta = intercept.eta;
            }

            if agent.is_opponent_of(me) && intercept.eta < theirs.eta {
                let goal = self.ctx.own_goal(agent).location;
                let goal_side = agent
                    .position
                    .direction_to(&goal)
                    .dot(&intercept.location.direction_to(&agent.position))
                    > 0.0;

                if goal_side {
                    theirs.eta = intercept.eta;
                    theirs.intercept = intercept.slice;
                    theirs.power = self.power(agent, intercept.slice.as_ref(), intercept.eta);
                }
            }
        }

        theirs.free_time = min_eta - theirs.eta;
        theirs.has_possession = PossessionRecord::verdict(min_eta, theirs.eta, true, config.margin);

        let own = self.intercept(me);
        let goal_side = me
            .position
            .direction_to(&self.ctx.own_goal(me).location)
            .dot(&own.location.direction_to(&me.position))
            > 0.0;

        let mine = PossessionRecord {
            has_possession: PossessionRecord::verdict(min_eta, own.eta, goal_side, config.margin),
            intercept: own.slice,
            eta: own.eta,
            free_time: min_eta - own.eta,
            power: self.power(me, own.slice.as_ref(), own.eta),
        };

        PossessionReport { mine, theirs }
    }

    /// Able to defend the own goal, or holding the ball.
    pub fn is_back(&self) -> bool {
        let me = self.ctx.me();

        self.ctx.threat().can_defend(me, &self.ctx.own_goal(me).location)
            || self.evaluate().mine.has_possession
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{blue, orange, with_context, world_with};
    use crate::world::{BallPrediction, BallState, WorldSnapshotBuilder};

    #[test]
    fn test_verdict_with_comfortable_margin() {
        assert!(PossessionRecord::verdict(1.3, 1.0, true, 0.2));
    }

    #[test]
    fn test_verdict_inside_margin_is_contested() {
        // Someone else gets there 0.3 s earlier, past the 0.2 s margin.
        assert!(!PossessionRecord::verdict(0.7, 1.0, true, 0.2));
    }

    #[test]
    fn test_verdict_tolerates_a_rival_within_the_margin() {
        assert!(PossessionRecord::verdict(1.05, 1.0, true, 0.2));
        assert!(PossessionRecord::verdict(0.85, 1.0, true, 0.2));
    }

    #[test]
    fn test_verdict_requires_goal_side() {
        assert!(!PossessionRecord::verdict(1.3, 1.0, false, 0.2));
    }

    #[test]
    fn test_stationary_ball_in_front_is_ours() {
        // Blue defends -y; the agent sits between the ball and its own goal.
        let world = world_with(
            vec![blue(1, 0.0, -1500.0), orange(2, 3500.0, 4500.0)],
            Vector3::new(0.0, 0.0, 93.0),
        );

        with_context(&world, |ctx| {
            let report = ctx.possession().evaluate();

            assert!(report.mine.intercept.is_some());
            assert!(report.mine.has_possession);
            assert!(report.mine.eta <= report.theirs.eta);
            assert!(ctx.possession().is_back());
        });
    }

    #[test]
    fn test_agent_beyond_the_ball_has_no_possession() {
        let world = world_with(
            vec![blue(1, 0.0, 1500.0), orange(2, 0.0, 4500.0)],
            Vector3::new(0.0, 0.0, 93.0),
        );

        with_context(&world, |ctx| {
            assert!(!ctx.possession().evaluate().mine.has_possession);
        });
    }

    #[test]
    fn test_falls_back_to_proximity_without_prediction() {
        let me = blue(1, 0.0, -300.0);
        let world = WorldSnapshotBuilder::new()
            .me(1)
            .agent(me)
            .ball(BallState::new(Vector3::new(0.0, 0.0, 93.0), Vector3::zeros(), 0.0))
            .prediction(BallPrediction::empty())
            .build()
            .expect("world");

        with_context(&world, |ctx| {
            let intercept = ctx.possession().intercept(ctx.me());

            assert!(intercept.slice.is_none());
            assert_eq!(intercept.eta, 0.0);
            assert_eq!(intercept.location, world.ball.position);
        });
    }

    #[test]
    fn test_far_fallback_uses_heading_error() {
        // Facing -y (default for blue is +y); the ball lies straight ahead along +y.
        let me = crate::world::AgentBuilder::new()
            .id(1)
            .index(0)
            .team(crate::world::Team::Blue)
            .position(Vector3::new(0.0, -3000.0, 17.0))
            .forward(Vector3::new(0.0, -1.0, 0.0))
            .build()
            .expect("agent");

        let world = WorldSnapshotBuilder::new()
            .me(1)
            .agent(me)
            .ball(BallState::new(Vector3::new(0.0, 0.0, 17.0), Vector3::zeros(), 0.0))
            .prediction(BallPrediction::empty())
            .build()
            .expect("world");

        with_context(&world, |ctx| {
            let intercept = ctx.possession().intercept(ctx.me());
            assert!((intercept.eta - std::f32::consts::PI).abs() < 1e-3);
        });
    }

    #[test]
    fn test_power_is_at_least_closing_speed() {
        let world = world_with(vec![blue(1, 0.0, -1000.0)], Vector3::new(0.0, 0.0, 93.0));

        with_context(&world, |ctx| {
            let power = ctx.possession().power(ctx.me(), None, 1.0);
            let closing = (world.ball.position - ctx.me().position).length();

            assert!(power >= closing - 1e-3);
        });
    }

    #[test]
    fn test_power_survives_zero_eta() {
        let world = world_with(vec![blue(1, 0.0, -100.0)], Vector3::new(0.0, 0.0, 93.0));

        with_context(&world, |ctx| {
            assert!(ctx.possession().power(ctx.me(), None, 0.0).is_finite());
        });
    }
}

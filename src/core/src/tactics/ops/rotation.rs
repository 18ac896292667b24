use crate::tactics::TacticalContext;
use crate::utils::VectorExtensions;
use crate::world::Agent;

/// Rotation bookkeeping for the controlled agent.
pub struct RotationOperationsImpl<'p> {
    ctx: &'p TacticalContext<'p>,
}

impl<'p> RotationOperationsImpl<'p> {
    pub fn new(ctx: &'p TacticalContext<'p>) -> Self {
        RotationOperationsImpl { ctx }
    }

    /// No teammate is deeper toward the own goal.
    pub fn is_last_one_back(&self) -> bool {
        let me = self.ctx.me();
        let depth = me.defensive_depth();

        !self
            .ctx
            .world
            .teammates_of(me)
            .any(|teammate| teammate.defensive_depth() > depth)
    }

    pub fn in_goal_area(&self) -> bool {
        let rotation = &self.ctx.config.rotation;
        let position = self.ctx.me().position;

        position.y.abs() > rotation.goal_area_depth && position.x.abs() < rotation.goal_area_half_width
    }

    /// Teammates well past the ball toward the opponent goal.
    pub fn friends_ahead_of_ball(&self) -> usize {
        let me = self.ctx.me();
        let margin = self.ctx.config.rotation.friends_ahead_margin;
        let ball_y = self.ctx.ball_position().y;

        self.ctx
            .world
            .teammates_of(me)
            .filter(|teammate| (teammate.position.y - ball_y) * -me.team.side() > margin)
            .count()
    }

    /// An opponent parked deep in its own end that the agent can reach at supersonic
    /// speed; the one nearest its goal when several qualify.
    pub fn demo_candidate(&self) -> Option<u32> {
        let rotation = &self.ctx.config.rotation;
        let me = self.ctx.me();
        let their_goal = self.ctx.opponent_goal(me).location;

        let speed = me.velocity.length();

        self.ctx
            .world
            .opponents_of(me)
            .filter(|opponent| opponent.position.y * me.team.side() < -rotation.demo_depth)
            .filter(|opponent| {
                if speed >= rotation.supersonic_speed {
                    return true;
                }

                let boost_time = (rotation.supersonic_speed - speed) / rotation.boost_acceleration;
                let boost_required = rotation.boost_per_second * boost_time;
                let distance_required =
                    speed * boost_time + 0.5 * rotation.boost_acceleration * boost_time * boost_time;

                me.boost >= boost_required
                    && distance_required <= me.position.distance_to(&opponent.position)
            })
            .min_by(|a, b| {
                a.position
                    .distance_to(&their_goal)
                    .total_cmp(&b.position.distance_to(&their_goal))
            })
            .map(|opponent| opponent.id)
    }

    /// Leave the ball to a teammate and fall back to the rally line.
    pub fn should_rotate(&self) -> bool {
        let ahead = self.ctx.roles().is_ahead_of_ball(self.ctx.me());

        if self.is_last_one_back() && !self.in_goal_area() {
            return false;
        }

        if self.demo_candidate().is_some() && !ahead {
            return false;
        }

        if self.friends_ahead_of_ball() == 0 && !ahead {
            return false;
        }

        true
    }

    /// Ball in the opponent half.
    pub fn should_attack(&self) -> bool {
        self.ctx.ball_position().y * self.ctx.me().team.side() <= 0.0
    }

    pub fn should_defend(&self) -> bool {
        !self.should_attack()
    }

    pub fn closest_teammate(&self) -> Option<&'p Agent> {
        let me = self.ctx.me();
        self.closest_of(self.ctx.world.teammates_of(me))
    }

    pub fn closest_opponent(&self) -> Option<&'p Agent> {
        let me = self.ctx.me();
        self.closest_of(self.ctx.world.opponents_of(me))
    }

    fn closest_of(&self, agents: impl Iterator<Item = &'p Agent>) -> Option<&'p Agent> {
        let position = self.ctx.me().position;

        agents.min_by(|a, b| {
            a.position
                .distance_to(&position)
                .total_cmp(&b.position.distance_to(&position))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{blue, orange, with_boost, with_context, world_with};
    use crate::world::{AgentBuilder, Team};
    use nalgebra::Vector3;

    const BALL: Vector3<f32> = Vector3::new(0.0, 0.0, 93.0);

    #[test]
    fn test_last_one_back() {
        let world = world_with(vec![blue(1, 0.0, -4000.0), blue(2, 0.0, -1000.0)], BALL);

        with_context(&world, |ctx| {
            assert!(ctx.rotation().is_last_one_back());
        });

        let world = world_with(vec![blue(1, 0.0, -1000.0), blue(2, 0.0, -4000.0)], BALL);

        with_context(&world, |ctx| {
            assert!(!ctx.rotation().is_last_one_back());
        });
    }

    #[test]
    fn test_goal_area() {
        let world = world_with(vec![blue(1, 300.0, -5080.0)], BALL);

        with_context(&world, |ctx| assert!(ctx.rotation().in_goal_area()));

        let world = world_with(vec![blue(1, 1500.0, -5080.0)], BALL);

        with_context(&world, |ctx| assert!(!ctx.rotation().in_goal_area()));
    }

    #[test]
    fn test_last_back_stays_put_outside_goal() {
        let world = world_with(vec![blue(1, 0.0, -3000.0), blue(2, 0.0, 2000.0)], BALL);

        with_context(&world, |ctx| assert!(!ctx.rotation().should_rotate()));
    }

    #[test]
    fn test_ahead_of_ball_rotates() {
        // Both blue agents are past the ball; the deeper one is still ahead of it.
        let world = world_with(vec![blue(1, 0.0, 1500.0), blue(2, 0.0, 800.0)], BALL);

        with_context(&world, |ctx| {
            assert_eq!(ctx.rotation().friends_ahead_of_ball(), 0);
            assert!(ctx.rotation().should_rotate());
        });
    }

    #[test]
    fn test_friend_ahead_pulls_me_back() {
        let world = world_with(vec![blue(1, 0.0, -500.0), blue(2, 0.0, 2500.0), blue(3, 0.0, -3000.0)], BALL);

        with_context(&world, |ctx| {
            assert_eq!(ctx.rotation().friends_ahead_of_ball(), 1);
            assert!(ctx.rotation().should_rotate());
        });
    }

    #[test]
    fn test_demo_candidate_needs_boost_or_speed() {
        let deep = orange(2, 500.0, 4800.0);

        let slow_and_empty = with_boost(blue(1, 0.0, 0.0), 0.0);
        let world = world_with(vec![slow_and_empty, deep], BALL);
        with_context(&world, |ctx| assert_eq!(ctx.rotation().demo_candidate(), None));

        let supersonic = AgentBuilder::new()
            .id(1)
            .index(1)
            .team(Team::Blue)
            .position(Vector3::new(0.0, 0.0, 17.0))
            .velocity(Vector3::new(0.0, 2250.0, 0.0))
            .boost(0.0)
            .build()
            .expect("agent");
        let world = world_with(vec![supersonic, deep], BALL);
        with_context(&world, |ctx| assert_eq!(ctx.rotation().demo_candidate(), Some(2)));

        let charged = with_boost(blue(1, 0.0, 0.0), 100.0);
        let world = world_with(vec![charged, deep], BALL);
        with_context(&world, |ctx| assert_eq!(ctx.rotation().demo_candidate(), Some(2)));
    }

    #[test]
    fn test_attack_and_defend_split_on_halfway_line() {
        let world = world_with(vec![blue(1, 0.0, -3000.0)], Vector3::new(0.0, 1000.0, 93.0));
        with_context(&world, |ctx| {
            assert!(ctx.rotation().should_attack());
            assert!(!ctx.rotation().should_defend());
        });

        let world = world_with(vec![blue(1, 0.0, -3000.0)], Vector3::new(0.0, -1000.0, 93.0));
        with_context(&world, |ctx| assert!(ctx.rotation().should_defend()));
    }

    #[test]
    fn test_closest_teammate_and_opponent() {
        let world = world_with(
            vec![
                blue(1, 0.0, 0.0),
                blue(2, 0.0, 3000.0),
                blue(3, 500.0, 500.0),
                orange(4, -2000.0, 0.0),
                orange(5, 0.0, -900.0),
            ],
            BALL,
        );

        with_context(&world, |ctx| {
            assert_eq!(ctx.rotation().closest_teammate().map(|agent| agent.id), Some(3));
            assert_eq!(ctx.rotation().closest_opponent().map(|agent| agent.id), Some(5));
        });

        let world = world_with(vec![blue(1, 0.0, 0.0)], BALL);
        with_context(&world, |ctx| assert!(ctx.rotation().closest_teammate().is_none()));
    }
}

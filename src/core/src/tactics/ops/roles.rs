use crate::tactics::TacticalContext;
use crate::utils::VectorExtensions;
use crate::world::Agent;
use itertools::Itertools;
use nalgebra::Vector3;
use std::iter;

/// Who answers the ball: closest, second closest, kickoff taker.
pub struct RoleOperationsImpl<'p> {
    ctx: &'p TacticalContext<'p>,
}

impl<'p> RoleOperationsImpl<'p> {
    pub fn new(ctx: &'p TacticalContext<'p>) -> Self {
        RoleOperationsImpl { ctx }
    }

    /// 5 when the agent is further from its own goal line than the ball is, else 1.
    fn defense_factor(&self, agent: &Agent) -> f32 {
        let ball_depth = self.ctx.ball_position().y * agent.team.side();

        if agent.defensive_depth() < ball_depth {
            self.ctx.config.roles.upfield_penalty
        } else {
            1.0
        }
    }

    /// Distance to the ball, penalised when up-field and discounted by boost.
    ///
    /// The team-relative variant stretches the sideways axis instead of scaling
    /// the whole length, which favours the teammate lined up behind the ball.
    pub fn biased_distance(&self, agent: &Agent, team_only: bool) -> f32 {
        let roles = &self.ctx.config.roles;
        let offset = agent.position - self.ctx.ball_position();
        let factor = self.defense_factor(agent);

        let distance = if team_only {
            Vector3::new(roles.lateral_weight * offset.x, factor * offset.y, offset.z).length()
        } else {
            offset.length() * factor
        };

        distance - roles.boost_subsidy * agent.boost
    }

    /// More than the ahead margin past the ball, toward the opponent goal.
    pub fn is_ahead_of_ball(&self, agent: &Agent) -> bool {
        let forward_offset = (agent.position.y - self.ctx.ball_position().y) * -agent.team.side();
        forward_offset > self.ctx.config.roles.ahead_margin
    }

    /// The agent is caught ahead of the ball along with every teammate.
    pub fn are_no_bots_back(&self, agent: &Agent) -> bool {
        if !self.is_ahead_of_ball(agent) || self.is_closest(agent, false) {
            return false;
        }

        self.ctx
            .world
            .teammates_of(agent)
            .all(|teammate| self.is_ahead_of_ball(teammate))
    }

    pub fn is_closest(&self, agent: &Agent, team_only: bool) -> bool {
        let world = self.ctx.world;

        if team_only && world.teammates_of(agent).next().is_none() {
            return true;
        }

        let ahead_counts = team_only && self.are_no_bots_back(agent);

        if self.is_ahead_of_ball(agent) && !ahead_counts {
            return false;
        }

        let own_distance = self.biased_distance(agent, team_only);

        if !team_only
            && world
                .opponents_of(agent)
                .any(|opponent| self.biased_distance(opponent, false) < own_distance)
        {
            return false;
        }

        !world.teammates_of(agent).any(|teammate| {
            let excluded = self.is_ahead_of_ball(teammate) && !ahead_counts;
            !excluded && self.biased_distance(teammate, team_only) < own_distance
        })
    }

    pub fn is_second_closest(&self, agent: &Agent) -> bool {
        let world = self.ctx.world;

        if self.is_closest(agent, true) || self.is_ahead_of_ball(agent) {
            return false;
        }

        if world.teammates_of(agent).next().is_none() {
            return false;
        }

        let own_distance = self.biased_distance(agent, true);

        let closest_id = world
            .teammates_of(agent)
            .find(|teammate| self.is_closest(teammate, true))
            .map(|teammate| teammate.id);

        !world
            .teammates_of(agent)
            .filter(|teammate| Some(teammate.id) != closest_id)
            .any(|teammate| self.biased_distance(teammate, true) < own_distance)
    }

    /// Raw distance plus the agent index, so equal spawns resolve the same way every time.
    pub fn kickoff_distance(&self, agent: &Agent) -> f32 {
        agent.position.distance_to(&self.ctx.ball_position()) + agent.index as f32
    }

    pub fn is_closest_kickoff(&self, agent: &Agent) -> bool {
        let own_distance = self.kickoff_distance(agent);

        !self
            .ctx
            .world
            .teammates_of(agent)
            .any(|teammate| self.kickoff_distance(teammate) < own_distance)
    }

    /// Second in the kickoff order, ranked over the whole team.
    pub fn is_second_closest_kickoff(&self) -> bool {
        let me = self.ctx.me();

        self.ctx
            .world
            .teammates_of(me)
            .chain(iter::once(me))
            .sorted_by(|a, b| self.kickoff_distance(a).total_cmp(&self.kickoff_distance(b)))
            .position(|agent| agent.id == me.id)
            == Some(1)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{blue, orange, with_context, with_boost, world_with};
    use nalgebra::Vector3;

    const BALL: Vector3<f32> = Vector3::new(0.0, 0.0, 93.0);

    #[test]
    fn test_alone_is_always_closest_within_team() {
        let world = world_with(vec![blue(1, 0.0, 4000.0), orange(2, 0.0, 100.0)], BALL);

        with_context(&world, |ctx| {
            let me = ctx.me();
            assert!(ctx.roles().is_closest(me, true));
            assert!(!ctx.roles().is_second_closest(me));
        });
    }

    #[test]
    fn test_upfield_agent_is_penalised() {
        // Same raw distance; agent 2 sits between the ball and the blue goal.
        let world = world_with(
            vec![
                with_boost(blue(1, 0.0, 400.0), 0.0),
                with_boost(blue(2, 0.0, -400.0), 0.0),
            ],
            BALL,
        );

        with_context(&world, |ctx| {
            let roles = ctx.roles();
            let upfield = world.agent(1).expect("agent 1");
            let goal_side = world.agent(2).expect("agent 2");

            assert!(roles.biased_distance(upfield, true) > roles.biased_distance(goal_side, true));
            assert!(roles.is_closest(goal_side, true));
            assert!(!roles.is_closest(upfield, true));
        });
    }

    #[test]
    fn test_boost_subsidy_breaks_near_ties() {
        let world = world_with(
            vec![
                with_boost(blue(1, -1000.0, -1000.0), 100.0),
                with_boost(blue(2, 1000.0, -1000.0), 0.0),
            ],
            BALL,
        );

        with_context(&world, |ctx| {
            let rich = world.agent(1).expect("agent 1");
            let poor = world.agent(2).expect("agent 2");

            assert!(ctx.roles().is_closest(rich, true));
            assert!(ctx.roles().is_second_closest(poor));
        });
    }

    #[test]
    fn test_at_most_one_closest_per_team() {
        let world = world_with(
            vec![
                blue(1, -2000.0, -1500.0),
                blue(2, 500.0, -800.0),
                blue(3, 2500.0, 1200.0),
                orange(4, 0.0, 1500.0),
                orange(5, -1800.0, 3000.0),
                orange(6, 900.0, -200.0),
            ],
            Vector3::new(300.0, 200.0, 93.0),
        );

        with_context(&world, |ctx| {
            for team in [crate::world::Team::Blue, crate::world::Team::Orange] {
                let closest = world
                    .agents()
                    .iter()
                    .filter(|agent| agent.team == team)
                    .filter(|agent| ctx.roles().is_closest(agent, true))
                    .count();

                assert!(closest <= 1, "{:?} has {} closest agents", team, closest);
            }
        });
    }

    #[test]
    fn test_agent_ahead_of_ball_is_not_closest() {
        // Blue attacks +y; agent 1 is well past the ball.
        let world = world_with(vec![blue(1, 0.0, 1200.0), blue(2, 0.0, -3000.0)], BALL);

        with_context(&world, |ctx| {
            let ahead = world.agent(1).expect("agent 1");

            assert!(ctx.roles().is_ahead_of_ball(ahead));
            assert!(!ctx.roles().is_closest(ahead, true));
            assert!(ctx.roles().is_closest(world.agent(2).expect("agent 2"), true));
        });
    }

    #[test]
    fn test_everyone_ahead_still_yields_a_closest() {
        let world = world_with(
            vec![
                with_boost(blue(1, 0.0, 1500.0), 0.0),
                with_boost(blue(2, 0.0, 3000.0), 0.0),
                with_boost(orange(3, 0.0, 600.0), 0.0),
            ],
            BALL,
        );

        with_context(&world, |ctx| {
            let near = world.agent(1).expect("agent 1");
            let far = world.agent(2).expect("agent 2");

            assert!(ctx.roles().are_no_bots_back(near));
            assert!(ctx.roles().is_closest(near, true));
            assert!(!ctx.roles().is_closest(far, true));
        });
    }

    #[test]
    fn test_opponent_closer_blocks_global_closest() {
        let world = world_with(
            vec![with_boost(blue(1, 0.0, -1500.0), 0.0), with_boost(orange(2, 0.0, 300.0), 0.0)],
            BALL,
        );

        with_context(&world, |ctx| {
            let me = ctx.me();

            assert!(ctx.roles().is_closest(me, true));
            assert!(!ctx.roles().is_closest(me, false));
        });
    }

    #[test]
    fn test_kickoff_roles_use_raw_distance_and_index() {
        // Mirrored diagonal spawns: identical distances, index decides.
        let world = world_with(
            vec![
                with_boost(blue(1, -2048.0, -2560.0), 33.0),
                with_boost(blue(0, 2048.0, -2560.0), 33.0),
                with_boost(blue(2, 0.0, -4608.0), 100.0),
            ],
            BALL,
        );

        with_context(&world, |ctx| {
            let roles = ctx.roles();

            assert!(roles.is_closest_kickoff(world.agent(0).expect("agent 0")));
            assert!(!roles.is_closest_kickoff(ctx.me()));
            assert!(roles.is_second_closest_kickoff());
            assert!(!roles.is_closest_kickoff(world.agent(2).expect("agent 2")));
        });
    }
}

use crate::loaders::{AgentEntity, PadEntity, ScenarioEntity};
use stardust_core::{
    Agent, AgentBuilder, BallState, BoostPad, Field, Score, Team, Touch, Vector3, WorldSnapshot,
    WorldSnapshotBuilder,
};

pub struct WorldGenerator;

impl WorldGenerator {
    pub fn generate(scenario: &ScenarioEntity) -> Result<WorldSnapshot, String> {
        let agents = scenario
            .agents
            .iter()
            .map(WorldGenerator::generate_agent)
            .collect::<Result<Vec<Agent>, String>>()?;

        let ball = BallState::new(
            Self::vector(scenario.ball.position),
            Self::vector(scenario.ball.velocity),
            scenario.time,
        );

        let field = match &scenario.pads {
            Some(pads) => Field::with_pads(pads.iter().map(WorldGenerator::generate_pad).collect()),
            None => Field::standard(),
        };

        let mut builder = WorldSnapshotBuilder::new()
            .time(scenario.time)
            .me(scenario.me)
            .agents(agents)
            .ball(ball)
            .field(field)
            .score(Score::new(scenario.score.blue, scenario.score.orange))
            .kickoff(scenario.kickoff);

        if let Some(touch) = &scenario.latest_touch {
            builder = builder.latest_touch(Touch {
                team: Team::try_from(touch.team)?,
                time: touch.time,
            });
        }

        builder
            .build()
            .map_err(|error| format!("scenario {}: {}", scenario.name, error))
    }

    fn generate_agent(entity: &AgentEntity) -> Result<Agent, String> {
        let mut builder = AgentBuilder::new()
            .id(entity.id)
            .index(entity.index.unwrap_or(entity.id))
            .team(Team::try_from(entity.team)?)
            .position(Self::vector(entity.position))
            .velocity(Self::vector(entity.velocity))
            .grounded(entity.grounded)
            .demolished(entity.demolished);

        if let Some(forward) = entity.forward {
            builder = builder.forward(Self::vector(forward));
        }

        if let Some(boost) = entity.boost {
            builder = builder.boost(boost);
        }

        builder.build()
    }

    fn generate_pad(entity: &PadEntity) -> BoostPad {
        BoostPad {
            index: entity.index,
            location: Self::vector(entity.position),
            is_large: entity.is_large,
            is_active: entity.is_active,
            time_until_active: entity.time_until_active,
        }
    }

    #[inline]
    fn vector(components: [f32; 3]) -> Vector3<f32> {
        Vector3::new(components[0], components[1], components[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::ScenarioLoader;

    #[test]
    fn test_every_bundled_scenario_generates() {
        let scenarios = ScenarioLoader::load().expect("bundled scenarios");

        for scenario in &scenarios {
            let world = WorldGenerator::generate(scenario).expect(&scenario.name);

            assert_eq!(world.me().id, scenario.me);
            assert_eq!(world.agents().len(), scenario.agents.len());
            assert!(!world.prediction.is_empty());
        }
    }

    #[test]
    fn test_unknown_team_is_rejected() {
        let scenarios = ScenarioLoader::from_json(
            r#"[{
                "name": "bad team",
                "me": 1,
                "ball": { "position": [0, 0, 93] },
                "agents": [{ "id": 1, "team": 7, "position": [0, 0, 17] }]
            }]"#,
        )
        .expect("json");

        assert!(WorldGenerator::generate(&scenarios[0]).is_err());
    }

    #[test]
    fn test_missing_controlled_agent_names_the_scenario() {
        let scenarios = ScenarioLoader::from_json(
            r#"[{
                "name": "orphan",
                "me": 9,
                "ball": { "position": [0, 0, 93] },
                "agents": [{ "id": 1, "team": 0, "position": [0, 0, 17] }]
            }]"#,
        )
        .expect("json");

        let error = WorldGenerator::generate(&scenarios[0]).expect_err("missing agent");
        assert!(error.starts_with("scenario orphan"));
    }

    #[test]
    fn test_custom_pads_replace_the_standard_set() {
        let scenarios = ScenarioLoader::from_json(
            r#"[{
                "name": "one pad",
                "me": 1,
                "ball": { "position": [0, 0, 93] },
                "agents": [{ "id": 1, "team": 0, "position": [0, 0, 17] }],
                "pads": [{ "index": 0, "position": [0, -4000, 73], "is_active": false, "time_until_active": 4 }]
            }]"#,
        )
        .expect("json");

        let world = WorldGenerator::generate(&scenarios[0]).expect("world");

        assert_eq!(world.field.boost_pads.len(), 1);
        assert!(!world.field.boost_pads[0].is_active);
        assert_eq!(world.field.boost_pads[0].time_until_active, 4.0);
    }
}

use serde::Deserialize;

const STATIC_SCENARIOS_JSON: &str = include_str!("../data/scenarios.json");

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioEntity {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time: f32,
    pub me: u32,
    #[serde(default)]
    pub kickoff: bool,
    #[serde(default)]
    pub score: ScoreEntity,
    #[serde(default)]
    pub latest_touch: Option<TouchEntity>,
    pub ball: BallEntity,
    pub agents: Vec<AgentEntity>,
    /// Standard large pads when absent.
    #[serde(default)]
    pub pads: Option<Vec<PadEntity>>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ScoreEntity {
    pub blue: u32,
    pub orange: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TouchEntity {
    pub team: u8,
    pub time: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BallEntity {
    pub position: [f32; 3],
    #[serde(default)]
    pub velocity: [f32; 3],
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AgentEntity {
    pub id: u32,
    pub index: Option<u32>,
    pub team: u8,
    pub position: [f32; 3],
    #[serde(default)]
    pub velocity: [f32; 3],
    pub forward: Option<[f32; 3]>,
    pub boost: Option<f32>,
    #[serde(default = "default_grounded")]
    pub grounded: bool,
    #[serde(default)]
    pub demolished: bool,
}

fn default_grounded() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PadEntity {
    pub index: usize,
    pub position: [f32; 3],
    #[serde(default = "default_large")]
    pub is_large: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub time_until_active: f32,
}

fn default_large() -> bool {
    true
}

fn default_active() -> bool {
    true
}

pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Scenarios bundled with the crate.
    pub fn load() -> serde_json::Result<Vec<ScenarioEntity>> {
        Self::from_json(STATIC_SCENARIOS_JSON)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Vec<ScenarioEntity>> {
        serde_json::from_str(json)
    }

    pub fn find<'s>(scenarios: &'s [ScenarioEntity], name: &str) -> Option<&'s ScenarioEntity> {
        scenarios.iter().find(|scenario| scenario.name == name)
    }
}

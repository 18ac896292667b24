use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

pub const MAX_BOOST: f32 = 100.0;
pub const DEFAULT_BOOST: f32 = 33.0;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    Blue,
    Orange,
}

impl Team {
    /// Sign of the y coordinate of this team's own goal.
    #[inline]
    pub fn side(&self) -> f32 {
        match self {
            Team::Blue => -1.0,
            Team::Orange => 1.0,
        }
    }

    #[inline]
    pub fn opponent(&self) -> Team {
        match self {
            Team::Blue => Team::Orange,
            Team::Orange => Team::Blue,
        }
    }
}

impl From<Team> for u8 {
    fn from(team: Team) -> Self {
        match team {
            Team::Blue => 0,
            Team::Orange => 1,
        }
    }
}

impl TryFrom<u8> for Team {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Team::Blue),
            1 => Ok(Team::Orange),
            other => Err(format!("unknown team id = {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    pub id: u32,
    pub index: u32,
    pub team: Team,
    pub position: Vector3<f32>,
    pub velocity: Vector3<f32>,
    pub forward: Vector3<f32>,
    pub boost: f32,
    pub grounded: bool,
    pub demolished: bool,
}

impl Agent {
    #[inline]
    pub fn is_teammate_of(&self, other: &Agent) -> bool {
        self.team == other.team && self.id != other.id
    }

    #[inline]
    pub fn is_opponent_of(&self, other: &Agent) -> bool {
        self.team != other.team
    }

    /// Signed coordinate along the team's defense axis. Larger means closer to own goal.
    #[inline]
    pub fn defensive_depth(&self) -> f32 {
        self.position.y * self.team.side()
    }
}

#[derive(Default)]
pub struct AgentBuilder {
    id: Option<u32>,
    index: Option<u32>,
    team: Option<Team>,
    position: Option<Vector3<f32>>,
    velocity: Option<Vector3<f32>>,
    forward: Option<Vector3<f32>>,
    boost: Option<f32>,
    grounded: Option<bool>,
    demolished: Option<bool>,
}

impl AgentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }

    pub fn team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }

    pub fn position(mut self, position: Vector3<f32>) -> Self {
        self.position = Some(position);
        self
    }

    pub fn velocity(mut self, velocity: Vector3<f32>) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn forward(mut self, forward: Vector3<f32>) -> Self {
        self.forward = Some(forward);
        self
    }

    pub fn boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn grounded(mut self, grounded: bool) -> Self {
        self.grounded = Some(grounded);
        self
    }

    pub fn demolished(mut self, demolished: bool) -> Self {
        self.demolished = Some(demolished);
        self
    }

    pub fn build(self) -> Result<Agent, String> {
        let team = self.team.ok_or("team is required")?;

        // Facing the opponent goal by default
        let default_forward = Vector3::new(0.0, -team.side(), 0.0);

        Ok(Agent {
            id: self.id.ok_or("id is required")?,
            index: self.index.ok_or("index is required")?,
            team,
            position: self.position.ok_or("position is required")?,
            velocity: self.velocity.unwrap_or_else(Vector3::zeros),
            forward: self.forward.unwrap_or(default_forward),
            boost: self.boost.unwrap_or(DEFAULT_BOOST).clamp(0.0, MAX_BOOST),
            grounded: self.grounded.unwrap_or(true),
            demolished: self.demolished.unwrap_or(false),
        })
    }
}

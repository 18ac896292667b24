use crate::world::agent::{Agent, Team};
use crate::world::ball::{BallPrediction, BallState, DEFAULT_HORIZON, DEFAULT_SAMPLE_RATE};
use crate::world::field::Field;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub blue: u32,
    pub orange: u32,
}

impl Score {
    pub fn new(blue: u32, orange: u32) -> Self {
        Score { blue, orange }
    }

    /// `(ours, theirs)` from the point of view of `team`.
    pub fn for_team(&self, team: Team) -> (u32, u32) {
        match team {
            Team::Blue => (self.blue, self.orange),
            Team::Orange => (self.orange, self.blue),
        }
    }
}

/// Latest ball touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    pub team: Team,
    pub time: f32,
}

/// Frozen view of the match for one tick.
#[derive(Debug, Clone)]
pub struct WorldSnapshot {
    pub time: f32,
    pub ball: BallState,
    pub prediction: BallPrediction,
    pub field: Field,
    pub score: Score,
    pub is_kickoff: bool,
    pub latest_touch: Option<Touch>,

    agents: Vec<Agent>,
    me_index: usize,
}

impl WorldSnapshot {
    /// The controlled agent.
    #[inline]
    pub fn me(&self) -> &Agent {
        &self.agents[self.me_index]
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: u32) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    pub fn living_agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|agent| !agent.demolished)
    }

    /// Living agents on `agent`'s team, without `agent` itself.
    pub fn teammates_of<'a>(&'a self, agent: &'a Agent) -> impl Iterator<Item = &'a Agent> + 'a {
        self.living_agents()
            .filter(move |other| other.is_teammate_of(agent))
    }

    pub fn opponents_of<'a>(&'a self, agent: &'a Agent) -> impl Iterator<Item = &'a Agent> + 'a {
        self.living_agents()
            .filter(move |other| other.is_opponent_of(agent))
    }

    pub fn touched_last_by(&self, team: Team) -> bool {
        self.latest_touch.is_some_and(|touch| touch.team == team)
    }
}

#[derive(Default)]
pub struct WorldSnapshotBuilder {
    time: Option<f32>,
    me: Option<u32>,
    agents: Vec<Agent>,
    ball: Option<BallState>,
    prediction: Option<BallPrediction>,
    field: Option<Field>,
    score: Option<Score>,
    is_kickoff: bool,
    latest_touch: Option<Touch>,
}

impl WorldSnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(mut self, time: f32) -> Self {
        self.time = Some(time);
        self
    }

    pub fn me(mut self, id: u32) -> Self {
        self.me = Some(id);
        self
    }

    pub fn agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn agents(mut self, agents: Vec<Agent>) -> Self {
        self.agents.extend(agents);
        self
    }

    pub fn ball(mut self, ball: BallState) -> Self {
        self.ball = Some(ball);
        self
    }

    pub fn prediction(mut self, prediction: BallPrediction) -> Self {
        self.prediction = Some(prediction);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }

    pub fn score(mut self, score: Score) -> Self {
        self.score = Some(score);
        self
    }

    pub fn kickoff(mut self, is_kickoff: bool) -> Self {
        self.is_kickoff = is_kickoff;
        self
    }

    pub fn latest_touch(mut self, touch: Touch) -> Self {
        self.latest_touch = Some(touch);
        self
    }

    /// Without an explicit prediction the reference ballistic predictor fills it in.
    pub fn build(self) -> Result<WorldSnapshot, String> {
        let me = self.me.ok_or("me is required")?;
        let ball = self.ball.ok_or("ball is required")?;

        let me_index = self
            .agents
            .iter()
            .position(|agent| agent.id == me)
            .ok_or_else(|| format!("unknown controlled agent = {}", me))?;

        let prediction = self.prediction.unwrap_or_else(|| {
            BallPrediction::ballistic(&ball, DEFAULT_HORIZON, DEFAULT_SAMPLE_RATE)
        });

        Ok(WorldSnapshot {
            time: self.time.unwrap_or(ball.time),
            ball,
            prediction,
            field: self.field.unwrap_or_default(),
            score: self.score.unwrap_or_default(),
            is_kickoff: self.is_kickoff,
            latest_touch: self.latest_touch,
            agents: self.agents,
            me_index,
        })
    }
}

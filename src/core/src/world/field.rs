use crate::world::agent::Team;
use nalgebra::Vector3;

pub const ARENA_HALF_WIDTH: f32 = 4096.0;
pub const ARENA_HALF_LENGTH: f32 = 5120.0;
pub const ARENA_CEILING: f32 = 2044.0;
pub const FIELD_LENGTH: f32 = ARENA_HALF_LENGTH * 2.0;

pub const BALL_RADIUS: f32 = 92.75;

pub const GOAL_HALF_WIDTH: f32 = 893.0;
pub const GOAL_HEIGHT: f32 = 642.775;
pub const GOAL_DEPTH: f32 = 880.0;

const LARGE_PAD_HEIGHT: f32 = 73.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub team: Team,
    pub location: Vector3<f32>,
    pub half_width: f32,
    pub height: f32,
}

impl Goal {
    pub fn for_team(team: Team) -> Self {
        Goal {
            team,
            location: Vector3::new(0.0, ARENA_HALF_LENGTH * team.side(), GOAL_HEIGHT / 2.0),
            half_width: GOAL_HALF_WIDTH,
            height: GOAL_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostPad {
    pub index: usize,
    pub location: Vector3<f32>,
    pub is_large: bool,
    pub is_active: bool,
    pub time_until_active: f32,
}

impl BoostPad {
    pub fn large(index: usize, x: f32, y: f32) -> Self {
        BoostPad {
            index,
            location: Vector3::new(x, y, LARGE_PAD_HEIGHT),
            is_large: true,
            is_active: true,
            time_until_active: 0.0,
        }
    }

    /// Active now, or back before an agent arriving after `eta` seconds.
    #[inline]
    pub fn available_within(&self, eta: f32) -> bool {
        self.is_active || self.time_until_active < eta
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    pub blue_goal: Goal,
    pub orange_goal: Goal,
    pub boost_pads: Vec<BoostPad>,
}

impl Default for Field {
    fn default() -> Self {
        Self::standard()
    }
}

impl Field {
    /// Standard arena with its six large pads.
    pub fn standard() -> Self {
        let large_pads = [
            (-3072.0, -4096.0),
            (3072.0, -4096.0),
            (-3584.0, 0.0),
            (3584.0, 0.0),
            (-3072.0, 4096.0),
            (3072.0, 4096.0),
        ];

        Field::with_pads(
            large_pads
                .iter()
                .enumerate()
                .map(|(index, (x, y))| BoostPad::large(index, *x, *y))
                .collect(),
        )
    }

    pub fn with_pads(boost_pads: Vec<BoostPad>) -> Self {
        Field {
            blue_goal: Goal::for_team(Team::Blue),
            orange_goal: Goal::for_team(Team::Orange),
            boost_pads,
        }
    }

    #[inline]
    pub fn side(team: Team) -> f32 {
        team.side()
    }

    pub fn own_goal(&self, team: Team) -> &Goal {
        match team {
            Team::Blue => &self.blue_goal,
            Team::Orange => &self.orange_goal,
        }
    }

    pub fn opponent_goal(&self, team: Team) -> &Goal {
        self.own_goal(team.opponent())
    }

    pub fn large_pads(&self) -> impl Iterator<Item = &BoostPad> {
        self.boost_pads.iter().filter(|pad| pad.is_large)
    }

    /// Clamps into the arena box, then snaps onto the closest of floor, ceiling and walls.
    pub fn limit_to_nearest_surface(point: Vector3<f32>) -> Vector3<f32> {
        let mut limited = Vector3::new(
            point.x.clamp(-ARENA_HALF_WIDTH, ARENA_HALF_WIDTH),
            point.y.clamp(-ARENA_HALF_LENGTH, ARENA_HALF_LENGTH),
            point.z.clamp(0.0, ARENA_CEILING),
        );

        let to_floor = limited.z;
        let to_ceiling = ARENA_CEILING - limited.z;
        let to_side_wall = ARENA_HALF_WIDTH - limited.x.abs();
        let to_back_wall = ARENA_HALF_LENGTH - limited.y.abs();

        let nearest = to_floor.min(to_ceiling).min(to_side_wall).min(to_back_wall);

        if nearest == to_floor {
            limited.z = 0.0;
        } else if nearest == to_ceiling {
            limited.z = ARENA_CEILING;
        } else if nearest == to_side_wall {
            limited.x = ARENA_HALF_WIDTH * limited.x.signum();
        } else {
            limited.y = ARENA_HALF_LENGTH * limited.y.signum();
        }

        limited
    }
}

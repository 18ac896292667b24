use crate::world::field::{ARENA_CEILING, ARENA_HALF_LENGTH, ARENA_HALF_WIDTH, BALL_RADIUS, GOAL_DEPTH, GOAL_HALF_WIDTH, GOAL_HEIGHT};
use nalgebra::Vector3;

pub const GRAVITY: f32 = -650.0;
pub const BOUNCE_RESTITUTION: f32 = 0.6;
pub const ROLLING_FRICTION: f32 = 0.98;

/// Samples per second of the reference predictor, one slice per physics frame pair.
pub const DEFAULT_SAMPLE_RATE: f32 = 60.0;
pub const DEFAULT_HORIZON: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallState {
    pub position: Vector3<f32>,
    pub velocity: Vector3<f32>,
    pub time: f32,
}

impl BallState {
    pub fn new(position: Vector3<f32>, velocity: Vector3<f32>, time: f32) -> Self {
        BallState {
            position,
            velocity,
            time,
        }
    }
}

/// A predicted future state of the ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSlice {
    pub position: Vector3<f32>,
    pub velocity: Vector3<f32>,
    pub time: f32,
}

impl BallSlice {
    pub fn new(position: Vector3<f32>, velocity: Vector3<f32>, time: f32) -> Self {
        BallSlice {
            position,
            velocity,
            time,
        }
    }

    #[inline]
    pub fn time_remaining(&self, now: f32) -> f32 {
        self.time - now
    }

    pub fn to_ball(&self) -> BallState {
        BallState::new(self.position, self.velocity, self.time)
    }
}

/// Ordered, finite sequence of predicted slices produced once per tick.
#[derive(Debug, Clone, Default)]
pub struct BallPrediction {
    slices: Vec<BallSlice>,
    sample_rate: f32,
}

impl BallPrediction {
    pub fn new(slices: Vec<BallSlice>, sample_rate: f32) -> Self {
        BallPrediction {
            slices,
            sample_rate,
        }
    }

    pub fn empty() -> Self {
        BallPrediction::new(Vec::new(), DEFAULT_SAMPLE_RATE)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    #[inline]
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&BallSlice> {
        self.slices.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&BallSlice> {
        self.slices.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BallSlice> {
        self.slices.iter()
    }

    /// First slice matching the predicate.
    pub fn find<P>(&self, mut predicate: P) -> Option<&BallSlice>
    where
        P: FnMut(&BallSlice) -> bool,
    {
        self.slices.iter().find(|slice| predicate(slice))
    }

    /// Reference predictor: gravity, arena bounces and open goal mouths, nothing else.
    pub fn ballistic(ball: &BallState, horizon: f32, sample_rate: f32) -> Self {
        let dt = 1.0 / sample_rate;
        let steps = (horizon * sample_rate).max(0.0) as usize;

        let mut position = ball.position;
        let mut velocity = ball.velocity;
        let mut slices = Vec::with_capacity(steps);

        for step in 1..=steps {
            velocity.z += GRAVITY * dt;
            position += velocity * dt;

            Self::bounce(&mut position, &mut velocity);

            slices.push(BallSlice::new(
                position,
                velocity,
                ball.time + step as f32 * dt,
            ));
        }

        BallPrediction::new(slices, sample_rate)
    }

    fn bounce(position: &mut Vector3<f32>, velocity: &mut Vector3<f32>) {
        if position.z < BALL_RADIUS {
            position.z = BALL_RADIUS;
            if velocity.z < 0.0 {
                velocity.z = -velocity.z * BOUNCE_RESTITUTION;
                velocity.x *= ROLLING_FRICTION;
                velocity.y *= ROLLING_FRICTION;
            }
        }

        if position.z > ARENA_CEILING - BALL_RADIUS {
            position.z = ARENA_CEILING - BALL_RADIUS;
            if velocity.z > 0.0 {
                velocity.z = -velocity.z * BOUNCE_RESTITUTION;
            }
        }

        let wall_x = ARENA_HALF_WIDTH - BALL_RADIUS;
        if position.x.abs() > wall_x {
            position.x = wall_x * position.x.signum();
            velocity.x = -velocity.x * BOUNCE_RESTITUTION;
        }

        let in_goal_mouth = position.x.abs() < GOAL_HALF_WIDTH - BALL_RADIUS
            && position.z < GOAL_HEIGHT - BALL_RADIUS;

        let wall_y = if in_goal_mouth {
            ARENA_HALF_LENGTH + GOAL_DEPTH - BALL_RADIUS
        } else {
            ARENA_HALF_LENGTH - BALL_RADIUS
        };

        if position.y.abs() > wall_y {
            position.y = wall_y * position.y.signum();
            velocity.y = -velocity.y * BOUNCE_RESTITUTION;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ballistic_prediction_is_ordered() {
        let ball = BallState::new(
            Vector3::new(0.0, 0.0, 500.0),
            Vector3::new(0.0, 1000.0, 0.0),
            10.0,
        );

        let prediction = BallPrediction::ballistic(&ball, DEFAULT_HORIZON, DEFAULT_SAMPLE_RATE);

        assert_eq!(prediction.len(), 360);
        assert!(prediction.iter().zip(prediction.iter().skip(1)).all(|(a, b)| a.time < b.time));
        assert!((prediction.get(0).map(|s| s.time).unwrap_or_default() - (10.0 + 1.0 / 60.0)).abs() < 1e-4);
    }

    #[test]
    fn test_ballistic_ball_never_sinks_below_floor() {
        let ball = BallState::new(
            Vector3::new(1000.0, -2000.0, 800.0),
            Vector3::new(-400.0, 300.0, -900.0),
            0.0,
        );

        let prediction = BallPrediction::ballistic(&ball, 4.0, DEFAULT_SAMPLE_RATE);

        assert!(prediction.iter().all(|slice| slice.position.z >= BALL_RADIUS - 1e-3));
        assert!(prediction.iter().all(|slice| slice.position.x.abs() <= ARENA_HALF_WIDTH));
    }

    #[test]
    fn test_find_returns_first_match() {
        let slices = (1..=5)
            .map(|i| BallSlice::new(Vector3::new(0.0, i as f32 * 100.0, 93.0), Vector3::zeros(), i as f32))
            .collect();
        let prediction = BallPrediction::new(slices, 1.0);

        let found = prediction.find(|slice| slice.position.y > 250.0);
        assert_eq!(found.map(|s| s.time), Some(3.0));
        assert!(prediction.find(|slice| slice.position.y > 1000.0).is_none());
    }
}

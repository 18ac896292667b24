use crate::utils::VectorExtensions;
use crate::world::ball::BallState;
use crate::world::field::{ARENA_CEILING, ARENA_HALF_WIDTH, BALL_RADIUS, Goal};
use nalgebra::Vector3;

/// Smallest horizontal opening (radians) from which a target still counts as shootable.
pub const MIN_TARGET_ANGLE: f32 = 0.05;

/// Rectangular region on a goal line the ball should end up in after a strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
    /// Sign of the direction from the field toward the target plane.
    pub normal_sign: f32,
}

impl Target {
    /// The goal mouth, shrunk by a ball radius on every edge.
    pub fn goal(goal: &Goal) -> Self {
        Target::on_goal_line(goal, goal.half_width - BALL_RADIUS, goal.height - BALL_RADIUS)
    }

    /// Anywhere on the back wall behind `goal`; used to clear the ball up-field.
    pub fn clear(goal: &Goal) -> Self {
        Target::on_goal_line(goal, ARENA_HALF_WIDTH - BALL_RADIUS, ARENA_CEILING - BALL_RADIUS)
    }

    fn on_goal_line(goal: &Goal, half_width: f32, top: f32) -> Self {
        let y = goal.location.y;

        Target {
            min: Vector3::new(-half_width, y, BALL_RADIUS),
            max: Vector3::new(half_width, y, top),
            normal_sign: y.signum(),
        }
    }

    #[inline]
    pub fn plane_y(&self) -> f32 {
        self.min.y
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) / 2.0
    }

    /// Whether a ball at `point` can still be put into the target.
    pub fn fits(&self, point: &Vector3<f32>) -> bool {
        let depth = (self.plane_y() - point.y) * self.normal_sign;
        if depth < BALL_RADIUS {
            return false;
        }

        let left_post = Vector3::new(self.min.x, self.plane_y(), 0.0);
        let right_post = Vector3::new(self.max.x, self.plane_y(), 0.0);

        let ground = point.flatten();
        let to_left = ground.direction_to(&left_post);
        let to_right = ground.direction_to(&right_post);

        to_left.angle_to(&to_right) >= MIN_TARGET_ANGLE
    }

    /// Snaps the place the hit ball is heading to onto the nearest point inside the target.
    pub fn clamp(&self, ball: &BallState) -> Vector3<f32> {
        let towards_plane = ball.velocity.y * self.normal_sign > f32::EPSILON;

        let crossing = if towards_plane {
            let time = (self.plane_y() - ball.position.y) / ball.velocity.y;
            ball.position + ball.velocity * time.max(0.0)
        } else {
            ball.position
        };

        Vector3::new(
            crossing.x.clamp(self.min.x, self.max.x),
            self.plane_y(),
            crossing.z.clamp(self.min.z, self.max.z),
        )
    }
}

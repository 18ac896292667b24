use crate::maneuver::{ManeuverRequest, Strike, StrikeKind};
use crate::tactics::TacticalContext;
use crate::utils::VectorExtensions;
use crate::world::{BallSlice, BallState, FIELD_LENGTH, Target};
use log::trace;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Hardest the ball travels in play, used to normalise shot power.
pub const MAX_BALL_SPEED: f32 = 6000.0;

/// How a candidate slice is judged before strike variants are tried.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum ShotCheck {
    /// Anything geometrically on target.
    #[default]
    Default,
    /// On target and scoring above the quality threshold.
    Improved,
}

pub struct ShotOperationsImpl<'p> {
    ctx: &'p TacticalContext<'p>,
}

impl<'p> ShotOperationsImpl<'p> {
    pub fn new(ctx: &'p TacticalContext<'p>) -> Self {
        ShotOperationsImpl { ctx }
    }

    /// First slice of the prediction that yields a feasible strike.
    pub fn find_shot(&self, check: ShotCheck, target: &Target) -> Option<ManeuverRequest> {
        self.ctx
            .world
            .prediction
            .iter()
            .find_map(|slice| self.check_slice(check, slice, target))
    }

    pub fn check_slice(
        &self,
        check: ShotCheck,
        slice: &BallSlice,
        target: &Target,
    ) -> Option<ManeuverRequest> {
        let ctx = self.ctx;
        let me = ctx.me();

        if slice.time_remaining(ctx.now()) <= 0.0 || !target.fits(&slice.position) {
            return None;
        }

        let ball_after_hit = self.ball_after_hit(slice);
        let shot_target = target.clamp(&ball_after_hit);

        if check == ShotCheck::Improved {
            let quality = self.shot_quality(slice, &ball_after_hit, &shot_target);

            if quality <= ctx.config.shots.quality.threshold {
                trace!("slice t={:.2} rejected, quality {:.2}", slice.time, quality);
                return None;
            }
        }

        StrikeKind::PRIORITY.iter().find_map(|kind| {
            let strike = Strike::new(*kind, *slice, shot_target);

            if ctx.strike_oracle.is_valid(&strike, me, ctx.world) {
                trace!("found {}", strike);
                Some(ManeuverRequest::strike(strike))
            } else {
                None
            }
        })
    }

    /// Estimated ball state right after the controlled agent meets `slice`:
    /// the closing velocity plus what survives of the ball's tangential motion.
    pub fn ball_after_hit(&self, slice: &BallSlice) -> BallState {
        let shots = &self.ctx.config.shots;
        let me = self.ctx.me();
        let time_remaining = slice.time_remaining(self.ctx.now());

        let closing = ((slice.position - me.position) / time_remaining)
            .cap_length(0.0, shots.max_closing_speed);

        let tangential = slice.velocity.flatten_along(&closing) * shots.tangential_damping;

        BallState::new(slice.position, closing + tangential, slice.time)
    }

    pub fn shot_quality(
        &self,
        slice: &BallSlice,
        ball_after_hit: &BallState,
        shot_target: &Vector3<f32>,
    ) -> f32 {
        let quality = &self.ctx.config.shots.quality;
        let me = self.ctx.me();

        let distance = slice.position.distance_to(shot_target) / FIELD_LENGTH;

        let approach = slice.position - me.position;
        let aim = shot_target - slice.position;
        let angle = approach.flatten().angle_to(&aim.flatten()) / PI;

        let power = ball_after_hit.velocity.length() / MAX_BALL_SPEED;
        let support = self.teammate_support(&slice.position);

        quality.bias - quality.distance_weight * distance - quality.angle_weight * angle
            + quality.power_weight * power
            + quality.support_weight * support
    }

    /// Mean over teammates of `1 - d / radius` for those within the support radius.
    pub fn teammate_support(&self, point: &Vector3<f32>) -> f32 {
        let radius = self.ctx.config.shots.quality.support_radius;
        let me = self.ctx.me();

        let (count, total) = self
            .ctx
            .world
            .teammates_of(me)
            .fold((0usize, 0.0f32), |(count, total), teammate| {
                let distance = teammate.position.distance_to(point);

                if distance < radius {
                    (count + 1, total + (1.0 - distance / radius))
                } else {
                    (count + 1, total)
                }
            });

        if count == 0 { 0.0 } else { total / count as f32 }
    }
}

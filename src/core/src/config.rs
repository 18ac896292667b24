//! Tunable constants of the tactical heuristics.
//!
//! Every default reproduces the hand-tuned value the heuristics were developed
//! with. All groups deserialize with `#[serde(default)]`, so a config file only
//! needs the values it overrides.

use crate::tactics::ops::ShotCheck;
use crate::tactics::playstyle::PlaystylePolarity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticalConfig {
    pub roles: RoleConfig,
    pub possession: PossessionConfig,
    pub threat: ThreatConfig,
    pub shots: ShotConfig,
    pub positioning: PositioningConfig,
    pub playstyle: PlaystyleConfig,
    pub boost: BoostConfig,
    pub rotation: RotationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleConfig {
    /// Weight of the sideways offset in the team-relative metric.
    pub lateral_weight: f32,
    /// Factor applied when an agent is up-field of the ball.
    pub upfield_penalty: f32,
    pub boost_subsidy: f32,
    /// Distance past the ball after which an agent counts as ahead of it.
    pub ahead_margin: f32,
}

impl Default for RoleConfig {
    fn default() -> Self {
        RoleConfig {
            lateral_weight: 2.0,
            upfield_penalty: 5.0,
            boost_subsidy: 10.0,
            ahead_margin: 500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PossessionConfig {
    pub margin: f32,
    pub no_intercept_eta: f32,
    pub close_range: f32,
}

impl Default for PossessionConfig {
    fn default() -> Self {
        PossessionConfig {
            margin: 0.2,
            no_intercept_eta: 6.0,
            close_range: 500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreatConfig {
    pub block_alignment: f32,
    pub min_ball_approach_speed: f32,
}

impl Default for ThreatConfig {
    fn default() -> Self {
        ThreatConfig {
            block_alignment: 0.7,
            min_ball_approach_speed: 1500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotConfig {
    /// Slice check used by every shot search of the engine.
    pub check: ShotCheck,
    /// Share of the ball's tangential velocity kept through an off-axis hit.
    pub tangential_damping: f32,
    pub max_closing_speed: f32,
    pub quality: ShotQualityConfig,
}

impl Default for ShotConfig {
    fn default() -> Self {
        ShotConfig {
            check: ShotCheck::Default,
            tangential_damping: 0.77,
            max_closing_speed: 2300.0,
            quality: ShotQualityConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotQualityConfig {
    pub bias: f32,
    pub distance_weight: f32,
    pub angle_weight: f32,
    pub power_weight: f32,
    pub support_weight: f32,
    pub threshold: f32,
    pub support_radius: f32,
}

impl Default for ShotQualityConfig {
    fn default() -> Self {
        ShotQualityConfig {
            bias: 1.0,
            distance_weight: 1.0,
            angle_weight: 1.0,
            power_weight: 1.0,
            support_weight: 1.0,
            threshold: 0.5,
            support_radius: 2000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositioningConfig {
    pub zone5_standoff: f32,
    pub zone5_compression: f32,
    /// Speed used to turn distance-to-ball into a trajectory index.
    pub shadow_speed: f32,
    pub shadow_offset: f32,
    pub support_depth: f32,
    pub support_mirror: f32,
    pub far_post_x: f32,
    pub far_post_depth: f32,
    pub boost_angle_weight: f32,
}

impl Default for PositioningConfig {
    fn default() -> Self {
        PositioningConfig {
            zone5_standoff: 1707.0,
            zone5_compression: 2.0 / 3.0,
            shadow_speed: 1410.0,
            shadow_offset: 0.8,
            support_depth: 2500.0,
            support_mirror: 0.5,
            far_post_x: 800.0,
            far_post_depth: 4900.0,
            boost_angle_weight: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaystyleConfig {
    /// Goal difference at which the playstyle leaves Control.
    pub swing: i32,
    pub polarity: PlaystylePolarity,
}

impl Default for PlaystyleConfig {
    fn default() -> Self {
        PlaystyleConfig {
            swing: 2,
            polarity: PlaystylePolarity::TUNED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostConfig {
    pub low_boost: f32,
    pub safe_opponent_distance: f32,
}

impl Default for BoostConfig {
    fn default() -> Self {
        BoostConfig {
            low_boost: 30.0,
            safe_opponent_distance: 700.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub goal_area_depth: f32,
    pub goal_area_half_width: f32,
    pub friends_ahead_margin: f32,
    pub demo_depth: f32,
    pub supersonic_speed: f32,
    pub boost_acceleration: f32,
    pub boost_per_second: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        RotationConfig {
            goal_area_depth: 5050.0,
            goal_area_half_width: 880.0,
            friends_ahead_margin: 1500.0,
            demo_depth: 4000.0,
            supersonic_speed: 2200.0,
            boost_acceleration: 991.666,
            boost_per_second: 33.3,
        }
    }
}

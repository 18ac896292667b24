use crate::collaborators::{DriveEta, ManeuverLayer, StrikeOracle};
use crate::config::TacticalConfig;
use crate::maneuver::{Maneuver, ManeuverRequest};
use crate::tactics::playstyle::{Playstyle, PlaystyleSelector};
use crate::tactics::TacticalContext;
use crate::utils::VectorExtensions;
use crate::world::{BoostPad, Target, WorldSnapshot};
use log::{debug, info};
use std::fmt;

/// Which branch of the decision cascade committed a maneuver.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DecisionReason {
    Kickoff,
    Rotate,
    NoBotsBack,
    LowBoost,
    Attack,
    ChaseBoost,
    Clear,
    Park,
    Shot,
    Fallback(Playstyle),
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionReason::Kickoff => write!(f, "kickoff"),
            DecisionReason::Rotate => write!(f, "rotate"),
            DecisionReason::NoBotsBack => write!(f, "no bots back"),
            DecisionReason::LowBoost => write!(f, "low boost"),
            DecisionReason::Attack => write!(f, "attack"),
            DecisionReason::ChaseBoost => write!(f, "chase boost"),
            DecisionReason::Clear => write!(f, "clear"),
            DecisionReason::Park => write!(f, "park"),
            DecisionReason::Shot => write!(f, "shot"),
            DecisionReason::Fallback(playstyle) => write!(f, "{} fallback", playstyle),
        }
    }
}

/// Outcome of one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Decision {
    /// The current maneuver keeps running.
    Hold,
    /// A new maneuver replaced the current one (or filled the empty slot).
    Commit(DecisionReason),
    /// Kickoff support: stay put and let the taker go.
    Wait,
    /// The agent is demolished and waits to respawn.
    Idle,
}

enum Outcome {
    Hold,
    Replace(ManeuverRequest, DecisionReason),
    Wait,
}

/// Per-agent orchestrator. Owns the playstyle and the single current maneuver.
pub struct TacticalEngine<E: DriveEta, O: StrikeOracle> {
    config: TacticalConfig,
    playstyle: PlaystyleSelector,
    drive_eta: E,
    strike_oracle: O,
    current: Option<ManeuverRequest>,
}

impl<E: DriveEta, O: StrikeOracle> TacticalEngine<E, O> {
    pub fn new(config: TacticalConfig, drive_eta: E, strike_oracle: O) -> Self {
        TacticalEngine {
            playstyle: PlaystyleSelector::new(config.playstyle.clone()),
            config,
            drive_eta,
            strike_oracle,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&ManeuverRequest> {
        self.current.as_ref()
    }

    pub fn playstyle(&self) -> Playstyle {
        self.playstyle.current()
    }

    pub fn config(&self) -> &TacticalConfig {
        &self.config
    }

    pub fn tick(&mut self, world: &WorldSnapshot) -> Decision {
        let me = world.me();
        let (ours, theirs) = world.score.for_team(me.team);
        let playstyle = self.playstyle.update(ours, theirs);

        if me.demolished {
            if let Some(current) = self.current.take() {
                debug!("agent {}: demolished, dropping {}", me.id, current);
            }
            return Decision::Idle;
        }

        if let Some(current) = self.current.take_if(|current| current.finished()) {
            debug!("agent {}: {} finished", me.id, current);
        }

        let ctx = TacticalContext::new(
            world,
            &self.config,
            playstyle,
            &self.drive_eta,
            &self.strike_oracle,
        );

        match Self::evaluate(&ctx, self.current.as_ref()) {
            Outcome::Hold => {
                if let Some(current) = self.current.as_mut() {
                    if matches!(current.maneuver(), Maneuver::Shadow { .. }) {
                        current.retarget_shadow(ctx.positioning().shadow_point(me));
                    }
                }

                Decision::Hold
            }
            Outcome::Replace(request, reason) => {
                info!("agent {}: {} ({})", me.id, request, reason);
                self.current = Some(request);

                Decision::Commit(reason)
            }
            Outcome::Wait => {
                debug!("agent {}: waiting on kickoff", me.id);
                Decision::Wait
            }
        }
    }

    /// Runs the current maneuver for one tick.
    pub fn step<L: ManeuverLayer + ?Sized>(&mut self, world: &WorldSnapshot, layer: &mut L) {
        if let Some(current) = self.current.as_mut() {
            current.step(world, layer);
        }
    }

    fn evaluate(ctx: &TacticalContext<'_>, current: Option<&ManeuverRequest>) -> Outcome {
        match current {
            Some(current) if !current.interruptible() => Outcome::Hold,
            Some(current) => Self::preempt(ctx, current),
            None => Self::choose(ctx),
        }
    }

    /// Only a shot may cut into a running maneuver, and only while repositioning to attack.
    fn preempt(ctx: &TacticalContext<'_>, current: &ManeuverRequest) -> Outcome {
        let me = ctx.me();

        if current.is_repositioning()
            && ctx.rotation().should_attack()
            && ctx.roles().is_closest(me, true)
        {
            let target = Target::goal(ctx.opponent_goal(me));

            if let Some(shot) = ctx.shots().find_shot(ctx.config.shots.check, &target) {
                return Outcome::Replace(shot, DecisionReason::Attack);
            }
        }

        Outcome::Hold
    }

    fn choose(ctx: &TacticalContext<'_>) -> Outcome {
        let me = ctx.me();
        let world = ctx.world;
        let roles = ctx.roles();
        let rotation = ctx.rotation();
        let positioning = ctx.positioning();
        let shots = ctx.shots();
        let check = ctx.config.shots.check;

        if world.is_kickoff {
            if roles.is_closest_kickoff(me) {
                return Outcome::Replace(ManeuverRequest::kickoff(), DecisionReason::Kickoff);
            }

            if roles.is_second_closest_kickoff() {
                return Outcome::Wait;
            }
        }

        if rotation.should_rotate() {
            let request = ManeuverRequest::drive_to(positioning.zone5_point(), false, true);
            return Outcome::Replace(request, DecisionReason::Rotate);
        }

        let second_closest = roles.is_second_closest(me);

        if second_closest && roles.are_no_bots_back(me) {
            let request = ManeuverRequest::drive_to(ctx.own_goal(me).location, true, true);
            return Outcome::Replace(request, DecisionReason::NoBotsBack);
        }

        let boost = &ctx.config.boost;
        let safe_to_leave = rotation
            .closest_opponent()
            .is_none_or(|opponent| {
                opponent.position.distance_to(&ctx.ball_position()) >= boost.safe_opponent_distance
            });

        if me.boost < boost.low_boost && second_closest && !rotation.should_defend() && safe_to_leave {
            if let Some(pad) = Self::boost_pad(ctx) {
                return Outcome::Replace(ManeuverRequest::get_boost(pad), DecisionReason::LowBoost);
            }
        }

        let attacking = rotation.should_attack();
        let their_goal = Target::goal(ctx.opponent_goal(me));

        if attacking && roles.is_closest(me, true) {
            if let Some(shot) = shots.find_shot(check, &their_goal) {
                return Outcome::Replace(shot, DecisionReason::Attack);
            }
        } else if attacking && second_closest && !world.touched_last_by(me.team) {
            if let Some(pad) = Self::boost_pad(ctx) {
                return Outcome::Replace(ManeuverRequest::get_boost(pad), DecisionReason::ChaseBoost);
            }
        }

        if rotation.should_defend()
            && roles.is_closest(me, true)
            && ctx.possession().is_back()
        {
            let clear = Target::clear(ctx.opponent_goal(me));

            if let Some(shot) = shots.find_shot(check, &clear) {
                return Outcome::Replace(shot, DecisionReason::Clear);
            }
        } else if second_closest && world.touched_last_by(me.team) {
            let request = ManeuverRequest::park_at(ctx.own_goal(me).location);
            return Outcome::Replace(request, DecisionReason::Park);
        } else if let Some(shot) = shots.find_shot(check, &their_goal) {
            return Outcome::Replace(shot, DecisionReason::Shot);
        }

        Self::fallback(ctx)
    }

    fn fallback(ctx: &TacticalContext<'_>) -> Outcome {
        let me = ctx.me();
        let positioning = ctx.positioning();

        let request = match ctx.playstyle {
            Playstyle::Defensive => ManeuverRequest::shadow(positioning.shadow_point(me)),
            Playstyle::Offensive => {
                ManeuverRequest::drive_to(positioning.offensive_support_point(), true, false)
            }
            Playstyle::Control if ctx.possession().is_back() => {
                ManeuverRequest::shadow(positioning.shadow_point(me))
            }
            Playstyle::Control => {
                ManeuverRequest::drive_to(positioning.defensive_support_point(), true, false)
            }
        };

        Outcome::Replace(request, DecisionReason::Fallback(ctx.playstyle))
    }

    fn boost_pad(ctx: &TacticalContext<'_>) -> Option<BoostPad> {
        let positioning = ctx.positioning();

        positioning
            .best_boost_pad()
            .or_else(|| positioning.nearest_boost_pad())
    }
}

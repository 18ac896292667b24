use crate::config::PlaystyleConfig;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Playstyle {
    Offensive,
    Defensive,
    Control,
}

impl fmt::Display for Playstyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Playstyle::Offensive => "offensive",
            Playstyle::Defensive => "defensive",
            Playstyle::Control => "control",
        };
        write!(f, "{}", name)
    }
}

/// Which playstyle to adopt when trailing or leading by the configured swing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlaystylePolarity {
    pub trailing: Playstyle,
    pub leading: Playstyle,
}

impl PlaystylePolarity {
    /// Defend when behind, attack when ahead. Unconfirmed, see `CHASE_THE_GAME`.
    pub const TUNED: PlaystylePolarity = PlaystylePolarity {
        trailing: Playstyle::Defensive,
        leading: Playstyle::Offensive,
    };

    pub const CHASE_THE_GAME: PlaystylePolarity = PlaystylePolarity {
        trailing: Playstyle::Offensive,
        leading: Playstyle::Defensive,
    };
}

impl Default for PlaystylePolarity {
    fn default() -> Self {
        PlaystylePolarity::TUNED
    }
}

/// Holds the only cross-tick tactical state. Nothing else writes it.
#[derive(Debug, Clone)]
pub struct PlaystyleSelector {
    current: Playstyle,
    config: PlaystyleConfig,
}

impl Default for PlaystyleSelector {
    fn default() -> Self {
        Self::new(PlaystyleConfig::default())
    }
}

impl PlaystyleSelector {
    pub fn new(config: PlaystyleConfig) -> Self {
        PlaystyleSelector {
            current: Playstyle::Control,
            config,
        }
    }

    #[inline]
    pub fn current(&self) -> Playstyle {
        self.current
    }

    /// Pure rule: the playstyle for a score, with no memory of earlier ticks.
    pub fn select(&self, team_score: u32, opponent_score: u32) -> Playstyle {
        let difference = opponent_score as i64 - team_score as i64;
        let swing = self.config.swing as i64;

        if difference >= swing {
            self.config.polarity.trailing
        } else if difference <= -swing {
            self.config.polarity.leading
        } else {
            Playstyle::Control
        }
    }

    pub fn update(&mut self, team_score: u32, opponent_score: u32) -> Playstyle {
        let next = self.select(team_score, opponent_score);

        if next != self.current {
            info!(
                "playstyle: {} -> {} (score {}-{})",
                self.current, next, team_score, opponent_score
            );
            self.current = next;
        }

        self.current
    }
}

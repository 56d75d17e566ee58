/* Copyright 2026 gear_heart contributors
 *
 * This file is part of gear_heart.
 * You can redistribute it and/or modify it under the terms of the
 * GNU General Public License as published by the Free Software Foundation,
 * either version 3 of the License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

//! Tunables for a session, defaulting to the classic constants.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::agent::SPRITE_SIZE;

pub const ARENA: [f32;2] = [1400.0, 550.0];
pub const MONSTER_COUNT: usize = 100;
pub const MONSTER_SPEED: f32 = 1.5;
pub const MOVEMENT_SPEED: f32 = 5.0;
pub const PLAYER_SCALE: f32 = 1.0;
pub const MONSTER_SCALE: f32 = 2.0;
/// A pursuer re-aims with a chance of one in this many frames.
pub const REAIM_CHANCE: u32 = 100;
pub const PLAYER_START: [f32;2] = [50.0, 50.0];
pub const SPAWN_CLEARANCE: f32 = 100.0;
pub const STARTING_HEALTH: i64 = 20;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("arena must be at least 1x1 units, got {width}x{height}")]
    ArenaTooSmall { width: f32, height: f32 },
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("a player of scale {scale} doesn't fit in the arena")]
    PlayerTooBig { scale: f32 },
    #[error("re-aim chance must be at least one in one frame")]
    ZeroReaimChance,
    #[error("unknown {what} {value:?}, expected one of {expected}")]
    UnknownVariant { what: &'static str, value: String, expected: &'static str },
}

/// How the player is moved.
#[derive(Debug, Clone,Copy, PartialEq,Eq, Default)]
pub enum Control {
    #[default]
    Keyboard,
    /// The player sits under the mouse cursor.
    Pointer,
}

impl FromStr for Control {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_ascii_lowercase().as_str() {
            "keyboard" | "keys" => Ok(Control::Keyboard),
            "pointer" | "mouse" => Ok(Control::Pointer),
            _ => Err(ConfigError::UnknownVariant {
                what: "control",
                value: s.to_owned(),
                expected: "keyboard, pointer",
            }),
        }
    }
}

/// What the session counter means. Either way a catch costs one point.
#[derive(Debug, Clone,Copy, PartialEq,Eq, Default)]
pub enum CounterKind {
    #[default]
    Score,
    Health,
}

impl CounterKind {
    pub fn label(self) -> &'static str {
        match self {
            CounterKind::Score => "Score",
            CounterKind::Health => "Health",
        }
    }
}

impl fmt::Display for CounterKind {
    fn fmt(&self,  f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CounterKind {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_ascii_lowercase().as_str() {
            "score" => Ok(CounterKind::Score),
            "health" => Ok(CounterKind::Health),
            _ => Err(ConfigError::UnknownVariant {
                what: "counter",
                value: s.to_owned(),
                expected: "score, health",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Width and height in game units, which are pixels in a window of the same size.
    pub arena: [f32; 2],
    pub monster_count: usize,
    pub monster_speed: f32,
    pub movement_speed: f32,
    pub player_scale: f32,
    pub monster_scale: f32,
    pub reaim_chance: u32,
    pub player_start: [f32; 2],
    /// Minimum distance between a new pursuer and the player.
    pub spawn_clearance: f32,
    pub starting_health: i64,
    pub control: Control,
    pub counter: CounterKind,
    /// Random when not set.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {Config {
        arena: ARENA,
        monster_count: MONSTER_COUNT,
        monster_speed: MONSTER_SPEED,
        movement_speed: MOVEMENT_SPEED,
        player_scale: PLAYER_SCALE,
        monster_scale: MONSTER_SCALE,
        reaim_chance: REAIM_CHANCE,
        player_start: PLAYER_START,
        spawn_clearance: SPAWN_CLEARANCE,
        starting_health: STARTING_HEALTH,
        control: Control::default(),
        counter: CounterKind::default(),
        seed: None,
    } }
}

impl Config {
    pub fn validate(self) -> Result<Self, ConfigError> {
        let [width, height] = self.arena;
        // negated to also catch NaN
        if !(width >= 1.0 && height >= 1.0) || !width.is_finite() || !height.is_finite() {
            return Err(ConfigError::ArenaTooSmall { width, height });
        }
        let positive = [
            ("monster speed", self.monster_speed),
            ("movement speed", self.movement_speed),
            ("player scale", self.player_scale),
            ("monster scale", self.monster_scale),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        let player = [SPRITE_SIZE[0]*self.player_scale, SPRITE_SIZE[1]*self.player_scale];
        if player[0] > width-1.0 || player[1] > height-1.0 {
            return Err(ConfigError::PlayerTooBig { scale: self.player_scale });
        }
        if self.reaim_chance == 0 {
            return Err(ConfigError::ZeroReaimChance);
        }
        Ok(self)
    }

    /// The value the session counter starts at.
    pub fn initial_counter(&self) -> i64 {
        match self.counter {
            CounterKind::Score => 0,
            CounterKind::Health => self.starting_health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Config::default().validate(), Ok(Config::default()));
    }

    #[test]
    fn rejects_degenerate_arena() {
        let config = Config { arena: [0.5, 100.0], ..Config::default() };
        assert!(matches!(config.validate(), Err(ConfigError::ArenaTooSmall { .. })));
        let config = Config { arena: [f32::NAN, 100.0], ..Config::default() };
        assert!(matches!(config.validate(), Err(ConfigError::ArenaTooSmall { .. })));
    }

    #[test]
    fn rejects_non_positive_speed() {
        let config = Config { monster_speed: 0.0, ..Config::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive { name: "monster speed", value: 0.0 })
        );
    }

    #[test]
    fn rejects_player_wider_than_arena() {
        // the right edge may be at most width-1
        let config = Config { arena: [32.0, 550.0], ..Config::default() };
        assert_eq!(config.validate(), Err(ConfigError::PlayerTooBig { scale: 1.0 }));
        let config = Config { arena: [33.0, 550.0], ..Config::default() };
        assert_eq!(config.clone().validate(), Ok(config));
        let config = Config { arena: [1400.0, 32.0], ..Config::default() };
        assert_eq!(config.validate(), Err(ConfigError::PlayerTooBig { scale: 1.0 }));
    }

    #[test]
    fn rejects_zero_reaim_chance() {
        let config = Config { reaim_chance: 0, ..Config::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroReaimChance));
    }

    #[test]
    fn parses_variants() {
        assert_eq!("Pointer".parse(), Ok(Control::Pointer));
        assert_eq!("keyboard".parse(), Ok(Control::Keyboard));
        assert_eq!("health".parse(), Ok(CounterKind::Health));
        assert!("joystick".parse::<Control>().is_err());
    }

    #[test]
    fn health_starts_at_configured_value() {
        let config = Config { counter: CounterKind::Health, starting_health: 7, ..Config::default() };
        assert_eq!(config.initial_counter(), 7);
        assert_eq!(Config::default().initial_counter(), 0);
    }
}

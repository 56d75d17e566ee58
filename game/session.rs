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

//! Per-frame game logic, independent of time and input devices.

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand::rngs::SmallRng;

use crate::agent::{Player, Pursuer};
use crate::config::{Config, ConfigError, CounterKind};
use crate::spawn::spawn_pursuers;

/// The score or health shown on screen.
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub struct Counter {
    pub kind: CounterKind,
    pub value: i64,
}

/// What happened during one frame.
#[derive(Debug, Clone,Copy, Default, PartialEq,Eq)]
pub struct Frame {
    pub reaimed: usize,
    pub caught: usize,
}

/// Everything that moves, plus the counter.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub arena: [f32; 2],
    pub player: Player,
    pursuers: Vec<Pursuer>,
    counter: Counter,
}

impl World {
    pub fn new(arena: [f32; 2],  player: Player,  pursuers: Vec<Pursuer>,  counter: Counter) -> Self {
        World { arena, player, pursuers, counter }
    }

    pub fn pursuers(&self) -> &[Pursuer] {
        &self.pursuers
    }
    pub fn counter(&self) -> Counter {
        self.counter
    }

    /// Indices of the pursuers currently touching the player.
    pub fn colliding(&self) -> Vec<usize> {
        let player = self.player.agent.bounds();
        self.pursuers.iter()
            .enumerate()
            .filter(|(_, pursuer)| pursuer.agent.bounds().overlaps(&player))
            .map(|(i, _)| i)
            .collect()
    }

    /// Advance one frame.
    ///
    /// `reaim` is asked once per pursuer, with its index,
    /// whether that pursuer should turn towards the player this frame.
    pub fn step(&mut self,  monster_speed: f32,  reaim: &mut dyn FnMut(usize) -> bool) -> Frame {
        let mut frame = Frame::default();
        let target = self.player.pos();
        for (i, pursuer) in self.pursuers.iter_mut().enumerate() {
            let turn = reaim(i);
            pursuer.follow(target, monster_speed, turn);
            frame.reaimed += turn as usize;
        }

        self.player.update(self.arena);

        frame.caught = self.catch();
        frame
    }

    /// Remove every pursuer that touches the player, and pay for it.
    fn catch(&mut self) -> usize {
        let caught = self.colliding();
        if caught.is_empty() {
            return 0;
        }
        let player = self.player.agent.bounds();
        self.pursuers.retain(|pursuer| !pursuer.agent.bounds().overlaps(&player));
        self.counter.value -= caught.len() as i64;
        debug!("{} monster(s) caught the player, {} is now {}",
            caught.len(), self.counter.kind, self.counter.value
        );
        caught.len()
    }
}

/// A world together with the rules and randomness that drive it.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    world: World,
    rng: SmallRng,
    frames: u64,
}

impl Session {
    /// Seeded from `config.seed`, or randomly if there is none.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!("starting session with seed {} and {} monsters", seed, config.monster_count);
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: Config,  mut rng: SmallRng) -> Result<Self, ConfigError> {
        // spawning and re-aiming panic on an empty arena or a zero chance
        let config = config.validate()?;
        let mut player = Player::new(config.player_start, config.player_scale);
        player.clamp_to(config.arena);
        let pursuers = spawn_pursuers(&mut rng, &config, &player);
        let counter = Counter { kind: config.counter, value: config.initial_counter() };
        let world = World::new(config.arena, player, pursuers, counter);
        Ok(Session { config, world, rng, frames: 0 })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn world(&self) -> &World {
        &self.world
    }
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.world.player
    }
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance one frame, letting each pursuer re-aim with a chance of
    /// one in `config.reaim_chance`.
    pub fn step(&mut self) -> Frame {
        let Session { config, world, rng, frames } = self;
        *frames += 1;
        let chance = config.reaim_chance;
        world.step(config.monster_speed, &mut |_: usize| rng.random_ratio(1, chance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_game() {
        let config = Config { seed: Some(42), ..Config::default() };
        let mut a = Session::new(config.clone()).unwrap();
        let mut b = Session::new(config).unwrap();
        for _ in 0..300 {
            assert_eq!(a.step(), b.step());
        }
        assert_eq!(a.world(), b.world());
        assert_eq!(a.frames(), 300);
    }

    #[test]
    fn player_starts_clamped() {
        let config = Config { player_start: [-100.0, 10_000.0], seed: Some(1), ..Config::default() };
        let session = Session::new(config.clone()).unwrap();
        let bounds = session.world().player.agent.bounds();
        assert_eq!(bounds.left, 0.0);
        assert_eq!(bounds.top, config.arena[1]-1.0);
    }

    fn crowd(monsters: usize,  reaim_chance: u32) -> Session {
        let config = Config {
            monster_count: monsters,
            reaim_chance,
            seed: Some(7),
            ..Config::default()
        };
        Session::new(config).unwrap()
    }

    #[test]
    fn chance_of_one_reaims_every_pursuer_every_frame() {
        let mut session = crowd(10, 1);
        for _ in 0..5 {
            assert_eq!(session.step().reaimed, 10);
        }
    }

    #[test]
    fn default_chance_reaims_about_one_in_a_hundred() {
        let mut session = crowd(1000, crate::config::REAIM_CHANCE);
        let reaimed: usize = (0..100).map(|_| session.step().reaimed).sum();
        // expected just under 1000 as a few get caught, standard deviation about 31
        assert!((800..=1200).contains(&reaimed), "{} re-aims", reaimed);
    }

    #[test]
    fn unvalidated_config_is_refused() {
        let config = Config { reaim_chance: 0, ..Config::default() };
        assert_eq!(Session::new(config).err(), Some(ConfigError::ZeroReaimChance));
        let config = Config { arena: [0.0, 0.0], ..Config::default() };
        assert!(matches!(Session::new(config), Err(ConfigError::ArenaTooSmall { .. })));
    }
}

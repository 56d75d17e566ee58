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

//! Monsters chase the player around the arena, and every one that
//! catches it costs a point.

pub mod agent;
pub mod config;
mod gear_heart;
pub mod session;
pub mod spawn;

pub use self::agent::{Agent, Bounds, Facing, Player, Pursuer, SPRITE_SIZE};
pub use self::config::{Config, ConfigError, Control, CounterKind};
pub use self::gear_heart::{GearHeart, FRAME_TIME, NAME};
pub use self::session::{Counter, Frame, Session, World};

/// Validate `config` and set up a game with it.
pub fn create_game(config: Config) -> Result<GearHeart, ConfigError> {
    GearHeart::new(config)
}

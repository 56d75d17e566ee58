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

pub use interface::game::*;

mod error;
mod viewport;
#[cfg(feature="speedy2d")]
mod speedy2d;

pub use self::error::EngineError;
pub use self::viewport::Viewport;
#[cfg(feature="speedy2d")]
pub use self::speedy2d::start;

use std::path::PathBuf;

/// How the window should be set up.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    pub title: &'static str,
    /// Game units, which map to pixels until the window is resized.
    pub size: [f32; 2],
    /// Without a font text isn't drawn.
    pub font: Option<PathBuf>,
}

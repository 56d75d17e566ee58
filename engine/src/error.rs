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

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while starting up. Once the window is running nothing fails.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot read font {path:?}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse font {path:?}: {reason}")]
    FontParse { path: PathBuf, reason: String },
    #[error("cannot create window: {0}")]
    Window(String),
}

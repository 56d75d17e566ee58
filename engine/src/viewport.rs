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

/// Maps game units to window pixels.
#[derive(Debug, Clone,Copy, PartialEq)]
pub struct Viewport {
    pub offset: [f32; 2],
    pub scale: f32,
}

impl Viewport {
    /// Fit the game into the window without stretching it,
    /// centered with bars on the sides that are too long.
    pub fn letterbox(window_size: [f32; 2],  game_size: [f32; 2]) -> Self {
        let scale = f32::min(window_size[0]/game_size[0], window_size[1]/game_size[1]);
        let scale = if scale.is_finite() {scale.max(0.0)} else {0.0};
        let offset = [
            (window_size[0] - game_size[0]*scale) / 2.0,
            (window_size[1] - game_size[1]*scale) / 2.0,
        ];
        Viewport { offset, scale }
    }

    pub fn to_window(&self,  pos: [f32; 2]) -> [f32; 2] {
        [pos[0]*self.scale + self.offset[0], pos[1]*self.scale + self.offset[1]]
    }

    /// A collapsed (minimized) window maps everything to the origin.
    pub fn to_game(&self,  pos: [f32; 2]) -> [f32; 2] {
        if self.scale <= 0.0 {
            return [0.0, 0.0];
        }
        [(pos[0]-self.offset[0]) / self.scale, (pos[1]-self.offset[1]) / self.scale]
    }
}

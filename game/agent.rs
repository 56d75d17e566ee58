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

//! The player and the monsters chasing it.
//!
//! Positions are in game units with y pointing up, velocities are in units per frame.

/// Size of an unscaled sprite.
pub const SPRITE_SIZE: [f32;2] = [32.0, 32.0];

pub(crate) fn clamp(p: f32,  (min,max): (f32,f32)) -> f32 {
         if p <= min   {min}
    else if p >= max   {max}
    else if p.is_nan() {(min+max)/2.0}
    else               {p}
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone,Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl Bounds {
    /// Touching edges don't count.
    pub fn overlaps(&self,  other: &Bounds) -> bool {
        self.left < other.right && other.left < self.right
        && self.bottom < other.top && other.bottom < self.top
    }
}

#[derive(Debug, Clone,Copy, PartialEq)]
pub struct Agent {
    pub pos: [f32; 2],
    pub vel: [f32; 2],
    pub scale: f32,
}

impl Agent {
    pub fn new(pos: [f32; 2],  scale: f32) -> Self {
        Agent { pos, vel: [0.0, 0.0], scale }
    }

    pub fn half_size(&self) -> [f32; 2] {
        [SPRITE_SIZE[0]*self.scale/2.0, SPRITE_SIZE[1]*self.scale/2.0]
    }

    pub fn bounds(&self) -> Bounds {
        let [hw, hh] = self.half_size();
        Bounds {
            left: self.pos[0]-hw,
            bottom: self.pos[1]-hh,
            right: self.pos[0]+hw,
            top: self.pos[1]+hh,
        }
    }

    pub fn advance(&mut self) {
        self.pos = [self.pos[0]+self.vel[0], self.pos[1]+self.vel[1]];
    }

    pub fn distance_to(&self,  point: [f32; 2]) -> f32 {
        (point[0]-self.pos[0]).hypot(point[1]-self.pos[1])
    }
}

#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Facing {Left, Right}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub agent: Agent,
    pub facing: Facing,
}

impl Player {
    pub fn new(pos: [f32; 2],  scale: f32) -> Self {
        Player { agent: Agent::new(pos, scale), facing: Facing::Right }
    }

    pub fn pos(&self) -> [f32; 2] {
        self.agent.pos
    }

    /// Zero keeps the current direction.
    pub fn face(&mut self,  dx: f32) {
        if dx < 0.0 {
            self.facing = Facing::Left;
        } else if dx > 0.0 {
            self.facing = Facing::Right;
        }
    }

    /// Move by velocity and keep the sprite inside the arena.
    pub fn update(&mut self,  arena: [f32; 2]) {
        self.agent.advance();
        self.face(self.agent.vel[0]);
        self.clamp_to(arena);
    }

    /// Jump straight to `pos`, as when following the mouse.
    pub fn place(&mut self,  pos: [f32; 2],  arena: [f32; 2]) {
        self.face(pos[0]-self.agent.pos[0]);
        self.agent.pos = pos;
        self.clamp_to(arena);
    }

    /// Keeps the edges of the sprite within `[0, width-1] x [0, height-1]`.
    /// A sprite bigger than the arena is aligned to the left and bottom.
    pub fn clamp_to(&mut self,  arena: [f32; 2]) {
        let [hw, hh] = self.agent.half_size();
        let x = clamp(self.agent.pos[0], (hw, arena[0]-1.0-hw));
        let y = clamp(self.agent.pos[1], (hh, arena[1]-1.0-hh));
        self.agent.pos = [x, y];
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pursuer {
    pub agent: Agent,
}

impl Pursuer {
    pub fn new(pos: [f32; 2],  scale: f32) -> Self {
        Pursuer { agent: Agent::new(pos, scale) }
    }

    /// Drift along the current heading, and if `reaim` also turn
    /// towards where the target is now.
    pub fn follow(&mut self,  target: [f32; 2],  speed: f32,  reaim: bool) {
        self.agent.advance();
        if reaim {
            self.aim_at(target, speed);
        }
    }

    pub fn aim_at(&mut self,  target: [f32; 2],  speed: f32) {
        let diff = [target[0]-self.agent.pos[0], target[1]-self.agent.pos[1]];
        let angle = f32::atan2(diff[1], diff[0]);
        self.agent.vel = [angle.cos()*speed, angle.sin()*speed];
    }
}

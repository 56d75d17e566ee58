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

use ::interface::game::*;
use log::debug;

use crate::agent::{Agent, Facing};
use crate::config::{Config, ConfigError, Control};
use crate::session::Session;

pub const NAME: &str = "Gear Heart";

/// Speeds are per frame, so the game runs at a fixed rate whatever the engine does.
pub const FRAME_TIME: f32 = 1.0/60.0;
/// Frames to catch up on at most per update, after a stall the rest is dropped.
const MAX_CATCH_UP: u32 = 5;

const BACKGROUND_COLOR: u32 = 0x6b4423ff; // brown nose
const PLAYER_COLOR: u32 = 0x3366ccff;
const EYE_COLOR: u32 = 0xffffffff;
const MONSTER_COLOR: u32 = 0x55aa33dd;
const TEXT_COLOR: u32 = 0xffffffff;
const TEXT_SIZE: f32 = 14.0;
const TEXT_POSITION: [f32;2] = [10.0, 20.0]; // from the bottom left corner

pub struct GearHeart {
    session: Session,
    lag: f32,
    fullscreen: bool,
    /// Held keys repeat key presses.
    f_held: bool,
}

impl GearHeart {
    pub(crate) fn new(config: Config) -> Result<Self, ConfigError> {
        Ok(GearHeart {
            session: Session::new(config)?,
            lag: 0.0,
            fullscreen: false,
            f_held: false,
        })
    }

    pub fn with_fullscreen(mut self,  fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn control(&self) -> Control {
        self.session.config().control
    }

    /// Arena coordinates have y pointing up, screen coordinates down.
    fn flip(&self,  pos: [f32; 2]) -> [f32; 2] {
        [pos[0], self.session.config().arena[1]-pos[1]]
    }

    fn sprite_area(&self,  agent: &Agent) -> [f32; 4] {
        let bounds = agent.bounds();
        let [left, top] = self.flip([bounds.left, bounds.top]);
        [left, top, bounds.right-bounds.left, bounds.top-bounds.bottom]
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        debug!("fullscreen requested: {}", self.fullscreen);
    }
}

impl Game for GearHeart {
    fn render(&mut self,  gfx: &mut Graphics) {
        let arena = self.session.config().arena;
        gfx.rectangle(hex(BACKGROUND_COLOR), [0.0, 0.0, arena[0], arena[1]]);

        let world = self.session.world();
        let monster_color = hex(MONSTER_COLOR);
        for pursuer in world.pursuers() {
            gfx.rectangle(monster_color, self.sprite_area(&pursuer.agent));
        }

        let player = &world.player;
        let area = self.sprite_area(&player.agent);
        gfx.rectangle(hex(PLAYER_COLOR), area);
        // an eye on the side the player is facing
        let eye = area[2]/5.0;
        let eye_x = match player.facing {
            Facing::Left => area[0]+eye,
            Facing::Right => area[0]+area[2]-2.0*eye,
        };
        gfx.rectangle(hex(EYE_COLOR), [eye_x, area[1]+area[3]/4.0, eye, eye]);

        let counter = world.counter();
        gfx.text(
                hex(TEXT_COLOR),
                self.flip(TEXT_POSITION),
                [Align::Left, Align::Right],
                TEXT_SIZE,
                format!("{}: {}", counter.kind, counter.value),
        );
    }

    fn update(&mut self,  dt: f32) {
        if !dt.is_finite() {
            return;
        }
        self.lag += dt.max(0.0);
        let mut steps = 0;
        while self.lag >= FRAME_TIME && steps < MAX_CATCH_UP {
            self.session.step();
            self.lag -= FRAME_TIME;
            steps += 1;
        }
        if steps == MAX_CATCH_UP {
            self.lag %= FRAME_TIME;
        }
    }

    fn key_press(&mut self,  key: Key) {
        match key {
            Key::F if !self.f_held => {
                self.f_held = true;
                self.toggle_fullscreen();
            }
            Key::Escape if self.fullscreen => self.toggle_fullscreen(),
            _ => {}
        }
        if self.control() != Control::Keyboard {
            return;
        }
        let speed = self.session.config().movement_speed;
        let vel = &mut self.session.player_mut().agent.vel;
        match key {
            Key::ArrowUp => vel[1] = speed,
            Key::ArrowDown => vel[1] = -speed,
            Key::ArrowLeft => vel[0] = -speed,
            Key::ArrowRight => vel[0] = speed,
            _ => {}
        }
    }

    fn key_release(&mut self,  key: Key) {
        if key == Key::F {
            self.f_held = false;
        }
        if self.control() != Control::Keyboard {
            return;
        }
        let vel = &mut self.session.player_mut().agent.vel;
        match key {
            Key::ArrowUp | Key::ArrowDown => vel[1] = 0.0,
            Key::ArrowLeft | Key::ArrowRight => vel[0] = 0.0,
            _ => {}
        }
    }

    fn mouse_move(&mut self,  pos: [f32; 2]) {
        if self.control() != Control::Pointer {
            return;
        }
        let pos = self.flip(pos);
        let arena = self.session.config().arena;
        self.session.player_mut().place(pos, arena);
    }

    fn fullscreen(&self) -> bool {
        self.fullscreen
    }
}

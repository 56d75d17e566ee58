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

use interface::game::*;
use crate::{EngineError, Viewport, WindowSettings};

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

extern crate speedy2d;
use speedy2d::Graphics2D;
use speedy2d::color::Color as spColor;
use speedy2d::dimen::Vector2;
use speedy2d::font::{Font, TextLayout, TextOptions, FormattedTextBlock};
use speedy2d::shape::Rectangle;
use speedy2d::time::Stopwatch;
use speedy2d::window::{
    KeyScancode,
    VirtualKeyCode,
    WindowCreationOptions,
    WindowFullscreenMode,
    WindowHandler,
    WindowHelper,
    WindowSize,
    WindowStartupInfo,
};
use speedy2d::Window;

extern crate fxhash;
use fxhash::FxBuildHasher;

const UPDATE_RATE: u32 = 125; // the standard USB polling rate.
/// Laid out texts to keep around before starting over.
const MAX_CACHED_TEXTS: usize = 256;

fn map_key(key: VirtualKeyCode) -> Option<Key> {
    match key {
        VirtualKeyCode::Up => Some(Key::ArrowUp),
        VirtualKeyCode::Down => Some(Key::ArrowDown),
        VirtualKeyCode::Left => Some(Key::ArrowLeft),
        VirtualKeyCode::Right => Some(Key::ArrowRight),
        VirtualKeyCode::Escape => Some(Key::Escape),
        VirtualKeyCode::F => Some(Key::F),
        _ => None
    }
}

fn map_color([r, g, b, a]: [f32; 4]) -> spColor {
    spColor::from_rgba(r, g, b, a)
}

fn vector([x, y]: [f32; 2]) -> Vector2<f32> {
    Vector2 { x, y }
}

fn align(position: f32,  length: f32,  align: Align) -> f32 {
    match align {
        Align::Left => position,
        Align::Center => position - length/2.0,
        Align::Right => position - length,
    }
}

/// Text layouts keyed by content and pixel size.
/// The game redraws the same few strings every frame.
struct TextCache {
    font: Font,
    layouts: HashMap<(Cow<'static, str>, i32), Rc<FormattedTextBlock>, FxBuildHasher>,
}

impl TextCache {
    fn load(path: &Path) -> Result<Self, EngineError> {
        let bytes = fs::read(path).map_err(|source| EngineError::FontRead {
            path: path.to_owned(),
            source,
        })?;
        let font = Font::new(&bytes).map_err(|e| EngineError::FontParse {
            path: path.to_owned(),
            reason: format!("{:?}", e),
        })?;
        info!("loaded font {:?}", path);
        Ok(TextCache { font, layouts: HashMap::default() })
    }

    fn get(&mut self,  text: Cow<'static, str>,  scaled_size: f32) -> Rc<FormattedTextBlock> {
        if self.layouts.len() >= MAX_CACHED_TEXTS {
            debug!("text cache full, clearing {} layouts", self.layouts.len());
            self.layouts.clear();
        }
        let font = &self.font;
        let key = (text, scaled_size as i32);
        self.layouts.entry(key).or_insert_with_key(|(text, _)| {
            Rc::new(font.layout_text(text, scaled_size, TextOptions::new()))
        }).clone()
    }
}

struct GameWrapper<G: Game> {
    game: G,
    game_size: [f32; 2],
    window_size: [f32; 2], // changes if window is resized
    fullscreen: bool,
    stopwatch: Stopwatch,
    last_physics: f64,
    shapes: Graphics,
    text: Option<TextCache>,
    warned_about_text: bool,
}

impl<G: Game> GameWrapper<G> {
    fn viewport(&self) -> Viewport {
        Viewport::letterbox(self.window_size, self.game_size)
    }

    /// The game decides, the window follows.
    fn apply_fullscreen(&mut self,  h: &mut WindowHelper<()>) {
        let wanted = self.game.fullscreen();
        if wanted == self.fullscreen {
            return;
        }
        self.fullscreen = wanted;
        info!("switching to {}", if wanted {"fullscreen"} else {"windowed"});
        h.set_fullscreen_mode(if wanted {
            WindowFullscreenMode::FullscreenBorderless
        } else {
            WindowFullscreenMode::Windowed
        });
    }
}

impl<G: Game> WindowHandler for GameWrapper<G> {
    fn on_start(&mut self,  h: &mut WindowHelper<()>,  info: WindowStartupInfo) {
        let size = info.viewport_size_pixels().into_f32();
        self.window_size = [size.x, size.y];
        h.set_cursor_visible(false);
        self.apply_fullscreen(h);

        let sender = h.create_user_event_sender();
        thread::spawn(move || {
            let interval = Duration::from_secs_f32((UPDATE_RATE as f32).recip());
            // sending only fails once the window is gone
            while sender.send_event(()).is_ok() {
                thread::sleep(interval);
            }
        });
    }

    fn on_user_event(&mut self,  _: &mut WindowHelper<()>,  _: ()) {
        let prev = self.last_physics;
        self.last_physics = self.stopwatch.secs_elapsed();
        let elapsed = self.last_physics - prev;
        self.game.update(elapsed as f32);
    }

    fn on_draw(&mut self,  h: &mut WindowHelper<()>,  g: &mut Graphics2D) {
        g.clear_screen(spColor::BLACK);
        self.game.render(&mut self.shapes);

        let viewport = self.viewport();
        let scale = viewport.scale;
        for shape in self.shapes.drain() {
            match shape {
                Shape::Rectangle { color, area } => {
                    let rect = Rectangle::new(
                        vector(viewport.to_window([area[0], area[1]])),
                        vector(viewport.to_window([area[0]+area[2], area[1]+area[3]])),
                    );
                    g.draw_rectangle(rect, map_color(color));
                }
                Shape::Text { color, size, position, align: [horizontal, vertical], text } => {
                    let Some(cache) = self.text.as_mut() else {
                        if !self.warned_about_text {
                            warn!("no font loaded, text such as {:?} is not drawn", text);
                            self.warned_about_text = true;
                        }
                        continue;
                    };
                    let text = cache.get(text, size * scale);
                    let [x, y] = viewport.to_window(position);
                    let position = Vector2 {
                        x: align(x, text.width(), horizontal),
                        y: align(y, text.height(), vertical),
                    };
                    g.draw_text(position, map_color(color), &text);
                }
            }
        }

        // Required to make the screen update.
        // Surprisingly doesn't cause 100% CPU usage.
        h.request_redraw();
    }

    fn on_resize(&mut self,  _: &mut WindowHelper<()>,  size: speedy2d::dimen::UVec2) {
        let size = size.into_f32();
        self.window_size = [size.x, size.y];
    }

    fn on_mouse_move(&mut self,  _: &mut WindowHelper<()>,  pos: Vector2<f32>) {
        let pos = self.viewport().to_game([pos.x, pos.y]);
        self.game.mouse_move(pos);
    }

    fn on_key_down(
            &mut self,
            h: &mut WindowHelper<()>,
            key: Option<VirtualKeyCode>,
            _: KeyScancode
    ) {
        if let Some(key) = key.and_then(map_key) {
            self.game.key_press(key);
            self.apply_fullscreen(h);
        }
    }

    fn on_key_up(
            &mut self,
            h: &mut WindowHelper<()>,
            key: Option<VirtualKeyCode>,
            _: KeyScancode
    ) {
        if let Some(key) = key.and_then(map_key) {
            self.game.key_release(key);
            self.apply_fullscreen(h);
        }
    }
}

/// Open a window and run `game` in it until the window is closed,
/// which ends the process.
///
/// Only returns if something fails before the game starts.
#[inline(never)]
pub fn start<G: Game+'static>(game: G,  settings: WindowSettings) -> Result<(), EngineError> {
    let text = match &settings.font {
        Some(path) => Some(TextCache::load(path)?),
        None => None,
    };
    let wrapper = GameWrapper {
        game,
        game_size: settings.size,
        window_size: settings.size,
        fullscreen: false,
        stopwatch: Stopwatch::new().map_err(|e| EngineError::Window(format!("{:?}", e)))?,
        last_physics: 0.0,
        shapes: Graphics::default(),
        text,
        warned_about_text: false,
    };

    let window_size = WindowSize::ScaledPixels(vector(settings.size));
    let options = WindowCreationOptions::new_windowed(window_size, None)
            .with_always_on_top(false)
            .with_decorations(true)
            .with_resizable(true)
            .with_transparent(false)
            .with_vsync(true);
    let window = Window::new_with_options(settings.title, options)
        .map_err(|e| EngineError::Window(format!("{:?}", e)))?;
    info!("opened {:?} at {}x{}", settings.title, settings.size[0], settings.size[1]);
    window.run_loop(wrapper)
}

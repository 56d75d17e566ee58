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

use std::borrow::Cow;
use std::vec::Drain;

pub type Color = [f32;4];

/// Unpack a color written as `0xrrggbbaa`.
pub fn hex(color: u32) -> Color {
    let [r, g, b, a] = color.to_be_bytes();
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0]
}

/// Text alignment relative to its position.
/// Also used vertically, where Left means top and Right means bottom.
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Align {Left, Center, Right}

/// Everything is in game units, with the origin in the top left corner.
/// The engine scales and offsets it to fit the window.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle {color: Color,  area: [f32; 4]},
    Text {
        color: Color,
        size: f32,
        position: [f32; 2],
        align: [Align; 2],
        text: Cow<'static, str>,
    },
}

/// Collects the shapes a game wants drawn this frame.
#[derive(Debug, Default)]
pub struct Graphics {
    shapes: Vec<Shape>,
}

impl Graphics {
    /// `area` is `[x, y, width, height]`.
    pub fn rectangle(&mut self,  color: Color,  area: [f32; 4]) {
        self.shapes.push(Shape::Rectangle { color, area });
    }
    pub fn text(&mut self,
            color: Color,
            position: [f32; 2],
            align: [Align; 2],
            size: f32,
            text: impl Into<Cow<'static, str>>,
    ) {
        let text = text.into();
        self.shapes.push(Shape::Text { color, size, position, align, text });
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
    pub fn drain(&mut self) -> Drain<'_, Shape> {
        self.shapes.drain(..)
    }
}

#[derive(Debug, Clone,Copy, PartialEq,Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    F,
}

pub trait Game {
    fn render(&mut self,  gfx: &mut Graphics);
    /// `dt` is the wall clock time since the previous call, in seconds.
    fn update(&mut self,  dt: f32);
    fn key_press(&mut self,  key: Key);
    fn key_release(&mut self,  key: Key);
    /// `pos` is in game units, see [`Shape`].
    fn mouse_move(&mut self,  pos: [f32; 2]);
    /// Polled by the engine after input events.
    fn fullscreen(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels() {
        assert_eq!(hex(0xff000080), [1.0, 0.0, 0.0, 128.0 / 255.0]);
        assert_eq!(hex(0x00ff00ff), [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn text_keeps_borrowed_strings_borrowed() {
        let mut gfx = Graphics::default();
        gfx.text(hex(0xffffffff), [0.0, 0.0], [Align::Left; 2], 1.0, "static");
        gfx.text(hex(0xffffffff), [0.0, 0.0], [Align::Left; 2], 1.0, format!("n={}", 3));
        match gfx.shapes() {
            [Shape::Text { text: Cow::Borrowed("static"), .. },
             Shape::Text { text: Cow::Owned(owned), .. }] => assert_eq!(owned, "n=3"),
            other => panic!("unexpected shapes {:?}", other),
        }
    }

    #[test]
    fn drain_empties_the_list() {
        let mut gfx = Graphics::default();
        gfx.rectangle(hex(0x000000ff), [0.0, 0.0, 1.0, 1.0]);
        gfx.text(hex(0x000000ff), [0.5, 0.5], [Align::Center; 2], 1.0, "x");
        assert_eq!(gfx.drain().count(), 2);
        assert!(gfx.shapes().is_empty());
    }
}

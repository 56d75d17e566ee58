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

#![cfg_attr(windows, windows_subsystem = "windows")]

mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use engine::WindowSettings;
use game::{Config, Control, CounterKind};

/// Run from the monsters, every one that catches you costs a point.
///
/// Arrow keys move, F toggles fullscreen and Escape leaves it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// How the player moves: keyboard or pointer
    #[arg(long, default_value = "keyboard")]
    control: Control,
    /// What is counted down on every catch: score or health
    #[arg(long, default_value = "score")]
    counter: CounterKind,
    /// Number of monsters
    #[arg(long, default_value_t = game::config::MONSTER_COUNT)]
    monsters: usize,
    /// Starting health for the health counter
    #[arg(long, default_value_t = game::config::STARTING_HEALTH)]
    health: i64,
    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
    /// Start in fullscreen
    #[arg(long)]
    fullscreen: bool,
    /// TrueType font for the counter, which isn't shown without one
    #[arg(long)]
    font: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            control: self.control,
            counter: self.counter,
            monster_count: self.monsters,
            starting_health: self.health,
            seed: self.seed,
            ..Config::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    log::debug!("{:?}", args);

    let config = args.config();
    let size = config.arena;
    let game = game::create_game(config)
        .context("invalid game settings")?
        .with_fullscreen(args.fullscreen);
    let settings = WindowSettings { title: game::NAME, size, font: args.font };
    engine::start(game, settings).context("cannot start the game")?;
    Ok(())
}

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

use log::warn;
use rand::Rng;

use crate::agent::{Player, Pursuer};
use crate::config::Config;

const MAX_SPAWN_ATTEMPTS: u32 = 32;

fn random_pursuer<R: Rng>(rng: &mut R,  config: &Config) -> Pursuer {
    let [width, height] = config.arena;
    let pos = [rng.random_range(0.0..width), rng.random_range(0.0..height)];
    Pursuer::new(pos, config.monster_scale)
}

/// A spot is free if it keeps the clearance and the sprites don't touch.
fn is_clear(candidate: &Pursuer,  player: &Player,  clearance: f32) -> bool {
    candidate.agent.distance_to(player.pos()) >= clearance
    && !candidate.agent.bounds().overlaps(&player.agent.bounds())
}

/// Place `config.monster_count` pursuers at random positions in the arena,
/// away from the player.
///
/// Every pursuer is created: if no free spot turns up after a few tries
/// the candidate farthest from the player is used.
pub fn spawn_pursuers<R: Rng>(rng: &mut R,  config: &Config,  player: &Player)
-> Vec<Pursuer> {
    let mut pursuers = Vec::with_capacity(config.monster_count);
    for n in 0..config.monster_count {
        let mut best = random_pursuer(rng, config);
        let mut best_distance = best.agent.distance_to(player.pos());
        let mut clear = is_clear(&best, player, config.spawn_clearance);
        let mut attempts = 1;
        while !clear && attempts < MAX_SPAWN_ATTEMPTS {
            attempts += 1;
            let candidate = random_pursuer(rng, config);
            let distance = candidate.agent.distance_to(player.pos());
            if is_clear(&candidate, player, config.spawn_clearance) {
                best = candidate;
                clear = true;
            } else if distance > best_distance {
                best = candidate;
                best_distance = distance;
            }
        }
        if !clear {
            warn!("no free spot for monster {} after {} tries, placing it {:.1} from the player",
                n, attempts, best_distance
            );
        }
        pursuers.push(best);
    }
    pursuers
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn spawns_requested_count_with_clearance() {
        let config = Config::default();
        let player = Player::new(config.player_start, config.player_scale);
        let mut rng = SmallRng::seed_from_u64(7);
        let pursuers = spawn_pursuers(&mut rng, &config, &player);
        assert_eq!(pursuers.len(), config.monster_count);
        for pursuer in &pursuers {
            assert!(is_clear(pursuer, &player, config.spawn_clearance));
            assert!(pursuer.agent.pos[0] >= 0.0 && pursuer.agent.pos[0] < config.arena[0]);
            assert!(pursuer.agent.pos[1] >= 0.0 && pursuer.agent.pos[1] < config.arena[1]);
            assert_eq!(pursuer.agent.vel, [0.0, 0.0]);
        }
    }

    #[test]
    fn crowded_arena_still_spawns_everyone() {
        let config = Config {
            arena: [64.0, 64.0],
            monster_count: 5,
            spawn_clearance: 1000.0,
            ..Config::default()
        };
        let player = Player::new([32.0, 32.0], config.player_scale);
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(spawn_pursuers(&mut rng, &config, &player).len(), 5);
    }
}

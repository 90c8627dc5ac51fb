/// Game state and the per-tick update rules.
///
/// `GameState` owns every live entity and is the only mutation surface:
/// collisions, spawns and removals all happen inside `animate`, and removal
/// decisions are collected first and applied after each pass so no
/// collection is mutated while it is being iterated.

use rand::Rng;

use crate::config::SimConfig;
use crate::entities::{Bullet, Enemy, Explosion, ExplosionSize, Ship, Starfield};
use crate::graph::ContributionGraph;

#[derive(Clone, Debug)]
pub struct GameState {
    pub config: SimConfig,
    /// Grid width in columns (weeks).
    pub weeks: usize,
    /// Grid height in rows (days).
    pub days: usize,
    /// Row the ship sits on, below the grid.
    pub ship_row: i32,
    pub ship: Ship,
    /// Insertion order (week-major) doubles as the collision tie-break order.
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub explosions: Vec<Explosion>,
    pub starfield: Starfield,
}

impl GameState {
    /// Build the initial state: the ship at the middle column and one enemy
    /// per grid cell with a non-zero level, health equal to that level.
    pub fn new(graph: &ContributionGraph, config: SimConfig, rng: &mut impl Rng) -> Self {
        let weeks = graph.num_weeks();
        let days = graph.num_days();
        let ship_row = days as i32 + config.ship_row_offset;

        let mut enemies = Vec::new();
        for (week, record) in graph.weeks.iter().enumerate() {
            for (day, cell) in record.days.iter().enumerate() {
                if cell.level > 0 {
                    enemies.push(Enemy {
                        x: week as i32,
                        y: day as i32,
                        health: cell.level as u32,
                    });
                }
            }
        }

        GameState {
            config,
            weeks,
            days,
            ship_row,
            ship: Ship::new((weeks / 2) as f32),
            enemies,
            bullets: Vec::new(),
            explosions: Vec::new(),
            starfield: Starfield::new(weeks, ship_row, &config, rng),
        }
    }

    /// The synchronization gate: true only when the ship has reached its
    /// target column and its shoot cooldown has expired.  The animator never
    /// applies the next action while this is false, which is what keeps
    /// actions strictly sequenced.
    pub fn can_take_action(&self) -> bool {
        !self.ship.is_moving() && self.ship.can_shoot()
    }

    /// Fire a bullet from the ship's current column.  Ignored if the
    /// cooldown has not expired; the animator protocol never calls it in
    /// that state.
    pub fn shoot(&mut self) {
        if !self.ship.can_shoot() {
            return;
        }
        self.bullets.push(Bullet {
            x: self.ship.x.round() as i32,
            y: (self.ship_row - 1) as f32,
        });
        self.ship.shoot_cooldown = self.config.shoot_cooldown;
    }

    /// Advance one simulation tick.
    pub fn animate(&mut self, dt: f32, rng: &mut impl Rng) {
        // 1. Ship movement and cooldown decay.
        self.ship.animate(dt, &self.config);

        // 2. Bullets: move, then resolve collisions.  A bullet hits the
        // first enemy (in insertion order) sharing its column whose row it
        // has reached or passed; at most one enemy per bullet per tick.
        let mut spent: Vec<usize> = Vec::new();
        let mut spawned: Vec<Explosion> = Vec::new();
        for bi in 0..self.bullets.len() {
            self.bullets[bi].animate(dt, &self.config);
            let (bx, by) = (self.bullets[bi].x, self.bullets[bi].y);

            let hit = self
                .enemies
                .iter()
                .position(|e| e.health > 0 && e.x == bx && e.y as f32 >= by);
            if let Some(ei) = hit {
                let enemy = &mut self.enemies[ei];
                enemy.health -= 1;
                spawned.push(Explosion::new(
                    bx as f32,
                    by,
                    ExplosionSize::Small,
                    &self.config,
                ));
                if enemy.health == 0 {
                    spawned.push(Explosion::new(
                        enemy.x as f32,
                        enemy.y as f32,
                        ExplosionSize::Large,
                        &self.config,
                    ));
                }
                spent.push(bi);
            } else if self.bullets[bi].off_screen(&self.config) {
                spent.push(bi);
            }
        }

        let mut idx = 0;
        self.bullets.retain(|_| {
            let dead = spent.contains(&idx);
            idx += 1;
            !dead
        });
        self.enemies.retain(|e| e.health > 0);

        // 3. Explosions advance and expire at their frame bound.  Bursts
        // spawned this tick join afterwards so their first rendered frame
        // is frame zero.
        for explosion in &mut self.explosions {
            explosion.animate();
        }
        self.explosions.retain(|e| !e.finished());
        self.explosions.extend(spawned);

        // 4. Background.
        self.starfield.animate(dt, rng);
    }

    /// True once nothing meaningful is left to show: no enemies, no bullets
    /// in flight, no explosions still playing.
    pub fn is_complete(&self) -> bool {
        self.enemies.is_empty() && self.bullets.is_empty() && self.explosions.is_empty()
    }
}

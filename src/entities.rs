/// All game entity types — flat records plus their per-tick kinematics.
/// Ownership of every collection lives in `GameState`; nothing here removes
/// itself, it only reports when it is due to be dropped.

use rand::Rng;

use crate::config::{ExplosionSpec, SimConfig};

// ── Ship ──────────────────────────────────────────────────────────────────────

/// The player ship.  One per game state, created at the start column,
/// never destroyed during a run.
#[derive(Clone, Debug)]
pub struct Ship {
    /// Horizontal position in column space (continuous while moving).
    pub x: f32,
    pub target_x: f32,
    /// Ticks until the ship may shoot again.
    pub shoot_cooldown: u32,
}

impl Ship {
    pub fn new(start_column: f32) -> Self {
        Ship {
            x: start_column,
            target_x: start_column,
            shoot_cooldown: 0,
        }
    }

    /// Order the ship to a new column.  Movement resolves over the
    /// following ticks.
    pub fn move_to(&mut self, x: i32) {
        self.target_x = x as f32;
    }

    pub fn is_moving(&self) -> bool {
        self.x != self.target_x
    }

    pub fn can_shoot(&self) -> bool {
        self.shoot_cooldown == 0
    }

    /// Step toward the target column without overshooting; decay the
    /// shoot cooldown.
    pub fn animate(&mut self, dt: f32, config: &SimConfig) {
        let step = config.ship_speed * dt;
        if self.x < self.target_x {
            self.x = (self.x + step).min(self.target_x);
        } else if self.x > self.target_x {
            self.x = (self.x - step).max(self.target_x);
        }
        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

/// A destructible cell.  Position is fixed for its lifetime; health comes
/// from the cell's intensity level and stays >= 1 while the enemy is alive.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub health: u32,
}

// ── Bullet ────────────────────────────────────────────────────────────────────

/// A shot in flight.  The column is fixed; the row is continuous and
/// decreases (upward) every tick.
#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: i32,
    pub y: f32,
}

impl Bullet {
    pub fn animate(&mut self, dt: f32, config: &SimConfig) {
        self.y -= config.bullet_speed * dt;
    }

    /// True once the bullet has left the visible band beyond the tolerance
    /// margin; the owner drops it.
    pub fn off_screen(&self, config: &SimConfig) -> bool {
        self.y < -config.bullet_offscreen_margin
    }
}

// ── Explosion ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplosionSize {
    /// Bullet impact.
    Small,
    /// Enemy destroyed.
    Large,
}

/// Expanding particle burst.  The spec (particle count, spread, lifetime) is
/// copied from the config at spawn time, so live explosions stay consistent
/// regardless of what the owner does afterwards.
#[derive(Clone, Debug)]
pub struct Explosion {
    pub x: f32,
    pub y: f32,
    pub size: ExplosionSize,
    /// Elapsed ticks, `0 <= frame <= spec.max_frames`.
    pub frame: u32,
    pub spec: ExplosionSpec,
}

impl Explosion {
    pub fn new(x: f32, y: f32, size: ExplosionSize, config: &SimConfig) -> Self {
        let spec = match size {
            ExplosionSize::Small => config.explosion_small,
            ExplosionSize::Large => config.explosion_large,
        };
        Explosion {
            x,
            y,
            size,
            frame: 0,
            spec,
        }
    }

    pub fn animate(&mut self) {
        self.frame += 1;
    }

    /// Due for removal the tick the counter reaches its bound.
    pub fn finished(&self) -> bool {
        self.frame >= self.spec.max_frames
    }

    /// Animation progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.frame as f32 / self.spec.max_frames as f32
    }
}

// ── Starfield ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    /// 0.2..1.0, dimmer stars read as farther away.
    pub brightness: f32,
    /// Rendered size in pixels (1 or 2).
    pub size: u8,
    /// Downward drift, cells per second.
    pub speed: f32,
}

/// Scrolling background.  Stars drift down and wrap back to the top with a
/// re-randomized column; the set never grows or shrinks.
#[derive(Clone, Debug)]
pub struct Starfield {
    pub stars: Vec<Star>,
    min_x: f32,
    max_x: f32,
    top: f32,
    bottom: f32,
}

impl Starfield {
    pub fn new(weeks: usize, ship_row: i32, config: &SimConfig, rng: &mut impl Rng) -> Self {
        let min_x = -2.0;
        let max_x = weeks as f32 + 2.0;
        let top = -2.0;
        let bottom = ship_row as f32 + 4.0;
        let stars = (0..config.star_count)
            .map(|_| {
                let brightness = rng.gen_range(0.2..1.0f32);
                Star {
                    x: rng.gen_range(min_x..max_x),
                    y: rng.gen_range(top..bottom),
                    brightness,
                    // Mostly single-pixel stars.
                    size: if rng.gen_bool(0.25) { 2 } else { 1 },
                    // Slower for dimmer (farther) stars.
                    speed: 1.0 + brightness * 1.5,
                }
            })
            .collect();
        Starfield {
            stars,
            min_x,
            max_x,
            top,
            bottom,
        }
    }

    pub fn animate(&mut self, dt: f32, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.y += star.speed * dt;
            if star.y > self.bottom {
                star.y = self.top;
                star.x = rng.gen_range(self.min_x..self.max_x);
            }
        }
    }
}

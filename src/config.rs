/// Simulation tuning — one immutable value threaded through `GameState`
/// construction instead of scattered module-level constants.

/// Particle count / spread / lifetime for one explosion size class.
#[derive(Clone, Copy, Debug)]
pub struct ExplosionSpec {
    pub particle_count: u32,
    /// Maximum particle spread from the center, in pixels.
    pub max_radius: i32,
    /// Animation length in ticks.
    pub max_frames: u32,
}

/// All tunable simulation constants.
///
/// Speeds are in grid cells per second and get scaled by the per-tick delta
/// (`1 / fps`).  Cooldowns, explosion lifetimes and the draining budget count
/// *ticks*, so their wall-clock duration shrinks as fps grows.  That quirk is
/// inherited behavior, kept rather than silently corrected.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Horizontal ship speed, cells per second.
    pub ship_speed: f32,
    /// Upward bullet speed, cells per second.
    pub bullet_speed: f32,
    /// Ticks between shots.
    pub shoot_cooldown: u32,
    /// Rows the ship sits below the last grid row.
    pub ship_row_offset: i32,
    /// Rendered trail segments behind a bullet.
    pub bullet_trail: u32,
    /// Rows past the top of the play area before a bullet is dropped.
    pub bullet_offscreen_margin: f32,
    /// Number of background stars.
    pub star_count: usize,
    /// Bullet-impact explosion.
    pub explosion_small: ExplosionSpec,
    /// Enemy-destruction explosion.
    pub explosion_large: ExplosionSpec,
    /// Max ticks the animator drains residual entities before giving up.
    pub drain_tick_budget: u32,
    /// Identical padding frames appended after the run resolves.
    pub trailing_frames: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        // Matches the historical per-frame constants at the 50 fps default
        // (0.25 and 0.15 cells per frame).
        SimConfig {
            ship_speed: 12.5,
            bullet_speed: 7.5,
            shoot_cooldown: 10,
            ship_row_offset: 3,
            bullet_trail: 3,
            bullet_offscreen_margin: 10.0,
            star_count: 100,
            explosion_small: ExplosionSpec {
                particle_count: 4,
                max_radius: 10,
                max_frames: 6,
            },
            explosion_large: ExplosionSpec {
                particle_count: 8,
                max_radius: 20,
                max_frames: 20,
            },
            drain_tick_budget: 100,
            trailing_frames: 5,
        }
    }
}

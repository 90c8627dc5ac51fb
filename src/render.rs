/// Rendering layer — translates game state into RGBA pixel frames.
///
/// No game logic is performed here.  Draw order is fixed and significant:
/// background (starfield, then the empty-cell lattice), enemies, bullets,
/// explosions, and the ship last so it is never occluded.  Pixel work is
/// delegated to the `raster` primitives.

use image::RgbaImage;

use crate::entities::{Bullet, Enemy, Explosion, Ship, Starfield};
use crate::game::GameState;
use crate::raster::{self, rgb, rgba, Color};

// ── Colour palette ────────────────────────────────────────────────────────────

/// Dark-mode contribution-graph colors.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: Color,
    pub cell_empty: Color,
    /// Cell fill per intensity level 1..=4; higher levels clamp to the last.
    pub levels: [Color; 4],
    pub ship: Color,
    pub bullet: Color,
    pub watermark: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Palette {
            background: rgb(13, 17, 23),
            cell_empty: rgb(22, 27, 34),
            levels: [
                rgb(14, 68, 41),
                rgb(0, 109, 50),
                rgb(38, 166, 65),
                rgb(57, 211, 83),
            ],
            ship: rgb(88, 166, 255),
            bullet: rgb(247, 129, 102),
            watermark: rgba(139, 148, 158, 140),
        }
    }
}

/// Cell-to-pixel geometry plus the palette and the watermark flag.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext {
    /// Pixel size of one grid cell.
    pub cell_size: i32,
    /// Outer margin around the play area, in pixels.
    pub margin: i32,
    pub palette: Palette,
    pub watermark: bool,
}

impl RenderContext {
    pub fn dark(watermark: bool) -> Self {
        RenderContext {
            cell_size: 12,
            margin: 12,
            palette: Palette::dark(),
            watermark,
        }
    }
}

const WATERMARK_LABEL: &str = "CONTRIB-SHOOTER";

fn lighten(c: Color, d: i16) -> Color {
    let adj = |v: u8| (v as i16 + d).clamp(0, 255) as u8;
    rgb(adj(c[0]), adj(c[1]), adj(c[2]))
}

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Pure function of (game state, context) to a pixel frame.  Holds only the
/// context and the frame geometry; nothing is retained between frames.
pub struct Renderer {
    context: RenderContext,
    weeks: usize,
    days: usize,
    ship_row: i32,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(state: &GameState, context: RenderContext) -> Self {
        let width = (context.margin * 2 + state.weeks as i32 * context.cell_size) as u32;
        let height = (context.margin * 2 + (state.ship_row + 1) * context.cell_size) as u32;
        Renderer {
            context,
            weeks: state.weeks,
            days: state.days,
            ship_row: state.ship_row,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Top-left pixel of the cell at continuous grid coordinates.
    fn cell_origin(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.context.margin as f32 + x * self.context.cell_size as f32,
            self.context.margin as f32 + y * self.context.cell_size as f32,
        )
    }

    /// Render one complete frame.
    pub fn frame(&self, state: &GameState) -> RgbaImage {
        let palette = &self.context.palette;
        let mut img = RgbaImage::from_pixel(self.width, self.height, palette.background);

        self.draw_starfield(&mut img, &state.starfield);
        self.draw_lattice(&mut img);
        for enemy in &state.enemies {
            self.draw_enemy(&mut img, enemy);
        }
        for bullet in &state.bullets {
            self.draw_bullet(&mut img, bullet, state.config.bullet_trail);
        }
        for explosion in &state.explosions {
            self.draw_explosion(&mut img, explosion);
        }
        self.draw_ship(&mut img, &state.ship);

        if self.context.watermark {
            let x = self.width as i32 - raster::label_width(WATERMARK_LABEL) - 3;
            let y = self.height as i32 - 8;
            raster::draw_label(&mut img, x, y, WATERMARK_LABEL, palette.watermark);
        }
        img
    }

    fn draw_starfield(&self, img: &mut RgbaImage, starfield: &Starfield) {
        for star in &starfield.stars {
            let (x, y) = self.cell_origin(star.x, star.y);
            let v = (255.0 * star.brightness) as u8;
            let color = rgb(v, v, v);
            let (x, y) = (x as i32, y as i32);
            if star.size <= 1 {
                raster::blend_pixel(img, x, y, color);
            } else {
                raster::fill_rect(img, x, y, x + star.size as i32 - 1, y + star.size as i32 - 1, color);
            }
        }
    }

    /// Faint lattice of empty cells; destroyed enemies leave these behind.
    fn draw_lattice(&self, img: &mut RgbaImage) {
        for week in 0..self.weeks {
            for day in 0..self.days {
                let (x, y) = self.cell_origin(week as f32, day as f32);
                let (x, y) = (x as i32, y as i32);
                raster::fill_rect(
                    img,
                    x + 1,
                    y + 1,
                    x + self.context.cell_size - 2,
                    y + self.context.cell_size - 2,
                    self.context.palette.cell_empty,
                );
            }
        }
    }

    fn draw_enemy(&self, img: &mut RgbaImage, enemy: &Enemy) {
        let levels = &self.context.palette.levels;
        let color = levels[(enemy.health as usize).clamp(1, levels.len()) - 1];
        let (x, y) = self.cell_origin(enemy.x as f32, enemy.y as f32);
        let (x, y) = (x as i32, y as i32);
        raster::fill_rect(
            img,
            x + 1,
            y + 1,
            x + self.context.cell_size - 2,
            y + self.context.cell_size - 2,
            color,
        );
    }

    fn draw_bullet(&self, img: &mut RgbaImage, bullet: &Bullet, trail: u32) {
        let cell = self.context.cell_size;
        let color = self.context.palette.bullet;
        let (x, y) = self.cell_origin(bullet.x as f32, bullet.y);
        let cx = x as i32 + cell / 2;
        let head_y = y as i32;

        // Bright head with a fading trail below.
        raster::fill_rect(img, cx - 1, head_y, cx, head_y + cell / 2, color);
        for i in 1..=trail as i32 {
            let alpha = 180 / (i as u32 + 1);
            let seg = rgba(color[0], color[1], color[2], alpha as u8);
            let sy = head_y + cell / 2 + (i - 1) * (cell / 3) + 1;
            raster::fill_rect(img, cx - 1, sy, cx, sy + cell / 3 - 1, seg);
        }
    }

    fn draw_explosion(&self, img: &mut RgbaImage, explosion: &Explosion) {
        let progress = explosion.progress();
        let fade = 1.0 - progress;
        let base = self.context.palette.bullet;
        let color = rgba(base[0], base[1], base[2], (255.0 * fade) as u8);

        let (x, y) = self.cell_origin(explosion.x, explosion.y);
        let cell = self.context.cell_size;
        let cx = x as i32 + cell / 2;
        let cy = y as i32 + cell / 2;

        // Particles expand diagonally from the center and shrink as they go;
        // the second batch of a large burst forms an inner ring.
        for i in 0..explosion.spec.particle_count {
            let ring = if i < 4 { 1.0 } else { 0.5 };
            let distance = progress * explosion.spec.max_radius as f32 * ring;
            let dx = if i % 2 == 0 { -distance } else { distance };
            let dy = if (i / 2) % 2 == 0 { -distance } else { distance };
            let px = cx + dx as i32;
            let py = cy + dy as i32;
            let size = ((1.0 - progress * 0.5) * 3.0) as i32 + 1;
            raster::fill_rect(img, px - size, py - size, px + size, py + size, color);
        }
    }

    fn draw_ship(&self, img: &mut RgbaImage, ship: &Ship) {
        let base = self.context.palette.ship;
        let (x, y) = self.cell_origin(ship.x, self.ship_row as f32);
        let size = self.context.cell_size as f32;
        let cx = x + size / 2.0;

        // Engine glow under the hull.
        let glow = lighten(base, 45);
        raster::fill_ellipse(
            img,
            (cx - 3.0) as i32,
            (y + size - 4.0) as i32,
            (cx + 3.0) as i32,
            (y + size + 2.0) as i32,
            glow,
        );

        // Swept wings.
        let wing = lighten(base, -30);
        raster::fill_polygon(
            img,
            &[
                (cx - 2.0, y + size * 0.4),
                (x - 2.0, y + size * 0.7),
                (x + 2.0, y + size * 0.8),
            ],
            wing,
        );
        raster::fill_polygon(
            img,
            &[
                (cx + 2.0, y + size * 0.4),
                (x + size + 2.0, y + size * 0.7),
                (x + size - 2.0, y + size * 0.8),
            ],
            wing,
        );

        // Hull in three segments, nose brightest.
        raster::fill_polygon(
            img,
            &[
                (cx, y),
                (cx - 4.0, y + size * 0.35),
                (cx + 4.0, y + size * 0.35),
            ],
            lighten(base, 30),
        );
        raster::fill_polygon(
            img,
            &[
                (cx - 4.0, y + size * 0.35),
                (cx + 4.0, y + size * 0.35),
                (cx + 5.0, y + size * 0.7),
                (cx - 5.0, y + size * 0.7),
            ],
            base,
        );
        raster::fill_polygon(
            img,
            &[
                (cx - 5.0, y + size * 0.7),
                (cx + 5.0, y + size * 0.7),
                (cx + 4.0, y + size),
                (cx - 4.0, y + size),
            ],
            lighten(base, -20),
        );

        // Cockpit accent.
        raster::fill_ellipse(
            img,
            (cx - 2.0) as i32,
            (y + size * 0.25) as i32,
            (cx + 2.0) as i32,
            (y + size * 0.45) as i32,
            lighten(base, 80),
        );
    }
}

//! Terminal rendering of the scene.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use stardrift_core::{CellSize, Point};

use crate::chars::{COMET_HEAD, COMET_TAIL_CHARS, STAR_CHARS, STAR_FLARE};
use crate::color::shade;
use crate::scene::Scene;
use crate::sprite::{Sprite, SpriteKind};

/// Below this opacity a cell is left blank.
const MIN_VISIBLE_OPACITY: f64 = 0.05;

/// A single drawn cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub color: Color,
}

/// Widget drawing a [`Scene`] as a full-area background.
#[derive(Debug)]
pub struct SceneWidget<'a> {
    scene: &'a Scene,
    cell: CellSize,
}

impl<'a> SceneWidget<'a> {
    pub fn new(scene: &'a Scene, cell: CellSize) -> Self {
        Self { scene, cell }
    }
}

impl Widget for SceneWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = rasterize(&self.scene.sprites(), area.width, area.height, self.cell);

        let lines: Vec<Line> = grid
            .chunks(area.width.max(1) as usize)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|glyph| match glyph {
                        Some(g) => Span::styled(g.ch.to_string(), Style::new().fg(g.color)),
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}

/// Rasterize sprites into a row-major `cols` x `rows` grid. Later sprites
/// overwrite earlier ones.
pub fn rasterize(sprites: &[Sprite], cols: u16, rows: u16, cell: CellSize) -> Vec<Option<Glyph>> {
    let mut grid = vec![None; cols as usize * rows as usize];
    for sprite in sprites.iter().filter(|s| s.is_visible()) {
        match sprite.kind {
            SpriteKind::Star => draw_star(&mut grid, sprite, cols, rows, cell),
            SpriteKind::Comet => draw_comet(&mut grid, sprite, cols, rows, cell),
        }
    }
    grid
}

fn draw_star(grid: &mut [Option<Glyph>], sprite: &Sprite, cols: u16, rows: u16, cell: CellSize) {
    let Some((x, y)) = cell.cell_at(sprite.center(), cols, rows) else {
        return;
    };

    // Sizes run 1..3px, one glyph per third of that range.
    let idx = (((sprite.width - 1.0) * 1.5).floor().max(0.0) as usize).min(STAR_CHARS.len() - 1);
    let ch = if idx == STAR_CHARS.len() - 1 && sprite.brightness > 1.25 {
        STAR_FLARE
    } else {
        STAR_CHARS[idx]
    };

    grid[y as usize * cols as usize + x as usize] = Some(Glyph {
        ch,
        color: shade(sprite.rgb, sprite.opacity, sprite.brightness),
    });
}

fn draw_comet(grid: &mut [Option<Glyph>], sprite: &Sprite, cols: u16, rows: u16, cell: CellSize) {
    let cell_width = f64::from(cell.width.max(1));
    let length = (sprite.width / cell_width).ceil().max(1.0) as usize;
    let row_y = sprite.center().y;

    // Brightest at the leading edge, fading across the streak.
    for i in 0..length {
        let fade = 1.0 - i as f64 / length as f64;
        let opacity = sprite.opacity * fade;
        if opacity < MIN_VISIBLE_OPACITY {
            continue;
        }
        let point = Point::new(sprite.position.x + i as f64 * cell_width, row_y);
        let Some((x, y)) = cell.cell_at(point, cols, rows) else {
            continue;
        };

        let ch = if i == 0 {
            COMET_HEAD
        } else {
            let t = (i - 1) * COMET_TAIL_CHARS.len() / length.saturating_sub(1).max(1);
            COMET_TAIL_CHARS[t.min(COMET_TAIL_CHARS.len() - 1)]
        };
        grid[y as usize * cols as usize + x as usize] = Some(Glyph {
            ch,
            color: shade(sprite.rgb, opacity, sprite.brightness),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneOptions;
    use stardrift_core::Viewport;

    fn star_at(x: f64, y: f64, size: f64, brightness: f64) -> Sprite {
        Sprite {
            kind: SpriteKind::Star,
            position: Point::new(x, y),
            width: size,
            height: size,
            rgb: (0xaa, 0xff, 0xff),
            opacity: 1.0,
            brightness,
        }
    }

    fn comet_at(x: f64, y: f64, opacity: f64) -> Sprite {
        Sprite {
            kind: SpriteKind::Comet,
            position: Point::new(x, y),
            width: 30.0,
            height: 9.0,
            rgb: (255, 255, 255),
            opacity,
            brightness: 1.0,
        }
    }

    #[test]
    fn test_star_lands_in_its_cell() {
        let grid = rasterize(&[star_at(20.0, 40.0, 1.0, 1.0)], 10, 5, CellSize::default());
        let glyph = grid[2 * 10 + 2].expect("star is drawn");
        assert_eq!(glyph.ch, '·');
        assert_eq!(glyph.color, Color::Rgb(0xaa, 0xff, 0xff));
        assert_eq!(grid.iter().filter(|g| g.is_some()).count(), 1);
    }

    #[test]
    fn test_star_glyph_by_size() {
        let cell = CellSize::default();
        let grid = rasterize(&[star_at(0.0, 0.0, 2.0, 1.0)], 4, 4, cell);
        assert_eq!(grid[0].map(|g| g.ch), Some('•'));
        let grid = rasterize(&[star_at(0.0, 0.0, 3.0, 1.0)], 4, 4, cell);
        assert_eq!(grid[0].map(|g| g.ch), Some('✦'));
        let grid = rasterize(&[star_at(0.0, 0.0, 3.0, 1.3)], 4, 4, cell);
        assert_eq!(grid[0].map(|g| g.ch), Some(STAR_FLARE));
    }

    #[test]
    fn test_offscreen_star_is_skipped() {
        let grid = rasterize(&[star_at(-50.0, 10.0, 2.0, 1.0)], 4, 4, CellSize::default());
        assert!(grid.iter().all(Option::is_none));
    }

    #[test]
    fn test_comet_streak() {
        let grid = rasterize(&[comet_at(8.0, 12.0, 1.0)], 10, 4, CellSize::default());
        // 30px wide streak over 8px cells covers 4 cells on row 1.
        let row: Vec<Option<char>> = grid[10..20].iter().map(|g| g.map(|g| g.ch)).collect();
        assert_eq!(row[0], None);
        assert_eq!(row[1], Some(COMET_HEAD));
        assert!(row[2..5].iter().all(Option::is_some));
        assert_eq!(row[5], None);
        assert_eq!(grid[11].map(|g| g.color), Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn test_transparent_comet_is_skipped() {
        let grid = rasterize(&[comet_at(8.0, 12.0, 0.0)], 10, 4, CellSize::default());
        assert!(grid.iter().all(Option::is_none));
    }

    #[test]
    fn test_comet_drawn_over_star() {
        let sprites = [star_at(8.0, 16.0, 1.0, 1.0), comet_at(8.0, 12.0, 1.0)];
        let grid = rasterize(&sprites, 10, 4, CellSize::default());
        assert_eq!(grid[11].map(|g| g.ch), Some(COMET_HEAD));
    }

    #[test]
    fn test_widget_renders_stars() {
        let cell = CellSize::default();
        let viewport = Viewport::from_cells(150, 50, cell);
        let mut scene = Scene::new(viewport, SceneOptions::default(), 5);
        scene.tick(0.0);

        let area = Rect::new(0, 0, 150, 50);
        let mut buf = Buffer::empty(area);
        SceneWidget::new(&scene, cell).render(area, &mut buf);

        let drawn = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .filter(|&pos| buf[pos].symbol() != " ")
            .count();
        // A streak of the largest comet spans at most 7 cells.
        assert!(drawn > 0);
        assert!(drawn <= scene.stars().count() + 3 * 7);
    }
}

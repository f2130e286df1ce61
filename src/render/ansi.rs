//! Terminal presenter.
//!
//! Maps percent-coordinate frame elements onto a character grid and emits
//! truecolor ANSI escapes. Good enough to watch the backdrop live in a
//! terminal; a browser front end would consume the same frames.

use crate::backdrop::{Element, ElementKind, Frame};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    color: [f32; 3],
}

const EMPTY: Cell = Cell {
    ch: ' ',
    color: [0.0, 0.0, 0.0],
};

/// A fixed-size character canvas.
pub struct AnsiCanvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl AnsiCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "canvas must have area");
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    fn glyph(kind: ElementKind, opacity: f32) -> char {
        match kind {
            ElementKind::Sun => '@',
            ElementKind::Planet => 'O',
            ElementKind::Star => {
                if opacity > 0.7 {
                    '+'
                } else {
                    '.'
                }
            }
            ElementKind::NebulaPatch => '~',
            ElementKind::GridLine => '·',
            ElementKind::Shape => '*',
        }
    }

    fn plot(&mut self, x_pct: f32, y_pct: f32, ch: char, color: [f32; 3]) {
        let x = (x_pct / 100.0 * self.width as f32) as isize;
        let y = (y_pct / 100.0 * self.height as f32) as isize;
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = Cell { ch, color };
    }

    fn draw_element(&mut self, e: &Element) {
        // Dim elements disappear rather than cluttering the grid
        if e.opacity < 0.05 {
            return;
        }
        let color = [
            e.color[0] * e.opacity,
            e.color[1] * e.opacity,
            e.color[2] * e.opacity,
        ];
        let ch = Self::glyph(e.kind, e.opacity);

        match e.kind {
            ElementKind::GridLine if e.rotation == 90.0 => {
                // Vertical line: sparse dots down the column
                let mut y = 0.0;
                while y < 100.0 {
                    self.plot(e.pos.x, y, ch, color);
                    y += 100.0 / 8.0;
                }
            }
            ElementKind::GridLine => {
                let mut x = 0.0;
                while x < 100.0 {
                    self.plot(x, e.pos.y, ch, color);
                    x += 100.0 / 16.0;
                }
            }
            _ => self.plot(e.pos.x, e.pos.y, ch, color),
        }
    }

    /// Draw a frame. Elements are painted in order, so later elements in
    /// the frame overwrite earlier ones in shared cells.
    pub fn draw(&mut self, frame: &Frame) {
        self.cells.fill(EMPTY);
        for e in &frame.elements {
            self.draw_element(e);
        }
    }

    /// Render the canvas as a truecolor ANSI string.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 16);
        for row in self.cells.chunks(self.width) {
            for cell in row {
                if cell.ch == ' ' {
                    out.push(' ');
                } else {
                    let [r, g, b] = cell.color.map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8);
                    out.push_str(&format!("\x1b[38;2;{r};{g};{b}m{}\x1b[0m", cell.ch));
                }
            }
            out.push('\n');
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

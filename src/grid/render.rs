use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cell, Grid};

/// Characters used to draw a grid as text.
///
/// Every cell is drawn three characters wide, followed by its east wall, and one line tall,
/// followed by its south wall line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Charset {
    pub wall: char,
    pub open: char,
}

impl Charset {
    pub const BLOCK: Charset = Charset {
        wall: '█',
        open: ' ',
    };

    pub const ASCII: Charset = Charset {
        wall: '#',
        open: ' ',
    };

    fn wall_or_open(&self, open: bool) -> char {
        if open {
            self.open
        } else {
            self.wall
        }
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::BLOCK
    }
}

const CELL_WIDTH: usize = 3;

fn push_n(out: &mut String, ch: char, n: usize) {
    out.extend(std::iter::repeat(ch).take(n));
}

impl Grid {
    /// Renders the grid with the given characters.
    ///
    /// The output starts with a full top border. Each grid row then adds one line with the cell
    /// bodies and east walls and one line with the south walls. Walls are left out exactly where
    /// cells are linked to their east or south neighbor. There's no trailing newline.
    pub fn render(&self, charset: &Charset) -> String {
        // each cell takes 4 columns and 2 lines, plus the left and top borders
        let capacity = (CELL_WIDTH + 1)
            .checked_mul(self.width())
            .and_then(|len| len.checked_add(2))
            .zip(self.height().checked_mul(2).and_then(|h| h.checked_add(1)))
            .and_then(|(line_len, lines)| line_len.checked_mul(lines))
            .unwrap_or(0);
        let mut out = String::with_capacity(capacity);

        out.push(charset.wall);
        push_n(&mut out, charset.wall, (CELL_WIDTH + 1) * self.width());

        for row in self.rows() {
            out.push('\n');
            render_body(&mut out, row, charset);
            out.push('\n');
            render_floor(&mut out, row, charset);
        }

        out
    }
}

fn render_body(out: &mut String, row: &[Cell], charset: &Charset) {
    out.push(charset.wall);
    for cell in row {
        push_n(out, charset.open, CELL_WIDTH);
        out.push(charset.wall_or_open(cell.is_linked(cell.east())));
    }
}

fn render_floor(out: &mut String, row: &[Cell], charset: &Charset) {
    out.push(charset.wall);
    for cell in row {
        let ch = charset.wall_or_open(cell.is_linked(cell.south()));
        push_n(out, ch, CELL_WIDTH);
        out.push(charset.wall);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Charset::default()))
    }
}

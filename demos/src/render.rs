//! Terminal rendering of a grid, its endpoints and a path.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use gridstar_core::{GridEnv, Position};
use gridstar_paths::Path;

/// What a single grid cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Open,
    Wall,
    Path,
    Start,
    Goal,
}

impl Glyph {
    pub fn ch(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
            Self::Path => '*',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Open => Color::DarkGrey,
            Self::Wall => Color::Grey,
            Self::Path => Color::Blue,
            Self::Start => Color::Green,
            Self::Goal => Color::Red,
        }
    }
}

/// Lay out one glyph per cell, row by row. Endpoints win over the path.
pub fn glyphs(
    grid: &GridEnv,
    start: Position,
    goal: Position,
    path: Option<&Path>,
) -> Vec<Vec<Glyph>> {
    let mut rows: Vec<Vec<Glyph>> = (0..grid.rows())
        .map(|r| {
            (0..grid.cols())
                .map(|c| {
                    if grid.is_traversable(Position::new(r, c)) {
                        Glyph::Open
                    } else {
                        Glyph::Wall
                    }
                })
                .collect()
        })
        .collect();

    let mut put = |p: Position, g: Glyph| {
        if grid.in_bounds(p) {
            rows[p.row as usize][p.col as usize] = g;
        }
    };
    if let Some(path) = path {
        for &p in path {
            put(p, Glyph::Path);
        }
    }
    put(start, Glyph::Start);
    put(goal, Glyph::Goal);
    rows
}

/// Write the grid with colours to `out`, one line per row.
pub fn render(
    out: &mut impl Write,
    grid: &GridEnv,
    start: Position,
    goal: Position,
    path: Option<&Path>,
) -> io::Result<()> {
    for row in glyphs(grid, start, goal, path) {
        let mut last = None;
        for g in row {
            let color = g.color();
            if last != Some(color) {
                queue!(out, SetForegroundColor(color))?;
                last = Some(color);
            }
            queue!(out, Print(g.ch()))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    out.flush()
}

/// Whether a grid with `cols` columns fits the current terminal width.
///
/// Non-terminal outputs are treated as wide enough.
pub fn fits_terminal(cols: i32) -> bool {
    match crossterm::terminal::size() {
        Ok((w, _)) => cols <= w as i32,
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_paths::find_path;

    fn text(rows: &[Vec<Glyph>]) -> Vec<String> {
        rows.iter()
            .map(|r| r.iter().map(|g| g.ch()).collect())
            .collect()
    }

    #[test]
    fn glyphs_without_path() {
        let grid = GridEnv::parse("..#\n...").unwrap();
        let rows = glyphs(&grid, Position::new(0, 0), Position::new(1, 2), None);
        assert_eq!(text(&rows), vec!["S.#", "..G"]);
    }

    #[test]
    fn glyphs_with_path() {
        let grid = GridEnv::parse("..#\n...").unwrap();
        let (start, goal) = (Position::new(0, 0), Position::new(1, 2));
        let path = find_path(&grid, start, goal).unwrap().unwrap();
        let rows = glyphs(&grid, start, goal, Some(&path));
        assert_eq!(text(&rows), vec!["S.#", "**G"]);
    }

    #[test]
    fn render_writes_every_cell() {
        let grid = GridEnv::parse(".#\n..").unwrap();
        let mut buf = Vec::new();
        render(&mut buf, &grid, Position::new(0, 0), Position::new(1, 1), None).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.contains('S'));
        assert!(s.contains('#'));
        assert!(s.contains('G'));
        assert_eq!(s.matches('\n').count(), 2);
    }
}

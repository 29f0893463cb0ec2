use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, ContentStyle, Print, PrintStyledContent},
};
use mazecore::{CellState, Grid};

use crate::settings::ColorScheme;

/// Every cell takes two columns, so the maze keeps roughly square proportions.
pub const CELL_WIDTH: u16 = 2;

pub fn term_size() -> (u16, u16) {
    crossterm::terminal::size().unwrap_or((100, 100))
}

/// Draws grids to any writer, two characters per cell.
#[derive(Debug, Clone)]
pub struct Renderer {
    scheme: ColorScheme,
    plain: bool,
}

impl Renderer {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            plain: false,
        }
    }

    /// Renderer without any escape sequences.
    pub fn plain() -> Self {
        Self {
            scheme: ColorScheme::default(),
            plain: true,
        }
    }

    pub fn glyph(state: CellState) -> &'static str {
        match state {
            CellState::Wall => "██",
            CellState::Path => "  ",
            CellState::Start => "S ",
            CellState::Exit => "E ",
            CellState::Solution => "**",
        }
    }

    fn style(&self, state: CellState) -> Option<ContentStyle> {
        let (color, bold) = match state {
            CellState::Wall => (self.scheme.wall, false),
            CellState::Path => return None,
            CellState::Start => (self.scheme.start, true),
            CellState::Exit => (self.scheme.exit, true),
            CellState::Solution => (self.scheme.solution, true),
        };

        let mut style = ContentStyle {
            foreground_color: Some(color),
            ..Default::default()
        };
        if bold {
            style.attributes.set(Attribute::Bold);
        }
        Some(style)
    }

    pub fn render(&self, grid: &Grid, out: &mut impl Write) -> io::Result<()> {
        let (term_width, _) = term_size();
        if grid.width() as u32 * CELL_WIDTH as u32 > term_width as u32 {
            log::warn!(
                "Maze is {} columns wide, terminal has only {}",
                grid.width() * CELL_WIDTH as i32,
                term_width
            );
        }

        for row in grid.rows() {
            for &state in row {
                let glyph = Self::glyph(state);
                match self.style(state).filter(|_| !self.plain) {
                    Some(style) => queue!(out, PrintStyledContent(style.apply(glyph)))?,
                    None => queue!(out, Print(glyph))?,
                }
            }
            queue!(out, Print("\n"))?;
        }

        out.flush()
    }

    pub fn header(&self, title: &str, legend: &str, out: &mut impl Write) -> io::Result<()> {
        const RULE: &str = "===========================================";

        writeln!(out, "{}", RULE)?;
        writeln!(out, " {}", title)?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "{}", legend)?;
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(renderer: &Renderer, grid: &Grid) -> String {
        let mut out = Vec::new();
        renderer.render(grid, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_rendering() {
        let grid: Grid = "#####\n#S*E#\n#####".parse().unwrap();
        let text = render_to_string(&Renderer::plain(), &grid);

        assert_eq!(
            text,
            "██████████\n██S **E ██\n██████████\n"
        );
    }

    #[test]
    fn colored_rendering_uses_escapes() {
        let grid: Grid = "###\n#S#\n###".parse().unwrap();
        let text = render_to_string(&Renderer::new(ColorScheme::default()), &grid);

        assert!(text.contains('\x1b'));
        assert!(text.contains("S "));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn scheme_colors_everything_but_open_paths() {
        let scheme = ColorScheme::default();
        let renderer = Renderer::new(scheme.clone());

        assert!(renderer.style(CellState::Path).is_none());
        for (state, color) in [
            (CellState::Wall, scheme.wall),
            (CellState::Start, scheme.start),
            (CellState::Exit, scheme.exit),
            (CellState::Solution, scheme.solution),
        ] {
            assert_eq!(renderer.style(state).unwrap().foreground_color, Some(color));
        }
    }

    #[test]
    fn every_state_has_a_two_column_glyph() {
        for state in [
            CellState::Wall,
            CellState::Path,
            CellState::Start,
            CellState::Exit,
            CellState::Solution,
        ] {
            assert_eq!(Renderer::glyph(state).chars().count(), CELL_WIDTH as usize);
        }
    }

    #[test]
    fn header_layout() {
        let mut out = Vec::new();
        Renderer::plain()
            .header("Generated Maze", "S: Start | E: Exit", &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], " Generated Maze");
        assert_eq!(lines[3], "S: Start | E: Exit");
    }
}

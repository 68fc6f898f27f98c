use super::grid::{Glyphs, Grid};
use std::io::{self, Write};

/// Writes generations as blocks of ASCII art.
///
/// A frame is a `Step <n>:` header, one line per logical row, and a blank
/// separator line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    glyphs: Glyphs,
}

impl TextRenderer {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    pub fn render_frame<const W: usize, const H: usize>(
        &self,
        step: u64,
        grid: &Grid<W, H>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        writeln!(out, "Step {}:", step)?;
        for row in grid.to_text_with(self.glyphs) {
            writeln!(out, "{}", row)?;
        }
        writeln!(out)
    }
}

//! Character-grid rendering for terminals.

use std::fmt;

use crate::error::RenderError;
use plat_area::{Area, CellView};
use plat_core::{GroupId, ZoneId};

/// Renders an [`Area`] as one character per cell.
///
/// Empty cells use the first palette character. Zone cells cycle through
/// the rest of the palette by zone id, so adjacent zones usually differ.
/// With colour on, each zone cell is wrapped in an ANSI bright-colour
/// escape chosen by its group, making groups visible at a glance.
///
/// # Examples
///
/// ```
/// use plat_area::{Area, AreaConfig, SeededSource};
/// use plat_render::TextRenderer;
///
/// let mut area = Area::new(4, 6, AreaConfig::default()).unwrap();
/// area.generate(&mut SeededSource::new(1)).unwrap();
///
/// let text = TextRenderer::new().colour(false).border(true).render(&area);
/// assert_eq!(text.lines().count(), 6);
/// assert!(text.starts_with("+------+"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRenderer {
    palette: Vec<char>,
    border: bool,
    colour: bool,
}

impl TextRenderer {
    /// Empty cells as spaces, zones cycling through digits then letters.
    pub const DEFAULT_PALETTE: &'static str = " 0123456789abcdefghijklmnopqrstuvwxyz";

    /// Default palette, no border, colour on.
    pub fn new() -> Self {
        Self {
            palette: Self::DEFAULT_PALETTE.chars().collect(),
            border: false,
            colour: true,
        }
    }

    /// Replace the palette. The first character draws empty cells.
    pub fn with_palette(mut self, palette: &str) -> Result<Self, RenderError> {
        let palette: Vec<char> = palette.chars().collect();
        if palette.len() < 2 {
            return Err(RenderError::PaletteTooShort { len: palette.len() });
        }
        self.palette = palette;
        Ok(self)
    }

    /// Frame the drawing with `+---+` lines and `|` sides.
    pub fn border(mut self, on: bool) -> Self {
        self.border = on;
        self
    }

    /// Wrap zone cells in ANSI colour escapes.
    pub fn colour(mut self, on: bool) -> Self {
        self.colour = on;
        self
    }

    /// Render into a `String`, rows separated by `\n`, no trailing newline.
    pub fn render(&self, area: &Area) -> String {
        self.display(area).to_string()
    }

    /// A [`Display`](fmt::Display) adapter, for writing straight into a
    /// formatter or stream without an intermediate `String`.
    pub fn display<'a>(&'a self, area: &'a Area) -> TextView<'a> {
        TextView {
            renderer: self,
            area,
        }
    }

    fn glyph(&self, zone: ZoneId) -> char {
        let cycle = self.palette.len() - 1;
        let index = 1 + zone.0 as usize % cycle;
        self.palette[index]
    }

    fn write_cell(&self, f: &mut fmt::Formatter<'_>, cell: CellView) -> fmt::Result {
        match cell {
            CellView::Empty => write!(f, "{}", self.palette[0]),
            CellView::Zone { zone, group } if self.colour => {
                write!(f, "\x1b[{}m{}\x1b[0m", colour_code(group), self.glyph(zone))
            }
            CellView::Zone { zone, .. } => write!(f, "{}", self.glyph(zone)),
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// ANSI bright foreground code for a group: 90 through 99.
fn colour_code(group: GroupId) -> u32 {
    90 + group.0 % 10
}

/// Borrowed rendering of an [`Area`]; see [`TextRenderer::display`].
#[derive(Clone, Copy, Debug)]
pub struct TextView<'a> {
    renderer: &'a TextRenderer,
    area: &'a Area,
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let renderer = self.renderer;
        let width = self.area.width();
        if renderer.border {
            write_rule(f, width)?;
            f.write_str("\n")?;
        }
        for (index, row) in self.area.rows().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            if renderer.border {
                f.write_str("|")?;
            }
            for cell in row {
                renderer.write_cell(f, cell)?;
            }
            if renderer.border {
                f.write_str("|")?;
            }
        }
        if renderer.border {
            f.write_str("\n")?;
            write_rule(f, width)?;
        }
        Ok(())
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, width: u32) -> fmt::Result {
    f.write_str("+")?;
    for _ in 0..width {
        f.write_str("-")?;
    }
    f.write_str("+")
}

/// Default palette with a border and colour, the way a terminal demo
/// prints an area.
pub fn render_text(area: &Area) -> String {
    TextRenderer::new().border(true).render(area)
}

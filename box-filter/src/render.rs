//! Textual forms of a [`Mask`].
//!
//! The text output is a glyph block followed by a flat list:
//!
//! ```text
//! ===
//! .*.
//! ***
//! .*.
//! ===
//! 3,3,0,1,0,1,1,1,0,1,0
//! ```

use std::{
    fmt::{self, Write as _},
    io,
};

use serde::Serialize;

use crate::{Density, Mask, MaskParams};

pub const ON_GLYPH: char = '*';
pub const OFF_GLYPH: char = '.';
pub const BORDER_GLYPH: char = '=';

/// The mask drawn with one glyph per cell between two `=` borders.
pub struct GlyphGrid<'a>(pub &'a Mask);

impl fmt::Display for GlyphGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.0.diameter().as_usize();
        let border: String = std::iter::repeat_n(BORDER_GLYPH, d).collect();
        writeln!(f, "{border}")?;
        for row in self.0.rows() {
            for &on in row {
                f.write_char(if on { ON_GLYPH } else { OFF_GLYPH })?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{border}")
    }
}

/// `d,d` followed by every cell value, row-major, on a single line without a
/// line terminator.
pub struct FlatList<'a>(pub &'a Mask);

impl fmt::Display for FlatList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.0.diameter();
        write!(f, "{d},{d}")?;
        for v in self.0.values() {
            write!(f, ",{v}")?;
        }
        Ok(())
    }
}

/// Writes the glyph block and the flat list, each line newline terminated.
pub fn write_text(mut w: impl io::Write, mask: &Mask) -> io::Result<()> {
    write!(w, "{}", GlyphGrid(mask))?;
    writeln!(w, "{}", FlatList(mask))
}

/// Serializable snapshot of a mask and the params that produced it.
#[derive(Debug, Serialize)]
pub struct MaskDump {
    pub width: u32,
    pub height: u32,
    pub density: Density,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub on_count: usize,
    pub cells: Vec<u8>,
}

impl MaskDump {
    #[must_use]
    pub fn new(params: &MaskParams, mask: &Mask) -> Self {
        let d = mask.diameter().get();
        Self {
            width: d,
            height: d,
            density: params.density,
            inner_radius: params.band.inner,
            outer_radius: params.band.outer,
            on_count: mask.on_count(),
            cells: mask.values().collect(),
        }
    }
}

/// Writes [`MaskDump`] as pretty JSON followed by a newline.
pub fn write_json(
    mut w: impl io::Write,
    params: &MaskParams,
    mask: &Mask,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut w, &MaskDump::new(params, mask))?;
    writeln!(w)
}

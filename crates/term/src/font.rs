//! Bitmap font faces and text drawing.
//!
//! Two text paths exist, mirroring how the demos use them:
//!
//! - [`debug_print`] draws with a compiled-in 5x7 font and a drop shadow.
//!   No file I/O; always available (used by the hello demo's overlay).
//! - [`FontFace`] is loaded once at startup from a JSON glyph-table resource
//!   and drawn without a shadow. Loading is fatal on failure by design:
//!   there is no degraded rendering mode without the face.
//!
//! Glyph bitmaps are row-major bit masks up to 8 pixels wide. Faces carry an
//! integer scale that multiplies glyph size and advance, which is how the
//! "large" face of the font demo is derived from the base face.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use tui_pixels_types::Rgba;

use crate::canvas::Canvas;

/// Builtin debug glyph width in pixels.
pub const DEBUG_GLYPH_WIDTH: u32 = 5;

/// Builtin debug glyph height in pixels.
pub const DEBUG_GLYPH_HEIGHT: u32 = 7;

/// Return the builtin 5x7 glyph bitmap for a character.
///
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
/// Lowercase letters reuse the uppercase shapes.
fn builtin_glyph(ch: char) -> Option<[u8; 7]> {
    macro_rules! g {
        ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
            Some([$a, $b, $c, $d, $e, $f, $g])
        };
    }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110),
        '1' => g!(0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        '2' => g!(0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111),
        '3' => g!(0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110),
        '4' => g!(0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010),
        '5' => g!(0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110),
        '6' => g!(0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110),
        '7' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000),
        '8' => g!(0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110),
        '9' => g!(0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100),

        'A' => g!(0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'B' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110),
        'C' => g!(0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110),
        'D' => g!(0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100),
        'E' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111),
        'F' => g!(0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000),
        'G' => g!(0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111),
        'H' => g!(0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001),
        'I' => g!(0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110),
        'J' => g!(0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100),
        'K' => g!(0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001),
        'L' => g!(0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111),
        'M' => g!(0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001),
        'N' => g!(0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001),
        'O' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'P' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000),
        'Q' => g!(0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101),
        'R' => g!(0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001),
        'S' => g!(0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110),
        'T' => g!(0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100),
        'U' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110),
        'V' => g!(0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100),
        'W' => g!(0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001),
        'X' => g!(0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001),
        'Y' => g!(0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100),
        'Z' => g!(0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111),

        ' ' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000),
        '.' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000),
        ',' => g!(0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00100, 0b01000),
        ':' => g!(0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000),
        '!' => g!(0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100),
        '?' => g!(0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100),
        '=' => g!(0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000),
        '-' => g!(0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000),
        '|' => g!(0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100),

        _ => None,
    }
}

/// Draw a debug string with the builtin font at the canvas top-left corner.
///
/// Glyphs are white over a 1-pixel black shadow so the text stays readable
/// on any canvas content. Characters without a glyph still advance the pen.
pub fn debug_print(canvas: &mut Canvas, text: &str) {
    let mut x: i32 = 1;
    let y: i32 = 1;
    for ch in text.chars() {
        if let Some(rows) = builtin_glyph(ch) {
            draw_debug_glyph(canvas, x, y, &rows);
        }
        x += (DEBUG_GLYPH_WIDTH + 1) as i32;
    }
}

fn draw_debug_glyph(canvas: &mut Canvas, x: i32, y: i32, rows: &[u8; 7]) {
    // Shadow pass first so the foreground never gets overdrawn.
    for (ry, bits) in rows.iter().enumerate() {
        for rx in 0..DEBUG_GLYPH_WIDTH {
            if bits & (1 << (DEBUG_GLYPH_WIDTH - 1 - rx)) != 0 {
                canvas.put_signed(x + rx as i32 + 1, y + ry as i32 + 1, Rgba::BLACK);
            }
        }
    }
    for (ry, bits) in rows.iter().enumerate() {
        for rx in 0..DEBUG_GLYPH_WIDTH {
            if bits & (1 << (DEBUG_GLYPH_WIDTH - 1 - rx)) != 0 {
                canvas.put_signed(x + rx as i32, y + ry as i32, Rgba::WHITE);
            }
        }
    }
}

/// Errors raised while loading a font resource.
///
/// All of them are fatal at startup: a demo that needs a face cannot run
/// without one.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("read font {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse font {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid font {}: {}", .path.display(), .reason)]
    Invalid { path: PathBuf, reason: String },
}

/// On-disk shape of a font resource.
#[derive(Debug, Deserialize)]
struct FontFile {
    name: String,
    glyph_width: u32,
    glyph_height: u32,
    glyphs: BTreeMap<String, Vec<u8>>,
}

/// An immutable bitmap font face.
///
/// Loaded once at startup and shared read-only by every draw call. Faces are
/// cheap to clone; [`FontFace::scaled`] derives larger faces from the same
/// glyph table.
#[derive(Debug, Clone)]
pub struct FontFace {
    name: String,
    glyph_width: u32,
    glyph_height: u32,
    scale: u32,
    glyphs: HashMap<char, Vec<u8>>,
}

impl FontFace {
    /// Load a face from a JSON glyph-table file.
    pub fn load(path: impl AsRef<Path>) -> Result<FontFace, FontError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FontFile = serde_json::from_str(&data).map_err(|source| FontError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_file(file).map_err(|reason| FontError::Invalid {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn from_file(file: FontFile) -> Result<FontFace, String> {
        if file.glyph_width == 0 || file.glyph_width > 8 {
            return Err(format!(
                "glyph_width {} not in 1..=8 (rows are u8 bit masks)",
                file.glyph_width
            ));
        }
        if file.glyph_height == 0 {
            return Err("glyph_height must be at least 1".to_owned());
        }

        let mut glyphs = HashMap::with_capacity(file.glyphs.len());
        for (key, rows) in file.glyphs {
            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => return Err(format!("glyph key {key:?} is not a single character")),
            };
            if rows.len() != file.glyph_height as usize {
                return Err(format!(
                    "glyph {ch:?} has {} rows, expected {}",
                    rows.len(),
                    file.glyph_height
                ));
            }
            let width_mask = !((1u16 << file.glyph_width) - 1) as u8;
            if let Some(bad) = rows.iter().find(|&&row| row & width_mask != 0) {
                return Err(format!(
                    "glyph {ch:?} row {bad:#010b} has pixels past column {}",
                    file.glyph_width
                ));
            }
            glyphs.insert(ch, rows);
        }

        Ok(FontFace {
            name: file.name,
            glyph_width: file.glyph_width,
            glyph_height: file.glyph_height,
            scale: 1,
            glyphs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Derive a face with the pixel scale multiplied by `factor`.
    pub fn scaled(&self, factor: u32) -> FontFace {
        let mut face = self.clone();
        face.scale = self.scale * factor.max(1);
        face
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Horizontal pen advance per character, in pixels.
    pub fn advance(&self) -> u32 {
        (self.glyph_width + 1) * self.scale
    }

    /// Vertical distance between stacked lines, in pixels.
    pub fn line_height(&self) -> u32 {
        (self.glyph_height + 1) * self.scale
    }

    /// Look up a glyph, falling back from lowercase to uppercase.
    fn glyph(&self, ch: char) -> Option<&[u8]> {
        if let Some(rows) = self.glyphs.get(&ch) {
            return Some(rows);
        }
        self.glyphs.get(&ch.to_ascii_uppercase()).map(Vec::as_slice)
    }

    /// Draw one line of text with its top-left corner at (x, y).
    ///
    /// Characters without a glyph are skipped but still advance the pen.
    pub fn draw_text(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Rgba) {
        let mut pen_x = x;
        for ch in text.chars() {
            if let Some(rows) = self.glyph(ch) {
                self.draw_glyph(canvas, pen_x, y, rows, color);
            }
            pen_x += self.advance() as i32;
        }
    }

    fn draw_glyph(&self, canvas: &mut Canvas, x: i32, y: i32, rows: &[u8], color: Rgba) {
        for (ry, &bits) in rows.iter().enumerate() {
            for rx in 0..self.glyph_width {
                if bits & (1 << (self.glyph_width - 1 - rx)) == 0 {
                    continue;
                }
                // One font pixel becomes a scale x scale block.
                let px = x + (rx * self.scale) as i32;
                let py = y + (ry as u32 * self.scale) as i32;
                for dy in 0..self.scale {
                    for dx in 0..self.scale {
                        canvas.put_signed(px + dx as i32, py + dy as i32, color);
                    }
                }
            }
        }
    }
}

impl fmt::Display for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}x{} @ {}x)",
            self.name, self.glyph_width, self.glyph_height, self.scale
        )
    }
}

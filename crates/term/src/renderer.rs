//! PixelRenderer: flushes a canvas to a real terminal.
//!
//! Each terminal cell shows two vertically stacked canvas pixels through the
//! upper-half-block glyph: foreground color = top pixel, background color =
//! bottom pixel. Canvases wider or taller than the terminal are clipped.
//!
//! Drawing diffs against the previously flushed canvas and only touches
//! cells whose pixel pair changed; callers invalidate on terminal resize to
//! force a full redraw.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use tui_pixels_types::Rgba;

use crate::canvas::Canvas;

/// Upper half block: paints the cell's top half in the foreground color and
/// leaves the bottom half to the background color.
const HALF_BLOCK: char = '\u{2580}';

pub struct PixelRenderer {
    stdout: io::Stdout,
    last: Option<Canvas>,
}

impl PixelRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    /// Enter raw mode and the alternate screen, set the window title, and
    /// (best-effort) resize the terminal to the preferred cell size.
    pub fn enter(&mut self, title: &str, preferred_size: Option<(u16, u16)>) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.queue(terminal::SetTitle(title))?;
        if let Some((cols, rows)) = preferred_size {
            // Many terminals refuse programmatic resizes; clipping handles
            // whatever size we actually get.
            let _ = self.stdout.queue(terminal::SetSize(cols, rows));
        }
        self.stdout.flush()?;
        Ok(())
    }

    /// Always restore the terminal, even after errors.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush a canvas to the terminal.
    pub fn draw(&mut self, canvas: &Canvas) -> Result<()> {
        let (term_cols, term_rows) = terminal::size().unwrap_or((80, 24));
        let cols = (term_cols as u32).min(canvas.width());
        let rows = (term_rows as u32).min(canvas.height().div_ceil(2));

        let needs_full = match &self.last {
            None => true,
            Some(prev) => prev.width() != canvas.width() || prev.height() != canvas.height(),
        };

        if needs_full {
            self.full_redraw(canvas, cols, rows)?;
        } else {
            // Take previous out to avoid borrow conflicts (no cloning).
            let prev = self.last.take().unwrap();
            self.diff_redraw(canvas, &prev, cols, rows)?;
            self.last = Some(prev);
        }

        // Keep a copy of what is on screen, reusing the old allocation.
        match &mut self.last {
            Some(prev) => prev.clone_from(canvas),
            None => self.last = Some(canvas.clone()),
        }
        Ok(())
    }

    fn full_redraw(&mut self, canvas: &Canvas, cols: u32, rows: u32) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut current: Option<(Rgba, Rgba)> = None;
        for cy in 0..rows {
            self.stdout.queue(cursor::MoveTo(0, cy as u16))?;
            for cx in 0..cols {
                let pair = pixel_pair(canvas, cx, cy);
                self.apply_pair(pair, &mut current)?;
                self.stdout.queue(Print(HALF_BLOCK))?;
            }
        }
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn diff_redraw(&mut self, canvas: &Canvas, prev: &Canvas, cols: u32, rows: u32) -> Result<()> {
        let mut current: Option<(Rgba, Rgba)> = None;
        let mut cursor_at: Option<(u32, u32)> = None;
        let mut dirty = false;

        for cy in 0..rows {
            for cx in 0..cols {
                let pair = pixel_pair(canvas, cx, cy);
                if pair == pixel_pair(prev, cx, cy) {
                    continue;
                }
                if cursor_at != Some((cx, cy)) {
                    self.stdout.queue(cursor::MoveTo(cx as u16, cy as u16))?;
                }
                self.apply_pair(pair, &mut current)?;
                self.stdout.queue(Print(HALF_BLOCK))?;
                cursor_at = Some((cx + 1, cy));
                dirty = true;
            }
        }

        if dirty {
            self.stdout.queue(ResetColor)?;
            self.stdout.flush()?;
        }
        Ok(())
    }

    fn apply_pair(&mut self, pair: (Rgba, Rgba), current: &mut Option<(Rgba, Rgba)>) -> Result<()> {
        if *current == Some(pair) {
            return Ok(());
        }
        let (top, bottom) = pair;
        self.stdout.queue(SetForegroundColor(Color::Rgb {
            r: top.r,
            g: top.g,
            b: top.b,
        }))?;
        self.stdout.queue(SetBackgroundColor(Color::Rgb {
            r: bottom.r,
            g: bottom.g,
            b: bottom.b,
        }))?;
        *current = Some(pair);
        Ok(())
    }
}

impl Default for PixelRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// The (top, bottom) pixels a terminal cell displays.
///
/// An odd-height canvas leaves the last bottom row black.
fn pixel_pair(canvas: &Canvas, cx: u32, cy: u32) -> (Rgba, Rgba) {
    let top = canvas.get(cx, cy * 2).unwrap_or(Rgba::BLACK);
    let bottom = canvas.get(cx, cy * 2 + 1).unwrap_or(Rgba::BLACK);
    (top, bottom)
}

//! Views: map demo state into a pixel canvas.
//!
//! Views never mutate demo state; the only view-owned mutation is the
//! mosaic's derived canvas, which is a cache keyed by the current ratio and
//! is pixel-identical to rebuilding it every frame.

use tui_pixels_core::{FillState, HelloState, MosaicState, ScrambleState};
use tui_pixels_types::Rgba;

use crate::canvas::Canvas;
use crate::font::{debug_print, FontFace};

/// Fixed sentence the font demo draws with the base face.
pub const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog.";

/// Fill demo view: floods the canvas with the wave color.
#[derive(Debug, Default)]
pub struct FillView;

impl FillView {
    pub fn render(&self, state: &FillState, canvas: &mut Canvas) {
        canvas.fill(state.color());
    }
}

/// Hello demo view: blinking debug overlay in the top-left corner.
#[derive(Debug, Default)]
pub struct HelloView;

impl HelloView {
    pub fn render(&self, state: &HelloState, canvas: &mut Canvas) {
        canvas.fill(Rgba::BLACK);
        if state.visible() {
            debug_print(canvas, &state.message());
        }
    }
}

/// Font demo view: status line, sample sentence, and the scrambled block.
pub struct TextView {
    face: FontFace,
    big: FontFace,
}

/// Left margin shared by every line of the font demo.
const TEXT_MARGIN_X: i32 = 20;

impl TextView {
    /// Build the view from the face loaded at startup.
    ///
    /// The base face is drawn at 2x, the block face at 4x, echoing the
    /// normal/large pairing of the original demo.
    pub fn new(face: &FontFace) -> Self {
        Self {
            face: face.scaled(2),
            big: face.scaled(4),
        }
    }

    /// Draw everything. `tps` must be the live measured rate for this very
    /// frame; the view never caches it.
    pub fn render(&self, state: &ScrambleState, tps: f32, canvas: &mut Canvas) {
        canvas.fill(Rgba::BLACK);

        let status = format!("TPS: {tps:.2}");
        self.face
            .draw_text(canvas, TEXT_MARGIN_X, 40, &status, Rgba::WHITE);

        self.face
            .draw_text(canvas, TEXT_MARGIN_X, 80, SAMPLE_TEXT, Rgba::WHITE);

        for (i, line) in state.text().lines().enumerate() {
            let y = 160 + 54 * i as i32;
            self.big
                .draw_text(canvas, TEXT_MARGIN_X, y, line, state.color());
        }
    }
}

/// Mosaic demo view: pixelates a source picture by the current ratio.
pub struct MosaicView {
    source: Canvas,
    shrunk: Canvas,
    cached_ratio: u32,
}

impl MosaicView {
    pub fn new(source: Canvas) -> Self {
        Self {
            source,
            shrunk: Canvas::new(1, 1),
            // 0 never matches a live ratio, forcing the first build.
            cached_ratio: 0,
        }
    }

    pub fn source(&self) -> &Canvas {
        &self.source
    }

    /// Shrink the source by the ratio, then enlarge it back with
    /// nearest-neighbor sampling. The shrunk canvas is rebuilt only when
    /// the ratio changed since the last call.
    pub fn render(&mut self, state: &MosaicState, canvas: &mut Canvas) {
        let ratio = state.ratio() as u32;
        if ratio != self.cached_ratio {
            self.shrunk = self.source.shrink_nearest(ratio);
            self.cached_ratio = ratio;
        }

        canvas.fill(Rgba::BLACK);
        canvas.draw_scaled(&self.shrunk, ratio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_pixels_types::ButtonState;

    #[test]
    fn fill_view_floods_whole_canvas() {
        let mut state = FillState::new();
        for _ in 0..26 {
            state.advance();
        }
        let mut canvas = Canvas::new(8, 8);
        FillView.render(&state, &mut canvas);
        assert!(canvas
            .pixels()
            .iter()
            .all(|&p| p == Rgba::opaque(5, 0, 0)));
    }

    #[test]
    fn hello_view_blanks_when_hidden() {
        let mut state = HelloState::new();
        for _ in 0..10 {
            state.advance();
        }
        assert!(!state.visible());

        let mut canvas = Canvas::new(160, 16);
        HelloView.render(&state, &mut canvas);
        assert!(canvas.pixels().iter().all(|&p| p == Rgba::BLACK));
    }

    #[test]
    fn hello_view_draws_while_visible() {
        let state = HelloState::new();
        let mut canvas = Canvas::new(160, 16);
        HelloView.render(&state, &mut canvas);
        assert!(canvas.pixels().iter().any(|&p| p == Rgba::WHITE));
    }

    #[test]
    fn mosaic_view_quantizes_into_ratio_blocks() {
        // 4x4 source with a distinct color per 2x2 block top-left pixel.
        let mut source = Canvas::new(4, 4);
        source.fill(Rgba::opaque(9, 9, 9));
        source.put(0, 0, Rgba::opaque(1, 0, 0));
        source.put(2, 0, Rgba::opaque(2, 0, 0));
        source.put(0, 2, Rgba::opaque(3, 0, 0));
        source.put(2, 2, Rgba::opaque(4, 0, 0));

        let mut view = MosaicView::new(source);
        let state = MosaicState::with_ratio(2);
        let mut canvas = Canvas::new(4, 4);
        view.render(&state, &mut canvas);

        for (bx, by, expected) in [
            (0, 0, Rgba::opaque(1, 0, 0)),
            (2, 0, Rgba::opaque(2, 0, 0)),
            (0, 2, Rgba::opaque(3, 0, 0)),
            (2, 2, Rgba::opaque(4, 0, 0)),
        ] {
            for dy in 0..2 {
                for dx in 0..2 {
                    assert_eq!(canvas.get(bx + dx, by + dy), Some(expected));
                }
            }
        }
    }

    #[test]
    fn mosaic_render_is_idempotent() {
        let mut source = Canvas::new(6, 6);
        for y in 0..6 {
            for x in 0..6 {
                source.put(x, y, Rgba::opaque((x * 40) as u8, (y * 40) as u8, 0));
            }
        }

        let mut view = MosaicView::new(source);
        let state = MosaicState::with_ratio(3);
        let mut first = Canvas::new(6, 6);
        view.render(&state, &mut first);
        let mut second = Canvas::new(6, 6);
        view.render(&state, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn mosaic_cache_tracks_ratio_changes() {
        let mut source = Canvas::new(8, 8);
        source.fill(Rgba::opaque(50, 60, 70));
        let mut view = MosaicView::new(source);

        let mut state = MosaicState::with_ratio(2);
        let mut with_cache = Canvas::new(8, 8);
        view.render(&state, &mut with_cache);

        // Move the ratio and render; the output must match a fresh view
        // that never had a cache to invalidate.
        state.step(ButtonState {
            increase: true,
            decrease: false,
        });
        view.render(&state, &mut with_cache);

        let mut fresh = MosaicView::new(view.source().clone());
        let mut without_cache = Canvas::new(8, 8);
        fresh.render(&state, &mut without_cache);
        assert_eq!(with_cache, without_cache);
    }
}

use tui_pixels::core::FillState;
use tui_pixels::term::{Canvas, FillView};
use tui_pixels::types::Rgba;

fn state_at(tick: u64) -> FillState {
    let mut state = FillState::new();
    for _ in 0..tick {
        state.advance();
    }
    state
}

#[test]
fn intensity_is_bounded_for_a_full_cycle() {
    let mut state = FillState::new();
    for _ in 0..=511 {
        // u8 return type bounds it; the loop guards against panics in the
        // phase arithmetic across the whole modulus.
        let _ = state.intensity();
        state.advance();
    }
}

#[test]
fn wave_is_periodic_with_exact_period_511() {
    for start in [0u64, 1, 26, 255, 510] {
        assert_eq!(
            state_at(start).intensity(),
            state_at(start + 511).intensity(),
            "period mismatch at tick {start}"
        );
    }
}

#[test]
fn wave_nearly_repeats_every_51_ticks() {
    // 51 ticks move the phase by 510, one short of the modulus, so the
    // intensity may differ by at most one step.
    for start in 0u64..100 {
        let a = state_at(start).intensity() as i32;
        let b = state_at(start + 51).intensity() as i32;
        assert!((a - b).abs() <= 1, "drift at tick {start}: {a} vs {b}");
    }
}

#[test]
fn twenty_six_updates_render_red_five() {
    // abs((26 * 10) % 511 - 255) = 5
    let state = state_at(26);
    let mut canvas = Canvas::new(320, 240);
    FillView.render(&state, &mut canvas);

    let expected = Rgba::opaque(5, 0, 0);
    assert!(canvas.pixels().iter().all(|&p| p == expected));
}

#[test]
fn rendered_fill_is_always_opaque_pure_red() {
    let mut state = FillState::new();
    let mut canvas = Canvas::new(16, 16);
    for _ in 0..600 {
        state.advance();
        FillView.render(&state, &mut canvas);
        let p = canvas.get(0, 0).unwrap();
        assert_eq!((p.g, p.b, p.a), (0, 0, 255));
    }
}

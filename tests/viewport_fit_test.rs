// Scale fitting and print-mode behavior of the A4 preview

use cover_page_wasm::models::{EditorState, FormRecord};
use cover_page_wasm::viewport::{compute_scale, FitConfig, RenderMode, ViewportFitter, MIN_SCALE};
use chrono::NaiveDate;

const W0: f64 = 794.0;
const H0: f64 = 1123.0;
const PADDING: f64 = 32.0;

#[test]
fn test_full_scale_when_page_fits() {
    let config = FitConfig::default();
    for width in [826.0, 827.0, 1024.0, 1920.0, 3840.0] {
        assert_eq!(compute_scale(width, &config), 1.0, "width {}", width);
    }
}

#[test]
fn test_proportional_scale_when_page_does_not_fit() {
    let config = FitConfig::default();
    for width in [300.0, 400.0, 500.0, 640.0, 800.0, 825.0] {
        let expected = (width - PADDING) / W0;
        let scale = compute_scale(width, &config);
        assert!((scale - expected).abs() < 1e-12, "width {}", width);
        assert!(scale <= 1.0);
    }
}

#[test]
fn test_documented_examples() {
    let config = FitConfig::default();
    assert_eq!(compute_scale(794.0 + 32.0, &config), 1.0);
    assert!((compute_scale(500.0, &config) - 0.589).abs() < 0.001);
    assert_eq!(compute_scale(50.0, &config), 0.3);
}

#[test]
fn test_floor_holds_for_small_widths() {
    let config = FitConfig::default();
    let mut width = -1000.0;
    while width < 270.0 {
        assert_eq!(compute_scale(width, &config), MIN_SCALE, "width {}", width);
        width += 13.0;
    }
}

#[test]
fn test_height_compensation_matches_scale() {
    let mut fitter = ViewportFitter::default();
    for width in [200.0, 350.0, 500.0, 700.0, 900.0] {
        fitter.observe(width);
        let t = fitter.transform(RenderMode::Screen);
        let expected = -(1.0 - t.scale) * H0;
        assert!((t.margin_bottom - expected).abs() < 1e-9, "width {}", width);
    }
}

#[test]
fn test_print_mode_is_always_unscaled() {
    let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let mut state = EditorState::with_record(FormRecord::with_date(date), FitConfig::default());

    for width in [0.0, 120.0, 500.0, 826.0, 2400.0] {
        state.resize(width);
        state.set_mode(RenderMode::Print);
        let t = state.transform();
        assert_eq!(t.scale, 1.0, "width {}", width);
        assert_eq!(t.margin_bottom, 0.0);
        assert_eq!(t.mode, RenderMode::Print);
        state.set_mode(RenderMode::Screen);
    }
}

#[test]
fn test_no_vertical_fit() {
    // Short, wide windows still render at full width-driven scale
    let mut fitter = ViewportFitter::default();
    fitter.observe(1600.0);
    assert_eq!(fitter.scale(), 1.0);
}

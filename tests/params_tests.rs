// Host-side tests for frame parameter derivation over a sweep of inputs.

use fractal_core::*;
use glam::DVec2;

// Everything the Parameter Source can hand out, from the input caps inward
const COLOR_SPEEDS: [f64; 9] = [
    -SPEED_INPUT_LIMIT,
    -3.0,
    -0.5,
    0.0,
    0.05,
    1.0,
    3.0,
    250.0,
    SPEED_INPUT_LIMIT,
];
const ZOOM_SPEEDS: [f64; 9] = [
    ZOOM_SPEED_FLOOR,
    -1.0,
    -0.5,
    0.0,
    0.05,
    1.0,
    3.0,
    250.0,
    SPEED_INPUT_LIMIT,
];

fn times() -> impl Iterator<Item = f64> {
    (0..2000).map(|i| i as f64 * 0.37).chain([1.0e4, 1.0e6, 3.6e6])
}

#[test]
fn zoom_is_strictly_positive_and_frame_finite() {
    for t in times() {
        for &c in &COLOR_SPEEDS {
            for &z in &ZOOM_SPEEDS {
                for reduce in [false, true] {
                    let p = derive_frame_parameters(t, reduce, c, z);
                    assert!(p.is_finite(), "{p:?} at t={t} c={c} z={z}");
                    assert!(p.zoom > 0.0, "zoom {} at t={t} c={c} z={z}", p.zoom);
                }
            }
        }
    }
}

#[test]
fn center_stays_within_pan_bounds() {
    for t in times() {
        let p = derive_frame_parameters(t, false, 1.0, 1.0);
        assert!(p.center.x.abs() <= 0.35, "x={} at t={t}", p.center.x);
        assert!(p.center.y.abs() <= 0.35, "y={} at t={t}", p.center.y);
    }
}

#[test]
fn reduce_flash_disables_strobe_everywhere() {
    for t in times().step_by(7) {
        for &c in &COLOR_SPEEDS {
            for &z in &ZOOM_SPEEDS {
                assert_eq!(derive_frame_parameters(t, true, c, z).strobe_intensity, 0.0);
                assert_eq!(derive_frame_parameters(t, false, c, z).strobe_intensity, 0.75);
            }
        }
    }
}

#[test]
fn reduce_flash_uses_exact_speed_factors() {
    for &c in &COLOR_SPEEDS {
        for &z in &ZOOM_SPEEDS {
            let s = effective_speeds(true, c, z);
            assert_eq!(s.color, c * 0.2);
            assert_eq!(s.zoom, z * 0.15);
            let raw = effective_speeds(false, c, z);
            assert_eq!(raw, EffectiveSpeeds { color: c, zoom: z });
        }
    }
}

#[test]
fn reduced_zoom_matches_formula_with_scaled_speed() {
    let t = 12.5;
    let p = derive_frame_parameters(t, true, 1.0, 1.0);
    let expected = base_zoom(t, 0.15) * deep_zoom(t, 0.15);
    assert_eq!(p.zoom, expected);
    assert_eq!(p.color_phase, t * (0.8 + 0.2 * 2.2));
}

#[test]
fn derivation_is_deterministic() {
    for t in times().step_by(13) {
        let a = derive_frame_parameters(t, false, 1.3, 0.7);
        let b = derive_frame_parameters(t, false, 1.3, 0.7);
        assert_eq!(a.zoom.to_bits(), b.zoom.to_bits());
        assert_eq!(a.color_phase.to_bits(), b.color_phase.to_bits());
        assert_eq!(a.center.x.to_bits(), b.center.x.to_bits());
        assert_eq!(a.center.y.to_bits(), b.center.y.to_bits());
        assert_eq!(a, b);
    }
}

#[test]
fn first_frame_example() {
    let p = derive_frame_parameters(0.0, false, 1.0, 1.0);
    assert_eq!(p.elapsed_seconds, 0.0);
    assert_eq!(p.center, DVec2::new(0.0, 0.35));
    assert_eq!(base_zoom(0.0, 1.0), 0.85);
    assert_eq!(p.color_phase, 0.0);
    assert_eq!(p.strobe_intensity, 0.75);

    let reduced = derive_frame_parameters(0.0, true, 1.0, 1.0);
    assert_eq!(reduced.strobe_intensity, 0.0);
    assert_eq!(reduced.zoom, 0.85 * deep_zoom(0.0, 0.15));
}

#[test]
fn settings_snapshot_drives_the_same_derivation() {
    let settings = ControlSettings {
        reduce_flash: true,
        color_speed: 2.0,
        zoom_speed: 0.5,
    };
    assert_eq!(
        FrameParameters::derive(3.0, &settings),
        derive_frame_parameters(3.0, true, 2.0, 0.5)
    );
}

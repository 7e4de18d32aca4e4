// Host-side tests for easing curves and interpolation helpers.

use sky_greeting::core::{lerp, map_range, Ease};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn every_ease_hits_its_endpoints() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{:?} at 0", ease);
        assert!(close(ease.apply(1.0), 1.0), "{:?} at 1", ease);
    }
}

#[test]
fn eases_clamp_their_input() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(-2.0), ease.apply(0.0));
        assert_eq!(ease.apply(3.0), ease.apply(1.0));
    }
}

#[test]
fn eases_are_monotonic() {
    for ease in Ease::ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v >= prev, "{:?} decreases at step {}", ease, i);
            prev = v;
        }
    }
}

#[test]
fn power_families_match_known_values() {
    assert_eq!(Ease::default(), Ease::Linear);
    assert!(close(Ease::OutQuad.apply(0.5), 0.75));
    assert!(close(Ease::OutQuad.apply(0.6), 0.84));
    assert!(close(Ease::InQuad.apply(0.5), 0.25));
    assert!(close(Ease::OutCubic.apply(0.5), 0.875));
    assert!(close(Ease::InCubic.apply(0.5), 0.125));
    assert!(close(Ease::InOutQuad.apply(0.25), 0.125));
    assert!(close(Ease::InOutQuad.apply(0.5), 0.5));
    assert!(close(Ease::InOutQuart.apply(0.75), 0.96875));
}

#[test]
fn out_curves_lead_and_in_curves_lag() {
    for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
        assert!(Ease::OutCubic.apply(t) > t);
        assert!(Ease::InCubic.apply(t) < t);
        assert!(Ease::OutQuart.apply(t) > Ease::OutQuad.apply(t));
    }
}

#[test]
fn lerp_does_not_clamp() {
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    assert_eq!(lerp(2.0, 4.0, 2.0), 6.0);
    assert_eq!(lerp(1.2, 1.0, 0.0), 1.2);
}

#[test]
fn map_range_rescales_and_clamps() {
    assert!(close(map_range(0.275, 0.2, 0.35, 0.0, 0.8), 0.4));
    assert!(close(map_range(0.75, 0.5, 1.0, 1.1, 1.5), 1.3));
    assert_eq!(map_range(0.1, 0.2, 0.35, 0.0, 0.8), 0.0);
    assert_eq!(map_range(0.9, 0.35, 0.5, 0.8, 0.0), 0.0);
    // degenerate source range
    assert_eq!(map_range(0.3, 0.3, 0.3, 5.0, 9.0), 5.0);
}

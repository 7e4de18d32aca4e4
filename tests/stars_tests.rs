// Host-side tests for the star field generator.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sky_greeting::core::{
    generate_stars, DEFAULT_STAR_COUNT, STAR_MAX_DELAY_SEC, STAR_MAX_SIZE_PX, STAR_MAX_TOP_PCT,
    STAR_MIN_SIZE_PX,
};

#[test]
fn generates_the_requested_number_of_stars() {
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(generate_stars(&mut rng, DEFAULT_STAR_COUNT).len(), 200);
    assert!(generate_stars(&mut rng, 0).is_empty());
}

#[test]
fn stars_stay_inside_their_ranges() {
    let mut rng = StdRng::seed_from_u64(42);
    for star in generate_stars(&mut rng, 1000) {
        assert!((0.0..100.0).contains(&star.left_pct));
        assert!((0.0..STAR_MAX_TOP_PCT).contains(&star.top_pct));
        assert!((STAR_MIN_SIZE_PX..STAR_MAX_SIZE_PX).contains(&star.size_px));
        assert!((0.0..STAR_MAX_DELAY_SEC).contains(&star.twinkle_delay_sec));
    }
}

#[test]
fn same_seed_same_sky() {
    let a = generate_stars(&mut StdRng::seed_from_u64(3), 50);
    let b = generate_stars(&mut StdRng::seed_from_u64(3), 50);
    let c = generate_stars(&mut StdRng::seed_from_u64(4), 50);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn stars_are_spread_out() {
    let stars = generate_stars(&mut StdRng::seed_from_u64(11), 400);
    let left_half = stars.iter().filter(|s| s.left_pct < 50.0).count();
    assert!(left_half > 100 && left_half < 300, "left half {}", left_half);
}

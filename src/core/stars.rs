use rand::Rng;

pub const DEFAULT_STAR_COUNT: usize = 200;

// Stars stay in the upper part of the sky
pub const STAR_MAX_TOP_PCT: f32 = 70.0;
pub const STAR_MIN_SIZE_PX: f32 = 1.0;
pub const STAR_MAX_SIZE_PX: f32 = 3.0;
pub const STAR_MAX_DELAY_SEC: f32 = 2.0;

/// One twinkling star, positioned in percent of the star layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub left_pct: f32,
    pub top_pct: f32,
    pub size_px: f32,
    pub twinkle_delay_sec: f32,
}

pub fn generate_stars<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..STAR_MAX_TOP_PCT),
            size_px: rng.gen_range(STAR_MIN_SIZE_PX..STAR_MAX_SIZE_PX),
            twinkle_delay_sec: rng.gen_range(0.0..STAR_MAX_DELAY_SEC),
        })
        .collect()
}

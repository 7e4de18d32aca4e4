/// Easing curves applied to a local tween position `t` in \[0, 1\].
///
/// `Quad`, `Cubic` and `Quart` correspond to the power1, power2 and power3
/// families of common web animation libraries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
}

impl Ease {
    pub const ALL: [Ease; 10] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
    ];

    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => power_in(t, 2),
            Self::OutQuad => power_out(t, 2),
            Self::InOutQuad => power_in_out(t, 2),
            Self::InCubic => power_in(t, 3),
            Self::OutCubic => power_out(t, 3),
            Self::InOutCubic => power_in_out(t, 3),
            Self::InQuart => power_in(t, 4),
            Self::OutQuart => power_out(t, 4),
            Self::InOutQuart => power_in_out(t, 4),
        }
    }
}

#[inline]
fn power_in(t: f32, n: i32) -> f32 {
    t.powi(n)
}

#[inline]
fn power_out(t: f32, n: i32) -> f32 {
    1.0 - (1.0 - t).powi(n)
}

#[inline]
fn power_in_out(t: f32, n: i32) -> f32 {
    if t < 0.5 {
        0.5 * (2.0 * t).powi(n)
    } else {
        1.0 - 0.5 * (2.0 - 2.0 * t).powi(n)
    }
}

/// Linear interpolation between `a` and `b`. `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Rescale `v` from `[lo1, hi1]` to `[lo2, hi2]`, clamping to the target range.
#[inline]
pub fn map_range(v: f32, lo1: f32, hi1: f32, lo2: f32, hi2: f32) -> f32 {
    let span = hi1 - lo1;
    if span.abs() <= f32::EPSILON {
        return lo2;
    }
    let t = ((v - lo1) / span).clamp(0.0, 1.0);
    lerp(lo2, hi2, t)
}

//! Scroll-driven sky: sun sets, the atmosphere pulses, the moon rises and the
//! star field zooms in as the reader scrolls down the page.

use std::sync::OnceLock;

use glam::Vec2;

use super::progress::Progress;
use super::scene::{Scene, SceneMapper, SceneTable, Span, Track};
use super::snapshot::{Channel, OffsetUnit, Transform, VisualSnapshot};

pub const SUN_ROTATION_DEG: f32 = 120.0;
pub const SUN_SET_OFFSET: f32 = 150.0;
pub const MOON_BASE_OFFSET: f32 = 50.0;
pub const MOON_FLOAT_OFFSET: f32 = -10.0;
pub const ATMOSPHERE_PEAK: f32 = 0.8;
pub const STARS_BASE_OPACITY: f32 = 0.2;
pub const STARS_BASE_SCALE: f32 = 1.1;
pub const STARS_MAX_SCALE: f32 = 1.5;

/// Number of text groups the scroll page toggles between.
pub const TEXT_GROUPS: usize = 4;

/// Build the scroll scene table. Offsets are in viewport-height units.
pub fn scroll_table() -> SceneTable {
    let base = VisualSnapshot {
        moon: Transform {
            offset: Vec2::new(0.0, MOON_BASE_OFFSET),
            ..Default::default()
        },
        moon_opacity: 0.0,
        atmosphere: 0.0,
        stars_opacity: STARS_BASE_OPACITY,
        stars_scale: STARS_BASE_SCALE,
        ..Default::default()
    };

    SceneTable::new(base, OffsetUnit::Vh)
        .scene(
            Scene::new("sun-spin", Span::full())
                .track(Track::linear(Channel::SunRotation, 0.0, SUN_ROTATION_DEG)),
        )
        .scene(
            Scene::new("sun-settle", Span::below(0.25))
                .track(Track::linear(Channel::SunScale, 1.2, 1.0))
                .track(Track::constant(Channel::SunY, 0.0)),
        )
        .scene(
            Scene::new("sunset", Span::half_open(0.25, 0.6))
                .track(Track::linear(Channel::SunY, 0.0, SUN_SET_OFFSET))
                .track(Track::linear(Channel::SunScale, 1.0, 0.8)),
        )
        .scene(
            Scene::new("atmosphere-rise", Span::open(0.2, 0.35))
                .track(Track::linear(Channel::Atmosphere, 0.0, ATMOSPHERE_PEAK)),
        )
        .scene(
            Scene::new("atmosphere-fade", Span::half_open(0.35, 0.5))
                .track(Track::linear(Channel::Atmosphere, ATMOSPHERE_PEAK, 0.0)),
        )
        .scene(
            Scene::new("moon-visible", Span::above(0.45))
                .track(Track::constant(Channel::MoonOpacity, 1.0)),
        )
        .scene(
            Scene::new("moonrise", Span::left_open(0.5, 0.8))
                .track(Track::linear(Channel::MoonY, MOON_BASE_OFFSET, 0.0)),
        )
        .scene(
            Scene::new("moon-float", Span::above(0.8))
                .track(Track::linear(Channel::MoonY, 0.0, MOON_FLOAT_OFFSET)),
        )
        .scene(
            Scene::new("star-zoom", Span::above(0.5))
                .track(Track::linear(Channel::StarsOpacity, STARS_BASE_OPACITY, 1.0))
                .track(Track::linear(Channel::StarsScale, STARS_BASE_SCALE, STARS_MAX_SCALE)),
        )
        .text_window(Span::below(0.20), 0)
        .text_window(Span::open(0.25, 0.45), 1)
        .text_window(Span::open(0.55, 0.70), 2)
        .text_window(Span::above(0.80), 3)
}

fn shared_table() -> &'static SceneTable {
    static TABLE: OnceLock<SceneTable> = OnceLock::new();
    TABLE.get_or_init(scroll_table)
}

/// Snapshot of the scroll scene at `p`. Values outside \[0, 1\] are clamped.
pub fn compute_snapshot(p: f32) -> VisualSnapshot {
    shared_table().compute_snapshot(Progress::new(p))
}

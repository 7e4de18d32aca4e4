//! The authored greeting: night → dawn → sunrise → day → sunset → night,
//! with crossfaded messages along the way and a final message that stays.

use glam::Vec2;

use super::ease::Ease;
use super::snapshot::{Channel, OffsetUnit, SkyLayers, TextState, Transform, VisualSnapshot};
use super::timeline::{tween, Position, Timeline};

pub const LABEL_DAWN: &str = "dawn";
pub const LABEL_SUNRISE: &str = "sunrise";
pub const LABEL_SUNSET: &str = "sunset";
pub const LABEL_NIGHTFALL: &str = "nightfall";
pub const LABEL_MOONRISE: &str = "moonrise";
pub const LABEL_FINALE: &str = "finale";

/// Below the horizon, tilted back.
pub const BODY_START_Y: f32 = 300.0;
pub const BODY_START_ROTATION: f32 = -30.0;

pub const SUNRISE_MESSAGES: [(&str, f32); 3] = [
    ("Bugün senin günün aşkım.", 3.0),
    ("Doğum günün kutlu olsun Dünyammm.", 3.0),
    ("Yeni yaşının uğurlu olma dileğiyle aşk kadınım benim.", 4.0),
];
pub const SUNSET_MESSAGES: [(&str, f32); 2] = [
    ("Bunu yaparken aklımdan tek bir şey geçti:", 3.0),
    ("Sen güldüğünde her şey daha güzel oluyor.", 4.0),
];
pub const MOONRISE_MESSAGES: [(&str, f32); 2] = [
    ("İyi ki varsın, iyi ki benimlesin.", 3.0),
    ("İyi ki hayatımdasın.", 3.0),
];
pub const FINALE_MESSAGE: &str = "Bunu sen gül diye yaptım.\n\nİyi ki varsın.";

/// Consecutive messages overlap by this much.
const MESSAGE_OVERLAP_SEC: f32 = 0.5;

/// Size of the visible page in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// State before the first frame: night sky, bodies below the horizon, dim
/// landscape, no message.
pub fn initial_state() -> VisualSnapshot {
    let below_horizon = Transform {
        offset: Vec2::new(0.0, BODY_START_Y),
        scale: 1.0,
        rotation_deg: BODY_START_ROTATION,
    };
    VisualSnapshot {
        sun: below_horizon,
        moon: below_horizon,
        moon_opacity: 1.0,
        atmosphere: 0.0,
        stars_opacity: 1.0,
        stars_scale: 1.0,
        sky: SkyLayers {
            night: 1.0,
            ..Default::default()
        },
        landscape_brightness: 0.1,
        text: TextState {
            active: None,
            opacity: 0.0,
        },
    }
}

fn add_messages(tl: &mut Timeline, messages: &[(&str, f32)], first: Position) {
    let mut position = first;
    for &(text, hold) in messages {
        tl.crossfade_text(text, hold, position);
        position = Position::after_previous(-MESSAGE_OVERLAP_SEC);
    }
}

/// Build the full greeting timeline for a viewport.
pub fn greeting_timeline(viewport: Viewport) -> Timeline {
    let (w, h) = (viewport.width, viewport.height);
    let mut tl = Timeline::new(initial_state(), OffsetUnit::Px);

    // Night to dawn
    tl.add(tween(5.0).to(Channel::SkyDawn, 1.0), Position::label(LABEL_DAWN))
        .add(tween(5.0).to(Channel::SkyNight, 0.0), Position::label(LABEL_DAWN))
        .add(
            tween(5.0).to(Channel::StarsOpacity, 0.5),
            Position::label(LABEL_DAWN),
        );

    // Sunrise
    tl.add(
        tween(10.0)
            .to(Channel::SunY, -h * 0.7)
            .to(Channel::SunX, w * 0.2)
            .to(Channel::SunRotation, 0.0)
            .ease(Ease::OutCubic),
        Position::label(LABEL_SUNRISE),
    )
    .add(
        tween(5.0).to(Channel::SkySunrise, 1.0),
        Position::label_offset(LABEL_SUNRISE, -2.0),
    )
    .add(
        tween(5.0).to(Channel::SkyDawn, 0.0),
        Position::label_offset(LABEL_SUNRISE, -2.0),
    )
    .add(
        tween(5.0).to(Channel::SkyDay, 1.0),
        Position::label_offset(LABEL_SUNRISE, 3.0),
    )
    .add(
        tween(5.0).to(Channel::SkySunrise, 0.0),
        Position::label_offset(LABEL_SUNRISE, 3.0),
    )
    .add(
        tween(3.0).to(Channel::StarsOpacity, 0.0),
        Position::label(LABEL_SUNRISE),
    )
    .add(
        tween(6.0).to(Channel::LandscapeBrightness, 0.8),
        Position::label(LABEL_SUNRISE),
    );
    add_messages(
        &mut tl,
        &SUNRISE_MESSAGES,
        Position::label_offset(LABEL_SUNRISE, 1.0),
    );

    // Day to sunset
    tl.add(
        tween(12.0)
            .to(Channel::SunY, 150.0)
            .to(Channel::SunX, w * 0.5)
            .to(Channel::SunRotation, 30.0)
            .ease(Ease::InOutQuad),
        Position::label(LABEL_SUNSET),
    )
    .add(
        tween(8.0).to(Channel::SkySunset, 1.0),
        Position::label_offset(LABEL_SUNSET, 2.0),
    )
    .add(
        tween(8.0).to(Channel::SkyDay, 0.0),
        Position::label_offset(LABEL_SUNSET, 2.0),
    )
    .add(
        tween(8.0).to(Channel::LandscapeBrightness, 0.3),
        Position::label_offset(LABEL_SUNSET, 2.0),
    );
    add_messages(
        &mut tl,
        &SUNSET_MESSAGES,
        Position::label_offset(LABEL_SUNSET, 3.0),
    );

    // Sunset to night, moonrise
    tl.add(
        tween(5.0).to(Channel::SunY, 500.0),
        Position::label(LABEL_NIGHTFALL),
    )
    .add(
        tween(8.0).to(Channel::SkyNight, 1.0),
        Position::label(LABEL_NIGHTFALL),
    )
    .add(
        tween(8.0).to(Channel::SkySunset, 0.0),
        Position::label(LABEL_NIGHTFALL),
    )
    .add(
        tween(5.0).to(Channel::StarsOpacity, 1.0),
        Position::label_offset(LABEL_NIGHTFALL, 3.0),
    )
    .add(
        tween(10.0)
            .to(Channel::MoonY, -h * 0.6)
            .to(Channel::MoonX, -w * 0.1)
            .to(Channel::MoonRotation, 0.0)
            .ease(Ease::OutCubic),
        Position::label(LABEL_MOONRISE),
    )
    .add(
        tween(6.0).to(Channel::LandscapeBrightness, 0.15),
        Position::label(LABEL_MOONRISE),
    );
    add_messages(
        &mut tl,
        &MOONRISE_MESSAGES,
        Position::label_offset(LABEL_MOONRISE, 3.0),
    );

    // Finale: the last message stays on screen
    tl.add_label(LABEL_FINALE)
        .add(
            tween(1.0).to(Channel::TextOpacity, 0.0),
            Position::label(LABEL_FINALE),
        )
        .swap_text(FINALE_MESSAGE, Position::after_previous(0.0))
        .add(
            tween(3.0).to(Channel::TextOpacity, 1.0).ease(Ease::OutCubic),
            Position::label_offset(LABEL_FINALE, 1.5),
        );

    tl
}

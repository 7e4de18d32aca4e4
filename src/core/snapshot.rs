//! Output side of the scene mapper: the complete set of visual values for one
//! progress sample, and the sink that applies them.

use glam::Vec2;

/// Every scalar a scene table can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    SunX,
    SunY,
    SunScale,
    SunRotation,
    MoonX,
    MoonY,
    MoonRotation,
    MoonOpacity,
    Atmosphere,
    StarsOpacity,
    StarsScale,
    SkyNight,
    SkyDawn,
    SkySunrise,
    SkyDay,
    SkySunset,
    LandscapeBrightness,
    TextOpacity,
}

impl Channel {
    pub const COUNT: usize = 18;

    pub const ALL: [Channel; Channel::COUNT] = [
        Channel::SunX,
        Channel::SunY,
        Channel::SunScale,
        Channel::SunRotation,
        Channel::MoonX,
        Channel::MoonY,
        Channel::MoonRotation,
        Channel::MoonOpacity,
        Channel::Atmosphere,
        Channel::StarsOpacity,
        Channel::StarsScale,
        Channel::SkyNight,
        Channel::SkyDawn,
        Channel::SkySunrise,
        Channel::SkyDay,
        Channel::SkySunset,
        Channel::LandscapeBrightness,
        Channel::TextOpacity,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// 2D placement of a celestial body. `offset` is in the owning table's unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub offset: Vec2,
    pub scale: f32,
    pub rotation_deg: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            rotation_deg: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SkyLayers {
    pub night: f32,
    pub dawn: f32,
    pub sunrise: f32,
    pub day: f32,
    pub sunset: f32,
}

/// Which message is showing and how visible it is. `active` indexes the
/// owning table's message list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextState {
    pub active: Option<usize>,
    pub opacity: f32,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            active: None,
            opacity: 1.0,
        }
    }
}

/// Unit that transform offsets are expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OffsetUnit {
    #[default]
    Px,
    Vh,
}

impl OffsetUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Vh => "vh",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualSnapshot {
    pub sun: Transform,
    pub moon: Transform,
    pub moon_opacity: f32,
    pub atmosphere: f32,
    pub stars_opacity: f32,
    pub stars_scale: f32,
    pub sky: SkyLayers,
    pub landscape_brightness: f32,
    pub text: TextState,
}

impl Default for VisualSnapshot {
    fn default() -> Self {
        Self {
            sun: Transform::default(),
            moon: Transform::default(),
            moon_opacity: 1.0,
            atmosphere: 0.0,
            stars_opacity: 1.0,
            stars_scale: 1.0,
            sky: SkyLayers::default(),
            landscape_brightness: 1.0,
            text: TextState::default(),
        }
    }
}

impl VisualSnapshot {
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::SunX => self.sun.offset.x,
            Channel::SunY => self.sun.offset.y,
            Channel::SunScale => self.sun.scale,
            Channel::SunRotation => self.sun.rotation_deg,
            Channel::MoonX => self.moon.offset.x,
            Channel::MoonY => self.moon.offset.y,
            Channel::MoonRotation => self.moon.rotation_deg,
            Channel::MoonOpacity => self.moon_opacity,
            Channel::Atmosphere => self.atmosphere,
            Channel::StarsOpacity => self.stars_opacity,
            Channel::StarsScale => self.stars_scale,
            Channel::SkyNight => self.sky.night,
            Channel::SkyDawn => self.sky.dawn,
            Channel::SkySunrise => self.sky.sunrise,
            Channel::SkyDay => self.sky.day,
            Channel::SkySunset => self.sky.sunset,
            Channel::LandscapeBrightness => self.landscape_brightness,
            Channel::TextOpacity => self.text.opacity,
        }
    }

    pub fn set(&mut self, channel: Channel, value: f32) {
        let slot = match channel {
            Channel::SunX => &mut self.sun.offset.x,
            Channel::SunY => &mut self.sun.offset.y,
            Channel::SunScale => &mut self.sun.scale,
            Channel::SunRotation => &mut self.sun.rotation_deg,
            Channel::MoonX => &mut self.moon.offset.x,
            Channel::MoonY => &mut self.moon.offset.y,
            Channel::MoonRotation => &mut self.moon.rotation_deg,
            Channel::MoonOpacity => &mut self.moon_opacity,
            Channel::Atmosphere => &mut self.atmosphere,
            Channel::StarsOpacity => &mut self.stars_opacity,
            Channel::StarsScale => &mut self.stars_scale,
            Channel::SkyNight => &mut self.sky.night,
            Channel::SkyDawn => &mut self.sky.dawn,
            Channel::SkySunrise => &mut self.sky.sunrise,
            Channel::SkyDay => &mut self.sky.day,
            Channel::SkySunset => &mut self.sky.sunset,
            Channel::LandscapeBrightness => &mut self.landscape_brightness,
            Channel::TextOpacity => &mut self.text.opacity,
        };
        *slot = value;
    }
}

/// Consumer of computed snapshots, e.g. the DOM layer.
///
/// Every call carries a complete snapshot; implementations apply all of it.
pub trait RenderSink {
    fn apply(&mut self, snapshot: &VisualSnapshot, messages: &[String]);
}

impl Transform {
    /// CSS `transform` value with offsets in `unit`.
    pub fn css(&self, unit: OffsetUnit) -> String {
        let u = unit.suffix();
        format!(
            "translate({:.2}{u}, {:.2}{u}) scale({:.4}) rotate({:.2}deg)",
            self.offset.x, self.offset.y, self.scale, self.rotation_deg
        )
    }
}

/// CSS `filter` value for a brightness factor.
pub fn brightness_css(value: f32) -> String {
    format!("brightness({:.3})", value)
}

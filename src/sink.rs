use crate::constants::*;
use crate::core::scroll::TEXT_GROUPS;
use crate::core::{brightness_css, Channel, OffsetUnit, RenderSink, SceneTable, VisualSnapshot};
use crate::dom;
use web_sys as web;

/// How the active text slot reaches the page.
pub enum TextTarget {
    /// One element whose content is swapped to the active message.
    Message(Option<web::HtmlElement>),
    /// Fixed groups in the markup; the active one gets a class.
    Groups(Vec<web::HtmlElement>),
}

/// Applies snapshots to the greeting's layer elements. Only elements whose
/// channels the table drives are bound; the rest of the page is left alone.
/// Missing elements are skipped.
pub struct DomSink {
    unit: OffsetUnit,
    sun: Option<web::HtmlElement>,
    moon: Option<web::HtmlElement>,
    moon_opacity: bool,
    stars: Option<web::HtmlElement>,
    atmosphere: Option<web::HtmlElement>,
    landscape: Option<web::HtmlElement>,
    // night, dawn, sunrise, day, sunset
    sky: [Option<web::HtmlElement>; 5],
    text: TextTarget,
    shown_message: Option<usize>,
}

fn bind(
    document: &web::Document,
    table: &SceneTable,
    selector: &str,
    channels: &[Channel],
) -> Option<web::HtmlElement> {
    if channels.iter().any(|&c| table.drives(c)) {
        dom::query_html(document, selector)
    } else {
        None
    }
}

impl DomSink {
    fn layers(document: &web::Document, table: &SceneTable, text: TextTarget) -> Self {
        use Channel::*;
        let sky = |selector: &str, channel: Channel| bind(document, table, selector, &[channel]);
        Self {
            unit: table.unit,
            sun: bind(
                document,
                table,
                SUN_SELECTOR,
                &[SunX, SunY, SunScale, SunRotation],
            ),
            moon: bind(
                document,
                table,
                MOON_SELECTOR,
                &[MoonX, MoonY, MoonRotation, MoonOpacity],
            ),
            moon_opacity: table.drives(MoonOpacity),
            stars: bind(document, table, STARS_SELECTOR, &[StarsOpacity, StarsScale]),
            atmosphere: bind(document, table, ATMOSPHERE_SELECTOR, &[Atmosphere]),
            landscape: bind(document, table, LANDSCAPE_SELECTOR, &[LandscapeBrightness]),
            sky: [
                sky(SKY_NIGHT_SELECTOR, SkyNight),
                sky(SKY_DAWN_SELECTOR, SkyDawn),
                sky(SKY_SUNRISE_SELECTOR, SkySunrise),
                sky(SKY_DAY_SELECTOR, SkyDay),
                sky(SKY_SUNSET_SELECTOR, SkySunset),
            ],
            text,
            shown_message: None,
        }
    }

    /// Sink for the timed greeting: a single message element.
    pub fn timed(document: &web::Document, table: &SceneTable) -> Self {
        let message = dom::html_by_id(document, MESSAGE_ID);
        Self::layers(document, table, TextTarget::Message(message))
    }

    /// Sink for the scroll page: text groups toggled by class.
    pub fn scroll(document: &web::Document, table: &SceneTable) -> Self {
        let groups = dom::query_all_html(document, TEXT_GROUP_SELECTOR);
        if groups.len() != TEXT_GROUPS {
            log::warn!(
                "[scroll] expected {} {} elements, found {}",
                TEXT_GROUPS,
                TEXT_GROUP_SELECTOR,
                groups.len()
            );
        }
        Self::layers(document, table, TextTarget::Groups(groups))
    }

    fn apply_text(&mut self, snapshot: &VisualSnapshot, messages: &[String]) {
        let active = snapshot.text.active;
        match &self.text {
            TextTarget::Message(Some(el)) => {
                if active != self.shown_message {
                    if let Some(text) = active.and_then(|i| messages.get(i)) {
                        el.set_inner_text(text);
                    }
                    self.shown_message = active;
                }
                dom::set_style(el, "opacity", &snapshot.text.opacity.to_string());
            }
            TextTarget::Message(None) => {}
            TextTarget::Groups(groups) => {
                for (i, el) in groups.iter().enumerate() {
                    _ = el
                        .class_list()
                        .toggle_with_force(TEXT_ACTIVE_CLASS, active == Some(i));
                }
            }
        }
    }
}

fn opacity(el: &Option<web::HtmlElement>, value: f32) {
    if let Some(el) = el {
        dom::set_style(el, "opacity", &value.to_string());
    }
}

impl RenderSink for DomSink {
    fn apply(&mut self, snapshot: &VisualSnapshot, messages: &[String]) {
        if let Some(sun) = &self.sun {
            dom::set_style(sun, "transform", &snapshot.sun.css(self.unit));
        }
        if let Some(moon) = &self.moon {
            dom::set_style(moon, "transform", &snapshot.moon.css(self.unit));
        }
        if self.moon_opacity {
            opacity(&self.moon, snapshot.moon_opacity);
        }
        opacity(&self.atmosphere, snapshot.atmosphere);
        if let Some(stars) = &self.stars {
            dom::set_style(stars, "opacity", &snapshot.stars_opacity.to_string());
            dom::set_style(
                stars,
                "transform",
                &format!("scale({:.4})", snapshot.stars_scale),
            );
        }
        let sky = &snapshot.sky;
        for (el, value) in self
            .sky
            .iter()
            .zip([sky.night, sky.dawn, sky.sunrise, sky.day, sky.sunset])
        {
            opacity(el, value);
        }
        if let Some(landscape) = &self.landscape {
            dom::set_style(
                landscape,
                "filter",
                &brightness_css(snapshot.landscape_brightness),
            );
        }
        self.apply_text(snapshot, messages);
    }
}

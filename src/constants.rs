/// Page wiring and tuning constants for the web frontend.
///
/// Element ids and selectors match the greeting markup; elements that are
/// missing on a given page are skipped.
// Timed greeting page
pub const START_SCREEN_ID: &str = "start-screen";
pub const START_BUTTON_ID: &str = "start-btn";
pub const MUSIC_ID: &str = "bg-music";
pub const MESSAGE_ID: &str = "msg-text";

pub const SKY_NIGHT_SELECTOR: &str = ".sky-night";
pub const SKY_DAWN_SELECTOR: &str = ".sky-dawn";
pub const SKY_SUNRISE_SELECTOR: &str = ".sky-sunrise";
pub const SKY_DAY_SELECTOR: &str = ".sky-day";
pub const SKY_SUNSET_SELECTOR: &str = ".sky-sunset";
pub const SUN_SELECTOR: &str = ".sun-container";
pub const MOON_SELECTOR: &str = ".moon-container";
pub const STARS_SELECTOR: &str = ".stars-container";
pub const LANDSCAPE_SELECTOR: &str = ".landscape";

// Scroll page
pub const SCROLL_ROOT_SELECTOR: &str = "[data-scroll-scene]";
pub const ATMOSPHERE_SELECTOR: &str = ".atmosphere";
pub const TEXT_GROUP_SELECTOR: &str = ".text-group";
pub const TEXT_ACTIVE_CLASS: &str = "active";

// Generated star elements
pub const STAR_CLASS: &str = "star";

// Audio
pub const MUSIC_VOLUME: f64 = 0.5;

// Start screen fade (milliseconds)
pub const START_SCREEN_FADE_MS: i32 = 1000;

//! Animated sky greeting for the web.
//!
//! `core` and `constants` are plain Rust and build on every target; the DOM
//! plumbing below only exists on `wasm32`.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod sink;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sky-greeting starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn init() -> anyhow::Result<()> {
    use crate::constants::{SCROLL_ROOT_SELECTOR, START_BUTTON_ID, STARS_SELECTOR};
    use crate::core::{
        generate_stars, greeting_timeline, scroll::scroll_table, ProgressBus, SceneMapper,
        SequencePlayer, DEFAULT_STAR_COUNT,
    };
    use std::cell::RefCell;
    use std::rc::Rc;
    use web_sys as web;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Some(container) = dom::query_html(&document, STARS_SELECTOR) {
        let stars = generate_stars(&mut rand::thread_rng(), DEFAULT_STAR_COUNT);
        dom::populate_star_field(&document, &container, &stars)?;
        log::info!("[stars] generated {}", stars.len());
    }

    let bus = Rc::new(RefCell::new(ProgressBus::new()));

    if document.get_element_by_id(START_BUTTON_ID).is_some() {
        let viewport = dom::viewport();
        let player = SequencePlayer::new(&greeting_timeline(viewport));
        player.table().validate()?;
        log::info!(
            "[player] timed greeting ready: {} scenes, viewport {}x{}",
            player.table().scenes.len(),
            viewport.width,
            viewport.height
        );

        let table = player.table().clone();
        let mut sink = sink::DomSink::timed(&document, &table);
        bus.borrow_mut()
            .subscribe(move |progress| table.render(progress, &mut sink));
        // initial state until the start button is pressed
        bus.borrow_mut().publish(crate::core::Progress::START);

        audio::prepare_music(&document);
        events::wire_start_button(&document, Rc::new(RefCell::new(player)), bus);
    } else if dom::query_html(&document, SCROLL_ROOT_SELECTOR).is_some() {
        let table = scroll_table();
        table.validate()?;
        log::info!("[scroll] scroll scene ready: {} scenes", table.scenes.len());

        let mut sink = sink::DomSink::scroll(&document, &table);
        bus.borrow_mut()
            .subscribe(move |progress| table.render(progress, &mut sink));
        events::wire_scroll(bus);
    } else {
        log::warn!(
            "no #{} or {} found; nothing to animate",
            START_BUTTON_ID,
            SCROLL_ROOT_SELECTOR
        );
    }

    Ok(())
}

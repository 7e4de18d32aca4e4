use crate::audio;
use crate::constants::START_BUTTON_ID;
use crate::core::{ProgressBus, SequencePlayer};
use crate::dom;
use crate::frame;
use crate::overlay;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Publish scroll progress on every scroll and resize, plus once right away
/// so the page renders before the first event.
pub fn wire_scroll(bus: Rc<RefCell<ProgressBus>>) {
    let Some(window) = web::window() else {
        return;
    };
    let bus_events = bus.clone();
    let closure = Closure::wrap(Box::new(move || {
        bus_events.borrow_mut().publish(dom::scroll_progress());
    }) as Box<dyn FnMut()>);
    for event in ["scroll", "resize"] {
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
    bus.borrow_mut().publish(dom::scroll_progress());
}

/// The single start action: hide the intro screen, start the sequence from
/// its beginning and try to play the music. Repeated clicks are ignored.
pub fn wire_start_button(
    document: &web::Document,
    player: Rc<RefCell<SequencePlayer>>,
    bus: Rc<RefCell<ProgressBus>>,
) -> bool {
    let doc = document.clone();
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        if !player.borrow_mut().start(Instant::now()) {
            return;
        }
        log::info!(
            "[player] started ({:.1}s sequence)",
            player.borrow().total().as_secs_f32()
        );
        overlay::fade_out(&doc);
        audio::play_music(&doc);
        frame::start_loop(frame::FrameContext {
            player: player.clone(),
            bus: bus.clone(),
        });
    })
}

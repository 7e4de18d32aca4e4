use crate::core::{ProgressBus, SequencePlayer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub player: Rc<RefCell<SequencePlayer>>,
    pub bus: Rc<RefCell<ProgressBus>>,
}

impl FrameContext {
    /// Publish the current playback progress. Returns false once the
    /// sequence has reached its end.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let (progress, finished) = {
            let player = self.player.borrow();
            (player.progress_at(now), player.is_finished(now))
        };
        self.bus.borrow_mut().publish(progress);
        !finished
    }
}

pub fn start_loop(frame_ctx: FrameContext) {
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx.borrow_mut().frame() {
            log::info!("[player] sequence finished");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

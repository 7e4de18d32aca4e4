use crate::constants::{MUSIC_ID, MUSIC_VOLUME};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn music_element(document: &web::Document) -> Option<web::HtmlAudioElement> {
    document
        .get_element_by_id(MUSIC_ID)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
}

/// Lower the background track before anything plays.
pub fn prepare_music(document: &web::Document) {
    if let Some(audio) = music_element(document) {
        audio.set_volume(MUSIC_VOLUME);
    }
}

/// Best-effort playback. Rejections (autoplay policy, missing source) are
/// logged and otherwise ignored; the visual sequence never waits on audio.
pub fn play_music(document: &web::Document) {
    let Some(audio) = music_element(document) else {
        log::info!("[audio] no #{} element, playing silently", MUSIC_ID);
        return;
    };
    audio.set_volume(MUSIC_VOLUME);
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("Audio play failed: {:?}", e);
            }
        }),
        Err(e) => log::warn!("Audio play failed: {:?}", e),
    }
}

// Success/error cue playback
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlAudioElement;

use crate::model::SoundCue;
use crate::util::cwarn;

/// One audio element per cue, kept for the lifetime of the owning view.
pub struct CuePlayer {
    success: Option<HtmlAudioElement>,
    error: Option<HtmlAudioElement>,
}

impl Default for CuePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl CuePlayer {
    pub fn new() -> Self {
        Self {
            success: load(SoundCue::Success),
            error: load(SoundCue::Error),
        }
    }

    /// Restarts the cue from the beginning, cutting off any earlier playback.
    pub fn play(&self, cue: SoundCue) {
        let el = match cue {
            SoundCue::Success => &self.success,
            SoundCue::Error => &self.error,
        };
        let Some(el) = el else {
            return;
        };
        el.set_current_time(0.0);
        match el.play() {
            Ok(promise) => watch(cue, promise),
            Err(e) => cwarn(&format!("audio cue {cue:?} failed: {}", describe(&e))),
        }
    }
}

// rejected when the browser blocks autoplay or the asset is missing
fn watch(cue: SoundCue, promise: js_sys::Promise) {
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            cwarn(&format!("audio cue {cue:?} failed: {}", describe(&e)));
        }
    });
}

fn load(cue: SoundCue) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(cue.src()) {
        Ok(el) => Some(el),
        Err(e) => {
            cwarn(&format!("could not create audio for {}: {}", cue.src(), describe(&e)));
            None
        }
    }
}

fn describe(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

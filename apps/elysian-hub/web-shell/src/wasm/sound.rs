use std::collections::HashMap;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) enum UiSound {
    Click,
    Hover,
    Success,
    Open,
    Close,
}

impl UiSound {
    fn url(self) -> String {
        let name = match self {
            Self::Click => "click",
            Self::Hover => "hover",
            Self::Success => "success",
            Self::Open => "open",
            Self::Close => "close",
        };
        format!("{SOUND_BASE_URL}/{name}.mp3")
    }
}

thread_local! {
    static AUDIO_CACHE: RefCell<HashMap<UiSound, web_sys::HtmlAudioElement>> = RefCell::new(HashMap::new());
}

pub(super) fn play_sound(sound: UiSound) {
    play_sound_at(sound, SOUND_VOLUME);
}

/// Restarts the cached clip. Browsers reject playback before the first user
/// gesture; those rejections are swallowed.
pub(super) fn play_sound_at(sound: UiSound, volume: f64) {
    let audio = AUDIO_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if let Some(audio) = cache.get(&sound) {
            return Some(audio.clone());
        }
        let audio = web_sys::HtmlAudioElement::new_with_src(&sound.url()).ok()?;
        cache.insert(sound, audio.clone());
        Some(audio)
    });
    let Some(audio) = audio else {
        debug!(?sound, "audio element unavailable");
        return;
    };

    audio.set_volume(volume.clamp(0.0, 1.0));
    audio.set_current_time(0.0);
    if let Ok(promise) = audio.play() {
        spawn_local(async move {
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
    }
}

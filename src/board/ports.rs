// Browser implementations of the controller's ports: window timers,
// localStorage and <audio> elements.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlAudioElement, Window};

use crate::{AudioSink, KeyValueStore, KupuError, SoundId, Timers};

/// `setInterval` / `setTimeout` on the window. The tick callback is created
/// once and reused by every interval, so cancelling never drops a closure
/// that may be running.
pub struct BrowserTimers {
    window: Window,
    tick: Closure<dyn FnMut()>,
    removal_due: fn(),
}

impl BrowserTimers {
    pub fn new(window: Window, on_tick: fn(), removal_due: fn()) -> Self {
        let tick = Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>);
        Self {
            window,
            tick,
            removal_due,
        }
    }
}

/// Window timers take a signed 32-bit delay.
fn browser_ms(ms: u32) -> Result<i32, KupuError> {
    i32::try_from(ms).map_err(|_| KupuError::Timer(format!("{ms} ms is out of range")))
}

impl Timers for BrowserTimers {
    type Interval = i32;

    fn start_interval(&mut self, period_ms: u32) -> Result<i32, KupuError> {
        self.window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.tick.as_ref().unchecked_ref(),
                browser_ms(period_ms)?,
            )
            .map_err(|e| KupuError::Timer(format!("{e:?}")))
    }

    fn cancel_interval(&mut self, handle: i32) {
        self.window.clear_interval_with_handle(handle);
    }

    fn defer(&mut self, delay_ms: u32) -> Result<(), KupuError> {
        let delay = browser_ms(delay_ms)?;
        let cb = Closure::once_into_js(self.removal_due);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay)
            .map(|_| ())
            .map_err(|e| KupuError::Timer(format!("{e:?}")))
    }
}

/// `window.localStorage`, or nothing when the browser refuses access (private
/// mode, disabled cookies). Without it reads miss and writes fail softly.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable; high score will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KupuError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or(KupuError::Browser("localStorage"))?;
        storage
            .set_item(key, value)
            .map_err(|e| KupuError::Storage {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}

/// One preloaded `<audio>` element per cue.
pub struct HtmlAudio {
    clips: Vec<(SoundId, HtmlAudioElement)>,
}

impl HtmlAudio {
    pub fn load() -> Self {
        let clips = SoundId::ALL
            .iter()
            .filter_map(|id| match HtmlAudioElement::new_with_src(id.asset()) {
                Ok(el) => Some((*id, el)),
                Err(e) => {
                    log::warn!("could not load sound {}: {e:?}", id.as_str());
                    None
                }
            })
            .collect();
        Self { clips }
    }
}

impl AudioSink for HtmlAudio {
    fn play(&mut self, sound: SoundId) {
        if let Some((_, clip)) = self.clips.iter().find(|(id, _)| *id == sound) {
            clip.set_current_time(0.0);
            // The returned promise rejects when autoplay is blocked; nothing to do then.
            let _ = clip.play();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_beyond_i32_are_refused() {
        assert_eq!(browser_ms(100).unwrap(), 100);
        assert_eq!(browser_ms(i32::MAX as u32).unwrap(), i32::MAX);
        let err = browser_ms(3_000_000_000).unwrap_err();
        assert!(matches!(err, KupuError::Timer(_)));
        assert_eq!(err.to_string(), "timer scheduling failed: 3000000000 ms is out of range");
    }
}

//! Level change cue played through the Web Audio API.

use blind_timer::config::{BEEP_DURATION_SECS, BEEP_FADE_GAIN, BEEP_FREQUENCY_HZ, BEEP_GAIN};
use log::warn;
use std::cell::RefCell;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

thread_local! {
    /// One context for the whole session; browsers cap how many can be open.
    static AUDIO_CONTEXT: RefCell<Option<AudioContext>> = RefCell::new(None);
}

fn with_context<R>(f: impl FnOnce(&AudioContext) -> Result<R, JsValue>) -> Result<R, JsValue> {
    AUDIO_CONTEXT.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(AudioContext::new()?);
        }
        match slot.as_ref() {
            Some(ctx) => f(ctx),
            None => Err(JsValue::from_str("audio context unavailable")),
        }
    })
}

/// Create or resume the audio context.
///
/// Must run inside a user gesture (the Start button), otherwise autoplay
/// policies keep the context suspended and later beeps stay silent.
pub fn unlock_audio() {
    let res = with_context(|ctx| {
        let _ = ctx.resume()?;
        Ok(())
    });
    if let Err(e) = res {
        warn!("Audio context unavailable: {:?}", e);
    }
}

/// Half-second sine beep that fades out.
pub fn play_level_beep() {
    if let Err(e) = with_context(beep) {
        warn!("Failed to play level change beep: {:?}", e);
    }
}

fn beep(ctx: &AudioContext) -> Result<(), JsValue> {
    let now = ctx.current_time();
    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    osc.set_type(OscillatorType::Sine);
    osc.frequency().set_value(BEEP_FREQUENCY_HZ);

    gain.gain().set_value_at_time(BEEP_GAIN, now)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(BEEP_FADE_GAIN, now + BEEP_DURATION_SECS)?;

    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    osc.start_with_when(now)?;
    osc.stop_with_when(now + BEEP_DURATION_SECS)?;
    Ok(())
}

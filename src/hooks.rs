use blind_timer::config::TICK_MS;
use blind_timer::countdown::{Countdown, CountdownAction};
use blind_timer::Chips;
use gloo_timers::callback::Interval;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::audio::play_level_beep;

/// Holds the state and callbacks for a validated input field.
///
/// The committed value lives with the caller; the hook only owns the text
/// being edited and the last validation error.
#[derive(Clone)]
pub struct ValidatedInput {
    /// The current text content of the input field.
    pub text: String,
    /// An optional error message if validation failed.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event. Updates the internal text state.
    pub on_text_input: Callback<InputEvent>,
    /// Parse and validate the current text, emitting the value on success.
    /// Typically used with `onchange` or after an Enter key press on the text input.
    pub on_commit: Callback<()>,
}

/// Custom hook to manage state for a validated input field.
#[hook]
pub fn use_validated_input<T: Clone + PartialEq + 'static>(
    value: T,
    format: fn(&T) -> String,
    parse_and_validate: Rc<dyn Fn(&str) -> Result<T, String>>,
    on_valid: Callback<T>,
) -> ValidatedInput {
    let text_state_handle = use_state(|| format(&value));
    let error_state_handle = use_state(|| None::<String>);

    let on_text_input = {
        let text_setter = text_state_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let on_commit = {
        let current_text_handle = text_state_handle.clone();
        let error_setter = error_state_handle.clone();
        Callback::from(move |_| match parse_and_validate(&**current_text_handle) {
            Ok(parsed_val) => {
                // Update text to canonical form
                current_text_handle.set(format(&parsed_val));
                error_setter.set(None);
                on_valid.emit(parsed_val);
            }
            Err(err_msg) => {
                error_setter.set(Some(err_msg));
            }
        })
    };

    // Keep the text in step with value changes made elsewhere (e.g. the steppers)
    {
        let text_setter = text_state_handle.clone();
        let error_setter = error_state_handle.clone();
        use_effect_with(value, move |current| {
            let formatted = format(current);
            if *text_setter != formatted {
                text_setter.set(formatted);
                error_setter.set(None);
            }
            || ()
        });
    }

    ValidatedInput {
        text: (*text_state_handle).clone(),
        error: (*error_state_handle).clone(),
        on_text_input,
        on_commit,
    }
}

/// Countdown over `levels`, ticking once per second while running.
///
/// A new schedule restarts the countdown at level 1. At most one interval is
/// alive at a time: it is created when the countdown starts running and
/// dropped (which clears the browser timer) as soon as it stops.
#[hook]
pub fn use_countdown(levels: Rc<Vec<Chips>>, round_secs: u32) -> UseReducerHandle<Countdown> {
    let countdown = {
        let levels = levels.clone();
        use_reducer(move || Countdown::new(levels, round_secs))
    };

    {
        let dispatcher = countdown.dispatcher();
        use_effect_with((levels, round_secs), move |(levels, round_secs)| {
            dispatcher.dispatch(CountdownAction::Configure {
                levels: levels.clone(),
                round_secs: *round_secs,
            });
            || ()
        });
    }

    {
        let dispatcher = countdown.dispatcher();
        use_effect_with(countdown.is_running(), move |&running| {
            let interval = running.then(|| {
                Interval::new(TICK_MS, move || dispatcher.dispatch(CountdownAction::Tick))
            });
            move || drop(interval)
        });
    }

    use_effect_with(countdown.level_changes(), |&changes| {
        if changes > 0 {
            play_level_beep();
        }
        || ()
    });

    countdown
}

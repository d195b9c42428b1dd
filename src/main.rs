//! Main module for the poker blind timer using Yew.
//! Wires the setup and timer pages, session state, and countdown hooks.

use blind_timer::config::{
    TimerConfig, MAX_FIRST_BLIND, MAX_ROUNDS, MIN_FIRST_BLIND, MIN_ROUNDS,
};
use blind_timer::countdown::CountdownAction;
use blind_timer::utils::validate_round_length;
use blind_timer::{blind_levels, build_schedule, format_time, Chips, ScheduledLevel};
use log::{info, warn};
use std::rc::Rc;
use yew::prelude::*;

mod audio;
mod components;
mod hooks;

use audio::unlock_audio;
use components::{render_blind_preview, BlindCards, Clock, CompletionBanner, NumberInput, StatusLine};
use hooks::{use_countdown, use_validated_input};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Setup,
    Timer,
}

// ──────────────────────────────────────────────────────────────────────────────
// Setup page

#[derive(Properties, PartialEq)]
struct SetupPageProps {
    config: TimerConfig,
    schedule: Rc<Vec<ScheduledLevel>>,
    on_change: Callback<TimerConfig>,
    on_start: Callback<()>,
}

#[function_component(SetupPage)]
fn setup_page(props: &SetupPageProps) -> Html {
    let config = props.config;

    let on_first_blind = {
        let on_change = props.on_change.clone();
        Callback::from(move |v: i64| {
            on_change.emit(TimerConfig {
                first_blind: v.max(0) as Chips,
                ..config
            })
        })
    };
    let on_rounds = {
        let on_change = props.on_change.clone();
        Callback::from(move |v: i64| {
            on_change.emit(TimerConfig {
                rounds: v.max(0) as usize,
                ..config
            })
        })
    };
    let on_round_secs = {
        let on_change = props.on_change.clone();
        Callback::from(move |secs: u32| {
            on_change.emit(TimerConfig {
                round_secs: secs,
                ..config
            })
        })
    };

    let round_length = use_validated_input(
        config.round_secs,
        |secs: &u32| format_time(*secs),
        Rc::new(validate_round_length),
        on_round_secs,
    );
    let round_length_onkeydown = {
        let commit = round_length.on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit.emit(());
            }
        })
    };
    let round_length_onchange = {
        let commit = round_length.on_commit.clone();
        Callback::from(move |_: Event| commit.emit(()))
    };

    let on_start = {
        let on_start = props.on_start.clone();
        Callback::from(move |_: MouseEvent| on_start.emit(()))
    };

    html! {
        <div class="container">
            <h1>{ "Tournament Setup" }</h1>
            <p class="subtitle">{ "Configure your poker tournament settings" }</p>

            <div class="setup-fields">
                <NumberInput
                    label="Minimum First Round ($)"
                    value={config.first_blind as i64}
                    min={MIN_FIRST_BLIND as i64}
                    max={MAX_FIRST_BLIND as i64}
                    prefix="$"
                    on_change={on_first_blind}
                />
                <NumberInput
                    label="Number of Rounds"
                    value={config.rounds as i64}
                    min={MIN_ROUNDS as i64}
                    max={MAX_ROUNDS as i64}
                    on_change={on_rounds}
                />
                <div class="form-group">
                    <label for="round_length_input">{ "Timer Per Round (MM:SS)" }</label>
                    <input type="text"
                        id="round_length_input"
                        value={round_length.text.clone()}
                        oninput={round_length.on_text_input.clone()}
                        onkeydown={round_length_onkeydown}
                        onchange={round_length_onchange}
                    />
                    if let Some(err) = &round_length.error {
                        <div class="field-error">{ err.clone() }</div>
                    }
                </div>
            </div>

            { render_blind_preview(&props.schedule) }

            <button type="button"
                class="start-button"
                disabled={props.schedule.is_empty()}
                onclick={on_start}
            >
                { "Start Tournament" }
            </button>
        </div>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Active timer page

#[derive(Properties, PartialEq)]
struct TimerPageProps {
    levels: Rc<Vec<Chips>>,
    round_secs: u32,
    on_back: Callback<()>,
}

#[function_component(TimerPage)]
fn timer_page(props: &TimerPageProps) -> Html {
    let countdown = use_countdown(props.levels.clone(), props.round_secs);

    let on_toggle = {
        let countdown = countdown.clone();
        Callback::from(move |_: MouseEvent| {
            if countdown.is_running() {
                countdown.dispatch(CountdownAction::Pause);
            } else {
                unlock_audio();
                countdown.dispatch(CountdownAction::Start);
            }
        })
    };
    let on_reset = {
        let countdown = countdown.clone();
        Callback::from(move |_: MouseEvent| countdown.dispatch(CountdownAction::Reset))
    };
    let on_skip = {
        let countdown = countdown.clone();
        Callback::from(move |_: MouseEvent| countdown.dispatch(CountdownAction::SkipLevel))
    };
    let on_back = {
        let countdown = countdown.clone();
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| {
            countdown.dispatch(CountdownAction::Pause);
            on_back.emit(());
        })
    };

    let running = countdown.is_running();

    html! {
        <div class="container">
            <h1>{ "Tournament Timer" }</h1>
            <p class="subtitle">
                { format!("Level {} of {}", countdown.level_number(), countdown.level_count()) }
            </p>

            <div class="timer-panel">
                <Clock
                    remaining_secs={countdown.remaining_secs()}
                    warning={countdown.is_final_minute()}
                />
                <BlindCards
                    small_blind={countdown.small_blind()}
                    big_blind={countdown.big_blind()}
                />
                <StatusLine round_secs={countdown.round_secs()} {running} />
            </div>

            <div class="timer-controls">
                <button type="button"
                    class={if running { "pause-button" } else { "start-button" }}
                    disabled={countdown.is_finished()}
                    onclick={on_toggle}
                >
                    { if running { "Pause" } else { "Start" } }
                </button>
                <button type="button" class="reset-button" onclick={on_reset}>
                    { "Reset" }
                </button>
                <button type="button"
                    class="skip-button"
                    disabled={countdown.is_finished()}
                    onclick={on_skip}
                >
                    { "Next Level" }
                </button>
            </div>

            <button type="button" class="back-button" onclick={on_back}>
                { "Back to Setup" }
            </button>

            if countdown.is_finished() {
                <CompletionBanner />
            }
        </div>
    }
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component holding the session configuration.
#[function_component(Main)]
fn main_component() -> Html {
    let page = use_state(|| Page::Setup);
    let config = use_state(TimerConfig::default);

    // Recomputed only when the inputs that shape the curve change
    let levels: Rc<Vec<Chips>> = use_memo((config.first_blind, config.rounds), |&(first, rounds)| {
        blind_levels(first, rounds).unwrap_or_else(|e| {
            warn!("Rejected blind configuration: {}", e);
            Vec::new()
        })
    });
    let schedule: Rc<Vec<ScheduledLevel>> = use_memo(*config, |config| {
        build_schedule(config).unwrap_or_default()
    });

    let on_change = {
        let config = config.clone();
        Callback::from(move |next: TimerConfig| config.set(next.clamped()))
    };
    let on_start = {
        let page = page.clone();
        let config = config.clone();
        Callback::from(move |_: ()| {
            info!(
                "Starting tournament: first blind {}, {} rounds, {} per round",
                config.first_blind,
                config.rounds,
                format_time(config.round_secs)
            );
            page.set(Page::Timer);
        })
    };
    let on_back = {
        let page = page.clone();
        Callback::from(move |_: ()| {
            info!("Back to setup");
            page.set(Page::Setup);
        })
    };

    html! {
        <div class="app">
            {
                match *page {
                    Page::Setup => html! {
                        <SetupPage
                            config={*config}
                            {schedule}
                            {on_change}
                            {on_start}
                        />
                    },
                    Page::Timer => html! {
                        <TimerPage
                            {levels}
                            round_secs={config.round_secs}
                            {on_back}
                        />
                    },
                }
            }
        </div>
    }
}

/// Entry point: installs the panic hook and renders the app.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
}

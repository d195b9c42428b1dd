//! Yew view components for the blind timer UI.
//!
//! Everything here renders from props; state lives in `main.rs` and the hooks.

use blind_timer::config::step_clamped;
use blind_timer::utils::validate_numeric_input;
use blind_timer::{format_time, Chips, ScheduledLevel};
use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::use_validated_input;

/// Stepper with a typed entry box in between the -/+ buttons.
#[derive(Properties, PartialEq)]
pub struct NumberInputProps {
    pub label: AttrValue,
    pub value: i64,
    pub min: i64,
    pub max: i64,
    #[prop_or(1)]
    pub step: i64,
    #[prop_or_default]
    pub prefix: Option<AttrValue>,
    pub on_change: Callback<i64>,
}

#[function_component(NumberInput)]
pub fn number_input(props: &NumberInputProps) -> Html {
    let input = {
        let (min, max, label) = (props.min, props.max, props.label.clone());
        use_validated_input(
            props.value,
            |v: &i64| v.to_string(),
            Rc::new(move |text: &str| validate_numeric_input(text, Some(min), Some(max), &label)),
            props.on_change.clone(),
        )
    };

    let stepper = |delta: i64| {
        let (value, min, max) = (props.value, props.min, props.max);
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(step_clamped(value, delta, min, max)))
    };

    let onkeydown = {
        let commit = input.on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit.emit(());
            }
        })
    };
    let onchange = {
        let commit = input.on_commit.clone();
        Callback::from(move |_: Event| commit.emit(()))
    };

    html! {
        <div class="form-group">
            <label>{ props.label.clone() }</label>
            <div class="number-input">
                <button type="button"
                    disabled={props.value <= props.min}
                    onclick={stepper(-props.step)}
                >{ "−" }</button>
                if let Some(prefix) = &props.prefix {
                    <span class="number-prefix">{ prefix.clone() }</span>
                }
                <input type="text"
                    inputmode="numeric"
                    value={input.text.clone()}
                    oninput={input.on_text_input.clone()}
                    {onkeydown}
                    {onchange}
                />
                <button type="button"
                    disabled={props.value >= props.max}
                    onclick={stepper(props.step)}
                >{ "+" }</button>
            </div>
            if let Some(err) = &input.error {
                <div class="field-error">{ err.clone() }</div>
            }
        </div>
    }
}

/// Renders the blind structure preview shown on the setup page.
pub fn render_blind_preview(schedule: &[ScheduledLevel]) -> Html {
    if schedule.is_empty() {
        return html! {
            <div class="blind-preview">
                <p class="no-results-message">{ "No levels to display" }</p>
            </div>
        };
    }

    html! {
        <div class="blind-preview">
            <h3>{ "Blind Structure Preview" }</h3>
            <table class="blind-table">
                <thead>
                    <tr>
                        <th>{ "Level" }</th>
                        <th>{ "Small / Big" }</th>
                        <th>{ "Time" }</th>
                    </tr>
                </thead>
                <tbody>
                    { schedule.iter().map(render_level_row).collect::<Html>() }
                </tbody>
            </table>
        </div>
    }
}

fn render_level_row(level: &ScheduledLevel) -> Html {
    html! {
        <tr key={level.level.to_string()}>
            <td>{ format!("Level {}", level.level) }</td>
            <td>
                <span class="small-blind">{ format!("${}", level.small_blind) }</span>
                { " / " }
                <span class="big-blind">{ format!("${}", level.big_blind) }</span>
            </td>
            <td>{ format_time(level.duration_secs) }</td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClockProps {
    pub remaining_secs: u32,
    pub warning: bool,
}

/// Big `MM:SS` readout; turns red in the final minute.
#[function_component(Clock)]
pub fn clock(props: &ClockProps) -> Html {
    html! {
        <div class={classes!("clock", props.warning.then_some("clock-warning"))}>
            { format_time(props.remaining_secs) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlindCardsProps {
    pub small_blind: Chips,
    pub big_blind: Chips,
}

#[function_component(BlindCards)]
pub fn blind_cards(props: &BlindCardsProps) -> Html {
    html! {
        <div class="blind-cards">
            <div class="blind-card">
                <div class="blind-card-label">{ "Small Blind" }</div>
                <div class="blind-card-value small-blind">{ format!("${}", props.small_blind) }</div>
            </div>
            <div class="blind-card">
                <div class="blind-card-label">{ "Big Blind" }</div>
                <div class="blind-card-value big-blind">{ format!("${}", props.big_blind) }</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusLineProps {
    pub round_secs: u32,
    pub running: bool,
}

#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    let (label, class) = if props.running {
        ("RUNNING", "status-running")
    } else {
        ("PAUSED", "status-paused")
    };
    html! {
        <div class="status-line">
            <span>{ format_time(props.round_secs) }</span>
            <span class={class}>{ label }</span>
        </div>
    }
}

#[function_component(CompletionBanner)]
pub fn completion_banner() -> Html {
    html! {
        <div class="completion-banner">
            <div class="completion-title">{ "Tournament Complete!" }</div>
            <div class="completion-subtitle">{ "All levels have been completed" }</div>
        </div>
    }
}

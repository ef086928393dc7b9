use crate::prelude::*;

use std::time::Duration;

use crate::utils::CCStr;

fn timestamp_now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[component]
pub fn InputField<T: 'static + Clone + PartialEq + core::fmt::Display + core::str::FromStr>(
    title: Option<&'static str>,
    description: Option<&'static str>,
    value: Signal<T>,
    r#type: Option<&'static str>,
    placeholder: Option<&'static str>,
    value_error: ReadOnlySignal<Option<CCStr>>,
) -> Element {
    let (error_display, mut signal_activity, onfocusout) = use_future_error_feedback(value_error);

    rsx! {
        fieldset { class: "fieldset",
            if let Some(title) = title {
                legend { class: "fieldset-legend", {title} }
            }
            if let Some(description) = description {
                div { class: "fieldset-description", {description} }
            }
            input {
                r#type: r#type.unwrap_or("text"),
                class: "input w-full",
                class: if error_display().is_some() { "input-error" },
                placeholder,
                value: "{value.read()}",
                oninput: move |evt| {
                    signal_activity();
                    if let Ok(v) = evt.parsed() {
                        value.set(v)
                    }
                },
                onfocusout,
            }
            div {
                class: "fieldset-label text-error",
                class: if error_display().is_none() { "invisible" },
                if let Some(e) = error_display() {
                    {e}
                } else {
                    "ph"
                }
            }
        }
    }
}

#[component]
pub fn TextAreaField(
    title: Option<&'static str>,
    description: Option<&'static str>,
    value: Signal<String>,
    rows: Option<usize>,
    placeholder: Option<&'static str>,
    value_error: ReadOnlySignal<Option<CCStr>>,
) -> Element {
    let (error_display, mut signal_activity, onfocusout) = use_future_error_feedback(value_error);

    rsx! {
        fieldset { class: "fieldset",
            if let Some(title) = title {
                legend { class: "fieldset-legend", {title} }
            }
            if let Some(description) = description {
                div { class: "fieldset-description", {description} }
            }
            textarea {
                class: "textarea w-full",
                class: if error_display().is_some() { "textarea-error" },
                rows: rows.unwrap_or(8),
                placeholder,
                value: "{value.read()}",
                oninput: move |evt| {
                    signal_activity();
                    value.set(evt.value());
                },
                onfocusout,
            }
            div {
                class: "fieldset-label text-error",
                class: if error_display().is_none() { "invisible" },
                if let Some(e) = error_display() {
                    {e}
                } else {
                    "ph"
                }
            }
        }
    }
}

/// Error display that waits for the user to pause typing (or leave the
/// field) before showing anything.
pub fn use_future_error_feedback(
    value_error: ReadOnlySignal<Option<CCStr>>,
) -> (
    Memo<Option<CCStr>>,
    impl FnMut() + Copy,
    impl FnMut(Event<FocusData>) + Copy,
) {
    let (feed_back_active, signal_activity, onfocusout) = use_future_feedback_with_delay(2);
    let error_display = use_memo(move || feed_back_active().then(|| value_error()).flatten());
    (error_display, signal_activity, onfocusout)
}

fn use_future_feedback_with_delay(
    delay_sec: i64,
) -> (
    Memo<bool>,
    impl FnMut() + Copy,
    impl FnMut(Event<FocusData>) + Copy,
) {
    let mut last_activity_ts = use_signal(|| None);
    let mut timed_feedback = use_signal(|| false);
    let mut immediate_feedback = use_signal(|| false);
    use_future(move || async move {
        loop {
            if last_activity_ts().is_some_and(|ts: i64| ts + delay_sec < timestamp_now()) {
                if !timed_feedback() {
                    *timed_feedback.write() = true;
                }
            }
            tokio::time::sleep(Duration::from_millis(250)).await;
        }
    });

    let feed_back_active = use_memo(move || (timed_feedback() || immediate_feedback()));
    let signal_activity = move || {
        *last_activity_ts.write() = Some(timestamp_now());
        if immediate_feedback() {
            *immediate_feedback.write() = false;
        }
        if timed_feedback() {
            *timed_feedback.write() = false;
        }
    };
    let onfocusout = move |_| *immediate_feedback.write() = true;
    (feed_back_active, signal_activity, onfocusout)
}

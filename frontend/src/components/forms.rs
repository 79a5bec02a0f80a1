use chrono::{Datelike, NaiveDate, Weekday};
use leptos::*;
use wasm_bindgen::JsCast;

const INPUT_CLASS: &str = "appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border sm:text-sm read-only:bg-surface-muted read-only:text-fg-muted";

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-bold text-fg-muted ml-1">{label}</label>
            <input
                type="text"
                class=INPUT_CLASS
                placeholder=placeholder
                readonly=readonly
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

fn weekday_short(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Human form of the current value; falls back to the raw string so
/// hand-typed or backend-supplied values still show up unmodified.
pub fn describe_date_value(value: &str) -> String {
    if value.is_empty() {
        return "Pick a date".to_string();
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => format!("{} ({})", date.format("%Y-%m-%d"), weekday_short(date.weekday())),
        Err(_) => value.to_string(),
    }
}

#[component]
pub fn DateField(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            // showPicker() is not yet in web-sys; call it reflectively.
            let _ = js_sys::Reflect::get(&input, &"showPicker".into()).map(|f| {
                if f.is_function() {
                    let _ = js_sys::Reflect::apply(
                        &f.unchecked_into::<js_sys::Function>(),
                        &input,
                        &js_sys::Array::new(),
                    );
                }
            });
            let _ = input.focus();
        }
    };

    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-bold text-fg-muted ml-1">{label}</label>
            <div
                class="relative cursor-pointer rounded-md border border-form-control-border bg-form-control-bg py-2 px-3 flex items-center justify-between hover:border-action-primary-border-hover"
                on:click=open_picker
            >
                <span class=move || {
                    format!(
                        "text-sm {}",
                        if value.get().is_empty() { "text-text-muted" } else { "text-fg" },
                    )
                }>
                    {move || describe_date_value(&value.get())}
                </span>
                <i class="far fa-calendar-alt text-fg-muted"></i>
                <input
                    type="date"
                    node_ref=input_ref
                    class="absolute inset-0 w-full h-full opacity-0 pointer-events-none"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn describe_date_value_formats_known_dates() {
        assert_eq!(describe_date_value(""), "Pick a date");
        assert_eq!(describe_date_value("2025-01-10"), "2025-01-10 (Fri)");
        assert_eq!(describe_date_value("not-a-date"), "not-a-date");
    }

    #[test]
    fn text_field_marks_readonly_inputs() {
        let html = render_to_string(move || {
            let value = create_rw_signal("E3".to_string());
            view! { <TextField label="id (auto)" value=value readonly=true /> }
        });
        assert!(html.contains("readonly"));
        assert!(html.contains("id (auto)"));
    }

    #[test]
    fn text_field_renders_current_value() {
        with_runtime(|| {
            let value = create_rw_signal(String::from("Platform"));
            value.set("Research".into());
            assert_eq!(value.get_untracked(), "Research");
        });
    }
}

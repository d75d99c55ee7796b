use leptos::prelude::*;

/// Text input with label, bound to a draft field.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                required=required
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Numeric input; the page parses the string into the draft's numeric
/// field so partially typed values don't fight the signal.
#[component]
pub fn NumberField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] step: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_step = move || step.get().unwrap_or_else(|| "any".to_string());

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type="number"
                step=input_step
                prop:value=move || value.get()
                required=required
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn DateField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type="date"
                prop:value=move || value.get()
                required=required
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

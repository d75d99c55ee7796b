use leptos::prelude::*;

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    let area_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <textarea
                class="form__textarea"
                rows=rows
                prop:value=move || value.get()
                placeholder=area_placeholder
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

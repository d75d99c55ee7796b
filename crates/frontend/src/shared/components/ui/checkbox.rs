use leptos::prelude::*;

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group form__group--checkbox">
            <label class="form__checkbox-label">
                <input
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                />
                {label}
            </label>
        </div>
    }
}

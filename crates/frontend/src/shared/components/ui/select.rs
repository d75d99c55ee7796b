use leptos::prelude::*;

/// Select with label. Options are (value, label) pairs; lookup-backed
/// selects pass a derived signal, static enumerations a plain vec.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    /// Label for the empty option; omit to forbid an empty choice.
    #[prop(optional, into)] empty_option: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {move || empty_option.get().map(|label| {
                    let is_selected = move || value.get().is_empty();
                    view! { <option value="" selected=is_selected>{label}</option> }
                })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

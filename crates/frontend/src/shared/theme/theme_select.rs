use leptos::prelude::*;

use super::{use_theme, Theme};

/// Palette dropdown for the header and the settings page.
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <select
            class="theme-select"
            on:change=move |ev| {
                ctx.set_theme(Theme::from_str(&event_target_value(&ev)));
            }
        >
            {Theme::all().iter().map(|theme| {
                let value = theme.as_str();
                let selected = {
                    let theme = *theme;
                    move || ctx.theme.get() == theme
                };
                view! {
                    <option value=value selected=selected>
                        {theme.display_name()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

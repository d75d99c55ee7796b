use leptos::prelude::*;

use crate::shared::theme::theme_select::ThemeSelect;
use crate::system::auth::context::use_auth;

/// Appearance settings plus a read-only view of the current session.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();

    let email = move || {
        auth.get()
            .email()
            .map(str::to_string)
            .unwrap_or_else(|| "-".to_string())
    };

    let roles = move || {
        let roles = auth.get().roles;
        if roles.is_empty() {
            vec!["No roles assigned".to_string()]
        } else {
            roles.iter().map(|r| r.display_name().to_string()).collect()
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Settings"</h1>
            </div>

            <div class="settings-section">
                <h2 class="settings-section__title">"Appearance"</h2>
                <div class="form__group">
                    <label class="form__label">"Theme"</label>
                    <ThemeSelect />
                </div>
            </div>

            <div class="settings-section">
                <h2 class="settings-section__title">"Session"</h2>
                <div class="settings-row">
                    <span class="settings-row__label">"Signed in as"</span>
                    <span class="settings-row__value">{email}</span>
                </div>
                <div class="settings-row">
                    <span class="settings-row__label">"Roles"</span>
                    <span class="settings-row__value">
                        {move || roles().into_iter().map(|role| view! {
                            <span class="badge">{role}</span>
                        }).collect_view()}
                    </span>
                </div>
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::gateway::provide_gateway;
use crate::shared::notify::{NotificationService, NotificationTray};
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Application-wide services. Order matters: the gateway handle must
    // exist before AuthProvider restores the session.
    provide_gateway();
    provide_context(NotificationService::new());

    view! {
        <ThemeProvider>
            <AuthProvider>
                <NotificationTray />
                <AppRoutes />
            </AuthProvider>
        </ThemeProvider>
    }
}

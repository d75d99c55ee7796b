mod header;
mod sidebar;

pub use header::Header;
pub use sidebar::Sidebar;

use leptos::prelude::*;

/// Authenticated app shell: sidebar on the left, header plus routed
/// page content on the right.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <div class="shell__main">
                <Header />
                <main class="shell__content">
                    {children()}
                </main>
            </div>
        </div>
    }
}

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;
use crate::shared::theme::theme_select::ThemeSelect;
use crate::system::auth::context::{do_logout, use_auth};

/// Title shown in the header for each route. Unknown paths fall back
/// to the product name.
pub fn page_title(path: &str) -> &'static str {
    match path {
        "/" | "/dashboard" => "Dashboard",
        "/users" => "Users",
        "/machines" => "Machines",
        "/molds" => "Molds",
        "/products" => "Products",
        "/raw-materials" | "/inventory" => "Raw Materials",
        "/material-batches" => "Material Batches",
        "/finished-goods" => "Finished Goods",
        "/containers" => "Containers",
        "/production-orders" => "Production Orders",
        "/work-orders" => "Work Orders",
        "/daily-schedule" | "/schedule" => "Daily Production Schedule",
        "/machine-downtime" => "Machine Downtime",
        "/maintenance-schedule" => "Maintenance Schedule",
        "/customers" => "Customers",
        "/sales-orders" => "Sales Orders",
        "/customer-complaints" | "/complaints" => "Customer Complaints",
        "/suppliers" => "Suppliers",
        "/purchase-orders" => "Purchase Orders",
        "/quality-control" | "/qc" => "Quality Inspections",
        "/production-costs" => "Production Costs",
        "/settings" => "Settings",
        _ => "MoldERP",
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let title = move || page_title(&location.pathname.get());

    let email = move || {
        auth.get()
            .email()
            .map(str::to_string)
            .unwrap_or_else(|| "Signed in".to_string())
    };

    view! {
        <header class="topbar">
            <h1 class="topbar__title">{title}</h1>
            <div class="topbar__actions">
                <ThemeSelect />
                <span class="topbar__user">{email}</span>
                <button
                    class="button button--secondary"
                    title="Sign out"
                    on:click=move |_| do_logout(auth)
                >
                    {icon("logout")}
                    "Sign out"
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_cover_canonical_and_legacy_paths() {
        assert_eq!(page_title("/machines"), "Machines");
        assert_eq!(page_title("/inventory"), "Raw Materials");
        assert_eq!(page_title("/qc"), "Quality Inspections");
        assert_eq!(page_title("/nope"), "MoldERP");
    }
}

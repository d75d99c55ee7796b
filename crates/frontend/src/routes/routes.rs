use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::d100_overview::OverviewDashboard;
use crate::domain;
use crate::layout::MainLayout;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::settings::SettingsPage;

/// Everything behind the login gate. Unauthenticated sessions see the
/// login page for every path; while the persisted session is still
/// being validated a splash is shown instead (fail closed).
#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();
    let restoring = Signal::derive(move || auth.get().restoring);
    let authed = Signal::derive(move || auth.get().session.is_some());

    view! {
        <Show
            when=move || !restoring.get()
            fallback=|| view! { <div class="splash">"Loading..."</div> }
        >
            <Show when=move || authed.get() fallback=|| view! { <LoginPage /> }>
                <AuthedApp />
            </Show>
        </Show>
    }
}

#[component]
fn AuthedApp() -> impl IntoView {
    view! {
        <Router>
            <MainLayout>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=OverviewDashboard />
                    <Route path=path!("/dashboard") view=|| view! { <Redirect path="/" /> } />

                    <Route path=path!("/users") view=domain::a001_user::UsersPage />
                    <Route path=path!("/machines") view=domain::a002_machine::MachinesPage />
                    <Route path=path!("/molds") view=domain::a003_mold::MoldsPage />
                    <Route path=path!("/products") view=domain::a004_product::ProductsPage />
                    <Route path=path!("/raw-materials") view=domain::a005_raw_material::RawMaterialsPage />
                    <Route path=path!("/suppliers") view=domain::a006_supplier::SuppliersPage />
                    <Route path=path!("/customers") view=domain::a007_customer::CustomersPage />
                    <Route path=path!("/containers") view=domain::a008_container::ContainersPage />
                    <Route path=path!("/production-orders") view=domain::a009_production_order::ProductionOrdersPage />
                    <Route path=path!("/work-orders") view=domain::a010_work_order::WorkOrdersPage />
                    <Route path=path!("/daily-schedule") view=domain::a011_daily_schedule::DailySchedulePage />
                    <Route path=path!("/machine-downtime") view=domain::a012_machine_downtime::MachineDowntimePage />
                    <Route path=path!("/maintenance-schedule") view=domain::a013_maintenance_schedule::MaintenanceSchedulePage />
                    <Route path=path!("/material-batches") view=domain::a014_material_batch::MaterialBatchesPage />
                    <Route path=path!("/finished-goods") view=domain::a015_finished_good::FinishedGoodsPage />
                    <Route path=path!("/sales-orders") view=domain::a016_sales_order::SalesOrdersPage />
                    <Route path=path!("/purchase-orders") view=domain::a017_purchase_order::PurchaseOrdersPage />
                    <Route path=path!("/quality-control") view=domain::a018_quality_inspection::QualityInspectionsPage />
                    <Route path=path!("/customer-complaints") view=domain::a019_customer_complaint::CustomerComplaintsPage />
                    <Route path=path!("/production-costs") view=domain::a020_production_cost::ProductionCostsPage />
                    <Route path=path!("/settings") view=SettingsPage />

                    // Legacy aliases kept from the previous navigation scheme.
                    <Route path=path!("/inventory") view=|| view! { <Redirect path="/raw-materials" /> } />
                    <Route path=path!("/schedule") view=|| view! { <Redirect path="/daily-schedule" /> } />
                    <Route path=path!("/qc") view=|| view! { <Redirect path="/quality-control" /> } />
                    <Route path=path!("/complaints") view=|| view! { <Redirect path="/customer-complaints" /> } />
                </Routes>
            </MainLayout>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Page not found"</h1>
            </div>
            <p>"The page you are looking for does not exist."</p>
        </div>
    }
}

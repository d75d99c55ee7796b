use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

struct MenuGroup {
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (path, label)
    admin_only: bool,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Production",
            icon: "factory",
            items: vec![
                ("/machines", "Machines"),
                ("/molds", "Molds"),
                ("/products", "Products"),
                ("/production-orders", "Production Orders"),
                ("/work-orders", "Work Orders"),
                ("/daily-schedule", "Daily Schedule"),
                ("/machine-downtime", "Machine Downtime"),
                ("/maintenance-schedule", "Maintenance"),
            ],
            admin_only: false,
        },
        MenuGroup {
            label: "Inventory",
            icon: "package",
            items: vec![
                ("/raw-materials", "Raw Materials"),
                ("/material-batches", "Material Batches"),
                ("/finished-goods", "Finished Goods"),
                ("/containers", "Containers"),
            ],
            admin_only: false,
        },
        MenuGroup {
            label: "Sales",
            icon: "customers",
            items: vec![
                ("/customers", "Customers"),
                ("/sales-orders", "Sales Orders"),
                ("/customer-complaints", "Complaints"),
            ],
            admin_only: false,
        },
        MenuGroup {
            label: "Purchasing",
            icon: "cart",
            items: vec![
                ("/suppliers", "Suppliers"),
                ("/purchase-orders", "Purchase Orders"),
            ],
            admin_only: false,
        },
        MenuGroup {
            label: "Quality",
            icon: "clipboard",
            items: vec![("/quality-control", "Inspections")],
            admin_only: false,
        },
        MenuGroup {
            label: "Finance",
            icon: "dollar",
            items: vec![("/production-costs", "Production Costs")],
            admin_only: false,
        },
        MenuGroup {
            label: "Administration",
            icon: "settings",
            items: vec![("/users", "Users"), ("/settings", "Settings")],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let is_admin = Signal::derive(move || auth.get().roles.contains(&Role::Admin));

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <A href="/">
                    {icon("dashboard")}
                    <span class="sidebar__brand-name">"MoldERP"</span>
                </A>
            </div>
            <nav class="sidebar__nav">
                {menu_groups().into_iter().map(|group| {
                    let items = group.items;
                    let hidden_for_non_admin = group.admin_only;
                    view! {
                        <div
                            class="sidebar__group"
                            style:display=move || {
                                if hidden_for_non_admin && !is_admin.get() { "none" } else { "block" }
                            }
                        >
                            <div class="sidebar__group-label">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <ul class="sidebar__items">
                                {items.into_iter().map(|(path, label)| view! {
                                    <li class="sidebar__item">
                                        <A href=path>{label}</A>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}

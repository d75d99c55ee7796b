//! Landing dashboard: collection counts and recent production orders.
//!
//! The four count fetches run in parallel; the stat row renders behind
//! one combined loading gate, matching the list pages' behavior.

use contracts::domain::a004_product::Product;
use contracts::domain::a005_raw_material::RawMaterial;
use contracts::domain::a009_production_order::ProductionOrder;
use contracts::domain::a015_finished_good::FinishedGood;
use contracts::domain::common::TableRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::stat_card::StatCard;
use crate::shared::crud::fetch_rows;
use crate::shared::date_utils::format_date;
use crate::shared::gateway::use_gateway;
use crate::shared::notify::use_notifications;

fn count_signal<T: TableRecord>() -> ReadSignal<Option<i64>> {
    let (count, set_count) = signal(None);
    let gateway = use_gateway();
    let notify = use_notifications();
    spawn_local(async move {
        match fetch_rows::<T>(gateway.0.as_ref()).await {
            Ok(rows) => {
                let _ = set_count.try_set(Some(rows.len() as i64));
            }
            Err(err) => {
                log::error!("count fetch of {} failed: {err}", T::table());
                notify.error(format!("Could not load {}: {err}", T::list_name()));
            }
        }
    });
    count
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let products = count_signal::<Product>();
    let raw_materials = count_signal::<RawMaterial>();
    let finished_goods = count_signal::<FinishedGood>();

    let (orders, set_orders) = signal(Vec::<ProductionOrder>::new());
    let (orders_loaded, set_orders_loaded) = signal(false);
    {
        let gateway = use_gateway();
        let notify = use_notifications();
        spawn_local(async move {
            match fetch_rows::<ProductionOrder>(gateway.0.as_ref()).await {
                Ok(rows) => {
                    let _ = set_orders.try_set(rows);
                }
                Err(err) => {
                    log::error!("fetch production_orders failed: {err}");
                    notify.error(format!("Could not load Production Orders: {err}"));
                }
            }
            let _ = set_orders_loaded.try_set(true);
        });
    }

    let order_count = Signal::derive(move || {
        if orders_loaded.get() {
            Some(orders.get().len() as i64)
        } else {
            None
        }
    });

    let recent_orders = Signal::derive(move || {
        orders.get().into_iter().take(5).collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <div class="stat-grid">
                <StatCard label="Products".to_string() icon_name="package".to_string() value=products />
                <StatCard label="Raw Materials".to_string() icon_name="package".to_string() value=raw_materials />
                <StatCard label="Finished Goods".to_string() icon_name="package".to_string() value=finished_goods />
                <StatCard label="Production Orders".to_string() icon_name="factory".to_string() value=order_count />
            </div>

            <div class="dashboard-section">
                <h2 class="dashboard-section__title">"Recent Production Orders"</h2>
                <Show
                    when=move || orders_loaded.get()
                    fallback=|| view! { <div class="data-table__loading">"Loading..."</div> }
                >
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Order #"</th>
                                    <th class="table__header-cell">"Target"</th>
                                    <th class="table__header-cell">"Actual"</th>
                                    <th class="table__header-cell">"Start"</th>
                                    <th class="table__header-cell">"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || recent_orders.get().into_iter().map(|order| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{order.order_number.clone().unwrap_or_else(|| "-".into())}</td>
                                        <td class="table__cell">{order.target_quantity.unwrap_or(0)}</td>
                                        <td class="table__cell">{order.actual_quantity.unwrap_or(0)}</td>
                                        <td class="table__cell">{format_date(order.scheduled_start_date.as_deref())}</td>
                                        <td class="table__cell">{order.status.clone().unwrap_or_else(|| "-".into())}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </div>
    }
}

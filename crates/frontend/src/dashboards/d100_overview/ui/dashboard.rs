use leptos::prelude::*;

use crate::dashboards::d100_overview::data::{
    bar_percent, max_value, BarPoint, KPIS, MONTHLY_REVENUE, SALES_BY_CATEGORY,
};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_money, group_thousands};

/// Horizontal bars, each scaled to the largest value of the set
#[component]
fn BarList(points: &'static [BarPoint]) -> impl IntoView {
    let max = max_value(points);
    points
        .iter()
        .map(|p| {
            let width = format!("width: {:.1}%;", bar_percent(p.value, max));
            view! {
                <div class="bar-row">
                    <span class="bar-row__label">{p.label}</span>
                    <div class="bar-row__track">
                        <div class="bar-row__fill" style=width></div>
                    </div>
                    <span class="bar-row__value">{format_money(p.value)}</span>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let cards = KPIS
        .iter()
        .map(|kpi| {
            let value = if kpi.money {
                format_money(kpi.value)
            } else {
                group_thousands(kpi.value as u64)
            };
            match kpi.change_percent() {
                Some(change) => view! {
                    <StatCard
                        label=kpi.label
                        icon_name=kpi.icon
                        value=value
                        change_percent=change
                        subtitle="vs. previous month"
                    />
                }
                .into_any(),
                None => view! { <StatCard label=kpi.label icon_name=kpi.icon value=value /> }.into_any(),
            }
        })
        .collect_view();

    view! {
        <div class="content">
            <PageHeader title="Overview" subtitle="Sample figures for the current month">
                <span class="badge badge--neutral">"Static data"</span>
            </PageHeader>

            <div class="stat-grid">{cards}</div>

            <div class="dashboard-grid">
                <CardAnimated delay_ms=0>
                    <h3 class="card-title">"Revenue by month"</h3>
                    <BarList points={&MONTHLY_REVENUE} />
                </CardAnimated>
                <CardAnimated delay_ms=80>
                    <h3 class="card-title">"Sales by category"</h3>
                    <BarList points={&SALES_BY_CATEGORY} />
                </CardAnimated>
            </div>
        </div>
    }
}

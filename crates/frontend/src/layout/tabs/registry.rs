//! Tab key to view mapping; every tab key is listed here.

use crate::dashboards::d100_overview::ui::OverviewDashboard;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_collection::ui::list::CollectionList;
use crate::domain::a003_product::ui::list::ProductList;
use crate::domain::a004_banner::ui::list::BannerList;
use crate::domain::a005_voucher::ui::list::VoucherList;
use crate::domain::a006_discount::ui::list::DiscountList;
use crate::domain::a007_blog::ui::list::BlogList;
use crate::domain::a008_order::ui::list::OrderList;
use crate::system::pages::profile::ProfilePage;
use leptos::prelude::*;

/// Placeholder for unknown keys (for example a stale `?active=`)
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d100_overview" => view! { <OverviewDashboard /> }.into_any(),

        "a001_category" => view! { <CategoryList /> }.into_any(),
        "a002_collection" => view! { <CollectionList /> }.into_any(),
        "a003_product" => view! { <ProductList /> }.into_any(),
        "a004_banner" => view! { <BannerList /> }.into_any(),
        "a005_voucher" => view! { <VoucherList /> }.into_any(),
        "a006_discount" => view! { <DiscountList /> }.into_any(),
        "a007_blog" => view! { <BlogList /> }.into_any(),
        "a008_order" => view! { <OrderList /> }.into_any(),

        "sys_profile" => view! { <ProfilePage /> }.into_any(),

        _ => {
            log::warn!("unknown tab key: {}", key);
            let key = key.to_string();
            view! {
                <div class="content">
                    <p>"Nothing to show for " <code>{key}</code></p>
                </div>
            }
            .into_any()
        }
    }
}

//! Titles of all tab keys; list screens use the entity's plural name.

use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_collection::aggregate::Collection;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a004_banner::aggregate::Banner;
use contracts::domain::a005_voucher::aggregate::Voucher;
use contracts::domain::a006_discount::aggregate::Discount;
use contracts::domain::a007_blog::aggregate::BlogPost;
use contracts::domain::a008_order::aggregate::Order;
use contracts::domain::common::EntityRecord;

pub const UNKNOWN_TAB: &str = "Untitled";

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d100_overview" => "Dashboard",

        "a001_category" => Category::list_name(),
        "a002_collection" => Collection::list_name(),
        "a003_product" => Product::list_name(),
        "a004_banner" => Banner::list_name(),
        "a005_voucher" => Voucher::list_name(),
        "a006_discount" => Discount::list_name(),
        "a007_blog" => BlogPost::list_name(),
        "a008_order" => Order::list_name(),

        "sys_profile" => "Profile",
        _ => UNKNOWN_TAB,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a001_category"), "Categories");
        assert_eq!(tab_label_for_key("a007_blog"), "Blog");
        assert_eq!(tab_label_for_key("nope"), UNKNOWN_TAB);
    }
}

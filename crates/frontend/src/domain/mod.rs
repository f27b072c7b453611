pub mod a001_category;
pub mod a002_collection;
pub mod a003_product;
pub mod a004_banner;
pub mod a005_voucher;
pub mod a006_discount;
pub mod a007_blog;
pub mod a008_order;

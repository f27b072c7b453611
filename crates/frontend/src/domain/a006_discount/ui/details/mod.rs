mod view;

pub use view::DiscountDetails;

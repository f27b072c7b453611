mod view;

pub use view::OrderDetails;

mod view;

pub use view::CategoryDetails;

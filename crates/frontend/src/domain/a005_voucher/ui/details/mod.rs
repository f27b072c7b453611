mod view;

pub use view::VoucherDetails;

mod view;

pub use view::BannerDetails;

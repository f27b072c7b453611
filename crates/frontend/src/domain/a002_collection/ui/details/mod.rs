mod view;

pub use view::CollectionDetails;

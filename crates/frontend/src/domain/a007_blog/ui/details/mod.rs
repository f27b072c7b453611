mod view;

pub use view::BlogPostDetails;

//! Tab management
//!
//! - `page` - TabPage wrapper showing one tab's content
//! - `registry` - tab key to view mapping
//! - `strip` - clickable tab headers
//! - `tab_labels` - titles of all tab keys

pub mod page;
pub mod registry;
pub mod strip;
pub mod tab_labels;

pub use page::TabPage;
pub use strip::TabStrip;
pub use tab_labels::tab_label_for_key;

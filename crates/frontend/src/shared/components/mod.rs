pub mod card_animated;
pub mod feedback;
pub mod form_fields;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table_checkbox;

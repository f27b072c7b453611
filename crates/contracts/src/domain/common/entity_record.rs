/// A backend-confirmed row (category, collection, voucher, ...)
///
/// Besides the instance id, each entity type carries its static UI/storage names.
pub trait EntityRecord: Clone {
    // ============================================================================
    // Instance
    // ============================================================================

    /// Backend id (`_id`)
    fn id(&self) -> &str;

    /// Text shown in tables, confirmations and logs
    fn title(&self) -> &str;

    // ============================================================================
    // Entity type metadata
    // ============================================================================

    /// Resource name: REST path segment and local storage key (e.g. "category")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Category")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Categories")
    fn list_name() -> &'static str;
}

/// Builds a record out of a payload when there is no backend to do it (demo mode)
pub trait FromPayload<P>: Sized {
    fn from_payload(id: String, payload: &P) -> Self;
}

/// Id for records created by the local demo store
pub fn new_local_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

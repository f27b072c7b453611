pub mod api_response;
pub mod pagination;
pub mod upload;
pub mod validation;

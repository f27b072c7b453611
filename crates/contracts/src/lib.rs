//! Wire types shared by the admin frontend and the REST backend contract.
//!
//! - `domain`: entity records, drafts and payloads (one module per aggregate)
//! - `system`: admin auth/session types
//! - `shared`: response envelope, pagination, validation, upload bookkeeping

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;

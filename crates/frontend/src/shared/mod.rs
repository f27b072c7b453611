pub mod api;
pub mod components;
pub mod config;
pub mod crud;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod state;
pub mod storage;
pub mod upload;

pub mod action;
pub mod error;
pub mod event;
pub mod handler;
pub mod reducer;
pub mod state;
pub mod store;

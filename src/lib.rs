//! Planner Frontend
//!
//! Browser-side interaction layer for the planner pages: list board,
//! calendar, habit grids, timeline and secret list unlocking.

pub mod api;
pub mod app;
pub mod board;
pub mod calendar;
pub mod components;
pub mod config;
pub mod context;
pub mod dom;
pub mod error;
pub mod habits;
pub mod models;
pub mod secret;
pub mod store;
pub mod timeline;

pub use app::boot;

//! Weather card - terminal weather lookup
//!
//! This library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod error;
pub mod geolocation;
pub mod icons;
pub mod location;
pub mod logging;
pub mod overview;
pub mod presentation;
pub mod reducer;
pub mod snapshot;
pub mod state;

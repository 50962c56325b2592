//! Trip planner client core.
//!
//! A headless client for a multimodal route planner: pick an origin and a
//! destination (by clicking, searching, or geolocation), choose a travel
//! mode, and draw the route the backend computes. Rendering is delegated
//! to the [`view::MapView`] and [`view::Panel`] traits.

pub mod app;
pub mod backend;
pub mod command;
pub mod config;
pub mod domain;
pub mod geocode;
pub mod route;
pub mod search;
pub mod session;
pub mod view;

//! Shared Dioxus components for client usage chart apps.
//!
//! This crate provides:
//! - `state`: Reactive AppState and the two tooltip signals
//! - `components`: The stacked bar chart, its tooltip, and page furniture
//!   (headers, containers, error/loading/empty states, selectors)

pub mod components;
pub mod state;

//! Core, DOM-free primitives and helpers for the page script.
pub mod cards;
pub mod config;
pub mod health;
pub mod notify;
pub mod schedule;
pub mod store;

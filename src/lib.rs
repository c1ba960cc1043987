// src/lib.rs
// Main library module declarations

pub mod cart;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod format;
pub mod storefront;
pub mod ui;

pub use storefront::Storefront;

//! Platform-independent core library for ruler-rs
//!
//! This crate contains all the logic for rendering a physical ruler
//! (centimeter and inch scales) on a pixel display: display-density
//! handling, real-world unit derivation, tick layout, rotation state,
//! view-state persistence, and the UI components and page that tie them
//! together.
//!
//! It is `no_std` (outside tests) so it compiles for embedded targets as
//! well as desktop hosts such as the simulator.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod display;
pub mod pages;
pub mod rotation;
pub mod state;
pub mod ticks;
pub mod ui;
pub mod units;

//! Leave accounting and calendar composition engine
//!
//! This crate merges public holidays and planned leave ranges into a per-day
//! ledger, charges leave against a yearly entitlement with a carry-over cap,
//! and renders the result as a month-by-month HTML calendar. It can be driven
//! from data files through the `leave-planner` binary or over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod render;

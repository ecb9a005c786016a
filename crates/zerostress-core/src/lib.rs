//! Core library for the Zero-Stress bundle site.
//!
//! Contains the vehicle listing model and catalog loader, the availability
//! filter and scarcity computation, the reservation dialog state machine, FAQ
//! disclosure state, the combined view state, dealer contact links, and the
//! static page content. This crate depends on `zerostress-storage` for the
//! listing source trait and knows nothing about HTTP or HTML.

pub mod contact;
pub mod content;
pub mod error;
pub mod faq;
pub mod inventory;
pub mod listing;
pub mod reservation;
pub mod view;

//! Core modules for the roster manager.
//!
//! The record and store types plus the shared primitives (errors, time,
//! rendering) live here. The menu shell is presentation only and talks to
//! the rest of the crate exclusively through [`store::Roster`].

pub mod error;
pub mod menu;
pub mod output;
pub mod record;
pub mod stats;
pub mod store;
pub mod time;

//! Opening-hours evaluation for the places listed by the tourism backend.
//!
//! Places come with weekly operating-hours rows such as
//! `{"day_of_week": "Everyday", "opening_time": "20:00", "closing_time": "02:00"}`.
//! [`timing::schedule::Schedule`] answers whether a place is open at a given
//! instant and whether it is about to open or close. All times are read on the
//! wall clock of a configurable [`timing::clock::Region`], UTC+7 by default.
//!
//! [`backend::client::BackendClient`] fetches places and their rows, and
//! [`watcher::Watcher`] polls a list of places and logs their status.

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod timing;
pub mod watcher;

pub use error::{Error, Result};

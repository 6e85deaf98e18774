//! Packlist Library
//!
//! Core library for the Packlist desktop application: a trip packing list
//! kept in local storage.

pub mod app;
pub mod storage;
pub mod store;
pub mod types;
pub mod ui;

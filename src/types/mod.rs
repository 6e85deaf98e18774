//! Shared type definitions
//!
//! This module contains the data types shared by the store, storage and UI.

pub mod config;
pub mod item;

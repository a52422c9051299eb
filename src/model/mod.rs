//! Core data types shared across the crate.

pub mod contact;

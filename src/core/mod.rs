//! Core catalog mechanisms.

pub mod binge;
pub mod catalog;
pub mod generator;
pub mod registry;
pub mod scanner;
pub mod sequence;

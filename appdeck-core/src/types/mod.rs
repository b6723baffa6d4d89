//! Core data types shared across the Appdeck layers.

pub mod label;

pub use label::AppLabel;

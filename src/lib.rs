//! Weighted random selection over a table built once and picked from many times.
pub mod config;
pub mod weighted;

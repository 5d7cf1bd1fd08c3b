//! Core input-state and coordinate types.

pub mod action;
pub mod geometry;

//! Keygrid Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Keygrid parser
//! and renderer:
//!
//! - **Keymap**: Keys and titled layers ([`keymap`] module)
//! - **Geometry**: Integer points and rectangles ([`geometry`] module)

pub mod geometry;
pub mod keymap;

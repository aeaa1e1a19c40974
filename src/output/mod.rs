//! Serialize HTML trees.
//!
//! There are two output methods: [`compact`], which puts everything on one
//! line, and [`pretty`], which breaks lines and indents to fit a maximum
//! column. Both are controlled by a `Parameters` struct.
pub mod compact;
pub(crate) mod html5elements;
pub mod pretty;
mod serializer;

pub use serializer::Output;

pub(crate) const DOCTYPE: &str = "<!DOCTYPE html>";

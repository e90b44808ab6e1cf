//! Step definitions for board drag-and-drop scenarios.

mod given;
mod then;
mod when;
pub mod world;

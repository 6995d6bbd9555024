//! Human-readable rendering of parsed layouts.

pub mod keyboard_renderer;

pub use keyboard_renderer::{render_layer_table, render_layout};

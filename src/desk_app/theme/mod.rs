//! Theme Module
//!
//! Colour palette and frame builders for the customer desk.
//!
//! ```rust,ignore
//! use crate::desk_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_PRIMARY, "Customer List");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;

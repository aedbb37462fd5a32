//! PostScript renderer for star geometry
//!
//! This module takes a StarGeometry and produces the page-description text
//! a printer or viewer draws as the star.

pub mod config;
pub mod postscript;

pub use config::PostScriptConfig;
pub use postscript::{render_postscript, write_postscript, PsWriter};

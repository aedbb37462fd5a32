//! Siemens star generator
//!
//! Computes the wedges of a Siemens star resolution target and serializes
//! them as a one-page PostScript document.
//!
//! # Example
//!
//! ```rust
//! use sstar::render;
//!
//! let ps = render(4).unwrap();
//! assert!(ps.starts_with("%!PS-Adobe-2.0"));
//! assert_eq!(ps.matches("newpath").count(), 4);
//! ```

pub mod error;
pub mod geometry;
pub mod renderer;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use tracing::info;

pub use error::StarError;
pub use geometry::{
    PageConfig, PageGeometry, Point, RotationMatrix, SpokeCount, StarGeometry, Wedge,
    WedgeStrategy,
};
pub use renderer::{render_postscript, write_postscript, PostScriptConfig};

/// Render a star with `spokes` spokes using the default configuration
pub fn render(spokes: i64) -> Result<String, StarError> {
    render_with_config(spokes, &PostScriptConfig::default())
}

/// Render a star with `spokes` spokes using a custom configuration
///
/// # Example
///
/// ```rust
/// use sstar::{render_with_config, PageConfig, PostScriptConfig};
///
/// let config = PostScriptConfig::new()
///     .with_page(PageConfig::new().with_size(595.0, 842.0))
///     .with_creator("a4-star");
///
/// let ps = render_with_config(8, &config).unwrap();
/// assert!(ps.contains("%%Creator: a4-star"));
/// assert!(ps.contains("[595 842]"));
/// ```
pub fn render_with_config(spokes: i64, config: &PostScriptConfig) -> Result<String, StarError> {
    let spokes = SpokeCount::new(spokes)?;
    let star = StarGeometry::compute(spokes);
    render_postscript(&star, config)
}

/// Render a star and stream it to `config.output`
///
/// The spoke count and page are validated before the output file is opened,
/// so invalid input never creates or truncates it.
pub fn write_star(spokes: i64, config: &PostScriptConfig) -> Result<PathBuf, StarError> {
    let spokes = SpokeCount::new(spokes)?;
    PageGeometry::from_config(&config.page)?;
    let star = StarGeometry::compute(spokes);

    let file = File::create(&config.output)?;
    write_postscript(&star, config, BufWriter::new(file))?;

    info!(path = %config.output.display(), spokes = spokes.get(), "wrote star");
    Ok(config.output.clone())
}

//! PostScript generation from star geometry

use std::io::{self, Write};

use tracing::debug;

use crate::error::StarError;
use crate::geometry::{PageGeometry, StarGeometry, Wedge};

use super::PostScriptConfig;

/// Stream a PostScript document into a writer, one directive per line
pub struct PsWriter<W: Write> {
    out: W,
    wedges: usize,
}

impl<W: Write> PsWriter<W> {
    /// Wrap a writer
    pub fn new(out: W) -> Self {
        Self { out, wedges: 0 }
    }

    /// Write the DSC header comments
    pub fn write_header(&mut self, creator: &str) -> io::Result<()> {
        writeln!(self.out, "%!PS-Adobe-2.0")?;
        writeln!(self.out, "%%Creator: {}", creator)?;
        writeln!(self.out, "%%BoundingBox: 0 0 width height")?;
        writeln!(self.out, "%%LanguageLevel: 2")?;
        writeln!(self.out, "%%Pages: 1")
    }

    /// Request the physical page size from the output device
    pub fn write_page_device(&mut self, width: f64, height: f64) -> io::Result<()> {
        writeln!(self.out, "<< /PageSize [{} {}] >> setpagedevice", width, height)
    }

    /// Move the origin to the star center and scale unit space onto the page
    pub fn write_coordinate_setup(&mut self, geom: &PageGeometry) -> io::Result<()> {
        writeln!(self.out, "{} {} translate", geom.translate_x, geom.translate_y)?;
        writeln!(self.out, "{} dup scale", format_number(geom.scale))
    }

    /// Write one filled triangle
    pub fn write_wedge(&mut self, wedge: &Wedge) -> io::Result<()> {
        let (xs, ys) = (wedge.xs(), wedge.ys());
        writeln!(self.out, "newpath")?;
        for (i, (x, y)) in xs.iter().zip(ys.iter()).enumerate() {
            let op = if i == 0 { "moveto" } else { "lineto" };
            writeln!(self.out, "{} {} {}", format_number(*x), format_number(*y), op)?;
        }
        writeln!(self.out, "closepath")?;
        writeln!(self.out, "fill")?;
        self.wedges += 1;
        Ok(())
    }

    /// Number of wedges written so far
    pub fn wedge_count(&self) -> usize {
        self.wedges
    }

    /// Close the document with `showpage` and `%%EOF`, flush, and hand back the writer
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.out, "showpage")?;
        writeln!(self.out, "%%EOF")?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Format a number with six decimals, printing negative zero as zero
pub fn format_number(value: f64) -> String {
    let value = if value.abs() <= 5e-7 { 0.0 } else { value };
    format!("{:.6}", value)
}

/// Stream a complete star document into `out`
///
/// The page is validated before anything is written.
pub fn write_postscript<W: Write>(
    star: &StarGeometry,
    config: &PostScriptConfig,
    out: W,
) -> Result<W, StarError> {
    let page = PageGeometry::from_config(&config.page)?;

    let mut writer = PsWriter::new(out);
    writer.write_header(&config.creator)?;
    writer.write_page_device(config.page.width, config.page.height)?;
    writer.write_coordinate_setup(&page)?;

    for wedge in star.wedges(config.strategy) {
        writer.write_wedge(&wedge)?;
    }

    debug!(
        wedges = writer.wedge_count(),
        scale = page.scale,
        strategy = ?config.strategy,
        "rendered postscript"
    );

    Ok(writer.finish()?)
}

/// Render a complete star document into memory
pub fn render_postscript(
    star: &StarGeometry,
    config: &PostScriptConfig,
) -> Result<String, StarError> {
    let buf = write_postscript(star, config, Vec::new())?;
    let doc = String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(doc)
}

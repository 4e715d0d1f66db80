//! Command handlers for the `hfork` CLI.
//!
//! These functions implement the top‑level subcommands. They return images or
//! write to the supplied sinks; `main` decides where results go.

use std::{
    fmt, fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use hilbertfork::{Order, hilbert_curve, points, refinements};
use image::RgbaImage;
use tracing::{debug, info};

use crate::render::{StrokeOptions, render_path_image};

/// File name the original plotter used for a given order.
pub fn default_output_name(order: Order) -> PathBuf {
    PathBuf::from(format!("Hilbert_curve_{order}.png"))
}

/// Largest accepted image side in pixels.
pub const MAX_IMAGE_SIZE: u32 = 16384;

/// Reject image sizes and strokes that cannot hold a drawing.
fn check_canvas(size: u32, stroke: StrokeOptions) -> Result<()> {
    if size > MAX_IMAGE_SIZE {
        bail!("image size {size} exceeds the maximum of {MAX_IMAGE_SIZE} pixels");
    }
    if stroke.line_width == 0 {
        bail!("line width must be >= 1");
    }
    if size <= stroke.margin.saturating_mul(2) {
        bail!(
            "image size {} leaves no room inside a {}px margin",
            size,
            stroke.margin
        );
    }
    Ok(())
}

/// Render the curve of `order` onto a `size×size` image.
pub fn plot(order: Order, size: u32, stroke: StrokeOptions) -> Result<RgbaImage> {
    check_canvas(size, stroke)?;

    let path = hilbert_curve(order);
    debug!(%order, points = path.len(), "generated curve");
    Ok(render_path_image(size, &path, stroke))
}

/// Render every order from 0 to `max` into `dir`, one PNG per order.
///
/// Files are named with [`default_output_name`]. Returns the written paths.
pub fn series(max: Order, dir: &Path, size: u32, stroke: StrokeOptions) -> Result<Vec<PathBuf>> {
    check_canvas(size, stroke)?;
    fs::create_dir_all(dir)
        .with_context(|| format!("could not create output directory {}", dir.display()))?;

    let total = max.value() + 1;
    let mut pb = pbr::ProgressBar::new(u64::from(total));
    pb.format("╢▌▌░╟");

    let mut written = Vec::with_capacity(total as usize);
    let mut steps = refinements();
    while let Some((order, path)) = steps.advance() {
        let image = render_path_image(size, path, stroke);
        let out = dir.join(default_output_name(order));
        image
            .save(&out)
            .with_context(|| format!("could not write {}", out.display()))?;
        info!(%order, file = %out.display(), "saved");
        written.push(out);
        pb.inc();
        if order == max {
            break;
        }
    }

    pb.finish();
    Ok(written)
}

/// Text layouts for `points`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PointFormat {
    /// Whitespace separated `x y` pairs.
    Text,
    /// Comma separated with an `x,y` header row.
    Csv,
}

/// Stream the points of `order` to `out`, one per line.
///
/// Returns the number of points written.
pub fn write_points<W: Write>(order: Order, format: PointFormat, mut out: W) -> Result<usize> {
    let sep = match format {
        PointFormat::Text => ' ',
        PointFormat::Csv => {
            writeln!(out, "x,y")?;
            ','
        }
    };

    let mut count = 0;
    for p in points(order) {
        writeln!(out, "{}{sep}{}", p.x, p.y)?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Summary of the curve at one order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrderInfo {
    /// The order described.
    pub order: Order,
    /// Number of points, `4^(order+1)`.
    pub points: usize,
    /// Number of caps, `4^order`.
    pub caps: usize,
    /// Cells along each side of the unit square.
    pub grid_side: u32,
    /// Distance between consecutive points.
    pub step: f64,
}

impl OrderInfo {
    /// Describe `order`.
    pub fn new(order: Order) -> Self {
        Self {
            order,
            points: order.point_count(),
            caps: order.cap_count(),
            grid_side: order.grid_side(),
            step: order.step(),
        }
    }
}

impl fmt::Display for OrderInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "order: {}", self.order)?;
        writeln!(f, "points: {}", self.points)?;
        writeln!(f, "caps: {}", self.caps)?;
        writeln!(f, "grid: {0}x{0}", self.grid_side)?;
        write!(f, "step: {}", self.step)
    }
}

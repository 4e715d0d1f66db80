//! Command‑line entry point for the `hfork` tool.
//!
//! Renders Hilbert curve approximations to PNG files and prints their point
//! sequences.

use std::{
    io::{self, BufWriter},
    path::{Path, PathBuf},
    process,
};

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use hilbertfork::{MAX_ORDER, Order};
use image::Rgba;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Colour parsing for command‑line options.
mod color;
/// CLI command implementations.
mod cmd;
/// Rendering helpers shared by the CLI.
mod render;

use crate::{
    cmd::PointFormat,
    color::parse_rgba_color,
    render::{Palette, StrokeOptions},
};

/// Parse and validate a curve order argument.
///
/// Orders are checked here rather than by clap so an invalid order reports
/// through `run` and exits with status 1.
fn parse_order(s: &str) -> Result<Order> {
    Ok(s.parse::<Order>()?)
}

#[derive(Parser)]
#[command(name = "hfork")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = ArgAction::Count, global = true, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the image‑producing subcommands.
#[derive(clap::Args, Clone, Copy)]
struct CanvasArgs {
    #[arg(short = 's', long = "size", default_value_t = 512, help = "Square image size in pixels")]
    /// Image size in pixels (square output).
    size: u32,

    #[arg(
        short = 'w',
        long = "line-width",
        value_name = "PIXELS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Line width in pixels for the curve stroke"
    )]
    /// Stroke width for the rendered curve.
    line_width: u32,

    #[arg(
        short = 'm',
        long = "margin",
        value_name = "PIXELS",
        default_value_t = 0,
        help = "Blank border around the unit square"
    )]
    /// Border between the unit square and the image edge.
    margin: u32,

    #[arg(
        long = "fg",
        visible_alias = "foreground",
        value_parser = parse_rgba_color,
        default_value = "#1f77b4",
        value_name = "HEX",
        help = "Foreground color (name or hex; RGB/RRGGBB with optional alpha, '#' optional)"
    )]
    /// Stroke color for the curve.
    foreground: Rgba<u8>,

    #[arg(
        long = "bg",
        visible_alias = "background",
        value_parser = parse_rgba_color,
        default_value = "#ffffff",
        value_name = "HEX",
        help = "Background color (name or hex; RGB/RRGGBB with optional alpha, '#' optional)"
    )]
    /// Background color for the image.
    background: Rgba<u8>,
}

impl CanvasArgs {
    /// Stroke settings derived from the arguments.
    fn stroke(&self) -> StrokeOptions {
        StrokeOptions {
            line_width: self.line_width,
            margin: self.margin,
            palette: Palette {
                foreground: self.foreground,
                background: self.background,
            },
        }
    }
}

#[derive(Subcommand)]
/// Subcommands supported by the `hfork` tool.
enum Commands {
    #[command(about = "Plot the curve of a given order to a PNG file", allow_negative_numbers = true)]
    /// Plot one order.
    Plot {
        #[arg(help = &format!("Curve order (0..={MAX_ORDER})"))]
        /// Curve order.
        order: String,

        #[arg(help = "Output file path (default: Hilbert_curve_<ORDER>.png)")]
        /// Optional output file path.
        output: Option<PathBuf>,

        #[command(flatten)]
        /// Image options.
        canvas: CanvasArgs,
    },

    #[command(about = "Plot every order from 0 up to a maximum", allow_negative_numbers = true)]
    /// Plot a series of orders.
    Series {
        #[arg(help = &format!("Highest order to plot (0..={MAX_ORDER})"))]
        /// Highest order rendered.
        max_order: String,

        #[arg(short = 'd', long = "dir", default_value = ".", help = "Output directory")]
        /// Directory receiving the images.
        dir: PathBuf,

        #[command(flatten)]
        /// Image options.
        canvas: CanvasArgs,
    },

    #[command(about = "Print the points of a curve, one per line", allow_negative_numbers = true)]
    /// Print the point sequence.
    Points {
        #[arg(help = &format!("Curve order (0..={MAX_ORDER})"))]
        /// Curve order.
        order: String,

        #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
        /// Output layout.
        format: PointFormat,
    },

    #[command(about = "Show point count and step size for an order", allow_negative_numbers = true)]
    /// Describe an order.
    Info {
        #[arg(help = &format!("Curve order (0..={MAX_ORDER})"))]
        /// Curve order.
        order: String,
    },
}

/// Install the stderr log subscriber. `RUST_LOG` overrides `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Handle the `plot` subcommand.
fn handle_plot(order: Order, output: Option<&Path>, canvas: CanvasArgs) -> Result<()> {
    let output = output.map_or_else(|| cmd::default_output_name(order), Path::to_path_buf);
    let image = cmd::plot(order, canvas.size, canvas.stroke())?;
    image.save(&output)?;
    info!(%order, file = %output.display(), "saved");
    println!("Saved {}", output.display());
    Ok(())
}

/// Handle the `series` subcommand.
fn handle_series(max_order: Order, dir: &Path, canvas: CanvasArgs) -> Result<()> {
    let written = cmd::series(max_order, dir, canvas.size, canvas.stroke())?;
    println!("Saved {} images to {}", written.len(), dir.display());
    Ok(())
}

/// Handle the `points` subcommand.
fn handle_points(order: Order, format: PointFormat) -> Result<()> {
    let stdout = io::stdout().lock();
    let count = cmd::write_points(order, format, BufWriter::new(stdout))?;
    info!(%order, count, "wrote points");
    Ok(())
}

/// Handle the `info` subcommand.
fn handle_info(order: Order) {
    println!("{}", cmd::OrderInfo::new(order));
}

/// Dispatch the selected subcommand.
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Plot {
            order,
            output,
            canvas,
        } => handle_plot(parse_order(&order)?, output.as_deref(), canvas),
        Commands::Series {
            max_order,
            dir,
            canvas,
        } => handle_series(parse_order(&max_order)?, &dir, canvas),
        Commands::Points { order, format } => handle_points(parse_order(&order)?, format),
        Commands::Info { order } => {
            handle_info(parse_order(&order)?);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    if let Err(e) = run(cli) {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_orders() {
        assert_eq!(parse_order("3").ok(), Order::new(3).ok());
        assert!(parse_order("-1").is_err());
        assert!(parse_order("1.5").is_err());
    }

    #[test]
    fn invalid_orders_fail_in_run_not_in_clap() {
        for args in [
            ["hfork", "plot", "-1"],
            ["hfork", "plot", "1.5"],
            ["hfork", "info", "15"],
        ] {
            let cli = Cli::try_parse_from(args).expect("clap accepts any order text");
            let err = run(cli).expect_err("invalid order rejected");
            assert!(err.to_string().contains("invalid order"), "{err}");
        }
    }

    #[test]
    fn plot_defaults() {
        let cli = Cli::try_parse_from(["hfork", "plot", "4"]).expect("parses");
        match cli.command {
            Commands::Plot {
                order,
                output,
                canvas,
            } => {
                assert_eq!(order, "4");
                assert!(output.is_none());
                assert_eq!(canvas.size, 512);
                assert_eq!(canvas.line_width, 1);
                assert_eq!(canvas.margin, 0);
                assert_eq!(canvas.foreground, Rgba([0x1f, 0x77, 0xb4, 0xff]));
            }
            _ => panic!("expected plot"),
        }
    }
}

//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Highest order rendered by `gallery` unless overridden.
const DEFAULT_GALLERY_ORDER: u32 = 6;

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests using cargo nextest.
    Test,
    /// Render orders 0..=max_order into `gallery/` with the release CLI.
    Gallery {
        /// Highest order to render.
        #[arg(default_value_t = DEFAULT_GALLERY_ORDER)]
        max_order: u32,
        /// Image size in pixels.
        #[arg(long, default_value_t = 1024)]
        size: u32,
    },
}

/// Common repository paths computed relative to the `xtask` crate.
#[derive(Debug, Clone)]
struct RepoPaths {
    /// Repository root directory.
    root: PathBuf,
    /// `gallery/` output directory.
    gallery: PathBuf,
}

impl RepoPaths {
    /// Discover repository paths from `CARGO_MANIFEST_DIR`.
    fn discover() -> Result<Self> {
        let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let root = xtask_dir
            .parent()
            .context("xtask crate has no parent directory")?
            .to_path_buf();
        Ok(Self {
            gallery: root.join("gallery"),
            root,
        })
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = RepoPaths::discover()?;

    match cli.command {
        CommandName::Tidy => tidy(&paths),
        CommandName::Test => test(&paths),
        CommandName::Gallery { max_order, size } => gallery(&paths, max_order, size),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(paths: &RepoPaths) -> Result<()> {
    format_workspace(paths)?;
    lint_workspace(paths)?;
    format_workspace(paths)?;
    Ok(())
}

/// Run tests using cargo nextest.
fn test(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(sh, "cargo nextest run --all").run()?;
    Ok(())
}

/// Format the Rust workspace using rustfmt.
fn format_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;

    let config = paths.root.join("rustfmt-nightly.toml");
    if config.is_file() {
        cmd!(sh, "cargo +nightly fmt --all -- --config-path {config}").run()?;
        return Ok(());
    }

    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Run clippy across the workspace, applying safe fixes.
fn lint_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --examples"
    )
    .run()?;
    Ok(())
}

/// Render a series of orders through the `hfork` CLI and list the results.
fn gallery(paths: &RepoPaths, max_order: u32, size: u32) -> Result<()> {
    if size == 0 {
        bail!("gallery image size must be >= 1");
    }
    let sh = repo_shell(paths)?;
    let dir = &paths.gallery;
    let max_order = max_order.to_string();
    let size = size.to_string();

    cmd!(
        sh,
        "cargo run --release -q -p hfork -- series {max_order} --dir {dir} --size {size}"
    )
    .run()?;

    println!();
    println!("Gallery contents:");
    for (order, path) in gallery_images(dir)? {
        println!("{order:>3}  {}", path.display());
    }
    Ok(())
}

/// Create a verbose shell rooted at the repository root.
fn repo_shell(paths: &RepoPaths) -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(&paths.root);
    Ok(sh)
}

/// Order encoded in a `Hilbert_curve_<order>.png` file name.
fn image_order(path: &Path) -> Option<u32> {
    path.file_name()?
        .to_str()?
        .strip_prefix("Hilbert_curve_")?
        .strip_suffix(".png")?
        .parse()
        .ok()
}

/// Rendered curve images in `dir`, ordered by curve order.
fn gallery_images(dir: &Path) -> Result<Vec<(u32, PathBuf)>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut images = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read directory entry in {}", dir.display()))?
            .path();
        if let Some(order) = image_order(&path) {
            images.push((order, path));
        }
    }

    images.sort_unstable_by_key(|(order, _)| *order);
    Ok(images)
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn image_orders_from_names() {
        assert_eq!(image_order(Path::new("g/Hilbert_curve_12.png")), Some(12));
        assert_eq!(image_order(Path::new("Hilbert_curve_x.png")), None);
        assert_eq!(image_order(Path::new("Hilbert_curve_3.gif")), None);
        assert_eq!(image_order(Path::new("notes.txt")), None);
    }

    #[test]
    fn gallery_sorts_numerically() -> Result<()> {
        let dir = env::temp_dir().join(format!("xtask-gallery-{}", process::id()));
        fs::create_dir_all(&dir)?;
        for name in ["Hilbert_curve_10.png", "Hilbert_curve_2.png", "README"] {
            fs::write(dir.join(name), b"")?;
        }

        let orders: Vec<u32> = gallery_images(&dir)?.into_iter().map(|(o, _)| o).collect();
        fs::remove_dir_all(&dir)?;
        assert_eq!(orders, [2, 10]);
        Ok(())
    }
}

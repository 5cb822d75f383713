// File: crates/gapminder-cli/src/main.rs
// Summary: Loads the Gapminder CSV, renders the year's scatter plot to PNG/SVG and, with --hover, a frame with the tooltip.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gapminder_core::{
    compose, theme, Dataset, LineConfig, MissingPolicy, RenderOptions, ScatterConfig, ScatterPlot, Scene,
    TooltipController,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Png,
    Svg,
    Both,
}

#[derive(Parser, Debug)]
#[command(name = "gapminder")]
#[command(about = "Render a fertility vs. life expectancy scatter plot from a Gapminder CSV", long_about = None)]
struct Args {
    /// Path to the Gapminder CSV
    #[arg(default_value = "gapminder.csv")]
    input: String,

    /// Year to plot (matched against the `year` column as text)
    #[arg(long, default_value = "1980")]
    year: String,

    /// Also render a frame with the tooltip shown for this country
    #[arg(long)]
    hover: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Directory for rendered files
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Theme preset (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// What to do with missing numeric values: skip, zero or error
    #[arg(long, default_value = "skip")]
    missing: MissingPolicy,

    /// Leave out all text (titles, tick labels, country labels)
    #[arg(long)]
    no_labels: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let (path, used_alt) = resolve_path(&args.input)?;
    tracing::info!(path = %path.display(), "using input file");
    if used_alt {
        tracing::info!("extension swapped between .csv/.cvs");
    }

    let dataset = Dataset::from_path(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if dataset.is_empty() {
        anyhow::bail!("no rows loaded from {}; check headers/delimiter", path.display());
    }

    let theme = theme::find(&args.theme);
    let config = ScatterConfig { year: args.year.clone(), missing: args.missing, ..ScatterConfig::default() };
    let plot = ScatterPlot::build(&dataset, &config).with_context(|| format!("building scatter plot for {}", args.year))?;
    tracing::info!(
        points = plot.points.len(),
        fertility = ?(plot.limits.x.min, plot.limits.x.max),
        life_expectancy = ?(plot.limits.y.min, plot.limits.y.max),
        "scatter plot ready"
    );

    let opts = RenderOptions { draw_labels: !args.no_labels };
    let scene = plot.scene(&theme);
    write_outputs(&scene, &opts, args.format, &out_name_with(&args.out_dir, &path, &args.year))?;

    if let Some(country) = &args.hover {
        let point = plot
            .points
            .iter()
            .find(|p| &p.country == country)
            .with_context(|| format!("'{}' is not plotted for {}", country, args.year))?;

        // Hover at the circle centre, as a pointer entering it would.
        let mut tooltips = TooltipController::new(LineConfig::default());
        tooltips
            .hover_in(&dataset, point, &args.year, (point.px, point.py))
            .with_context(|| format!("building tooltip for '{country}'"))?;
        let frame = compose(&scene, tooltips.active(), &theme);
        let suffix = format!("{}_{}", args.year, slug(country));
        write_outputs(&frame, &opts, args.format, &out_name_with(&args.out_dir, &path, &suffix))?;
        tooltips.hover_out();
    }

    Ok(())
}

fn write_outputs(scene: &Scene, opts: &RenderOptions, format: Format, png_path: &Path) -> Result<()> {
    if matches!(format, Format::Png | Format::Both) {
        scene.render_to_png(opts, png_path).with_context(|| format!("writing {}", png_path.display()))?;
        println!("Wrote {}", png_path.display());
    }
    if matches!(format, Format::Svg | Format::Both) {
        let svg_path = png_path.with_extension("svg");
        scene.render_to_svg(opts, &svg_path).with_context(|| format!("writing {}", svg_path.display()))?;
        println!("Wrote {}", svg_path.display());
    }
    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like <out_dir>/scatter_<stem>_<suffix>.png
fn out_name_with(out_dir: &Path, input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("gapminder");
    out_dir.join(format!("scatter_{}_{}.png", slug(stem), suffix))
}

fn slug(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

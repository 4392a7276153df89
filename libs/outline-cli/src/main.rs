//! Outline STL command.
//!
//! Converts every glyph of a font, or the first rectangle of an `.svg`
//! drawing, into one extruded solid and writes it as an ASCII document.
//!
//! # Usage
//!
//! ```text
//! outline-stl DejaVuSans.ttf -d 2 -o font.stl
//! outline-stl drawing.svg --report
//! outline-stl font.otf -o - > font.stl
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use config::constants::{ConversionConfig, DEFAULT_DEPTH, DEFAULT_GLYPH_SIZE};
use outline_mesh::{
    convert_parallel, convert_with_report, write_ascii, ConvertOptions, OutlineSource,
    SideNormals,
};
use outline_source::{FontSource, RectangleSource};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Extrude font glyphs or a drawing rectangle into an ASCII solid
#[derive(Parser, Debug)]
#[command(name = "outline-stl")]
#[command(version, long_about = None)]
struct Cli {
    /// Font file, or an `.svg` drawing
    #[arg(name = "INPUT")]
    input: PathBuf,

    /// Output file; `-` writes to stdout. Defaults to `<name>.stl`
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extrusion depth
    #[arg(short, long, default_value_t = DEFAULT_DEPTH, allow_negative_numbers = true)]
    depth: f64,

    /// Glyph em size in output units (fonts only)
    #[arg(long, default_value_t = DEFAULT_GLYPH_SIZE)]
    size: f64,

    /// Solid name written into the document
    #[arg(long)]
    name: Option<String>,

    /// Give side walls outward unit normals instead of zero vectors
    #[arg(long)]
    outward_normals: bool,

    /// Convert shapes on all cores
    #[arg(long)]
    parallel: bool,

    /// Print conversion diagnostics as JSON on stderr
    #[arg(long)]
    report: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            config: ConversionConfig {
                depth: self.depth,
                ..Default::default()
            },
            side_normals: if self.outward_normals {
                SideNormals::Outward
            } else {
                SideNormals::Placeholder
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if is_drawing(&cli.input) {
        let mut source = RectangleSource::open(&cli.input)
            .with_context(|| format!("failed to read drawing {}", cli.input.display()))?;
        if let Some(name) = &cli.name {
            source = source.with_name(name);
        }
        run(&source, &cli)
    } else {
        let mut source = FontSource::open(&cli.input)
            .and_then(|font| font.with_size(cli.size))
            .with_context(|| format!("failed to load font {}", cli.input.display()))?;
        if let Some(name) = &cli.name {
            source = source.with_name(name);
        }
        run(&source, &cli)
    }
}

fn run<S: OutlineSource + ?Sized>(source: &S, cli: &Cli) -> Result<()> {
    let options = cli.options();
    let (solid, report) = if cli.parallel {
        convert_parallel(source, &options)
    } else {
        convert_with_report(source, &options)
    }
    .context("conversion failed")?;

    let output = output_path(cli.output.as_deref(), solid.name());
    if output.as_path() == Path::new("-") {
        write_ascii(&solid, io::stdout().lock()).context("failed to write to stdout")?;
    } else {
        let file = File::create(&output)
            .with_context(|| format!("failed to create {}", output.display()))?;
        write_ascii(&solid, BufWriter::new(file))
            .with_context(|| format!("failed to write {}", output.display()))?;
        info!(path = %output.display(), facets = solid.facet_count(), "wrote solid");
    }

    if cli.report {
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn is_drawing(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn output_path(explicit: Option<&Path>, solid_name: &str) -> PathBuf {
    explicit.map_or_else(|| PathBuf::from(format!("{solid_name}.stl")), Path::to_path_buf)
}

#![forbid(unsafe_code)]

mod telemetry;

use std::io::{self, Write as _};

use box_filter_gen::{
    band::{self, parse_radius},
    render, Density, Diameter, Mask, MaskParams, RadiusBand,
};
use clap::{
    builder::{styling::AnsiColor, Styles},
    Parser, ValueEnum,
};
use color_eyre::{eyre::WrapErr, Result};
use tracing::debug;

use crate::telemetry::TelemetryConfig;

fn make_clap_v3_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Glyph block followed by the flat `d,d,...` list
    Text,
    /// Pretty printed JSON object
    Json,
}

/// Generates a square binary box filter mask and prints it to stdout.
#[derive(Parser, Debug)]
#[command(
    about,
    version,
    styles = make_clap_v3_styles(),
    allow_negative_numbers = true
)]
struct Args {
    /// Side length of the mask. Must be an odd positive integer.
    diameter: Diameter,

    /// Smallest distance from the center a cell may have to be set.
    #[arg(value_parser = parse_radius, default_value_t = band::DEFAULT_INNER_RADIUS)]
    rad0: f64,

    /// Largest distance from the center a cell may have to be set.
    #[arg(value_parser = parse_radius, default_value_t = band::DEFAULT_OUTER_RADIUS)]
    rad1: f64,

    /// Free words. The first of `oddeven`, `quarter` or `onefifth` sets the
    /// density, anything else is ignored.
    tokens: Vec<String>,

    /// Density mode. Takes precedence over a density word in TOKENS.
    #[arg(long, value_enum)]
    density: Option<Density>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Args {
    fn density(&self) -> Density {
        if let Some(d) = self.density {
            return d;
        }
        Density::scan(&self.tokens).unwrap_or_else(|| {
            if !self.tokens.is_empty() {
                debug!(tokens = ?self.tokens, "no density word found, using all");
            }
            Density::All
        })
    }

    fn mask_params(&self) -> MaskParams {
        MaskParams::new(self.diameter)
            .with_band(RadiusBand::new(self.rad0, self.rad1))
            .with_density(self.density())
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    TelemetryConfig::default().init()?;

    let args = Args::parse();
    debug!(args = ?args, "parsed arguments");

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let params = args.mask_params();
    let mask = Mask::generate(&params);

    // Render fully before touching stdout so a failure never leaves half a mask.
    let mut out = Vec::new();
    match args.format {
        OutputFormat::Text => render::write_text(&mut out, &mask),
        OutputFormat::Json => render::write_json(&mut out, &params, &mask),
    }
    .wrap_err("failed to render mask")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&out)
        .and_then(|()| stdout.flush())
        .wrap_err("failed to write mask to stdout")?;

    Ok(())
}

use anstream::{eprintln, println};
use clap::Parser;
use owo_colors::OwoColorize;
use random_color::log::FnLogger;
use random_color::{Format, Luminosity, Options, RandomColor, SeedValue};

/// Generate attractive random colors
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Hue name (red, orange, yellow, green, blue, purple, pink, monochrome),
    /// degrees or a hex color
    #[arg(long)]
    hue: Option<String>,
    /// bright, dark, light or random
    #[arg(short, long)]
    luminosity: Option<Luminosity>,
    /// Number of colors
    #[arg(short = 'n', long)]
    count: Option<u32>,
    /// Seed the generator
    #[arg(long)]
    seed: Option<String>,
    /// hex, rgb, rgba, rgbArray, hsl, hsla, hslArray or hsvArray
    #[arg(short, long, default_value = "hex")]
    format: Format,
    /// Alpha for rgba and hsla
    #[arg(short, long)]
    alpha: Option<f64>,
    /// Trace every decision to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Quiet, only show the values without a swatch
    #[arg(short, long)]
    quiet: bool,
    #[command(flatten)]
    color: colorchoice_clap::Color,
}

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.color.write_global();

    let mut gen = RandomColor::with_logger(FnLogger(|tag: &str, message: &str| {
        eprintln!("{} {}", tag.dimmed(), message.dimmed());
    }));
    gen.set_verbose(args.verbose);

    let options = Options {
        hue: args.hue,
        luminosity: args.luminosity,
        count: args.count,
        seed: args.seed.map(SeedValue::from),
        format: args.format,
        alpha: args.alpha,
    };

    for color in gen.generate(&options)?.into_vec() {
        if args.quiet {
            println!("{color:#}");
        } else {
            println!("{color}");
        }
    }

    Ok(())
}

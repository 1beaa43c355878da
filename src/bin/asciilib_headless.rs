//! AsciiLIB Headless Runner
//!
//! Applies a surface command script without a display and prints the
//! resulting surface. Useful for testing and for generating screenshots
//! of layouts.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use asciilib::app::{Config, SurfaceArgs};
use asciilib::glyphs::{self, Category};
use asciilib::renderer::MemorySink;
use asciilib::script::run_script;
use asciilib::{Snapshot, Surface};

#[derive(Parser, Debug)]
#[command(name = "asciilib-headless")]
#[command(about = "Run a surface script headlessly and print the result")]
#[command(version)]
struct Cli {
    /// Script to run (reads stdin when omitted)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Write the snapshot here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print plain rows instead of JSON
    #[arg(short, long)]
    text: bool,

    /// Print the glyph catalog and exit
    #[arg(long)]
    list_glyphs: bool,

    #[command(flatten)]
    surface: SurfaceArgs,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.list_glyphs {
        print!("{}", glyph_listing());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_with_args(&cli.surface)?;

    let source = match &cli.script {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read script {}: {}", path.display(), e))?,
        None => {
            let mut data = String::new();
            io::stdin().read_to_string(&mut data)?;
            data
        }
    };

    let mut surface = Surface::from_config(&config, MemorySink::new())?;
    let ran = run_script(&source, &mut surface)?;
    info!(
        commands = ran,
        frames = surface.sink().frames(),
        "Script finished on {}x{} surface",
        surface.width(),
        surface.height()
    );

    let snapshot = Snapshot::from_surface(&surface);
    let rendered = if cli.text {
        snapshot.to_text()
    } else {
        let mut json = snapshot.to_json()?;
        json.push('\n');
        json
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?,
        None => print!("{}", rendered),
    }

    Ok(())
}

fn glyph_listing() -> String {
    let mut out = String::new();
    for category in Category::ALL {
        out.push_str(&format!("Category: {}\n", category.name()));
        for (name, ch) in glyphs::entries(category) {
            out.push_str(&format!("  {}: {}\n", name, ch));
        }
    }
    out
}

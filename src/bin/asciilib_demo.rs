//! AsciiLIB fill demo
//!
//! Fills the console surface with `*`, one cell every 1/60 s, column by
//! column. Press `q` or Escape to quit.

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use asciilib::app::console::{fit_to_terminal, ConsoleEvents, ConsoleSession};
use asciilib::app::{Config, Controller, EventLoop, SurfaceArgs};
use asciilib::input::KeySymbol;
use asciilib::renderer::{ConsoleSink, RenderResult, RenderSink};
use asciilib::{Point, Surface};

const FRAME: Duration = Duration::from_micros(1_000_000 / 60);

#[derive(Parser, Debug)]
#[command(name = "asciilib-demo")]
#[command(about = "Fill a console surface one cell at a time")]
#[command(version)]
struct Cli {
    /// Character to fill with
    #[arg(long, default_value_t = '*')]
    brush: char,

    #[command(flatten)]
    surface: SurfaceArgs,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_with_args(&cli.surface)?;
    fit_to_terminal(&mut config)?;

    let _session = ConsoleSession::start()?;
    let surface = Surface::from_config(&config, ConsoleSink::stdout(config.color_pair()))?;

    let mut event_loop = EventLoop::new(surface);
    event_loop.on_key_press(|ctl, event| {
        if matches!(event.key, Some(KeySymbol::Char('q')) | Some(KeySymbol::Escape)) {
            ctl.quit();
        }
        Ok(())
    });

    let brush = cli.brush;
    event_loop
        .controller_mut()
        .after(Duration::ZERO, move |ctl| paint(ctl, Point::ORIGIN, brush));

    event_loop.run(&mut ConsoleEvents)?;
    Ok(())
}

/// Paint one cell, then schedule the next one down the column
fn paint<S: RenderSink + 'static>(ctl: &mut Controller<S>, at: Point, brush: char) -> RenderResult<()> {
    ctl.surface_mut().set(at, brush)?;

    let max = ctl.surface().max_point();
    let next = if at.y < max.y {
        Point::new(at.x, at.y + 1)
    } else if at.x < max.x {
        Point::new(at.x + 1, 0)
    } else {
        return Ok(());
    };

    ctl.after(FRAME, move |ctl| paint(ctl, next, brush));
    Ok(())
}

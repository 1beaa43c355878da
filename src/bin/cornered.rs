//! Cornered
//!
//! A two-player board game on an 8x8 surface. Each player starts with a
//! column of pieces; arrows move the current player's first piece one
//! square, Return passes the turn, `q` or Escape quits.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use asciilib::app::console::{ConsoleEvents, ConsoleSession};
use asciilib::app::{Config, Controller, EventLoop, SurfaceArgs};
use asciilib::glyphs::{self, Category};
use asciilib::input::{InputEvent, KeySymbol};
use asciilib::renderer::{ConsoleSink, RenderResult, RenderSink};
use asciilib::{Point, Rect, Surface};

const BOARD: i32 = 8;

#[derive(Parser, Debug)]
#[command(name = "cornered")]
#[command(about = "Two-player board game on an 8x8 character surface")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    surface: SurfaceArgs,
}

fn main_glyph(name: &str) -> char {
    glyphs::glyph(Category::Main, name).unwrap_or('?')
}

/// Whose turn it is and where each player's pieces stand
#[derive(Debug, Clone, PartialEq, Eq)]
struct GameState {
    player_one_turn: bool,
    pieces: [Vec<Point>; 2],
}

impl GameState {
    fn new() -> Self {
        Self {
            player_one_turn: true,
            pieces: [
                (0..BOARD).map(|y| Point::new(0, y)).collect(),
                (0..BOARD).rev().map(|y| Point::new(BOARD - 1, y)).collect(),
            ],
        }
    }

    fn current(&self) -> usize {
        if self.player_one_turn {
            0
        } else {
            1
        }
    }

    fn piece_glyph(player: usize) -> char {
        if player == 0 {
            main_glyph("CIRCLE_BLACK")
        } else {
            main_glyph("CIRCLE_WHITE")
        }
    }

    /// Checkerboard with both players' pieces on it
    fn draw<S: RenderSink>(&self, surface: &mut Surface<S>) -> RenderResult<()> {
        let (light, dark) = (main_glyph("BLANK"), main_glyph("BLOCK"));
        for y in 0..BOARD {
            for x in 0..BOARD {
                let square = if (x + y) % 2 == 0 { light } else { dark };
                surface.set((x, y), square)?;
            }
        }
        for (player, pieces) in self.pieces.iter().enumerate() {
            for &pos in pieces {
                surface.set(pos, Self::piece_glyph(player))?;
            }
        }
        Ok(())
    }

    fn on_key<S: RenderSink>(&mut self, ctl: &mut Controller<S>, event: &InputEvent) -> RenderResult<()> {
        let Some(key) = event.key else {
            return Ok(());
        };
        match key {
            KeySymbol::Return => {
                self.player_one_turn = !self.player_one_turn;
                debug!(player_one_turn = self.player_one_turn, "turn passed");
            }
            KeySymbol::Char('q') | KeySymbol::Escape => ctl.quit(),
            KeySymbol::Up => self.move_piece(ctl.surface_mut(), 0, -1)?,
            KeySymbol::Down => self.move_piece(ctl.surface_mut(), 0, 1)?,
            KeySymbol::Left => self.move_piece(ctl.surface_mut(), -1, 0)?,
            KeySymbol::Right => self.move_piece(ctl.surface_mut(), 1, 0)?,
            _ => {}
        }
        Ok(())
    }

    /// Step the current player's first piece, unless it would leave the board
    fn move_piece<S: RenderSink>(&mut self, surface: &mut Surface<S>, dx: i32, dy: i32) -> RenderResult<()> {
        let player = self.current();
        let Some(&from) = self.pieces[player].first() else {
            return Ok(());
        };

        let target = from.offset(dx, dy);
        if !(0..BOARD).contains(&target.x) || !(0..BOARD).contains(&target.y) {
            return Ok(());
        }

        surface.swap_area(Rect::new(from, from), target)?;

        // Whatever stood on the target square trades places with the piece
        for pos in self.pieces.iter_mut().flatten() {
            if *pos == target {
                *pos = from;
            } else if *pos == from {
                *pos = target;
            }
        }
        Ok(())
    }
}

/// Fix the board size and name the window, unless a title came from
/// the command line, the environment or a config file
fn apply_board_defaults(config: &mut Config) {
    config.width = BOARD as usize;
    config.height = BOARD as usize;
    if config.title == Config::default().title {
        config.title = "Cornered".to_string();
    }
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
    apply_board_defaults(&mut config);

    let _session = ConsoleSession::start()?;
    let surface = Surface::from_config(&config, ConsoleSink::stdout(config.color_pair()))?;

    let mut event_loop = EventLoop::new(surface);
    let mut state = GameState::new();
    state.draw(event_loop.controller_mut().surface_mut())?;
    event_loop.on_key_press(move |ctl, event| state.on_key(ctl, event));

    event_loop.run(&mut ConsoleEvents)?;
    Ok(())
}

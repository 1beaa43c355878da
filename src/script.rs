//! Surface command scripts
//!
//! One command per line; blank lines and lines starting with `#` are
//! skipped.
//!
//! ```text
//! clear
//! set X Y CH
//! fill X1 Y1 [X2 Y2] CH
//! swap X1 Y1 [X2 Y2] DX DY
//! rect X1 Y1 [X2 Y2] BORDER [FILL]
//! ```
//!
//! When `X2 Y2` is left out the rectangle runs to the bottom-right corner
//! of the surface. A character is written literally (`#`), quoted
//! (`' '`), or as a catalog reference (`@MAIN.BLOCK`, `@BRAILLE.7`).

use crate::core::{Point, Rect, Surface};
use crate::glyphs;
use crate::renderer::{RenderResult, RenderSink};

/// Error type for script parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    /// 1-based line number
    pub line: usize,
    pub message: String,
}

/// A single surface operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Clear,
    Set { at: Point, ch: char },
    Fill { rect: Rect, ch: char },
    Swap { rect: Rect, dest: Point },
    Rect { rect: Rect, border: char, fill: Option<char> },
}

impl Command {
    /// Perform the command on `surface`
    pub fn apply<S: RenderSink>(&self, surface: &mut Surface<S>) -> RenderResult<()> {
        match *self {
            Command::Clear => surface.clear(),
            Command::Set { at, ch } => surface.set(at, ch),
            Command::Fill { rect, ch } => surface.fill_area(rect, ch),
            Command::Swap { rect, dest } => surface.swap_area(rect, dest),
            Command::Rect { rect, border, fill } => surface.draw_rectangle(rect, border, fill),
        }
    }
}

/// Parse a whole script
pub fn parse_script(src: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (i, line) in src.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let command = parse_command(trimmed).map_err(|message| ScriptError {
            line: i + 1,
            message,
        })?;
        commands.push(command);
    }
    Ok(commands)
}

/// Parse and apply a script, returning how many commands ran
pub fn run_script<S: RenderSink>(src: &str, surface: &mut Surface<S>) -> Result<usize, RunError> {
    let commands = parse_script(src)?;
    for command in &commands {
        command.apply(surface)?;
    }
    Ok(commands.len())
}

/// Error type for [`run_script`]
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Render(#[from] crate::renderer::RenderError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Word(String),
    Quoted(char),
}

fn tokenize(line: &str) -> Vec<Token> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_whitespace() {
            i += 1;
            continue;
        }
        if chars[i] == '\'' && chars.get(i + 2) == Some(&'\'') {
            tokens.push(Token::Quoted(chars[i + 1]));
            i += 3;
            continue;
        }
        let start = i;
        while i < chars.len() && !chars[i].is_whitespace() {
            i += 1;
        }
        tokens.push(Token::Word(chars[start..i].iter().collect()));
    }

    tokens
}

fn parse_command(line: &str) -> Result<Command, String> {
    let tokens = tokenize(line);
    let Some((Token::Word(name), args)) = tokens.split_first() else {
        return Err("expected a command name".to_string());
    };

    match (name.as_str(), args.len()) {
        ("clear", 0) => Ok(Command::Clear),
        ("set", 3) => Ok(Command::Set {
            at: point(&args[0], &args[1])?,
            ch: character(&args[2])?,
        }),
        ("fill", 3) => Ok(Command::Fill {
            rect: Rect::from_corner(point(&args[0], &args[1])?),
            ch: character(&args[2])?,
        }),
        ("fill", 5) => Ok(Command::Fill {
            rect: Rect::new(point(&args[0], &args[1])?, point(&args[2], &args[3])?),
            ch: character(&args[4])?,
        }),
        ("swap", 4) => Ok(Command::Swap {
            rect: Rect::from_corner(point(&args[0], &args[1])?),
            dest: point(&args[2], &args[3])?,
        }),
        ("swap", 6) => Ok(Command::Swap {
            rect: Rect::new(point(&args[0], &args[1])?, point(&args[2], &args[3])?),
            dest: point(&args[4], &args[5])?,
        }),
        ("rect", 3 | 4) => Ok(Command::Rect {
            rect: Rect::from_corner(point(&args[0], &args[1])?),
            border: character(&args[2])?,
            fill: args.get(3).map(character).transpose()?,
        }),
        ("rect", 5 | 6) => Ok(Command::Rect {
            rect: Rect::new(point(&args[0], &args[1])?, point(&args[2], &args[3])?),
            border: character(&args[4])?,
            fill: args.get(5).map(character).transpose()?,
        }),
        ("clear" | "set" | "fill" | "swap" | "rect", n) => {
            Err(format!("'{}' does not take {} arguments", name, n))
        }
        _ => Err(format!("unknown command '{}'", name)),
    }
}

fn point(x: &Token, y: &Token) -> Result<Point, String> {
    Ok(Point::new(number(x)?, number(y)?))
}

fn number(token: &Token) -> Result<i32, String> {
    match token {
        Token::Word(w) => w.parse().map_err(|_| format!("'{}' is not a coordinate", w)),
        Token::Quoted(c) => Err(format!("'{}' is not a coordinate", c)),
    }
}

fn character(token: &Token) -> Result<char, String> {
    let word = match token {
        Token::Quoted(c) => return Ok(*c),
        Token::Word(w) => w,
    };

    if let Some(reference) = word.strip_prefix('@').filter(|r| !r.is_empty()) {
        let (category, key) = reference
            .split_once('.')
            .ok_or_else(|| format!("glyph reference '{}' needs CATEGORY.NAME", word))?;
        return glyphs::lookup(category, key).ok_or_else(|| format!("unknown glyph '{}'", word));
    }

    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("'{}' is not a single character", word)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MemorySink;

    #[test]
    fn test_tokenize_quoted_space() {
        assert_eq!(
            tokenize("set 1 2 ' '"),
            vec![
                Token::Word("set".into()),
                Token::Word("1".into()),
                Token::Word("2".into()),
                Token::Quoted(' '),
            ]
        );
        // A lone quote is an ordinary character
        assert_eq!(tokenize("'"), vec![Token::Word("'".into())]);
    }

    #[test]
    fn test_parse_every_form() {
        let script = "\
# board
clear
set 0 0 @MAIN.CIRCLE_BLACK
fill 2 2 ░
fill 0 0 7 7 .
swap 0 0 3 3
swap 0 0 1 1 2 2
rect 1 1 #
rect 1 1 # ' '
rect 1 1 5 5 @PIPE_ASCII.CROSS
rect 1 1 5 5 # @BRAILLE.1
";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands.len(), 10);
        assert_eq!(commands[0], Command::Clear);
        assert_eq!(
            commands[1],
            Command::Set {
                at: Point::new(0, 0),
                ch: '●'
            }
        );
        assert_eq!(
            commands[2],
            Command::Fill {
                rect: Rect::from_corner((2, 2)),
                ch: '░'
            }
        );
        assert_eq!(
            commands[5],
            Command::Swap {
                rect: Rect::new((0, 0), (1, 1)),
                dest: Point::new(2, 2)
            }
        );
        assert_eq!(
            commands[7],
            Command::Rect {
                rect: Rect::from_corner((1, 1)),
                border: '#',
                fill: Some(' ')
            }
        );
        assert_eq!(
            commands[9],
            Command::Rect {
                rect: Rect::new((1, 1), (5, 5)),
                border: '#',
                fill: Some('\u{2801}')
            }
        );
    }

    #[test]
    fn test_parse_errors_carry_line() {
        let err = parse_script("clear\n\nfill 0 0 ab\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.message.contains("single character"));

        assert!(parse_script("draw 1 2").unwrap_err().message.contains("unknown command"));
        assert!(parse_script("set 1 2").unwrap_err().message.contains("arguments"));
        assert!(parse_script("set x 2 #").unwrap_err().message.contains("coordinate"));
        assert!(parse_script("set 1 2 @MAIN.NOPE").unwrap_err().message.contains("unknown glyph"));
        assert!(parse_script("set 1 2 @MAIN").unwrap_err().message.contains("CATEGORY.NAME"));
        assert!(parse_script("' ' 1 2").is_err());
    }

    #[test]
    fn test_run_script() {
        let mut surface = Surface::new(5, 3, ' ', "", MemorySink::new()).unwrap();
        let ran = run_script("rect 0 0 #\nset 2 1 @\n", &mut surface).unwrap();

        assert_eq!(ran, 2);
        assert_eq!(surface.lines(), vec!["#####", "# @ #", "#####"]);
        assert_eq!(surface.sink().frames(), 3);
    }
}

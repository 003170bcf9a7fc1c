//! Pointer event scripts for `vga_draw replay`.
//!
//! One event per line, coordinates in pixels of the addressed surface:
//!
//! ```text
//! # pick glyph 1, white on dark blue
//! glyph 10 3
//! fg 120 20
//! bg 40 4
//! move 20 20
//! down 20 20
//! move 28 20
//! up
//! leave
//! ```
use thiserror::Error;
use vga_engine::{EditorTarget, PointerEvent, Position};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' takes {expected} arguments, got {actual}")]
    ArgumentCount {
        line: usize,
        command: String,
        expected: usize,
        actual: usize,
    },

    #[error("line {line}: invalid coordinate '{value}'")]
    InvalidCoordinate { line: usize, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub line: usize,
    pub target: EditorTarget,
    pub event: PointerEvent,
}

pub fn parse(text: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line_number = i + 1;
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let mut words = content.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();
        let (target, event) = parse_command(line_number, command, &args)?;
        steps.push(Step {
            line: line_number,
            target,
            event,
        });
    }
    Ok(steps)
}

fn parse_command(line: usize, command: &str, args: &[&str]) -> Result<(EditorTarget, PointerEvent), ScriptError> {
    let position = || -> Result<Position, ScriptError> {
        expect_args(line, command, args, 2)?;
        Ok(Position::new(coordinate(line, args[0])?, coordinate(line, args[1])?))
    };
    match command.to_ascii_lowercase().as_str() {
        "move" => Ok((EditorTarget::Canvas, PointerEvent::Move(position()?))),
        "down" => Ok((EditorTarget::Canvas, PointerEvent::Down(position()?))),
        "up" => {
            expect_args(line, command, args, 0)?;
            Ok((EditorTarget::Canvas, PointerEvent::Up))
        }
        "leave" => {
            expect_args(line, command, args, 0)?;
            Ok((EditorTarget::Canvas, PointerEvent::Leave))
        }
        "glyph" => Ok((EditorTarget::FontChooser, PointerEvent::Down(position()?))),
        "fg" => Ok((EditorTarget::ForegroundChooser, PointerEvent::Down(position()?))),
        "bg" => Ok((EditorTarget::BackgroundChooser, PointerEvent::Down(position()?))),
        _ => Err(ScriptError::UnknownCommand {
            line,
            command: command.to_string(),
        }),
    }
}

fn expect_args(line: usize, command: &str, args: &[&str], expected: usize) -> Result<(), ScriptError> {
    if args.len() == expected {
        return Ok(());
    }
    Err(ScriptError::ArgumentCount {
        line,
        command: command.to_string(),
        expected,
        actual: args.len(),
    })
}

fn coordinate(line: usize, value: &str) -> Result<i32, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidCoordinate {
        line,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_script() {
        let steps = parse("# comment\n\nglyph 10 3\nfg 120 20  # white\nbg 40 4\nmove 20 20\nDOWN 20 20\nup\nleave\n").unwrap();
        let events: Vec<(usize, EditorTarget, PointerEvent)> = steps.iter().map(|s| (s.line, s.target, s.event)).collect();
        assert_eq!(
            vec![
                (3, EditorTarget::FontChooser, PointerEvent::Down(Position::new(10, 3))),
                (4, EditorTarget::ForegroundChooser, PointerEvent::Down(Position::new(120, 20))),
                (5, EditorTarget::BackgroundChooser, PointerEvent::Down(Position::new(40, 4))),
                (6, EditorTarget::Canvas, PointerEvent::Move(Position::new(20, 20))),
                (7, EditorTarget::Canvas, PointerEvent::Down(Position::new(20, 20))),
                (8, EditorTarget::Canvas, PointerEvent::Up),
                (9, EditorTarget::Canvas, PointerEvent::Leave),
            ],
            events
        );
    }

    #[test]
    fn test_negative_coordinates() {
        let steps = parse("move -4 7").unwrap();
        assert_eq!(PointerEvent::Move(Position::new(-4, 7)), steps[0].event);
    }

    #[test]
    fn test_errors_report_line() {
        assert_eq!(
            Err(ScriptError::UnknownCommand {
                line: 2,
                command: "click".to_string()
            }),
            parse("up\nclick 1 2")
        );
        assert_eq!(
            Err(ScriptError::ArgumentCount {
                line: 1,
                command: "move".to_string(),
                expected: 2,
                actual: 1
            }),
            parse("move 3")
        );
        assert_eq!(
            Err(ScriptError::InvalidCoordinate {
                line: 3,
                value: "x".to_string()
            }),
            parse("\n\ndown x 4")
        );
        assert_eq!("line 1: 'up' takes 0 arguments, got 1", parse("up 1").unwrap_err().to_string());
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Line-oriented command scripts.
//!
//! One command per line, words separated by whitespace, `#` starts a comment:
//!
//! ```text
//! cell 0 0
//! start
//! point 0 0
//! point 0 1
//! point 1 1
//! point 1 0
//! point 0 0
//! signs 0 +
//! move 0 0 +
//! show
//! ```

use std::fmt;

use crate::model::{LatticePoint, Session, Sign};
use crate::ops::{AppendOutcome, Direction, EditError, Heading, RebuildReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Grid { rows: u32, cols: u32 },
    Cell { row: i32, col: i32 },
    ClearDomain,
    Start,
    Point(LatticePoint),
    Finish,
    Cancel,
    Signs { bolt: usize, start: Sign },
    Move { bolt: usize, edge: usize, direction: Direction },
    Nudge { bolt: usize, edge: usize, heading: Heading },
    Swap { bolt: usize, a: usize, b: usize },
    Delete { bolt: usize },
    Select { bolt: usize },
    Rebuild,
    Clear,
    ClearBolts,
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based source line.
    pub line: usize,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptParseError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ScriptParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ScriptParseError {}

fn arg<T: std::str::FromStr>(words: &[&str], index: usize, what: &str) -> Result<T, String> {
    let raw = words.get(index).ok_or_else(|| format!("missing {what}"))?;
    raw.parse::<T>().map_err(|_| format!("invalid {what} '{raw}'"))
}

fn parse_direction(raw: &str) -> Result<Direction, String> {
    match raw {
        "+" | "+1" => Ok(Direction::Positive),
        "-" | "-1" => Ok(Direction::Negative),
        other => Err(format!("invalid direction '{other}' (expected + or -)")),
    }
}

fn parse_heading(raw: &str) -> Result<Heading, String> {
    match raw.to_ascii_lowercase().as_str() {
        "up" => Ok(Heading::Up),
        "down" => Ok(Heading::Down),
        "left" => Ok(Heading::Left),
        "right" => Ok(Heading::Right),
        _ => Err(format!("invalid heading '{raw}' (expected up, down, left or right)")),
    }
}

fn parse_words(words: &[&str]) -> Result<Command, String> {
    let arity = |n: usize| {
        if words.len() == n + 1 {
            Ok(())
        } else {
            Err(format!("'{}' takes {n} argument(s), got {}", words[0], words.len() - 1))
        }
    };

    let command = match words[0] {
        "grid" => {
            arity(2)?;
            Command::Grid { rows: arg(words, 1, "rows")?, cols: arg(words, 2, "cols")? }
        }
        "cell" => {
            arity(2)?;
            Command::Cell { row: arg(words, 1, "row")?, col: arg(words, 2, "col")? }
        }
        "clear-domain" => {
            arity(0)?;
            Command::ClearDomain
        }
        "start" => {
            arity(0)?;
            Command::Start
        }
        "point" => {
            arity(2)?;
            Command::Point(LatticePoint::new(arg(words, 1, "row")?, arg(words, 2, "col")?))
        }
        "finish" => {
            arity(0)?;
            Command::Finish
        }
        "cancel" => {
            arity(0)?;
            Command::Cancel
        }
        "signs" => {
            arity(2)?;
            let start = words[2].parse::<Sign>().map_err(|err| err.to_string())?;
            Command::Signs { bolt: arg(words, 1, "bolt index")?, start }
        }
        "move" => {
            arity(3)?;
            Command::Move {
                bolt: arg(words, 1, "bolt index")?,
                edge: arg(words, 2, "edge index")?,
                direction: parse_direction(words[3])?,
            }
        }
        "nudge" => {
            arity(3)?;
            Command::Nudge {
                bolt: arg(words, 1, "bolt index")?,
                edge: arg(words, 2, "edge index")?,
                heading: parse_heading(words[3])?,
            }
        }
        "swap" => {
            arity(3)?;
            Command::Swap {
                bolt: arg(words, 1, "bolt index")?,
                a: arg(words, 2, "vertex index")?,
                b: arg(words, 3, "vertex index")?,
            }
        }
        "delete" => {
            arity(1)?;
            Command::Delete { bolt: arg(words, 1, "bolt index")? }
        }
        "select" => {
            arity(1)?;
            Command::Select { bolt: arg(words, 1, "bolt index")? }
        }
        "rebuild" => {
            arity(0)?;
            Command::Rebuild
        }
        "clear" => {
            arity(0)?;
            Command::Clear
        }
        "clear-bolts" => {
            arity(0)?;
            Command::ClearBolts
        }
        "show" => {
            arity(0)?;
            Command::Show
        }
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(command)
}

pub fn parse_script(src: &str) -> Result<Vec<ScriptLine>, ScriptParseError> {
    let mut out = Vec::new();
    for (idx, raw) in src.lines().enumerate() {
        let line = idx + 1;
        let text = raw.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }
        let words = text.split_whitespace().collect::<Vec<_>>();
        let command = parse_words(&words).map_err(|message| ScriptParseError { line, message })?;
        out.push(ScriptLine { line, command });
    }
    Ok(out)
}

/// What a successfully applied command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Done,
    Appended(AppendOutcome),
    Committed { bolt_index: usize },
    Toggled { selected: bool },
    Rebuilt(RebuildReport),
    /// The caller should print a snapshot.
    Show,
}

pub fn apply_command(session: &mut Session, command: &Command) -> Result<CommandOutcome, EditError> {
    let outcome = match *command {
        Command::Grid { rows, cols } => {
            session.set_grid(rows, cols);
            CommandOutcome::Done
        }
        Command::Cell { row, col } => {
            CommandOutcome::Toggled { selected: session.toggle_domain_cell(row, col)? }
        }
        Command::ClearDomain => {
            session.clear_domain();
            CommandOutcome::Done
        }
        Command::Start => {
            session.start_new_path();
            CommandOutcome::Done
        }
        Command::Point(point) => CommandOutcome::Appended(session.append_point(point)?),
        Command::Finish => CommandOutcome::Committed { bolt_index: session.finish_open_path()? },
        Command::Cancel => {
            session.cancel_path();
            CommandOutcome::Done
        }
        Command::Signs { bolt, start } => {
            session.assign_signs(bolt, start)?;
            CommandOutcome::Done
        }
        Command::Move { bolt, edge, direction } => {
            CommandOutcome::Rebuilt(session.move_edge(bolt, edge, direction)?)
        }
        Command::Nudge { bolt, edge, heading } => {
            CommandOutcome::Rebuilt(session.move_edge_toward(bolt, edge, heading)?)
        }
        Command::Swap { bolt, a, b } => CommandOutcome::Rebuilt(session.swap_rectangle(bolt, a, b)?),
        Command::Delete { bolt } => {
            session.delete_bolt(bolt)?;
            CommandOutcome::Done
        }
        Command::Select { bolt } => {
            session.select_bolt(bolt)?;
            CommandOutcome::Done
        }
        Command::Rebuild => CommandOutcome::Rebuilt(session.rebuild()),
        Command::Clear => {
            session.clear_all();
            CommandOutcome::Done
        }
        Command::ClearBolts => {
            session.clear_bolts();
            CommandOutcome::Done
        }
        Command::Show => CommandOutcome::Show,
    };
    Ok(outcome)
}

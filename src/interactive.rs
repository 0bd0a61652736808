#![cfg(feature = "std")]

//! Guess strategy fed by a human at a terminal.

use std::boxed::Box;
use std::io::{BufRead, Write};
use std::string::String;

use crate::{
    common::{Coordinate, HitStatus},
    knowledge::KnowledgeGrid,
    render::coord_to_string,
    strategy::GuessStrategy,
};

/// Parse `A5` (column letter, 1-based row) or `5 1` / `5,1` (1-based row and
/// column). Range checks are left to the caller.
pub fn parse_coord(input: &str) -> Option<Coordinate> {
    let input = input.trim();
    let mut parts = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|p| !p.is_empty());
    if let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) {
        let row: usize = a.parse().ok()?;
        let col: usize = b.parse().ok()?;
        if row == 0 || col == 0 {
            return None;
        }
        return Some(Coordinate::new(row - 1, col - 1));
    }

    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Coordinate::new(row - 1, col))
}

/// Prompts on `output` and reads targets from `input`, showing a suggestion
/// from another strategy. An empty line (or end of input) takes the
/// suggestion. Off-grid or already tried cells are refused and asked again.
pub struct InteractiveStrategy<I: BufRead, O: Write> {
    input: I,
    output: O,
    suggester: Box<dyn GuessStrategy>,
}

impl<I: BufRead, O: Write> InteractiveStrategy<I, O> {
    pub fn new(input: I, output: O, suggester: Box<dyn GuessStrategy>) -> Self {
        Self {
            input,
            output,
            suggester,
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                log::warn!("failed to read guess: {}", e);
                None
            }
        }
    }
}

impl<I: BufRead, O: Write> GuessStrategy for InteractiveStrategy<I, O> {
    fn choose_move(&mut self, knowledge: &KnowledgeGrid) -> Coordinate {
        let suggestion = self.suggester.choose_move(knowledge);
        loop {
            let _ = write!(self.output, "Enter guess [{}]: ", coord_to_string(suggestion));
            let _ = self.output.flush();
            let Some(line) = self.read_line() else {
                let _ = writeln!(self.output);
                return suggestion;
            };
            let line = line.trim();
            if line.is_empty() {
                return suggestion;
            }
            match parse_coord(line) {
                Some(c) if !c.in_bounds(knowledge.size()) => {
                    let _ = writeln!(self.output, "{} is off the board", line);
                }
                Some(c) if knowledge.status(c).is_known() => {
                    let _ = writeln!(self.output, "Already tried {}", coord_to_string(c));
                }
                Some(c) => return c,
                None => {
                    let _ = writeln!(self.output, "Invalid coordinate");
                }
            }
        }
    }

    fn label(&self) -> &str {
        "human"
    }

    fn observe(&mut self, coord: Coordinate, status: HitStatus) {
        let _ = writeln!(self.output, "You guessed {} -> {:?}", coord_to_string(coord), status);
        self.suggester.observe(coord, status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::RandomStrategy;
    use std::io::Cursor;

    #[test]
    fn parses_both_notations() {
        assert_eq!(parse_coord("A1"), Some(Coordinate::new(0, 0)));
        assert_eq!(parse_coord("c10"), Some(Coordinate::new(9, 2)));
        assert_eq!(parse_coord("3 4"), Some(Coordinate::new(2, 3)));
        assert_eq!(parse_coord("3,4"), Some(Coordinate::new(2, 3)));
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("?"), None);
        assert_eq!(parse_coord(""), None);
    }

    #[test]
    fn reprompts_until_an_unknown_cell() {
        let mut k = KnowledgeGrid::new(3);
        k.record(Coordinate::new(0, 0), HitStatus::Miss).unwrap();
        let input = Cursor::new("junk\nZ9\nA1\nB2\n");
        let mut out = Vec::new();
        let mut s = InteractiveStrategy::new(input, &mut out, Box::new(RandomStrategy::seeded(3)));
        assert_eq!(s.choose_move(&k), Coordinate::new(1, 1));
        drop(s);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid coordinate"));
        assert!(text.contains("off the board"));
        assert!(text.contains("Already tried A1"));
    }

    #[test]
    fn end_of_input_takes_the_suggestion() {
        let k = KnowledgeGrid::new(1);
        let mut s = InteractiveStrategy::new(Cursor::new(""), std::io::sink(), Box::new(RandomStrategy::seeded(3)));
        assert_eq!(s.choose_move(&k), Coordinate::new(0, 0));
    }
}

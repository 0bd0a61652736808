#![cfg(feature = "std")]

//! Text rendering of a player's boards.
//!
//! Own grid: `*` ship segment, `.` empty. Knowledge grid: `+` hit, `-` miss,
//! `.` unknown.

use std::fmt::Write;
use std::string::String;

use crate::{
    common::{Coordinate, HitStatus},
    player::PlayerController,
};

const MARGIN: &str = "    ";

fn border(out: &mut String, size: usize, frames: usize) {
    for _ in 0..frames {
        out.push_str(MARGIN);
        out.push('+');
        for _ in 0..size {
            out.push('-');
        }
        out.push('+');
    }
    out.push('\n');
}

fn row(out: &mut String, player: &PlayerController, r: usize) {
    let size = player.grid_size();
    out.push_str(MARGIN);
    out.push('|');
    for c in 0..size {
        let ch = if player.has_ship_at(Coordinate::new(r, c)) { '*' } else { '.' };
        out.push(ch);
    }
    out.push('|');
    out.push_str(MARGIN);
    out.push('|');
    for c in 0..size {
        let ch = match player.knowledge().status(Coordinate::new(r, c)) {
            HitStatus::Hit => '+',
            HitStatus::Miss => '-',
            HitStatus::Unknown => '.',
        };
        out.push(ch);
    }
    out.push('|');
}

/// Own grid and knowledge grid of one player, side by side.
pub fn render_player(player: &PlayerController) -> String {
    let size = player.grid_size();
    let mut out = String::new();
    let _ = writeln!(out, "Board of {}", player.name());
    border(&mut out, size, 2);
    for r in 0..size {
        row(&mut out, player, r);
        out.push('\n');
    }
    border(&mut out, size, 2);
    out
}

/// Both players' boards on the same rows.
pub fn render_match(first: &PlayerController, second: &PlayerController, title: &str) -> String {
    let size = first.grid_size();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "({}) {} vs {}",
        title,
        first.name(),
        second.name()
    );
    border(&mut out, size, 4);
    for r in 0..size {
        row(&mut out, first, r);
        row(&mut out, second, r);
        out.push('\n');
    }
    border(&mut out, size, 4);
    out
}

/// Print a normalized probability density, one row per line.
pub fn render_density(pdf: &crate::ai::Density) -> String {
    let size = pdf.size();
    let mut out = String::from("Probability distribution:\n   ");
    for c in 0..size {
        let _ = write!(out, " {:>4}", column_label(c));
    }
    out.push('\n');
    for r in 0..size {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..size {
            let _ = write!(out, " {:4.2}", pdf.get(Coordinate::new(r, c)));
        }
        out.push('\n');
    }
    out
}

/// Column letter used in `A1` notation; past `Z` falls back to the number.
pub fn column_label(col: usize) -> String {
    if col < 26 {
        ((b'A' + col as u8) as char).to_string()
    } else {
        (col + 1).to_string()
    }
}

/// `A1`-style name of a coordinate.
pub fn coord_to_string(coord: Coordinate) -> String {
    format!("{}{}", column_label(coord.col), coord.row + 1)
}

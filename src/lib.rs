#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
#[cfg(feature = "std")]
pub mod batch;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod interactive;
mod knowledge;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod player;
#[cfg(feature = "std")]
pub mod render;
mod ship;
mod strategy;

pub use ai::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::{BitGrid, Grid, GridError, SetCells};
#[cfg(feature = "std")]
pub use interactive::*;
pub use knowledge::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placement::{place_fleet, spawn_ships, Fleet, PlacementError};
pub use player::*;
pub use ship::*;
pub use strategy::*;

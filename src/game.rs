//! Match engine: alternating turns between two controllers until one side
//! has no ship segments left.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;

use crate::{
    common::{BoardError, Coordinate},
    player::PlayerController,
};

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStatus {
    InProgress,
    FirstPlayerWon,
    SecondPlayerWon,
}

impl MatchStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }
}

/// Errors that abort a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A strategy returned an off-grid or already resolved coordinate.
    InvalidMove {
        player: String,
        coord: Coordinate,
        source: BoardError,
    },
    /// The driving loop hit its round ceiling before anyone won.
    RoundLimit { rounds: usize },
    /// The two controllers play on grids of different sizes.
    GridMismatch { first: usize, second: usize },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidMove {
                player,
                coord,
                source,
            } => write!(f, "{} chose an invalid move {}: {}", player, coord, source),
            MatchError::RoundLimit { rounds } => {
                write!(f, "Match still undecided after {} rounds", rounds)
            }
            MatchError::GridMismatch { first, second } => write!(
                f,
                "Grid sizes differ: {}x{} vs {}x{}",
                first, first, second, second
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::InvalidMove { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Final result of a completed match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchOutcome {
    pub status: MatchStatus,
    pub rounds: usize,
    pub winner: String,
}

/// Called after each round that leaves the match undecided.
pub type RoundObserver<'a> = Box<dyn FnMut(usize, &PlayerController, &PlayerController) + 'a>;

/// Drives a match between two borrowed controllers. The first controller
/// always moves first within a round.
pub struct MatchEngine<'a> {
    first: &'a mut PlayerController,
    second: &'a mut PlayerController,
    max_rounds: Option<usize>,
    observer: Option<RoundObserver<'a>>,
}

impl<'a> MatchEngine<'a> {
    pub fn new(
        first: &'a mut PlayerController,
        second: &'a mut PlayerController,
    ) -> Result<Self, MatchError> {
        if first.grid_size() != second.grid_size() {
            return Err(MatchError::GridMismatch {
                first: first.grid_size(),
                second: second.grid_size(),
            });
        }
        Ok(Self {
            first,
            second,
            max_rounds: None,
            observer: None,
        })
    }

    /// Give up with [`MatchError::RoundLimit`] after `rounds` undecided rounds.
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn with_observer(
        mut self,
        observer: impl FnMut(usize, &PlayerController, &PlayerController) + 'a,
    ) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn first(&self) -> &PlayerController {
        &*self.first
    }

    pub fn second(&self) -> &PlayerController {
        &*self.second
    }

    /// Status derived from both grids without playing.
    pub fn status(&self) -> MatchStatus {
        if self.second.is_eliminated() {
            MatchStatus::FirstPlayerWon
        } else if self.first.is_eliminated() {
            MatchStatus::SecondPlayerWon
        } else {
            MatchStatus::InProgress
        }
    }

    /// Play one full round: the first player attacks, then (unless that ended
    /// the match) the second player attacks.
    pub fn run(&mut self) -> Result<MatchStatus, MatchError> {
        let status = self.status();
        if status.is_finished() {
            return Ok(status);
        }

        take_turn(self.first, self.second)?;
        if self.second.is_eliminated() {
            return Ok(MatchStatus::FirstPlayerWon);
        }

        take_turn(self.second, self.first)?;
        if self.first.is_eliminated() {
            return Ok(MatchStatus::SecondPlayerWon);
        }
        Ok(MatchStatus::InProgress)
    }

    /// Run rounds until the match is decided. A match already decided on
    /// entry reports zero rounds.
    pub fn play(&mut self) -> Result<MatchOutcome, MatchError> {
        let mut rounds = 0usize;
        let mut status = self.status();
        while !status.is_finished() {
            if let Some(limit) = self.max_rounds {
                if rounds >= limit {
                    return Err(MatchError::RoundLimit { rounds });
                }
            }
            rounds += 1;
            status = self.run()?;
            if !status.is_finished() {
                if let Some(observer) = self.observer.as_mut() {
                    observer(rounds, &*self.first, &*self.second);
                }
            }
        }

        let winner = if status == MatchStatus::FirstPlayerWon {
            self.first.name()
        } else {
            self.second.name()
        };
        log::info!("{} won after {} rounds", winner, rounds);
        Ok(MatchOutcome {
            status,
            rounds,
            winner: winner.to_string(),
        })
    }
}

/// One attack: `attacker` picks a target, `defender` resolves it and the
/// result goes back to `attacker`. Invalid targets abort before any mutation.
fn take_turn(
    attacker: &mut PlayerController,
    defender: &mut PlayerController,
) -> Result<(), MatchError> {
    let coord = attacker.choose_move();
    let invalid = |source| MatchError::InvalidMove {
        player: attacker.name().to_string(),
        coord,
        source,
    };
    if !coord.in_bounds(defender.grid_size()) {
        return Err(invalid(BoardError::OutOfRange(coord)));
    }
    if !attacker.knowledge().is_unknown(coord) {
        return Err(invalid(BoardError::AlreadyGuessed(coord)));
    }

    let status = defender.attack(coord);
    log::trace!("{} -> {} at {}: {:?}", attacker.name(), defender.name(), coord, status);
    attacker
        .record_feedback(coord, status)
        .map_err(|source| MatchError::InvalidMove {
            player: attacker.name().to_string(),
            coord,
            source,
        })
}

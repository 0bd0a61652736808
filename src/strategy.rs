//! Guess strategies: how a controller picks its next target.

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    common::{Coordinate, HitStatus},
    knowledge::KnowledgeGrid,
};

/// Decision function bound to a player controller.
///
/// Implementations must return an in-range coordinate whose knowledge status
/// is still [`HitStatus::Unknown`]. The match engine rejects anything else.
pub trait GuessStrategy {
    /// Choose the next coordinate to attack.
    fn choose_move(&mut self, knowledge: &KnowledgeGrid) -> Coordinate;

    /// Short name used in logs and reports.
    fn label(&self) -> &str;

    /// Inform the strategy of the result of its last attack.
    fn observe(&mut self, _coord: Coordinate, _status: HitStatus) {}
}

impl<S: GuessStrategy + ?Sized> GuessStrategy for alloc::boxed::Box<S> {
    fn choose_move(&mut self, knowledge: &KnowledgeGrid) -> Coordinate {
        (**self).choose_move(knowledge)
    }

    fn label(&self) -> &str {
        (**self).label()
    }

    fn observe(&mut self, coord: Coordinate, status: HitStatus) {
        (**self).observe(coord, status)
    }
}

/// Uniform random guessing by rejection sampling.
pub struct RandomStrategy<R: Rng = SmallRng> {
    rng: R,
}

impl RandomStrategy<SmallRng> {
    /// Reproducible strategy seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomStrategy<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> GuessStrategy for RandomStrategy<R> {
    fn choose_move(&mut self, knowledge: &KnowledgeGrid) -> Coordinate {
        random_unknown(&mut self.rng, knowledge)
    }

    fn label(&self) -> &str {
        "random"
    }
}

/// Pick a uniformly random unknown cell by rejection sampling. With nothing
/// left to guess this returns the origin, which the match engine rejects.
pub(crate) fn random_unknown<R: Rng + ?Sized>(rng: &mut R, knowledge: &KnowledgeGrid) -> Coordinate {
    let size = knowledge.size();
    if knowledge.unknown_count() == 0 {
        log::warn!("no unknown cells left to guess");
        return Coordinate::new(0, 0);
    }
    loop {
        let coord = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
        if knowledge.status(coord) == HitStatus::Unknown {
            return coord;
        }
    }
}

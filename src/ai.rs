// Probability-based guessing over the opponent grid.
// Works on `alloc` only; float powers go through libm.

use alloc::vec;
use alloc::vec::Vec;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    common::{Coordinate, HitStatus},
    knowledge::KnowledgeGrid,
    ship::{Orientation, Ship},
    strategy::{random_unknown, GuessStrategy},
};

/// Placements covering more observed hits get dramatically more weight so
/// cells next to confirmed hits stand out.
const HIT_BIAS: f64 = 10.0;

/// Temperatures below 1 sharpen the distribution towards likely cells.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Row-major likelihood of a ship segment occupying each cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Density {
    size: usize,
    cells: Vec<f64>,
}

impl Density {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, coord: Coordinate) -> f64 {
        if coord.in_bounds(self.size) {
            self.cells[coord.row * self.size + coord.col]
        } else {
            0.0
        }
    }

    /// Sum over all cells: 1.0 after normalization, 0.0 when nothing fits.
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }
}

/// Compute a probability density over all unknown cells given the knowledge
/// grid and the lengths of the enemy ships. Known cells always get zero.
pub fn calc_pdf(knowledge: &KnowledgeGrid, lengths: &[usize]) -> Density {
    let n = knowledge.size();
    let mut cells = vec![0.0f64; n * n];

    for &len in lengths {
        if len == 0 || len > n {
            continue;
        }
        for orient in Orientation::ALL {
            for r in 0..n {
                for c in 0..n {
                    let ship = Ship::new(Coordinate::new(r, c), orient, len);
                    if !ship.fits(n) {
                        continue;
                    }
                    let mut valid = true;
                    let mut n_hits = 0i32;
                    for cell in ship.cells() {
                        match knowledge.status(cell) {
                            HitStatus::Miss => {
                                valid = false;
                                break;
                            }
                            HitStatus::Hit => n_hits += 1,
                            HitStatus::Unknown => {}
                        }
                    }
                    if !valid {
                        continue;
                    }
                    let weight = libm::pow(HIT_BIAS, n_hits as f64);
                    for cell in ship.cells() {
                        if knowledge.status(cell) == HitStatus::Unknown {
                            cells[cell.row * n + cell.col] += weight;
                        }
                    }
                }
            }
        }
    }

    normalize(Density { size: n, cells })
}

fn normalize(mut density: Density) -> Density {
    let total = density.total();
    if total > 0.0 {
        for v in density.cells.iter_mut() {
            *v /= total;
        }
    }
    density
}

/// Sample a coordinate from a density using a temperature parameter. Returns
/// `None` when every cell has zero weight.
pub fn sample_pdf<R: Rng + ?Sized>(
    pdf: &Density,
    temperature: f64,
    rng: &mut R,
) -> Option<Coordinate> {
    let n = pdf.size;
    let adjusted: Vec<f64> = pdf
        .cells
        .iter()
        .map(|&v| if v > 0.0 { libm::pow(v, 1.0 / temperature) } else { 0.0 })
        .collect();
    let total: f64 = adjusted.iter().sum();
    if total.is_nan() || total <= 0.0 {
        return None;
    }
    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last = None;
    for (idx, &v) in adjusted.iter().enumerate() {
        if v <= 0.0 {
            continue;
        }
        cumulative += v;
        last = Some(Coordinate::new(idx / n, idx % n));
        if threshold < cumulative {
            return last;
        }
    }
    // rounding can leave the threshold just past the final bucket
    last
}

/// Hunt/target search driven by the placement density of the enemy fleet.
pub struct TargetedStrategy<R: Rng = SmallRng> {
    lengths: Vec<usize>,
    temperature: f64,
    rng: R,
}

impl TargetedStrategy<SmallRng> {
    pub fn seeded(lengths: Vec<usize>, seed: u64) -> Self {
        Self::with_rng(lengths, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TargetedStrategy<R> {
    pub fn with_rng(lengths: Vec<usize>, rng: R) -> Self {
        Self {
            lengths,
            temperature: DEFAULT_TEMPERATURE,
            rng,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

impl<R: Rng> GuessStrategy for TargetedStrategy<R> {
    fn choose_move(&mut self, knowledge: &KnowledgeGrid) -> Coordinate {
        let pdf = calc_pdf(knowledge, &self.lengths);
        match sample_pdf(&pdf, self.temperature, &mut self.rng) {
            Some(coord) => coord,
            None => random_unknown(&mut self.rng, knowledge),
        }
    }

    fn label(&self) -> &str {
        "targeted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_ignores_known_cells_and_sums_to_one() {
        let mut k = KnowledgeGrid::new(4);
        k.record(Coordinate::new(0, 0), HitStatus::Miss).unwrap();
        k.record(Coordinate::new(2, 2), HitStatus::Hit).unwrap();
        let pdf = calc_pdf(&k, &[2, 3]);
        assert_eq!(pdf.get(Coordinate::new(0, 0)), 0.0);
        assert_eq!(pdf.get(Coordinate::new(2, 2)), 0.0);
        assert!((pdf.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn neighbours_of_a_hit_outweigh_far_cells() {
        let mut k = KnowledgeGrid::new(6);
        k.record(Coordinate::new(3, 3), HitStatus::Hit).unwrap();
        let pdf = calc_pdf(&k, &[2]);
        assert!(pdf.get(Coordinate::new(3, 4)) > pdf.get(Coordinate::new(0, 0)));
    }

    #[test]
    fn empty_density_samples_nothing() {
        let mut k = KnowledgeGrid::new(1);
        k.record(Coordinate::new(0, 0), HitStatus::Miss).unwrap();
        let pdf = calc_pdf(&k, &[1]);
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(sample_pdf(&pdf, DEFAULT_TEMPERATURE, &mut rng), None);
    }
}

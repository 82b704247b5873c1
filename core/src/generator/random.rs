use super::*;

/// Placement strategy that picks mines uniformly without replacement.
///
/// Candidates are laid out in row-major order and each draw removes one of the remaining ones, so every subset of
/// the requested size is equally likely and no coordinate is picked twice.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinePlacer<R> {
    rng: R,
}

impl<R: RandomSource> RandomMinePlacer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomMinePlacer<rand::rngs::SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(seeded(seed))
    }
}

impl<R: RandomSource> MinePlacer for RandomMinePlacer<R> {
    fn place(&mut self, mines: CellCount, dimensions: Dimensions) -> Vec<Coord2> {
        let total_cells = dimensions.total_cells();

        let count = if mines > total_cells {
            log::warn!(
                "Minefield already full, requested {} mines but only {} fit",
                mines,
                total_cells
            );
            total_cells
        } else {
            mines
        };

        let mut candidates: Vec<Coord2> = dimensions.iter_coords().collect();
        let mut placed = Vec::with_capacity(count.into());

        for _ in 0..count {
            // count <= total_cells, so the candidate list is never empty here
            let last = (candidates.len() - 1) as CellCount;
            let index = self.rng.next_int(0, last);
            placed.push(candidates.remove(index.into()));
        }

        log::debug!(
            "Placed {} mines on a {}x{} field",
            placed.len(),
            dimensions.height(),
            dimensions.width()
        );
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::{BTreeMap, BTreeSet};
    use alloc::vec;

    /// Replays a fixed list of draws, failing if asked for more.
    struct ScriptedSource {
        draws: vec::IntoIter<CellCount>,
    }

    impl ScriptedSource {
        fn new(draws: &[CellCount]) -> Self {
            Self {
                draws: draws.to_vec().into_iter(),
            }
        }
    }

    impl RandomSource for ScriptedSource {
        fn next_int(&mut self, min: CellCount, max: CellCount) -> CellCount {
            let value = self.draws.next().expect("script exhausted");
            assert!((min..=max).contains(&value), "scripted draw out of range");
            value
        }

        fn next_float(&mut self) -> f32 {
            0.0
        }
    }

    fn dims(height: Coord, width: Coord) -> Dimensions {
        Dimensions::new(height, width).unwrap()
    }

    #[test]
    fn places_exact_count_without_duplicates() {
        for seed in 0..50 {
            let mut placer = RandomMinePlacer::from_seed(seed);
            let mines = placer.place(40, dims(16, 16));
            let unique: BTreeSet<_> = mines.iter().copied().collect();

            assert_eq!(mines.len(), 40);
            assert_eq!(unique.len(), 40);
            assert!(mines.iter().all(|&coords| dims(16, 16).contains(coords)));
        }
    }

    #[test]
    fn request_above_capacity_is_clamped() {
        let mut placer = RandomMinePlacer::from_seed(3);

        assert_eq!(placer.place(5, dims(1, 1)), [(0, 0)]);

        let mines = placer.place(CellCount::MAX, dims(3, 4));
        let unique: BTreeSet<_> = mines.iter().copied().collect();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn zero_mines_places_nothing() {
        let mut placer = RandomMinePlacer::from_seed(3);

        assert!(placer.place(0, dims(4, 4)).is_empty());
    }

    #[test]
    fn draws_index_into_remaining_candidates() {
        // 2x3 candidates: (0,0) (1,0) (2,0) (0,1) (1,1) (2,1)
        let mut placer = RandomMinePlacer::new(ScriptedSource::new(&[0, 0, 3]));

        let mines = placer.place(3, dims(2, 3));

        assert_eq!(mines, [(0, 0), (1, 0), (2, 1)]);
    }

    #[test]
    fn last_draw_uses_degenerate_range() {
        let mut placer = RandomMinePlacer::new(ScriptedSource::new(&[1, 0]));

        assert_eq!(placer.place(2, dims(1, 2)), [(1, 0), (0, 0)]);
    }

    #[test]
    fn same_seed_same_placement() {
        let a = RandomMinePlacer::from_seed(99).place(99, dims(16, 30));
        let b = RandomMinePlacer::from_seed(99).place(99, dims(16, 30));

        assert_eq!(a, b);
    }

    #[test]
    fn every_cell_can_be_picked() {
        let mut placer = RandomMinePlacer::from_seed(11);
        let mut hits = BTreeSet::new();

        for _ in 0..200 {
            hits.extend(placer.place(1, dims(3, 3)));
        }

        assert_eq!(hits.len(), 9);
    }

    #[test]
    fn every_pair_is_equally_likely() {
        let mut placer = RandomMinePlacer::from_seed(2024);
        let mut counts: BTreeMap<BTreeSet<Coord2>, u32> = BTreeMap::new();

        for _ in 0..60_000 {
            let pair: BTreeSet<_> = placer.place(2, dims(1, 4)).into_iter().collect();
            assert_eq!(pair.len(), 2);
            *counts.entry(pair).or_default() += 1;
        }

        // C(4, 2) = 6 subsets, 10_000 each on average
        assert_eq!(counts.len(), 6);
        for (pair, &count) in &counts {
            assert!((9_000..=11_000).contains(&count), "{pair:?} drawn {count} times");
        }
    }
}

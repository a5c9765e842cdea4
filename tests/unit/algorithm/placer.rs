//! Tests for random 2x2 block placement

#[cfg(test)]
mod tests {
    use gridcollage::algorithm::placer::place_large_blocks;
    use gridcollage::algorithm::plan::{LayoutBuilder, PlanWarning};
    use gridcollage::spatial::{CellCoord, Span};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests the only possible anchor on a 2x2 grid is found
    // Verified by drawing anchors from the full grid range
    #[test]
    fn test_single_block_on_minimal_grid() {
        let mut builder = LayoutBuilder::new(2, 2);
        let mut rng = StdRng::seed_from_u64(0);

        let placed = place_large_blocks(&mut builder, ["x"], 100, &mut rng);

        let plan = builder.finish();
        assert_eq!(placed, 1);
        assert_eq!(plan.placements().len(), 1);
        let block = plan.placements().first().map(|p| (p.anchor(), p.span()));
        assert_eq!(block, Some((CellCoord::new(0, 0), Span::LARGE)));
        assert!(plan.warnings().is_empty());
    }

    // Tests blocks never overlap across many seeds
    // Verified by skipping the free-region check
    #[test]
    fn test_blocks_never_overlap() {
        for seed in 0..30 {
            let mut builder = LayoutBuilder::new(6, 7);
            let mut rng = StdRng::seed_from_u64(seed);

            let placed = place_large_blocks(&mut builder, 0..6, 100, &mut rng);

            let plan = builder.finish();
            assert_eq!(plan.placements().len(), placed);
            assert_eq!(plan.grid().empty_count(), 42 - 4 * placed);
            for (i, a) in plan.placements().iter().enumerate() {
                assert_eq!(a.span(), Span::LARGE);
                for b in plan.placements().iter().skip(i + 1) {
                    assert!(!a.overlaps(b), "seed {seed}: blocks overlap");
                }
            }
        }
    }

    // Tests a block with no room left is dropped with a warning
    // Verified by placing the block at the first drawn anchor regardless
    #[test]
    fn test_block_dropped_when_no_room() {
        // Any two 2x2 blocks in a 2x3 grid share the middle column
        let mut builder = LayoutBuilder::new(2, 3);
        let mut rng = StdRng::seed_from_u64(3);

        let placed = place_large_blocks(&mut builder, ["first", "second"], 100, &mut rng);

        let plan = builder.finish();
        assert_eq!(placed, 1);
        assert_eq!(plan.grid().empty_count(), 2);
        assert_eq!(
            plan.warnings(),
            &[PlanWarning::LargeBlockDropped {
                source: "second",
                attempts: 100,
            }]
        );
    }

    // Tests a grid too small for any block drops every image without drawing
    // Verified by removing the grid size guard
    #[test]
    fn test_grid_too_small_for_blocks() {
        let mut builder = LayoutBuilder::new(1, 5);
        let mut rng = StdRng::seed_from_u64(1);

        let placed = place_large_blocks(&mut builder, [1, 2], 100, &mut rng);

        let plan = builder.finish();
        assert_eq!(placed, 0);
        assert_eq!(plan.warnings().len(), 2);
        assert!(plan.warnings().iter().all(|w| matches!(
            w,
            PlanWarning::LargeBlockDropped { attempts: 0, .. }
        )));
    }

    // Tests identical seeds produce identical placements
    // Verified by reseeding from entropy inside the placer
    #[test]
    fn test_seeded_placement_is_reproducible() {
        let run = |seed| {
            let mut builder = LayoutBuilder::new(8, 8);
            place_large_blocks(
                &mut builder,
                ["a", "b", "c", "d"],
                100,
                &mut StdRng::seed_from_u64(seed),
            );
            builder.finish()
        };

        assert_eq!(run(21), run(21));
    }
}

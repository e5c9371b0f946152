//! Property-based invariant tests for marching squares.
//!
//! These verify invariants that must hold for **any** corner values and any
//! threshold:
//!
//! 1. Segment endpoints are always finite (flat-edge guard included).
//! 2. Every endpoint lies exactly on one of the cell's four edges, matching
//!    the tabled edge pair for the cell's case.
//! 3. Cases 0 and 15 emit nothing; every other case emits the tabled count.
//! 4. Extraction over a whole grid keeps every endpoint inside the grid's
//!    pixel bounds.
//! 5. The threshold sweep is evenly spaced, starts at -1, and stays in
//!    [-1, 1).

use isobar_contour::{
    CASE_EDGES, Edge, Point, ValueGrid, cell_case, cell_segments, march_grid, thresholds,
};
use proptest::prelude::*;

const CELL: f64 = 8.0;

fn corner() -> impl Strategy<Value = f64> {
    -1.5f64..1.5
}

fn on_edge(p: Point, edge: Edge, x: f64, y: f64) -> bool {
    let eps = 1e-9;
    match edge {
        Edge::Top => (p.y - y).abs() < eps,
        Edge::Right => (p.x - (x + CELL)).abs() < eps,
        Edge::Bottom => (p.y - (y + CELL)).abs() < eps,
        Edge::Left => (p.x - x).abs() < eps,
    }
}

proptest! {
    #[test]
    fn endpoints_finite_and_on_tabled_edges(
        a in corner(),
        b in corner(),
        c in corner(),
        d in corner(),
        threshold in -1.0f64..1.0,
    ) {
        let case = cell_case(a, b, c, d, threshold) as usize;
        let segments = cell_segments(32.0, 40.0, CELL, [a, b, c, d], threshold);
        let expected = CASE_EDGES[case];

        prop_assert_eq!(segments.len(), expected.len());
        for (segment, &(from, to)) in segments.iter().zip(expected) {
            for p in [segment.a, segment.b] {
                prop_assert!(p.x.is_finite() && p.y.is_finite(), "non-finite endpoint {:?}", p);
            }
            prop_assert!(on_edge(segment.a, from, 32.0, 40.0), "start off {:?}: {:?}", from, segment.a);
            prop_assert!(on_edge(segment.b, to, 32.0, 40.0), "end off {:?}: {:?}", to, segment.b);
        }
    }

    #[test]
    fn crossed_edges_interpolate_within_the_edge(
        a in corner(),
        b in corner(),
        c in corner(),
        d in corner(),
        threshold in -1.0f64..1.0,
    ) {
        // Every tabled edge straddles the threshold, so the interpolation
        // parameter stays in [0, 1] and endpoints stay on the cell border.
        let segments = cell_segments(0.0, 0.0, CELL, [a, b, c, d], threshold);
        for segment in &segments {
            for p in [segment.a, segment.b] {
                prop_assert!((-1e-9..=CELL + 1e-9).contains(&p.x), "{:?}", p);
                prop_assert!((-1e-9..=CELL + 1e-9).contains(&p.y), "{:?}", p);
            }
        }
    }

    #[test]
    fn grid_extraction_stays_in_bounds(
        seed_values in proptest::collection::vec(-1.0f64..1.0, 25),
        threshold in -1.0f64..1.0,
    ) {
        // 4x4 cells (5x5 vertices) of arbitrary values.
        let mut grid = ValueGrid::new();
        grid.ensure_size(32, 32, CELL);
        prop_assert_eq!(grid.cols() * grid.rows(), 25);
        let mut k = 0;
        grid.fill_with(|_, _| {
            let v = seed_values[k];
            k += 1;
            v
        });

        let max = 4.0 * CELL;
        march_grid(&grid, threshold, |segment| {
            for p in [segment.a, segment.b] {
                assert!(p.x.is_finite() && p.y.is_finite());
                assert!((0.0..=max).contains(&p.x), "x out of bounds: {p:?}");
                assert!((0.0..=max).contains(&p.y), "y out of bounds: {p:?}");
            }
        });
    }

    #[test]
    fn threshold_sweep_shape(levels in 1usize..64) {
        let sweep: Vec<f64> = thresholds(levels).collect();
        prop_assert_eq!(sweep.len(), levels);
        prop_assert_eq!(sweep[0], -1.0);

        let step = 2.0 / levels as f64;
        for (i, &t) in sweep.iter().enumerate() {
            prop_assert!((t - (-1.0 + step * i as f64)).abs() < 1e-15);
            prop_assert!((-1.0..1.0).contains(&t));
        }
    }
}

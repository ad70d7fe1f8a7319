use super::*;

#[test]
fn hero_grid_delays() {
    let dims = GridDims::new(9, 4);
    // Center is (4.5, 2); (4, 2) sits half a cell away.
    assert!((distance_from_center(4, 2, dims) - 0.5).abs() < 1e-12);
    let corner = stagger_delay(0, 0, dims, 0.15).as_secs_f64();
    let expected = (4.5f64 * 4.5 + 2.0 * 2.0).sqrt() * 0.15;
    assert!((corner - expected).abs() < 1e-9);
}

#[test]
fn delay_is_monotone_in_distance() {
    for (c, r) in [(9u32, 4u32), (3, 4), (5, 5), (1, 7), (16, 9)] {
        let dims = GridDims::new(c, r);
        let mut cells: Vec<(f64, Duration)> = (0..dims.total_cells())
            .map(|i| {
                let (col, row) = dims.cell_coords(i);
                (
                    distance_from_center(col, row, dims),
                    stagger_delay(col, row, dims, 0.15),
                )
            })
            .collect();
        cells.sort_by(|a, b| a.0.total_cmp(&b.0));
        for w in cells.windows(2) {
            assert!(w[1].1 >= w[0].1, "dims={dims:?}");
        }
    }
}

#[test]
fn zero_step_means_no_stagger() {
    assert_eq!(stagger_delay(0, 0, GridDims::new(9, 4), 0.0), Duration::ZERO);
}

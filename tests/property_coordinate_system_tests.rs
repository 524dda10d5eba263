use proptest::prelude::*;
use slide_lens::core::{CELL_COUNT_TOLERANCE, CoordinateSystem, Dataset, Viewport};

fn aligned_dataset(
    x0: i32,
    y0: i32,
    x_step: u32,
    y_step: u32,
    count: usize,
) -> Dataset {
    let pairs: Vec<[f64; 2]> = (0..count)
        .map(|i| {
            [
                f64::from(x0) + (i as f64) * f64::from(x_step),
                f64::from(y0) + (i as f64) * f64::from(y_step),
            ]
        })
        .collect();
    Dataset::from_pairs(&pairs).expect("aligned dataset")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn mapping_is_monotonic_and_invertible(
        x0 in -500i32..500,
        y0 in -500i32..500,
        x_step in 1u32..12,
        y_step in 1u32..12,
        count in 2usize..14,
        width in 200u32..1600,
        height in 200u32..1200,
        padding in 0.0f64..60.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let dataset = aligned_dataset(x0, y0, x_step, y_step, count);
        let system = CoordinateSystem::new(Viewport::new(width, height), padding, dataset.params())
            .expect("system");

        let x_span = system.x_max - system.x_min;
        let y_span = system.y_max - system.y_min;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(system.to_x(system.x_min + lo * x_span) <= system.to_x(system.x_min + hi * x_span));
        prop_assert!(system.to_y(system.y_min + lo * y_span) >= system.to_y(system.y_min + hi * y_span));

        let x_value = system.x_min + a * x_span;
        let y_value = system.y_min + b * y_span;
        prop_assert!((system.from_x(system.to_x(x_value)) - x_value).abs() <= system.gcd / 2.0);
        prop_assert!((system.from_y(system.to_y(y_value)) - y_value).abs() <= system.gcd / 2.0);
    }

    #[test]
    fn gridlines_cover_the_full_range(
        x0 in -500i32..500,
        y0 in -500i32..500,
        x_step in 1u32..12,
        y_step in 1u32..12,
        count in 2usize..14,
    ) {
        let dataset = aligned_dataset(x0, y0, x_step, y_step, count);
        let system = CoordinateSystem::new(Viewport::new(900, 700), 30.0, dataset.params())
            .expect("system");

        prop_assert!((system.total_x_cells - system.total_x_cells.round()).abs() <= CELL_COUNT_TOLERANCE);
        prop_assert!((system.total_y_cells - system.total_y_cells.round()).abs() <= CELL_COUNT_TOLERANCE);
        prop_assert!((x_step as f64 / system.gcd).fract() == 0.0);
        prop_assert!((y_step as f64 / system.gcd).fract() == 0.0);

        let grid = system.grid_lines();
        let xs: Vec<f64> = grid.x.map(|line| line.value).collect();
        let ys: Vec<f64> = grid.y.map(|line| line.value).collect();

        prop_assert_eq!(xs.len(), system.total_x_cells.round() as usize + 1);
        prop_assert_eq!(ys.len(), system.total_y_cells.round() as usize + 1);
        prop_assert_eq!(xs.first().copied(), Some(system.x_min));
        prop_assert_eq!(xs.last().copied(), Some(system.x_max));
        prop_assert_eq!(ys.first().copied(), Some(system.y_min));
        prop_assert_eq!(ys.last().copied(), Some(system.y_max));
    }

    #[test]
    fn grid_stays_inside_padded_canvas(
        x_step in 1u32..20,
        y_step in 1u32..20,
        count in 2usize..10,
        width in 200u32..1600,
        height in 200u32..1200,
        padding in 0.0f64..80.0,
    ) {
        let dataset = aligned_dataset(0, 0, x_step, y_step, count);
        let system = CoordinateSystem::new(Viewport::new(width, height), padding, dataset.params())
            .expect("system");
        let (left, top, right, bottom) = system.plot_bounds();
        let slack = 1e-6;

        prop_assert!(left >= padding - slack);
        prop_assert!(top >= padding - slack);
        prop_assert!(right <= f64::from(width) - padding + slack);
        prop_assert!(bottom <= f64::from(height) - padding + slack);
    }
}

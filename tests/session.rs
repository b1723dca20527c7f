use gridnav::{Cell, Grid, GridConfig, PathOutcome, Session, find_path};
use rand::{Rng, SeedableRng, rngs::StdRng};


fn open_cells(grid: &Grid) -> Vec<Cell> {
    (0..grid.rows() as i32)
        .flat_map(|row| (0..grid.columns() as i32).map(move |col| Cell::new(col, row)))
        .filter(|cell| grid.is_blocked(*cell) == Ok(false))
        .collect()
}

#[test]
fn test_reference_configuration_round() {
    let config = GridConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut session = Session::random(&config, &mut rng).unwrap();

    let grid = session.grid();
    assert_eq!((grid.columns(), grid.rows()), (25, 20));
    assert!(grid.blocked_count() <= 150);

    let open = open_cells(session.grid());
    for _ in 0..20 {
        let start = open[rng.random_range(0..open.len())];
        let end = open[rng.random_range(0..open.len())];
        session.set_start(start).unwrap();
        session.set_end(end).unwrap();

        let outcome = session.search().unwrap().unwrap();
        match &outcome {
            PathOutcome::Found(path) => {
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
                assert!(path.windows(2).all(|p| p[0].is_adjacent(&p[1])));
                assert_eq!(session.last_path(), path.as_slice());
            }
            PathOutcome::NotFound => assert!(session.last_path().is_empty()),
        }

        // nothing changed, so the same answer comes back
        assert_eq!(session.search().unwrap(), Some(outcome));
    }
}

#[test]
fn test_searches_run_in_parallel_on_independent_grids() {
    let grids: Vec<Grid> = (0..4)
        .map(|seed| {
            let mut grid = Grid::new(30, 30).unwrap();
            grid.scatter_obstacles(0.25, &mut StdRng::seed_from_u64(seed)).unwrap();
            grid.set_blocked(Cell::new(0, 0), false).unwrap();
            grid.set_blocked(Cell::new(29, 29), false).unwrap();
            grid
        })
        .collect();

    let sequential: Vec<PathOutcome> = grids
        .iter()
        .map(|g| find_path(g, Cell::new(0, 0), Cell::new(29, 29)).unwrap())
        .collect();

    let parallel: Vec<PathOutcome> = std::thread::scope(|s| {
        let handles: Vec<_> = grids
            .iter()
            .map(|g| s.spawn(move || find_path(g, Cell::new(0, 0), Cell::new(29, 29)).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

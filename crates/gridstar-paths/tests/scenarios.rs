use gridstar_core::{GridEnv, GridError, Position};
use gridstar_paths::{
    Endpoint, Pathfinder, SearchError, SearchOutcome, find_path, manhattan,
};

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

#[test]
fn single_cell_grid() {
    let grid = GridEnv::open(1, 1).unwrap();
    let path = find_path(&grid, p(0, 0), p(0, 0)).unwrap().unwrap();
    assert_eq!(path.positions(), &[p(0, 0)]);
}

#[test]
fn start_equals_goal_on_larger_grid() {
    let grid = GridEnv::open(7, 4).unwrap();
    let path = find_path(&grid, p(3, 2), p(3, 2)).unwrap().unwrap();
    assert_eq!(path.into_vec(), vec![p(3, 2)]);
}

#[test]
fn open_three_by_three_corner_to_corner() {
    let grid = GridEnv::open(3, 3).unwrap();
    let path = find_path(&grid, p(0, 0), p(2, 2)).unwrap().unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(path.steps(), 4);
    assert_eq!(path.start(), p(0, 0));
    assert_eq!(path.goal(), p(2, 2));
    assert!(path.is_connected());
}

#[test]
fn walled_off_column_has_no_path() {
    let grid = GridEnv::parse(
        "
.#.
.#.
.#.",
    )
    .unwrap();
    let mut pf = Pathfinder::new();
    let outcome = pf.astar_path(&grid, p(0, 0), p(0, 2)).unwrap();
    assert_eq!(outcome, SearchOutcome::Exhausted);
    assert!(outcome.path().is_none());
    assert_eq!(pf.stats().expanded, 3);
}

#[test]
fn straight_run_along_row_axis() {
    let grid = GridEnv::open(10, 10).unwrap();
    let path = find_path(&grid, p(0, 0), p(9, 0)).unwrap().unwrap();
    assert_eq!(path.len(), 10);
    assert_eq!(path.steps(), 9);
    assert!(path.iter().all(|q| q.col == 0));
    for (i, q) in path.iter().enumerate() {
        assert_eq!(q.row, i as i32);
    }
}

#[test]
fn start_outside_grid() {
    let grid = GridEnv::open(5, 5).unwrap();
    let mut pf = Pathfinder::new();
    assert_eq!(
        pf.astar_path(&grid, p(-1, 0), p(4, 4)),
        Err(SearchError::OutOfBounds {
            endpoint: Endpoint::Start,
            pos: p(-1, 0),
        })
    );
    assert_eq!(pf.stats().pushed, 0);
}

#[test]
fn goal_on_wall_is_rejected() {
    let grid = GridEnv::parse("..\n.#").unwrap();
    let err = find_path(&grid, p(0, 0), p(1, 1)).unwrap_err();
    assert_eq!(
        err,
        SearchError::UntraversableEndpoint {
            endpoint: Endpoint::Goal,
            pos: p(1, 1),
        }
    );
}

#[test]
fn invalid_grids_fail_at_construction() {
    assert!(matches!(
        GridEnv::open(0, 3),
        Err(GridError::NonPositiveSize { .. })
    ));
    assert!(matches!(
        GridEnv::parse("...\n.."),
        Err(GridError::InconsistentRows { .. })
    ));
}

#[test]
fn grid_shared_between_threads() {
    let grid = GridEnv::open(40, 40).unwrap();
    let goals = [p(39, 39), p(0, 39), p(39, 0), p(20, 20)];
    std::thread::scope(|s| {
        let handles: Vec<_> = goals
            .iter()
            .map(|&goal| {
                let grid = &grid;
                s.spawn(move || {
                    let mut pf = Pathfinder::new();
                    let path = pf.astar_path(grid, p(0, 0), goal).unwrap().into_path();
                    (goal, path)
                })
            })
            .collect();
        for h in handles {
            let (goal, path) = h.join().unwrap();
            assert_eq!(path.unwrap().steps(), manhattan(p(0, 0), goal) as usize);
        }
    });
}

#[test]
fn large_open_grid() {
    let grid = GridEnv::open(100, 100).unwrap();
    let mut pf = Pathfinder::new();
    let path = pf
        .astar_path(&grid, p(0, 0), p(99, 99))
        .unwrap()
        .into_path()
        .unwrap();
    assert_eq!(path.steps(), 198);
    // Manhattan guidance keeps the search close to the path itself.
    assert!(pf.stats().expanded < 1_000);
}

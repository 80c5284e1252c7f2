use conway::snapshot::{self, Snapshot};
use conway::{Config, Grid, InputEvent, PointerButton, Simulation};
use proptest::prelude::*;

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..16, 1usize..16).prop_flat_map(|(w, h)| {
        prop::collection::vec(any::<bool>(), w * h).prop_map(move |bits| {
            let live: Vec<_> = bits
                .iter()
                .enumerate()
                .filter(|(_, alive)| **alive)
                .map(|(i, _)| (i % w, i / w))
                .collect();
            Grid::from_live_cells(w, h, &live)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn save_load_round_trip(grid in arb_grid(), paused in any::<bool>()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let original = Snapshot { game_state: grid, paused };

        snapshot::save(&path, &original).unwrap();
        prop_assert_eq!(snapshot::load(&path).unwrap(), original);
    }

    #[test]
    fn simulation_round_trip_through_disk(grid in arb_grid(), paused in any::<bool>()) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            state_path: dir.path().join("state.json"),
            start_paused: paused,
            ..Config::default()
        };
        let saved = Simulation::with_grid(&config, grid.clone()).unwrap();
        saved.save_state().unwrap();

        let mut restored = Simulation::with_grid(&config, Grid::new(grid.width(), grid.height())).unwrap();
        restored.load_state().unwrap();
        prop_assert_eq!(restored.grid(), &grid);
        prop_assert_eq!(restored.is_paused(), paused);
    }

    #[test]
    fn click_flips_exactly_one_cell(grid in arb_grid(), fx in 0.0f64..1.0, fy in 0.0f64..1.0) {
        let mut sim = Simulation::with_grid(&Config::default(), grid.clone()).unwrap();
        let (cell_w, cell_h) = sim.layout().cell_size();
        let x = ((fx * grid.width() as f64) as usize).min(grid.width() - 1);
        let y = ((fy * grid.height() as f64) as usize).min(grid.height() - 1);
        let control = sim.layout().control();
        let px = x as u32 * cell_w + cell_w / 2;
        let py = y as u32 * cell_h + cell_h / 2;
        prop_assume!(!control.contains(px, py));

        sim.handle_event(&InputEvent::PointerDown {
            x: px as f32,
            y: py as f32,
            button: PointerButton::Primary,
        });

        for cy in 0..grid.height() {
            for cx in 0..grid.width() {
                let expected = if (cx, cy) == (x, y) { !grid.get(cx, cy) } else { grid.get(cx, cy) };
                prop_assert_eq!(sim.grid().get(cx, cy), expected);
            }
        }
    }
}

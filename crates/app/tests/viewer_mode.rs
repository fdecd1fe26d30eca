use burrow_app::presets::PRESETS;
use burrow_app::viewer_loop::{TickOutcome, ViewerMode, ViewerState};
use burrow_core::Phase;
use macroquad::prelude::KeyCode;

const TICK_LIMIT: usize = 200_000;

fn tick_until_finished(viewer: &mut ViewerState) -> usize {
    for ticks in 1..=TICK_LIMIT {
        assert_eq!(viewer.tick(&[], || 0), TickOutcome::Continue);
        if viewer.mode == ViewerMode::Finished {
            return ticks;
        }
    }
    panic!("viewer never finished within {TICK_LIMIT} ticks");
}

#[test]
fn running_viewer_reaches_finished() {
    let mut viewer = ViewerState::new(0, 11);
    tick_until_finished(&mut viewer);

    assert!(viewer.grid.is_completed());
    assert_eq!(viewer.grid.phase(), Phase::Completed);
    assert!(viewer.status_line().contains("done"));
}

#[test]
fn finished_viewer_stays_put_until_regenerated() {
    let mut viewer = ViewerState::new(0, 5);
    tick_until_finished(&mut viewer);
    let open = viewer.grid.open_count();

    viewer.tick(&[KeyCode::Right], || 0);
    assert_eq!(viewer.mode, ViewerMode::Finished);
    assert_eq!(viewer.grid.open_count(), open);

    viewer.tick(&[KeyCode::R], || 99);
    assert_eq!(viewer.mode, ViewerMode::Running);
    assert_eq!(viewer.seed, 99);
    assert_eq!(viewer.preset_index, 0);
}

#[test]
fn paused_viewer_single_steps_on_right() {
    let mut viewer = ViewerState::new(0, 3);
    viewer.tick(&[KeyCode::Space], || 0);
    assert_eq!(viewer.mode, ViewerMode::Paused);

    let before = viewer.grid.open_count();
    viewer.tick(&[KeyCode::Right], || 0);
    assert!(viewer.grid.open_count() >= before);
    assert_eq!(viewer.grid.phase(), Phase::Generating);
}

#[test]
fn same_seed_and_preset_replay_identically() {
    let mut left = ViewerState::new(1, 2024);
    let mut right = ViewerState::new(1, 2024);
    tick_until_finished(&mut left);
    tick_until_finished(&mut right);

    assert_eq!(left.grid.snapshot(), right.grid.snapshot());
    assert_eq!(left.grid.width(), PRESETS[1].grid_size);
}

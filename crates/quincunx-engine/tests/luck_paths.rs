//! Every coin-flip path of luck-mode beans on small boards.
//!
//! Each bean makes `slot_count - 1` decisions, so a board with `b` beans
//! has `2^(b * (slot_count - 1))` possible runs. All of them are walked
//! with scripted sources and each bean must land in the slot equal to
//! the number of "right" flips it made.

use quincunx_engine::Board;
use quincunx_test_utils::{
    assert_columns_legal, assert_conserved, assert_finished, bit_paths, luck_bean,
    ScriptedSource,
};

fn run_path(slot_count: usize, beans: usize, path: &[bool]) -> Vec<usize> {
    let pegs = slot_count - 1;
    let ctx = format!("slot_count={slot_count} beans={beans} path={path:?}");
    let mut board: Board<ScriptedSource> = Board::new(slot_count).unwrap();
    board.reset((0..beans).map(|b| luck_bean(&path[b * pegs..(b + 1) * pegs])));
    assert_eq!(board.loaded_count(), beans, "{ctx}");

    while board.advance_step() {
        let snap = board.snapshot();
        assert_conserved(&snap, beans, &ctx);
        assert_columns_legal(&snap, &ctx);
    }
    assert_finished(&board.snapshot(), beans, &ctx);
    board.slot_bean_counts()
}

fn expected_slots(slot_count: usize, beans: usize, path: &[bool]) -> Vec<usize> {
    let pegs = slot_count - 1;
    let mut counts = vec![0; slot_count];
    for b in 0..beans {
        let rights = path[b * pegs..(b + 1) * pegs].iter().filter(|&&x| x).count();
        counts[rights] += 1;
    }
    counts
}

#[test]
fn every_path_lands_where_its_flips_say() {
    for slot_count in 1..=4 {
        for beans in 1..=2 {
            let pegs = slot_count - 1;
            for path in bit_paths(beans * pegs) {
                assert_eq!(
                    run_path(slot_count, beans, &path),
                    expected_slots(slot_count, beans, &path),
                    "slot_count={slot_count} beans={beans} path={path:?}"
                );
            }
        }
    }
}

#[test]
fn single_bean_paths_follow_binomial_coefficients() {
    // Over all 2^(n-1) paths, slot k is reached C(n-1, k) times.
    let expected = [
        vec![1],
        vec![1, 1],
        vec![1, 2, 1],
        vec![1, 3, 3, 1],
        vec![1, 4, 6, 4, 1],
    ];
    for (i, binomial) in expected.iter().enumerate() {
        let slot_count = i + 1;
        let mut totals = vec![0; slot_count];
        for path in bit_paths(slot_count - 1) {
            for (slot, count) in run_path(slot_count, 1, &path).into_iter().enumerate() {
                totals[slot] += count;
            }
        }
        assert_eq!(&totals, binomial, "slot_count={slot_count}");
    }
}

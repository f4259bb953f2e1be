use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::operation::{Operation, Step};
use crate::pool::TilePool;
use crate::solver::search::{Candidate, Generation, SearchState};
use crate::solver::{SearchStats, Solution, Solver, SolverError, spawn, validate_hand};

/// Replay the steps of a solution, using each plaque or intermediate value
/// at most once, and check they really lead to the reported value.
fn assert_reachable(hand: &[u32], solution: &Solution) {
    let mut available = hand.to_vec();

    for step in solution.steps() {
        for operand in [step.left, step.right] {
            let position = available.iter().position(|&v| v == operand);
            assert!(
                position.is_some(),
                "{} is not available for step {} in {:?}",
                operand,
                step,
                available
            );
            if let Some(position) = position {
                available.swap_remove(position);
            }
        }
        assert_eq!(
            step.operation.apply(step.left, step.right),
            Ok(step.value),
            "step {} is not a legal operation",
            step
        );
        available.push(step.value);
    }

    match solution.steps().last() {
        Some(step) => assert_eq!(step.value, solution.best_value()),
        None => assert!(hand.contains(&solution.best_value())),
    }
}

fn solve(hand: &[u32], target: u32) -> Solution {
    match Solver::new().solve(hand, target) {
        Ok(solution) => solution,
        Err(err) => panic!("solve failed: {}", err),
    }
}

#[test]
fn test_exact_small_hand() {
    let hand = [1, 2, 3, 4, 5, 6];
    let solution = solve(&hand, 15);
    assert!(solution.is_exact());
    assert_eq!(solution.best_value(), 15);
    assert_eq!(solution.distance(), 0);
    assert_reachable(&hand, &solution);
}

#[test]
fn test_first_exact_match_wins() {
    // 5 x 3 is met before any other way of making 15 in exploration order
    let solution = solve(&[1, 2, 3, 4, 5, 6], 15);
    assert_eq!(
        solution.steps(),
        &[Step {
            left: 5,
            operation: Operation::Multiply,
            right: 3,
            value: 15,
        }]
    );
    assert_eq!(solution.trace(), vec!["5 x 3 = 15".to_string()]);
    assert_eq!(solution.stats().generations, 0);
}

#[test]
fn test_all_ones_approaches() {
    // (1 + 1 + 1) x (1 + 1 + 1) is the largest value six ones can make
    let hand = [1, 1, 1, 1, 1, 1];
    let solution = solve(&hand, 500);
    assert!(!solution.is_exact());
    assert_eq!(solution.best_value(), 9);
    assert_eq!(solution.distance(), 491);
    assert_reachable(&hand, &solution);
    assert_eq!(solution.stats().generations, 5);
}

#[test]
fn test_largest_plaque_already_matches() {
    let hand = [1, 1, 1, 1, 1, 100];
    let solution = solve(&hand, 100);
    assert!(solution.is_exact());
    assert!(solution.steps().is_empty());
    assert_eq!(solution.trace(), vec!["100".to_string()]);
    assert_eq!(solution.stats(), SearchStats::default());
}

#[test]
fn test_large_plaques_far_target() {
    let hand = [25, 50, 75, 100, 3, 4];
    let solution = solve(&hand, 999);
    assert_reachable(&hand, &solution);

    let bound: u64 = hand.iter().map(|&p| u64::from(p.max(2))).product();
    assert!(u64::from(solution.best_value()) <= bound);
    // ((50 / 25 + 100) x 4 - 75) x 3
    assert!(solution.is_exact());
    assert_eq!(solution.steps().len(), 5);
}

#[test]
fn test_is_exact_matches_best_value() {
    for target in [101, 250, 587, 731, 998] {
        let hand = [2, 3, 7, 8, 50, 75];
        let solution = solve(&hand, target);
        assert_eq!(solution.is_exact(), solution.best_value() == target);
        assert_reachable(&hand, &solution);
    }
}

#[test]
fn test_best_only_improves() {
    let hand = [1, 1, 1, 1, 1, 1];
    let mut distances = Vec::new();
    let result = Solver::new().solve_with_observer(&hand, 500, |value, steps| {
        assert!(!steps.is_empty());
        distances.push(value.abs_diff(500));
    });
    assert!(result.is_ok());

    assert!(!distances.is_empty());
    for pair in distances.windows(2) {
        if let [previous, next] = pair {
            assert!(next < previous, "best got worse: {:?}", distances);
        }
    }
    if let (Ok(solution), Some(&last)) = (result, distances.last()) {
        assert_eq!(solution.distance(), last);
    }
}

#[test]
fn test_solve_is_idempotent() {
    let hand = [7, 9, 10, 25, 50, 1];
    let first = solve(&hand, 863);
    let second = solve(&hand, 863);
    assert_eq!(first, second);
}

#[test]
fn test_hand_order_does_not_matter() {
    let first = solve(&[100, 6, 1, 9, 25, 3], 412);
    let second = solve(&[1, 3, 6, 9, 25, 100], 412);
    assert_eq!(first, second);
}

#[test]
fn test_random_rounds_are_legal() {
    let mut rng = StdRng::seed_from_u64(31);
    let pool = TilePool::new(&mut rng);

    for _ in 0..8 {
        let round = pool.draw_round(&mut rng);
        let solution = solve(&round.hand, round.target);
        assert_eq!(solution.target(), round.target);
        assert_eq!(solution.is_exact(), solution.best_value() == round.target);
        assert_reachable(&round.hand, &solution);
    }
}

#[test]
fn test_invalid_hand_size() {
    let result = Solver::new().solve(&[1, 2, 3], 100);
    assert_eq!(
        result,
        Err(SolverError::InvalidHandSize {
            expected: 6,
            actual: 3
        })
    );
    let result = Solver::new().solve(&[1, 2, 3, 4, 5, 6, 7], 100);
    assert!(matches!(
        result,
        Err(SolverError::InvalidHandSize { actual: 7, .. })
    ));
    assert!(Solver::new().solve(&[], 100).is_err());
}

#[test]
fn test_invalid_values() {
    assert_eq!(
        validate_hand(&[0, 2, 3, 4, 5, 6], 100),
        Err(SolverError::ZeroTile)
    );
    assert_eq!(
        validate_hand(&[1, 2, 3, 4, 5, 6], 0),
        Err(SolverError::ZeroTarget)
    );
    assert!(validate_hand(&[1, 2, 3, 4, 5, 6], 100).is_ok());
}

#[test]
fn test_reduce_appends_new_value() {
    let root = Candidate::root(&[1, 2, 3, 4]);
    let step = Step {
        left: 3,
        operation: Operation::Add,
        right: 2,
        value: 5,
    };
    let child = root.reduce(2, 1, step);
    assert_eq!(child.remaining, vec![1, 4, 5]);
    assert_eq!(child.value, 5);
    assert_eq!(child.steps, vec![step]);
    // the parent is left untouched
    assert_eq!(root.remaining, vec![1, 2, 3, 4]);
    assert!(root.steps.is_empty());
}

#[test]
fn test_generation_shrinks_depth() {
    let observer = |_: u32, _: &[Step]| {};
    let mut state = SearchState::new(&[2, 3, 5, 7, 11, 13], 997, observer);
    assert_eq!(state.depth, 6);
    assert_eq!(state.best.value, 13);

    let outcome = state.advance();
    assert!(matches!(outcome, Generation::Complete));
    assert_eq!(state.depth, 5);
    assert!(!state.frontier.is_empty());
    for candidate in &state.frontier {
        assert_eq!(candidate.remaining.len(), 5);
        assert_eq!(candidate.steps.len(), 1);
    }
}

#[test]
fn test_background_solve() {
    let hand = vec![1, 2, 3, 4, 5, 6];
    let pending = spawn(hand.clone(), 15);
    let result = pending.wait();
    assert_eq!(result, Solver::new().solve(&hand, 15));

    let pending = spawn(vec![1, 2], 15);
    assert!(matches!(
        pending.wait(),
        Err(SolverError::InvalidHandSize { .. })
    ));
}

#[test]
fn test_solution_display() {
    let solution = solve(&[1, 2, 3, 4, 5, 6], 15);
    assert_eq!(solution.to_string(), "Solution [Exact]\n\n5 x 3 = 15\n");

    let solution = solve(&[1, 1, 1, 1, 1, 1], 500);
    let text = solution.to_string();
    assert!(text.starts_with("Solution [Approached]\n\n"));
    assert!(text.ends_with("Off by 491"));
}

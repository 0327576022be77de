use rand::rngs::StdRng;
use rand::SeedableRng;
use slider_puzzle::{Board, Solver};
use std::collections::{HashMap, VecDeque};

/// Breadth-first distance from `start` to the goal, exploring at most
/// `limit` levels.
fn reference_distance(start: &Board, limit: usize) -> Option<usize> {
    let mut seen = HashMap::new();
    let mut frontier = VecDeque::new();
    seen.insert(start.clone(), 0);
    frontier.push_back(start.clone());

    while let Some(board) = frontier.pop_front() {
        let depth = seen[&board];
        if board.is_goal() {
            return Some(depth);
        }
        if depth == limit {
            continue;
        }
        for next in board.neighbors() {
            if !seen.contains_key(&next) {
                seen.insert(next.clone(), depth + 1);
                frontier.push_back(next);
            }
        }
    }
    None
}

fn permutations(items: &[u32]) -> Vec<Vec<u32>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

#[test]
fn every_two_by_two_board_matches_breadth_first_search() {
    let mut solvable = 0;
    for tiles in permutations(&[0, 1, 2, 3]) {
        let board = Board::new(&[&tiles[..2], &tiles[2..]]).unwrap();
        let solver = Solver::new(&board).unwrap();

        // The 2x2 state space has 12 reachable boards, so 12 levels is plenty.
        match reference_distance(&board, 12) {
            Some(distance) => {
                solvable += 1;
                assert!(solver.is_solvable(), "{board}");
                assert_eq!(solver.moves(), distance as isize, "{board}");
            }
            None => {
                assert!(!solver.is_solvable(), "{board}");
                assert_eq!(solver.moves(), -1);
            }
        }
    }
    assert_eq!(solvable, 12);
}

#[test]
fn scrambled_three_by_three_boards_are_solved_optimally() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for steps in [2, 5, 8, 11, 14, 18] {
        for _ in 0..3 {
            let board = Board::scrambled(3, steps, &mut rng).unwrap();
            let expected = reference_distance(&board, steps).expect("walk is reversible");

            let solver = Solver::new(&board).unwrap();
            assert_eq!(solver.moves(), expected as isize, "{board}");

            let path = solver.solution().unwrap();
            assert_eq!(path.len(), expected + 1);
            assert_eq!(path[0], board);
            assert!(path[expected].is_goal());
            for pair in path.windows(2) {
                assert!(pair[1].neighbors().contains(&pair[0]));
            }
        }
    }
}

#[test]
fn known_four_by_four_board() {
    let board = Board::new(&[
        [1u32, 2, 3, 4],
        [5, 6, 0, 8],
        [9, 10, 7, 11],
        [13, 14, 15, 12],
    ])
    .unwrap();
    let solver = Solver::new(&board).unwrap();
    assert_eq!(solver.moves(), 3);
}

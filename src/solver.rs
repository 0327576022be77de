//! A* search over sliding puzzle boards.
//!
//! The solver runs two searches side by side: one from the initial board and
//! one from its twin. Swapping two tiles flips the permutation parity, so
//! exactly one of the pair can reach the goal. Whichever search gets there
//! first settles whether the initial board is solvable.

use log::{debug, info, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::board::Board;
use crate::error::BoardError;

const PROGRESS_INTERVAL: usize = 100_000;

/// One vertex of a search tree. Predecessors are indices into the arena of
/// the search that created the node.
#[derive(Debug)]
struct Node {
    board: Board,
    moves: usize,
    previous: Option<usize>,
}

impl Node {
    fn priority(&self) -> usize {
        self.moves + self.board.manhattan()
    }
}

/// Queue entry for a node, ordered so that `BinaryHeap` pops the lowest
/// priority first. Ties go to the node created first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    priority: usize,
    index: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

enum Step {
    Goal(usize),
    Expanded,
    Exhausted,
}

/// A single best-first search from one root board.
struct Search {
    arena: Vec<Node>,
    open: BinaryHeap<Candidate>,
    expanded: usize,
}

impl Search {
    fn new(root: Board) -> Self {
        let mut search = Self {
            arena: Vec::new(),
            open: BinaryHeap::new(),
            expanded: 0,
        };
        search.push(root, 0, None);
        search
    }

    fn push(&mut self, board: Board, moves: usize, previous: Option<usize>) {
        let node = Node {
            board,
            moves,
            previous,
        };
        let candidate = Candidate {
            priority: node.priority(),
            index: self.arena.len(),
        };
        self.arena.push(node);
        self.open.push(candidate);
    }

    /// Pops the best node and either reports it as the goal or queues its
    /// neighbours, minus the board it was reached from.
    fn step(&mut self) -> Step {
        let Some(Candidate { index, .. }) = self.open.pop() else {
            return Step::Exhausted;
        };
        self.expanded += 1;

        let node = &self.arena[index];
        if node.board.is_goal() {
            return Step::Goal(index);
        }

        let moves = node.moves + 1;
        let grandparent = node.previous.map(|prev| &self.arena[prev].board);
        let children: Vec<Board> = node
            .board
            .neighbors()
            .into_iter()
            .filter(|child| Some(child) != grandparent)
            .collect();

        for child in children {
            self.push(child, moves, Some(index));
        }

        Step::Expanded
    }

    /// Boards from the root to `index`, inclusive.
    fn path_to(&self, index: usize) -> Vec<Board> {
        let mut path = Vec::new();
        let mut cursor = Some(index);
        while let Some(current) = cursor {
            let node = &self.arena[current];
            path.push(node.board.clone());
            cursor = node.previous;
        }
        path.reverse();
        path
    }
}

/// The outcome of solving one board. All work happens in [`Solver::new`].
#[derive(Debug, Clone)]
pub struct Solver {
    solution: Option<Vec<Board>>,
    expanded: usize,
}

impl Solver {
    /// Runs the search to completion.
    ///
    /// Fails only when the board has no twin, which a well-formed board
    /// always does.
    pub fn new(initial: &Board) -> Result<Self, BoardError> {
        let twin = initial.twin()?;
        debug!(
            "solving {0}x{0} board, manhattan {1}, hamming {2}",
            initial.dimension(),
            initial.manhattan(),
            initial.hamming()
        );

        let mut original = Search::new(initial.clone());
        let mut mirrored = Search::new(twin);

        let solution = loop {
            match original.step() {
                Step::Goal(index) => break Some(original.path_to(index)),
                Step::Exhausted => break None,
                Step::Expanded => {}
            }

            match mirrored.step() {
                Step::Goal(_) => break None,
                Step::Exhausted | Step::Expanded => {}
            }

            let expanded = original.expanded + mirrored.expanded;
            if expanded % PROGRESS_INTERVAL == 0 {
                debug!(
                    "expanded {} nodes, {} queued for the board, {} for its twin",
                    expanded,
                    original.open.len(),
                    mirrored.open.len()
                );
            }
        };

        let expanded = original.expanded + mirrored.expanded;
        match &solution {
            Some(path) => info!(
                "solved in {} moves after expanding {} nodes",
                path.len() - 1,
                expanded
            ),
            None => info!("unsolvable, proven after expanding {} nodes", expanded),
        }
        trace!(
            "arena sizes: {} for the board, {} for its twin",
            original.arena.len(),
            mirrored.arena.len()
        );

        Ok(Self { solution, expanded })
    }

    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Minimum number of moves to reach the goal, or `-1` when the board is
    /// unsolvable.
    pub fn moves(&self) -> isize {
        match &self.solution {
            Some(path) => path.len() as isize - 1,
            None => -1,
        }
    }

    /// Boards from the initial board to the goal, inclusive. `None` when the
    /// board is unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    /// Nodes popped across both searches.
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[[u32; 3]; 3]) -> Board {
        Board::new(rows).unwrap()
    }

    #[test]
    fn candidates_pop_lowest_priority_first() {
        let mut heap = BinaryHeap::new();
        for (priority, index) in [(5, 0), (2, 1), (9, 2), (2, 3)] {
            heap.push(Candidate { priority, index });
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|c| c.index)).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn node_priority_adds_moves_and_manhattan() {
        let node = Node {
            board: board(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]),
            moves: 3,
            previous: None,
        };
        assert_eq!(node.priority(), 13);
    }

    #[test]
    fn search_does_not_requeue_parent() {
        let mut search = Search::new(board(&[[1, 2, 3], [4, 0, 5], [7, 8, 6]]));
        assert!(matches!(search.step(), Step::Expanded));
        assert_eq!(search.arena.len(), 5);

        // The best child is one move from the goal; expanding it must not
        // queue the root again.
        assert!(matches!(search.step(), Step::Expanded));
        let root = &search.arena[0].board;
        let requeued = search.arena[5..].iter().filter(|n| &n.board == root).count();
        assert_eq!(requeued, 0);
    }

    #[test]
    fn goal_board_is_solved_immediately() {
        let goal = Board::goal(3).unwrap();
        let solver = Solver::new(&goal).unwrap();
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), 0);
        assert_eq!(solver.solution(), Some(&[goal][..]));
        assert_eq!(solver.expanded(), 1);
    }

    #[test]
    fn one_move_board() {
        let start = board(&[[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        let solver = Solver::new(&start).unwrap();
        assert_eq!(solver.moves(), 1);

        let path = solver.solution().unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], start);
        assert!(path[1].is_goal());
    }

    #[test]
    fn four_move_board() {
        let start = board(&[[0, 1, 3], [4, 2, 5], [7, 8, 6]]);
        let solver = Solver::new(&start).unwrap();
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), 4);

        let path = solver.solution().unwrap();
        assert_eq!(path.first(), Some(&start));
        assert!(path.last().unwrap().is_goal());
        for pair in path.windows(2) {
            assert!(pair[0].move_between(&pair[1]).is_some());
        }
    }

    #[test]
    fn swapped_tiles_are_unsolvable() {
        let start = board(&[[1, 2, 3], [4, 5, 6], [8, 7, 0]]);
        let solver = Solver::new(&start).unwrap();
        assert!(!solver.is_solvable());
        assert_eq!(solver.moves(), -1);
        assert!(solver.solution().is_none());
    }

    #[test]
    fn malformed_board_without_twin_fails() {
        let start = Board::new(&[[0u32, 0], [0, 1]]).unwrap();
        assert_eq!(Solver::new(&start).unwrap_err(), BoardError::NoTwin);
    }
}

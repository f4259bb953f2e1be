use log::debug;

use crate::operation::{Operation, Step};

/// A partial computation: the values still available and how they were reached
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub remaining: Vec<u32>,
    pub value: u32,
    pub steps: Vec<Step>,
}

impl Candidate {
    /// Root of the search: every plaque still available, nothing computed yet
    pub fn root(sorted_hand: &[u32]) -> Self {
        Self {
            remaining: sorted_hand.to_vec(),
            value: 0,
            steps: Vec::new(),
        }
    }

    /// Starting best: the largest plaque on its own
    pub fn fallback(sorted_hand: &[u32]) -> Self {
        Self {
            remaining: sorted_hand.to_vec(),
            value: sorted_hand.last().copied().unwrap_or(0),
            steps: Vec::new(),
        }
    }

    /// Combine positions `l` and `r` into `step.value`.
    ///
    /// The new remaining sequence is a fresh allocation: the untouched
    /// values in order, then the new value.
    pub fn reduce(&self, l: usize, r: usize, step: Step) -> Self {
        let mut remaining = Vec::with_capacity(self.remaining.len().saturating_sub(1));
        remaining.extend(
            self.remaining
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != l && i != r)
                .map(|(_, &v)| v),
        );
        remaining.push(step.value);

        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);

        Self {
            remaining,
            value: step.value,
            steps,
        }
    }
}

/// Outcome of one generation
pub(crate) enum Generation {
    /// An exact match was found; the search stops here
    Exact,
    /// Every candidate was expanded
    Complete,
}

/// Search state shared by every generation of one solve call
pub(crate) struct SearchState<F> {
    pub target: u32,
    pub depth: usize,
    pub frontier: Vec<Candidate>,
    pub best: Candidate,
    pub candidates: usize,
    observer: F,
}

impl<F> SearchState<F>
where
    F: FnMut(u32, &[Step]),
{
    pub fn new(sorted_hand: &[u32], target: u32, observer: F) -> Self {
        Self {
            target,
            depth: sorted_hand.len(),
            frontier: vec![Candidate::root(sorted_hand)],
            best: Candidate::fallback(sorted_hand),
            candidates: 0,
            observer,
        }
    }

    pub fn best_distance(&self) -> u32 {
        self.best.value.abs_diff(self.target)
    }

    /// Expand every candidate of the frontier by one operation.
    ///
    /// Each unordered pair of positions is taken once, as `l > r`. The
    /// sequence starts sorted, but new values are appended at its end, so
    /// later generations may hold the smaller value at `l`.
    /// The best is only replaced on a strict improvement, and the first
    /// exact value stops the whole generation.
    pub fn advance(&mut self) -> Generation {
        // Children of the last reducible generation are never expanded
        let keep_children = self.depth > 2;
        let frontier = std::mem::take(&mut self.frontier);
        let mut next = Vec::new();

        for current in &frontier {
            for (l, &left) in current.remaining.iter().enumerate().skip(1) {
                for (r, &right) in current.remaining.iter().enumerate().take(l) {
                    for operation in Operation::ALL {
                        let Ok(step) = operation.step(left, right) else {
                            continue;
                        };
                        self.candidates += 1;

                        let improves = step.value.abs_diff(self.target) < self.best_distance();
                        if !improves && !keep_children {
                            continue;
                        }

                        let child = current.reduce(l, r, step);
                        if improves {
                            debug!(
                                "New best {} (distance {}) at depth {}",
                                child.value,
                                child.value.abs_diff(self.target),
                                self.depth
                            );
                            self.best = child.clone();
                            (self.observer)(self.best.value, &self.best.steps);

                            if self.best.value == self.target {
                                return Generation::Exact;
                            }
                        }
                        if keep_children {
                            next.push(child);
                        }
                    }
                }
            }
        }

        debug!(
            "Depth {} expanded {} candidates into {}",
            self.depth,
            frontier.len(),
            next.len()
        );
        self.frontier = next;
        self.depth -= 1;
        Generation::Complete
    }
}

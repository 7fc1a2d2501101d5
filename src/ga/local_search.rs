//! 2-opt local search.
//!
//! # References
//!
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"

use super::fitness::FitnessEvaluator;
use crate::distance::DistanceOracle;
use crate::error::Result;

/// Improves a tour with first-improvement 2-opt until no move helps.
///
/// For every `1 <= i < k <= n - 1` the segment `[i, k]` is reversed and the
/// full tour is re-evaluated. The first strictly shorter candidate is
/// adopted and the scan restarts from `i = 1`. The search stops after a full
/// scan without improvement. Position 0 never moves.
///
/// Returns the improved tour and its cost. The result is never longer than
/// the input.
///
/// # Complexity
/// O(n²) candidates per scan, each evaluated in O(n); no cap on the number
/// of scans.
pub fn two_opt<D: DistanceOracle>(
    tour: &[usize],
    evaluator: &FitnessEvaluator<'_, D>,
) -> Result<(Vec<usize>, f64)> {
    let n = tour.len();
    let mut best = tour.to_vec();
    let mut best_cost = evaluator.cost(&best)?;
    let mut improvements = 0usize;

    'scan: loop {
        for i in 1..n.saturating_sub(1) {
            for k in i + 1..n {
                best[i..=k].reverse();
                let cost = evaluator.cost(&best)?;
                if cost < best_cost {
                    best_cost = cost;
                    improvements += 1;
                    tracing::trace!(i, k, cost, "2-opt improvement");
                    continue 'scan;
                }
                best[i..=k].reverse();
            }
        }
        break;
    }

    if improvements > 0 {
        tracing::trace!(improvements, best_cost, "2-opt converged");
    }

    Ok((best, best_cost))
}

/// Mutation probability of the guided operator at `generation` out of
/// `total_generations`.
///
/// Decays in quarters: 0.04, 0.03, 0.02, then 0.01 for the rest of the run.
pub fn guided_mutation_rate(generation: usize, total_generations: usize) -> f64 {
    let g = generation as f64;
    let total = total_generations as f64;
    if g <= 0.25 * total {
        0.04
    } else if g <= 0.5 * total {
        0.03
    } else if g <= 0.75 * total {
        0.02
    } else {
        0.01
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::ga::is_permutation;
    use proptest::prelude::*;

    /// Cities evenly spaced on a circle; the optimal tour visits them in order.
    fn circle(n: usize) -> DistanceMatrix {
        let pts: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let a = i as f64 / n as f64 * std::f64::consts::TAU;
                (a.cos(), a.sin())
            })
            .collect();
        let rows = pts
            .iter()
            .map(|p| pts.iter().map(|q| (p.0 - q.0).hypot(p.1 - q.1)).collect())
            .collect();
        DistanceMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_two_opt_uncrosses() {
        let m = circle(8);
        let eval = FitnessEvaluator::new(&m);
        let crossed = vec![0, 1, 5, 4, 3, 2, 6, 7];
        let (improved, cost) = two_opt(&crossed, &eval).unwrap();

        let optimal = eval.cost(&(0..8).collect::<Vec<_>>()).unwrap();
        assert!((cost - optimal).abs() < 1e-9, "got {improved:?} with {cost}");
        assert_eq!(improved[0], 0, "start city must stay fixed");
    }

    #[test]
    fn test_two_opt_reaches_circle_optimum() {
        let m = circle(10);
        let eval = FitnessEvaluator::new(&m);
        let scrambled = vec![0, 7, 2, 9, 4, 1, 6, 3, 8, 5];
        let (improved, cost) = two_opt(&scrambled, &eval).unwrap();

        // on points in convex position a 2-optimal tour is optimal
        let optimal = eval.cost(&(0..10).collect::<Vec<_>>()).unwrap();
        assert!((cost - optimal).abs() < 1e-9);
        assert!(is_permutation(&improved, 10));
        assert_eq!(improved[0], 0);
    }

    #[test]
    fn test_two_opt_never_worse() {
        let m = circle(7);
        let eval = FitnessEvaluator::new(&m);
        let tour = vec![3, 6, 1, 4, 0, 2, 5];
        let before = eval.cost(&tour).unwrap();
        let (after_tour, after) = two_opt(&tour, &eval).unwrap();
        assert!(after <= before);
        assert_eq!(eval.cost(&after_tour).unwrap(), after);
    }

    #[test]
    fn test_two_opt_keeps_optimal_tour() {
        // integer weights on a line, so costs compare exactly
        let rows = (0..6)
            .map(|i: i32| (0..6).map(|j: i32| f64::from((i - j).abs())).collect())
            .collect();
        let m = DistanceMatrix::from_rows(rows).unwrap();
        let eval = FitnessEvaluator::new(&m);
        let tour: Vec<usize> = (0..6).collect();
        let (out, _) = two_opt(&tour, &eval).unwrap();
        assert_eq!(out, tour);
    }

    #[test]
    fn test_two_opt_small_tours() {
        let m = circle(3);
        let eval = FitnessEvaluator::new(&m);
        assert_eq!(two_opt(&[], &eval).unwrap().0, Vec::<usize>::new());
        assert_eq!(two_opt(&[1], &eval).unwrap().0, vec![1]);
        assert_eq!(two_opt(&[1, 0], &eval).unwrap().0, vec![1, 0]);
    }

    #[test]
    fn test_two_opt_invalid_index() {
        let m = circle(3);
        let eval = FitnessEvaluator::new(&m);
        assert!(two_opt(&[0, 1, 3], &eval).is_err());
    }

    #[test]
    fn test_guided_rate_schedule() {
        assert_eq!(guided_mutation_rate(0, 100), 0.04);
        assert_eq!(guided_mutation_rate(25, 100), 0.04);
        assert_eq!(guided_mutation_rate(26, 100), 0.03);
        assert_eq!(guided_mutation_rate(50, 100), 0.03);
        assert_eq!(guided_mutation_rate(51, 100), 0.02);
        assert_eq!(guided_mutation_rate(75, 100), 0.02);
        assert_eq!(guided_mutation_rate(76, 100), 0.01);
        assert_eq!(guided_mutation_rate(99, 100), 0.01);
    }

    fn scattered() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<usize>)> {
        (3usize..12).prop_flat_map(|n| {
            let points = prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), n);
            let tour = Just((0..n).collect::<Vec<_>>()).prop_shuffle();
            (points, tour).prop_map(|(pts, tour)| {
                let rows: Vec<Vec<f64>> = pts
                    .iter()
                    .map(|p| pts.iter().map(|q| (p.0 - q.0).hypot(p.1 - q.1)).collect())
                    .collect();
                (rows, tour)
            })
        })
    }

    proptest! {
        #[test]
        fn prop_two_opt_monotone_and_valid((rows, tour) in scattered()) {
            let m = DistanceMatrix::from_rows(rows).unwrap();
            let eval = FitnessEvaluator::new(&m);
            let before = eval.cost(&tour).unwrap();
            let (improved, cost) = two_opt(&tour, &eval).unwrap();

            prop_assert!(is_permutation(&improved, tour.len()));
            prop_assert_eq!(improved[0], tour[0]);
            prop_assert!(cost <= before);
            prop_assert_eq!(eval.cost(&improved).unwrap(), cost);
        }

        #[test]
        fn prop_guided_rate_in_schedule(g in 0usize..1000, total in 1usize..1000) {
            let rate = guided_mutation_rate(g, total);
            prop_assert!([0.04, 0.03, 0.02, 0.01].contains(&rate));
        }
    }
}

//! Two-cluster classification scenarios, low values vs high values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ctt_knn::{KnnClassifier, LabelledTuple};

/// 50 "low" points on a grid inside [0,100)^3 and 50 "high" points on a grid
/// inside [100,200) x [0,100) x [50,150).
fn grid_neighbours() -> Vec<LabelledTuple> {
    let mut neighbours = Vec::with_capacity(100);
    for i in 0..50 {
        let x = 10.0 + 20.0 * (i % 5) as f64;
        let y = 10.0 + 20.0 * ((i / 5) % 5) as f64;
        let z = 25.0 + 50.0 * (i / 25) as f64;
        neighbours.push(LabelledTuple::new("low", vec![x, y, z]));
    }
    for i in 0..50 {
        let x = 105.0 + 20.0 * (i % 5) as f64;
        let y = 10.0 + 20.0 * ((i / 5) % 5) as f64;
        let z = 50.0 + 50.0 * (i / 25) as f64;
        neighbours.push(LabelledTuple::new("high", vec![x, y, z]));
    }
    neighbours
}

/// Same boxes as the grid, filled with seeded random integer coordinates.
fn random_neighbours(seed: u64) -> Vec<LabelledTuple> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut neighbours = Vec::with_capacity(100);
    for _ in 0..50 {
        let point = vec![
            rng.gen_range(0..100) as f64,
            rng.gen_range(0..100) as f64,
            rng.gen_range(0..100) as f64,
        ];
        neighbours.push(LabelledTuple::new("low", point));
    }
    for _ in 0..50 {
        let point = vec![
            rng.gen_range(100..200) as f64,
            rng.gen_range(0..100) as f64,
            rng.gen_range(50..150) as f64,
        ];
        neighbours.push(LabelledTuple::new("high", point));
    }
    neighbours
}

/// Full stable sort of every distance followed by a first-to-max vote.
fn reference_vote(neighbours: &[LabelledTuple], k: usize, query: &[f64]) -> (Option<String>, Vec<(String, usize)>) {
    let mut scored: Vec<(f64, &str)> = neighbours
        .iter()
        .map(|n| (ctt_knn::euclidean_distance(query, n.values()), n.label()))
        .collect();
    scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    scored.truncate(k);

    let mut tally: Vec<(String, usize)> = Vec::new();
    let mut best = None;
    let mut best_count = 0;
    for (_, label) in scored {
        let slot = match tally.iter().position(|(l, _)| l == label) {
            Some(slot) => slot,
            None => {
                tally.push((label.to_owned(), 0));
                tally.len() - 1
            }
        };
        tally[slot].1 += 1;
        if tally[slot].1 > best_count {
            best_count = tally[slot].1;
            best = Some(tally[slot].0.clone());
        }
    }
    (best, tally)
}

#[test]
fn query_on_high_boundary_is_high() {
    let knn = KnnClassifier::with_neighbours(5, grid_neighbours()).unwrap();
    let result = knn.classify(&[100.0, 21.0, 40.0]);
    // Nearest five: high 14.4, high 15.7, low 20.1, low 21.1, high 28.4.
    assert_eq!(result.label(), Some("high"));
    assert_eq!(result.count("high"), 3);
    assert_eq!(result.count("low"), 2);
    assert_eq!(result.total(), 5);
}

#[test]
fn deep_inside_each_cluster() {
    let knn = KnnClassifier::with_neighbours(5, grid_neighbours()).unwrap();
    assert_eq!(knn.classify(&[20.0, 20.0, 30.0]).label(), Some("low"));
    assert_eq!(knn.classify(&[170.0, 60.0, 100.0]).label(), Some("high"));
}

#[test]
fn tally_sums_to_k() {
    let neighbours = random_neighbours(7);
    for k in [1, 3, 5, 10, 99] {
        let knn = KnnClassifier::with_neighbours(k, neighbours.clone()).unwrap();
        let result = knn.classify(&[100.0, 21.0, 40.0]);
        assert_eq!(result.total(), k, "k = {k}");
    }
}

#[test]
fn tally_sums_to_neighbour_count_when_k_exceeds_it() {
    let knn = KnnClassifier::with_neighbours(500, random_neighbours(7)).unwrap();
    let result = knn.classify(&[100.0, 21.0, 40.0]);
    assert_eq!(result.total(), 100);
    assert_eq!(result.count("low"), 50);
    assert_eq!(result.count("high"), 50);
    // Equal counts: whichever label reached 50 first wins, and it must be one of them.
    assert!(matches!(result.label(), Some("low") | Some("high")));
}

#[test]
fn heap_selection_matches_full_sort() {
    // Integer coordinates produce plenty of exact distance ties.
    let mut rng = StdRng::seed_from_u64(2024);
    for seed in 0..20 {
        let neighbours = random_neighbours(seed);
        for k in [1, 2, 5, 8] {
            let knn = KnnClassifier::with_neighbours(k, neighbours.clone()).unwrap();
            let query = [
                rng.gen_range(0..200) as f64,
                rng.gen_range(0..100) as f64,
                rng.gen_range(0..150) as f64,
            ];
            let result = knn.classify(&query);
            let (label, tally) = reference_vote(&neighbours, k, &query);
            assert_eq!(result.label(), label.as_deref(), "seed {seed}, k {k}, query {query:?}");
            let got: Vec<(String, usize)> = result
                .tally()
                .iter()
                .map(|e| (e.label.clone(), e.count))
                .collect();
            assert_eq!(got, tally, "seed {seed}, k {k}, query {query:?}");
        }
    }
}

#[test]
fn same_input_same_answer() {
    let knn = KnnClassifier::with_neighbours(5, random_neighbours(99)).unwrap();
    let first = knn.classify(&[100.0, 21.0, 40.0]);
    for _ in 0..5 {
        assert_eq!(knn.classify(&[100.0, 21.0, 40.0]), first);
    }
}

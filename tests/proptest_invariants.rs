//! Property-based invariant tests for trace recording and generators.
//!
//! Verifies:
//! 1. Every sort ends with the ascending array and every index marked sorted;
//!    swap-based sorts keep the input multiset at every step
//! 2. Recording the same input twice yields identical traces
//! 3. BFS/DFS visit exactly the nodes reachable from the start, once each
//! 4. In-order traversal of a search tree is non-decreasing
//! 5. Pre-order starts at the root; an empty tree yields nothing
//! 6. Generated graphs are connected and simple
//! 7. Generated trees have one id per value and keep search-tree ordering

use algoscope::algorithm::{Algorithm, StartParams};
use algoscope::structures::graph::generate_graph;
use algoscope::structures::tree::generate_tree;
use algoscope::structures::{Graph, GraphLayout, NodeId, Structure, Tree, TreeLayout};
use algoscope::trace::{Step, Trace, DEFAULT_STEP_LIMIT};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_array() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-500i32..500, 0..40)
}

fn arb_sort() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Bubble),
        Just(Algorithm::Quick),
        Just(Algorithm::Merge),
    ]
}

fn arb_search() -> impl Strategy<Value = Algorithm> {
    prop_oneof![Just(Algorithm::GraphBfs), Just(Algorithm::GraphDfs)]
}

/// Node count plus an arbitrary (possibly disconnected) edge list
fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..16).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n), 0..24)
            .prop_map(|pairs| pairs.into_iter().filter(|(a, b)| a != b).collect::<Vec<_>>());
        (Just(n), edges)
    })
}

fn record(algorithm: Algorithm, structure: &Structure, start: Option<NodeId>) -> Trace {
    algorithm
        .trace(structure, StartParams { start }, DEFAULT_STEP_LIMIT)
        .expect("trace failed")
}

fn final_order(trace: &Trace) -> Vec<i32> {
    trace
        .last()
        .and_then(Step::as_traversal)
        .map(|s| s.order.clone())
        .unwrap_or_default()
}

// ── Sorting ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sorts_end_sorted(values in arb_array(), algorithm in arb_sort()) {
        let trace = record(algorithm, &Structure::Array(values.clone()), None);
        let last = trace.last().and_then(Step::as_sort).expect("sort step");

        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(&last.array, &expected);
        prop_assert_eq!(&last.sorted, &(0..values.len()).collect::<Vec<_>>());
    }

    #[test]
    fn swap_sorts_keep_the_multiset(
        values in arb_array(),
        algorithm in prop_oneof![Just(Algorithm::Bubble), Just(Algorithm::Quick)],
    ) {
        let trace = record(algorithm, &Structure::Array(values.clone()), None);
        let mut expected = values.clone();
        expected.sort_unstable();

        for step in trace.steps().iter().filter_map(Step::as_sort) {
            let mut seen = step.array.clone();
            seen.sort_unstable();
            prop_assert_eq!(&seen, &expected);
        }
    }

    #[test]
    fn merge_sort_keeps_the_multiset_at_the_ends(values in arb_array()) {
        // Mid-merge steps show the slot being overwritten, so only the
        // opening and closing arrays are permutations of the input
        let trace = record(Algorithm::Merge, &Structure::Array(values.clone()), None);
        let mut expected = values.clone();
        expected.sort_unstable();

        let first = trace.steps().first().and_then(Step::as_sort).expect("sort step");
        prop_assert_eq!(&first.array, &values);
        let last = trace.last().and_then(Step::as_sort).expect("sort step");
        prop_assert_eq!(&last.array, &expected);
    }

    #[test]
    fn recording_is_idempotent(values in arb_array(), algorithm in arb_sort()) {
        let structure = Structure::Array(values);
        prop_assert_eq!(record(algorithm, &structure, None), record(algorithm, &structure, None));
    }
}

// ── Graph search ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn search_visits_reachable_set(
        (n, edges) in arb_graph(),
        start in 0usize..16,
        algorithm in arb_search(),
    ) {
        let values: Vec<i32> = (0..n as i32).collect();
        let graph = Graph::with_values(&values, &edges, &GraphLayout::default());
        let start = NodeId(start % n);
        let reachable = graph.reachable_from(start);

        let trace = record(algorithm, &Structure::Graph(graph), Some(start));
        let last = trace.last().and_then(Step::as_traversal).expect("traversal step");

        let visited: HashSet<NodeId> = last.visited.iter().copied().collect();
        prop_assert_eq!(visited.len(), last.visited.len());
        prop_assert_eq!(visited, reachable.into_iter().collect::<HashSet<_>>());

        let order: HashSet<i32> = last.order.iter().copied().collect();
        prop_assert_eq!(order.len(), last.order.len());
        prop_assert_eq!(last.order[0], start.0 as i32);
    }

    #[test]
    fn search_is_idempotent((n, edges) in arb_graph(), algorithm in arb_search()) {
        let values: Vec<i32> = (1..=n as i32).collect();
        let structure = Structure::Graph(Graph::with_values(&values, &edges, &GraphLayout::default()));
        prop_assert_eq!(record(algorithm, &structure, None), record(algorithm, &structure, None));
    }
}

// ── Tree traversal ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn inorder_is_non_decreasing(values in arb_array()) {
        let trace = record(Algorithm::InOrder, &Structure::Tree(Tree::from_values(&values)), None);
        let order = final_order(&trace);

        prop_assert_eq!(order.len(), values.len());
        prop_assert!(order.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn preorder_starts_at_root(values in arb_array()) {
        let trace = record(Algorithm::PreOrder, &Structure::Tree(Tree::from_values(&values)), None);
        let order = final_order(&trace);

        match values.first() {
            Some(&root) => prop_assert_eq!(order.first().copied(), Some(root)),
            None => prop_assert!(order.is_empty()),
        }
    }

    #[test]
    fn every_order_visits_every_node(values in arb_array()) {
        let structure = Structure::Tree(Tree::from_values(&values));
        let mut expected = values.clone();
        expected.sort_unstable();

        for algorithm in [Algorithm::InOrder, Algorithm::PreOrder, Algorithm::PostOrder, Algorithm::TreeBfs] {
            let mut order = final_order(&record(algorithm, &structure, None));
            order.sort_unstable();
            prop_assert_eq!(&order, &expected);
        }
    }
}

// ── Generators ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn generated_graph_is_connected(seed in any::<u64>(), n in 1usize..40) {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = generate_graph(&mut rng, n, &GraphLayout::default());

        prop_assert_eq!(graph.len(), n);
        prop_assert!(graph.is_connected());
        prop_assert!(graph.is_simple());
        prop_assert!(graph.edges().len() >= n - 1);
    }

    #[test]
    fn generated_tree_is_search_tree(seed in any::<u64>(), n in 0usize..40) {
        let mut rng = StdRng::seed_from_u64(seed);
        let tree = generate_tree(&mut rng, n, 1, 20, &TreeLayout::default());

        let ids: HashSet<NodeId> = tree.nodes().iter().map(|node| node.id).collect();
        prop_assert_eq!(ids.len(), n);
        prop_assert!(tree.is_search_tree());
    }
}

//! Property tests checking algorithm results against brute-force references on
//! small random graphs.

use std::collections::{BTreeSet, HashMap, HashSet};

use lazygraph::{
    algorithms::{bfs, dfs, dijkstra_with, is_dag, postfix, prefix, scc, topo_sort, TopoOptions},
    graph::PersistentGraph,
    Error, ListGraph,
};
use proptest::prelude::*;

/// Random edge lists over at most 12 vertices.
fn edges() -> impl Strategy<Value = Vec<(u8, u8)>> {
    proptest::collection::vec((0u8..12, 0u8..12), 0..40)
}

/// Random weighted edge lists over at most 10 vertices, weights 1..=9.
fn weighted_edges() -> impl Strategy<Value = Vec<(u8, u64, u8)>> {
    proptest::collection::vec((0u8..10, 1u64..10, 0u8..10), 0..30)
}

/// Vertices reachable from `from` by following `edges`, including `from`.
fn reachable(edges: &[(u8, u8)], from: u8) -> BTreeSet<u8> {
    let mut seen = BTreeSet::from([from]);
    loop {
        let before = seen.len();
        for (a, b) in edges {
            if seen.contains(a) {
                seen.insert(*b);
            }
        }
        if seen.len() == before {
            return seen;
        }
    }
}

/// Returns `true` if some vertex reachable from `from` lies on a cycle.
fn has_reachable_cycle(edges: &[(u8, u8)], from: u8) -> bool {
    reachable(edges, from).into_iter().any(|v| {
        edges
            .iter()
            .filter(|(a, _)| *a == v)
            .any(|(_, b)| reachable(edges, *b).contains(&v))
    })
}

/// Bellman-Ford distances from `from`.
fn shortest(edges: &[(u8, u64, u8)], from: u8) -> HashMap<u8, u64> {
    let mut dist = HashMap::from([(from, 0u64)]);
    for _ in 0..=edges.len() {
        let mut changed = false;
        for (a, w, b) in edges {
            if let Some(&da) = dist.get(a) {
                let candidate = da + w;
                if dist.get(b).map_or(true, |&db| candidate < db) {
                    dist.insert(*b, candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

proptest! {
    #[test]
    fn test_dfs_bfs_visit_reachable_exactly_once(edges in edges(), seed in 0u8..12) {
        let graph = ListGraph::new(edges.clone());
        let expected = reachable(&edges, seed);

        let by_dfs: Vec<u8> = dfs(&graph, [seed]).collect();
        let by_bfs: Vec<u8> = bfs(&graph, [seed]).collect();

        prop_assert_eq!(by_dfs.len(), expected.len());
        prop_assert_eq!(by_bfs.len(), expected.len());
        prop_assert_eq!(by_dfs.into_iter().collect::<BTreeSet<_>>(), expected.clone());
        prop_assert_eq!(by_bfs.into_iter().collect::<BTreeSet<_>>(), expected.clone());

        let pre: BTreeSet<u8> = prefix(&graph, [seed]).collect();
        let post: Vec<u8> = postfix(&graph, [seed]).collect();
        prop_assert_eq!(pre, expected.clone());
        prop_assert_eq!(post.len(), expected.len());
    }

    #[test]
    fn test_topo_sort_valid_or_cycle(edges in edges(), seed in 0u8..12) {
        let graph = ListGraph::new(edges.clone());
        let cyclic = has_reachable_cycle(&edges, seed);

        prop_assert_eq!(is_dag(&graph, [seed]), !cyclic);

        match topo_sort(&graph, [seed], TopoOptions::default()) {
            Ok(order) => {
                prop_assert!(!cyclic);
                let position: HashMap<u8, usize> =
                    order.iter().enumerate().map(|(i, v)| (*v, i)).collect();
                prop_assert_eq!(position.len(), order.len());
                prop_assert_eq!(
                    order.iter().copied().collect::<BTreeSet<_>>(),
                    reachable(&edges, seed)
                );
                for (a, b) in &edges {
                    if let (Some(pa), Some(pb)) = (position.get(a), position.get(b)) {
                        prop_assert!(pa < pb, "edge {} -> {} out of order", a, b);
                    }
                }
            }
            Err(Error::CycleDetected) => prop_assert!(cyclic),
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn test_dijkstra_matches_bellman_ford(edges in weighted_edges(), seed in 0u8..10) {
        let graph = ListGraph::new(edges.clone());
        let expected = shortest(&edges, seed);

        let mut last = 0u64;
        let mut found = HashMap::new();
        for reached in dijkstra_with(&graph, [seed], |e| e.1) {
            prop_assert!(reached.distance >= last, "distances must not decrease");
            last = reached.distance;

            let path_total: u64 = reached.path.iter().map(|e| e.1).sum();
            prop_assert_eq!(path_total, reached.distance);
            prop_assert!(found.insert(reached.vertex, reached.distance).is_none());
        }

        prop_assert_eq!(found, expected);
    }

    #[test]
    fn test_scc_partitions_by_mutual_reachability(edges in edges(), seed in 0u8..12) {
        let graph = ListGraph::new(edges.clone());
        let components: Vec<Vec<u8>> = scc(&graph, [seed]).collect();

        let mut component_of = HashMap::new();
        for (i, component) in components.iter().enumerate() {
            for v in component {
                prop_assert!(component_of.insert(*v, i).is_none(), "{} in two components", v);
            }
        }
        prop_assert_eq!(
            component_of.keys().copied().collect::<BTreeSet<_>>(),
            reachable(&edges, seed)
        );

        for component in &components {
            for a in component {
                for b in component {
                    prop_assert!(reachable(&edges, *a).contains(b));
                }
            }
        }

        for (a, b) in &edges {
            if let (Some(ca), Some(cb)) = (component_of.get(a), component_of.get(b)) {
                if ca != cb {
                    prop_assert!(cb < ca, "component of {} must come before {}", b, a);
                    prop_assert!(!reachable(&edges, *b).contains(a));
                }
            }
        }
    }

    #[test]
    fn test_persistent_list_roundtrip(edges in edges()) {
        let graph = PersistentGraph::of_list(edges.clone());
        let listed: HashSet<(u8, u8)> = graph.to_list().into_iter().collect();
        let input: HashSet<(u8, u8)> = edges.into_iter().collect();
        prop_assert_eq!(listed, input);
    }

    #[test]
    fn test_persistent_add_remove_edge(edges in edges(), a in 0u8..12, b in 0u8..12) {
        let graph = PersistentGraph::of_list(edges);
        prop_assume!(!graph.contains_edge(&a, &b));

        let updated = graph.add_edge(a, b);
        prop_assert!(updated.contains_edge(&a, &b));
        prop_assert_eq!(updated.remove_edge(&a, &b), graph);
    }
}

use proptest::prelude::*;
use routegraph::{AdjListGraph, AdjMatrixGraph, GraphConfig};

/// Bellman-Ford over the same edge set, as an independent reference.
fn reference_distances(n: usize, edges: &[(usize, usize, u32)], source: usize) -> Vec<Option<u64>> {
    let mut cost = vec![vec![None; n + 1]; n + 1];
    for &(from, to, weight) in edges {
        cost[from][to] = Some(u64::from(weight)); // last write wins
    }
    let mut dist = vec![None; n + 1];
    dist[source] = Some(0u64);
    for _ in 0..n {
        for from in 1..=n {
            for to in 1..=n {
                if let (Some(d), Some(w)) = (dist[from], cost[from][to]) {
                    if dist[to].map_or(true, |cur| d + w < cur) {
                        dist[to] = Some(d + w);
                    }
                }
            }
        }
    }
    dist
}

fn weighted_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1usize..9).prop_flat_map(|n| {
        let edge = (1..=n, 1..=n, 1u32..50);
        (Just(n), proptest::collection::vec(edge, 0..30))
    })
}

fn unweighted_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| (Just(n), proptest::collection::vec((1..=n, 1..=n), 0..40)))
}

proptest! {
    #[test]
    fn dijkstra_matches_reference((n, edges) in weighted_graph()) {
        let mut labels = (1..=n).map(|i| i.to_string());
        let descriptors = edges.iter().map(|&(f, t, w)| (f as i64, t as i64, i64::from(w)));
        let mut graph: AdjMatrixGraph<String, i64> =
            AdjMatrixGraph::from_parts(n as i64, &mut labels, descriptors, GraphConfig::default()).unwrap();
        graph.find_shortest_path();

        for source in 1..=n {
            let expected = reference_distances(n, &edges, source);
            for target in 1..=n {
                let got = graph.distance(source, target).map(|d| d as u64);
                prop_assert_eq!(got, expected[target], "distance {} -> {}", source, target);

                if let Some(path) = graph.path(source, target) {
                    prop_assert_eq!(path.first().copied(), Some(source));
                    prop_assert_eq!(path.last().copied(), Some(target));
                    let mut seen = path.clone();
                    seen.sort_unstable();
                    seen.dedup();
                    prop_assert_eq!(seen.len(), path.len(), "route repeats a vertex");
                    let total: i64 = path.windows(2).map(|hop| graph.cost(hop[0], hop[1]).unwrap()).sum();
                    prop_assert_eq!(Some(total), graph.distance(source, target));
                } else {
                    prop_assert_eq!(graph.predecessor(source, target), None);
                }
            }
        }
    }

    #[test]
    fn dfs_visits_every_vertex_once((n, edges) in unweighted_graph()) {
        let mut labels = (1..=n).map(|i| i.to_string());
        let descriptors = edges.iter().map(|&(f, t)| (f as i64, t as i64));
        let graph: AdjListGraph<String> = AdjListGraph::from_parts(n as i64, &mut labels, descriptors).unwrap();

        let self_loops = edges.iter().filter(|(f, t)| f == t).count();
        prop_assert_eq!(graph.edge_count(), edges.len() - self_loops);

        let mut order: Vec<_> = graph.depth_first_search().unwrap().order().collect();
        prop_assert_eq!(order.len(), n);
        order.sort_unstable();
        prop_assert_eq!(order, (1..=n).collect::<Vec<_>>());
    }

    #[test]
    fn no_self_loops_survive((n, edges) in unweighted_graph()) {
        let mut labels = (1..=n).map(|i| i.to_string());
        let descriptors = edges.iter().map(|&(f, t)| (f as i64, t as i64));
        let graph: AdjListGraph<String> = AdjListGraph::from_parts(n as i64, &mut labels, descriptors).unwrap();
        for v in 1..=n {
            prop_assert!(graph.neighbors(v).all(|w| w != v));
        }
    }
}

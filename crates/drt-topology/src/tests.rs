//! Unit tests for drt-topology.
//!
//! Expected node/edge counts and average shortest path lengths for the
//! generators are the reference values of the standard constructions.

#[cfg(test)]
mod helpers {
    pub fn assert_close(got: f64, want: f64) {
        assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
    }
}

// ── Builder & CSR structure ───────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use drt_core::{EdgeId, NodeId};
    use crate::TopologyBuilder;

    #[test]
    fn empty_build() {
        let topo = TopologyBuilder::new().build();
        assert_eq!(topo.node_count(), 0);
        assert_eq!(topo.edge_count(), 0);
        assert!(topo.is_empty());
    }

    #[test]
    fn edges_add_missing_endpoints() {
        let mut b = TopologyBuilder::new();
        assert!(b.add_edge(NodeId(0), NodeId(4), 1.0));
        let topo = b.build();
        assert_eq!(topo.node_count(), 5);
        assert_eq!(topo.degree(NodeId(2)), 0);
    }

    #[test]
    fn duplicates_and_self_loops_ignored() {
        let mut b = TopologyBuilder::new();
        assert!(b.add_edge(NodeId(0), NodeId(1), 3.0));
        assert!(!b.add_edge(NodeId(1), NodeId(0), 7.0));
        assert!(!b.add_edge(NodeId(1), NodeId(1), 1.0));
        let topo = b.build();
        assert_eq!(topo.edge_count(), 1);
        assert_eq!(topo.edges[0].length, 3.0, "first length wins");
    }

    #[test]
    fn read_only_views_match_builder_input() {
        let empty = crate::Topology::empty();
        assert_eq!(empty.node_count(), 0);
        assert_eq!(empty.nodes().count(), 0);
        assert!(empty.edge(EdgeId(0)).is_none());

        let mut b = TopologyBuilder::new();
        b.add_edge(NodeId(2), NodeId(0), 4.5);
        let topo = b.build();
        let edge = topo.edge(EdgeId(0)).unwrap();
        assert_eq!((edge.a, edge.b, edge.length), (NodeId(0), NodeId(2), 4.5));
        assert!(topo.edge(EdgeId(1)).is_none());
    }

    #[test]
    fn csr_is_symmetric() {
        let topo = crate::generators::grid(3, 3);
        for node in topo.nodes() {
            for (neighbor, _) in topo.neighbors(node) {
                assert!(
                    topo.neighbors(neighbor).any(|(back, _)| back == node),
                    "{node} -> {neighbor} has no reverse slot"
                );
            }
        }
        // Centre of a 3×3 grid has four neighbours, corners two.
        assert_eq!(topo.degree(NodeId(4)), 4);
        assert_eq!(topo.degree(NodeId(0)), 2);
    }

    #[test]
    fn edges_enumerated_once_ordered() {
        let topo = crate::generators::ring(5);
        let edges: Vec<_> = topo.edges().collect();
        assert_eq!(edges.len(), 5);
        assert!(edges.iter().all(|(_, e)| e.a < e.b));
    }
}

// ── Generators ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generators {
    use drt_core::NodeId;
    use crate::generators::{grid, line, ring, star, triangular_lattice};
    use crate::PathMetric;
    use super::helpers::assert_close;

    #[test]
    fn ring_counts_and_l_avg() {
        let ten = ring(10);
        assert_eq!((ten.node_count(), ten.edge_count()), (10, 10));
        assert_close(ten.average_shortest_path_length(PathMetric::Hops).unwrap(), 25.0 / 9.0);

        let big = ring(101);
        assert_eq!((big.node_count(), big.edge_count()), (101, 101));
        assert_close(big.average_shortest_path_length(PathMetric::Hops).unwrap(), 25.5);
    }

    #[test]
    fn degenerate_rings() {
        assert_eq!(ring(0).node_count(), 0);
        let one = ring(1);
        assert_eq!((one.node_count(), one.edge_count()), (1, 0));
        let two = ring(2);
        assert_eq!((two.node_count(), two.edge_count()), (2, 1));
    }

    #[test]
    fn line_counts_and_l_avg() {
        let topo = line(100);
        assert_eq!((topo.node_count(), topo.edge_count()), (100, 99));
        assert_close(topo.average_shortest_path_length(PathMetric::Hops).unwrap(), 101.0 / 3.0);
    }

    #[test]
    fn star_includes_hub() {
        let topo = star(100);
        assert_eq!((topo.node_count(), topo.edge_count()), (101, 100));
        assert_eq!(topo.degree(NodeId(0)), 100);
        assert_close(topo.average_shortest_path_length(PathMetric::Hops).unwrap(), 200.0 / 101.0);
    }

    #[test]
    fn grid_counts_and_l_avg() {
        let topo = grid(10, 10);
        assert_eq!((topo.node_count(), topo.edge_count()), (100, 180));
        assert_close(topo.average_shortest_path_length(PathMetric::Hops).unwrap(), 20.0 / 3.0);
    }

    #[test]
    fn triangular_lattice_counts_and_l_avg() {
        let topo = triangular_lattice(13, 13);
        assert_eq!((topo.node_count(), topo.edge_count()), (105, 273));
        assert_close(
            topo.average_shortest_path_length(PathMetric::Hops).unwrap(),
            5.738_461_538_461_538_5,
        );
    }

    #[test]
    fn small_triangular_lattices() {
        let odd = triangular_lattice(2, 3);
        assert_eq!((odd.node_count(), odd.edge_count()), (8, 13));
        let even = triangular_lattice(2, 2);
        assert_eq!((even.node_count(), even.edge_count()), (6, 9));
        assert_close(even.average_shortest_path_length(PathMetric::Hops).unwrap(), 1.4);
        assert!(triangular_lattice(0, 5).is_empty());
    }
}

// ── Shortest paths ────────────────────────────────────────────────────────────

#[cfg(test)]
mod paths {
    use drt_core::NodeId;
    use crate::{PathMetric, TopologyBuilder, TopologyError};
    use super::helpers::assert_close;

    /// Square 0-1-2-3-0 with one long side (3-0) plus a chord 1-3.
    fn weighted_square() -> crate::Topology {
        let mut b = TopologyBuilder::new();
        b.add_edge(NodeId(0), NodeId(1), 1.0);
        b.add_edge(NodeId(1), NodeId(2), 1.0);
        b.add_edge(NodeId(2), NodeId(3), 1.0);
        b.add_edge(NodeId(3), NodeId(0), 10.0);
        b.add_edge(NodeId(1), NodeId(3), 1.5);
        b.build()
    }

    #[test]
    fn hops_ignore_lengths() {
        let topo = weighted_square();
        assert_close(topo.shortest_path_length(NodeId(0), NodeId(3), PathMetric::Hops).unwrap(), 1.0);
    }

    #[test]
    fn length_uses_dijkstra() {
        let topo = weighted_square();
        // 0→1→3 = 2.5 beats the direct 10.0 edge.
        assert_close(topo.shortest_path_length(NodeId(0), NodeId(3), PathMetric::Length).unwrap(), 2.5);
        assert_close(topo.shortest_path_length(NodeId(2), NodeId(2), PathMetric::Length).unwrap(), 0.0);
    }

    #[test]
    fn disconnected_is_error() {
        let mut b = TopologyBuilder::new();
        b.add_edge(NodeId(0), NodeId(1), 1.0);
        b.add_edge(NodeId(2), NodeId(3), 1.0);
        let topo = b.build();
        for metric in [PathMetric::Hops, PathMetric::Length] {
            let err = topo.average_shortest_path_length(metric).unwrap_err();
            assert!(matches!(err, TopologyError::Disconnected { .. }), "{err}");
            assert!(err.is_precondition());
        }
        assert!(matches!(
            topo.shortest_path_length(NodeId(0), NodeId(3), PathMetric::Hops),
            Err(TopologyError::Disconnected { from: NodeId(0), to: NodeId(3) })
        ));
    }

    #[test]
    fn too_few_nodes() {
        let topo = crate::generators::ring(1);
        assert!(matches!(
            topo.average_shortest_path_length(PathMetric::Hops),
            Err(TopologyError::TooFewNodes { needed: 2, available: 1 })
        ));
    }

    #[test]
    fn unknown_source() {
        let topo = crate::generators::line(3);
        assert!(matches!(
            topo.single_source_lengths(NodeId(7), PathMetric::Hops),
            Err(TopologyError::NodeNotFound(NodeId(7)))
        ));
    }
}

// ── Sampling ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sampling {
    use std::collections::HashSet;

    use drt_core::SimRng;
    use crate::TopologyError;
    use crate::generators::{ring, star};

    #[test]
    fn samples_are_distinct() {
        let topo = ring(10);
        let mut rng = SimRng::new(1);
        for _ in 0..500 {
            let pick = topo.sample_nodes(4, &mut rng).unwrap();
            let unique: HashSet<_> = pick.iter().collect();
            assert_eq!(unique.len(), 4);
            assert!(pick.iter().all(|&n| topo.contains(n)));
        }
    }

    #[test]
    fn sampling_covers_every_node() {
        let topo = star(5);
        let mut rng = SimRng::new(2);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.extend(topo.sample_nodes(2, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 6, "hub and all leaves should be drawn");
    }

    #[test]
    fn oversampling_fails() {
        let topo = ring(3);
        let mut rng = SimRng::new(3);
        assert!(matches!(
            topo.sample_nodes(4, &mut rng),
            Err(TopologyError::TooFewNodes { needed: 4, available: 3 })
        ));
        assert!(crate::Topology::empty().sample_node(&mut rng).is_err());
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;
    use std::io::Write;

    use drt_core::NodeId;
    use crate::loader::{
        load_coarse_grained_csv, load_coarse_grained_reader, load_edge_list_csv,
        load_edge_list_reader,
    };
    use crate::{PathMetric, TopologyError};

    const EDGES: &str = "\
source,target,length_m\n\
900,17,120.0\n\
17,42,80.5\n\
42,900,99.0\n\
";

    const FAMILY: &str = "\
coarse_graining_m,target_edge_length_m,source,target,length_m\n\
200,400,1,2,400.0\n\
200,400,2,3,410.0\n\
200,600,1,2,600.0\n\
";

    #[test]
    fn remaps_ids_in_first_seen_order() {
        let topo = load_edge_list_reader(Cursor::new(EDGES)).unwrap();
        assert_eq!((topo.node_count(), topo.edge_count()), (3, 3));
        // 900 → 0, 17 → 1, 42 → 2
        assert_eq!(topo.edges[1].a, NodeId(1));
        assert_eq!(topo.edges[1].b, NodeId(2));
        assert_eq!(topo.edges[1].length, 80.5);
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("G_homog.csv");
        std::fs::File::create(&path).unwrap().write_all(EDGES.as_bytes()).unwrap();
        let topo = load_edge_list_csv(&path).unwrap();
        assert_eq!(topo.average_shortest_path_length(PathMetric::Hops).unwrap(), 1.0);
    }

    #[test]
    fn missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere.csv");
        let err = load_edge_list_csv(&path).unwrap_err();
        assert!(matches!(&err, TopologyError::MissingFile { path: p } if *p == path));
        assert!(err.is_configuration());
        assert!(err.to_string().contains("nowhere.csv"));
    }

    #[test]
    fn empty_edge_list_rejected() {
        let err = load_edge_list_reader(Cursor::new("source,target,length_m\n")).unwrap_err();
        assert!(matches!(err, TopologyError::Parse(_)));
    }

    #[test]
    fn malformed_row_rejected() {
        let bad = "source,target,length_m\n1,2,abc\n";
        assert!(matches!(load_edge_list_reader(Cursor::new(bad)), Err(TopologyError::Csv(_))));
        let negative = "source,target,length_m\n1,2,-4.0\n";
        assert!(matches!(load_edge_list_reader(Cursor::new(negative)), Err(TopologyError::Parse(_))));
    }

    #[test]
    fn selects_coarse_grained_variant() {
        let topo = load_coarse_grained_reader(Cursor::new(FAMILY), 200, 400).unwrap();
        assert_eq!((topo.node_count(), topo.edge_count()), (3, 2));
        let other = load_coarse_grained_reader(Cursor::new(FAMILY), 200, 600).unwrap();
        assert_eq!(other.edges[0].length, 600.0);
    }

    #[test]
    fn unknown_coarse_graining_key() {
        let err = load_coarse_grained_reader(Cursor::new(FAMILY), 200, 800).unwrap_err();
        assert!(matches!(
            err,
            TopologyError::UnknownCoarseGraining { coarse_graining_m: 200, target_edge_length_m: 800 }
        ));
        assert!(err.is_configuration());
    }

    #[test]
    fn missing_family_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_coarse_grained_csv(&dir.path().join("all_berlin.csv"), 200, 400).unwrap_err();
        assert!(matches!(err, TopologyError::MissingFile { .. }));
    }
}

// ── TopologySpec ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod provider {
    use std::path::PathBuf;

    use drt_core::TopologyTag;
    use crate::{TopologyError, TopologySpec};

    #[test]
    fn synthetic_specs_build() {
        let spec = TopologySpec::TriGrid { rows: 13, cols: 13 };
        assert_eq!(spec.load().unwrap().node_count(), 105);
        assert_eq!(spec.default_tag(), TopologyTag::TriGrid);
        assert!(!spec.is_file_backed());
        assert_eq!(TopologySpec::Star { leaves: 100 }.load().unwrap().node_count(), 101);
    }

    #[test]
    fn street_network_defaults_to_novolcomp() {
        let spec = TopologySpec::StreetNetwork { path: PathBuf::from("x.csv") };
        assert_eq!(spec.default_tag(), TopologyTag::NoVolComp);
        assert!(spec.is_file_backed());
    }

    #[test]
    fn missing_street_network() {
        let dir = tempfile::tempdir().unwrap();
        let spec = TopologySpec::StreetNetwork { path: dir.path().join("G_homog.csv") };
        assert!(matches!(spec.load(), Err(TopologyError::MissingFile { .. })));
    }

    #[test]
    fn display() {
        assert_eq!(TopologySpec::Grid { rows: 10, cols: 10 }.to_string(), "grid(10x10)");
        assert_eq!(TopologySpec::Ring { nodes: 101 }.to_string(), "ring(101)");
    }
}

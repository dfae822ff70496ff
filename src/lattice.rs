// SPDX-License-Identifier: MIT

//! Powerset-lattice graph construction.
//!
//! Responsibilities:
//! - Parse the comma-separated element list typed by the user.
//! - Enumerate all subsets as bitmasks and derive the covering relation.
//! - Serialize the relation as Graphviz DOT with rank/node spacing attributes.
//!
//! This module is pure: no I/O, no retained state, and byte-identical output
//! for identical input.

use crate::error::{Error, Result};

/// Upper bound on the element count. Subset enumeration is 2^N, so anything
/// beyond a handful of elements produces a diagram Graphviz cannot lay out
/// in reasonable time anyway.
pub const MAX_ELEMENTS: usize = 16;

/// Finished diagram description plus display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    /// Graphviz DOT source for the subset lattice.
    pub dot: String,
    /// Total number of subsets (2^N), shown in the UI.
    pub subset_count: u64,
}

/// Split the raw input line into element labels.
///
/// The split is a raw comma split: labels are neither trimmed nor
/// de-duplicated, so what the user types is exactly what the diagram shows.
/// Whitespace-only input is rejected here, before any enumeration.
pub fn parse_elements(input: &str) -> Result<Vec<String>> {
    if input.trim().is_empty() {
        return Err(Error::InvalidInput(
            "Enter at least one element, e.g. a,b,c".into(),
        ));
    }
    Ok(input.split(',').map(str::to_string).collect())
}

/// Build the Hasse diagram of the powerset lattice over `elements` as DOT.
///
/// Every subset is an integer bitmask in `[0, 2^N)`; for each subset except
/// the full set, one edge is emitted per absent element, from the
/// superset-by-one down to the subset. The `dir=back` hint reverses the
/// drawn arrowhead so Graphviz places the full set at the top.
pub fn build_diagram(elements: &[String], spacing: f64) -> Result<Diagram> {
    if elements.is_empty() {
        return Err(Error::InvalidInput("The element list is empty.".into()));
    }
    if elements.len() > MAX_ELEMENTS {
        return Err(Error::InvalidInput(format!(
            "Too many elements ({}); at most {} are supported.",
            elements.len(),
            MAX_ELEMENTS
        )));
    }
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "Spacing must be a positive number, got {spacing}."
        )));
    }

    let n = elements.len();
    let subset_count = 1u64 << n;

    let mut dot = String::from("digraph{");
    dot.push_str(&format!(
        "graph [ranksep=\"{spacing}\", nodesep=\"{spacing}\"];\n"
    ));

    for mask in 0..subset_count {
        let members: Vec<&str> = elements
            .iter()
            .enumerate()
            .filter(|(j, _)| mask & (1 << j) != 0)
            .map(|(_, label)| label.as_str())
            .collect();

        // The full set has no supersets to link to.
        if members.len() == n {
            continue;
        }

        for label in elements {
            if members.contains(&label.as_str()) {
                continue;
            }
            let mut superset = members.clone();
            superset.push(label);
            dot.push_str(&format!(
                "{} -> {}[dir=back];\n",
                node_label(&superset),
                node_label(&members)
            ));
        }
    }

    dot.push('}');
    Ok(Diagram { dot, subset_count })
}

/// Canonical quoted node label: elements sorted lexicographically, joined
/// with commas, wrapped in set braces. Sorting makes the label independent
/// of the order labels were collected in.
fn node_label(labels: &[&str]) -> String {
    let mut sorted = labels.to_vec();
    sorted.sort_unstable();
    format!("\"{{{}}}\"", sorted.join(","))
}

#[cfg(test)]
mod tests {
    use super::{Diagram, MAX_ELEMENTS, build_diagram, node_label, parse_elements};
    use crate::error::Error;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn edge_lines(diagram: &Diagram) -> Vec<&str> {
        diagram
            .dot
            .lines()
            .filter(|line| line.contains("->"))
            .collect()
    }

    // Raw comma split: no trimming, no de-duplication.
    #[test]
    fn parse_elements_splits_without_trimming() {
        let parsed = parse_elements("a, b,a").unwrap();
        assert_eq!(parsed, vec!["a", " b", "a"]);
    }

    #[test]
    fn parse_elements_rejects_blank_input() {
        assert!(matches!(parse_elements(""), Err(Error::InvalidInput(_))));
        assert!(matches!(parse_elements("   "), Err(Error::InvalidInput(_))));
    }

    // Two elements: the four covering edges from spec'd scenario, with the
    // dir=back hint on every edge.
    #[test]
    fn two_elements_emit_expected_edges() {
        let diagram = build_diagram(&labels(&["a", "b"]), 0.8).unwrap();

        assert_eq!(diagram.subset_count, 4);
        let edges = edge_lines(&diagram);
        assert_eq!(edges.len(), 4);
        assert!(diagram.dot.contains("\"{a}\" -> \"{}\"[dir=back];"));
        assert!(diagram.dot.contains("\"{b}\" -> \"{}\"[dir=back];"));
        assert!(diagram.dot.contains("\"{a,b}\" -> \"{a}\"[dir=back];"));
        assert!(diagram.dot.contains("\"{a,b}\" -> \"{b}\"[dir=back];"));
    }

    #[test]
    fn single_element_emits_one_edge() {
        let diagram = build_diagram(&labels(&["a"]), 0.8).unwrap();

        assert_eq!(diagram.subset_count, 2);
        assert_eq!(edge_lines(&diagram), vec!["\"{a}\" -> \"{}\"[dir=back];"]);
    }

    // Every non-full subset of size k has N-k outgoing edges; summed over
    // all subsets that is N * 2^(N-1).
    #[test]
    fn edge_count_matches_closed_form() {
        for n in 1..=6usize {
            let elements: Vec<String> = (0..n).map(|i| format!("e{i}")).collect();
            let diagram = build_diagram(&elements, 1.0).unwrap();

            let expected = n as u64 * (1 << (n - 1));
            assert_eq!(
                edge_lines(&diagram).len() as u64,
                expected,
                "wrong edge count for n = {n}"
            );
        }
    }

    // The full set only ever appears on the target side of an edge.
    #[test]
    fn full_set_is_never_a_superset_source() {
        let elements = labels(&["a", "b", "c"]);
        let diagram = build_diagram(&elements, 0.8).unwrap();

        let full: Vec<&str> = elements.iter().map(String::as_str).collect();
        let full_label = node_label(&full);
        for edge in edge_lines(&diagram) {
            let source = edge.split(" -> ").next().unwrap();
            assert_ne!(source, full_label);
        }
        assert!(diagram.dot.contains(&format!("-> {full_label}")));
    }

    // Permuting the input only reassigns bit positions; the emitted edge
    // statements are the same multiset.
    #[test]
    fn label_canonicalization_is_order_independent() {
        let forward = build_diagram(&labels(&["a", "b", "c"]), 0.8).unwrap();
        let shuffled = build_diagram(&labels(&["c", "a", "b"]), 0.8).unwrap();

        let mut forward_edges = edge_lines(&forward);
        let mut shuffled_edges = edge_lines(&shuffled);
        forward_edges.sort_unstable();
        shuffled_edges.sort_unstable();
        assert_eq!(forward_edges, shuffled_edges);
    }

    #[test]
    fn identical_input_yields_byte_identical_output() {
        let elements = labels(&["x", "y", "z"]);
        let first = build_diagram(&elements, 0.5).unwrap();
        let second = build_diagram(&elements, 0.5).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn no_subset_links_to_itself() {
        let diagram = build_diagram(&labels(&["a", "b", "c"]), 0.8).unwrap();

        for edge in edge_lines(&diagram) {
            let mut sides = edge.split(" -> ");
            let source = sides.next().unwrap();
            let target = sides.next().unwrap();
            let target = target.trim_end_matches("[dir=back];");
            assert_ne!(source, target, "self-loop in {edge}");
        }
    }

    // Spacing lands verbatim in the graph header, for both attributes.
    #[test]
    fn spacing_is_written_into_header() {
        let diagram = build_diagram(&labels(&["a"]), 1.25).unwrap();

        assert!(diagram.dot.starts_with("digraph{"));
        assert!(diagram.dot.ends_with('}'));
        assert!(
            diagram
                .dot
                .contains("graph [ranksep=\"1.25\", nodesep=\"1.25\"];")
        );
    }

    #[test]
    fn empty_element_slice_is_invalid_input() {
        assert!(matches!(
            build_diagram(&[], 0.8),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn oversized_element_list_is_invalid_input() {
        let elements: Vec<String> = (0..=MAX_ELEMENTS).map(|i| format!("e{i}")).collect();
        assert!(matches!(
            build_diagram(&elements, 0.8),
            Err(Error::InvalidInput(_))
        ));
    }

    // Zero, negative, NaN, and infinite spacing must all fail before any
    // subset enumeration happens.
    #[test]
    fn non_positive_or_non_finite_spacing_is_invalid_input() {
        for spacing in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    build_diagram(&labels(&["a"]), spacing),
                    Err(Error::InvalidInput(_))
                ),
                "spacing {spacing} should be rejected"
            );
        }
    }

    // Duplicate labels occupy distinct bit positions; the builder must not
    // panic on them even though the resulting diagram looks odd.
    #[test]
    fn duplicate_labels_do_not_panic() {
        let diagram = build_diagram(&labels(&["a", "a"]), 0.8).unwrap();
        assert_eq!(diagram.subset_count, 4);
    }
}

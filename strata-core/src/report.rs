//! Report
//!
//! Plain data handed to whatever renders or prints the results. Every list
//! is sorted, so two reports of the same graph compare equal.

use std::fmt::{self, Display};
use std::hash::Hash;

use serde::Serialize;

use crate::pipeline::Analysis;
use crate::scc::ComponentId;

/// A component with its members sorted by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentReport<K> {
    pub id: ComponentId,
    pub members: Vec<K>,
    pub cyclic: bool,
}

/// Structural results of one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<K> {
    /// All nodes, sorted.
    pub nodes: Vec<K>,

    /// All edges, sorted.
    pub edges: Vec<(K, K)>,

    /// Components in discovery order (`C1..Ck`).
    pub components: Vec<ComponentReport<K>>,

    /// Condensation edges, sorted by component id.
    pub condensation_edges: Vec<(ComponentId, ComponentId)>,

    /// One valid topological order of the condensation.
    pub topological_order: Vec<ComponentId>,
}

impl<K> Report<K>
where
    K: Clone + Eq + Hash + Ord,
{
    pub(crate) fn new(analysis: &Analysis<'_, K>) -> Self {
        let graph = analysis.graph();

        let mut nodes: Vec<K> = graph.nodes().cloned().collect();
        nodes.sort();

        let mut edges: Vec<(K, K)> = graph
            .edges()
            .map(|(u, v)| (u.clone(), v.clone()))
            .collect();
        edges.sort();

        let components = analysis
            .partition()
            .components()
            .iter()
            .map(|component| {
                let mut members = analysis.members(component.id());
                members.sort();
                ComponentReport {
                    id: component.id(),
                    members,
                    cyclic: component.is_cyclic(),
                }
            })
            .collect();

        let mut condensation_edges: Vec<_> = analysis.condensation().edges().collect();
        condensation_edges.sort();

        Self {
            nodes,
            edges,
            components,
            condensation_edges,
            topological_order: analysis.order().to_vec(),
        }
    }
}

impl<K> Report<K> {
    /// Sorted members of a component.
    pub fn members(&self, id: ComponentId) -> &[K] {
        &self.components[id.index()].members
    }

    /// Member lists in topological order.
    pub fn ordered_members(&self) -> impl Iterator<Item = &[K]> + '_ {
        self.topological_order.iter().map(|&id| self.members(id))
    }
}

/// Renders `[a, b, c]`.
struct List<'a, K>(&'a [K]);

impl<K: Display> Display for List<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

/// Renders `{a,b,c}`.
struct Set<'a, K>(&'a [K]);

impl<K: Display> Display for Set<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("}")
    }
}

impl<K: Display> Display for Report<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes: {}", List(&self.nodes))?;

        write!(f, "Edges ({}): [", self.edges.len())?;
        for (i, (u, v)) in self.edges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({u}, {v})")?;
        }
        writeln!(f, "]")?;

        writeln!(f)?;
        writeln!(f, "Strongly connected components (SCCs):")?;
        for component in &self.components {
            let marker = if component.cyclic { "" } else { " (acyclic)" };
            writeln!(f, "  {}: {}{marker}", component.id, List(&component.members))?;
        }

        writeln!(f)?;
        writeln!(f, "Meta-graph nodes (component_id -> members):")?;
        for component in &self.components {
            writeln!(f, "  {} -> {}", component.id, List(&component.members))?;
        }

        writeln!(f)?;
        writeln!(f, "Meta-graph edges (between components):")?;
        for &(from, to) in &self.condensation_edges {
            writeln!(
                f,
                "  {} {}  ->  {} {}",
                from,
                List(self.members(from)),
                to,
                List(self.members(to))
            )?;
        }

        writeln!(f)?;
        writeln!(f, "One valid topological order of SCCs:")?;
        f.write_str("  ")?;
        for (i, members) in self.ordered_members().enumerate() {
            if i > 0 {
                f.write_str("  ->  ")?;
            }
            write!(f, "{}", Set(members))?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::DiGraph;
    use crate::options::PipelineOptions;
    use crate::pipeline::analyze;
    use crate::scc::ComponentId;

    fn report_for(edges: &[(u32, u32)]) -> super::Report<u32> {
        let graph = DiGraph::from_edges(edges.iter().copied());
        analyze(&graph, &PipelineOptions::default())
            .unwrap()
            .report()
    }

    #[test]
    fn lists_are_sorted() {
        let report = report_for(&[(3, 1), (1, 2), (2, 3), (3, 0)]);

        assert_eq!(report.nodes, vec![0, 1, 2, 3]);
        assert_eq!(report.edges, vec![(1, 2), (2, 3), (3, 0), (3, 1)]);
        assert_eq!(report.components.len(), 2);
        assert_eq!(report.members(ComponentId::from(1)), &[1, 2, 3]);
        assert_eq!(
            report.condensation_edges,
            vec![(ComponentId::from(1), ComponentId::from(0))]
        );
    }

    #[test]
    fn text_rendering() {
        let report = report_for(&[(1, 2), (2, 1), (2, 3)]);
        let text = report.to_string();

        assert!(text.starts_with("Nodes: [1, 2, 3]\n"));
        assert!(text.contains("Edges (3): [(1, 2), (2, 1), (2, 3)]"));
        assert!(text.contains("  C1: [3] (acyclic)\n"));
        assert!(text.contains("  C2: [1, 2]\n"));
        assert!(text.contains(
            "Meta-graph nodes (component_id -> members):\n  C1 -> [3]\n  C2 -> [1, 2]\n"
        ));
        assert!(text.contains("  C2 [1, 2]  ->  C1 [3]\n"));
        assert!(text.ends_with("  {1,2}  ->  {3}\n"));
    }

    #[test]
    fn json_uses_component_labels() {
        let report = report_for(&[(1, 2)]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["topological_order"], serde_json::json!(["C2", "C1"]));
        assert_eq!(json["components"][0]["id"], "C1");
        assert_eq!(json["components"][0]["members"], serde_json::json!([2]));
        assert_eq!(json["condensation_edges"], serde_json::json!([["C2", "C1"]]));
    }
}

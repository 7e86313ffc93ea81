use crate::domain::model::CrawlReport;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

/// Page link graph, rendered as Graphviz DOT.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    pub edges: BTreeMap<String, BTreeSet<String>>,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph of every downloaded page's outgoing links, with link
    /// targets rewritten to the names their redirects resolved to.
    pub fn from_report(report: &CrawlReport) -> Self {
        let mut graph = Self::new();
        for page in &report.pages {
            for link in &page.outgoing_links {
                graph.add_edge(&page.name, report.resolve(link));
            }
        }
        graph
    }

    pub fn add_edge(&mut self, source: &str, destination: &str) {
        self.edges
            .entry(source.to_string())
            .or_default()
            .insert(destination.to_string());
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    pub fn write_dot<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        writeln!(output, "digraph {{")?;

        for (source, destinations) in &self.edges {
            for destination in destinations {
                writeln!(
                    output,
                    "  \"{}\" -> \"{}\";",
                    escape(source),
                    escape(destination)
                )?;
            }
        }

        writeln!(output, "}}")
    }
}

fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

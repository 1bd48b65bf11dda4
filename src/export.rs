//! Graph export: GEXF for visualization tools, JSON node-link dump for
//! round-tripping and offline queries.
//!
//! Both representations identify nodes by the word tuple rendered as a
//! space-joined string and carry the two node attributes `real_label` and
//! `weight`. Edges are directed (source = more specific, target = more
//! general) and carry no attributes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TaxoError};
use crate::graph::{LabelGraph, LabelNode};
use crate::types::WordTuple;

/// A node in the JSON node-link dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpNode {
    /// Node id: the word tuple joined by single spaces.
    pub id: String,
    /// Whether the tuple equals an observed label's canonical tuple.
    pub real_label: bool,
    /// N-gram production count.
    pub weight: u64,
    /// Original label string, present on real-label nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_label: Option<String>,
}

/// Serializable node-link representation of a [`LabelGraph`].
///
/// Nodes and edges are sorted by id, so equal graphs serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDump {
    /// All nodes, sorted by id.
    pub nodes: Vec<DumpNode>,
    /// Directed edges as (source id, target id) pairs, sorted.
    pub edges: Vec<(String, String)>,
}

impl GraphDump {
    /// Capture a graph into its dump representation.
    pub fn from_graph(graph: &LabelGraph) -> Self {
        let nodes = graph
            .nodes()
            .into_iter()
            .map(|n| DumpNode {
                id: n.tuple.key(),
                real_label: n.real_label,
                weight: n.weight,
                original_label: n.original_label.clone(),
            })
            .collect();
        let mut edges: Vec<(String, String)> = graph
            .edges()
            .into_iter()
            .map(|(src, dst)| (src.tuple.key(), dst.tuple.key()))
            .collect();
        edges.sort();
        Self { nodes, edges }
    }

    /// Rebuild a graph from its dump representation.
    ///
    /// Fails on an empty node id or an edge referencing an unknown node.
    pub fn to_graph(&self) -> Result<LabelGraph> {
        let mut graph = LabelGraph::new();
        for dump_node in &self.nodes {
            let words: Vec<String> = dump_node.id.split(' ').map(|w| w.to_string()).collect();
            let tuple = WordTuple::from_words(words)
                .ok_or_else(|| TaxoError::Graph(format!("empty node id: {:?}", dump_node.id)))?;
            let node = match (&dump_node.original_label, dump_node.real_label) {
                (Some(label), true) => LabelNode::real(tuple, dump_node.weight, label.clone()),
                // Real-label nodes from older dumps may lack the original
                // string; fall back to the id rendering.
                (None, true) => LabelNode::real(tuple, dump_node.weight, dump_node.id.clone()),
                _ => LabelNode::synthetic(tuple, dump_node.weight),
            };
            graph.add_node(node);
        }
        for (src_id, dst_id) in &self.edges {
            let src = lookup(&graph, src_id)?;
            let dst = lookup(&graph, dst_id)?;
            graph.add_edge(src, dst);
        }
        Ok(graph)
    }

    /// Save the dump as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load a dump from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let dump = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(dump)
    }
}

fn lookup(graph: &LabelGraph, id: &str) -> Result<petgraph::stable_graph::NodeIndex> {
    let words: Vec<String> = id.split(' ').map(|w| w.to_string()).collect();
    let tuple = WordTuple::from_words(words)
        .ok_or_else(|| TaxoError::Graph(format!("empty edge endpoint id: {id:?}")))?;
    graph
        .node_index(&tuple)
        .ok_or_else(|| TaxoError::Graph(format!("edge references unknown node {id:?}")))
}

/// Write the graph in GEXF 1.2 with the two node attributes declared.
pub fn write_gexf<W: Write>(graph: &LabelGraph, out: &mut W) -> Result<()> {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<gexf xmlns="http://www.gexf.net/1.2draft" version="1.2">"#
    )?;
    writeln!(out, r#"  <graph defaultedgetype="directed">"#)?;
    writeln!(out, r#"    <attributes class="node">"#)?;
    writeln!(
        out,
        r#"      <attribute id="0" title="real_label" type="boolean"/>"#
    )?;
    writeln!(out, r#"      <attribute id="1" title="weight" type="long"/>"#)?;
    writeln!(out, r#"    </attributes>"#)?;

    writeln!(out, r#"    <nodes>"#)?;
    for node in graph.nodes() {
        let id = xml_escape(&node.tuple.key());
        let label = xml_escape(node.original_label.as_deref().unwrap_or(&node.tuple.key()));
        writeln!(out, r#"      <node id="{id}" label="{label}">"#)?;
        writeln!(out, r#"        <attvalues>"#)?;
        writeln!(
            out,
            r#"          <attvalue for="0" value="{}"/>"#,
            node.real_label
        )?;
        writeln!(out, r#"          <attvalue for="1" value="{}"/>"#, node.weight)?;
        writeln!(out, r#"        </attvalues>"#)?;
        writeln!(out, r#"      </node>"#)?;
    }
    writeln!(out, r#"    </nodes>"#)?;

    writeln!(out, r#"    <edges>"#)?;
    let mut edges: Vec<(String, String)> = graph
        .edges()
        .into_iter()
        .map(|(src, dst)| (src.tuple.key(), dst.tuple.key()))
        .collect();
    edges.sort();
    for (i, (src, dst)) in edges.iter().enumerate() {
        writeln!(
            out,
            r#"      <edge id="{i}" source="{}" target="{}"/>"#,
            xml_escape(src),
            xml_escape(dst)
        )?;
    }
    writeln!(out, r#"    </edges>"#)?;

    writeln!(out, r#"  </graph>"#)?;
    writeln!(out, r#"</gexf>"#)?;
    Ok(())
}

fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

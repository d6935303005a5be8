//! Graphviz DOT rendering of an exported edge list.
//!
//! A thin formatting layer over [`GraphStore::edge_list`]: the engine dumps
//! topology, this module turns it into a `digraph` description. Feeding
//! the text to an actual renderer is up to the caller.
//!
//! [`GraphStore::edge_list`]: graphsocial_graph::store::GraphStore::edge_list

use std::fmt::Write;

use graphsocial_core::UserId;

/// Render an edge list as a Graphviz digraph.
///
/// Every node appears once, followers pointing at the users they follow.
/// Identifiers are quoted so emails and spaces survive verbatim.
#[must_use]
pub fn render(edge_list: &[(UserId, Vec<UserId>)]) -> String {
    let mut out = String::from("digraph {\n");
    for (user, targets) in edge_list {
        let _ = write!(out, "\t\"{user}\"");
        if !targets.is_empty() {
            out.push_str(" -> { ");
            for target in targets {
                let _ = write!(out, "\"{target}\" ");
            }
            out.push('}');
        }
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_isolated_node_without_arrow() {
        let list = vec![(UserId::new("alice"), Vec::new())];
        let dot = render(&list);
        assert_eq!(dot, "digraph {\n\t\"alice\"\n}\n");
    }

    #[test]
    fn renders_edges_in_order() {
        let list = vec![
            (UserId::new("alice"), vec![UserId::new("bob"), UserId::new("carol")]),
            (UserId::new("bob"), Vec::new()),
            (UserId::new("carol"), Vec::new()),
        ];
        let dot = render(&list);
        assert!(dot.contains("\t\"alice\" -> { \"bob\" \"carol\" }\n"));
        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.ends_with("}\n"));
    }
}

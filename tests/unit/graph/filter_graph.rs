use super::*;
use crate::graph::node::{FilterOp, XfadeTransition};

fn fmt(pix: &str) -> FilterOp {
    FilterOp::Format {
        pix_fmt: pix.to_owned(),
    }
}

fn xfade(offset_s: f64) -> FilterOp {
    FilterOp::Xfade {
        transition: XfadeTransition::Dissolve,
        duration_s: 0.8,
        offset_s,
    }
}

fn norm(i: usize) -> FilterNode {
    FilterNode::new(
        format!("norm{i}"),
        NodeRole::Normalize,
        vec![PadRef::source_video(i)],
        vec![fmt("yuva420p")],
        format!("v{i}"),
    )
}

fn two_source_graph() -> FilterGraph {
    let mut g = FilterGraph::new(2);
    g.push(norm(0)).unwrap();
    g.push(norm(1)).unwrap();
    g.push(FilterNode::new(
        "xfade0",
        NodeRole::Transition,
        vec![PadRef::label("v0"), PadRef::label("v1")],
        vec![xfade(2.0)],
        "b0",
    ))
    .unwrap();
    g.push(FilterNode::new(
        "out",
        NodeRole::Output,
        vec![PadRef::label("b0")],
        vec![fmt("yuv420p")],
        "outv",
    ))
    .unwrap();
    g
}

#[test]
fn well_formed_graph_validates_and_serializes() {
    let g = two_source_graph();
    g.validate("outv").unwrap();
    assert_eq!(
        g.to_filter_complex(),
        "[0:v]format=yuva420p[v0];[1:v]format=yuva420p[v1];\
         [v0][v1]xfade=transition=dissolve:duration=0.8:offset=2[b0];\
         [b0]format=yuv420p[outv]"
    );
    assert_eq!(g.nodes_with_role(NodeRole::Transition).count(), 1);
    assert_eq!(g.producer_of("outv").map(|n| n.label.as_str()), Some("out"));
}

#[test]
fn rejects_forward_reference() {
    let mut g = FilterGraph::new(2);
    g.push(norm(0)).unwrap();
    let err = g
        .push(FilterNode::new(
            "xfade0",
            NodeRole::Transition,
            vec![PadRef::label("v0"), PadRef::label("v1")],
            vec![xfade(2.0)],
            "b0",
        ))
        .unwrap_err();
    assert!(matches!(err, ReelError::Graph(_)));
    assert!(err.to_string().contains("undefined link 'v1'"));
    // Failed pushes leave the graph untouched.
    assert_eq!(g.nodes().len(), 1);
    g.push(norm(1)).unwrap();
}

#[test]
fn rejects_duplicate_labels_and_links() {
    let mut g = FilterGraph::new(2);
    g.push(norm(0)).unwrap();
    assert!(g.push(norm(0)).is_err());

    let clash = FilterNode::new(
        "norm1",
        NodeRole::Normalize,
        vec![PadRef::source_video(1)],
        vec![fmt("yuva420p")],
        "v0",
    );
    let err = g.push(clash).unwrap_err();
    assert!(err.to_string().contains("redefines link 'v0'"));
}

#[test]
fn rejects_reconsumed_link() {
    let mut g = FilterGraph::new(1);
    g.push(norm(0)).unwrap();
    g.push(FilterNode::new(
        "a",
        NodeRole::Output,
        vec![PadRef::label("v0")],
        vec![fmt("yuv420p")],
        "outv",
    ))
    .unwrap();
    let err = g
        .push(FilterNode::new(
            "b",
            NodeRole::Output,
            vec![PadRef::label("v0")],
            vec![fmt("yuv420p")],
            "other",
        ))
        .unwrap_err();
    assert!(err.to_string().contains("already consumed"));
}

#[test]
fn rejects_undeclared_input_and_bad_arity() {
    let mut g = FilterGraph::new(1);
    assert!(g.push(norm(1)).is_err());

    g.push(norm(0)).unwrap();
    let err = g
        .push(FilterNode::new(
            "xfade0",
            NodeRole::Transition,
            vec![PadRef::label("v0")],
            vec![xfade(2.0)],
            "b0",
        ))
        .unwrap_err();
    assert!(err.to_string().contains("filter expects 2"));
}

#[test]
fn validate_requires_single_named_sink() {
    let mut g = FilterGraph::new(2);
    g.push(norm(0)).unwrap();
    g.push(norm(1)).unwrap();
    assert!(g.validate("outv").is_err());

    let g = two_source_graph();
    assert!(g.validate("final").is_err());
    assert!(FilterGraph::new(0).validate("outv").is_err());
}

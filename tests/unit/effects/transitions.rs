use super::*;

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("v{i}")).collect()
}

// Graph with `n` pre-defined normalized links so chains can reference them.
fn seeded(n: usize) -> FilterGraph {
    let mut g = FilterGraph::new(n);
    for (i, l) in labels(n).into_iter().enumerate() {
        g.push(FilterNode::new(
            format!("norm{i}"),
            NodeRole::Normalize,
            vec![PadRef::source_video(i)],
            vec![FilterOp::Format {
                pix_fmt: "yuva420p".into(),
            }],
            l,
        ))
        .unwrap();
    }
    g
}

fn build(kind: TransitionKind, mode: FadeOffsetMode, n: usize, d: f64) -> FilterGraph {
    let timeline = Timeline::new(2.0, d).unwrap();
    let sources = labels(n);
    let mut g = seeded(n);
    TransitionStrategy::for_kind(kind, mode)
        .build(
            &ChainParams {
                sources: &sources,
                timeline: &timeline,
                output_pad: "outv",
                output_pix_fmt: "yuv420p",
            },
            &mut g,
        )
        .unwrap();
    g.validate("outv").unwrap();
    g
}

fn chain_statements(g: &FilterGraph) -> Vec<String> {
    g.nodes()
        .iter()
        .filter(|n| n.role != NodeRole::Normalize)
        .map(FilterNode::statement)
        .collect()
}

fn xfade_offsets(g: &FilterGraph) -> Vec<f64> {
    g.nodes_with_role(NodeRole::Transition)
        .map(|n| match n.ops[0] {
            FilterOp::Xfade { offset_s, .. } => offset_s,
            ref other => panic!("unexpected op {other:?}"),
        })
        .collect()
}

#[test]
fn dissolve_chain_for_three_sources() {
    let g = build(TransitionKind::Dissolve, FadeOffsetMode::Accumulate, 3, 0.8);
    assert_eq!(
        chain_statements(&g),
        vec![
            "[v0][v1]xfade=transition=dissolve:duration=0.8:offset=2[b0]",
            "[b0][v2]xfade=transition=dissolve:duration=0.8:offset=4[b1]",
            "[b1]format=yuv420p[outv]",
        ]
    );
}

#[test]
fn slide_and_zoom_use_their_blend_names() {
    let left = build(TransitionKind::SlideLeft, FadeOffsetMode::Accumulate, 2, 0.5);
    assert_eq!(
        chain_statements(&left)[0],
        "[v0][v1]xfade=transition=slideleft:duration=0.5:offset=2[s0]"
    );
    let right = build(TransitionKind::SlideRight, FadeOffsetMode::Accumulate, 2, 0.5);
    assert_eq!(
        chain_statements(&right)[0],
        "[v0][v1]xfade=transition=slideright:duration=0.5:offset=2[s0]"
    );
    let zoom = build(TransitionKind::Zoom, FadeOffsetMode::Accumulate, 4, 1.0);
    assert_eq!(xfade_offsets(&zoom), vec![2.0, 4.0, 6.0]);
    assert_eq!(
        chain_statements(&zoom)[2],
        "[z1][v3]xfade=transition=zoomin:duration=1:offset=6[z2]"
    );
}

#[test]
fn blend_strategies_share_chain_shape() {
    for kind in [
        TransitionKind::Dissolve,
        TransitionKind::SlideLeft,
        TransitionKind::SlideRight,
        TransitionKind::Zoom,
    ] {
        let g = build(kind, FadeOffsetMode::Accumulate, 5, 0.3);
        assert_eq!(g.nodes_with_role(NodeRole::Transition).count(), 4, "{kind:?}");
        assert_eq!(g.nodes_with_role(NodeRole::Entrance).count(), 0, "{kind:?}");
        assert_eq!(g.nodes_with_role(NodeRole::Output).count(), 1, "{kind:?}");
        let offs = xfade_offsets(&g);
        assert_eq!(offs, vec![2.0, 4.0, 6.0, 8.0], "{kind:?}");
    }
}

#[test]
fn fade_accumulates_offsets_by_default() {
    let g = build(TransitionKind::Fade, FadeOffsetMode::Accumulate, 3, 0.8);
    assert_eq!(
        chain_statements(&g),
        vec![
            "[v0]fade=t=in:st=0:d=0.8[f0]",
            "[v1]fade=t=in:st=0:d=0.8[f1]",
            "[v2]fade=t=in:st=0:d=0.8[f2]",
            "[f0][f1]xfade=transition=fade:duration=0.8:offset=2[x0]",
            "[x0][f2]xfade=transition=fade:duration=0.8:offset=4[x1]",
            "[x1]fade=t=out:st=6:d=0.8,format=yuv420p[outv]",
        ]
    );
    assert_eq!(g.nodes_with_role(NodeRole::Entrance).count(), 3);
    assert_eq!(g.nodes_with_role(NodeRole::Transition).count(), 2);
}

#[test]
fn fade_constant_mode_reproduces_legacy_offsets() {
    let g = build(TransitionKind::Fade, FadeOffsetMode::Constant, 4, 1.0);
    assert_eq!(xfade_offsets(&g), vec![2.0, 2.0, 2.0]);
    let last = chain_statements(&g).pop().unwrap();
    assert_eq!(last, "[x2]fade=t=out:st=2:d=1,format=yuv420p[outv]");
}

#[test]
fn single_source_skips_transitions_for_every_kind() {
    for kind in TransitionKind::ALL {
        let g = build(kind, FadeOffsetMode::Accumulate, 1, 0.8);
        assert_eq!(chain_statements(&g), vec!["[v0]format=yuv420p[outv]"], "{kind:?}");
        assert_eq!(g.nodes_with_role(NodeRole::Transition).count(), 0);
    }
}

#[test]
fn empty_source_list_is_rejected() {
    let timeline = Timeline::new(2.0, 0.8).unwrap();
    let mut g = FilterGraph::new(0);
    let err = TransitionStrategy::for_kind(TransitionKind::Dissolve, FadeOffsetMode::Accumulate)
        .build(
            &ChainParams {
                sources: &[],
                timeline: &timeline,
                output_pad: "outv",
                output_pix_fmt: "yuv420p",
            },
            &mut g,
        )
        .unwrap_err();
    assert!(matches!(err, ReelError::InvalidInputCount));
}

#[test]
fn strategy_table_is_exhaustive() {
    assert_eq!(
        TransitionStrategy::for_kind(TransitionKind::Fade, FadeOffsetMode::Constant),
        TransitionStrategy::Fade {
            offsets: FadeOffsetMode::Constant
        }
    );
    assert_eq!(
        TransitionStrategy::for_kind(TransitionKind::parse("unheard-of"), FadeOffsetMode::Accumulate),
        TransitionStrategy::for_kind(TransitionKind::Dissolve, FadeOffsetMode::Accumulate),
    );
}

#[test]
fn stream_duration_follows_the_offset_policy() {
    let t = Timeline::new(2.0, 0.5).unwrap();
    let blend = TransitionStrategy::for_kind(TransitionKind::Zoom, FadeOffsetMode::Constant);
    let fade = TransitionStrategy::for_kind(TransitionKind::Fade, FadeOffsetMode::Accumulate);
    let legacy = TransitionStrategy::for_kind(TransitionKind::Fade, FadeOffsetMode::Constant);
    assert_eq!(blend.stream_duration(&t, 4), 8.5);
    assert_eq!(fade.stream_duration(&t, 4), 8.5);
    assert_eq!(legacy.stream_duration(&t, 4), 4.5);
    assert_eq!(legacy.stream_duration(&t, 1), 2.5);
}

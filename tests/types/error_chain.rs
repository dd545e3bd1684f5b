use stack_signature::{frame, ErrorChain, ErrorFrame};

#[test]
fn caused_by_links_levels_outermost_first() {
    let chain = ErrorChain::new(ErrorFrame::new("A"))
        .caused_by(ErrorFrame::new("B"))
        .caused_by(ErrorFrame::new("C"));

    let types: Vec<&str> = chain
        .primary_levels()
        .map(|frame| frame.type_identity())
        .collect();
    assert_eq!(types, ["A", "B", "C"]);
    assert_eq!(chain.depth(), 3);
    assert_eq!(chain.root().unwrap().type_identity(), "A");
}

#[test]
fn self_referential_cause_terminates_the_walk() {
    let mut chain = ErrorChain::new(ErrorFrame::new("A"));
    chain.set_cause(0, 0);

    assert_eq!(chain.depth(), 1);
    assert_eq!(chain.primary_levels().count(), 1);
}

#[test]
fn cyclic_cause_pair_terminates_the_walk() {
    let mut chain = ErrorChain::new(ErrorFrame::new("A"));
    let b = chain.push(ErrorFrame::new("B"));
    chain.set_cause(0, b);
    chain.set_cause(b, 0);

    let types: Vec<&str> = chain
        .primary_levels()
        .map(|frame| frame.type_identity())
        .collect();
    assert_eq!(types, ["A", "B"]);
}

#[test]
fn dangling_cause_terminates_the_walk() {
    let mut chain = ErrorChain::new(ErrorFrame::new("A")).caused_by(ErrorFrame::new("B"));
    chain.set_cause(1, 99);

    assert_eq!(chain.depth(), 2);
}

#[test]
fn suppressed_entries_stay_off_the_primary_chain() {
    let mut chain = ErrorChain::new(ErrorFrame::new("A")).caused_by(ErrorFrame::new("B"));
    let suppressed = chain.push(ErrorFrame::new("S"));
    chain.add_suppressed(0, suppressed);

    assert_eq!(chain.len(), 3);
    assert_eq!(chain.depth(), 2);
    assert_eq!(chain.root().unwrap().suppressed(), [suppressed]);
}

#[test]
fn frames_keep_throw_site_order() {
    let frame_a = frame!("com.xyz.App", "inner", "App.java", 10);
    let frame_b = frame!("com.xyz.App", "outer", "App.java", 20);
    let error = ErrorFrame::new("A")
        .with_frame(frame_a.clone())
        .with_frame(frame_b.clone());

    assert_eq!(error.call_frames(), [frame_a, frame_b]);
}

#[test]
fn empty_chain_has_no_root() {
    let chain = ErrorChain::default();
    assert!(chain.is_empty());
    assert!(chain.root().is_none());
    assert_eq!(chain.depth(), 0);
}

#[cfg(feature = "serde")]
#[test]
fn chain_round_trips_through_serde() {
    let chain = ErrorChain::new(
        ErrorFrame::new("A")
            .with_message("boom")
            .with_frame(frame!("com.xyz.App", "run", "App.java", 12)),
    )
    .caused_by(ErrorFrame::new("B"));

    let json = serde_json::to_string(&chain).unwrap();
    let decoded: ErrorChain = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, chain);
}

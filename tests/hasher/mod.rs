use stack_signature::{
    frame, hashed_levels, hex_hash, hex_hashes, ErrorChain, ErrorFrame, SignatureError,
};

fn two_level_chain() -> ErrorChain {
    ErrorChain::new(ErrorFrame::new("A").with_frame(frame!("A", "m1", "A.java", 10)))
        .caused_by(ErrorFrame::new("B").with_frame(frame!("B", "m2", "B.java", 20)))
}

fn is_signature(hash: &str) -> bool {
    hash.len() == 8
        && hash
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

#[test]
fn identical_chains_hash_identically() {
    let first = hex_hashes(&two_level_chain()).unwrap();
    let second = hex_hashes(&two_level_chain()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn sequence_is_outermost_first_with_one_hash_per_level() {
    let chain = two_level_chain();
    let hashes = hex_hashes(&chain).unwrap();
    assert_eq!(hashes.len(), chain.depth());

    // The last element is the root cause: hashing the cause level on its
    // own must reproduce it, since the innermost level is seeded with 0.
    let inner_only =
        ErrorChain::new(ErrorFrame::new("B").with_frame(frame!("B", "m2", "B.java", 20)));
    let inner_hash = hex_hash(&inner_only).unwrap();

    let all: Vec<&str> = hashes.iter().collect();
    assert_eq!(all[1], inner_hash);
    assert_ne!(all[0], inner_hash);
}

#[test]
fn synthetic_frames_do_not_change_the_hash() {
    let plain = hex_hashes(&two_level_chain()).unwrap();

    let noisy = ErrorChain::new(
        ErrorFrame::new("A")
            .with_frame(frame!("sun.reflect.NativeMethodAccessorImpl", "invoke0"))
            .with_frame(frame!("A", "m1", "A.java", 10))
            .with_frame(frame!("com.xyz.Generated", "apply", "Generated.java", -7)),
    )
    .caused_by(ErrorFrame::new("B").with_frame(frame!("B", "m2", "B.java", 20)));

    assert_eq!(hex_hashes(&noisy).unwrap(), plain);
}

#[test]
fn file_name_does_not_change_the_hash() {
    let original = hex_hashes(&two_level_chain()).unwrap();

    let moved = ErrorChain::new(ErrorFrame::new("A").with_frame(frame!("A", "m1", "A2.java", 10)))
        .caused_by(ErrorFrame::new("B").with_frame(frame!("B", "m2", "B2.java", 20)));

    assert_eq!(hex_hashes(&moved).unwrap(), original);
}

#[test]
fn line_number_changes_the_outer_hash_only_at_its_level() {
    let original: Vec<String> = hex_hashes(&two_level_chain()).unwrap().into_iter().collect();

    let shifted = ErrorChain::new(ErrorFrame::new("A").with_frame(frame!("A", "m1", "A.java", 11)))
        .caused_by(ErrorFrame::new("B").with_frame(frame!("B", "m2", "B.java", 20)));
    let shifted: Vec<String> = hex_hashes(&shifted).unwrap().into_iter().collect();

    assert_ne!(shifted[0], original[0]);
    assert_eq!(shifted[1], original[1]);
}

#[test]
fn differing_causes_change_the_outer_hash() {
    let with_b = hex_hash(&two_level_chain()).unwrap();

    let with_c = ErrorChain::new(ErrorFrame::new("A").with_frame(frame!("A", "m1", "A.java", 10)))
        .caused_by(ErrorFrame::new("C").with_frame(frame!("B", "m2", "B.java", 20)));

    assert_ne!(hex_hash(&with_c).unwrap(), with_b);
}

#[test]
fn no_cause_empty_stack_reduces_to_the_type_identity_fold() {
    // stable_hash("A") == 65 == 0x41, seeded with 0 and folded once.
    let chain = ErrorChain::new(ErrorFrame::new("A"));
    assert_eq!(hex_hash(&chain).unwrap(), "00000041");
}

#[test]
fn fully_skipped_stack_hashes_like_an_empty_one() {
    let skipped = ErrorChain::new(
        ErrorFrame::new("A").with_frame(frame!("java.lang.reflect.Method", "invoke")),
    );
    assert_eq!(hex_hash(&skipped).unwrap(), "00000041");
}

#[test]
fn self_referential_cause_hashes_like_no_cause() {
    let mut cyclic = ErrorChain::new(ErrorFrame::new("A").with_frame(frame!("A", "m1", "A.java", 10)));
    cyclic.set_cause(0, 0);

    let acyclic = ErrorChain::new(ErrorFrame::new("A").with_frame(frame!("A", "m1", "A.java", 10)));

    let hashes = hex_hashes(&cyclic).unwrap();
    assert_eq!(hashes.len(), 1);
    assert_eq!(hashes.peek().unwrap(), hex_hash(&acyclic).unwrap());
}

#[test]
fn every_hash_matches_the_signature_format() {
    let deep = ErrorChain::new(
        ErrorFrame::new("com.xyz.VeryLongExceptionNameThatWrapsTheAccumulator")
            .with_frame(frame!("com.xyz.App", "run", "App.java", 2147483000)),
    )
    .caused_by(ErrorFrame::new("B"))
    .caused_by(ErrorFrame::new("C"));

    for hash in hex_hashes(&deep).unwrap().iter() {
        assert!(is_signature(hash), "bad signature: {hash:?}");
    }
}

#[test]
fn empty_chain_fails_fast() {
    let err = hex_hashes(&ErrorChain::default()).unwrap_err();
    assert_eq!(err, SignatureError::EmptyChain);
    assert_eq!(err.to_string(), "cannot hash an empty error chain");

    assert!(hex_hash(&ErrorChain::default()).is_err());
    assert!(hashed_levels(&ErrorChain::default()).is_err());
}

#[test]
fn hashed_levels_pairs_frames_with_the_sequence() {
    let chain = two_level_chain();
    let sequence: Vec<String> = hex_hashes(&chain).unwrap().into_iter().collect();

    let pairs: Vec<(String, String)> = hashed_levels(&chain)
        .unwrap()
        .map(|(frame, hash)| (frame.type_identity().to_string(), hash))
        .collect();

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0, "A");
    assert_eq!(pairs[1].0, "B");
    assert_eq!(pairs[0].1, sequence[0]);
    assert_eq!(pairs[1].1, sequence[1]);
}

// The scenario from the renderer's reference behavior: two levels, stable
// strings on re-construction, file renames invisible, line moves visible
// only at their own level.
#[test]
fn reference_scenario_end_to_end() {
    let first: Vec<String> = hex_hashes(&two_level_chain()).unwrap().into_iter().collect();
    let second: Vec<String> = hex_hashes(&two_level_chain()).unwrap().into_iter().collect();
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);

    let renamed = ErrorChain::new(ErrorFrame::new("A").with_frame(frame!("A", "m1", "A2.java", 10)))
        .caused_by(ErrorFrame::new("B").with_frame(frame!("B", "m2", "B.java", 20)));
    let renamed: Vec<String> = hex_hashes(&renamed).unwrap().into_iter().collect();
    assert_eq!(renamed, first);

    let moved = ErrorChain::new(ErrorFrame::new("A").with_frame(frame!("A", "m1", "A.java", 11)))
        .caused_by(ErrorFrame::new("B").with_frame(frame!("B", "m2", "B.java", 20)));
    let moved: Vec<String> = hex_hashes(&moved).unwrap().into_iter().collect();
    assert_ne!(moved[0], first[0]);
    assert_eq!(moved[1], first[1]);
}

use stack_signature::{hex_hashes, ErrorChain, ErrorFrame};

fn three_level_chain() -> ErrorChain {
    ErrorChain::new(ErrorFrame::new("A"))
        .caused_by(ErrorFrame::new("B"))
        .caused_by(ErrorFrame::new("C"))
}

#[test]
fn pop_consumes_from_the_outermost_end() {
    let mut hashes = hex_hashes(&three_level_chain()).unwrap();
    let front = hashes.peek().unwrap().to_string();

    assert_eq!(hashes.pop().unwrap(), front);
    assert_eq!(hashes.len(), 2);
}

#[test]
fn peek_and_iter_do_not_consume() {
    let hashes = hex_hashes(&three_level_chain()).unwrap();

    let collected: Vec<&str> = hashes.iter().collect();
    assert_eq!(collected.len(), 3);
    assert_eq!(hashes.peek(), Some(collected[0]));
    assert_eq!(hashes.len(), 3);
}

#[test]
fn pop_past_the_end_yields_none() {
    let mut hashes = hex_hashes(&three_level_chain()).unwrap();
    for _ in 0..3 {
        assert!(hashes.pop().is_some());
    }
    assert!(hashes.is_empty());
    assert_eq!(hashes.pop(), None);
    assert_eq!(hashes.pop(), None);
}

#[test]
fn into_iter_preserves_order() {
    let hashes = hex_hashes(&three_level_chain()).unwrap();
    let borrowed: Vec<String> = hashes.iter().map(str::to_string).collect();
    let owned: Vec<String> = hashes.into_iter().collect();

    assert_eq!(owned, borrowed);
}

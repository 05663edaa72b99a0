use photo_carousel::sequence::{CyclicIndexSequence, Direction};

#[test]
fn forward_wraps_from_last_to_first() {
    let mut seq = CyclicIndexSequence::forward(4, 0..5);
    assert_eq!(seq.next(), Some(4));
    assert_eq!(seq.next(), Some(0));
    assert_eq!(seq.next(), Some(1));
}

#[test]
fn backward_wraps_from_first_to_last() {
    let mut seq = CyclicIndexSequence::backward(0, 0..5);
    assert_eq!(seq.next(), Some(0));
    assert_eq!(seq.next(), Some(4));
    assert_eq!(seq.next(), Some(3));
}

#[test]
fn forward_cycles_through_every_index() {
    let seq = CyclicIndexSequence::forward(2, 0..4);
    assert_eq!(seq.take(9).collect::<Vec<_>>(), vec![2, 3, 0, 1, 2, 3, 0, 1, 2]);
}

#[test]
fn single_element_range_repeats() {
    let fwd = CyclicIndexSequence::forward(0, 0..1);
    let bwd = CyclicIndexSequence::backward(0, 0..1);
    assert!(fwd.take(5).all(|i| i == 0));
    assert!(bwd.take(5).all(|i| i == 0));
}

#[test]
fn zero_always_yields_zero() {
    let mut seq = CyclicIndexSequence::zero();
    for _ in 0..10 {
        assert_eq!(seq.next(), Some(0));
    }
    assert_eq!(seq.direction(), Direction::Forward);
}

#[test]
fn clone_advances_independently() {
    let mut original = CyclicIndexSequence::forward(3, 0..10);
    assert_eq!(original.next(), Some(3));

    let mut snapshot = original.clone();
    for _ in 0..7 {
        snapshot.next();
    }
    assert_eq!(snapshot.peek(), 1);
    assert_eq!(original.next(), Some(4));
}

#[test]
fn lookahead_does_not_advance() {
    let seq = CyclicIndexSequence::backward(1, 0..3);
    assert_eq!(seq.lookahead(2), Some(0));
    assert_eq!(seq.lookahead(3), Some(2));
    assert_eq!(seq.peek(), 1);
}

#[test]
fn never_exhausts() {
    let seq = CyclicIndexSequence::forward(0, 0..2);
    assert_eq!(seq.size_hint(), (usize::MAX, None));
    assert_eq!(seq.skip(10_000).next(), Some(0));
}

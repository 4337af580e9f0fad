// Integration tests for the trace loader

use memheat::state::MemoryState;
use memheat::trace::{AccessKind, TraceError, TraceLoader};

#[test]
fn test_feed_updates_state_and_counts() {
    let trace = r#"
# synthetic trace
==1234== lackey chatter
I  0x0023c790,2
 L 0x1000,4
 S 0x2000,8
 M 0x3000,4
"#;

    let mut state = MemoryState::new(4);
    let mut loader = TraceLoader::new();
    let fed = loader
        .feed(trace.as_bytes(), &mut state)
        .expect("Feed failed");

    assert_eq!(fed, 4);
    assert_eq!(loader.records(), 4);
    assert_eq!(loader.skipped(), 3, "blank, comment, and chatter lines");
    assert_eq!(loader.count(AccessKind::Instruction), 1);
    assert_eq!(loader.count(AccessKind::Load), 1);
    assert_eq!(loader.count(AccessKind::Store), 1);
    assert_eq!(loader.count(AccessKind::Modify), 1);

    // per-record time stamps, in file order
    assert_eq!(state.read_address(0x23c790), (1, b'I'));
    assert_eq!(state.read_address(0x1000), (2, b'L'));
    assert_eq!(state.read_address(0x2000), (3, b'W'), "store uses write tag");
    assert_eq!(state.read_address(0x3000), (4, b'W'), "modify uses write tag");
    assert_eq!(state.hr_time(), 4);
}

#[test]
fn test_wide_record_marks_multiple_slots() {
    let mut state = MemoryState::new(4);
    let mut loader = TraceLoader::new();
    loader
        .feed(" S 0x100,32\n".as_bytes(), &mut state)
        .expect("Feed failed");

    assert_eq!(state.read_address(0x100), (1, b'W'));
    assert_eq!(state.read_address(0x110), (1, b'W'));
    assert_eq!(state.time(), 1, "one record, one tick");
}

#[test]
fn test_malformed_line_reports_line_number() {
    let trace = "I 0x1000,4\n L 0x2000,4\nnot a record\n";
    let mut state = MemoryState::new(4);
    let mut loader = TraceLoader::new();

    match loader.feed(trace.as_bytes(), &mut state) {
        Err(TraceError::MalformedRecord { line: 3, .. }) => {}
        other => panic!("Expected MalformedRecord at line 3, got {:?}", other),
    }
    // records before the bad line were applied
    assert_eq!(loader.records(), 2);
    assert_eq!(state.time(), 2);
}

#[test]
fn test_unknown_kind_is_an_error() {
    let mut state = MemoryState::new(4);
    let mut loader = TraceLoader::new();
    match loader.feed("Z 0x1000,4\n".as_bytes(), &mut state) {
        Err(TraceError::UnknownKind { line: 1, symbol: 'Z' }) => {}
        other => panic!("Expected UnknownKind, got {:?}", other),
    }
}

#[test]
fn test_feed_accumulates_across_calls() {
    let mut state = MemoryState::new(4);
    let mut loader = TraceLoader::new();
    loader
        .feed(" L 0x1000,4\n".as_bytes(), &mut state)
        .expect("First feed failed");
    let fed = loader
        .feed(" S 0x1000,4\n".as_bytes(), &mut state)
        .expect("Second feed failed");

    assert_eq!(fed, 2, "Feed reports the running total");
    // the second access re-stamps the same slot
    assert_eq!(state.read_address(0x1000), (2, b'W'));
}

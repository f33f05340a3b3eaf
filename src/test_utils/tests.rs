use super::*;
use crate::buffer::line_text;

#[test]
fn test_fixture_lines_round_trip() {
    let buffer = FixtureBuffer::new(&["alpha", "", "gamma"]);
    assert_eq!(buffer.line_count(), 3);
    assert_eq!(line_text(&buffer, 0), "alpha");
    assert_eq!(line_text(&buffer, 1), "");
    assert_eq!(line_text(&buffer, 2), "gamma");
}

#[test]
fn test_repeated_fixture() {
    let buffer = FixtureBuffer::repeated("lorem ipsum", 40);
    assert_eq!(buffer.line_count(), 40);
    assert_eq!(line_text(&buffer, 39), "lorem ipsum");
}

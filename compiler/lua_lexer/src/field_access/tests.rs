use super::*;

// === Preceding dot ===

#[test]
fn name_after_dot() {
    assert!(follows_single_dot(b"a.b", 2));
    assert!(follows_single_dot(b"a .  b", 5));
}

#[test]
fn name_at_start_of_input() {
    assert!(!follows_single_dot(b"b", 0));
    assert!(!follows_single_dot(b"   b", 3));
}

#[test]
fn dot_at_start_of_input() {
    assert!(follows_single_dot(b".b", 1));
}

#[test]
fn concat_and_varargs_do_not_count() {
    assert!(!follows_single_dot(b"a..b", 3));
    assert!(!follows_single_dot(b"a.. b", 4));
    assert!(!follows_single_dot(b"...b", 3));
}

#[test]
fn only_spaces_are_skipped() {
    assert!(!follows_single_dot(b"a.\tb", 3));
    assert!(!follows_single_dot(b"a.\nb", 3));
}

#[test]
fn other_byte_before_name() {
    assert!(!follows_single_dot(b"a = b", 4));
    assert!(!follows_single_dot(b"(b", 1));
}

// === Trailing dot ===

#[test]
fn absorbs_adjacent_dot() {
    assert_eq!(absorb_trailing_dot(b"a.b", 1), Some(2));
}

#[test]
fn absorbs_spaces_around_dot() {
    assert_eq!(absorb_trailing_dot(b"a . b", 1), Some(4));
    assert_eq!(absorb_trailing_dot(b"a  .   b", 1), Some(7));
}

#[test]
fn dot_at_end_of_input() {
    assert_eq!(absorb_trailing_dot(b"a.", 1), Some(2));
    assert_eq!(absorb_trailing_dot(b"a. ", 1), Some(3));
}

#[test]
fn concat_is_left_alone() {
    assert_eq!(absorb_trailing_dot(b"a..b", 1), None);
    assert_eq!(absorb_trailing_dot(b"a ..b", 1), None);
    assert_eq!(absorb_trailing_dot(b"a...", 1), None);
}

#[test]
fn backs_off_before_following_dot() {
    // `a. .b`: the dot is absorbed, the space before the second dot is not.
    assert_eq!(absorb_trailing_dot(b"a. .b", 1), Some(2));
    assert_eq!(absorb_trailing_dot(b"a .  ..b", 1), Some(4));
}

#[test]
fn nothing_to_absorb() {
    assert_eq!(absorb_trailing_dot(b"a", 1), None);
    assert_eq!(absorb_trailing_dot(b"a   ", 1), None);
    assert_eq!(absorb_trailing_dot(b"a = b", 1), None);
    assert_eq!(absorb_trailing_dot(b"a\t.b", 1), None);
}

// === Spelling ===

#[test]
fn bracketed_spelling() {
    assert_eq!(bracketed("field"), "[field]");
    assert_eq!(bracketed("end"), "[end]");
}

mod common;

use common::run_ok;

#[test]
fn a_line_comment_at_eof_is_ignored() {
    run_ok("print \"ok\"; // trailing comment, no newline after", &["ok"]);
}

#[test]
fn a_file_containing_only_a_comment_produces_no_output() {
    run_ok("// just a comment", &[]);
}

#[test]
fn a_comment_does_not_swallow_the_following_line() {
    run_ok("// comment\nprint \"ok\";", &["ok"]);
}

#[test]
fn a_comment_may_contain_non_ascii_text() {
    run_ok("// こんにちは\nprint \"ok\";", &["ok"]);
}

#[test]
fn slash_not_followed_by_slash_is_division() {
    run_ok("print 10 / 2; // not a comment opener\n", &["5"]);
}

mod common;

use common::{run_err, run_ok};

#[test]
fn an_empty_file_runs_cleanly_and_produces_no_output() {
    run_ok("", &[]);
}

#[test]
fn a_whitespace_only_file_runs_cleanly() {
    run_ok("   \n\t\n  ", &[]);
}

#[test]
fn operator_precedence_matches_arithmetic_convention() {
    run_ok(
        r#"
        print 2 + 3 * 4;
        print (2 + 3) * 4;
        print 2 * 3 - 2;
        print 2 - 3 * 2 + 4;
        print 1 < 2 == 3 < 4;
        print 2 + 2 == 4;
        "#,
        &["14", "20", "4", "0", "true", "true"],
    );
}

#[test]
fn an_unrecognized_character_is_a_scan_time_error() {
    run_err("print 1;\nprint 2;\n| \n", "Unexpected character '|'");
}

mod common;

use common::{run_err, run_ok};

#[test]
fn addition_works_on_numbers_and_strings_separately() {
    run_ok(
        r#"
        print 123 + 456;
        print "str" + "ing";
        "#,
        &["579", "string"],
    );
}

#[test]
fn addition_across_mismatched_types_is_a_runtime_error() {
    run_err("print 1 + \"1\";", "Operands must be two numbers or two strings");
    run_err("print \"1\" + 1;", "Operands must be two numbers or two strings");
    run_err("print true + 1;", "Operands must be two numbers or two strings");
    run_err("print nil + nil;", "Operands must be two numbers or two strings");
}

#[test]
fn subtraction_requires_two_numbers() {
    run_ok("print 4 - 3;", &["1"]);
    run_err("print 1 - \"1\";", "Operands must be numbers");
}

#[test]
fn multiplication_requires_two_numbers() {
    run_ok("print 5 * 3;", &["15"]);
    run_err("print true * 2;", "Operands must be numbers");
}

#[test]
fn division_requires_two_numbers() {
    run_ok("print 8 / 2;", &["4"]);
    run_err("print \"8\" / 2;", "Operands must be numbers");
}

#[test]
fn comparisons_require_two_numbers() {
    run_ok(
        r#"
        print 1 < 2;
        print 2 < 2;
        print 2 <= 2;
        print 3 > 2;
        print 2 >= 2;
        "#,
        &["true", "false", "true", "true", "true"],
    );
    run_err("print 1 < \"1\";", "Operands must be numbers");
    run_err("print true > 1;", "Operands must be numbers");
}

#[test]
fn negation_requires_a_number() {
    run_ok("print -(3);", &["-3"]);
    run_err("print -\"s\";", "Operand must be a number");
    run_err("print -nil;", "Operand must be a number");
    run_err("print -true;", "Operand must be a number");
}

#[test]
fn double_negation_restores_the_original_number() {
    run_ok("print -(-3);", &["3"]);
}

#[test]
fn not_negates_truthiness_for_any_type() {
    run_ok(
        r#"
        print !true;
        print !false;
        print !nil;
        print !123;
        "#,
        &["false", "true", "true", "false"],
    );
}

#[test]
fn equality_never_errors_even_across_mismatched_types() {
    run_ok(
        r#"
        print 1 == 1;
        print 1 == 2;
        print 1 == "1";
        print nil == nil;
        print nil == false;
        "#,
        &["true", "false", "false", "true", "false"],
    );
}

#[test]
fn not_equal_is_the_logical_negation_of_equal() {
    run_ok(
        r#"
        print 1 != 1;
        print 1 != 2;
        print "a" != "b";
        "#,
        &["false", "true", "true"],
    );
}

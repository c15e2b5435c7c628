mod common;

use common::{run_err, run_ok};

#[test]
fn a_leading_dot_is_not_a_valid_number_start() {
    run_err(".123;", "Expected expression");
}

#[test]
fn a_trailing_dot_is_not_consumed_as_part_of_the_number() {
    run_err("123.;", "Expect ';' after expression");
}

#[test]
fn integer_and_decimal_literals_print_without_a_trailing_decimal_point_when_whole() {
    run_ok(
        r#"
        print 123;
        print 987654;
        print 0;
        print -0;
        print 123.456;
        print -0.001;
        "#,
        &["123", "987654", "0", "0", "123.456", "-0.001"],
    );
}

#[test]
fn nan_compares_unequal_to_itself_and_everything_else() {
    run_ok(
        r#"
        var nan = 0/0;
        print nan == nan;
        print nan != nan;
        print nan == 1;
        print nan != 1;
        "#,
        &["false", "true", "false", "true"],
    );
}

#[test]
fn division_by_a_nonzero_number_behaves_normally() {
    run_ok("print 10 / 4;", &["2.5"]);
}

mod common;

use common::run_err;

#[test]
fn calling_a_bool_is_a_runtime_error() {
    run_err("true();", "Can only call functions and classes");
}

#[test]
fn calling_nil_is_a_runtime_error() {
    run_err("nil();", "Can only call functions and classes");
}

#[test]
fn calling_a_number_is_a_runtime_error() {
    run_err("123();", "Can only call functions and classes");
}

#[test]
fn calling_a_string_is_a_runtime_error() {
    run_err(r#""str"();"#, "Can only call functions and classes");
}

#[test]
fn calling_an_instance_is_a_runtime_error() {
    run_err("class Foo {} var foo = Foo(); foo();", "Can only call functions and classes");
}

mod common;

use common::{run_err, run_ok};

#[test]
fn return_inside_the_then_branch_exits_the_function_immediately() {
    run_ok(
        r#"
        fun f() {
            if (true) return "ok";
            return "unreachable";
        }
        print f();
        "#,
        &["ok"],
    );
}

#[test]
fn return_inside_the_else_branch_exits_the_function_immediately() {
    run_ok(
        r#"
        fun f() {
            if (false) return "unreachable";
            else return "ok";
        }
        print f();
        "#,
        &["ok"],
    );
}

#[test]
fn return_inside_a_while_loop_exits_the_function_immediately() {
    run_ok(
        r#"
        fun f() {
            while (true) {
                return "ok";
            }
            return "unreachable";
        }
        print f();
        "#,
        &["ok"],
    );
}

#[test]
fn a_return_statement_at_the_top_level_is_a_static_error() {
    run_err("return;", "Can't return from top-level code");
}

#[test]
fn return_with_no_value_implicitly_returns_nil() {
    run_ok(
        r#"
        fun f() { return; }
        print f();
        "#,
        &["nil"],
    );
}

#[test]
fn return_works_identically_inside_a_method() {
    run_ok(
        r#"
        class Foo {
            bar() { return "ok"; }
        }
        print Foo().bar();
        "#,
        &["ok"],
    );
}

mod common;

use common::{run_err, run_ok};

#[test]
fn a_class_declaration_is_not_allowed_directly_as_a_while_body() {
    run_err("while (true) class Foo {}", "Expected expression");
}

#[test]
fn a_fun_declaration_is_not_allowed_directly_as_a_while_body() {
    run_err("while (false) fun f() {}", "Expected expression");
}

#[test]
fn a_var_declaration_is_not_allowed_directly_as_a_while_body() {
    run_err("while (false) var x = 1;", "Expected expression");
}

#[test]
fn a_closure_created_each_iteration_captures_its_own_copy_of_the_counter() {
    run_ok(
        r#"
        var i = 1;
        while (i < 4) {
            var local = i;
            fun show() { print local; }
            show();
            i = i + 1;
        }
        "#,
        &["1", "2", "3"],
    );
}

#[test]
fn a_while_loop_runs_while_the_condition_is_truthy() {
    run_ok(
        r#"
        var i = 1;
        while (i < 4) {
            print i;
            i = i + 1;
        }
        "#,
        &["1", "2", "3"],
    );
}

#[test]
fn a_false_condition_never_runs_the_body() {
    run_ok("while (false) print \"unreachable\"; print \"ok\";", &["ok"]);
}

#[test]
fn return_inside_a_while_body_exits_the_enclosing_function() {
    run_ok(
        r#"
        fun f() {
            var i = 0;
            while (true) {
                i = i + 1;
                if (i == 3) return i;
            }
        }
        print f();
        "#,
        &["3"],
    );
}

#[test]
fn a_closure_created_in_a_while_body_can_be_returned_from_the_function() {
    run_ok(
        r#"
        fun makeAdder() {
            var i = 0;
            while (i < 1) {
                fun add(x) { return x + 10; }
                i = i + 1;
                return add;
            }
        }
        print makeAdder()(5);
        "#,
        &["15"],
    );
}

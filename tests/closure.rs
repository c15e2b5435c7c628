mod common;

use common::run_ok;

#[test]
fn closure_over_a_mutated_loop_variable_sees_the_post_loop_value() {
    run_ok(
        r#"
        fun makeCounter() {
            var i = 0;
            fun count() {
                i = i + 1;
                print i;
            }
            return count;
        }
        var counter = makeCounter();
        counter();
        counter();
        "#,
        &["1", "2"],
    );
}

#[test]
fn functions_are_lexically_not_dynamically_scoped() {
    run_ok(
        r#"
        var a = "global";
        {
            fun showA() { print a; }
            showA();
            var a = "block";
            showA();
        }
        "#,
        &["global", "global"],
    );
}

#[test]
fn assigning_through_a_closure_mutates_the_captured_binding() {
    run_ok(
        r#"
        fun outer() {
            var x = "before";
            fun inner() { x = "after"; }
            inner();
            print x;
        }
        outer();
        "#,
        &["after"],
    );
}

#[test]
fn two_closures_over_the_same_variable_observe_each_others_writes() {
    run_ok(
        r#"
        fun pair() {
            var count = 0;
            fun inc() { count = count + 1; return count; }
            fun get() { return count; }
            print inc();
            print inc();
            print get();
        }
        pair();
        "#,
        &["1", "2", "2"],
    );
}

#[test]
fn a_closure_captures_a_function_parameter() {
    run_ok(
        r#"
        fun wrap(param) {
            fun show() { print param; }
            return show;
        }
        wrap("param")();
        "#,
        &["param"],
    );
}

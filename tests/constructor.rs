mod common;

use common::{run_err, run_ok};

#[test]
fn init_receives_call_arguments() {
    run_ok(
        r#"
        class Point {
            init(x, y) { this.x = x; this.y = y; }
        }
        var p = Point(1, 2);
        print p.x;
        print p.y;
        "#,
        &["1", "2"],
    );
}

#[test]
fn a_class_with_no_init_has_arity_zero_and_returns_a_fresh_instance() {
    run_ok("class Foo {} print Foo();", &["<instance Foo>"]);
}

#[test]
fn init_always_returns_the_instance_even_with_a_bare_early_return() {
    run_ok(
        r#"
        class Foo {
            init() {
                if (true) return;
                this.unreachable = true;
            }
        }
        print Foo();
        "#,
        &["<instance Foo>"],
    );
}

#[test]
fn calling_init_directly_on_an_instance_reruns_it() {
    run_ok(
        r#"
        class Foo {
            init() { print "init"; }
        }
        var foo = Foo();
        foo.init();
        "#,
        &["init", "init"],
    );
}

#[test]
fn wrong_arity_to_init_is_a_runtime_error() {
    run_err(
        r#"
        class Foo { init(a, b) { this.a = a; this.b = b; } }
        Foo(1);
        "#,
        "Expected 2 arguments but got 1",
    );
}

#[test]
fn extra_arguments_to_init_is_a_runtime_error() {
    run_err(
        r#"
        class Foo { init(a, b) { this.a = a; this.b = b; } }
        Foo(1, 2, 3, 4);
        "#,
        "Expected 2 arguments but got 4",
    );
}

#[test]
fn returning_a_value_from_init_is_a_static_error() {
    run_err(
        r#"
        class Foo {
            init() { return "not an instance"; }
        }
        "#,
        "Can't return a value from an initializer",
    );
}

#[test]
fn a_method_named_init_on_an_instance_is_not_treated_as_a_constructor() {
    run_ok(
        r#"
        class Foo {
            init() { print "not initializer"; }
        }
        var foo = Foo();
        class Bar {}
        var bar = Bar();
        print bar;
        "#,
        &["not initializer", "<instance Bar>"],
    );
}

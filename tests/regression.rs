mod common;

use common::run_ok;

#[test]
fn a_subclass_method_body_can_reference_the_subclass_by_name() {
    run_ok(
        r#"
        class A {}
        class B < A {
            method() { return B; }
        }
        print B().method();
        "#,
        &["<class B>"],
    );
}

#[test]
fn a_function_declared_in_a_block_is_usable_immediately_after_its_declaration() {
    run_ok(
        r#"
        {
            fun f() {}
            print f;
        }
        "#,
        &["<fn f>"],
    );
}

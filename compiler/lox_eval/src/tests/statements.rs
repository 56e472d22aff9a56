use pretty_assertions::assert_eq;

use super::{eval_ok, run};

#[test]
fn print_emits_one_line_per_statement() {
    assert_eq!(eval_ok("print 1; print \"two\"; print nil;"), "1\ntwo\nnil\n");
}

#[test]
fn block_scoping_shadows_and_restores() {
    let source = r#"
        var a = "global";
        {
            var a = "local";
            print a;
        }
        print a;
    "#;
    assert_eq!(eval_ok(source), "local\nglobal\n");
}

#[test]
fn assignment_in_block_reaches_outer_binding() {
    assert_eq!(eval_ok("var a = 1; { a = 2; } print a;"), "2\n");
}

#[test]
fn nested_blocks_see_enclosing_bindings() {
    let source = r#"
        var a = "a";
        {
            var b = "b";
            {
                var c = "c";
                print a + b + c;
            }
        }
    "#;
    assert_eq!(eval_ok(source), "abc\n");
}

#[test]
fn if_else_branches() {
    assert_eq!(
        eval_ok("if (true) print 1; else print 2; if (nil) print 3; else print 4; if (false) print 5;"),
        "1\n4\n"
    );
}

#[test]
fn while_reevaluates_condition() {
    assert_eq!(
        eval_ok("var i = 0; while (i < 3) { print i; i = i + 1; }"),
        "0\n1\n2\n"
    );
}

#[test]
fn for_loop_runs_like_its_while_form() {
    let with_for = eval_ok("for (var i = 0; i < 3; i = i + 1) print i;");
    let with_while = eval_ok("{ var i = 0; while (i < 3) { print i; i = i + 1; } }");
    assert_eq!(with_for, with_while);
    assert_eq!(with_for, "0\n1\n2\n");
}

#[test]
fn for_initializer_is_scoped_to_the_loop() {
    let run = run("for (var i = 0; i < 1; i = i + 1) {} print i;");
    assert_eq!(run.output, "");
    assert_eq!(
        run.error.map(|e| e.message()),
        Some("Undefined variable 'i'.".to_owned())
    );
}

#[test]
fn for_with_omitted_clauses() {
    let source = r#"
        fun firstOver(limit) {
            var i = 0;
            for (;;) {
                if (i > limit) return i;
                i = i + 1;
            }
        }
        print firstOver(3);
    "#;
    assert_eq!(eval_ok(source), "4\n");
}

#[test]
fn var_without_initializer_must_be_assigned_before_use() {
    assert_eq!(eval_ok("var a; a = 3; print a;"), "3\n");
}

#[test]
fn explicit_nil_is_readable() {
    assert_eq!(eval_ok("var a = nil; print a;"), "nil\n");
}

#[test]
fn redeclaring_a_global_overwrites_it() {
    assert_eq!(eval_ok("var a = 1; var a = 2; print a;"), "2\n");
}

#[test]
fn top_level_return_ends_the_program() {
    assert_eq!(eval_ok("print 1; return; print 2;"), "1\n");
}

#[test]
fn expression_statement_discards_value() {
    assert_eq!(eval_ok("1 + 2; \"unused\";"), "");
}

//! Cross-pass tests: every rewrite, alone or stacked, must leave the evaluated value of a
//! program unchanged.

use mex_compute::numerical::{eval, Ctxt, Value};
use mex_compute::rewrite::{factor, fold, height, rebalance, FoldStep};
use mex_parser::parser::ast::Ast;
use mex_parser::parser::Parser;
use pretty_assertions::assert_eq;

fn parse(source: &str) -> Ast {
    Parser::new(source).unwrap().parse().unwrap()
}

/// A context with distinct, exactly-representable values for `a` through `f`.
fn test_ctxt() -> Ctxt {
    let mut ctxt = Ctxt::new();
    for (index, value) in [3.0, -7.0, 0.5, 16.0, 9.0, 2.0].into_iter().enumerate() {
        ctxt.set_var(index, value);
    }
    ctxt
}

fn eval_with(ast: &Ast, root: mex_parser::parser::ast::NodeId, ctxt: &Ctxt) -> Value {
    eval(ast, root, &mut ctxt.clone()).unwrap()
}

const PROGRAMS: &[&str] = &[
    "3+4+5+6;",
    "8-2-3-1;",
    "100/5/2/5;",
    "6 + 9;",
    "1 + 2 * (4 - 4) + 6 * (1 + 9);",
    "a+b+c+d+e+f;",
    "a*b*d*f*a;",
    "x = 3 + 4 * (2 + 1) - 2 + 6 * 4;",
    "(8-2-3-1)*(4-5)/(7-8)/4/2;",
    ";",
];

#[test]
fn rebalancing_preserves_every_value() {
    let ctxt = test_ctxt();
    for source in PROGRAMS {
        let mut ast = parse(source);
        let before = eval_with(&ast, ast.root, &ctxt);
        let h_before = height(&ast, Some(ast.root));

        let root_id = ast.root;
        let root = rebalance(&mut ast, root_id);
        assert_eq!(eval_with(&ast, root, &ctxt), before, "value changed for `{source}`");
        assert!(height(&ast, Some(root)) <= h_before, "height grew for `{source}`");
    }
}

#[test]
fn factoring_preserves_every_value() {
    let ctxt = test_ctxt();
    for source in PROGRAMS {
        let mut ast = parse(source);
        let before = eval_with(&ast, ast.root, &ctxt);

        let root_id = ast.root;
        factor(&mut ast, root_id, &mut ());
        assert_eq!(eval_with(&ast, ast.root, &ctxt), before, "value changed for `{source}`");
    }
}

#[test]
fn folding_preserves_every_value() {
    let ctxt = test_ctxt();
    for source in PROGRAMS {
        let mut ast = parse(source);
        let before = eval_with(&ast, ast.root, &ctxt);

        ast.link_parents(ast.root);
        let mut steps: Vec<FoldStep> = Vec::new();
        let root_id = ast.root;
        fold(&mut ast, root_id, &mut steps).unwrap();
        assert_eq!(eval_with(&ast, ast.root, &ctxt), before, "value changed for `{source}`");
    }
}

#[test]
fn passes_compose_on_copies_of_one_program() {
    let ctxt = test_ctxt();
    let mut ast = parse("3 + 4 * (2 + 1) - 2 + 6 * 4;");
    let before = eval_with(&ast, ast.root, &ctxt);
    assert_eq!(before, Value::Num(37.0));

    // the original driver's four trees: parsed, rebalanced, factored, and
    // factored-after-rebalancing, each on its own copy
    let balanced = {
        let copy = ast.deep_copy(ast.root);
        rebalance(&mut ast, copy)
    };
    let factored = {
        let copy = ast.deep_copy(ast.root);
        factor(&mut ast, copy, &mut ());
        copy
    };
    factor(&mut ast, balanced, &mut ());

    assert_eq!(eval_with(&ast, ast.root, &ctxt), before);
    assert_eq!(eval_with(&ast, factored, &ctxt), before);
    assert_eq!(eval_with(&ast, balanced, &ctxt), before);
}

#[test]
fn rebalanced_chain_matches_the_expected_regrouping() {
    let mut ast = parse("3+4+5+6;");
    let root_id = ast.root;
    let root = rebalance(&mut ast, root_id);

    // ((3+4)+5)+6 regroups into (3+4)+(5+6): one level shorter, same value
    assert_eq!(height(&ast, Some(root)), 5);
    assert_eq!(eval_with(&ast, root, &Ctxt::new()), Value::Num(18.0));

    let expr = ast[root].left.unwrap();
    let top = ast[expr].left.unwrap();
    let left = ast[top].left.unwrap();
    let right = ast[top].right.unwrap();
    assert_eq!(ast[ast[left].left.unwrap()].value, Some(3.0));
    assert_eq!(ast[ast[left].right.unwrap()].value, Some(4.0));
    assert_eq!(ast[ast[right].left.unwrap()].value, Some(5.0));
    assert_eq!(ast[ast[right].right.unwrap()].value, Some(6.0));
}

#[test]
fn repeated_folding_reaches_a_fixed_point() {
    let ctxt = test_ctxt();
    let mut ast = parse("(8-2-3-1)*(4-5)/(7-8)/4/2;");
    let before = eval_with(&ast, ast.root, &ctxt);

    loop {
        ast.link_parents(ast.root);
        let mut steps: Vec<FoldStep> = Vec::new();
        let root_id = ast.root;
        fold(&mut ast, root_id, &mut steps).unwrap();
        if steps.is_empty() {
            break;
        }
    }

    assert_eq!(eval_with(&ast, ast.root, &ctxt), before);
}

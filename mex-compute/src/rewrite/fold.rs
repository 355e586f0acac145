use crate::numerical::eval::evaluate;
use crate::step_collector::StepCollector;
use mex_error::Error;
use mex_parser::parser::ast::{Ast, Node, NodeId, NodeKind};

/// One constant pair folded away, recorded in visitation order.
#[derive(Clone, Debug, PartialEq)]
pub struct FoldStep {
    /// The operator node whose constant operands were folded. The node is detached from the tree
    /// but stays in the arena, so it can still be inspected.
    pub parent: NodeId,

    /// The value now held by the replacement leaf.
    pub value: f64,
}

/// Folds constant operand pairs bottom-up, splicing each result in one level above the pair.
///
/// Requires the parent links populated by [`Ast::link_parents`]. Nodes are visited in
/// left-to-right post-order; at each `Const` leaf whose parent is an arithmetic operator over two
/// constants, the parent is evaluated and the grandparent's edge to it is redirected to a fresh
/// `Const` leaf holding the result. Each fold is pushed onto the step collector, which serves as
/// the audit list of the pass.
///
/// The fresh leaf is left unlinked (parent edges are stale after any rewrite), and the pass never
/// re-scans upward after a fold, so a chain of foldable levels collapses one level per
/// invocation: relink and run again to continue. A constant pair directly under the tree root has
/// no grandparent edge to redirect and is skipped; trees built by the parser keep their operators
/// under `Prog` and `Expr` wrappers, so every parsed pair is reachable.
///
/// Division by zero between two genuine constants aborts the pass with an error; folds applied
/// before the failure are still recorded and spliced.
pub fn fold(
    ast: &mut Ast,
    root: NodeId,
    steps: &mut dyn StepCollector<FoldStep>,
) -> Result<(), Error> {
    let order = ast.post_order(root).collect::<Vec<_>>();

    for id in order {
        if ast[id].kind != NodeKind::Const {
            continue;
        }
        let Some(parent) = ast[id].parent else { continue };
        if !ast[parent].kind.is_binary_op() {
            continue;
        }

        let (Some(left), Some(right)) = (ast[parent].left, ast[parent].right) else { continue };
        let sibling = if left == id { right } else { left };
        // the sibling must be a constant from the linked tree: a leaf spliced in by an earlier
        // fold has no parent edge and is not folded again this invocation
        if ast[sibling].kind != NodeKind::Const || ast[sibling].parent != Some(parent) {
            continue;
        }

        let Some(grandparent) = ast[parent].parent else { continue };
        // an earlier fold of this pair already detached the parent
        let from_left = if ast[grandparent].left == Some(parent) {
            true
        } else if ast[grandparent].right == Some(parent) {
            false
        } else {
            continue;
        };

        let value = evaluate(ast, parent)?;
        let span = ast[parent].span.clone();
        let folded = ast.alloc(Node::constant(value, span));
        if from_left {
            ast[grandparent].left = Some(folded);
        } else {
            ast[grandparent].right = Some(folded);
        }

        steps.push(FoldStep { parent, value });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::numerical::error::DivisionByZero;
    use crate::numerical::{eval, Ctxt, Value};
    use mex_parser::parser::Parser;

    fn parse(source: &str) -> Ast {
        Parser::new(source).unwrap().parse().unwrap()
    }

    fn eval_root(ast: &Ast) -> Value {
        eval(ast, ast.root, &mut Ctxt::new()).unwrap()
    }

    #[test]
    fn folds_a_single_pair() {
        let mut ast = parse("(1 + 2) * 3;");
        ast.link_parents(ast.root);

        let expr = ast[ast.root].left.unwrap();
        let product = ast[expr].left.unwrap();
        let sum = ast[product].left.unwrap();

        let mut steps: Vec<FoldStep> = Vec::new();
        let root_id = ast.root;
        fold(&mut ast, root_id, &mut steps).unwrap();

        // the (1 + 2) subtree became a constant leaf under the product
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].parent, sum);
        assert_eq!(steps[0].value, 3.0);

        let folded = ast[product].left.unwrap();
        assert_ne!(folded, sum);
        assert_eq!(ast[folded].kind, NodeKind::Const);
        assert_eq!(ast[folded].value, Some(3.0));

        assert_eq!(eval_root(&ast), Value::Num(9.0));
    }

    #[test]
    fn one_level_per_invocation() {
        let mut ast = parse("(1 + 2) * 3;");
        ast.link_parents(ast.root);

        let mut steps: Vec<FoldStep> = Vec::new();
        let root_id = ast.root;
        fold(&mut ast, root_id, &mut steps).unwrap();
        assert_eq!(steps.len(), 1);

        // the product of two constants left behind by the first invocation folds
        // once the tree is relinked
        ast.link_parents(ast.root);
        let root_id = ast.root;
        fold(&mut ast, root_id, &mut steps).unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].value, 9.0);

        let expr = ast[ast.root].left.unwrap();
        assert_eq!(ast[ast[expr].left.unwrap()].value, Some(9.0));
    }

    #[test]
    fn audits_sibling_pairs_in_visitation_order() {
        let mut ast = parse("(1 + 2) * (10 - 4);");
        ast.link_parents(ast.root);

        let mut steps: Vec<FoldStep> = Vec::new();
        let root_id = ast.root;
        fold(&mut ast, root_id, &mut steps).unwrap();

        let values = steps.iter().map(|step| step.value).collect::<Vec<_>>();
        assert_eq!(values, [3.0, 6.0]);
        assert_eq!(eval_root(&ast), Value::Num(18.0));
    }

    #[test]
    fn pair_under_the_expression_wrapper_folds() {
        let mut ast = parse("1 + 2;");
        ast.link_parents(ast.root);

        let mut steps: Vec<FoldStep> = Vec::new();
        let root_id = ast.root;
        fold(&mut ast, root_id, &mut steps).unwrap();

        assert_eq!(steps.len(), 1);
        assert_eq!(eval_root(&ast), Value::Num(3.0));
    }

    #[test]
    fn variable_operand_blocks_the_fold() {
        let mut ast = parse("(a + 2) * 3;");
        ast.link_parents(ast.root);

        let mut steps: Vec<FoldStep> = Vec::new();
        let root_id = ast.root;
        fold(&mut ast, root_id, &mut steps).unwrap();
        assert_eq!(steps, vec![]);
    }

    #[test]
    fn division_by_zero_propagates() {
        let mut ast = parse("(1 / 0) * 3;");
        ast.link_parents(ast.root);

        let mut steps: Vec<FoldStep> = Vec::new();
        let root_id = ast.root;
        let err = fold(&mut ast, root_id, &mut steps).unwrap_err();
        assert_eq!(err.kind.as_any().downcast_ref(), Some(&DivisionByZero));
    }

    #[test]
    fn folding_preserves_the_value_of_deep_trees() {
        let source = "2 * (3 + 4) - 6 / (1 + 2);";
        let mut ast = parse(source);
        let before = eval_root(&ast);

        ast.link_parents(ast.root);
        let mut steps: Vec<FoldStep> = Vec::new();
        let root_id = ast.root;
        fold(&mut ast, root_id, &mut steps).unwrap();

        assert_eq!(steps.len(), 2);
        assert_eq!(eval_root(&ast), before);
    }

    #[test]
    fn empty_statement_folds_nothing() {
        let mut ast = parse(";");
        ast.link_parents(ast.root);

        let mut steps: Vec<FoldStep> = Vec::new();
        let root_id = ast.root;
        fold(&mut ast, root_id, &mut steps).unwrap();
        assert_eq!(steps, vec![]);
    }
}

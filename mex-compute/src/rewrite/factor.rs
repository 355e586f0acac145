use crate::step_collector::StepCollector;
use mex_parser::parser::ast::{Ast, Node, NodeId, NodeKind};

/// One application of the common-factor rewrite.
#[derive(Clone, Debug, PartialEq)]
pub struct FactorStep {
    /// The `Add` or `Sub` node that was rewritten into a product.
    pub node: NodeId,

    /// The extracted common factor.
    pub gcd: i64,
}

/// Computes the greatest common divisor of two magnitudes by repeated remainder reduction.
///
/// `gcd(a, 0) = a` and `gcd(0, 0) = 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while a != 0 && b != 0 {
        if a > b {
            a %= b;
        } else {
            b %= a;
        }
    }
    a + b
}

/// The node's value, if it is a `Const` holding an integral number.
fn const_int(ast: &Ast, id: NodeId) -> Option<i64> {
    let node = &ast[id];
    match node.kind {
        NodeKind::Const => node.value.filter(|value| value.fract() == 0.0).map(|value| value as i64),
        _ => None,
    }
}

/// Extracts common factors from constant sums and differences, recursing over the whole tree.
///
/// Every `Add` or `Sub` node over two integral `Const` leaves with `g = gcd(|a|, |b|)` outside
/// `{0, 1}` is rewritten in place into `((a/g) ± (b/g)) * g`, which evaluates to the same value.
/// Nodes with non-constant children are untouched, as are constants made non-integral by an
/// earlier division. Each applied rewrite is reported to the step collector.
///
/// The rewrite only ever fires on literal leaves, so traversal order does not affect the result;
/// node ids remain valid because the node is mutated rather than replaced.
pub fn factor(ast: &mut Ast, id: NodeId, steps: &mut dyn StepCollector<FactorStep>) {
    let kind = ast[id].kind;
    if matches!(kind, NodeKind::Add | NodeKind::Sub) {
        let (left, right) = (ast[id].left, ast[id].right);
        if let (Some(left), Some(right)) = (left, right) {
            if let (Some(a), Some(b)) = (const_int(ast, left), const_int(ast, right)) {
                let g = gcd(a.unsigned_abs(), b.unsigned_abs()) as i64;
                if g != 0 && g != 1 {
                    let span = ast[id].span.clone();
                    let reduced_left = ast.alloc(Node::constant((a / g) as f64, ast[left].span.clone()));
                    let reduced_right = ast.alloc(Node::constant((b / g) as f64, ast[right].span.clone()));
                    let sum = ast.alloc(Node::binary(kind, reduced_left, reduced_right, span.clone()));
                    let factor = ast.alloc(Node::constant(g as f64, span));

                    let node = &mut ast[id];
                    node.kind = NodeKind::Multiply;
                    node.left = Some(sum);
                    node.right = Some(factor);

                    steps.push(FactorStep { node: id, gcd: g });
                }
            }
        }
    }

    if let Some(left) = ast[id].left {
        factor(ast, left, steps);
    }
    if let Some(right) = ast[id].right {
        factor(ast, right, steps);
    }
}

use crate::numerical::{
    ctxt::Ctxt,
    error::{DivisionByZero, UndefinedVariable},
    value::Value,
};
use mex_error::Error;
use mex_parser::parser::ast::{Ast, NodeId, NodeKind};
use std::ops::Range;

/// Applies a binary arithmetic operator to two numbers.
///
/// Division is real-valued; a zero divisor is an error pointing at `divisor_span` rather than an
/// infinity.
fn apply(kind: NodeKind, lhs: f64, rhs: f64, divisor_span: Range<usize>) -> Result<f64, Error> {
    match kind {
        NodeKind::Add => Ok(lhs + rhs),
        NodeKind::Sub => Ok(lhs - rhs),
        NodeKind::Multiply => Ok(lhs * rhs),
        NodeKind::Divide => {
            if rhs == 0.0 {
                Err(Error::new(vec![divisor_span], DivisionByZero))
            } else {
                Ok(lhs / rhs)
            }
        },
        kind => unreachable!("not a binary arithmetic operator: {kind}"),
    }
}

/// Evaluates a binary operator node whose operands both already carry a value (typically `Const`
/// leaves).
///
/// This is the primitive the folding pass builds on. Callers must only pass nodes whose kind is
/// one of the four arithmetic operators and whose children are value-carrying leaves; anything
/// else is a bug in the caller.
pub fn evaluate(ast: &Ast, id: NodeId) -> Result<f64, Error> {
    let node = &ast[id];
    let (Some(left), Some(right)) = (node.left, node.right) else {
        unreachable!("`evaluate` called on a leaf or wrapper node");
    };
    let (Some(lhs), Some(rhs)) = (ast[left].value, ast[right].value) else {
        unreachable!("`evaluate` called with non-constant operands");
    };

    apply(node.kind, lhs, rhs, ast[right].span.clone())
}

/// Evaluates the subtree rooted at `id` against the given context.
///
/// Variables resolve through the context; assignment stores into it and yields the assigned
/// value. Only an empty statement evaluates to [`Value::Unit`].
pub fn eval(ast: &Ast, id: NodeId, ctxt: &mut Ctxt) -> Result<Value, Error> {
    let node = &ast[id];
    match (node.kind, node.left, node.right) {
        (NodeKind::Prog | NodeKind::Expr, Some(left), _) => eval(ast, left, ctxt),

        (NodeKind::Empty, ..) => Ok(Value::Unit),

        (NodeKind::Const, ..) => match node.value {
            Some(value) => Ok(Value::Num(value)),
            None => unreachable!("constant without a value"),
        },

        (NodeKind::Var, ..) => {
            let (Some(index), Some(letter)) = (node.var_index(), node.letter()) else {
                unreachable!("variable without an index");
            };
            match ctxt.get_var(index) {
                Some(value) => Ok(Value::Num(value)),
                None => Err(Error::new(vec![node.span.clone()], UndefinedVariable { name: letter })),
            }
        },

        (NodeKind::Set, Some(target), Some(rhs)) => {
            let Some(index) = ast[target].var_index() else {
                unreachable!("assignment target is not a variable");
            };
            let value = eval_num(ast, rhs, ctxt)?;
            ctxt.set_var(index, value);
            Ok(Value::Num(value))
        },

        (kind, Some(left), Some(right)) if kind.is_binary_op() => {
            let lhs = eval_num(ast, left, ctxt)?;
            let rhs = eval_num(ast, right, ctxt)?;
            apply(kind, lhs, rhs, ast[right].span.clone()).map(Value::Num)
        },

        _ => unreachable!("malformed tree"),
    }
}

/// Evaluates an operand subtree, which always produces a number.
fn eval_num(ast: &Ast, id: NodeId, ctxt: &mut Ctxt) -> Result<f64, Error> {
    match eval(ast, id, ctxt)? {
        Value::Num(num) => Ok(num),
        // only a top-level empty statement evaluates to unit, and `Empty` cannot be an operand
        Value::Unit => unreachable!("operand evaluated to no value"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::numerical::error::{DivisionByZero, UndefinedVariable};
    use mex_parser::parser::Parser;

    fn parse(source: &str) -> Ast {
        Parser::new(source).unwrap().parse().unwrap()
    }

    /// The operator node of a single-expression program.
    fn op_node(ast: &Ast) -> NodeId {
        let expr = ast[ast.root].left.unwrap();
        ast[expr].left.unwrap()
    }

    #[test]
    fn evaluate_constant_operands() {
        for (source, expected) in [
            ("1 + 2;", 3.0),
            ("8 - 11;", -3.0),
            ("6 * 7;", 42.0),
            ("9 / 2;", 4.5),
        ] {
            let ast = parse(source);
            assert_eq!(evaluate(&ast, op_node(&ast)).unwrap(), expected);
        }
    }

    #[test]
    fn evaluate_division_by_zero() {
        let ast = parse("1 / 0;");
        let err = evaluate(&ast, op_node(&ast)).unwrap_err();
        assert_eq!(err.kind.as_any().downcast_ref(), Some(&DivisionByZero));
        assert_eq!(err.spans, vec![4..5]);
    }

    #[test]
    fn eval_respects_precedence() {
        let mut ctxt = Ctxt::new();
        let ast = parse("2 + 3 * 4;");
        assert_eq!(eval(&ast, ast.root, &mut ctxt).unwrap(), Value::Num(14.0));
    }

    #[test]
    fn eval_division_is_real_valued() {
        let mut ctxt = Ctxt::new();
        let ast = parse("7 / 2;");
        assert_eq!(eval(&ast, ast.root, &mut ctxt).unwrap(), Value::Num(3.5));
    }

    #[test]
    fn eval_assignment_stores_and_yields_the_value() {
        let mut ctxt = Ctxt::new();
        let ast = parse("x = 4 * 10;");
        assert_eq!(eval(&ast, ast.root, &mut ctxt).unwrap(), Value::Num(40.0));
        assert_eq!(ctxt.get_var(23), Some(40.0));
    }

    #[test]
    fn eval_chained_assignment() {
        let mut ctxt = Ctxt::new();
        let ast = parse("a = b = 3;");
        assert_eq!(eval(&ast, ast.root, &mut ctxt).unwrap(), Value::Num(3.0));
        assert_eq!(ctxt.get_var(0), Some(3.0));
        assert_eq!(ctxt.get_var(1), Some(3.0));
    }

    #[test]
    fn eval_reads_the_context() {
        let mut ctxt = Ctxt::new();
        ctxt.set_var(0, 6.0);
        let ast = parse("a * a;");
        assert_eq!(eval(&ast, ast.root, &mut ctxt).unwrap(), Value::Num(36.0));
    }

    #[test]
    fn eval_undefined_variable() {
        let mut ctxt = Ctxt::new();
        let ast = parse("q + 1;");
        let err = eval(&ast, ast.root, &mut ctxt).unwrap_err();
        assert_eq!(err.kind.as_any().downcast_ref(), Some(&UndefinedVariable { name: 'q' }));
    }

    #[test]
    fn eval_empty_statement() {
        let mut ctxt = Ctxt::new();
        let ast = parse(";");
        assert_eq!(eval(&ast, ast.root, &mut ctxt).unwrap(), Value::Unit);
    }

    #[test]
    fn eval_division_by_zero_expression() {
        let mut ctxt = Ctxt::new();
        let ast = parse("1 + 2 / (3 - 3);");
        let err = eval(&ast, ast.root, &mut ctxt).unwrap_err();
        assert_eq!(err.kind.as_any().downcast_ref(), Some(&DivisionByZero));
    }
}

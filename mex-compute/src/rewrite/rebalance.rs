use mex_parser::parser::ast::{Ast, NodeId, NodeKind};

/// Returns the height of the subtree rooted at `node`: 0 for no node, and 1 + the taller child's
/// height otherwise.
pub fn height(ast: &Ast, node: Option<NodeId>) -> u32 {
    match node {
        None => 0,
        Some(id) => 1 + height(ast, ast[id].left).max(height(ast, ast[id].right)),
    }
}

/// The kind a left-associative chain of `kind` regroups into when rotated: `(a - b) - c` becomes
/// `a - (b + c)` and `(a / b) / c` becomes `a / (b * c)`, while addition and multiplication
/// regroup into themselves.
fn regroup_kind(kind: NodeKind) -> Option<NodeKind> {
    match kind {
        NodeKind::Add | NodeKind::Sub => Some(NodeKind::Add),
        NodeKind::Multiply | NodeKind::Divide => Some(NodeKind::Multiply),
        _ => None,
    }
}

/// Reduces the height of left-skewed same-kind operator chains by rotating each chain's left
/// spine, returning the id of the (possibly new) subtree root.
///
/// The parser nests unbroken chains of same-precedence operators leftward, so a chain of length
/// n parses into a tree of depth n. Whenever a node's left subtree is more than one level taller
/// than its right and the left child is the same kind of operator, the left child is promoted to
/// subtree root and the node regroups the displaced operands under the chain's regrouping kind.
/// Each rotation is exactly one associative identity, so the evaluated value is unchanged.
///
/// Right-skewed chains and chains mixing operator kinds (say, a `Sub` directly above an `Add`)
/// are left alone; this is a bounded heuristic, not a search for the shortest tree.
///
/// Parent links are not maintained; relink before relying on them.
pub fn rebalance(ast: &mut Ast, id: NodeId) -> NodeId {
    let mut current = id;

    loop {
        let (kind, left, right) = {
            let node = &ast[current];
            (node.kind, node.left, node.right)
        };
        let Some(left) = left else { break };

        let h_left = height(ast, Some(left));
        let h_right = height(ast, right);
        if h_left <= h_right + 1 {
            break;
        }
        if ast[left].kind != kind {
            break;
        }
        let Some(new_kind) = regroup_kind(kind) else { break };

        // promote the left child: its right subtree joins this node's right operand under the
        // regrouping kind, and this node becomes the pivot's right child
        let pivot = left;
        ast[current].left = ast[pivot].right;
        ast[current].kind = new_kind;
        ast[pivot].right = Some(current);
        current = pivot;
    }

    if let Some(left) = ast[current].left {
        let left = rebalance(ast, left);
        ast[current].left = Some(left);
    }
    if let Some(right) = ast[current].right {
        let right = rebalance(ast, right);
        ast[current].right = Some(right);
    }

    current
}

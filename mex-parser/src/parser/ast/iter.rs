use super::{Ast, NodeId};

/// An iterator that iteratively traverses a subtree in left-to-right post-order (children before
/// their parent).
///
/// This iterator is created by [`Ast::post_order`].
pub struct NodeIter<'a> {
    ast: &'a Ast,
    stack: Vec<NodeId>,
    last_visited: Option<NodeId>,
}

impl<'a> NodeIter<'a> {
    pub(super) fn new(ast: &'a Ast, root: NodeId) -> Self {
        Self {
            ast,
            stack: vec![root],
            last_visited: None,
        }
    }

    /// Pops the current node from the stack and marks it as the last visited node.
    fn visit(&mut self) -> Option<NodeId> {
        self.last_visited = self.stack.pop();
        self.last_visited
    }
}

impl Iterator for NodeIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            let &id = self.stack.last()?;
            let node = &self.ast[id];

            // a node is ready once its last (rightmost) child has been visited; when control
            // returns to a node on the stack, the last visited node is exactly that child
            let ready = match (node.left, node.right) {
                (None, None) => true,
                (_, Some(right)) => self.last_visited == Some(right),
                (Some(left), None) => self.last_visited == Some(left),
            };

            if ready {
                return self.visit();
            }

            if let Some(right) = node.right {
                self.stack.push(right);
            }
            if let Some(left) = node.left {
                self.stack.push(left);
            }
        }
    }
}

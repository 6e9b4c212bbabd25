//! Depth-first traversal
//!
//! Pre-order `enter`, post-order `exit`. The walker keeps the open path on
//! its own stack, so nodes never need a parent link.
//!
//! When [`NodesVisitor::is_done`] turns true the walk stops right away.
//! Nodes still open on the current path do not get their `exit`.

use crate::Node;

/// Callbacks driven by [`traverse`]
pub trait NodesVisitor {
    /// Called once per node, before any of its children
    fn enter(&mut self, node: &Node);

    /// Called once per node, after all of its children have exited
    ///
    /// Leaf nodes get their `exit` right after `enter`.
    fn exit(&mut self, _node: &Node) {}

    /// Checked after every callback; `true` stops the walk
    fn is_done(&self) -> bool {
        false
    }
}

/// How a traversal ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Every node was entered and exited
    Completed,
    /// The visitor asked to stop early
    Stopped,
}

/// Walk `root` and its descendants depth-first in document order
pub fn traverse<V: NodesVisitor + ?Sized>(root: &Node, visitor: &mut V) -> Traversal {
    visitor.enter(root);
    if visitor.is_done() {
        return stopped();
    }

    // (node, index of the next child to enter)
    let mut path: Vec<(&Node, usize)> = vec![(root, 0)];

    while let Some((node, next)) = path.last_mut() {
        let node = *node;
        match node.child_nodes().get(*next) {
            Some(child) => {
                *next += 1;
                visitor.enter(child);
                if visitor.is_done() {
                    return stopped();
                }
                path.push((child, 0));
            }
            None => {
                path.pop();
                visitor.exit(node);
                if visitor.is_done() {
                    return stopped();
                }
            }
        }
    }

    Traversal::Completed
}

fn stopped() -> Traversal {
    tracing::trace!("traversal stopped by visitor");
    Traversal::Stopped
}

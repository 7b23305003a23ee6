use std::mem;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{DomainResult, NodeId, TreeArena};

/// Conversion of a subtree into a `termtree` outline.
pub trait TreeNodeConvert {
    fn to_tree_string(&self, root: NodeId) -> DomainResult<Tree<String>>;
}

impl TreeNodeConvert for TreeArena {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, root: NodeId) -> DomainResult<Tree<String>> {
        self.name(root)?;

        // Flatten in pre-order, remembering each entry's parent position
        let mut names: Vec<String> = Vec::new();
        let mut parents: Vec<usize> = Vec::new();
        let mut path: Vec<usize> = Vec::new();
        for (level, _, node) in self.iter_preorder(root) {
            path.truncate(level);
            parents.push(path.last().copied().unwrap_or(0));
            path.push(names.len());
            names.push(node.name().to_string());
        }

        // Assemble bottom-up: later entries are never ancestors of earlier ones
        let mut leaves: Vec<Vec<Tree<String>>> = names.iter().map(|_| Vec::new()).collect();
        for pos in (1..names.len()).rev() {
            let mut children = mem::take(&mut leaves[pos]);
            children.reverse();
            let tree = Tree::new(mem::take(&mut names[pos])).with_leaves(children);
            leaves[parents[pos]].push(tree);
        }

        let mut children = mem::take(&mut leaves[0]);
        children.reverse();
        Ok(Tree::new(mem::take(&mut names[0])).with_leaves(children))
    }
}

/// Payload-free binary tree node.
///
/// A node is either a leaf or owns exactly two subtrees; the pair makes a
/// half-populated node unrepresentable.
#[derive(Debug)]
pub struct TreeNode {
    children: Option<(Box<TreeNode>, Box<TreeNode>)>,
}

impl TreeNode {
    pub fn leaf() -> Self {
        Self { children: None }
    }

    /// Builds a perfect tree; both subtrees are allocated independently.
    pub fn build(depth: u32) -> Self {
        if depth == 0 {
            return Self::leaf();
        }
        Self {
            children: Some((Box::new(Self::build(depth - 1)), Box::new(Self::build(depth - 1)))),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Node count: 1 for a leaf, otherwise 1 plus both subtrees.
    pub fn check(&self) -> u64 {
        match &self.children {
            None => 1,
            Some((left, right)) => 1 + left.check() + right.check(),
        }
    }
}

/// Builds a tree of `depth` and returns its check value (`2^(depth+1) - 1`).
pub fn binary_trees(depth: u32) -> u64 {
    TreeNode::build(depth).check()
}

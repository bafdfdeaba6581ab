use super::*;

/// The auto-generated deallocation code for [`PrefixNode`] is recursive, one call per symbol
/// of the longest word. Inserting a very long word could then make dropping the tree
/// overflow the stack.
///
/// Therefore, we have this tiny struct in order to deallocate the nodes in an iterative way.
struct IterativeDeallocator<A> {
    stack: Vec<Box<PrefixNode<A>>>,
}

impl<A> IterativeDeallocator<A> {
    fn step(&mut self) -> Option<()> {
        let mut node = self.stack.pop()?;
        self.push_children(&mut node);
        // `node` has no children left, so dropping it here doesn't recurse
        Some(())
    }

    fn push_children(&mut self, node: &mut PrefixNode<A>) {
        for child in node.children.iter_mut() {
            if let Some(child) = child.take() {
                self.stack.push(child);
            }
        }
    }
}

/// Detaches all of the descendants of `root` and deallocates them iteratively.
/// Input is a reference and not an owned value so that this function can get
/// called in `Drop` implementations.
pub(super) fn deallocate_iteratively<A>(root: &mut PrefixNode<A>) {
    let mut deallocator = IterativeDeallocator { stack: vec![] };
    deallocator.push_children(root);
    while let Some(()) = deallocator.step() {}
}

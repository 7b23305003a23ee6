//! Deep but finite chains must not exhaust the call stack.

use comptree::domain::{NodeId, TreeArena};
use comptree::tree_traits::TreeNodeConvert;
use rstest::{fixture, rstest};

const CHAIN_LEN: usize = 100_000;

struct Chain {
    arena: TreeArena,
    root: NodeId,
}

#[fixture]
fn chain() -> Chain {
    let mut arena = TreeArena::new();
    let root = arena.composite("level0");
    let mut parent = root;
    for i in 1..CHAIN_LEN {
        let child = arena.composite(format!("level{}", i));
        arena.add(parent, child).unwrap();
        parent = child;
    }
    Chain { arena, root }
}

#[rstest]
fn given_deep_chain_when_depth_then_counts_every_level(chain: Chain) {
    assert_eq!(chain.arena.node_count(chain.root), CHAIN_LEN);
    assert_eq!(chain.arena.depth(chain.root), CHAIN_LEN);
}

#[rstest]
fn given_deep_chain_when_outlined_then_every_level_nested(chain: Chain) {
    let mut current = chain.arena.to_tree_string(chain.root).unwrap();
    assert_eq!(current.root, "level0");

    // Unwind level by level so dropping the outline stays shallow
    let mut levels = 1;
    while let Some(child) = current.leaves.pop() {
        assert!(current.leaves.is_empty());
        current = child;
        levels += 1;
    }
    assert_eq!(levels, CHAIN_LEN);
    assert_eq!(current.root, format!("level{}", CHAIN_LEN - 1));
}

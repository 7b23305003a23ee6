//! Sample organization: departments are composites, devices are leaves.

use std::io::Write;

use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::error::ApplicationResult;
use crate::domain::{NodeId, TreeArena};
use crate::tree_traits::TreeNodeConvert;

/// A small department/device hierarchy built on a [`TreeArena`].
#[derive(Debug)]
pub struct Organization {
    arena: TreeArena,
    root: NodeId,
    device1: NodeId,
    dept1: NodeId,
}

impl Organization {
    /// Builds
    ///
    /// ```text
    /// root
    /// *device1
    /// *dept1
    /// **device2
    /// ```
    #[instrument(level = "debug")]
    pub fn sample() -> ApplicationResult<Self> {
        let mut arena = TreeArena::new();

        let root = arena.insert_composite();
        arena.set_name(root, "root")?;
        let device1 = arena.insert_leaf();
        arena.set_name(device1, "device1")?;
        let dept1 = arena.insert_composite();
        arena.set_name(dept1, "dept1")?;
        let device2 = arena.insert_leaf();
        arena.set_name(device2, "device2")?;

        arena.add(root, device1)?;
        arena.add(root, dept1)?;
        arena.add(dept1, device2)?;
        debug!("sample organization has {} nodes", arena.node_count(root));

        Ok(Self {
            arena,
            root,
            device1,
            dept1,
        })
    }

    pub fn arena(&self) -> &TreeArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut TreeArena {
        &mut self.arena
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn dept1(&self) -> NodeId {
        self.dept1
    }

    pub fn device1(&self) -> NodeId {
        self.device1
    }

    pub fn display(&self, depth: usize) -> ApplicationResult<()> {
        Ok(self.arena.display(self.root, depth)?)
    }

    pub fn write_display<W: Write>(&self, depth: usize, out: &mut W) -> ApplicationResult<()> {
        Ok(self.arena.write_display(self.root, depth, out)?)
    }

    pub fn outline(&self) -> ApplicationResult<Tree<String>> {
        Ok(self.arena.to_tree_string(self.root)?)
    }

    /// Tries to hang a new device below `device1`, which is a leaf.
    ///
    /// Always fails with a structural violation; the tree is left as it was.
    #[instrument(level = "debug", skip(self))]
    pub fn attach_to_device(&mut self, name: &str) -> ApplicationResult<()> {
        let device = self.arena.leaf(name);
        if let Err(e) = self.arena.add(self.device1, device) {
            self.arena.discard(device);
            return Err(e.into());
        }
        Ok(())
    }
}

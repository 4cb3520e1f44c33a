//! Arena storage for linked nodes
//!
//! Every tree and heap in this crate keeps its nodes in a [`NodeArena`] and
//! links them with [`NodeKey`]s instead of pointers. This avoids ownership
//! cycles between parents, children and siblings while keeping relinking O(1).
//!
//! # Design
//!
//! The arena is a thin wrapper over [`slotmap::SlotMap`]:
//! - Contiguous node storage (good cache locality, no per-node allocation)
//! - Generational keys: a key whose node has been removed never resolves again,
//!   even if the slot is reused. Handles returned to callers are built on this,
//!   so a stale handle is detected rather than silently aliasing another node.
//!
//! Internal links are trusted: indexing with `arena[key]` panics if a link is
//! dangling, which would mean a structural invariant was already broken.
//! Caller-supplied keys go through [`NodeArena::get`] / [`NodeArena::get_mut`].
//!
//! Heap `union` moves nodes between arenas with [`NodeArena::absorb`]; nodes
//! describe their links through [`Relink`] so they can be rewritten to the
//! keys they receive in the destination arena.
//!
//! Keys alone are only unique within one arena: two fresh arenas hand out
//! the same first key. Handles given to callers are therefore [`Ticket`]s,
//! which pair the key with the [`ArenaId`] of the arena that issued it.

use slotmap::{new_key_type, SecondaryMap, SlotMap};
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(0);

new_key_type! {
    /// Generational key identifying a node inside a [`NodeArena`]
    pub struct NodeKey;
}

/// Nodes that hold links to other nodes of the same arena
pub trait Relink {
    /// Rewrites every stored link through `map`
    fn relink(&mut self, map: impl Fn(NodeKey) -> NodeKey);
}

/// Process-unique identity of a [`NodeArena`]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ArenaId(u64);

impl ArenaId {
    fn fresh() -> Self {
        ArenaId(NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A node key stamped with the arena that issued it
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Ticket {
    arena: ArenaId,
    key: NodeKey,
}

/// Slot-map backed node storage
///
/// The arena's [`ArenaId`] travels with its storage: swapping two arenas
/// swaps their ids too, so tickets keep resolving against the nodes they
/// were issued for.
#[derive(Debug)]
pub struct NodeArena<N> {
    id: ArenaId,
    nodes: SlotMap<NodeKey, N>,
}

impl<N> Default for NodeArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> NodeArena<N> {
    /// Creates an empty arena
    pub fn new() -> Self {
        Self {
            id: ArenaId::fresh(),
            nodes: SlotMap::with_key(),
        }
    }

    #[inline]
    pub fn id(&self) -> ArenaId {
        self.id
    }

    /// Stamps `key` with this arena's id for handing out to callers
    #[inline]
    pub fn ticket(&self, key: NodeKey) -> Ticket {
        Ticket { arena: self.id, key }
    }

    /// Returns the key behind `ticket` if this arena issued it and the node
    /// is still live
    #[inline]
    pub fn resolve(&self, ticket: Ticket) -> Option<NodeKey> {
        (ticket.arena == self.id && self.nodes.contains_key(ticket.key)).then_some(ticket.key)
    }

    /// Stores a node, returning the key that refers to it
    #[inline]
    pub fn insert(&mut self, node: N) -> NodeKey {
        self.nodes.insert(node)
    }

    /// Stores a node built from its own key (for self-linked nodes)
    #[inline]
    pub fn insert_with_key(&mut self, f: impl FnOnce(NodeKey) -> N) -> NodeKey {
        self.nodes.insert_with_key(f)
    }

    /// Removes a node, returning it if the key was live
    #[inline]
    pub fn remove(&mut self, key: NodeKey) -> Option<N> {
        self.nodes.remove(key)
    }

    /// Node behind `key`, or `None` if it was removed
    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<&N> {
        self.nodes.get(key)
    }

    /// Mutable access to the node behind `key`, or `None` if it was removed
    #[inline]
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut N> {
        self.nodes.get_mut(key)
    }

    /// Returns true if `key` still refers to a live node
    #[inline]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Number of live nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node is live
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node. Keys issued before the call never resolve again.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Moves every node out of the arena, leaving it empty
    pub fn drain(&mut self) -> impl Iterator<Item = (NodeKey, N)> + '_ {
        self.nodes.drain()
    }

    /// Iterates over live nodes in storage order
    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &N)> {
        self.nodes.iter()
    }
}

impl<N: Relink> NodeArena<N> {
    /// Moves every node of `other` into this arena, leaving `other` empty
    ///
    /// Links inside the moved nodes are rewritten to their new keys. The
    /// returned map translates keys issued by `other` into keys of `self`.
    pub fn absorb(&mut self, other: &mut NodeArena<N>) -> SecondaryMap<NodeKey, NodeKey> {
        let mut moved = SecondaryMap::with_capacity(other.len());
        let mut fresh = Vec::with_capacity(other.len());
        for (old, node) in other.drain() {
            let new = self.insert(node);
            moved.insert(old, new);
            fresh.push(new);
        }
        for new in fresh {
            self.nodes[new].relink(|k| moved[k]);
        }
        moved
    }
}

impl<N> Index<NodeKey> for NodeArena<N> {
    type Output = N;

    #[inline]
    fn index(&self, key: NodeKey) -> &N {
        &self.nodes[key]
    }
}

impl<N> IndexMut<NodeKey> for NodeArena<N> {
    #[inline]
    fn index_mut(&mut self, key: NodeKey) -> &mut N {
        &mut self.nodes[key]
    }
}

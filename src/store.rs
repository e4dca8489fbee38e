//! Per-object property storage.
//!
//! Properties live in an AA tree keyed by interned name, so lookup, insert
//! and delete are O(log n):
//!
//! - The level of every leaf node is one.
//! - The level of every left child is one less than its parent.
//! - The level of every right child is equal or one less than its parent.
//! - The level of every right grandchild is less than its grandparent.
//! - Every node of level greater than one has two children.
//!
//! A link where the child's level equals its parent's is called a horizontal
//! link. Individual right horizontal links are allowed, consecutive ones are
//! forbidden, and left horizontal links are forbidden. `skew` fixes left
//! horizontal links; `split` fixes consecutive right horizontal links.
//!
//! Orthogonally to tree shape, every record is threaded onto an intrusive
//! singly-linked list in declaration order. Enumeration walks that list, not
//! the tree. Each record remembers the slot that points at it, so unlinking
//! is O(1).
//!
//! Records are stored in an arena indexed by [`NodeId`]; slot 0 is a shared
//! sentinel of level zero that is its own child on both sides, which keeps
//! the tree algorithms free of "is this child absent" branches.

use std::cmp::Ordering;

use crate::intern::Name;
use crate::value::{Attributes, JsValue};

/// Stable index of a property record within its store's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(u32);

/// The sentinel slot shared by every tree in a store.
const NIL: NodeId = NodeId(0);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    fn is_nil(self) -> bool {
        self.0 == 0
    }
}

/// One named property slot.
///
/// `value` and `attrs` are freely mutable by the embedding interpreter; the
/// name and the tree/list links belong to the store.
#[derive(Debug)]
pub struct PropertyRecord {
    name: Name,
    pub value: JsValue,
    pub attrs: Attributes,
    left: NodeId,
    right: NodeId,
    level: u32,
    /// Following record in declaration order; NIL terminates the list.
    next: NodeId,
    /// Identifies the slot pointing at this record: `None` means the record
    /// has never been linked, `Some(NIL)` means the store's head points at
    /// it, `Some(id)` means record `id`'s `next` does.
    prev: Option<NodeId>,
}

impl PropertyRecord {
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn is_enumerable(&self) -> bool {
        self.attrs.enumerable
    }
}

/// The ordered property table of one object.
pub struct PropertyStore {
    nodes: Vec<PropertyRecord>,
    /// Arena slots released by delete, reused by the next insert.
    free: Vec<NodeId>,
    root: NodeId,
    head: NodeId,
    tail: NodeId,
    live: usize,
}

impl PropertyStore {
    /// Create an empty store. The sentinel occupies arena slot 0.
    pub fn new() -> Self {
        let sentinel = PropertyRecord {
            name: Name::from(""),
            value: JsValue::Undefined,
            attrs: Attributes::data(),
            left: NIL,
            right: NIL,
            level: 0,
            next: NIL,
            prev: None,
        };
        Self {
            nodes: vec![sentinel],
            free: Vec::new(),
            root: NIL,
            head: NIL,
            tail: NIL,
            live: 0,
        }
    }

    /// Number of live properties.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    // ------------------------------------------------------------------
    // Arena access
    // ------------------------------------------------------------------

    #[inline]
    fn node(&self, id: NodeId) -> &PropertyRecord {
        debug_assert!(id.index() < self.nodes.len());
        // Safety: NodeIds are minted only by alloc() for slots of `nodes`,
        // and arena slots are never removed, so the index is in bounds.
        unsafe { self.nodes.get_unchecked(id.index()) }
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut PropertyRecord {
        debug_assert!(id.index() < self.nodes.len());
        // Safety: same argument as node().
        unsafe { self.nodes.get_unchecked_mut(id.index()) }
    }

    #[inline]
    fn level(&self, id: NodeId) -> u32 {
        self.node(id).level
    }

    fn alloc(&mut self, name: &Name) -> NodeId {
        let record = PropertyRecord {
            name: name.clone(),
            value: JsValue::Undefined,
            attrs: Attributes::data(),
            left: NIL,
            right: NIL,
            level: 1,
            next: NIL,
            prev: None,
        };
        self.live += 1;
        if let Some(id) = self.free.pop() {
            *self.node_mut(id) = record;
            id
        } else {
            debug_assert!(self.nodes.len() < u32::MAX as usize);
            let id = NodeId(self.nodes.len() as u32);
            self.nodes.push(record);
            id
        }
    }

    /// Physically destroy a record: unlink it from the declaration-order
    /// list and return its slot to the free list.
    fn release(&mut self, id: NodeId) {
        self.unlink(id);
        self.live -= 1;
        self.free.push(id);
    }

    // ------------------------------------------------------------------
    // Declaration-order list
    // ------------------------------------------------------------------

    /// Append a freshly created record at the end of the order list.
    fn link_tail(&mut self, id: NodeId) {
        if self.head.is_nil() {
            self.node_mut(id).prev = Some(NIL);
            self.head = id;
            self.tail = id;
        } else {
            let tail = self.tail;
            self.node_mut(tail).next = id;
            self.node_mut(id).prev = Some(tail);
            self.tail = id;
        }
    }

    fn unlink(&mut self, id: NodeId) {
        let next = self.node(id).next;
        let Some(prev) = self.node(id).prev else {
            return;
        };
        if prev.is_nil() {
            self.head = next;
        } else {
            self.node_mut(prev).next = next;
        }
        if next.is_nil() {
            self.tail = if prev.is_nil() { NIL } else { prev };
        } else {
            self.node_mut(next).prev = Some(prev);
        }
    }

    /// Visit live records in declaration order.
    pub fn ordered(&self) -> Ordered<'_> {
        Ordered {
            store: self,
            cursor: self.head,
        }
    }

    // ------------------------------------------------------------------
    // Tree operations
    // ------------------------------------------------------------------

    /// Find the record for `name` in this store only; never consults the
    /// prototype chain.
    pub fn lookup(&self, name: &Name) -> Option<&PropertyRecord> {
        self.lookup_id(name).map(|id| self.node(id))
    }

    pub fn lookup_mut(&mut self, name: &Name) -> Option<&mut PropertyRecord> {
        self.lookup_id(name).map(|id| self.node_mut(id))
    }

    fn lookup_id(&self, name: &Name) -> Option<NodeId> {
        let mut node = self.root;
        while !node.is_nil() {
            let rec = self.node(node);
            match name.cmp(&rec.name) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node = rec.left,
                Ordering::Greater => node = rec.right,
            }
        }
        None
    }

    /// Get or create the record for `name`.
    ///
    /// An existing record is returned unchanged. A new record is created
    /// with undefined value and permissive attributes, spliced into the
    /// tree, and appended at the end of the declaration-order list.
    pub fn insert(&mut self, name: &Name) -> &mut PropertyRecord {
        let mut result = NIL;
        let root = self.insert_rec(self.root, name, &mut result);
        self.root = root;
        if self.node(result).prev.is_none() {
            self.link_tail(result);
        }
        self.node_mut(result)
    }

    fn insert_rec(&mut self, node: NodeId, name: &Name, result: &mut NodeId) -> NodeId {
        if node.is_nil() {
            let id = self.alloc(name);
            *result = id;
            return id;
        }
        match name.cmp(&self.node(node).name) {
            Ordering::Less => {
                let left = self.node(node).left;
                let left = self.insert_rec(left, name, result);
                self.node_mut(node).left = left;
            }
            Ordering::Greater => {
                let right = self.node(node).right;
                let right = self.insert_rec(right, name, result);
                self.node_mut(node).right = right;
            }
            Ordering::Equal => {
                *result = node;
                return node;
            }
        }
        let node = self.skew(node);
        self.split(node)
    }

    /// Remove `name` from the store. Deleting an absent name is a no-op.
    pub fn delete(&mut self, name: &Name) {
        self.root = self.delete_rec(self.root, name);
    }

    fn delete_rec(&mut self, node: NodeId, name: &Name) -> NodeId {
        if node.is_nil() {
            return node;
        }
        let mut node = node;
        match name.cmp(&self.node(node).name) {
            Ordering::Less => {
                let left = self.node(node).left;
                let left = self.delete_rec(left, name);
                self.node_mut(node).left = left;
            }
            Ordering::Greater => {
                let right = self.node(node).right;
                let right = self.delete_rec(right, name);
                self.node_mut(node).right = right;
            }
            Ordering::Equal => {
                let left = self.node(node).left;
                let right = self.node(node).right;
                if left.is_nil() {
                    self.release(node);
                    node = right;
                } else if right.is_nil() {
                    self.release(node);
                    node = left;
                } else {
                    // Two children: overwrite this record's contents with
                    // its in-order successor's, keeping the record's tree
                    // position and order-list links, then delete the
                    // successor's key from the right subtree. That nested
                    // delete always hits a one-or-zero-child case.
                    let mut succ = right;
                    loop {
                        let l = self.node(succ).left;
                        if l.is_nil() {
                            break;
                        }
                        succ = l;
                    }
                    let (succ_name, succ_value, succ_attrs) = {
                        let rec = self.node(succ);
                        (rec.name.clone(), rec.value.clone(), rec.attrs)
                    };
                    {
                        let rec = self.node_mut(node);
                        rec.name = succ_name.clone();
                        rec.value = succ_value;
                        rec.attrs = succ_attrs;
                    }
                    let right = self.delete_rec(right, &succ_name);
                    self.node_mut(node).right = right;
                }
            }
        }

        if node.is_nil() {
            return node;
        }

        // A child dropped two levels below the node: pull the node's level
        // down and re-establish the horizontal-link invariants. The exact
        // skew/skew/skew/split/split sequence matters.
        let lvl = self.level(node);
        if self.level(self.node(node).left) + 1 < lvl || self.level(self.node(node).right) + 1 < lvl
        {
            let lvl = lvl - 1;
            self.node_mut(node).level = lvl;
            let right = self.node(node).right;
            if self.level(right) > lvl {
                self.node_mut(right).level = lvl;
            }
            node = self.skew(node);
            let r = self.node(node).right;
            let r = self.skew(r);
            self.node_mut(node).right = r;
            let rr = self.node(r).right;
            let rr = self.skew(rr);
            self.node_mut(r).right = rr;
            node = self.split(node);
            let r = self.node(node).right;
            let r = self.split(r);
            self.node_mut(node).right = r;
        }
        node
    }

    /// Fix a left horizontal link by rotating right.
    fn skew(&mut self, node: NodeId) -> NodeId {
        if node.is_nil() {
            return node;
        }
        let left = self.node(node).left;
        if self.level(left) == self.level(node) {
            let left_right = self.node(left).right;
            self.node_mut(node).left = left_right;
            self.node_mut(left).right = node;
            left
        } else {
            node
        }
    }

    /// Fix two consecutive right horizontal links by rotating left and
    /// promoting the middle node.
    fn split(&mut self, node: NodeId) -> NodeId {
        if node.is_nil() {
            return node;
        }
        let right = self.node(node).right;
        let right_right = self.node(right).right;
        if self.level(right_right) == self.level(node) {
            let right_left = self.node(right).left;
            self.node_mut(node).right = right_left;
            self.node_mut(right).left = node;
            self.node_mut(right).level += 1;
            right
        } else {
            node
        }
    }
}

impl Default for PropertyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PropertyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.ordered().map(|rec| (rec.name().as_str(), &rec.value)))
            .finish()
    }
}

/// Iterator over live records in declaration order.
pub struct Ordered<'a> {
    store: &'a PropertyStore,
    cursor: NodeId,
}

impl<'a> Iterator for Ordered<'a> {
    type Item = &'a PropertyRecord;

    fn next(&mut self) -> Option<&'a PropertyRecord> {
        if self.cursor.is_nil() {
            return None;
        }
        let rec = self.store.node(self.cursor);
        self.cursor = rec.next;
        Some(rec)
    }
}

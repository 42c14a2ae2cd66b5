//! Doubly linked list tracking recency order for the cache.
//!
//! The list owns every cache entry and keeps them ordered from most recently
//! used (front) to least recently used (back). Nodes live in a slot arena
//! (`Vec<Slot<T>>`) and link to their neighbours through plain `usize`
//! indices rather than pointers, with [`NIL`] as the null index. The hash
//! index of the cache stores these slot indices as its handles: an index
//! stays valid until the slot it names is released, no matter how the arena
//! vector reallocates.
//!
//! # Design
//!
//! - `head`/`tail` point at the front and back slots, `NIL` when empty.
//! - Released slots are threaded onto an internal free list (reusing the
//!   `next` link) and recycled by later insertions, so a cache that has
//!   reached its capacity stops growing the arena.
//! - A vacant slot keeps no value (`val` is `None`); every accessor checks
//!   occupancy first, so a stale index degrades to a no-op instead of
//!   touching a recycled entry.
//!
//! All operations are O(1). Nothing here is `unsafe`.

/// Null slot index. No arena can reach `usize::MAX` live slots first.
pub(crate) const NIL: usize = usize::MAX;

/// One arena slot: the stored value (if occupied) and its neighbour links.
///
/// For a vacant slot `next` doubles as the free-list link and `prev` is
/// meaningless.
struct Slot<T> {
    val: Option<T>,
    prev: usize,
    next: usize,
}

/// Recency-ordered doubly linked list backed by a slot arena.
pub(crate) struct List<T> {
    slots: Vec<Slot<T>>,
    head: usize,
    tail: usize,
    /// Head of the free list of vacant slots, `NIL` when none are vacant.
    free: usize,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list that grows its arena on demand.
    pub(crate) fn new() -> Self {
        List {
            slots: Vec::new(),
            head: NIL,
            tail: NIL,
            free: NIL,
            len: 0,
        }
    }

    /// Creates an empty list with `slots` arena slots pre-allocated.
    pub(crate) fn with_capacity(slots: usize) -> Self {
        List {
            slots: Vec::with_capacity(slots),
            head: NIL,
            tail: NIL,
            free: NIL,
            len: 0,
        }
    }

    /// Returns the number of entries in the list.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no entries.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn is_occupied(&self, idx: usize) -> bool {
        idx < self.slots.len() && self.slots[idx].val.is_some()
    }

    /// Takes a slot for `val`, recycling the free list before growing the
    /// arena. The slot is returned unlinked.
    fn alloc(&mut self, val: T) -> usize {
        match self.free {
            NIL => {
                self.slots.push(Slot {
                    val: Some(val),
                    prev: NIL,
                    next: NIL,
                });
                self.slots.len() - 1
            }
            idx => {
                self.free = self.slots[idx].next;
                let slot = &mut self.slots[idx];
                slot.val = Some(val);
                slot.prev = NIL;
                slot.next = NIL;
                idx
            }
        }
    }

    /// Empties the slot at `idx` and threads it onto the free list.
    fn release(&mut self, idx: usize) -> Option<T> {
        let free = self.free;
        let slot = self.slots.get_mut(idx)?;
        let val = slot.val.take()?;
        slot.prev = NIL;
        slot.next = free;
        self.free = idx;
        Some(val)
    }

    /// Detaches the slot at `idx` from its neighbours, fixing up
    /// `head`/`tail` when the slot sits at either end. The slot itself is
    /// left dangling; callers re-attach or release it.
    fn unlink(&mut self, idx: usize) {
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;
        if prev == NIL {
            self.head = next;
        } else {
            self.slots[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.slots[next].prev = prev;
        }
    }

    /// Links the slot at `idx` in at the front of the list.
    fn attach_front(&mut self, idx: usize) {
        self.slots[idx].prev = NIL;
        self.slots[idx].next = self.head;
        if self.head != NIL {
            self.slots[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }

    /// Inserts `val` at the front (most recently used position) and returns
    /// the slot index to use as its handle.
    pub(crate) fn push_front(&mut self, val: T) -> usize {
        let idx = self.alloc(val);
        self.attach_front(idx);
        self.len += 1;
        idx
    }

    /// Moves the entry at `idx` to the front. A stale or already-front index
    /// is a no-op.
    pub(crate) fn move_to_front(&mut self, idx: usize) {
        if idx == self.head || !self.is_occupied(idx) {
            return;
        }
        self.unlink(idx);
        self.attach_front(idx);
    }

    /// Removes the entry at `idx` and returns its value. Returns `None` for
    /// a stale index.
    pub(crate) fn remove(&mut self, idx: usize) -> Option<T> {
        if !self.is_occupied(idx) {
            return None;
        }
        self.unlink(idx);
        self.len -= 1;
        self.release(idx)
    }

    /// Removes and returns the entry at the back (least recently used
    /// position). Returns `None` if the list is empty, so asking an empty
    /// list to give up its oldest entry does nothing.
    pub(crate) fn remove_last(&mut self) -> Option<T> {
        match self.tail {
            NIL => None,
            tail => self.remove(tail),
        }
    }

    /// Returns a reference to the value at `idx`, if the slot is occupied.
    #[inline]
    pub(crate) fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx)?.val.as_ref()
    }

    /// Returns a mutable reference to the value at `idx`, if the slot is
    /// occupied.
    #[inline]
    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.slots.get_mut(idx)?.val.as_mut()
    }

    /// Replaces the value at `idx` in place and returns the old value.
    /// Position in the list is unchanged; a vacant slot is left vacant.
    pub(crate) fn update(&mut self, idx: usize, val: T) -> Option<T> {
        let slot = self.slots.get_mut(idx)?;
        if slot.val.is_none() {
            return None;
        }
        slot.val.replace(val)
    }

    /// Drops every entry and every vacant slot. The arena's allocation is
    /// kept for reuse.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.head = NIL;
        self.tail = NIL;
        self.free = NIL;
        self.len = 0;
    }

    /// Number of arena slots currently allocated, occupied or vacant.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Values from front (most recent) to back (least recent).
    #[cfg(test)]
    pub(crate) fn ordered(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut idx = self.head;
        while idx != NIL {
            let slot = &self.slots[idx];
            if let Some(val) = slot.val.as_ref() {
                out.push(val);
            }
            idx = slot.next;
        }
        out
    }

    /// Walks the list in both directions and panics if the links, the
    /// endpoints, or the length disagree with each other.
    #[cfg(test)]
    pub(crate) fn assert_valid(&self) {
        let mut forward = 0;
        let mut idx = self.head;
        let mut prev = NIL;
        while idx != NIL {
            let slot = &self.slots[idx];
            assert!(slot.val.is_some(), "linked slot {idx} is vacant");
            assert_eq!(slot.prev, prev, "back link of slot {idx} is wrong");
            forward += 1;
            assert!(forward <= self.len, "forward walk exceeds len");
            prev = idx;
            idx = slot.next;
        }
        assert_eq!(prev, self.tail, "tail does not end the forward walk");
        assert_eq!(forward, self.len, "forward walk disagrees with len");

        let mut vacant = 0;
        let mut free = self.free;
        while free != NIL {
            let slot = &self.slots[free];
            assert!(slot.val.is_none(), "free-listed slot {free} is occupied");
            vacant += 1;
            assert!(vacant <= self.slots.len(), "free list cycles");
            free = slot.next;
        }
        assert_eq!(
            forward + vacant,
            self.slots.len(),
            "some slots are neither linked nor free"
        );
    }
}

use std::mem;

/// Crate-private core of [`ElasticVec`](crate::vector::ElasticVec).
///
/// Owns a boxed slice of constructed slots. `slots.len()` is the capacity,
/// `[0, len)` is the live range; slots past `len` hold default values and are
/// valid storage but logically dead. Every capacity change funnels through
/// [`RawBuffer::relocate`], which is where the capacity invariants
/// (`len <= capacity`, `capacity >= 1`) are established.
pub(crate) struct RawBuffer<T: Default + Clone> {
    len: usize,
    slots: Box<[T]>,
}

fn blank<T: Default + Clone>(capacity: usize) -> Box<[T]> {
    vec![T::default(); capacity].into_boxed_slice()
}

impl<T: Default + Clone> RawBuffer<T> {
    pub(crate) fn new() -> Self {
        RawBuffer {
            len: 0,
            slots: blank(1),
        }
    }

    // The tail slots past `len` are filled with `value` as well, matching the
    // construction semantics of the backing storage.
    pub(crate) fn with_len(len: usize, value: T) -> Self {
        RawBuffer {
            len,
            slots: vec![value; 2 * len + 1].into_boxed_slice(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn live(&self) -> &[T] {
        &self.slots[..self.len]
    }

    pub(crate) fn live_mut(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.live().get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.live_mut().get_mut(index)
    }

    pub(crate) fn push_back(&mut self, value: T) {
        self.grow_if_full();
        self.slots[self.len] = value;
        self.len += 1;
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let value = mem::take(&mut self.slots[self.len]);
        self.shrink_if_sparse();
        Some(value)
    }

    // Writing at the tail and rotating the live range brings the new element
    // to index 0 while shifting everything else one slot toward the tail.
    pub(crate) fn push_front(&mut self, value: T) {
        self.grow_if_full();
        self.slots[self.len] = value;
        self.len += 1;
        self.slots[..self.len].rotate_right(1);
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.slots[..self.len].rotate_left(1);
        self.len -= 1;
        let value = mem::take(&mut self.slots[self.len]);
        self.shrink_if_sparse();
        Some(value)
    }

    pub(crate) fn emplace_back(&mut self, build: impl FnOnce() -> T) {
        self.grow_if_full();
        self.slots[self.len] = build();
        self.len += 1;
    }

    pub(crate) fn emplace_front(&mut self, build: impl FnOnce() -> T) {
        self.grow_if_full();
        self.slots[self.len] = build();
        self.len += 1;
        self.slots[..self.len].rotate_right(1);
    }

    pub(crate) fn find(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.live().iter().position(|slot| slot == target)
    }

    /// Transfer the buffer to the returned value in O(1), leaving `self` in
    /// the canonical empty state (`len = 0`, one fresh default slot).
    pub(crate) fn take(&mut self) -> Self {
        mem::replace(self, RawBuffer::new())
    }

    fn grow_if_full(&mut self) {
        if self.len == self.capacity() {
            // capacity >= 1 always, so a full buffer has len >= 1 and the
            // growth target below is never zero
            self.relocate(self.len * 2);
        }
    }

    fn shrink_if_sparse(&mut self) {
        if self.len < self.capacity() / 4 {
            self.relocate(self.capacity() / 2);
        }
    }

    /// The single capacity-change primitive: allocate `new_capacity` default
    /// slots, copy the live elements over element-wise, drop the old buffer.
    /// `len` is unchanged.
    fn relocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= 1, "relocation must keep at least one slot");
        debug_assert!(
            new_capacity >= self.len,
            "relocation must preserve the live range"
        );

        let mut slots = blank(new_capacity);
        for (dst, src) in slots.iter_mut().zip(self.live()) {
            *dst = src.clone();
        }
        self.slots = slots;
    }

    #[cfg(test)]
    pub(crate) fn storage_ptr(&self) -> *const T {
        self.slots.as_ptr()
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert!(self.capacity() >= 1);
        assert!(self.len <= self.capacity());
    }
}

impl<T: Default + Clone> Clone for RawBuffer<T> {
    fn clone(&self) -> Self {
        let mut slots = blank(self.capacity());
        for (dst, src) in slots.iter_mut().zip(self.live()) {
            *dst = src.clone();
        }
        RawBuffer {
            len: self.len,
            slots,
        }
    }

    // Reuses the existing buffer when the capacities already match; only a
    // capacity mismatch reallocates.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() != source.capacity() {
            self.slots = blank(source.capacity());
        }
        for (dst, src) in self.slots.iter_mut().zip(source.live()) {
            *dst = src.clone();
        }
        self.len = source.len;
    }
}

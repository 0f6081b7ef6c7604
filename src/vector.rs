//! A growable double-ended array with an explicit capacity policy.
//!
//! This is a contiguous, single-owner sequence supporting insertion and
//! removal at both ends, indexed access, and linear search. The capacity
//! policy is part of the contract: capacity never drops below one slot, a
//! full vector doubles before inserting, and a vector less than a quarter
//! full halves after removing.
//!
//! # Performance Notes
//!
//! Tail operations are amortized O(1); head operations shift the live range
//! and are O(n). Relocation copies every live element, so workloads that
//! hover around the quarter-occupancy threshold will relocate repeatedly —
//! the shrink policy is deliberate, not amortized away.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::buffer::RawBuffer;

/// A growable double-ended array with an explicit capacity policy.
///
/// An `ElasticVec` owns one contiguous buffer of `capacity` constructed
/// slots, of which the first `len` are logically live. All capacity changes
/// go through a single relocation primitive with a fixed policy:
///
/// - an empty vector still holds one allocated slot (`capacity >= 1` always)
/// - inserting into a full vector first grows it to `len * 2` slots
/// - a removal that leaves the vector less than a quarter full shrinks it
///   to `capacity / 2` slots
///
/// Because over-allocated slots are kept constructed rather than raw, the
/// element type must be [`Default`] (to fill fresh slots) and [`Clone`] (to
/// copy live elements across relocations and clones). Equality is only
/// required for [`find`](ElasticVec::find).
///
/// Cloning deep-copies into independent storage, and
/// [`clone_from`](Clone::clone_from) reuses the target's buffer whenever the
/// capacities already match. [`take`](ElasticVec::take) transfers the buffer
/// in O(1) and resets the source to the canonical empty state, so the source
/// stays fully usable.
pub struct ElasticVec<T: Default + Clone>(RawBuffer<T>);

impl<T: Default + Clone> ElasticVec<T> {
    /// Construct an empty vector with a single allocated slot.
    ///
    /// # Examples
    ///
    /// ```
    /// # use elastic_vec::vector::ElasticVec;
    /// let vec: ElasticVec<usize> = ElasticVec::new();
    /// assert!(vec.is_empty());
    /// ```
    pub fn new() -> Self {
        ElasticVec(RawBuffer::new())
    }

    /// Construct a vector of `len` copies of `value`, with capacity
    /// `2 * len + 1`. The over-allocated slots are initialized to `value`
    /// as well.
    ///
    /// # Examples
    ///
    /// ```
    /// # use elastic_vec::vector::ElasticVec;
    /// let vec = ElasticVec::with_len(3, 7);
    /// assert_eq!(vec.len(), 3);
    /// assert_eq!(vec[0], 7);
    /// assert_eq!(vec[2], 7);
    /// ```
    pub fn with_len(len: usize, value: T) -> Self {
        ElasticVec(RawBuffer::with_len(len, value))
    }

    /// Get the number of live elements.
    ///
    /// Time: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate elastic_vec;
    /// let vec = elastic_vec![1, 2, 3, 4, 5];
    /// assert_eq!(vec.len(), 5);
    /// ```
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether the vector is empty.
    ///
    /// Time: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # use elastic_vec::vector::ElasticVec;
    /// let mut vec = ElasticVec::new();
    /// assert!(vec.is_empty());
    /// vec.push_back("applesauce");
    /// assert!(!vec.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get a reference to the value at index `index`.
    /// Returns `None` if the index is out of bounds.
    ///
    /// Time: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate elastic_vec;
    /// let vec = elastic_vec![1, 2, 3, 4, 5];
    /// assert_eq!(vec.get(3), Some(&4));
    /// assert!(vec.get(1000).is_none());
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Get a mutable reference to the value at index `index`, usable for
    /// in-place mutation. Returns `None` if the index is out of bounds.
    ///
    /// Time: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate elastic_vec;
    /// let mut vec = elastic_vec![1, 2, 3];
    /// *vec.get_mut(0).unwrap() = 10;
    /// assert_eq!(vec[0], 10);
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Push one value onto the back of the vector, doubling the capacity
    /// first if the vector is full.
    ///
    /// Time: amortized O(1), O(n) when a relocation is triggered
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate elastic_vec;
    /// let mut vec = elastic_vec![];
    /// vec.push_back(0);
    /// vec.push_back(1);
    /// vec.push_back(2);
    /// assert_eq!(vec, elastic_vec![0, 1, 2]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.0.push_back(value)
    }

    /// Remove and return the last element, or `None` if the vector is
    /// empty. Shrinks the capacity by half when the removal leaves the
    /// vector less than a quarter full.
    ///
    /// Time: O(1), O(n) when a relocation is triggered
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate elastic_vec;
    /// let mut vec = elastic_vec![1, 2, 3];
    /// assert_eq!(vec.pop_back(), Some(3));
    /// assert_eq!(vec.pop_back(), Some(2));
    /// assert_eq!(vec.pop_back(), Some(1));
    /// assert!(vec.pop_back().is_none());
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        self.0.pop_back()
    }

    /// Push one value onto the front of the vector, shifting every live
    /// element one slot toward the tail. Doubles the capacity first if the
    /// vector is full.
    ///
    /// Time: O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate elastic_vec;
    /// let mut vec = elastic_vec![];
    /// vec.push_front(3);
    /// vec.push_front(2);
    /// vec.push_front(1);
    /// vec.push_front(0);
    /// assert_eq!(vec, elastic_vec![0, 1, 2, 3]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.0.push_front(value)
    }

    /// Remove and return the first element, shifting the rest one slot
    /// toward the head, or `None` if the vector is empty. Applies the same
    /// shrink rule as [`pop_back`](ElasticVec::pop_back).
    ///
    /// Time: O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate elastic_vec;
    /// let mut vec = elastic_vec![1, 2, 3];
    /// assert_eq!(vec.pop_front(), Some(1));
    /// assert_eq!(vec.pop_front(), Some(2));
    /// assert_eq!(vec.pop_front(), Some(3));
    /// assert!(vec.pop_front().is_none());
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    /// Append an element constructed in place at the back of the vector.
    ///
    /// The builder runs after any capacity growth and writes straight into
    /// the vacated slot, so no already-constructed value is copied in.
    ///
    /// Time: amortized O(1), O(n) when a relocation is triggered
    ///
    /// # Examples
    ///
    /// ```
    /// # use elastic_vec::vector::ElasticVec;
    /// let mut vec: ElasticVec<String> = ElasticVec::new();
    /// vec.emplace_back(String::default);
    /// vec.emplace_back(|| "4242".to_string());
    /// assert_eq!(vec[0], "");
    /// assert_eq!(vec[1], "4242");
    /// ```
    pub fn emplace_back(&mut self, build: impl FnOnce() -> T) {
        self.0.emplace_back(build)
    }

    /// Prepend an element constructed in place at the front of the vector,
    /// shifting every live element one slot toward the tail.
    ///
    /// Time: O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # use elastic_vec::vector::ElasticVec;
    /// let mut vec: ElasticVec<String> = ElasticVec::new();
    /// vec.emplace_front(|| "back".to_string());
    /// vec.emplace_front(|| "front".to_string());
    /// assert_eq!(vec[0], "front");
    /// assert_eq!(vec[1], "back");
    /// ```
    pub fn emplace_front(&mut self, build: impl FnOnce() -> T) {
        self.0.emplace_front(build)
    }

    /// Find the smallest index holding an element equal to `target`, or
    /// `None` if no element matches.
    ///
    /// Time: O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate elastic_vec;
    /// let vec = elastic_vec![0, 1, 2, 1];
    /// assert_eq!(vec.find(&0), Some(0));
    /// assert_eq!(vec.find(&1), Some(1));
    /// assert_eq!(vec.find(&2), Some(2));
    /// assert_eq!(vec.find(&3), None);
    /// ```
    pub fn find(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.0.find(target)
    }

    /// Transfer the vector's storage to the returned value without copying
    /// any element, resetting `self` to the canonical empty state (length
    /// zero, one fresh slot). `self` remains fully usable afterward.
    ///
    /// Equivalent to `std::mem::take`.
    ///
    /// Time: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate elastic_vec;
    /// let mut vec = elastic_vec![1, 2, 3];
    /// let other = vec.take();
    /// assert!(vec.is_empty());
    /// assert_eq!(other, elastic_vec![1, 2, 3]);
    ///
    /// vec.push_back(10);
    /// assert_eq!(vec.len(), 1);
    /// ```
    pub fn take(&mut self) -> Self {
        ElasticVec(self.0.take())
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.0.capacity()
    }

    #[cfg(test)]
    pub(crate) fn storage_ptr(&self) -> *const T {
        self.0.storage_ptr()
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        self.0.assert_invariants()
    }
}

impl<T: Default + Clone> Default for ElasticVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + Clone> Clone for ElasticVec<T> {
    fn clone(&self) -> Self {
        ElasticVec(self.0.clone())
    }

    /// Copies the live elements of `source` into `self`, reusing the
    /// existing storage when the two capacities already match and
    /// reallocating otherwise.
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0)
    }
}

impl<T: Default + Clone> From<Vec<T>> for ElasticVec<T> {
    fn from(values: Vec<T>) -> Self {
        let mut vec = ElasticVec::new();
        for value in values {
            vec.push_back(value);
        }
        vec
    }
}

/// Indexed access. Panics when `index >= len`, even if the slot is within
/// the allocated capacity.
impl<T: Default + Clone> Index<usize> for ElasticVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.0.get(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            ),
        }
    }
}

impl<T: Default + Clone> IndexMut<usize> for ElasticVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.0.get_mut(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl<T: Default + Clone + fmt::Debug> fmt::Debug for ElasticVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.live()).finish()
    }
}

impl<T: Default + Clone + PartialEq> PartialEq for ElasticVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.live() == other.0.live()
    }
}

impl<T: Default + Clone + Eq> Eq for ElasticVec<T> {}

#[cfg(test)]
mod proptests;

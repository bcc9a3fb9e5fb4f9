use std::fmt::Debug;

#[inline(always)]
fn parent_index(i: usize) -> usize {
    (i - 1) / 2
}

#[inline(always)]
fn left_child_index(i: usize) -> usize {
    2 * i + 1
}

#[inline(always)]
fn right_child_index(i: usize) -> usize {
    2 * i + 2
}

fn less<T: PartialOrd>(lhs: &T, rhs: &T) -> bool {
    lhs < rhs
}

fn greater<T: PartialOrd>(lhs: &T, rhs: &T) -> bool {
    lhs > rhs
}

/// A heap over a naturally ordered type, using a plain function pointer for ordering.
pub type OrdHeap<T> = Heap<T, fn(&T, &T) -> bool>;

/// A binary heap stored as an implicit tree over a `Vec`.
///
/// The ordering is given by `order(a, b)`, read as "`a` has higher priority
/// than `b`". With `a < b` the heap is a min-heap, with `a > b` a max-heap.
/// The root (index 0) is always an element that no other element outranks.
///
/// The children of node `i` are at `2i + 1` and `2i + 2`; its parent is at
/// `(i - 1) / 2`.
pub struct Heap<T, F> {
    items: Vec<T>,
    order: F,
}

impl<T: PartialOrd> OrdHeap<T> {
    /// An empty heap yielding the smallest element first.
    pub fn min() -> OrdHeap<T> {
        Heap {
            items: Vec::new(),
            order: less,
        }
    }

    /// An empty heap yielding the largest element first.
    pub fn max() -> OrdHeap<T> {
        Heap {
            items: Vec::new(),
            order: greater,
        }
    }
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(order: F) -> Heap<T, F> {
        Heap {
            items: Vec::new(),
            order,
        }
    }

    pub fn with_capacity(capacity: usize, order: F) -> Heap<T, F> {
        Heap {
            items: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Build a heap from arbitrary items in linear time.
    pub fn from_vec(items: Vec<T>, order: F) -> Heap<T, F> {
        let mut heap = Heap { items, order };
        heap.heapify();
        heap
    }

    /// True if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of elements in the heap.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The highest priority element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Items in storage order, which is unspecified beyond the heap property.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// The backing storage, root first.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Consume the heap, returning its items with the highest priority first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let n = self.items.len();
        for end in (1..n).rev() {
            self.items.swap(0, end);
            self.shift_down(0, end);
        }
        self.items.reverse();
        self.items
    }

    pub fn insert(&mut self, value: T) {
        self.items.push(value);
        let last = self.items.len() - 1;
        self.shift_up(last);
    }

    /// Insert each value in turn. This does not re-heapify in bulk.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }

    /// Remove and return the highest priority element.
    pub fn remove(&mut self) -> Option<T> {
        match self.items.len() {
            0 => None,
            1 => self.items.pop(),
            _ => {
                let value = self.items.swap_remove(0);
                let n = self.items.len();
                self.shift_down(0, n);
                Some(value)
            }
        }
    }

    /// Remove the element stored at `index`, or `None` if out of range.
    ///
    /// The last element is moved into the hole. It may belong above or
    /// below that position, so it is shifted up first, and only shifted
    /// down if it did not move.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let n = self.items.len();
        if index >= n {
            return None;
        }
        if index == n - 1 {
            return self.items.pop();
        }
        let value = self.items.swap_remove(index);
        if self.shift_up(index) == index {
            let n = self.items.len();
            self.shift_down(index, n);
        }
        Some(value)
    }

    /// Remove the element at `index` and insert `value` in its place.
    ///
    /// This is a full removal followed by a fresh insertion, not a key
    /// update. Returns the removed element. If `index` is out of range the
    /// heap is left untouched and `value` is dropped.
    pub fn replace(&mut self, index: usize, value: T) -> Option<T> {
        let removed = self.remove_at(index)?;
        self.insert(value);
        Some(removed)
    }

    /// Check that no child outranks its parent.
    pub fn is_valid(&self) -> bool {
        (1..self.items.len())
            .all(|i| !(self.order)(&self.items[i], &self.items[parent_index(i)]))
    }

    fn heapify(&mut self) {
        let n = self.items.len();
        log::trace!("heapifying {} items", n);
        for i in (0..n / 2).rev() {
            self.shift_down(i, n);
        }
        debug_assert!(self.is_valid());
    }

    /// Move the element at `index` towards the root while it outranks its
    /// parent. Returns its final position.
    fn shift_up(&mut self, index: usize) -> usize {
        let mut child = index;
        while child > 0 {
            let parent = parent_index(child);
            if (self.order)(&self.items[child], &self.items[parent]) {
                self.items.swap(child, parent);
                child = parent;
            } else {
                break;
            }
        }
        child
    }

    /// Move the element at `index` away from the root while a child below
    /// `limit` outranks it. Returns its final position.
    fn shift_down(&mut self, index: usize, limit: usize) -> usize {
        let mut parent = index;
        loop {
            let left = left_child_index(parent);
            let right = right_child_index(parent);
            let mut first = parent;
            if left < limit && (self.order)(&self.items[left], &self.items[first]) {
                first = left;
            }
            if right < limit && (self.order)(&self.items[right], &self.items[first]) {
                first = right;
            }
            if first == parent {
                return parent;
            }
            self.items.swap(parent, first);
            parent = first;
        }
    }
}

impl<T, F> Heap<T, F>
where
    T: PartialEq,
    F: Fn(&T, &T) -> bool,
{
    /// Position of the first element equal to `value`, by linear scan.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        let index = self.index_of(value)?;
        self.remove_at(index)
    }
}

impl<T, F> Extend<T> for Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T: Clone, F: Clone> Clone for Heap<T, F> {
    fn clone(&self) -> Self {
        Heap {
            items: self.items.clone(),
            order: self.order.clone(),
        }
    }
}

impl<T: Debug, F> Debug for Heap<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heap").field("items", &self.items).finish()
    }
}

//! crates/history/src/buffer.rs
//! Bounded FIFO history with upward propagation along fork links.

use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::record::Record;

type Slots = VecDeque<Arc<Record>>;

/// Bounded, insertion-ordered store of [`Record`] handles.
///
/// A buffer evicts its oldest record when an append would exceed the
/// capacity. Buffers created through [`fork`](Self::fork) forward every
/// appended record to their parent, which applies its own capacity, and so on
/// up to the root.
///
/// # Locking
///
/// Each buffer guards its records with its own mutex. An append locks the
/// receiving buffer and then walks towards the root hand over hand: the lock
/// on a buffer is released only after its parent's lock is held. Locks are
/// therefore always acquired from descendant to ancestor, which cannot form a
/// cycle in a tree, and records from one buffer reach every ancestor in the
/// order that buffer stored them.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use std::sync::Arc;
/// use history::{Category, HistoryBuffer, Record};
///
/// let root = HistoryBuffer::new(NonZeroUsize::new(4).unwrap());
/// let small = root.fork(NonZeroUsize::new(1));
///
/// small.append(Arc::new(Record::new(Category::Plain, "first", None, &[])));
/// small.append(Arc::new(Record::new(Category::Plain, "second", None, &[])));
///
/// assert_eq!(small.len(), 1);
/// assert_eq!(root.len(), 2);
/// ```
pub struct HistoryBuffer {
    capacity: NonZeroUsize,
    records: Mutex<Slots>,
    parent: Option<Arc<HistoryBuffer>>,
}

impl HistoryBuffer {
    /// Creates a root buffer holding at most `capacity` records.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Arc<Self> {
        Arc::new(Self::with_parent(capacity, None))
    }

    fn with_parent(capacity: NonZeroUsize, parent: Option<Arc<Self>>) -> Self {
        Self {
            capacity,
            records: Mutex::new(VecDeque::with_capacity(capacity.get())),
            parent,
        }
    }

    /// Creates a child buffer linked under `self`.
    ///
    /// The child starts empty. Its capacity defaults to the parent's and may be
    /// smaller or larger; each buffer evicts independently.
    #[must_use]
    pub fn fork(self: &Arc<Self>, capacity: Option<NonZeroUsize>) -> Arc<Self> {
        let capacity = capacity.unwrap_or(self.capacity);
        Arc::new(Self::with_parent(capacity, Some(Arc::clone(self))))
    }

    /// Appends `record` at the tail and forwards the same handle to every
    /// ancestor.
    ///
    /// When the buffer is full the oldest record is evicted first, in this
    /// buffer and independently in each ancestor.
    pub fn append(&self, record: Arc<Record>) {
        let mut held = self.lock_records();
        self.push_bounded(&mut held, Arc::clone(&record));

        let ancestors = self.ancestors();
        for ancestor in &ancestors {
            let mut next = ancestor.lock_records();
            ancestor.push_bounded(&mut next, Arc::clone(&record));
            held = next;
        }
        drop(held);
    }

    /// Returns a detached copy of the stored records, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<Record>> {
        self.lock_records().iter().cloned().collect()
    }

    /// Maximum number of records retained.
    #[must_use]
    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Number of records currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_records().len()
    }

    /// Reports whether the buffer holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_records().is_empty()
    }

    /// Returns the parent buffer, if this buffer was forked.
    #[must_use]
    pub fn parent(&self) -> Option<&Arc<Self>> {
        self.parent.as_ref()
    }

    /// Number of ancestors between this buffer and its root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.ancestors().len()
    }

    fn ancestors(&self) -> Vec<&Self> {
        let mut chain = Vec::new();
        let mut next = self.parent.as_deref();
        while let Some(buffer) = next {
            chain.push(buffer);
            next = buffer.parent.as_deref();
        }
        chain
    }

    fn push_bounded(&self, slots: &mut Slots, record: Arc<Record>) {
        if slots.len() == self.capacity.get() {
            slots.pop_front();
            tracing::trace!(
                target: "logtail::history",
                capacity = self.capacity.get(),
                "evicted oldest record"
            );
        }
        slots.push_back(record);
    }

    fn lock_records(&self) -> MutexGuard<'_, Slots> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for HistoryBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryBuffer")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("forked", &self.parent.is_some())
            .finish()
    }
}

impl Drop for HistoryBuffer {
    // Unlinks the chain one level at a time so dropping a deep fork chain does
    // not recurse once per ancestor.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(parent) = next {
            next = Arc::into_inner(parent).and_then(|mut buffer| buffer.parent.take());
        }
    }
}

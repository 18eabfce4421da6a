//! Stateful circular sequence that remembers where it last stopped.
//!
//! Elements live in an arena of slots linked into a ring by slot index.
//! The cursor is the slot the next circulation starts counting from.
//! Removing an element vacates its slot and relinks its neighbours, so
//! indices held by the ring never move and never dangle.

use super::error::CircleError;
use super::visit::Visit;
use tracing::{debug, instrument};

/// One arena slot. A slot is live while it holds a value.
#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    pub(crate) value: Option<T>,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

/// Ordered circle of elements with a persisted traversal cursor.
///
/// Counting wraps past the last live element back to the first, as many
/// times as needed. The cursor survives across calls, so each circulation
/// resumes right after the element the previous one visited.
#[derive(Clone)]
pub struct CircularSequence<T> {
    pub(crate) slots: Vec<Slot<T>>,
    pub(crate) head: Option<usize>,
    pub(crate) cursor: Option<usize>,
    pub(crate) len: usize,
}

impl<T> CircularSequence<T> {
    /// Creates a circle holding the given elements in order.
    ///
    /// The first circulation with `k = 1` lands on the first element.
    /// An empty input yields an empty circle.
    #[instrument(skip(elements))]
    pub fn new(elements: impl IntoIterator<Item = T>) -> Self {
        let values: Vec<T> = elements.into_iter().collect();
        let slots = Vec::with_capacity(values.len());
        Self::assemble(values.into_iter(), slots)
    }

    /// Creates a circle from an exactly-sized source, failing instead of
    /// panicking when the slots cannot be allocated.
    ///
    /// # Errors
    ///
    /// Returns [`CircleError::CapacityExceeded`] if room for every element
    /// cannot be reserved.
    #[instrument(skip(elements))]
    pub fn try_new<I>(elements: I) -> Result<Self, CircleError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let elements = elements.into_iter();
        let len = elements.len();

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| CircleError::CapacityExceeded(len))?;
        Ok(Self::assemble(elements, slots))
    }

    /// Links `elements` into a ring stored in the pre-sized `slots`.
    fn assemble<I>(elements: I, mut slots: Vec<Slot<T>>) -> Self
    where
        I: ExactSizeIterator<Item = T>,
    {
        let len = elements.len();
        slots.extend(elements.enumerate().map(|(index, value)| Slot {
            value: Some(value),
            prev: (index + len - 1) % len,
            next: (index + 1) % len,
        }));

        let start = (len > 0).then_some(0);
        debug!(len, "Circle created");

        Self {
            slots,
            head: start,
            cursor: start,
            len,
        }
    }

    /// Returns true if no elements are left.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the only element, without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`CircleError::ExpectedSingleton`] unless exactly one element is left.
    pub fn one_and_only(&self) -> Result<&T, CircleError> {
        if self.len != 1 {
            return Err(CircleError::ExpectedSingleton(self.len));
        }

        let head = self.head.ok_or(CircleError::Empty)?;
        self.value_at(head)
    }

    /// Returns the element the next circulation counts as 1.
    pub fn cursor_value(&self) -> Option<&T> {
        self.cursor
            .and_then(|slot| self.slots.get(slot))
            .and_then(|slot| slot.value.as_ref())
    }

    /// Iterates the live elements in their original relative order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            sequence: self,
            at: self.head,
            remaining: self.len,
        }
    }

    /// Counts `k` elements from the cursor and hands the k-th to `on_visit`.
    ///
    /// The visitor runs exactly once, and only when the circle is non-empty.
    /// It may call [`Visit::remove`] to evict the element. Either way the
    /// cursor then rests on the element following the visited one.
    ///
    /// Returns the visited value, or `None` for an empty circle.
    ///
    /// # Errors
    ///
    /// Returns [`CircleError::InvalidStepCount`] if `k < 1`. Nothing is
    /// mutated in that case.
    #[instrument(skip(self, on_visit), fields(len = self.len))]
    pub fn circulate<F>(&mut self, k: i64, on_visit: F) -> Result<Option<T>, CircleError>
    where
        F: FnOnce(&mut Visit, &T),
        T: Clone,
    {
        let Some((current, removed)) = self.visit_kth(k, on_visit)? else {
            return Ok(None);
        };

        if removed {
            return self.unlink(current).map(Some);
        }

        let value = self.value_at(current)?.clone();
        self.cursor = Some(self.slots[current].next);
        Ok(Some(value))
    }

    /// Counts `k` elements from the cursor and removes the k-th.
    ///
    /// # Errors
    ///
    /// Returns [`CircleError::InvalidStepCount`] if `k < 1` and
    /// [`CircleError::Empty`] if there is nothing left to remove.
    #[instrument(skip(self), fields(len = self.len))]
    pub fn circulate_and_remove(&mut self, k: i64) -> Result<T, CircleError> {
        match self.visit_kth(k, |visit, _| visit.remove())? {
            Some((current, _)) => self.unlink(current),
            None => Err(CircleError::Empty),
        }
    }

    /// Locates the k-th element from the cursor and runs the visitor on it.
    ///
    /// Returns the visited slot and whether removal was requested.
    fn visit_kth<F>(&mut self, k: i64, on_visit: F) -> Result<Option<(usize, bool)>, CircleError>
    where
        F: FnOnce(&mut Visit, &T),
    {
        if k < 1 {
            return Err(CircleError::InvalidStepCount(k));
        }

        let Some(start) = self.cursor else {
            debug!(k, "Circulating an empty circle");
            return Ok(None);
        };

        // Counting k elements from the cursor lands k - 1 links further on.
        // Full laps land back where they started, so only the remainder matters.
        let offset = (k - 1).rem_euclid(self.len as i64) as usize;
        let current = self.advance(start, offset);

        let mut visit = Visit::new();
        on_visit(&mut visit, self.value_at(current)?);

        debug!(k, slot = current, removed = visit.is_removal_requested(), "Visited element");
        Ok(Some((current, visit.is_removal_requested())))
    }

    fn advance(&self, from: usize, steps: usize) -> usize {
        (0..steps).fold(from, |at, _| self.slots[at].next)
    }

    fn value_at(&self, slot: usize) -> Result<&T, CircleError> {
        self.slots
            .get(slot)
            .and_then(|slot| slot.value.as_ref())
            .ok_or_else(|| CircleError::InvariantViolation(format!("slot {} is not live", slot)))
    }

    /// Takes the value out of a live slot and closes the ring around it.
    fn unlink(&mut self, slot: usize) -> Result<T, CircleError> {
        let value = self
            .slots
            .get_mut(slot)
            .and_then(|slot| slot.value.take())
            .ok_or_else(|| CircleError::InvariantViolation(format!("slot {} is already vacant", slot)))?;

        let Slot { prev, next, .. } = self.slots[slot];
        self.len -= 1;

        if self.len == 0 {
            self.head = None;
            self.cursor = None;
        } else {
            self.slots[prev].next = next;
            self.slots[next].prev = prev;
            if self.head == Some(slot) {
                self.head = Some(next);
            }
            self.cursor = Some(next);
        }

        Ok(value)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for CircularSequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircularSequence")
            .field("elements", &self.iter().collect::<Vec<_>>())
            .field("cursor", &self.cursor_value())
            .finish()
    }
}

impl<T> From<Vec<T>> for CircularSequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T> FromIterator<T> for CircularSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, T> IntoIterator for &'a CircularSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the live elements of a [`CircularSequence`], head first.
#[derive(Debug)]
pub struct Iter<'a, T> {
    sequence: &'a CircularSequence<T>,
    at: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slot = self.sequence.slots.get(self.at?)?;
        self.at = Some(slot.next);
        self.remaining -= 1;
        slot.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

//! Index-addressed result storage for batch runners.

/// Result slots pre-sized to the number of tasks.
///
/// Slots are filled out of order as tasks complete and read back in index
/// order. A slot is filled at most once; `filled()` counts fills, not
/// present values, since a task may finish without a value.
#[derive(Debug)]
pub struct ResultSlots<T> {
    values: Vec<Option<T>>,
    set: Vec<bool>,
    filled: usize,
}

impl<T> ResultSlots<T> {
    /// Create `len` empty slots.
    pub fn new(len: usize) -> Self {
        let mut values = Vec::with_capacity(len);
        values.resize_with(len, || None);
        Self {
            values,
            set: vec![false; len],
            filled: 0,
        }
    }

    /// Fill slot `index`. Returns `false` and leaves the slot untouched if it
    /// was already filled or is out of range.
    pub fn fill(&mut self, index: usize, value: Option<T>) -> bool {
        match self.set.get_mut(index) {
            Some(set) if !*set => {
                *set = true;
                self.values[index] = value;
                self.filled += 1;
                true
            }
            Some(_) => {
                tracing::error!(index, "result slot already filled; keeping first value");
                false
            }
            None => {
                tracing::error!(index, len = self.values.len(), "result slot out of range");
                false
            }
        }
    }

    /// Number of slots filled so far.
    pub const fn filled(&self) -> usize {
        self.filled
    }

    /// Total number of slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when there are no slots at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True once every slot has been filled.
    pub fn is_complete(&self) -> bool {
        self.filled == self.values.len()
    }

    /// Ordered values, consuming the slots.
    pub fn into_vec(self) -> Vec<Option<T>> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_order_fill() {
        let mut slots = ResultSlots::new(3);
        assert!(slots.fill(2, Some("C")));
        assert!(slots.fill(0, Some("A")));
        assert!(!slots.is_complete());
        assert!(slots.fill(1, None));
        assert!(slots.is_complete());
        assert_eq!(slots.into_vec(), vec![Some("A"), None, Some("C")]);
    }

    #[test]
    fn test_slot_never_overwritten() {
        let mut slots = ResultSlots::new(2);
        assert!(slots.fill(0, Some(1)));
        assert!(!slots.fill(0, Some(2)));
        assert!(!slots.fill(5, Some(3)));
        assert_eq!(slots.filled(), 1);
        assert_eq!(slots.into_vec(), vec![Some(1), None]);
    }

    #[test]
    fn test_empty_slots_are_complete() {
        let slots: ResultSlots<u8> = ResultSlots::new(0);
        assert!(slots.is_empty());
        assert!(slots.is_complete());
    }
}

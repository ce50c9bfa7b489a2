//! Fixed-Capacity Sample Ring

/// Circular store of the `N` most recent samples.
///
/// All slots exist from construction and start at `0.0`. Writing past the
/// capacity overwrites the oldest slot.
#[derive(Debug, Clone)]
pub struct SampleRing<const N: usize> {
    /// Pre-allocated storage
    slots: [f64; N],
    /// Next slot to overwrite
    cursor: usize,
    /// Total samples written (for statistics)
    total_written: u64,
}

impl<const N: usize> SampleRing<N> {
    const NON_EMPTY: () = assert!(N > 0, "SampleRing capacity must be > 0");

    /// Create a zero-filled ring
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self {
            slots: [0.0; N],
            cursor: 0,
            total_written: 0,
        }
    }

    /// Store a sample at the cursor and advance it (overwrites oldest if full)
    pub fn push(&mut self, value: f64) {
        self.slots[self.cursor] = value;
        self.cursor = (self.cursor + 1) % N;
        self.total_written += 1;
    }

    /// Copy every slot into `dest`, oldest first.
    ///
    /// The oldest slot is the one the cursor will overwrite next, so slots
    /// never written yet appear as leading zeros.
    pub fn copy_into(&self, dest: &mut [f64; N]) {
        let (newer, older) = self.slots.split_at(self.cursor);
        dest[..older.len()].copy_from_slice(older);
        dest[older.len()..].copy_from_slice(newer);
    }

    /// Get total samples written since construction
    pub fn total_written(&self) -> u64 {
        self.total_written
    }
}

impl<const N: usize> Default for SampleRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

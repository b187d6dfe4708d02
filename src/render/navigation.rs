//! Active-index state machine for steppers and card carousels.
//!
//! Mirrors the behavior of the emitted client script so it can be tested on
//! the Rust side. Exactly one index is active at any time.
//!
//! The two components disagree at the ends of the list: the stepper clamps
//! while the card carousel wraps around. Both behaviors are kept.

/// What happens when navigation runs past either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Stay on the first/last item (stepper).
    Clamp,
    /// Continue from the other end (card carousel).
    Wrap,
}

/// Currently active item among `len` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveIndex {
    index: usize,
    len: usize,
    mode: NavigationMode,
}

impl ActiveIndex {
    /// Starts on index 0. Returns `None` for an empty list.
    #[must_use]
    pub const fn new(len: usize, mode: NavigationMode) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Self {
                index: 0,
                len,
                mode,
            })
        }
    }

    /// Current index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; an `ActiveIndex` is never built for an empty list.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether item `i` is the active one.
    #[must_use]
    pub const fn is_active(&self, i: usize) -> bool {
        self.index == i
    }

    /// Activate item `i`. Out-of-range indices are ignored.
    pub const fn activate(&mut self, i: usize) -> bool {
        if i < self.len {
            self.index = i;
            true
        } else {
            false
        }
    }

    /// Move to the next item.
    pub const fn next(&mut self) {
        self.index = match self.mode {
            NavigationMode::Clamp if self.index + 1 >= self.len => self.index,
            NavigationMode::Wrap if self.index + 1 >= self.len => 0,
            _ => self.index + 1,
        };
    }

    /// Move to the previous item.
    pub const fn prev(&mut self) {
        self.index = match self.mode {
            NavigationMode::Clamp if self.index == 0 => 0,
            NavigationMode::Wrap if self.index == 0 => self.len - 1,
            _ => self.index - 1,
        };
    }

    /// Jump to the first item.
    pub const fn first(&mut self) {
        self.index = 0;
    }

    /// Jump to the last item.
    pub const fn last(&mut self) {
        self.index = self.len - 1;
    }

    /// Progress through the list, `index / (len - 1)`, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.len <= 1 {
            0.0
        } else {
            self.index as f64 / (self.len - 1) as f64
        }
    }

    /// Index of the item before `i`, wrapping.
    #[must_use]
    pub const fn wrapped_prev(i: usize, len: usize) -> usize {
        if i == 0 { len - 1 } else { i - 1 }
    }

    /// Index of the item after `i`, wrapping.
    #[must_use]
    pub const fn wrapped_next(i: usize, len: usize) -> usize {
        if i + 1 >= len { 0 } else { i + 1 }
    }
}

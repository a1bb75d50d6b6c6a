//! Dealing configuration options.

/// Number of cards each hand receives in a standard deal.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Configuration options for dealing.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use unodeck::DealOptions;
///
/// let options = DealOptions::default().with_hand_size(5);
/// assert_eq!(options.hand_size, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealOptions {
    /// Number of dealing rounds, i.e. the target size of each hand.
    pub hand_size: usize,
}

impl Default for DealOptions {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

impl DealOptions {
    /// Sets the number of cards dealt to each hand.
    ///
    /// # Example
    ///
    /// ```
    /// use unodeck::DealOptions;
    ///
    /// let options = DealOptions::default().with_hand_size(10);
    /// assert_eq!(options.hand_size, 10);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }
}

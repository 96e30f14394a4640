/// Fan-in bookkeeping for one directory traversal.
///
/// A traversal is complete once the listing has ended and every file run it
/// started has finished. Both events check completion, so a directory whose
/// listing yields nothing completes as soon as the listing ends.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompletionTracker {
    discovered: usize,
    finished: usize,
    listing_done: bool,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child_discovered(&mut self) {
        self.discovered += 1;
    }

    /// Record a finished file run. Returns whether the traversal is now complete.
    pub fn child_finished(&mut self) -> bool {
        debug_assert!(self.finished < self.discovered);
        self.finished += 1;
        self.is_complete()
    }

    /// Record the end of the listing. Returns whether the traversal is now complete.
    pub fn listing_finished(&mut self) -> bool {
        self.listing_done = true;
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.listing_done && self.finished == self.discovered
    }

    pub fn is_listing_done(&self) -> bool {
        self.listing_done
    }

    pub fn discovered(&self) -> usize {
        self.discovered
    }

    pub fn in_flight(&self) -> usize {
        self.discovered - self.finished
    }
}

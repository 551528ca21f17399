//! Ascending day iteration over an inclusive range.

use std::iter::FusedIterator;

use chrono::NaiveDate;

/// Lazy iterator over every date in an inclusive range, in ascending order.
///
/// Created by [`DateRange::iter`](crate::DateRange::iter). Advancing uses the
/// real Gregorian calendar, so month ends, leap days and year boundaries are
/// handled by `chrono`.
#[derive(Debug, Clone)]
pub struct DateIter {
    front: NaiveDate,
    back: NaiveDate,
    exhausted: bool,
}

impl DateIter {
    /// Callers guarantee `front <= back`.
    pub(crate) fn new(front: NaiveDate, back: NaiveDate) -> Self {
        Self {
            front,
            back,
            exhausted: false,
        }
    }

    fn remaining(&self) -> usize {
        if self.exhausted {
            0
        } else {
            (self.back - self.front).num_days() as usize + 1
        }
    }
}

impl Iterator for DateIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.exhausted {
            return None;
        }
        let current = self.front;
        if current == self.back {
            self.exhausted = true;
        } else {
            match current.succ_opt() {
                Some(next) => self.front = next,
                None => self.exhausted = true,
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl DoubleEndedIterator for DateIter {
    fn next_back(&mut self) -> Option<NaiveDate> {
        if self.exhausted {
            return None;
        }
        let current = self.back;
        if current == self.front {
            self.exhausted = true;
        } else {
            match current.pred_opt() {
                Some(prev) => self.back = prev,
                None => self.exhausted = true,
            }
        }
        Some(current)
    }
}

impl ExactSizeIterator for DateIter {}

impl FusedIterator for DateIter {}

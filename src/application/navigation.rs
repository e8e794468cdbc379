// SPDX-License-Identifier: MPL-2.0
//! Circular navigation over an image list.
//!
//! Indices form a cycle of size `len`. Stepping past either end wraps to the
//! opposite end, and a list of one image loops onto itself. The functions
//! here are pure; the gallery controller turns a [`Step`] into events.

/// Result of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Index of the image to show.
    pub index: usize,
    /// The resulting index is the first of the list.
    pub at_first: bool,
    /// The resulting index is the last of the list.
    pub at_last: bool,
}

impl Step {
    fn to(index: usize, len: usize) -> Self {
        Self {
            index,
            at_first: index == 0,
            at_last: index == len - 1,
        }
    }
}

/// Computes the step after `current`.
///
/// Returns `None` for an empty list. A `current` that is the last index, or
/// is out of range, wraps to `0`.
#[must_use]
pub fn next_index(current: usize, len: usize) -> Option<Step> {
    if len == 0 {
        return None;
    }
    let index = if current < len - 1 { current + 1 } else { 0 };
    Some(Step::to(index, len))
}

/// Computes the step before `current`.
///
/// Returns `None` for an empty list. A `current` of `0`, or one that is out
/// of range, wraps to the last index.
#[must_use]
pub fn previous_index(current: usize, len: usize) -> Option<Step> {
    if len == 0 {
        return None;
    }
    let index = if current > 0 && current <= len - 1 {
        current - 1
    } else {
        len - 1
    };
    Some(Step::to(index, len))
}

/// Navigation state snapshot for the rendering layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Current position in the list (0-indexed), if an image was shown.
    pub current_index: Option<usize>,
    /// Total number of images.
    pub total_count: usize,
    /// Whether the current image is the first of the list.
    pub at_first: bool,
    /// Whether the current image is the last of the list.
    pub at_last: bool,
}

impl NavigationInfo {
    #[must_use]
    pub fn new(current_index: Option<usize>, total_count: usize) -> Self {
        let current_index = current_index.filter(|index| *index < total_count);
        Self {
            current_index,
            total_count,
            at_first: current_index == Some(0),
            at_last: total_count > 0 && current_index == Some(total_count - 1),
        }
    }

    /// Arrows are only worth showing when there is somewhere else to go.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.total_count > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_advances_inside_the_list() {
        assert_eq!(next_index(0, 5).map(|s| s.index), Some(1));
        assert_eq!(next_index(2, 5).map(|s| s.index), Some(3));
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let step = next_index(4, 5).expect("non-empty list");
        assert_eq!(step.index, 0);
        assert!(step.at_first);
        assert!(!step.at_last);
    }

    #[test]
    fn next_reaching_last_flags_last() {
        let step = next_index(3, 5).expect("non-empty list");
        assert_eq!(step.index, 4);
        assert!(step.at_last);
        assert!(!step.at_first);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let step = previous_index(0, 5).expect("non-empty list");
        assert_eq!(step.index, 4);
        assert!(step.at_last);
    }

    #[test]
    fn previous_reaching_first_flags_first() {
        let step = previous_index(1, 5).expect("non-empty list");
        assert_eq!(step.index, 0);
        assert!(step.at_first);
    }

    #[test]
    fn out_of_range_current_wraps() {
        assert_eq!(next_index(17, 5).map(|s| s.index), Some(0));
        assert_eq!(previous_index(17, 5).map(|s| s.index), Some(4));
    }

    #[test]
    fn single_image_loops_onto_itself_with_both_flags() {
        for step in [next_index(0, 1), previous_index(0, 1)] {
            let step = step.expect("non-empty list");
            assert_eq!(step.index, 0);
            assert!(step.at_first);
            assert!(step.at_last);
        }
    }

    #[test]
    fn empty_list_has_no_step() {
        assert_eq!(next_index(0, 0), None);
        assert_eq!(previous_index(0, 0), None);
    }

    #[test]
    fn len_applications_return_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let mut forward = start;
                let mut backward = start;
                for _ in 0..len {
                    forward = next_index(forward, len).expect("non-empty").index;
                    backward = previous_index(backward, len).expect("non-empty").index;
                }
                assert_eq!(forward, start, "forward cycle, len {len}");
                assert_eq!(backward, start, "backward cycle, len {len}");
            }
        }
    }

    #[test]
    fn navigation_info_flags_boundaries() {
        let info = NavigationInfo::new(Some(0), 3);
        assert!(info.at_first);
        assert!(!info.at_last);
        assert!(info.can_navigate());

        let info = NavigationInfo::new(Some(2), 3);
        assert!(info.at_last);

        let single = NavigationInfo::new(Some(0), 1);
        assert!(single.at_first && single.at_last);
        assert!(!single.can_navigate());
    }

    #[test]
    fn navigation_info_drops_stale_index() {
        let info = NavigationInfo::new(Some(5), 2);
        assert_eq!(info.current_index, None);
        assert!(!info.at_first);
        assert!(!info.at_last);
    }
}

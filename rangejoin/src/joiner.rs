// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::{Display, Write}, ops::Range};

use crate::{Constants, JoinError};

/// Joins the elements in `start_index..end_index` of `sequence`, putting
/// `separator` between every two positions. Absent elements render as
/// nothing, but their position still gets its separator, so
/// `[a, None, c]` becomes `a,,c`.
///
/// Returns [`None`] when either the sequence or the separator is absent. An
/// empty or inverted range yields an empty string without looking at the
/// sequence at all.
///
/// # Panics
/// When the range is non-empty and reaches past the end of `sequence`. Use
/// [`try_join`] to get a [`JoinError`] instead.
#[must_use]
pub fn join<T: Display>(
    sequence: Option<&[Option<T>]>,
    separator: Option<&str>,
    start_index: usize,
    end_index: usize,
) -> Option<String> {
    let sequence = sequence?;
    let separator = separator?;

    Some(join_present(sequence, separator, start_index..end_index))
}

/// Like [`join`], but reports an out-of-range end instead of panicking.
pub fn try_join<T: Display>(
    sequence: Option<&[Option<T>]>,
    separator: Option<&str>,
    start_index: usize,
    end_index: usize,
) -> Result<Option<String>, JoinError> {
    let (Some(sequence), Some(separator)) = (sequence, separator) else {
        return Ok(None);
    };

    let range = start_index..end_index;
    check_bounds(sequence.len(), &range)?;

    Ok(Some(join_present(sequence, separator, range)))
}

/// Joins every element of `sequence`.
#[must_use]
pub fn join_all<T: Display>(sequence: Option<&[Option<T>]>, separator: Option<&str>) -> Option<String> {
    let len = sequence.map_or(0, <[_]>::len);
    join(sequence, separator, 0, len)
}

pub(crate) fn check_bounds(len: usize, range: &Range<usize>) -> Result<(), JoinError> {
    if range.is_empty() || range.end <= len {
        return Ok(());
    }

    let index = range.start.max(len);
    log::debug!("Rejecting join range {range:?} over {len} element(s), first bad index is {index}");
    Err(JoinError::IndexOutOfBounds { index, len })
}

pub(crate) fn join_present<T: Display>(sequence: &[Option<T>], separator: &str, range: Range<usize>) -> String {
    if range.is_empty() {
        return String::new();
    }

    let start = range.start;
    let capacity = range.len().saturating_mul(Constants::CAPACITY_HINT_PER_ELEMENT);
    let mut buf = String::with_capacity(capacity);

    for i in range {
        if i > start {
            buf += separator;
        }

        if let Some(element) = &sequence[i] {
            // Formatting into a `String` can't fail.
            _ = write!(buf, "{element}");
        }
    }

    log::trace!("Joined {} byte(s) starting at index {start}", buf.len());
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case(&[Some("a"), Some("b"), Some("c")], ",", 0, 3, "a,b,c")]
    #[case(&[Some("a"), None, Some("c")], ",", 0, 3, "a,,c")]
    #[case(&[Some("a"), Some("b"), Some("c")], ",", 1, 1, "")]
    #[case(&[Some("a"), Some("b"), Some("c")], "-", 1, 3, "b-c")]
    #[case(&[Some("a"), Some("b"), Some("c")], "", 0, 3, "abc")]
    #[case(&[None, None], ";", 0, 2, ";")]
    #[case(&[Some("a"), None], ",", 0, 2, "a,")]
    #[case(&[None, Some("b")], ",", 0, 2, ",b")]
    #[case(&[Some("only")], " | ", 0, 1, "only")]
    fn join_strings(
        #[case] sequence: &[Option<&str>],
        #[case] separator: &str,
        #[case] start_index: usize,
        #[case] end_index: usize,
        #[case] expected: &str,
    ) {
        let actual = join(Some(sequence), Some(separator), start_index, end_index);
        assert_eq!(actual.as_deref(), Some(expected));
    }

    #[test]
    fn absent_sequence() {
        assert_eq!(join::<&str>(None, Some(","), 0, 0), None);
    }

    #[test]
    fn absent_separator() {
        assert_eq!(join(Some(&[Some("a")][..]), None, 0, 1), None);
    }

    #[test]
    fn absent_inputs_win_over_bad_range() {
        assert_eq!(join::<&str>(None, Some(","), 0, 10), None);
        assert_eq!(join(Some(&[Some("a")][..]), None, 0, 10), None);
    }

    #[rstest]
    #[case(3, 1)]
    #[case(5, 5)]
    #[case(100, 7)]
    fn empty_or_inverted_range_skips_bounds(#[case] start_index: usize, #[case] end_index: usize) {
        let sequence = [Some("a")];
        assert_eq!(join(Some(&sequence[..]), Some(","), start_index, end_index).as_deref(), Some(""));
        assert_eq!(try_join(Some(&sequence[..]), Some(","), start_index, end_index), Ok(Some(String::new())));
    }

    #[test]
    fn renders_display_values() {
        let sequence = [Some(1), None, Some(-3), Some(40)];
        assert_eq!(join(Some(&sequence[..]), Some(", "), 0, 4).as_deref(), Some("1, , -3, 40"));
    }

    #[test]
    fn same_input_same_output() {
        let sequence = [Some("x"), None, Some("z")];
        let first = join(Some(&sequence[..]), Some("/"), 0, 3);
        let second = join(Some(&sequence[..]), Some("/"), 0, 3);
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn end_past_length_panics() {
        let sequence = [Some("a")];
        _ = join(Some(&sequence[..]), Some(","), 0, 2);
    }

    #[rstest]
    #[case(0, 2, 1)]
    #[case(1, 3, 1)]
    #[case(4, 6, 4)]
    fn end_past_length_is_reported(#[case] start_index: usize, #[case] end_index: usize, #[case] index: usize) {
        let sequence = [Some("a")];
        assert_eq!(
            try_join(Some(&sequence[..]), Some(","), start_index, end_index),
            Err(JoinError::IndexOutOfBounds { index, len: 1 })
        );
    }

    #[test]
    fn try_join_absent_inputs() {
        assert_eq!(try_join::<&str>(None, Some(","), 0, 3), Ok(None));
        assert_eq!(try_join(Some(&[Some("a")][..]), None, 0, 3), Ok(None));
    }

    #[test]
    fn join_all_covers_whole_sequence() {
        let sequence = [Some("a"), None, Some("c")];
        assert_eq!(join_all(Some(&sequence[..]), Some("+")).as_deref(), Some("a++c"));
        assert_eq!(join_all::<&str>(Some(&[]), Some("+")).as_deref(), Some(""));
        assert_eq!(join_all::<&str>(None, Some("+")), None);
        assert_eq!(join_all(Some(&sequence[..]), None), None);
    }
}

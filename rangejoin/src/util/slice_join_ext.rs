// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Display, ops::Range};

use crate::{joiner::{check_bounds, join_present}, JoinError};

pub trait SliceJoinExt {
    #[must_use]
    fn join_range(&self, separator: &str, range: Range<usize>) -> String;

    fn try_join_range(&self, separator: &str, range: Range<usize>) -> Result<String, JoinError>;
}

impl<T> SliceJoinExt for [Option<T>]
        where T: Display {
    fn join_range(&self, separator: &str, range: Range<usize>) -> String {
        join_present(self, separator, range)
    }

    fn try_join_range(&self, separator: &str, range: Range<usize>) -> Result<String, JoinError> {
        check_bounds(self.len(), &range)?;
        Ok(join_present(self, separator, range))
    }
}

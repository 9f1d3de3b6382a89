// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod slice_join_ext;

pub use self::slice_join_ext::SliceJoinExt;

// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::marker::PhantomData;

pub struct Constants {
    _marker: PhantomData<String>,
}

impl Constants {
    /// Bytes reserved per joined element before the first push. Only a hint,
    /// the buffer still grows when elements render longer.
    pub const CAPACITY_HINT_PER_ELEMENT: usize = 16;

    pub const DEFAULT_SEPARATOR: &'static str = ",";

    pub const CONFIG_FILE_NAME: &'static str = "rangejoin.toml";
}

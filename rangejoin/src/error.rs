// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum JoinError {
    #[error("index out of bounds: index={index} while length={len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

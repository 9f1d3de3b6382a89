// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod constants;
mod error;
mod joiner;
mod util;

pub use self::{
    config::{ConfigRoot, ConfigSectionJoin, ConfigSectionLog},
    constants::Constants,
    error::{ConfigError, JoinError},
    joiner::{join, join_all, try_join},
    util::SliceJoinExt,
};

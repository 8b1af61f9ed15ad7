// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Point-in-time selectors for historical queries
//!
//! Most Histori endpoints accept an optional anchor that pins the query to a
//! specific moment on chain: either an exact block height or a calendar
//! timestamp the server resolves to the closest block. [`Tag`] makes the two
//! forms a single closed variant so a request can never carry both.

use chrono::{DateTime, SecondsFormat, Utc};

/// A point-in-time selector: an exact block height or a calendar timestamp.
///
/// Encodes to exactly one query parameter — `block_height=<int>` or
/// `date=<ISO-8601>`. An absent tag omits both keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// Query the state as of this exact block.
    BlockHeight(u64),
    /// Query the state at this instant; the server picks the closest block.
    Timestamp(DateTime<Utc>),
}

impl Tag {
    /// The query parameter this tag serializes to.
    ///
    /// Timestamps render with millisecond precision and a `Z` suffix, the
    /// format the Histori API expects for `date`.
    pub fn query_pair(&self) -> (&'static str, String) {
        match self {
            Tag::BlockHeight(height) => ("block_height", height.to_string()),
            Tag::Timestamp(instant) => {
                ("date", instant.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }
    }
}

impl From<u64> for Tag {
    fn from(height: u64) -> Self {
        Tag::BlockHeight(height)
    }
}

impl From<DateTime<Utc>> for Tag {
    fn from(instant: DateTime<Utc>) -> Self {
        Tag::Timestamp(instant)
    }
}

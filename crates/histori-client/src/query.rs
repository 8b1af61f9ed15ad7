// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Ordered query-string assembly
//!
//! All services build their query strings through [`QueryBuilder`] so the
//! same rules apply everywhere: pairs keep insertion order, absent values are
//! dropped entirely (never emitted as empty strings), and a [`Tag`] encodes
//! as exactly one of `block_height` or `date`.

use std::fmt::Display;

use histori_types::Tag;
use url::form_urlencoded;

/// Collects query pairs in order and percent-encodes them at the end.
#[derive(Debug, Default)]
pub(crate) struct QueryBuilder {
    pairs: Vec<(&'static str, String)>,
}

impl QueryBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append one pair.
    pub(crate) fn push(&mut self, key: &'static str, value: impl Display) {
        self.pairs.push((key, value.to_string()));
    }

    /// Append the pair only when a value is present.
    pub(crate) fn push_opt(&mut self, key: &'static str, value: Option<impl Display>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append the tag's `block_height` or `date` pair, when a tag is given.
    pub(crate) fn push_tag(&mut self, tag: Option<&Tag>) {
        if let Some(tag) = tag {
            let (key, value) = tag.query_pair();
            self.pairs.push((key, value));
        }
    }

    /// Attach the encoded query to `path`, leaving `path` untouched when no
    /// pairs were collected.
    pub(crate) fn append_to(self, path: String) -> String {
        if self.pairs.is_empty() {
            return path;
        }
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs)
            .finish();
        format!("{path}?{query}")
    }
}

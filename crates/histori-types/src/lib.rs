// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the Histori API client
//!
//! This crate provides the typed request parameters and response payloads for
//! every Histori endpoint, along with the [`Tag`] point-in-time selector and a
//! few display helpers for raw token amounts.
//!
//! All response types mirror the JSON wire format of the Histori API; request
//! types carry only the fields a caller can actually set, so invalid query
//! combinations are unrepresentable.

pub mod format;
pub mod requests;
pub mod responses;
pub mod tag;

pub use requests::*;
pub use responses::*;
pub use tag::Tag;

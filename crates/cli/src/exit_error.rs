// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error carrying a specific process exit code.

use thiserror::Error;

/// Returned by a command that must exit with a code other than 1.
///
/// An empty message exits without printing anything further.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

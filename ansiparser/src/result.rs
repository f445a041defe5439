//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for the ansiparser crate.
//!
//! Tokenizing a `&str` never fails: malformed or truncated escape sequences are
//! consumed permissively. The only fallible entry points are the ones accepting
//! raw bytes, which must be valid UTF-8 before they can be tokenized.

/// Result type alias for operations that may fail with an [`AnsiError`].
pub type AnsiResult<T> = Result<T, AnsiError>;

/// Errors that can occur when handing raw bytes to the tokenizer.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum AnsiError {
    /// Invalid UTF-8 sequence encountered at the specified position.
    ///
    /// Everything before `position` is valid UTF-8.
    #[error("Invalid UTF-8 sequence at position {position}")]
    InvalidUtf8 {
        /// The byte position where the invalid UTF-8 was encountered
        position: usize,
    },
}

impl From<std::str::Utf8Error> for AnsiError {
    fn from(error: std::str::Utf8Error) -> Self {
        AnsiError::InvalidUtf8 {
            position: error.valid_up_to(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_utf8_position() {
        let bytes = [b'o', b'k', 0xFF, b'!'];
        let error: AnsiError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(error, AnsiError::InvalidUtf8 { position: 2 });
        assert_eq!(error.to_string(), "Invalid UTF-8 sequence at position 2");
    }
}

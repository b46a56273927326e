// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

use std::fmt::{self, Display};

use crate::UNWRAP_NONE_MSG;

/// Error for an option that contains no value, returned by [`crate::Opt::ok`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoneError;

impl Display for NoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{UNWRAP_NONE_MSG}")
    }
}

impl std::error::Error for NoneError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_panic_message() {
        assert_eq!(NoneError.to_string(), UNWRAP_NONE_MSG);
    }

    #[test]
    fn is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(NoneError);
        assert!(error.source().is_none());
    }
}

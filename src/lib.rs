// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

//! A generic option type.
//!
//! An [`Opt<T>`] either contains a value of type `T` or does not. All empty
//! options of the same type are equal, whichever way they were built, and the
//! value of an empty option can only be reached through an explicit unwrap.
//!
//! ```
//! use opt::{map, Opt};
//!
//! assert_eq!(map(Opt::some(7), |x| x * 2).unwrap_or(0), 14);
//! assert_eq!(map(Opt::<i32>::none(), |x| x * 2).unwrap_or(0), 0);
//!
//! let mut o = Opt::some("a");
//! assert_eq!(o.take(), Opt::some("a"));
//! assert_eq!(o, Opt::none());
//! ```

pub mod combinators;
mod convert;
pub mod error;
mod opt;
#[cfg(feature = "serde")]
mod serde;

pub use combinators::{map, r#match};
pub use error::NoneError;
pub use opt::{Opt, UNWRAP_NONE_MSG};

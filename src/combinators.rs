// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

//! Free functions transforming or consuming an [`Opt`].

use crate::Opt;

/// Returns a new option, which is the result of applying `f` to the value
/// wrapped by `o`, if it contains a value. If `o` does not contain a value,
/// `f` is not evaluated, and the returned option does not contain a value
/// either.
pub fn map<T, U>(o: Opt<T>, f: impl FnOnce(T) -> U) -> Opt<U> {
    match o.into_slot() {
        Some(v) => Opt::some(f(v)),
        None => Opt::none(),
    }
}

/// Returns the result of evaluating `on_some` with the value wrapped by `o`
/// if `o` contains a value, or the result of evaluating `on_none` if it does
/// not. Exactly one of the two is called.
pub fn r#match<T, U>(o: Opt<T>, on_some: impl FnOnce(T) -> U, on_none: impl FnOnce() -> U) -> U {
    match o.into_slot() {
        Some(v) => on_some(v),
        None => on_none(),
    }
}

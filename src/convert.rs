// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

use std::option;

use crate::{NoneError, Opt};

impl<T> Opt<T> {
    /// Converts a result to an option, discarding the error if any.
    pub fn from_result<E>(r: Result<T, E>) -> Self {
        match r {
            Ok(v) => Self::some(v),
            Err(_) => Self::none(),
        }
    }

    /// Returns the wrapped value, or [`NoneError`] if there is none.
    pub fn ok(self) -> Result<T, NoneError> {
        self.into_slot().ok_or(NoneError)
    }

    pub fn iter(&self) -> option::Iter<'_, T> {
        self.slot().iter()
    }

    pub fn iter_mut(&mut self) -> option::IterMut<'_, T> {
        self.slot_mut().iter_mut()
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::some(v),
            None => Self::none(),
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(value: Opt<T>) -> Self {
        value.into_slot()
    }
}

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_slot().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Opt<T> {
    type Item = &'a mut T;
    type IntoIter = option::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Collects the wrapped values, or yields an option containing no value as
/// soon as one of the items contains none.
impl<A, V: FromIterator<A>> FromIterator<Opt<A>> for Opt<V> {
    fn from_iter<I: IntoIterator<Item = Opt<A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Opt::into_slot)
            .collect::<Option<V>>()
            .into()
    }
}

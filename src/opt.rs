// Copyright 2026 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

use std::{fmt, panic::Location, ptr};

use crate::combinators;

/// Panic message of [`Opt::unwrap`] on an option containing no value.
pub const UNWRAP_NONE_MSG: &str = "None unwrapped";

/// An option type.
///
/// It either contains a value or does not.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Opt<T> {
    // INVARIANT: an option without a value holds no payload at all,
    // so that any two of them compare, order and hash the same.
    slot: Option<T>,
}

impl<T> Opt<T> {
    /// Creates a new option that does not contain a value.
    pub const fn none() -> Self {
        Self { slot: None }
    }

    /// Creates a new option that contains the given value.
    ///
    /// The option is present even if `v` itself looks like "nothing",
    /// for instance a null pointer or a `None`.
    pub const fn some(v: T) -> Self {
        Self { slot: Some(v) }
    }

    /// Converts a reference to an option. No reference becomes an option
    /// containing no value, and a reference becomes an option containing a
    /// copy of the value referred to.
    pub fn from_ref(p: Option<&T>) -> Self
    where
        T: Clone,
    {
        match p {
            Some(v) => Self::some(v.clone()),
            None => Self::none(),
        }
    }

    /// Converts a raw pointer to an option, like [`Opt::from_ref`]. A null
    /// pointer becomes an option containing no value.
    ///
    /// # Safety
    ///
    /// If non-null, `p` must be valid for reads and point to an initialized `T`.
    pub unsafe fn from_ptr(p: *const T) -> Self
    where
        T: Clone,
    {
        // SAFETY: forwarded to the caller.
        Self::from_ref(unsafe { p.as_ref() })
    }

    /// Converts a value and a flag to an option. When `ok` is false the
    /// result contains no value, whatever `v` is, and when `ok` is true the
    /// result contains `v`.
    pub fn from_val_ok(v: T, ok: bool) -> Self {
        if !ok {
            return Self::none();
        }

        Self::some(v)
    }

    /// Converts a value and a possible failure to an option. When a failure
    /// is given the result contains no value, otherwise it contains `v`.
    /// Only the presence of the failure matters.
    pub fn from_val_err<E>(v: T, err: Option<E>) -> Self {
        if err.is_some() {
            return Self::none();
        }

        Self::some(v)
    }

    /// Returns whether the option contains a value.
    pub const fn is_some(&self) -> bool {
        self.slot.is_some()
    }

    pub const fn is_none(&self) -> bool {
        self.slot.is_none()
    }

    /// Returns whether the option contains a value for which `f` holds.
    pub fn is_some_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self.slot {
            Some(v) => f(v),
            None => false,
        }
    }

    /// Returns a copy of the wrapped value and true if the option contains a
    /// value. Otherwise, returns the default value of `T` and false.
    pub fn get(&self) -> (T, bool)
    where
        T: Clone + Default,
    {
        match &self.slot {
            Some(v) => (v.clone(), true),
            None => (T::default(), false),
        }
    }

    pub const fn as_ref(&self) -> Opt<&T> {
        Opt {
            slot: self.slot.as_ref(),
        }
    }

    pub fn as_mut(&mut self) -> Opt<&mut T> {
        Opt {
            slot: self.slot.as_mut(),
        }
    }

    /// Returns the wrapped value if the option contains a value.
    ///
    /// # Panics
    ///
    /// Panics with [`UNWRAP_NONE_MSG`] if the option contains no value.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.slot {
            Some(v) => v,
            None => none_unwrapped(UNWRAP_NONE_MSG),
        }
    }

    /// Returns the wrapped value if the option contains a value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the option contains no value.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.slot {
            Some(v) => v,
            None => none_unwrapped(msg),
        }
    }

    /// Returns the wrapped value if the option contains a value.
    /// Otherwise, returns `v`.
    pub fn unwrap_or(self, v: T) -> T {
        match self.slot {
            Some(value) => value,
            None => v,
        }
    }

    /// Returns the wrapped value if the option contains a value.
    /// Otherwise, returns the result of `f`, which is only called in that case.
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self.slot {
            Some(value) => value,
            None => f(),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Returns the content of the option, leaving an option that contains no
    /// value in its place.
    pub fn take(&mut self) -> Self {
        let taken = Self {
            slot: self.slot.take(),
        };
        if taken.is_some() {
            log::trace!("took value out of {}", std::any::type_name::<Self>());
        }
        taken
    }

    /// Puts `v` into the option and returns its former content.
    pub fn replace(&mut self, v: T) -> Self {
        log::trace!("replaced value of {}", std::any::type_name::<Self>());
        Self {
            slot: self.slot.replace(v),
        }
    }

    /// Converts the option to a reference. An option that contains no value
    /// becomes `None`, and an option that does contain a value becomes a
    /// reference to that value.
    pub const fn to_ref(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Converts the option to a raw pointer, null if the option contains no
    /// value. The pointer is valid as long as the option is neither moved nor
    /// mutated.
    pub fn to_ptr(&self) -> *const T {
        match &self.slot {
            Some(v) => v as *const T,
            None => ptr::null(),
        }
    }

    /// Returns a new option, holding the result of applying `f` to the
    /// wrapped value, if any. See [`combinators::map`].
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Opt<U> {
        combinators::map(self, f)
    }

    /// Evaluates `on_some` with the wrapped value, or `on_none` if there is
    /// none. See [`combinators::r#match`].
    pub fn match_with<U>(self, on_some: impl FnOnce(T) -> U, on_none: impl FnOnce() -> U) -> U {
        combinators::r#match(self, on_some, on_none)
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Opt<U>) -> Opt<U> {
        match self.slot {
            Some(v) => f(v),
            None => Opt::none(),
        }
    }

    /// Keeps the wrapped value only if `predicate` holds for it.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self.slot {
            Some(v) if predicate(&v) => Self::some(v),
            _ => Self::none(),
        }
    }

    pub fn or(self, other: Self) -> Self {
        if self.is_some() {
            self
        } else {
            other
        }
    }

    pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
        if self.is_some() {
            self
        } else {
            f()
        }
    }

    /// Pairs the wrapped values of both options, if both contain one.
    pub fn zip<U>(self, other: Opt<U>) -> Opt<(T, U)> {
        match (self.slot, other.slot) {
            (Some(a), Some(b)) => Opt::some((a, b)),
            _ => Opt::none(),
        }
    }

    pub(crate) fn into_slot(self) -> Option<T> {
        self.slot
    }

    pub(crate) const fn slot(&self) -> &Option<T> {
        &self.slot
    }

    pub(crate) fn slot_mut(&mut self) -> &mut Option<T> {
        &mut self.slot
    }
}

#[track_caller]
#[cold]
fn none_unwrapped(msg: &str) -> ! {
    log::error!("{msg} at {}", Location::caller());
    panic!("{msg}")
}

impl<T: fmt::Debug> fmt::Debug for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(v) => f.debug_tuple("Some").field(v).finish(),
            None => write!(f, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_absence() {
        assert_eq!(Opt::<String>::none().slot, None);
        assert_eq!(Opt::from_val_ok(7, false).slot, None);
        assert_eq!(Opt::from_val_err(7, Some("boom")).slot, None);

        let mut o = Opt::some(7);
        o.take();
        assert_eq!(o.slot, None);
    }

    #[test]
    fn some_holds_value() {
        assert_eq!(Opt::some(7).slot, Some(7));
    }

    #[test]
    fn presence_is_not_nullability() {
        let o = Opt::some(ptr::null::<u8>());
        assert!(o.is_some());
        assert!(o.unwrap().is_null());

        let o = Opt::some(None::<u8>);
        assert!(o.is_some());
    }

    #[test]
    fn to_ptr_points_into_option() {
        let o = Opt::some([8, 3, 9]);
        assert_eq!(o.to_ptr(), o.to_ref().unwrap() as *const _);
        assert!(Opt::<Vec<String>>::none().to_ptr().is_null());
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Opt::some(3)), "Some(3)");
        assert_eq!(format!("{:?}", Opt::<i32>::none()), "None");
    }
}

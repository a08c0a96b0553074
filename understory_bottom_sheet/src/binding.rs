// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility bindings: the caller-owned flag that opens and closes the sheet.
//!
//! The caller owns the flag and is the only party that ever sets it to
//! `true`. The sheet reads it to decide whether to present, and writes `false`
//! when it dismisses itself.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_bottom_sheet::VisibilityBinding;
//!
//! let flag = Rc::new(Cell::new(false));
//! let binding = Rc::clone(&flag);
//!
//! flag.set(true);
//! assert!(binding.is_visible());
//!
//! binding.set_visible(false);
//! assert!(!flag.get());
//! ```

use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

/// Read/write access to a caller-owned visibility flag.
///
/// Writes go through `&self`: bindings are shared cells used from a single
/// event-dispatch thread.
pub trait VisibilityBinding {
    /// Returns whether the sheet should currently be presented.
    fn is_visible(&self) -> bool;

    /// Stores a new visibility value.
    fn set_visible(&self, visible: bool);
}

impl VisibilityBinding for Cell<bool> {
    fn is_visible(&self) -> bool {
        self.get()
    }

    fn set_visible(&self, visible: bool) {
        self.set(visible);
    }
}

impl<T: VisibilityBinding + ?Sized> VisibilityBinding for &T {
    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn set_visible(&self, visible: bool) {
        (**self).set_visible(visible);
    }
}

impl<T: VisibilityBinding + ?Sized> VisibilityBinding for Rc<T> {
    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn set_visible(&self, visible: bool) {
        (**self).set_visible(visible);
    }
}

/// A binding made of a getter and a setter closure.
///
/// Useful when the flag lives inside a larger view model.
#[derive(Clone, Copy)]
pub struct FnBinding<G, S> {
    get: G,
    set: S,
}

impl<G, S> FnBinding<G, S>
where
    G: Fn() -> bool,
    S: Fn(bool),
{
    /// Creates a binding from an accessor pair.
    pub fn new(get: G, set: S) -> Self {
        Self { get, set }
    }
}

impl<G, S> VisibilityBinding for FnBinding<G, S>
where
    G: Fn() -> bool,
    S: Fn(bool),
{
    fn is_visible(&self) -> bool {
        (self.get)()
    }

    fn set_visible(&self, visible: bool) {
        (self.set)(visible);
    }
}

impl<G, S> fmt::Debug for FnBinding<G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBinding").finish_non_exhaustive()
    }
}

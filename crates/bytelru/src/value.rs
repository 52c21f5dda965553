//! Logical size of cached values

use std::rc::Rc;
use std::sync::Arc;

/// A value the cache can hold.
///
/// `len` is the logical size in bytes charged against the cache budget. It
/// must stay constant while the value is cached; changing it in place breaks
/// the cache's byte accounting.
pub trait Value {
    /// Declared size in bytes
    fn len(&self) -> usize;

    /// Whether the declared size is zero
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Value for str {
    fn len(&self) -> usize {
        str::len(self)
    }
}

impl Value for String {
    fn len(&self) -> usize {
        String::len(self)
    }
}

impl Value for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }
}

impl Value for Vec<u8> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T: Value + ?Sized> Value for &T {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<T: Value + ?Sized> Value for Box<T> {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<T: Value + ?Sized> Value for Rc<T> {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<T: Value + ?Sized> Value for Arc<T> {
    fn len(&self) -> usize {
        (**self).len()
    }
}

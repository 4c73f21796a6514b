//! Type-erased field values.

use core::any::Any;
use core::fmt::Debug;

/// A field value read from a subject.
///
/// Implemented for every `'static + Debug` type; callers recover the concrete
/// type with [`downcast_ref`](#method.downcast_ref).
pub trait FieldValue: Any + Debug {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Debug> FieldValue for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn FieldValue {
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

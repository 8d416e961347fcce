//! Value abstractions the checks operate on.

use std::any::{Any, TypeId};

/// A value that may be absent.
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for &mut T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

/// Runtime type descriptor used by [`crate::check::is_of_type`].
///
/// A value conforms to its own concrete type. Implementors that stand in
/// for a type hierarchy override [`RuntimeType::conforms_to`] to also accept
/// the `TypeId`s of their "base" types, usually trait objects such as
/// `dyn Shape`. [`crate::runtime_type!`] generates both forms.
pub trait RuntimeType: Any {
    /// Fully qualified name of the concrete type.
    fn runtime_type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Whether this value is, or derives from, the type identified by `expected`.
    fn conforms_to(&self, expected: TypeId) -> bool {
        Any::type_id(self) == expected
    }
}

/// Implement [`RuntimeType`] for a type, optionally listing the types it derives from.
///
/// ```ignore
/// trait Shape {}
/// struct Circle;
/// impl Shape for Circle {}
/// precheck::runtime_type!(Circle: dyn Shape);
/// ```
#[macro_export]
macro_rules! runtime_type {
    ($ty:ty) => {
        impl $crate::RuntimeType for $ty {}
    };
    ($ty:ty : $($base:ty),+ $(,)?) => {
        impl $crate::RuntimeType for $ty {
            fn conforms_to(&self, expected: ::std::any::TypeId) -> bool {
                expected == ::std::any::TypeId::of::<$ty>()
                    $(|| expected == ::std::any::TypeId::of::<$base>())+
            }
        }
    };
}

runtime_type!(bool);
runtime_type!(char);
runtime_type!(i8);
runtime_type!(i16);
runtime_type!(i32);
runtime_type!(i64);
runtime_type!(i128);
runtime_type!(isize);
runtime_type!(u8);
runtime_type!(u16);
runtime_type!(u32);
runtime_type!(u64);
runtime_type!(u128);
runtime_type!(usize);
runtime_type!(f32);
runtime_type!(f64);
runtime_type!(String);
runtime_type!(&'static str);
runtime_type!(uuid::Uuid);

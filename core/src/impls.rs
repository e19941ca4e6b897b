//! `Inspect` implementations for standard library types.

use std::borrow::Cow;
use std::cell::{Cell, OnceCell};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, OnceLock};

use crate::{AsInspect, Complex, Container, Inspect, Kind, Number};

macro_rules! inspect_numbers {
    ($variant:ident as $wide:ty: $($ty:ty),+) => {
        $(
            impl Inspect for $ty {
                fn kind(&self) -> Kind<'_> {
                    Kind::Number(Number::$variant(*self as $wide))
                }
            }
        )+
    };
}

inspect_numbers!(Int as i128: i8, i16, i32, i64, i128, isize);
inspect_numbers!(Uint as u128: u8, u16, u32, u64, u128, usize);

impl Inspect for f32 {
    fn kind(&self) -> Kind<'_> {
        Kind::Number(Number::F32(*self))
    }
}

impl Inspect for f64 {
    fn kind(&self) -> Kind<'_> {
        Kind::Number(Number::F64(*self))
    }
}

impl Inspect for Complex<f32> {
    fn kind(&self) -> Kind<'_> {
        Kind::Number(Number::Complex {
            re: f64::from(self.re),
            im: f64::from(self.im),
        })
    }
}

impl Inspect for Complex<f64> {
    fn kind(&self) -> Kind<'_> {
        Kind::Number(Number::Complex {
            re: self.re,
            im: self.im,
        })
    }
}

macro_rules! inspect_leaves {
    ($($ty:ty),+) => {
        $(
            impl Inspect for $ty {
                fn kind(&self) -> Kind<'_> {
                    Kind::Leaf(self)
                }
            }
        )+
    };
}

inspect_leaves!(bool, char, ());

// ========== Text ==========

impl Inspect for String {
    fn kind(&self) -> Kind<'_> {
        Kind::Container(Container::text(self))
    }
}

impl Inspect for &str {
    fn kind(&self) -> Kind<'_> {
        Kind::Container(Container::text(self))
    }
}

impl Inspect for Cow<'_, str> {
    fn kind(&self) -> Kind<'_> {
        Kind::Container(Container::text(self))
    }
}

// ========== Collections ==========

impl<T> Inspect for Vec<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Container(Container::sized(self.len()))
    }
}

impl<T> Inspect for VecDeque<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Container(Container::sized(self.len()))
    }
}

impl<T, const N: usize> Inspect for [T; N] {
    fn kind(&self) -> Kind<'_> {
        Kind::Container(Container::sized(N))
    }
}

impl<T> Inspect for &[T] {
    fn kind(&self) -> Kind<'_> {
        Kind::Container(Container::sized(self.len()))
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn kind(&self) -> Kind<'_> {
        Kind::Container(Container::sized(self.len()))
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn kind(&self) -> Kind<'_> {
        Kind::Container(Container::sized(self.len()))
    }
}

impl<T, S> Inspect for HashSet<T, S> {
    fn kind(&self) -> Kind<'_> {
        Kind::Container(Container::sized(self.len()))
    }
}

impl<T> Inspect for BTreeSet<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Container(Container::sized(self.len()))
    }
}

// ========== Indirection ==========

impl<T: AsInspect + ?Sized> Inspect for &T {
    fn kind(&self) -> Kind<'_> {
        Kind::Pointer(T::as_inspect(self))
    }
}

impl<T: AsInspect + ?Sized> Inspect for Box<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Pointer(T::as_inspect(self))
    }
}

impl<T: AsInspect + ?Sized> Inspect for Rc<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Pointer(T::as_inspect(self))
    }
}

impl<T: AsInspect + ?Sized> Inspect for Arc<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Pointer(T::as_inspect(self))
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Optional(self.as_ref().map(|value| value as &dyn Inspect))
    }
}

impl<T: Inspect> Inspect for OnceCell<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Optional(self.get().map(|value| value as &dyn Inspect))
    }
}

impl<T: Inspect> Inspect for OnceLock<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Optional(self.get().map(|value| value as &dyn Inspect))
    }
}

impl<T: AsInspect + ?Sized> Inspect for Cell<Option<&T>> {
    fn kind(&self) -> Kind<'_> {
        Kind::Optional(self.get().map(T::as_inspect))
    }
}

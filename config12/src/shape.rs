//! [`Describe`] implementations for values that are not records.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::BuildHasher;

use crate::{Describe, Shape, ValueKind};

macro_rules! describe_as {
    ($kind:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn shape() -> Shape<Self> {
                    Shape::Other(ValueKind::$kind)
                }
            }
        )+
    };
}

describe_as!(Scalar:
    String, &'static str, bool, char, (),
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<T: Clone + 'static> Describe for Vec<T> {
    fn shape() -> Shape<Self> {
        Shape::Other(ValueKind::Sequence)
    }
}

impl<T: Clone + 'static> Describe for VecDeque<T> {
    fn shape() -> Shape<Self> {
        Shape::Other(ValueKind::Sequence)
    }
}

impl<T: Clone + 'static, const N: usize> Describe for [T; N] {
    fn shape() -> Shape<Self> {
        Shape::Other(ValueKind::Sequence)
    }
}

impl<T: Clone + 'static> Describe for BTreeSet<T> {
    fn shape() -> Shape<Self> {
        Shape::Other(ValueKind::Sequence)
    }
}

impl<T: Clone + 'static, S: BuildHasher + Clone + 'static> Describe for HashSet<T, S> {
    fn shape() -> Shape<Self> {
        Shape::Other(ValueKind::Sequence)
    }
}

impl<K: Clone + 'static, V: Clone + 'static> Describe for BTreeMap<K, V> {
    fn shape() -> Shape<Self> {
        Shape::Other(ValueKind::Map)
    }
}

impl<K, V, S> Describe for HashMap<K, V, S>
where
    K: Clone + 'static,
    V: Clone + 'static,
    S: BuildHasher + Clone + 'static,
{
    fn shape() -> Shape<Self> {
        Shape::Other(ValueKind::Map)
    }
}

impl<T: Clone + 'static> Describe for Option<T> {
    fn shape() -> Shape<Self> {
        Shape::Other(ValueKind::Optional)
    }
}

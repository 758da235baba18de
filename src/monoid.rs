//! Monoid trait: a log type with an empty element
//!
//! A `Monoid` extends [`Semigroup`] with an identity element. A
//! [`Writer`](crate::Writer) starts from that identity in
//! [`Writer::pure`](crate::Writer::pure), which is what makes the monad identity
//! laws hold: binding into `pure` appends nothing.
//!
//! # Laws
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))   (associativity)
//! a.combine(M::empty()) == a                            (right identity)
//! M::empty().combine(a) == a                            (left identity)
//! ```
//!
//! # Counting with a Writer
//!
//! Numbers have two obvious monoids, so they are wrapped:
//!
//! ```
//! use wellspring::monoid::{fold_all, Sum};
//! use wellspring::Writer;
//!
//! let steps = Writer::new(1, Sum(1))
//!     .bind(|x| Writer::new(x + 1, Sum(1)))
//!     .bind(|x| Writer::new(x * 10, Sum(1)));
//!
//! assert_eq!(steps.run(), (20, Sum(3)));
//! assert_eq!(fold_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! ```

use std::ops::{Add, Mul};

use crate::Semigroup;

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element.
    ///
    /// Satisfies: `a.combine(Self::empty()) == a` and `Self::empty().combine(a) == a`
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

macro_rules! impl_monoid_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Monoid),+> Monoid for ($($T,)+) {
            fn empty() -> Self {
                ($($T::empty(),)+)
            }
        }
    };
}

impl_monoid_tuple!(0 T1, 1 T2);
impl_monoid_tuple!(0 T1, 1 T2, 2 T3);
impl_monoid_tuple!(0 T1, 1 T2, 2 T3, 3 T4);

/// Numbers under addition. Identity: `0`.
///
/// ```
/// use wellspring::monoid::Sum;
/// use wellspring::Semigroup;
///
/// assert_eq!(Sum(5).combine(Sum(10)), Sum(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<T>(pub T);

impl<T: Add<Output = T>> Semigroup for Sum<T> {
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<T: Add<Output = T> + Default> Monoid for Sum<T> {
    fn empty() -> Self {
        Sum(T::default())
    }
}

/// Numbers under multiplication. Identity: `1`.
///
/// ```
/// use wellspring::monoid::{fold_all, Product};
///
/// assert_eq!(fold_all(vec![Product(2), Product(3), Product(4)]), Product(24));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<T>(pub T);

/// Types with a multiplicative identity.
pub trait One {
    /// Returns `1` for this type.
    fn one() -> Self;
}

macro_rules! impl_one {
    ($one:expr => $($t:ty),+) => {
        $(
            impl One for $t {
                fn one() -> Self {
                    $one
                }
            }
        )+
    };
}

impl_one!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_one!(1.0 => f32, f64);

impl<T: Mul<Output = T>> Semigroup for Product<T> {
    fn combine(self, other: Self) -> Self {
        Product(self.0 * other.0)
    }
}

impl<T: Mul<Output = T> + One> Monoid for Product<T> {
    fn empty() -> Self {
        Product(T::one())
    }
}

/// Fold an iterator starting from `M::empty()`.
///
/// ```
/// use wellspring::monoid::fold_all;
///
/// let lines: Vec<&str> = fold_all(vec![vec!["a", "b"], vec![], vec!["c"]]);
/// assert_eq!(lines, vec!["a", "b", "c"]);
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, x| acc.combine(x))
}

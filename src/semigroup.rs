//! Semigroup trait for associative log combination
//!
//! A Semigroup is a type with an associative binary operation. In this crate it is
//! the operation a [`Writer`](crate::Writer) uses to append the log produced by a
//! later step onto the log it already carries.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! A non-associative `combine` makes `Writer::bind` violate the monad
//! associativity law: regrouping a chain would change its final log.
//!
//! # Examples
//!
//! ```
//! use wellspring::Semigroup;
//!
//! // Log lines append in order
//! let first = vec!["opened".to_string()];
//! let second = vec!["closed".to_string()];
//! assert_eq!(first.combine(second), vec!["opened", "closed"]);
//!
//! // Text concatenates
//! assert_eq!("a".to_string().combine("b".to_string()), "ab");
//!
//! // Tuples combine component-wise, so one writer can carry two logs
//! let t1 = (vec![1], "a".to_string());
//! let t2 = (vec![2], "b".to_string());
//! assert_eq!(t1.combine(t2), (vec![1, 2], "ab".to_string()));
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes both sides by value. `self` is the earlier log and `other`
/// the later one; implementations must keep that order.
pub trait Semigroup: Sized {
    /// Combine this value with a later one.
    ///
    /// ```
    /// use wellspring::Semigroup;
    ///
    /// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Semigroup for () {
    #[inline]
    fn combine(self, _other: Self) -> Self {}
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                (
                    $(self.$idx.combine(other.$idx)),+
                )
            }
        }
    };
}

impl_semigroup_tuple!(0 T1, 1 T2);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_appends_in_order() {
        let earlier = vec!["a".to_string(), "b".to_string()];
        let later = vec!["c".to_string()];
        assert_eq!(earlier.combine(later), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_vec_empty_sides() {
        let empty: Vec<i32> = vec![];
        assert_eq!(empty.clone().combine(vec![1]), vec![1]);
        assert_eq!(vec![1].combine(empty), vec![1]);
    }

    #[test]
    fn test_string_concatenates() {
        assert_eq!(
            "Hello, ".to_string().combine("World!".to_string()),
            "Hello, World!"
        );
    }

    #[test]
    fn test_unit_combine() {
        let () = ().combine(());
    }

    #[test]
    fn test_tuple_component_wise() {
        let t1 = (vec![1], "a".to_string(), vec!["x"]);
        let t2 = (vec![2], "b".to_string(), vec!["y"]);
        assert_eq!(
            t1.combine(t2),
            (vec![1, 2], "ab".to_string(), vec!["x", "y"])
        );
    }

    #[test]
    fn test_vec_associativity() {
        let a = vec![1, 2];
        let b = vec![3];
        let c = vec![4, 5];

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }

    #[test]
    fn test_tuple_associativity() {
        let a = (vec![1], "a".to_string());
        let b = (vec![2], "b".to_string());
        let c = (vec![3], "c".to_string());

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }
}

//! Function-level combinators
//!
//! - [`compose`] / [`pipe`]: left-to-right composition and application
//! - [`curry`], [`curry3`], [`uncurry`]: arity transformation
//! - [`partial`], [`partial2`], [`flip`]: fixing and reordering arguments
//! - [`tap`]: run a side effect and hand the value back
//! - [`compose_kleisli`]: compose wrapper-returning functions
//! - [`Memoize`] / [`memoize`]: cache a pure function by argument
//!
//! # Examples
//!
//! ```
//! use wellspring::compose::{compose, curry, partial, pipe};
//!
//! let add_then_double = compose(|x: i32| x + 1, |x: i32| x * 2);
//! assert_eq!(add_then_double(3), 8);
//!
//! let add = curry(|a: i32, b: i32| a + b);
//! assert_eq!(add(2)(3), 5);
//!
//! let greet = partial(|greeting: &str, name: &str| format!("{greeting}, {name}"), "hello");
//! assert_eq!(pipe("ada", greet), "hello, ada");
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::Bindable;

/// Compose two functions, applying `f` first and then `g`.
///
/// ```
/// use wellspring::compose::compose;
///
/// let doubled_length = compose(|s: &str| s.len(), |n: usize| n * 2);
/// assert_eq!(doubled_length("abc"), 6);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |x| g(f(x))
}

/// Apply `f` to `value`.
#[inline]
pub fn pipe<A, B, F>(value: A, f: F) -> B
where
    F: FnOnce(A) -> B,
{
    f(value)
}

/// Turn a binary function into a chain of unary functions.
///
/// ```
/// use wellspring::compose::curry;
///
/// let subtract = curry(|a: i32, b: i32| a - b);
/// let from_ten = subtract(10);
/// assert_eq!(from_ten(3), 7);
/// assert_eq!(from_ten(4), 6);
/// ```
pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + 'static,
{
    let f = Rc::new(f);
    move |a: A| {
        let f = Rc::clone(&f);
        Box::new(move |b: B| f(a.clone(), b)) as Box<dyn Fn(B) -> C>
    }
}

/// Turn a ternary function into a chain of unary functions.
///
/// ```
/// use wellspring::compose::curry3;
///
/// let volume = curry3(|l: u32, w: u32, h: u32| l * w * h);
/// assert_eq!(volume(2)(3)(4), 24);
/// ```
#[allow(clippy::type_complexity)]
pub fn curry3<A, B, C, D, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> D>>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    D: 'static,
    F: Fn(A, B, C) -> D + 'static,
{
    let f = Rc::new(f);
    move |a: A| {
        let f = Rc::clone(&f);
        Box::new(move |b: B| {
            let f = Rc::clone(&f);
            let a = a.clone();
            Box::new(move |c: C| f(a.clone(), b.clone(), c)) as Box<dyn Fn(C) -> D>
        }) as Box<dyn Fn(B) -> Box<dyn Fn(C) -> D>>
    }
}

/// Turn a chain of unary functions back into a binary function.
///
/// ```
/// use wellspring::compose::{curry, uncurry};
///
/// let add = uncurry(curry(|a: i32, b: i32| a + b));
/// assert_eq!(add(1, 2), 3);
/// ```
#[inline]
pub fn uncurry<A, B, C, F, G>(f: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> C,
{
    move |a, b| f(a)(b)
}

/// Fix the first argument of a binary function.
#[inline]
pub fn partial<A, B, C, F>(f: F, first: A) -> impl Fn(B) -> C
where
    A: Clone,
    F: Fn(A, B) -> C,
{
    move |b| f(first.clone(), b)
}

/// Fix the first two arguments of a ternary function.
///
/// ```
/// use wellspring::compose::partial2;
///
/// let clamp_to_percent = partial2(|lo: i32, hi: i32, x: i32| x.clamp(lo, hi), 0, 100);
/// assert_eq!(clamp_to_percent(140), 100);
/// assert_eq!(clamp_to_percent(-3), 0);
/// ```
#[inline]
pub fn partial2<A, B, C, D, F>(f: F, first: A, second: B) -> impl Fn(C) -> D
where
    A: Clone,
    B: Clone,
    F: Fn(A, B, C) -> D,
{
    move |c| f(first.clone(), second.clone(), c)
}

/// Swap the arguments of a binary function.
#[inline]
pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| f(a, b)
}

/// Run `action` on a borrow of `value`, then return `value`.
///
/// ```
/// use wellspring::compose::tap;
///
/// let mut seen = Vec::new();
/// let value = tap(vec![1, 2], |v| seen.push(v.len()));
/// assert_eq!(value, vec![1, 2]);
/// assert_eq!(seen, vec![2]);
/// ```
#[inline]
pub fn tap<T, F>(value: T, action: F) -> T
where
    F: FnOnce(&T),
{
    action(&value);
    value
}

/// Compose two wrapper-returning functions: `x => g(x).flat_map(f)`.
///
/// Works for any [`Bindable`] wrapper, so a failure or absence produced by
/// `g` means `f` is never invoked.
///
/// ```
/// use wellspring::{Outcome, compose::compose_kleisli};
///
/// let parse = |s: &str| Outcome::attempt(|| s.parse::<i32>());
/// let reciprocal = |x: i32| {
///     if x == 0 {
///         Outcome::failure("division by zero".to_string())
///     } else {
///         Outcome::success(1.0 / x as f64)
///     }
/// };
///
/// let parse_reciprocal = compose_kleisli(parse, reciprocal);
/// assert_eq!(parse_reciprocal("4"), Outcome::success(0.25));
/// assert_eq!(parse_reciprocal("0"), Outcome::failure("division by zero".to_string()));
/// assert!(parse_reciprocal("x").is_failure());
/// ```
pub fn compose_kleisli<A, M, U, G, F>(g: G, f: F) -> impl Fn(A) -> M::Rebind<U>
where
    M: Bindable,
    G: Fn(A) -> M,
    F: Fn(M::Item) -> M::Rebind<U>,
{
    move |a| g(a).flat_map(&f)
}

/// A function wrapped with a per-argument result cache.
///
/// The first call for an argument runs the function and stores the result;
/// later calls with an equal argument return a clone of the stored result.
///
/// The cache is a `RefCell`, so `Memoize` is not `Sync` and cannot be shared
/// across threads:
///
/// ```compile_fail
/// fn assert_sync<T: Sync>() {}
/// assert_sync::<wellspring::compose::Memoize<i32, i32, fn(i32) -> i32>>();
/// ```
///
/// Entries are never evicted. Call [`clear`](Memoize::clear) when the input
/// domain is large.
pub struct Memoize<A, R, F> {
    function: F,
    cache: RefCell<HashMap<A, R>>,
}

impl<A, R, F> Memoize<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    /// Wrap `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Memoize {
            function,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Return the cached result for `arg`, computing it on a miss.
    ///
    /// ```
    /// use std::cell::Cell;
    /// use wellspring::compose::memoize;
    ///
    /// let calls = Cell::new(0);
    /// let square = memoize(|x: u64| {
    ///     calls.set(calls.get() + 1);
    ///     x * x
    /// });
    ///
    /// assert_eq!(square.call(12), 144);
    /// assert_eq!(square.call(12), 144);
    /// assert_eq!(calls.get(), 1);
    /// ```
    pub fn call(&self, arg: A) -> R {
        if let Some(hit) = self.cache.borrow().get(&arg) {
            return hit.clone();
        }

        let value = (self.function)(arg.clone());
        #[cfg(feature = "tracing")]
        tracing::trace!(cached = self.cache.borrow().len() + 1, "memoize miss");
        self.cache.borrow_mut().insert(arg, value.clone());
        value
    }
}

impl<A, R, F> Memoize<A, R, F> {
    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Drop every cached result.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<A, R, F> fmt::Debug for Memoize<A, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoize")
            .field("cached", &self.len())
            .finish_non_exhaustive()
    }
}

/// Wrap `function` in a [`Memoize`].
pub fn memoize<A, R, F>(function: F) -> Memoize<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    Memoize::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Maybe, Outcome, Writer};
    use std::cell::Cell;

    #[test]
    fn test_compose_applies_first_function_first() {
        let f = compose(|x: i32| x + 1, |x: i32| x * 10);
        assert_eq!(f(1), 20);
    }

    #[test]
    fn test_pipe() {
        assert_eq!(pipe(4, |x: i32| x * x), 16);
    }

    #[test]
    fn test_curry_preserves_argument_order() {
        let concat = curry(|a: String, b: &'static str| a + b);
        let hello = concat("hello ".to_string());
        assert_eq!(hello("world"), "hello world");
        assert_eq!(hello("there"), "hello there");
    }

    #[test]
    fn test_curry3_preserves_argument_order() {
        let join = curry3(|a: char, b: char, c: char| format!("{a}{b}{c}"));
        assert_eq!(join('x')('y')('z'), "xyz");
    }

    #[test]
    fn test_uncurry_round_trip() {
        let div = uncurry(curry(|a: i32, b: i32| a / b));
        assert_eq!(div(9, 3), 3);
    }

    #[test]
    fn test_partial_and_partial2() {
        let minus_from_ten = partial(|a: i32, b: i32| a - b, 10);
        assert_eq!(minus_from_ten(4), 6);

        let between = partial2(|lo: i32, hi: i32, x: i32| lo <= x && x <= hi, 1, 5);
        assert!(between(3));
        assert!(!between(6));
    }

    #[test]
    fn test_flip() {
        let divide = |a: f64, b: f64| a / b;
        assert_eq!(flip(divide)(2.0, 10.0), 5.0);
    }

    #[test]
    fn test_tap_returns_value() {
        let seen = Cell::new(0);
        let value = tap(7, |v| seen.set(*v));
        assert_eq!(value, 7);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_compose_kleisli_maybe() {
        let half = |x: i32| {
            if x % 2 == 0 {
                Maybe::just(x / 2)
            } else {
                Maybe::nothing()
            }
        };
        let quarter = compose_kleisli(half, half);
        assert_eq!(quarter(8), Maybe::just(2));
        assert_eq!(quarter(6), Maybe::nothing());
    }

    #[test]
    fn test_compose_kleisli_skips_second_on_failure() {
        let calls = Cell::new(0);
        let first = |x: i32| {
            if x > 0 {
                Outcome::success(x)
            } else {
                Outcome::failure("negative")
            }
        };
        let second = |x: i32| {
            calls.set(calls.get() + 1);
            Outcome::success(x + 1)
        };
        let both = compose_kleisli(first, second);
        assert_eq!(both(1), Outcome::success(2));
        assert_eq!(both(-1), Outcome::failure("negative"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_compose_kleisli_writer_log_order() {
        let start = |x: i32| Writer::entry(x, "start");
        let finish = |x: i32| Writer::entry(x * 2, "finish");
        let both = compose_kleisli(start, finish);
        assert_eq!(both(4).run(), (8, vec!["start", "finish"]));
    }

    #[test]
    fn test_memoize_caches_by_argument() {
        let calls = Cell::new(0);
        let memo = memoize(|x: i32| {
            calls.set(calls.get() + 1);
            x * 3
        });

        assert!(memo.is_empty());
        assert_eq!(memo.call(2), 6);
        assert_eq!(memo.call(2), 6);
        assert_eq!(memo.call(5), 15);
        assert_eq!(calls.get(), 2);
        assert_eq!(memo.len(), 2);
    }

    #[test]
    fn test_memoize_clear_forces_recompute() {
        let calls = Cell::new(0);
        let memo = memoize(|s: String| {
            calls.set(calls.get() + 1);
            s.len()
        });

        memo.call("abc".to_string());
        memo.clear();
        assert!(memo.is_empty());
        memo.call("abc".to_string());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_memoize_debug_shows_size() {
        let memo = memoize(|x: u8| x);
        memo.call(1);
        assert_eq!(format!("{:?}", memo), "Memoize { cached: 1, .. }");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_memoize_agrees_with_function(inputs: Vec<u8>) {
                let f = |x: u8| u32::from(x) * 7 + 1;
                let memo = memoize(f);
                for x in inputs {
                    prop_assert_eq!(memo.call(x), f(x));
                }
            }

            #[test]
            fn prop_curry_uncurry_identity(a: i32, b: i32) {
                let f = |x: i32, y: i32| x.wrapping_mul(3).wrapping_sub(y);
                prop_assert_eq!(uncurry(curry(f))(a, b), f(a, b));
            }
        }
    }
}

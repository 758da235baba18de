//! Testing utilities for code built on wellspring
//!
//! Assertion macros for each wrapper, a [`CallCounter`] for proving that a
//! step was skipped, and (feature `proptest`) `Arbitrary` strategies.
//!
//! # Examples
//!
//! ```rust
//! use wellspring::{Maybe, Outcome, assert_failure, assert_just, assert_success};
//!
//! assert_just!(Maybe::just(3), 3);
//! assert_success!(Outcome::<_, String>::success(42));
//! assert_failure!(Outcome::<i32, _>::failure("boom"), "boom");
//! ```

use std::cell::Cell;
use std::rc::Rc;

/// Counts invocations across closures that share it.
///
/// Clones share one count, so a clone can be moved into a closure while the
/// test keeps the original.
///
/// ```rust
/// use wellspring::{Maybe, testing::CallCounter};
///
/// let counter = CallCounter::new();
/// let result = Maybe::<i32>::nothing().map(counter.counted(|x: i32| x + 1));
///
/// assert!(result.is_nothing());
/// assert_eq!(counter.count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Rc<Cell<usize>>,
}

impl CallCounter {
    /// A counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call.
    pub fn tick(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// Calls recorded so far.
    pub fn count(&self) -> usize {
        self.calls.get()
    }

    /// Wrap `f` so each call is recorded before running it.
    pub fn counted<A, R, F>(&self, f: F) -> impl FnMut(A) -> R
    where
        F: FnMut(A) -> R,
    {
        let counter = self.clone();
        let mut f = f;
        move |arg| {
            counter.tick();
            f(arg)
        }
    }
}

/// Assert that a `Maybe` is `Just`, optionally with a given value.
///
/// ```rust
/// use wellspring::{Maybe, assert_just};
///
/// assert_just!(Maybe::just("x"));
/// assert_just!(Maybe::just(2 + 2), 4);
/// ```
#[macro_export]
macro_rules! assert_just {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Just(_) => {}
            $crate::Maybe::Nothing => {
                panic!("Expected Just, got Nothing");
            }
        }
    };
    ($maybe:expr, $expected:expr) => {
        match $maybe {
            $crate::Maybe::Just(v) => {
                assert_eq!(v, $expected);
            }
            $crate::Maybe::Nothing => {
                panic!("Expected Just({:?}), got Nothing", $expected);
            }
        }
    };
}

/// Assert that a `Maybe` is `Nothing`.
///
/// ```rust
/// use wellspring::{Maybe, assert_nothing};
///
/// assert_nothing!(Maybe::<i32>::nothing());
/// ```
#[macro_export]
macro_rules! assert_nothing {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Nothing => {}
            $crate::Maybe::Just(v) => {
                panic!("Expected Nothing, got Just: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome succeeds, optionally with a given value.
///
/// ```rust
/// use wellspring::{Outcome, assert_success};
///
/// let parsed: Outcome<i32> = Outcome::attempt(|| "42".parse::<i32>());
/// assert_success!(parsed, 42);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(_) => {}
            $crate::Outcome::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Success(v) => {
                assert_eq!(v, $expected);
            }
            $crate::Outcome::Failure(e) => {
                panic!("Expected Success({:?}), got Failure: {:?}", $expected, e);
            }
        }
    };
}

/// Assert that an outcome fails, optionally with a given error.
///
/// ```rust
/// use wellspring::{Outcome, assert_failure};
///
/// let parsed: Outcome<i32> = Outcome::attempt(|| "forty".parse::<i32>());
/// assert_failure!(parsed, "invalid digit found in string");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(_) => {}
            $crate::Outcome::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Failure(e) => {
                assert_eq!(e, $expected);
            }
            $crate::Outcome::Success(v) => {
                panic!(
                    "Expected Failure with {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert a writer's accumulated log.
///
/// ```rust
/// use wellspring::{Writer, assert_log};
///
/// let w = Writer::entry(1, "loaded").bind(|x| Writer::entry(x + 1, "bumped"));
/// assert_log!(w, vec!["loaded", "bumped"]);
/// ```
#[macro_export]
macro_rules! assert_log {
    ($writer:expr, $expected:expr) => {
        assert_eq!($writer.into_log(), $expected);
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use crate::{Maybe, Outcome, Writer};
    use proptest::prelude::*;

    impl<T> Arbitrary for Maybe<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                1 => Just(()).prop_map(|()| Maybe::Nothing),
                3 => any_with::<T>(args).prop_map(Maybe::Just),
            ]
            .boxed()
        }
    }

    impl<T, E> Arbitrary for Outcome<T, E>
    where
        T: Arbitrary + 'static,
        E: Arbitrary + 'static,
    {
        type Parameters = (T::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, e_params) = args;
            prop_oneof![
                any_with::<T>(t_params).prop_map(Outcome::success),
                any_with::<E>(e_params).prop_map(Outcome::failure),
            ]
            .boxed()
        }
    }

    impl<T, L> Arbitrary for Writer<T, L>
    where
        T: Arbitrary + 'static,
        L: Arbitrary + 'static,
    {
        type Parameters = (T::Parameters, L::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, l_params) = args;
            (any_with::<T>(t_params), any_with::<L>(l_params))
                .prop_map(|(value, log)| Writer::new(value, log))
                .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Maybe, Outcome, Writer};

    #[test]
    fn call_counter_shared_between_clones() {
        let counter = CallCounter::new();
        let clone = counter.clone();
        clone.tick();
        counter.tick();
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn call_counter_counted_runs_function() {
        let counter = CallCounter::new();
        let mut double = counter.counted(|x: i32| x * 2);
        assert_eq!(double(4), 8);
        assert_eq!(double(5), 10);
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn assert_just_macro() {
        assert_just!(Maybe::just(1));
        assert_just!(Maybe::just(1), 1);
    }

    #[test]
    fn assert_nothing_macro() {
        assert_nothing!(Maybe::<u8>::nothing());
    }

    #[test]
    fn assert_success_macro() {
        let val = Outcome::<_, String>::success(42);
        assert_success!(val.clone());
        assert_success!(val, 42);
    }

    #[test]
    fn assert_failure_macro() {
        let val = Outcome::<i32, _>::failure("error".to_string());
        assert_failure!(val.clone());
        assert_failure!(val, "error");
    }

    #[test]
    fn assert_log_macro() {
        let w = Writer::note((), "one").log_line("two");
        assert_log!(w, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    #[should_panic(expected = "Expected Just, got Nothing")]
    fn assert_just_panics_on_nothing() {
        assert_just!(Maybe::<i32>::nothing());
    }

    #[test]
    #[should_panic(expected = "Expected Nothing, got Just")]
    fn assert_nothing_panics_on_just() {
        assert_nothing!(Maybe::just(3));
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let val = Outcome::<i32, _>::failure("error".to_string());
        assert_success!(val);
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        let val = Outcome::<_, String>::success(42);
        assert_failure!(val);
    }

    #[test]
    #[should_panic(expected = "Expected Failure with")]
    fn assert_failure_with_value_panics_on_success() {
        let val = Outcome::<_, String>::success(42);
        assert_failure!(val, "error".to_string());
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn maybe_arbitrary_generates_valid_instances(val in any::<Maybe<i32>>()) {
                match val {
                    Maybe::Just(_) => prop_assert!(val.is_just()),
                    Maybe::Nothing => prop_assert!(val.is_nothing()),
                }
            }

            #[test]
            fn outcome_arbitrary_generates_valid_instances(
                val in any::<Outcome<i32, Vec<String>>>()
            ) {
                match val {
                    Outcome::Success(_) => prop_assert!(val.is_success()),
                    Outcome::Failure(_) => prop_assert!(val.is_failure()),
                }
            }

            #[test]
            fn writer_arbitrary_generates_valid_instances(
                w in any::<Writer<i32, Vec<u8>>>()
            ) {
                let (value, log) = w.clone().run();
                prop_assert_eq!(w.value(), &value);
                prop_assert_eq!(w.log(), &log);
            }
        }
    }
}

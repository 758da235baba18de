//! Property tests for the functor and monad laws of every wrapper.

use std::fmt::Debug;

use proptest::prelude::*;
use wellspring::monoid::Sum;
use wellspring::{Bindable, Maybe, Outcome, Semigroup, Writer};

fn left_identity<M, F>(a: M::Item, f: F) -> Result<(), TestCaseError>
where
    M: Bindable,
    M::Item: Clone,
    M::Rebind<i32>: PartialEq + Debug,
    F: Fn(M::Item) -> M::Rebind<i32>,
{
    prop_assert_eq!(M::pure(a.clone()).flat_map(&f), f(a));
    Ok(())
}

fn right_identity<T, M>(m: M) -> Result<(), TestCaseError>
where
    M: Bindable<Item = T, Rebind<T> = M> + Clone + PartialEq + Debug,
{
    prop_assert_eq!(m.clone().flat_map::<T, _>(M::pure), m);
    Ok(())
}

fn half(x: i32) -> Maybe<i32> {
    if x % 2 == 0 {
        Maybe::just(x / 2)
    } else {
        Maybe::nothing()
    }
}

fn positive(x: i32) -> Outcome<i32, String> {
    if x > 0 {
        Outcome::success(x)
    } else {
        Outcome::failure(format!("{x} is not positive"))
    }
}

fn logged(x: i32) -> Writer<i32, Vec<String>> {
    Writer::note(x.wrapping_add(1), format!("inc {x}"))
}

proptest! {
    #[test]
    fn maybe_left_identity(a: i32) {
        left_identity::<Maybe<i32>, _>(a, half)?;
    }

    #[test]
    fn maybe_right_identity(m: Option<i32>) {
        right_identity(Maybe::from(m))?;
    }

    #[test]
    fn maybe_associativity(m: Option<i32>) {
        let m = Maybe::from(m);
        let g = |x: i32| Maybe::just(x.wrapping_mul(3));
        prop_assert_eq!(m.bind(half).bind(g), m.bind(|x| half(x).bind(g)));
    }

    #[test]
    fn maybe_functor_composition(m: Option<i32>) {
        let m = Maybe::from(m);
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(2);
        prop_assert_eq!(m.map(f).map(g), m.map(|x| g(f(x))));
    }

    #[test]
    fn outcome_left_identity(a: i32) {
        left_identity::<Outcome<i32, String>, _>(a, positive)?;
    }

    #[test]
    fn outcome_right_identity(m: Result<i32, String>) {
        right_identity(Outcome::from(m))?;
    }

    #[test]
    fn outcome_associativity(m: Result<i32, String>) {
        let m = Outcome::from(m);
        let g = |x: i32| {
            if x % 3 == 0 {
                Outcome::failure("divisible by three".to_string())
            } else {
                Outcome::success(x)
            }
        };
        prop_assert_eq!(
            m.clone().bind(positive).bind(g),
            m.bind(|x| positive(x).bind(g))
        );
    }

    #[test]
    fn outcome_functor_identity(m: Result<i32, String>) {
        let m = Outcome::from(m);
        prop_assert_eq!(m.clone().map(|x| x), m);
    }

    #[test]
    fn writer_left_identity(a: i32) {
        left_identity::<Writer<i32, Vec<String>>, _>(a, logged)?;
    }

    #[test]
    fn writer_right_identity(value: i32, log: Vec<String>) {
        right_identity(Writer::new(value, log))?;
    }

    #[test]
    fn writer_associativity(value: i32, log: Vec<String>) {
        let m = Writer::new(value, log);
        let g = |x: i32| Writer::note(x.wrapping_mul(2), "double");
        prop_assert_eq!(
            m.clone().bind(logged).bind(g),
            m.bind(|x| logged(x).bind(g))
        );
    }

    #[test]
    fn writer_sum_log_associativity(a: i16, b: i16, c: i16) {
        let w = Writer::new((), Sum(i64::from(a)));
        let f = |()| Writer::new((), Sum(i64::from(b)));
        let g = |()| Writer::new((), Sum(i64::from(c)));
        let left = w.bind(f).bind(g);
        let right = w.bind(|x| f(x).bind(g));
        prop_assert_eq!(left.clone(), right);
        prop_assert_eq!(left.into_log(), Sum(i64::from(a)).combine(Sum(i64::from(b))).combine(Sum(i64::from(c))));
    }

    #[test]
    fn writer_log_order_matches_call_order(steps in prop::collection::vec(any::<u8>(), 0..20)) {
        let mut writer = Writer::<u32, Vec<u8>>::pure(0);
        for step in &steps {
            let step = *step;
            writer = writer.bind(move |total| Writer::entry(total + u32::from(step), step));
        }
        let (total, log) = writer.run();
        prop_assert_eq!(log, steps.clone());
        prop_assert_eq!(total, steps.iter().map(|s| u32::from(*s)).sum::<u32>());
    }
}

//! Integration tests for the partial-application engine.
//!
//! Covers the accumulate / invoke / reject decision for every argument count
//! and the literal scenarios of a three-argument `add`.

use autocurry::curry::{Applied, Curried, make_curried};
use autocurry::error::CurryError;
use rstest::{fixture, rstest};

#[fixture]
fn add() -> Curried<i32> {
    let _ = pretty_env_logger::try_init();
    Curried::from_array(|[x, y, z]: [i32; 3]| x + y + z)
}

fn partial(applied: Applied<i32>) -> Curried<i32> {
    match applied {
        Applied::Partial(curried) => curried,
        Applied::Complete(value) => panic!("expected a partial application, got {value}"),
    }
}

fn complete(applied: Applied<i32>) -> i32 {
    match applied {
        Applied::Complete(value) => value,
        Applied::Partial(curried) => panic!("expected a value, got {curried:?}"),
    }
}

// =============================================================================
// add(x, y, z) = x + y + z
// =============================================================================

mod add_three {
    use super::*;

    #[rstest]
    fn invokes_normally_with_all_arguments(add: Curried<i32>) {
        assert_eq!(complete(add.apply([1, 2, 3]).unwrap()), 6);
    }

    #[rstest]
    fn returns_callable_when_under_supplied(add: Curried<i32>) {
        assert!(add.apply([]).unwrap().is_partial());
        assert!(add.apply([1]).unwrap().is_partial());
        assert!(add.apply([1, 2]).unwrap().is_partial());
    }

    #[rstest]
    fn completes_one_argument_at_a_time(add: Curried<i32>) {
        let step = partial(add.apply([1]).unwrap());
        let step = partial(step.apply([2]).unwrap());
        assert_eq!(complete(step.apply([3]).unwrap()), 6);
    }

    #[rstest]
    fn completes_with_one_then_two(add: Curried<i32>) {
        let step = partial(add.apply([1]).unwrap());
        assert_eq!(complete(step.apply([2, 3]).unwrap()), 6);
    }

    #[rstest]
    fn completes_with_two_then_one(add: Curried<i32>) {
        let step = partial(add.apply([1, 2]).unwrap());
        assert_eq!(complete(step.apply([3]).unwrap()), 6);
    }

    #[rstest]
    fn rejects_too_many_arguments_on_partial(add: Curried<i32>) {
        let step = partial(add.apply([1, 2]).unwrap());
        assert_eq!(
            step.apply([3, 4]).unwrap_err(),
            CurryError::ArityExceeded {
                arity: 3,
                supplied: 4,
            }
        );
    }

    #[rstest]
    fn rejects_too_many_arguments_up_front(add: Curried<i32>) {
        assert_eq!(
            add.apply([1, 2, 3, 4, 5]).unwrap_err(),
            CurryError::ArityExceeded {
                arity: 3,
                supplied: 5,
            }
        );
    }

    #[rstest]
    fn empty_application_keeps_accumulated_arguments(add: Curried<i32>) {
        let step = partial(add.apply([1]).unwrap());
        let same = partial(step.apply([]).unwrap());
        assert_eq!(same.bound(), step.bound());
    }

    #[rstest]
    fn partial_applications_are_reusable(add: Curried<i32>) {
        let add_ten = partial(add.apply([10]).unwrap());
        let add_ten_twenty = partial(add_ten.apply([20]).unwrap());
        let add_ten_one = partial(add_ten.apply([1]).unwrap());

        assert_eq!(complete(add_ten_twenty.apply([30]).unwrap()), 60);
        assert_eq!(complete(add_ten_one.apply([1]).unwrap()), 12);
        assert_eq!(complete(add_ten.apply([0, 0]).unwrap()), 10);
    }
}

// =============================================================================
// Arity grid
// =============================================================================

mod arity {
    use super::*;

    fn sum_of(arity: usize) -> Curried<i32> {
        make_curried(arity, |arguments: Vec<i32>| arguments.iter().sum())
    }

    #[rstest]
    fn zero_arity_invokes_on_first_call() {
        let answer = make_curried(0, |_arguments: Vec<i32>| 42);
        assert_eq!(complete(answer.apply([]).unwrap()), 42);
    }

    #[rstest]
    fn zero_arity_rejects_any_argument() {
        let answer = make_curried(0, |_arguments: Vec<i32>| 42);
        assert_eq!(
            answer.apply([1]).unwrap_err(),
            CurryError::ArityExceeded {
                arity: 0,
                supplied: 1,
            }
        );
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(4)]
    #[case(7)]
    fn decision_depends_only_on_count(#[case] arity: usize) {
        let function = sum_of(arity);
        let arity_i32 = i32::try_from(arity).unwrap();

        for supplied in 0..arity {
            let applied = function.apply(vec![1; supplied]).unwrap();
            assert_eq!(partial(applied).remaining(), arity - supplied);
        }

        assert_eq!(complete(function.apply(vec![1; arity]).unwrap()), arity_i32);
        assert_eq!(
            function.apply(vec![1; arity + 1]).unwrap_err(),
            CurryError::ArityExceeded {
                arity,
                supplied: arity + 1,
            }
        );
    }

    #[rstest]
    fn arguments_are_passed_in_supply_order() {
        let digits = make_curried(4, |arguments: Vec<i32>| {
            arguments.iter().fold(0, |accumulator, digit| accumulator * 10 + digit)
        });
        let step = partial(digits.apply([1]).unwrap());
        let step = partial(step.apply([2, 3]).unwrap());
        assert_eq!(complete(step.apply([4]).unwrap()), 1234);
    }
}

// =============================================================================
// Non-numeric values
// =============================================================================

mod strings {
    use super::*;

    #[rstest]
    fn concatenates_owned_strings() {
        let concat = Curried::from_array(|[first, second]: [String; 2]| first + &second);
        let hello = concat
            .apply([String::from("Hello, ")])
            .unwrap()
            .into_partial()
            .unwrap();

        assert_eq!(
            hello.apply([String::from("World")]).unwrap().into_complete(),
            Some(String::from("Hello, World"))
        );
        assert_eq!(
            hello.apply([String::from("Rust")]).unwrap().into_complete(),
            Some(String::from("Hello, Rust"))
        );
    }
}

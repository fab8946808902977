#![cfg(feature = "arc")]
//! Sharing callables across threads with the `arc` feature.

use autocurry::compose::pass;
use autocurry::curry::Curried;
use rstest::rstest;
use std::thread;

#[rstest]
fn partial_applications_are_shared_across_threads() {
    let add = Curried::from_array(|[x, y]: [i64; 2]| x + y);
    let add_ten = add.apply([10]).unwrap().into_partial().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let add_ten = add_ten.clone();
            thread::spawn(move || add_ten.apply([index]).unwrap().into_complete())
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(results, vec![Some(10), Some(11), Some(12), Some(13)]);
}

#[rstest]
fn compositions_are_shared_across_threads() {
    let negate = Curried::unary(|x: i64| -x);
    let double = Curried::unary(|x: i64| x * 2);
    let pipeline = negate | double;

    let result = thread::scope(|scope| {
        scope
            .spawn(|| pass(21) >> &pipeline)
            .join()
            .unwrap()
    });
    assert_eq!(result, Ok(-42));
}

//! Correctness tests for the three pipeline executors.
//!
//! All three must produce the result of applying the stage chain to every
//! element in order, whatever the worker count; they are allowed to differ
//! only in scheduling.

use skelly::{Executor, Stage};

/// Applies the stage chain sequentially, the result every executor must hit.
fn reference(src: &[i64], stages: &[Stage<'_, i64>]) -> Vec<i64> {
    src.iter()
        .map(|value| stages.iter().fold(*value, |acc, stage| stage(&acc)))
        .collect()
}

/// Two stages over three elements, on every executor.
#[test]
fn test_two_stage_pipeline() {
    let stages: [Stage<'_, i64>; 2] = [&|x| x + 1, &|x| x * 2];
    let src = [1, 2, 3];
    let exec = Executor::new(2).unwrap();

    let mut dest = [0; 3];
    exec.map_pipeline(&mut dest, &src, &stages);
    assert_eq!(dest, [4, 6, 8]);

    let mut dest = [0; 3];
    exec.item_pipeline(&mut dest, &src, &stages);
    assert_eq!(dest, [4, 6, 8]);

    let mut dest = [0; 3];
    exec.staged_pipeline(&mut dest, &src, &stages);
    assert_eq!(dest, [4, 6, 8]);
}

/// The three executors agree with the sequential chain across sizes and
/// worker counts.
#[test]
fn test_pipelines_agree_with_sequential_chain() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let stages: [Stage<'_, i64>; 4] = [&|x| x + 3, &|x| x * 2, &|x| x - 1, &|x| x * x];

    let mut rng = StdRng::seed_from_u64(42);
    for size in [0usize, 1, 2, 7, 33] {
        let src: Vec<i64> = (0..size).map(|_| rng.random_range(-20..20)).collect();
        let expected = reference(&src, &stages);

        for workers in [1, 2, 5] {
            let exec = Executor::new(workers).unwrap();

            let mut dest = vec![0; size];
            exec.map_pipeline(&mut dest, &src, &stages);
            assert_eq!(dest, expected, "map_pipeline size={size} workers={workers}");

            let mut dest = vec![0; size];
            exec.item_pipeline(&mut dest, &src, &stages);
            assert_eq!(dest, expected, "item_pipeline size={size} workers={workers}");

            let mut dest = vec![0; size];
            exec.staged_pipeline(&mut dest, &src, &stages);
            assert_eq!(
                dest, expected,
                "staged_pipeline size={size} workers={workers}"
            );
        }
    }
}

/// Zero stages copy the input through unchanged.
#[test]
fn test_empty_stage_list_copies_input() {
    let exec = Executor::new(3).unwrap();
    let src = [5, 6, 7];
    let stages: [Stage<'_, i32>; 0] = [];

    let mut dest = [0; 3];
    exec.map_pipeline(&mut dest, &src, &stages);
    assert_eq!(dest, src);

    let mut dest = [0; 3];
    exec.item_pipeline(&mut dest, &src, &stages);
    assert_eq!(dest, src);

    let mut dest = [0; 3];
    exec.staged_pipeline(&mut dest, &src, &stages);
    assert_eq!(dest, src);
}

/// A single stage behaves exactly like map.
#[test]
fn test_single_stage_equals_map() {
    let exec = Executor::new(4).unwrap();
    let src: Vec<i64> = (0..40).collect();
    let stages: [Stage<'_, i64>; 1] = [&|x| x * 7];

    let mut mapped = vec![0; src.len()];
    exec.map(&mut mapped, &src, |x| x * 7);

    let mut piped = vec![0; src.len()];
    exec.staged_pipeline(&mut piped, &src, &stages);
    assert_eq!(piped, mapped);
}

/// Stages run in list order, which matters when they do not commute.
#[test]
fn test_stage_order_matters() {
    let exec = Executor::new(2).unwrap();
    let src = [10];

    let plus_then_double: [Stage<'_, i32>; 2] = [&|x| x + 1, &|x| x * 2];
    let double_then_plus: [Stage<'_, i32>; 2] = [&|x| x * 2, &|x| x + 1];

    let mut a = [0];
    let mut b = [0];
    exec.item_pipeline(&mut a, &src, &plus_then_double);
    exec.item_pipeline(&mut b, &src, &double_then_plus);
    assert_eq!(a, [22]);
    assert_eq!(b, [21]);
}

/// The in-place variants match their two-slice counterparts.
#[test]
fn test_in_place_variants_match() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let stages: [Stage<'_, i64>; 3] = [&|x| x - 2, &|x| x * 3, &|x| x + 10];

    let mut rng = StdRng::seed_from_u64(5);
    let src: Vec<i64> = (0..29).map(|_| rng.random_range(-50..50)).collect();
    let expected = reference(&src, &stages);

    let exec = Executor::new(3).unwrap();

    let mut data = src.clone();
    exec.map_pipeline_in_place(&mut data, &stages);
    assert_eq!(data, expected);

    let mut data = src.clone();
    exec.item_pipeline_in_place(&mut data, &stages);
    assert_eq!(data, expected);

    let mut data = src.clone();
    exec.staged_pipeline_in_place(&mut data, &stages);
    assert_eq!(data, expected);
}

/// More stages than elements still drains the wavefront completely.
#[test]
fn test_staged_pipeline_more_stages_than_elements() {
    let exec = Executor::new(4).unwrap();
    let src = [1, 10];
    let stages: [Stage<'_, i32>; 5] = [&|x| x + 1, &|x| x + 1, &|x| x + 1, &|x| x + 1, &|x| x + 1];

    let mut dest = [0; 2];
    exec.staged_pipeline(&mut dest, &src, &stages);
    assert_eq!(dest, [6, 15]);
}

/// Pipelines work over non-Copy element types too.
#[test]
fn test_pipeline_over_strings() {
    let exec = Executor::new(2).unwrap();
    let src: Vec<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    let stages: [Stage<'_, String>; 2] = [&|s| format!("<{s}"), &|s| format!("{s}>")];

    let mut dest = vec![String::new(); 2];
    exec.map_pipeline(&mut dest, &src, &stages);
    assert_eq!(dest, ["<a>", "<b>"]);
}

//! Stage-chain executors.
//!
//! All three run the same stage list and produce the same result; they differ
//! only in how work is cut into fork-join tasks. `map_pipeline` runs one
//! full-width parallel map per stage with a barrier in between,
//! `item_pipeline` runs the whole chain on each element in a single task, and
//! `staged_pipeline` sweeps a diagonal wavefront so at most one element
//! occupies each stage per step.

use rayon::prelude::*;

use crate::executor::Executor;
use crate::patterns::map;

/// One pipeline stage: a pure per-element transform.
///
/// Stage lists are slices of these, so stages with different closure types
/// can run in one pipeline:
///
/// ```
/// let stages: [skelly::Stage<'_, i32>; 2] = [&|x| x + 1, &|x| x * 2];
/// # let _ = stages;
/// ```
pub type Stage<'a, T> = &'a (dyn Fn(&T) -> T + Sync);

pub(crate) fn map_pipeline<T>(exec: &Executor, dest: &mut [T], src: &[T], stages: &[Stage<'_, T>])
where
    T: Clone + Send + Sync,
{
    assert_eq!(
        dest.len(),
        src.len(),
        "Destination and source must be the same length"
    );

    let Some((first, rest)) = stages.split_first() else {
        dest.clone_from_slice(src);
        return;
    };

    map::map(exec, dest, src, *first);
    for stage in rest {
        map::map_in_place(exec, dest, *stage);
    }
}

pub(crate) fn map_pipeline_in_place<T>(exec: &Executor, data: &mut [T], stages: &[Stage<'_, T>])
where
    T: Send,
{
    for stage in stages {
        map::map_in_place(exec, data, *stage);
    }
}

pub(crate) fn item_pipeline<T>(exec: &Executor, dest: &mut [T], src: &[T], stages: &[Stage<'_, T>])
where
    T: Clone + Send + Sync,
{
    assert_eq!(
        dest.len(),
        src.len(),
        "Destination and source must be the same length"
    );

    let Some((first, rest)) = stages.split_first() else {
        dest.clone_from_slice(src);
        return;
    };

    exec.install(|| {
        dest.par_iter_mut()
            .zip(src.par_iter())
            .for_each(|(out, value)| {
                *out = first(value);
                for stage in rest {
                    *out = stage(&*out);
                }
            });
    });
}

pub(crate) fn item_pipeline_in_place<T>(exec: &Executor, data: &mut [T], stages: &[Stage<'_, T>])
where
    T: Send,
{
    if stages.is_empty() {
        return;
    }

    exec.install(|| {
        data.par_iter_mut().for_each(|slot| {
            for stage in stages {
                *slot = stage(&*slot);
            }
        });
    });
}

pub(crate) fn staged_pipeline<T>(
    exec: &Executor,
    dest: &mut [T],
    src: &[T],
    stages: &[Stage<'_, T>],
) where
    T: Clone + Send + Sync,
{
    assert_eq!(
        dest.len(),
        src.len(),
        "Destination and source must be the same length"
    );

    let n = src.len();
    let k = stages.len();
    if k == 0 {
        dest.clone_from_slice(src);
        return;
    }
    if n == 0 {
        return;
    }

    // Wave w runs stage w - i on element i, so the elements in flight are
    // the contiguous window [w - k + 1, w] clipped to [0, n), each sitting
    // at a different stage. One fork-join region per wave keeps every
    // element exactly one stage behind its predecessor, and dest doubles as
    // the in-flight buffer: slot i holds element i after its latest
    // completed stage.
    for wave in 0..n + k - 1 {
        let lo = wave.saturating_sub(k - 1);
        let hi = wave.min(n - 1);
        let window = &mut dest[lo..=hi];
        exec.install(|| {
            window.par_iter_mut().enumerate().for_each(|(offset, slot)| {
                let stage = wave - (lo + offset);
                if stage == 0 {
                    *slot = stages[0](&src[lo + offset]);
                } else {
                    *slot = stages[stage](&*slot);
                }
            });
        });
    }
}

pub(crate) fn staged_pipeline_in_place<T>(exec: &Executor, data: &mut [T], stages: &[Stage<'_, T>])
where
    T: Send,
{
    let n = data.len();
    let k = stages.len();
    if n == 0 || k == 0 {
        return;
    }

    for wave in 0..n + k - 1 {
        let lo = wave.saturating_sub(k - 1);
        let hi = wave.min(n - 1);
        let window = &mut data[lo..=hi];
        exec.install(|| {
            window.par_iter_mut().enumerate().for_each(|(offset, slot)| {
                let stage = wave - (lo + offset);
                *slot = stages[stage](&*slot);
            });
        });
    }
}

//! Dynamically load-balanced map.

use rayon::prelude::*;

use crate::executor::Executor;

// with_max_len(1) makes every element its own stealable unit, so uneven
// per-element costs rebalance across workers instead of riding the static
// split a plain parallel map would get.

pub(crate) fn farm<T, F>(exec: &Executor, dest: &mut [T], src: &[T], transform: &F)
where
    T: Send + Sync,
    F: Fn(&T) -> T + Sync + ?Sized,
{
    assert_eq!(
        dest.len(),
        src.len(),
        "Destination and source must be the same length"
    );

    exec.install(|| {
        dest.par_iter_mut()
            .zip(src.par_iter())
            .with_max_len(1)
            .for_each(|(out, value)| *out = transform(value));
    });
}

pub(crate) fn farm_in_place<T, F>(exec: &Executor, data: &mut [T], transform: &F)
where
    T: Send,
    F: Fn(&T) -> T + Sync + ?Sized,
{
    exec.install(|| {
        data.par_iter_mut()
            .with_max_len(1)
            .for_each(|slot| *slot = transform(&*slot));
    });
}

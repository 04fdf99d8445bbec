//! Elementwise parallel map.

use rayon::prelude::*;

use crate::executor::Executor;

pub(crate) fn map<T, F>(exec: &Executor, dest: &mut [T], src: &[T], transform: &F)
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
            .for_each(|(out, value)| *out = transform(value));
    });
}

pub(crate) fn map_in_place<T, F>(exec: &Executor, data: &mut [T], transform: &F)
where
    T: Send,
    F: Fn(&T) -> T + Sync + ?Sized,
{
    exec.install(|| {
        data.par_iter_mut().for_each(|slot| *slot = transform(&*slot));
    });
}

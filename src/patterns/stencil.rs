//! Shifted elementwise map with replicated edges.

use rayon::prelude::*;

use crate::executor::Executor;

pub(crate) fn stencil<T, F>(exec: &Executor, dest: &mut [T], src: &[T], shift: isize, transform: &F)
where
    T: Send + Sync,
    F: Fn(&T) -> T + Sync + ?Sized,
{
    assert_eq!(
        dest.len(),
        src.len(),
        "Destination and source must be the same length"
    );

    let n = src.len() as isize;
    if n == 0 {
        return;
    }

    exec.install(|| {
        dest.par_iter_mut().enumerate().for_each(|(i, out)| {
            // Reads past either end clamp to the edge element.
            let j = (i as isize + shift).clamp(0, n - 1) as usize;
            *out = transform(&src[j]);
        });
    });
}

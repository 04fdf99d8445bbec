//! Validated parallel indexed read.

use rayon::prelude::*;

use crate::error::{index_out_of_bounds, Result};
use crate::executor::Executor;

pub(crate) fn gather<T>(exec: &Executor, dest: &mut [T], src: &[T], filter: &[usize]) -> Result<()>
where
    T: Clone + Send + Sync,
{
    assert_eq!(
        dest.len(),
        filter.len(),
        "Destination and filter must be the same length"
    );

    // Validate the whole filter before copying anything. The pass never
    // short-circuits and reports the smallest offending position, so the
    // outcome is identical for every worker count and dest is untouched on
    // failure.
    let offender = exec.install(|| {
        filter
            .par_iter()
            .enumerate()
            .filter_map(|(position, &index)| (index >= src.len()).then_some((position, index)))
            .min()
    });
    if let Some((position, index)) = offender {
        return Err(index_out_of_bounds(position, index, src.len()));
    }

    exec.install(|| {
        dest.par_iter_mut()
            .zip(filter.par_iter())
            .for_each(|(out, &index)| *out = src[index].clone());
    });
    Ok(())
}

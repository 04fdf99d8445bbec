//! Two-phase tiled reduction.
//!
//! Phase one folds each tile left to right in parallel; phase two folds the
//! tile accumulators sequentially in ascending tile order. Both phases keep
//! strict left-to-right order inside their scope, so the result matches a
//! sequential fold whenever the combine operation is associative, even when
//! it is not commutative.

use rayon::prelude::*;

use crate::executor::Executor;
use crate::tile;

pub(crate) fn reduce<T, F>(exec: &Executor, src: &[T], identity: T, combine: &F) -> T
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> T + Sync + ?Sized,
{
    let parts = tile::tiles(src.len(), exec.workers());

    let locals: Vec<T> = exec.install(|| {
        parts
            .par_iter()
            .map(|tile| {
                src[tile.range()]
                    .iter()
                    .fold(identity.clone(), |acc, value| combine(&acc, value))
            })
            .collect()
    });

    // An empty source has no tiles and folds straight to the identity.
    locals.iter().fold(identity, |acc, local| combine(&acc, local))
}

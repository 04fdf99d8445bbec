//! Three-phase tiled prefix fold.
//!
//! Phase one folds each tile of `src[1..]` in parallel; phase two chains the
//! tile folds into per-tile seeds sequentially; phase three runs a seeded
//! running fold inside every tile in parallel, each task writing its own
//! destination tile. `dest[0]` is the plain first element and seeds the
//! whole chain, so no identity value is needed for the inclusive form.

use rayon::prelude::*;

use crate::executor::Executor;
use crate::tile::{self, Tile};

pub(crate) fn inclusive_scan<T, F>(exec: &Executor, dest: &mut [T], src: &[T], combine: &F)
where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> T + Sync + ?Sized,
{
    assert_eq!(
        dest.len(),
        src.len(),
        "Destination and source must be the same length"
    );

    let n = src.len();
    if n == 0 {
        return;
    }
    dest[0] = src[0].clone();
    if n == 1 {
        return;
    }

    let parts: Vec<Tile> = tile::tiles_in(1..n, exec.workers());

    // Phase 1: tile-local folds. The last tile seeds nobody, so its fold is
    // never computed.
    let locals: Vec<T> = exec.install(|| {
        parts[..parts.len() - 1]
            .par_iter()
            .map(|tile| fold_tile(&src[tile.range()], combine))
            .collect()
    });

    // Phase 2: running prefix over the tile folds, in ascending tile order.
    // seeds[t] is the fold of everything before tile t.
    let mut seeds: Vec<T> = Vec::with_capacity(parts.len());
    seeds.push(src[0].clone());
    for local in &locals {
        let next = combine(&seeds[seeds.len() - 1], local);
        seeds.push(next);
    }

    // Phase 3: seeded running fold inside each tile, one task per tile.
    let dest_tiles = tile::split_tiles_mut(dest, &parts);
    exec.install(|| {
        dest_tiles
            .into_par_iter()
            .zip(parts.par_iter())
            .zip(seeds.par_iter())
            .for_each(|((out, tile), seed)| {
                let input = &src[tile.range()];
                out[0] = combine(seed, &input[0]);
                for i in 1..input.len() {
                    out[i] = combine(&out[i - 1], &input[i]);
                }
            });
    });
}

pub(crate) fn exclusive_scan<T, F>(
    exec: &Executor,
    dest: &mut [T],
    src: &[T],
    identity: T,
    combine: &F,
) where
    T: Clone + Send + Sync,
    F: Fn(&T, &T) -> T + Sync + ?Sized,
{
    assert_eq!(
        dest.len(),
        src.len(),
        "Destination and source must be the same length"
    );

    let n = src.len();
    if n == 0 {
        return;
    }

    // The exclusive scan is the inclusive scan of src[..n-1] shifted one
    // slot right, with the identity in front.
    dest[0] = identity;
    inclusive_scan(exec, &mut dest[1..], &src[..n - 1], combine);
}

// Tiles are never empty, so the first element seeds the fold directly.
fn fold_tile<T, F>(input: &[T], combine: &F) -> T
where
    T: Clone,
    F: Fn(&T, &T) -> T + ?Sized,
{
    input[1..]
        .iter()
        .fold(input[0].clone(), |acc, value| combine(&acc, value))
}

//! Deterministic parallel indexed write.
//!
//! Scattering in parallel races whenever two sources map to the same
//! destination slot, so writes go through a claim pass first: one atomic
//! claim slot per destination slot, resolved with `fetch_max` or `fetch_min`
//! over source indices. The claim winners are fixed by the collision policy
//! alone, which makes both variants deterministic for any worker count. A
//! second pass then copies each slot's winning element, and slots nothing
//! mapped to keep their previous contents.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::executor::Executor;

/// Which source index owns a destination slot when several map to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collision {
    /// Highest source index wins, matching a sequential left-to-right
    /// overwrite.
    LastWins,
    /// Lowest source index wins.
    FirstWins,
}

pub(crate) fn scatter<T>(exec: &Executor, dest: &mut [T], src: &[T], filter: &[usize])
where
    T: Clone + Send + Sync,
{
    scatter_with(exec, dest, src, filter, Collision::LastWins);
}

pub(crate) fn priority_scatter<T>(exec: &Executor, dest: &mut [T], src: &[T], filter: &[usize])
where
    T: Clone + Send + Sync,
{
    scatter_with(exec, dest, src, filter, Collision::FirstWins);
}

fn scatter_with<T>(exec: &Executor, dest: &mut [T], src: &[T], filter: &[usize], policy: Collision)
where
    T: Clone + Send + Sync,
{
    assert_eq!(
        filter.len(),
        src.len(),
        "Filter and source must be the same length"
    );

    // Claims hold source index + 1 so the unclaimed marker can never
    // collide with a real claim under either policy.
    let unclaimed = match policy {
        Collision::LastWins => 0,
        Collision::FirstWins => usize::MAX,
    };
    let claims: Vec<AtomicUsize> = (0..dest.len()).map(|_| AtomicUsize::new(unclaimed)).collect();

    exec.install(|| {
        filter.par_iter().enumerate().for_each(|(source, &target)| {
            match policy {
                Collision::LastWins => claims[target].fetch_max(source + 1, Ordering::Relaxed),
                Collision::FirstWins => claims[target].fetch_min(source + 1, Ordering::Relaxed),
            };
        });
    });

    exec.install(|| {
        dest.par_iter_mut()
            .zip(claims.par_iter())
            .for_each(|(slot, claim)| {
                let claim = claim.load(Ordering::Relaxed);
                if claim != unclaimed {
                    *slot = src[claim - 1].clone();
                }
            });
    });
}

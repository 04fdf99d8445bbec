//! The fork-join executor every pattern runs on.
//!
//! An [`Executor`] owns a dedicated Rayon thread pool with an explicit worker
//! count; nothing here touches the global pool, so two executors with
//! different widths can coexist in one process. Workers live for the life of
//! the executor and are reused across calls. Inside a call, work is cut into
//! fork-join tasks whose results are deterministic for a given input,
//! whatever the worker count or scheduling order.

use std::fmt;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{invalid_workers, thread_pool_error, Result};
use crate::patterns::pipeline::Stage;
use crate::patterns::{farm, gather, map, pipeline, reduce, scan, scatter, stencil};

/// A fixed-width fork-join executor.
///
/// # Examples
///
/// ```
/// use skelly::Executor;
///
/// let exec = Executor::new(4)?;
/// let total = exec.reduce(&[1, 2, 3, 4, 5], 0, |a, b| a + b);
/// assert_eq!(total, 15);
/// # Ok::<(), skelly::SkellyError>(())
/// ```
pub struct Executor {
    pool: ThreadPool,
}

impl Executor {
    /// Creates an executor backed by `workers` dedicated threads.
    ///
    /// # Errors
    ///
    /// Returns [`SkellyError::InvalidWorkers`](crate::SkellyError::InvalidWorkers)
    /// if `workers` is zero, or
    /// [`SkellyError::ThreadPool`](crate::SkellyError::ThreadPool) if the
    /// operating system refuses the threads.
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(invalid_workers(workers));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| thread_pool_error(workers, e.to_string()))?;
        Ok(Executor { pool })
    }

    /// Creates an executor with one worker per available hardware thread.
    ///
    /// # Errors
    ///
    /// Returns [`SkellyError::ThreadPool`](crate::SkellyError::ThreadPool) if
    /// the pool cannot be built.
    pub fn with_default_parallelism() -> Result<Self> {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::new(workers)
    }

    /// Number of worker threads this executor runs on.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs `op` inside this executor's pool and waits for it to finish.
    pub(crate) fn install<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    /// Writes `transform(&src[i])` to `dest[i]` for every `i`, in parallel.
    ///
    /// # Panics
    ///
    /// Panics if `dest` and `src` differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// let exec = skelly::Executor::new(2)?;
    /// let mut dest = [0; 4];
    /// exec.map(&mut dest, &[1, 2, 3, 4], |x| x * 10);
    /// assert_eq!(dest, [10, 20, 30, 40]);
    /// # Ok::<(), skelly::SkellyError>(())
    /// ```
    pub fn map<T, F>(&self, dest: &mut [T], src: &[T], transform: F)
    where
        T: Send + Sync,
        F: Fn(&T) -> T + Sync,
    {
        map::map(self, dest, src, &transform);
    }

    /// Replaces every element of `data` with its transform, in parallel.
    pub fn map_in_place<T, F>(&self, data: &mut [T], transform: F)
    where
        T: Send,
        F: Fn(&T) -> T + Sync,
    {
        map::map_in_place(self, data, &transform);
    }

    /// Writes `transform(&src[i + shift])` to `dest[i]` for every `i`, with
    /// the source index clamped to the slice, so reads past either end see
    /// the edge element.
    ///
    /// # Panics
    ///
    /// Panics if `dest` and `src` differ in length.
    pub fn stencil<T, F>(&self, dest: &mut [T], src: &[T], shift: isize, transform: F)
    where
        T: Send + Sync,
        F: Fn(&T) -> T + Sync,
    {
        stencil::stencil(self, dest, src, shift, &transform);
    }

    /// Folds `src` down to a single value with an associative `combine`.
    ///
    /// `identity` must satisfy `combine(&identity, &x) == x`; it seeds each
    /// tile's accumulator and is returned as-is for an empty source. Tiles
    /// fold left to right and tile results combine in ascending tile order,
    /// so any worker count produces the sequential fold's result even when
    /// `combine` is not commutative.
    ///
    /// # Examples
    ///
    /// ```
    /// let exec = skelly::Executor::new(4)?;
    /// let biggest = exec.reduce(&[3, -1, 7, 2], i32::MIN, |a, b| *a.max(b));
    /// assert_eq!(biggest, 7);
    /// # Ok::<(), skelly::SkellyError>(())
    /// ```
    pub fn reduce<T, F>(&self, src: &[T], identity: T, combine: F) -> T
    where
        T: Clone + Send + Sync,
        F: Fn(&T, &T) -> T + Sync,
    {
        reduce::reduce(self, src, identity, &combine)
    }

    /// Writes the running fold of `src` into `dest`: `dest[i]` is the
    /// combination of `src[0..=i]`, left to right.
    ///
    /// `combine` must be associative; no identity is needed because
    /// `dest[0]` is `src[0]` itself.
    ///
    /// # Panics
    ///
    /// Panics if `dest` and `src` differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// let exec = skelly::Executor::new(4)?;
    /// let mut dest = [0; 4];
    /// exec.inclusive_scan(&mut dest, &[1, 2, 3, 4], |a, b| a + b);
    /// assert_eq!(dest, [1, 3, 6, 10]);
    /// # Ok::<(), skelly::SkellyError>(())
    /// ```
    pub fn inclusive_scan<T, F>(&self, dest: &mut [T], src: &[T], combine: F)
    where
        T: Clone + Send + Sync,
        F: Fn(&T, &T) -> T + Sync,
    {
        scan::inclusive_scan(self, dest, src, &combine);
    }

    /// Writes the running fold of everything before each position:
    /// `dest[0]` is `identity` and `dest[i]` is the combination of
    /// `src[0..i]`.
    ///
    /// `src[n-1]` never contributes to the output.
    ///
    /// # Panics
    ///
    /// Panics if `dest` and `src` differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// let exec = skelly::Executor::new(4)?;
    /// let mut dest = [0; 4];
    /// exec.exclusive_scan(&mut dest, &[1, 2, 3, 4], 0, |a, b| a + b);
    /// assert_eq!(dest, [0, 1, 3, 6]);
    /// # Ok::<(), skelly::SkellyError>(())
    /// ```
    pub fn exclusive_scan<T, F>(&self, dest: &mut [T], src: &[T], identity: T, combine: F)
    where
        T: Clone + Send + Sync,
        F: Fn(&T, &T) -> T + Sync,
    {
        scan::exclusive_scan(self, dest, src, identity, &combine);
    }

    /// Copies `src[filter[i]]` to `dest[i]` for every `i`, in parallel.
    ///
    /// The whole filter is validated before anything is copied.
    ///
    /// # Errors
    ///
    /// Returns [`SkellyError::IndexOutOfBounds`](crate::SkellyError::IndexOutOfBounds)
    /// for the smallest filter position whose entry is out of range; `dest`
    /// is untouched in that case.
    ///
    /// # Panics
    ///
    /// Panics if `dest` and `filter` differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// let exec = skelly::Executor::new(2)?;
    /// let src = ['a', 'b', 'c', 'd'];
    /// let mut dest = ['_'; 3];
    /// exec.gather(&mut dest, &src, &[3, 0, 0])?;
    /// assert_eq!(dest, ['d', 'a', 'a']);
    /// # Ok::<(), skelly::SkellyError>(())
    /// ```
    pub fn gather<T>(&self, dest: &mut [T], src: &[T], filter: &[usize]) -> Result<()>
    where
        T: Clone + Send + Sync,
    {
        gather::gather(self, dest, src, filter)
    }

    /// Copies `src[i]` to `dest[filter[i]]` for every `i`, in parallel.
    ///
    /// When several sources map to one destination slot, the highest source
    /// index wins, matching a sequential left-to-right loop. Slots no source
    /// maps to keep their previous contents.
    ///
    /// # Panics
    ///
    /// Panics if `filter` and `src` differ in length, or if any filter entry
    /// is outside `dest`.
    pub fn scatter<T>(&self, dest: &mut [T], src: &[T], filter: &[usize])
    where
        T: Clone + Send + Sync,
    {
        scatter::scatter(self, dest, src, filter);
    }

    /// Like [`scatter`](Executor::scatter), but the lowest source index wins
    /// collisions.
    ///
    /// # Panics
    ///
    /// Panics if `filter` and `src` differ in length, or if any filter entry
    /// is outside `dest`.
    pub fn priority_scatter<T>(&self, dest: &mut [T], src: &[T], filter: &[usize])
    where
        T: Clone + Send + Sync,
    {
        scatter::priority_scatter(self, dest, src, filter);
    }

    /// Runs every stage over the whole input before the next stage starts:
    /// one parallel map per stage with a barrier in between.
    ///
    /// An empty stage list copies `src` to `dest` unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `dest` and `src` differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// let exec = skelly::Executor::new(2)?;
    /// let stages: [skelly::Stage<'_, i32>; 2] = [&|x| x + 1, &|x| x * 2];
    /// let mut dest = [0; 3];
    /// exec.map_pipeline(&mut dest, &[1, 2, 3], &stages);
    /// assert_eq!(dest, [4, 6, 8]);
    /// # Ok::<(), skelly::SkellyError>(())
    /// ```
    pub fn map_pipeline<T>(&self, dest: &mut [T], src: &[T], stages: &[Stage<'_, T>])
    where
        T: Clone + Send + Sync,
    {
        pipeline::map_pipeline(self, dest, src, stages);
    }

    /// In-place form of [`map_pipeline`](Executor::map_pipeline).
    pub fn map_pipeline_in_place<T>(&self, data: &mut [T], stages: &[Stage<'_, T>])
    where
        T: Send,
    {
        pipeline::map_pipeline_in_place(self, data, stages);
    }

    /// Runs the whole stage chain on each element inside a single task, one
    /// task per element.
    ///
    /// Same results as [`map_pipeline`](Executor::map_pipeline); elements
    /// never wait for their neighbours between stages.
    ///
    /// # Panics
    ///
    /// Panics if `dest` and `src` differ in length.
    pub fn item_pipeline<T>(&self, dest: &mut [T], src: &[T], stages: &[Stage<'_, T>])
    where
        T: Clone + Send + Sync,
    {
        pipeline::item_pipeline(self, dest, src, stages);
    }

    /// In-place form of [`item_pipeline`](Executor::item_pipeline).
    pub fn item_pipeline_in_place<T>(&self, data: &mut [T], stages: &[Stage<'_, T>])
    where
        T: Send,
    {
        pipeline::item_pipeline_in_place(self, data, stages);
    }

    /// Streams elements through the stages in a diagonal wavefront: element
    /// `i` runs stage `j` on wave `i + j`, so at most one element occupies
    /// each stage per wave.
    ///
    /// Same results as [`map_pipeline`](Executor::map_pipeline).
    ///
    /// # Panics
    ///
    /// Panics if `dest` and `src` differ in length.
    pub fn staged_pipeline<T>(&self, dest: &mut [T], src: &[T], stages: &[Stage<'_, T>])
    where
        T: Clone + Send + Sync,
    {
        pipeline::staged_pipeline(self, dest, src, stages);
    }

    /// In-place form of [`staged_pipeline`](Executor::staged_pipeline).
    pub fn staged_pipeline_in_place<T>(&self, data: &mut [T], stages: &[Stage<'_, T>])
    where
        T: Send,
    {
        pipeline::staged_pipeline_in_place(self, data, stages);
    }

    /// Like [`map`](Executor::map), but every element is its own stealable
    /// task, so wildly uneven per-element costs still balance across
    /// workers.
    ///
    /// # Panics
    ///
    /// Panics if `dest` and `src` differ in length.
    pub fn farm<T, F>(&self, dest: &mut [T], src: &[T], transform: F)
    where
        T: Send + Sync,
        F: Fn(&T) -> T + Sync,
    {
        farm::farm(self, dest, src, &transform);
    }

    /// In-place form of [`farm`](Executor::farm).
    pub fn farm_in_place<T, F>(&self, data: &mut [T], transform: F)
    where
        T: Send,
        F: Fn(&T) -> T + Sync,
    {
        farm::farm_in_place(self, data, &transform);
    }
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("workers", &self.workers())
            .finish_non_exhaustive()
    }
}

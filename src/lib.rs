//! Data-parallel algorithm skeletons built on Rayon fork-join pools.
//!
//! An [`Executor`] owns a thread pool with an explicit worker count and runs
//! the classic skeleton repertoire over slices: map, stencil, reduce,
//! inclusive and exclusive scan, gather, scatter, stage pipelines and a
//! work-stealing farm, plus a sequential [`pack`] for stream compaction.
//! Every operation returns the same result for every worker count; tiled
//! operations only require the combine operation to be associative, never
//! commutative.
//!
//! # Examples
//!
//! ```
//! use skelly::Executor;
//!
//! let exec = Executor::new(4)?;
//!
//! let src = [1, 2, 3, 4];
//! let mut squares = [0; 4];
//! exec.map(&mut squares, &src, |x| x * x);
//! assert_eq!(squares, [1, 4, 9, 16]);
//!
//! let total = exec.reduce(&squares, 0, |a, b| a + b);
//! assert_eq!(total, 30);
//!
//! let mut running = [0; 4];
//! exec.inclusive_scan(&mut running, &squares, |a, b| a + b);
//! assert_eq!(running, [1, 5, 14, 30]);
//! # Ok::<(), skelly::SkellyError>(())
//! ```

pub mod error;
mod executor;
mod patterns;
pub mod tile;

pub use error::{Result, SkellyError};
pub use executor::Executor;
pub use patterns::pack::pack;
pub use patterns::pipeline::Stage;
pub use tile::{tiles, tiles_in, Tile};

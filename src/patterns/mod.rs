//! The algorithm implementations behind the [`Executor`](crate::Executor)
//! methods.

pub(crate) mod farm;
pub(crate) mod gather;
pub(crate) mod map;
pub(crate) mod pack;
pub(crate) mod pipeline;
pub(crate) mod reduce;
pub(crate) mod scan;
pub(crate) mod scatter;
pub(crate) mod stencil;

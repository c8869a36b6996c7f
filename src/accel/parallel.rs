// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

use log::*;

#[cfg(feature = "fuse-parallel")]
use rayon::iter::PanicFuse;
use rayon::{current_num_threads, iter::ParallelIterator, ThreadPoolBuilder};

use crate::errors::{AgreementError, Result};

/// Size the global thread pool used for batch computations.
///
/// Must be called before any batch work; the global pool can only be built once.
pub fn init_pool(n_threads: usize) -> Result<()> {
    debug!("initializing agreement thread pool with {} threads", n_threads);
    ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build_global()
        .map_err(|e| AgreementError::ThreadPool(e.to_string()))
}

/// Number of threads in the current pool.
pub fn thread_count() -> usize {
    current_num_threads()
}

#[cfg(not(feature = "fuse-parallel"))]
pub fn maybe_fuse<I: ParallelIterator>(iter: I) -> I {
    iter
}

#[cfg(feature = "fuse-parallel")]
pub fn maybe_fuse<I: ParallelIterator>(iter: I) -> PanicFuse<I> {
    iter.panic_fuse()
}

use std::{io, thread};

use thiserror::Error;
use tokio::runtime::Handle;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("host parallelism is unavailable: {0}")]
    Parallelism(#[from] io::Error),

    #[error("runtime reports no worker threads")]
    NoWorkers,
}

pub type ProbeResult<T> = Result<T, ProbeError>;

/// Upper bounds of the shared execution pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolCapacity {
    /// Units that run scheduled work.
    pub max_workers: usize,
    /// Units that blocking and I/O-completion work can be offloaded to.
    pub max_io: usize,
}

impl PoolCapacity {
    pub const fn new(max_workers: usize, max_io: usize) -> Self {
        Self {
            max_workers,
            max_io,
        }
    }

    /// `true` when everything is confined to one cooperative unit.
    #[inline]
    pub const fn is_single_unit(&self) -> bool {
        self.max_workers == 1 && self.max_io == 1
    }
}

/// Source of execution-pool capacity.
pub trait CapacityProbe {
    fn capacity(&self) -> ProbeResult<PoolCapacity>;
}

/// A fixed capacity probes as itself.
impl CapacityProbe for PoolCapacity {
    fn capacity(&self) -> ProbeResult<PoolCapacity> {
        Ok(*self)
    }
}

/// Probes the live environment.
///
/// - workers: worker count of the tokio runtime the caller runs on (1 for a
///   current-thread runtime), or host parallelism outside a runtime;
/// - io: host parallelism.
///
/// On `wasm` targets without atomics both are 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeProbe;

impl CapacityProbe for RuntimeProbe {
    fn capacity(&self) -> ProbeResult<PoolCapacity> {
        if cfg!(all(target_family = "wasm", not(target_feature = "atomics"))) {
            return Ok(PoolCapacity::new(1, 1));
        }

        let host = thread::available_parallelism()?.get();
        let workers = match Handle::try_current() {
            Ok(handle) => handle.metrics().num_workers(),
            Err(_) => host,
        };
        checked_capacity(workers, host)
    }
}

fn checked_capacity(workers: usize, io: usize) -> ProbeResult<PoolCapacity> {
    if workers == 0 {
        return Err(ProbeError::NoWorkers);
    }
    Ok(PoolCapacity::new(workers, io))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_unit_requires_both_maxima_to_be_one() {
        assert!(PoolCapacity::new(1, 1).is_single_unit());
        assert!(!PoolCapacity::new(1, 2).is_single_unit());
        assert!(!PoolCapacity::new(2, 1).is_single_unit());
        assert!(!PoolCapacity::new(0, 0).is_single_unit());
        assert!(!PoolCapacity::new(8, 8).is_single_unit());
    }

    #[test]
    fn fixed_capacity_probes_as_itself() {
        let cap = PoolCapacity::new(3, 7);
        assert_eq!(cap.capacity().unwrap(), cap);
    }

    #[test]
    fn zero_workers_is_an_error() {
        assert!(matches!(checked_capacity(0, 4), Err(ProbeError::NoWorkers)));
        assert_eq!(checked_capacity(2, 4).unwrap(), PoolCapacity::new(2, 4));
    }

    #[test]
    fn outside_runtime_uses_host_parallelism() {
        let host = thread::available_parallelism().unwrap().get();
        let cap = RuntimeProbe.capacity().unwrap();
        assert_eq!(cap, PoolCapacity::new(host, host));
    }

    #[tokio::test]
    async fn current_thread_runtime_has_one_worker() {
        let cap = RuntimeProbe.capacity().unwrap();
        assert_eq!(cap.max_workers, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 3)]
    async fn multi_thread_runtime_reports_its_workers() {
        let cap = RuntimeProbe.capacity().unwrap();
        assert_eq!(cap.max_workers, 3);
    }
}

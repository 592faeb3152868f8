//! Build parallelism selection.

/// Job count used when the processor count cannot be determined.
const DEFAULT_JOBS: usize = 2;

/// Query the number of processors available to this process.
pub fn available_cpus() -> Option<usize> {
    std::thread::available_parallelism().ok().map(|n| n.get())
}

/// Compute the `make -j` value from an available processor count.
///
/// 80% of the available processors, truncated, with a floor of 1. An
/// unavailable count falls back to 2.
pub fn build_parallelism(cpus: Option<usize>) -> usize {
    match cpus {
        Some(n) => ((n * 4) / 5).max(1),
        None => DEFAULT_JOBS,
    }
}

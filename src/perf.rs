use std::time::Instant;

/// 性能统计 Guard：记录 elapsed_ms
///
/// 使用方式：
/// ```ignore
/// let _perf = supplier_capacity_report::perf::PerfGuard::new("run_pipeline");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;

        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            "done"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_guard_drop_does_not_panic() {
        let guard = PerfGuard::new("test_op");
        drop(guard);
    }
}

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Cumulative time and call count of one profiled section.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SectionTiming {
    pub total: Duration,
    pub calls: u64,
}

impl SectionTiming {
    pub fn mean(&self) -> Duration {
        if self.calls == 0 {
            return Duration::ZERO;
        }
        self.total.div_f64(self.calls as f64)
    }
}

/// Scoped profiler accumulating time per named section (trials, study cases).
#[derive(Debug, Default)]
pub struct Profiler {
    pub timings: HashMap<&'static str, SectionTiming>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &'static str, elapsed: Duration) {
        let entry = self.timings.entry(name).or_default();
        entry.total += elapsed;
        entry.calls += 1;
    }

    pub fn finish(&mut self, guard: &ProfilerGuard) {
        self.record(guard.name, guard.start.elapsed());
    }

    /// Sections ordered by total time, longest first.
    pub fn report_sorted(&self) -> Vec<(&'static str, SectionTiming)> {
        let mut v: Vec<_> = self.timings.iter().map(|(n, t)| (*n, *t)).collect();
        v.sort_by(|a, b| b.1.total.cmp(&a.1.total));
        v
    }

    pub fn clear(&mut self) {
        self.timings.clear();
    }

    pub fn print_and_clear(&mut self) {
        println!("📊 Profile:");
        for (name, timing) in self.report_sorted() {
            println!(
                "{:<20} {:>10?} total {:>8} calls {:>10?} mean",
                name,
                timing.total,
                timing.calls,
                timing.mean()
            );
        }
        self.clear();
    }
}

pub struct ProfilerGuard {
    name: &'static str,
    start: Instant,
}

/// Start a profiling section. Returns a guard that will update the global
/// profiler when dropped.
pub fn start(name: &'static str) -> ProfilerGuard {
    ProfilerGuard { name, start: Instant::now() }
}

#[cfg(feature = "profiling")]
impl Drop for ProfilerGuard {
    fn drop(&mut self) {
        crate::PROFILER.lock().finish(self);
    }
}

/// Macro helper to profile a scope only when the `profiling` feature is enabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _guard = $crate::profiler::start($name);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_per_section() {
        let mut profiler = Profiler::new();
        profiler.record("trial", Duration::from_millis(4));
        profiler.record("trial", Duration::from_millis(2));
        profiler.record("study_case", Duration::from_millis(10));

        let report = profiler.report_sorted();
        assert_eq!(report[0].0, "study_case");
        let trial = profiler.timings["trial"];
        assert_eq!(trial.calls, 2);
        assert_eq!(trial.total, Duration::from_millis(6));
        assert_eq!(trial.mean(), Duration::from_millis(3));

        profiler.clear();
        assert!(profiler.report_sorted().is_empty());
    }

    #[test]
    fn mean_handles_call_counts_beyond_u32() {
        let calls = 1u64 << 32;
        let timing = SectionTiming {
            total: Duration::from_secs(calls),
            calls,
        };
        assert_eq!(timing.mean(), Duration::from_secs(1));
        assert_eq!(SectionTiming::default().mean(), Duration::ZERO);
    }

    #[test]
    fn guard_feeds_profiler() {
        let mut profiler = Profiler::new();
        let guard = start("trial");
        profiler.finish(&guard);
        assert_eq!(profiler.timings["trial"].calls, 1);
    }
}

use std::time::{Duration, Instant};

use tracing::info;

use super::easing::ease_out_cubic;
use super::timer::Interval;
use crate::cluster::{ClusterHandle, ClusterStateError};
use crate::config::{
    MEMORY_MAX_GB, STATUS_ANIM_DURATION_MS, STATUS_TICK_MS, TOTAL_CORES_MAX, TOTAL_NODES,
};

/// Аниматор счётчиков кластера.
///
/// Три счётчика растут независимо по одной ease-out кривой к своим
/// максимумам; между собой они никак не согласованы, общие у них
/// только длительность и форма кривой.
#[derive(Debug)]
pub struct MetricsAnimator {
    ticker: Option<Interval>,
    step: u32,
    steps: u32,
    nodes_max: u32,
    cores_max: u32,
    memory_max: u32,
}

impl MetricsAnimator {
    pub fn new(now: Instant) -> Self {
        Self::with_timing(
            Duration::from_millis(STATUS_ANIM_DURATION_MS),
            Duration::from_millis(STATUS_TICK_MS),
            now,
        )
    }

    pub fn with_timing(duration: Duration, tick: Duration, now: Instant) -> Self {
        let steps = (duration.as_millis() / tick.as_millis()) as u32;
        Self {
            ticker: Some(Interval::new(tick, now)),
            step: 0,
            steps,
            nodes_max: TOTAL_NODES,
            cores_max: TOTAL_CORES_MAX,
            memory_max: MEMORY_MAX_GB,
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Продвигает анимацию и записывает свежие значения в общее состояние.
    /// После последнего тика тикер гасится, значения стоят на максимумах.
    pub fn advance(
        &mut self,
        now: Instant,
        cluster: &ClusterHandle,
    ) -> Result<(), ClusterStateError> {
        let Some(ticker) = &mut self.ticker else {
            return Ok(());
        };

        let ticks = ticker.due_ticks(now);
        if ticks == 0 {
            return Ok(());
        }

        self.step = (self.step + ticks).min(self.steps);
        let progress = ease_out_cubic(f64::from(self.step) / f64::from(self.steps));

        let nodes = eased_value(self.nodes_max, progress);
        let cores = eased_value(self.cores_max, progress);
        let memory = eased_value(self.memory_max, progress);
        cluster.write(|m| {
            m.nodes_online = nodes;
            m.total_cores = cores;
            m.memory_available = memory;
        })?;

        if self.step >= self.steps {
            self.ticker = None;
            info!(nodes, cores, memory, "status animation reached full scale");
        }

        Ok(())
    }
}

// Минимальная обрезка гарантирует, что счётчик не перескочит максимум
fn eased_value(max: u32, progress: f64) -> u32 {
    ((f64::from(max) * progress).floor() as u32).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::ClusterProvider;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn counters_are_monotone_and_clamped() {
        let t0 = Instant::now();
        let provider = ClusterProvider::new();
        let handle = provider.handle();
        // укороченная длительность: 100 тиков по 50 мс
        let mut anim = MetricsAnimator::with_timing(5000 * MS, 50 * MS, t0);

        let mut prev = handle.read().unwrap();
        for i in 1..=110 {
            anim.advance(t0 + i * 50 * MS, &handle).unwrap();
            let cur = handle.read().unwrap();

            assert!(cur.nodes_online >= prev.nodes_online);
            assert!(cur.total_cores >= prev.total_cores);
            assert!(cur.memory_available >= prev.memory_available);

            assert!(cur.nodes_online <= 56);
            assert!(cur.total_cores <= 3584);
            assert!(cur.memory_available <= 5376);
            prev = cur;
        }
    }

    #[test]
    fn full_scale_reached_at_final_tick() {
        let t0 = Instant::now();
        let provider = ClusterProvider::new();
        let handle = provider.handle();
        let mut anim = MetricsAnimator::with_timing(5000 * MS, 50 * MS, t0);

        anim.advance(t0 + 5000 * MS, &handle).unwrap();
        let metrics = handle.read().unwrap();

        assert_eq!(metrics.nodes_online, 56);
        assert_eq!(metrics.total_cores, 3584);
        assert_eq!(metrics.memory_available, 5376);
        assert!(!anim.is_running());
    }

    #[test]
    fn stops_ticking_after_duration() {
        let t0 = Instant::now();
        let provider = ClusterProvider::new();
        let handle = provider.handle();
        let mut anim = MetricsAnimator::with_timing(5000 * MS, 50 * MS, t0);

        anim.advance(t0 + 6000 * MS, &handle).unwrap();
        assert!(!anim.is_running());

        // дальнейшие вызовы ничего не меняют
        let before = handle.read().unwrap();
        anim.advance(t0 + 60_000 * MS, &handle).unwrap();
        assert_eq!(handle.read().unwrap(), before);
    }

    #[test]
    fn write_after_provider_drop_propagates_error() {
        let t0 = Instant::now();
        let provider = ClusterProvider::new();
        let handle = provider.handle();
        let mut anim = MetricsAnimator::with_timing(5000 * MS, 50 * MS, t0);
        drop(provider);

        assert!(anim.advance(t0 + 50 * MS, &handle).is_err());
    }

    #[test]
    fn easing_never_overshoots() {
        for step in 0..=3600u32 {
            let p = ease_out_cubic(f64::from(step) / 3600.0);
            assert!(eased_value(3584, p) <= 3584);
        }
        assert_eq!(eased_value(3584, 1.0), 3584);
        assert_eq!(eased_value(56, 0.0), 0);
    }
}

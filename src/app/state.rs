use std::time::Instant;

use tracing::{error, info};

use crate::anim::{LaunchSequence, MetricsAnimator, NodeGrid};
use crate::cluster::{ClusterHandle, ClusterProvider, ClusterStateError};
use crate::config::{
    GAUGE_BLUE, GAUGE_GREEN, GAUGE_PURPLE, GAUGE_RED, MEMORY_MAX_GB, STORAGE_CAPACITY_PB,
    TOTAL_CORES_MAX, TOTAL_NODES,
};
use crate::widgets::Gauge;

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Launch,
    Status,
}

/// Экран статуса: аниматор счётчиков, четыре индикатора и сетка узлов.
/// Создаётся при переходе на страницу статуса; его таймеры живут ровно
/// столько, сколько живёт сам экран.
pub struct StatusScreen {
    pub metrics: MetricsAnimator,
    pub nodes_gauge: Gauge,
    pub cores_gauge: Gauge,
    pub memory_gauge: Gauge,
    pub storage_gauge: Gauge,
    pub grid: NodeGrid,
}

impl StatusScreen {
    pub fn new(now: Instant) -> Self {
        let mut storage_gauge =
            Gauge::fixed("Storage Capacity", "PB", STORAGE_CAPACITY_PB, GAUGE_PURPLE);
        storage_gauge.set_value(STORAGE_CAPACITY_PB, now);

        Self {
            metrics: MetricsAnimator::new(now),
            nodes_gauge: Gauge::counting("Nodes Online", "", f64::from(TOTAL_NODES), GAUGE_RED),
            cores_gauge: Gauge::counting(
                "Total Cores Active",
                "",
                f64::from(TOTAL_CORES_MAX),
                GAUGE_BLUE,
            ),
            memory_gauge: Gauge::counting(
                "Memory Available",
                "GB",
                f64::from(MEMORY_MAX_GB),
                GAUGE_GREEN,
            ),
            storage_gauge,
            grid: NodeGrid::new(now),
        }
    }

    fn advance(&mut self, now: Instant, cluster: &ClusterHandle) -> Result<(), ClusterStateError> {
        self.metrics.advance(now, cluster)?;
        let metrics = cluster.read()?;

        self.grid.advance(now, metrics.nodes_online);

        self.nodes_gauge.set_value(f64::from(metrics.nodes_online), now);
        self.cores_gauge.set_value(f64::from(metrics.total_cores), now);
        self.memory_gauge
            .set_value(f64::from(metrics.memory_available), now);

        self.nodes_gauge.advance(now);
        self.cores_gauge.advance(now);
        self.memory_gauge.advance(now);

        Ok(())
    }
}

pub struct HpcApp {
    pub page: Page,
    // Владелец общего состояния; дескрипторы работают, пока он жив
    pub provider: ClusterProvider,
    cluster: ClusterHandle,
    pub launch: LaunchSequence,
    pub status: Option<StatusScreen>,

    pub fps: f64,
    pub last_frame_time: Instant,

    // Error handling
    pub error_message: Option<String>,
}

impl Default for HpcApp {
    fn default() -> Self {
        let provider = ClusterProvider::new();
        let cluster = provider.handle();
        Self {
            page: Page::Launch,
            provider,
            cluster,
            launch: LaunchSequence::default(),
            status: None,
            fps: 0.0,
            last_frame_time: Instant::now(),
            error_message: None,
        }
    }
}

impl HpcApp {
    pub fn cluster(&self) -> &ClusterHandle {
        &self.cluster
    }

    pub fn start_launch(&mut self, now: Instant) {
        self.launch.start(now);
    }

    /// Продвигает все анимации текущей страницы на один кадр.
    pub fn advance(&mut self, now: Instant) {
        if let Err(e) = self.try_advance(now) {
            error!("animation state error: {e}");
            self.error_message = Some(format!("Internal state error: {e}"));
        }
    }

    fn try_advance(&mut self, now: Instant) -> Result<(), ClusterStateError> {
        match self.page {
            Page::Launch => {
                if self.launch.advance(now) {
                    self.cluster.set_launch_complete(true)?;
                    self.page = Page::Status;
                    // экран статуса монтируется здесь, его таймеры стартуют сейчас
                    self.status = Some(StatusScreen::new(now));
                    info!("switching to status dashboard");
                }
            }
            Page::Status => {
                if let Some(status) = &mut self.status {
                    status.advance(now, &self.cluster)?;
                }
            }
        }
        Ok(())
    }

    pub fn update_fps(&mut self) {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time).as_secs_f64();
        self.last_frame_time = now;
        self.fps = 1.0 / frame_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const MS: Duration = Duration::from_millis(1);

    fn app() -> HpcApp {
        let mut app = HpcApp::default();
        app.launch = LaunchSequence::with_timing(100 * MS, 1500 * MS);
        app
    }

    #[test]
    fn full_launch_scenario_switches_page_and_marks_complete() {
        let t0 = Instant::now();
        let mut app = app();
        app.start_launch(t0);

        // 10 тиков: прогресс 10, первый этап
        app.advance(t0 + 1000 * MS);
        assert_eq!(app.launch.progress(), 10);
        assert_eq!(app.launch.current_step(), 0);
        assert_eq!(app.page, Page::Launch);

        // 600 тиков: прогресс ровно 100, тикер остановлен
        app.advance(t0 + 60_000 * MS);
        assert_eq!(app.launch.progress(), 100);
        assert_eq!(app.page, Page::Launch);

        // пауза 1500 мс - и переключение на статус
        app.advance(t0 + 61_500 * MS);
        assert_eq!(app.page, Page::Status);
        assert!(app.status.is_some());
        assert!(app.cluster().read().unwrap().launch_complete);
    }

    #[test]
    fn status_screen_drives_counters_and_grid() {
        let t0 = Instant::now();
        let mut app = app();
        app.page = Page::Status;
        app.status = Some(StatusScreen::new(t0));

        // три секунды анимации: счётчики сдвинулись, но далеки от максимума
        for i in 1..=60u32 {
            app.advance(t0 + i * 50 * MS);
        }
        let metrics = app.cluster().read().unwrap();
        assert!(metrics.nodes_online > 0);
        assert!(metrics.nodes_online < 56);
        assert!(metrics.total_cores < 3584);

        let status = app.status.as_ref().unwrap();
        assert!(status.grid.revealed() <= metrics.nodes_online);
        assert_eq!(status.storage_gauge.display_value(), 1.5);
    }
}

use std::time::{Duration, Instant};

use tracing::info;

use super::easing::step_index;
use super::timer::{Interval, Timeout};
use crate::config::{LAUNCH_SETTLE_MS, LAUNCH_STEPS, LAUNCH_TICK_MS};

/// Секвенсор последовательности запуска.
///
/// После `start` прогресс растёт на 1 за тик до ровно 100, затем тикер
/// останавливается, и после паузы `settle` завершение срабатывает один раз.
#[derive(Debug)]
pub struct LaunchSequence {
    progress: u32,
    ticker: Option<Interval>,
    settle: Option<Timeout>,
    tick: Duration,
    settle_delay: Duration,
    completed: bool,
}

impl Default for LaunchSequence {
    fn default() -> Self {
        Self::with_timing(
            Duration::from_millis(LAUNCH_TICK_MS),
            Duration::from_millis(LAUNCH_SETTLE_MS),
        )
    }
}

impl LaunchSequence {
    pub fn with_timing(tick: Duration, settle_delay: Duration) -> Self {
        Self {
            progress: 0,
            ticker: None,
            settle: None,
            tick,
            settle_delay,
            completed: false,
        }
    }

    pub fn start(&mut self, now: Instant) {
        if self.is_launching() || self.completed {
            return;
        }
        info!("launch sequence started");
        self.progress = 0;
        self.ticker = Some(Interval::new(self.tick, now));
    }

    pub fn is_launching(&self) -> bool {
        self.ticker.is_some() || self.settle.is_some()
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Индекс текущего этапа из фиксированного списка `LAUNCH_STEPS`.
    pub fn current_step(&self) -> usize {
        step_index(self.progress, LAUNCH_STEPS.len())
    }

    /// Продвигает секвенсор. Возвращает true ровно один раз - в момент,
    /// когда пауза после 100% истекла и запуск считается завершённым.
    pub fn advance(&mut self, now: Instant) -> bool {
        if let Some(ticker) = &mut self.ticker {
            let ticks = ticker.due_ticks(now);
            for _ in 0..ticks {
                self.progress += 1;
                if self.progress >= 100 {
                    // Точка остановки: ровно 100, тикер гасим один раз
                    self.progress = 100;
                    self.ticker = None;
                    self.settle = Some(Timeout::new(self.settle_delay, now));
                    break;
                }
            }
        }

        if let Some(settle) = &mut self.settle {
            if settle.poll(now) {
                self.settle = None;
                self.completed = true;
                info!("launch sequence complete");
                return true;
            }
        }

        false
    }
}

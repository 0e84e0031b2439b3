use std::time::{Duration, Instant};

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::debug;

use super::timer::{Interval, Timeout};
use crate::config::{GRID_TICK_MS, NODE_INIT_MIN_MS, NODE_INIT_RANDOM_RANGE_MS, TOTAL_NODES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Offline,
    Initializing,
    Online,
}

impl NodeStatus {
    pub fn label(self) -> &'static str {
        match self {
            NodeStatus::Offline => "Offline",
            NodeStatus::Initializing => "Initializing",
            NodeStatus::Online => "Online",
        }
    }
}

/// Источник задержки инициализации узла. Продакшен использует ГСЧ,
/// тесты подставляют фиксированную задержку.
pub trait DelaySource {
    fn next_delay(&mut self) -> Duration;
}

/// Равномерная случайная задержка в [min, min + range).
pub struct RandomDelay {
    rng: ThreadRng,
    min: Duration,
    range_ms: u64,
}

impl Default for RandomDelay {
    fn default() -> Self {
        Self {
            rng: rand::thread_rng(),
            min: Duration::from_millis(NODE_INIT_MIN_MS),
            range_ms: NODE_INIT_RANDOM_RANGE_MS,
        }
    }
}

impl DelaySource for RandomDelay {
    fn next_delay(&mut self) -> Duration {
        self.min + Duration::from_millis(self.rng.gen_range(0..self.range_ms))
    }
}

/// Один узел сетки: offline -> initializing (сразу при активации)
/// -> online (после задержки). Деактивация сбрасывает в offline и
/// отменяет ожидающий переход.
#[derive(Debug)]
pub struct NodeVisual {
    id: u32,
    status: NodeStatus,
    init_timer: Option<Timeout>,
}

impl NodeVisual {
    fn new(id: u32) -> Self {
        Self {
            id,
            status: NodeStatus::Offline,
            init_timer: None,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }

    fn activate(&mut self, now: Instant, delays: &mut dyn DelaySource) {
        if self.status != NodeStatus::Offline {
            return;
        }
        self.status = NodeStatus::Initializing;
        self.init_timer = Some(Timeout::new(delays.next_delay(), now));
    }

    fn deactivate(&mut self) {
        self.status = NodeStatus::Offline;
        self.init_timer = None;
    }

    fn advance(&mut self, now: Instant) {
        if let Some(timer) = &mut self.init_timer {
            if timer.poll(now) {
                self.status = NodeStatus::Online;
                self.init_timer = None;
                debug!(node = self.id, "node online");
            }
        }
    }
}

/// Сетка из 56 узлов с последовательным раскрытием.
///
/// Раз в тик раскрывается ровно один следующий узел по возрастанию id,
/// пока раскрытых не станет min(target, 56). Сброс target в 0 очищает
/// раскрытые узлы немедленно, без анимации.
pub struct NodeGrid {
    nodes: Vec<NodeVisual>,
    revealed: u32,
    ticker: Interval,
    delays: Box<dyn DelaySource>,
}

impl NodeGrid {
    pub fn new(now: Instant) -> Self {
        Self::with_delay_source(
            Duration::from_millis(GRID_TICK_MS),
            Box::new(RandomDelay::default()),
            now,
        )
    }

    pub fn with_delay_source(
        tick: Duration,
        delays: Box<dyn DelaySource>,
        now: Instant,
    ) -> Self {
        Self {
            nodes: (1..=TOTAL_NODES).map(NodeVisual::new).collect(),
            revealed: 0,
            ticker: Interval::new(tick, now),
            delays,
        }
    }

    pub fn nodes(&self) -> &[NodeVisual] {
        &self.nodes
    }

    pub fn revealed(&self) -> u32 {
        self.revealed
    }

    /// Продвигает раскрытие к цели `target` и переходы status у узлов.
    pub fn advance(&mut self, now: Instant, target: u32) {
        let ticks = self.ticker.due_ticks(now);

        if target == 0 {
            if self.revealed > 0 {
                self.revealed = 0;
                self.nodes.iter_mut().for_each(NodeVisual::deactivate);
            }
            return;
        }

        let goal = target.min(TOTAL_NODES);
        for _ in 0..ticks {
            if self.revealed >= goal {
                break;
            }
            self.revealed += 1;
            let next = &mut self.nodes[(self.revealed - 1) as usize];
            next.activate(now, self.delays.as_mut());
        }

        for node in &mut self.nodes {
            node.advance(now);
        }
    }
}

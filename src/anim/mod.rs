// Модуль анимации - таймеры, кривые сглаживания и секвенсоры
pub mod easing;
pub mod launch;
pub mod metrics;
pub mod reveal;
pub mod timer;

pub use launch::LaunchSequence;
pub use metrics::MetricsAnimator;
pub use reveal::{NodeGrid, NodeStatus};
pub use timer::{Interval, Timeout};

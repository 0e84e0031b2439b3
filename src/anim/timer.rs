use std::time::{Duration, Instant};

/// Периодический таймер, опрашиваемый раз в кадр.
///
/// Владелец вызывает `due_ticks` с текущим временем и получает число
/// тиков, накопившихся с прошлого опроса: медленный кадр не теряет тики.
/// Отмена — это просто Drop владельца вместе с таймером.
#[derive(Debug)]
pub struct Interval {
    period: Duration,
    next_due: Instant,
}

impl Interval {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now >= self.next_due {
            self.next_due += self.period;
            ticks += 1;
        }
        ticks
    }
}

/// Одноразовый таймер: `poll` возвращает true ровно один раз.
#[derive(Debug)]
pub struct Timeout {
    due: Instant,
    fired: bool,
}

impl Timeout {
    pub fn new(delay: Duration, now: Instant) -> Self {
        Self {
            due: now + delay,
            fired: false,
        }
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if self.fired || now < self.due {
            return false;
        }
        self.fired = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn interval_counts_elapsed_ticks() {
        let t0 = Instant::now();
        let mut interval = Interval::new(50 * MS, t0);

        assert_eq!(interval.due_ticks(t0), 0);
        assert_eq!(interval.due_ticks(t0 + 49 * MS), 0);
        assert_eq!(interval.due_ticks(t0 + 50 * MS), 1);
        assert_eq!(interval.due_ticks(t0 + 50 * MS), 0);
        // медленный кадр: три периода прошло - три тика
        assert_eq!(interval.due_ticks(t0 + 200 * MS), 3);
    }

    #[test]
    fn timeout_fires_exactly_once() {
        let t0 = Instant::now();
        let mut timeout = Timeout::new(1500 * MS, t0);

        assert!(!timeout.poll(t0 + 1499 * MS));
        assert!(timeout.poll(t0 + 1500 * MS));
        assert!(!timeout.poll(t0 + 1501 * MS));
        assert!(!timeout.poll(t0 + 10_000 * MS));
    }
}

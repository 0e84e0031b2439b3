use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use egui::{Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};

use crate::anim::timer::Interval;
use crate::config::{GAUGE_COUNT_DURATION_MS, GAUGE_TICK_MS, GAUGE_TRACK_COLOR};

const GAUGE_DIAMETER: f32 = 140.0;
const STROKE_WIDTH: f32 = 8.0;
const ARC_SAMPLES: usize = 64;

#[derive(Debug)]
enum DisplayMode {
    /// Показывает значение сразу, без счётной анимации.
    Static,
    /// Считает от нуля к значению линейными шагами.
    Counting {
        displayed: f64,
        increment: f64,
        ticker: Option<Interval>,
    },
}

/// Радиальный индикатор: дуга заполнена на value / max_value.
///
/// Доля заполнения намеренно не обрезается - при value > max_value
/// дуга уйдёт за полный круг, следить за этим обязан вызывающий.
#[derive(Debug)]
pub struct Gauge {
    title: String,
    unit: &'static str,
    value: f64,
    max_value: f64,
    color: Color32,
    tick: Duration,
    steps: u32,
    mode: DisplayMode,
}

impl Gauge {
    pub fn counting(title: &str, unit: &'static str, max_value: f64, color: Color32) -> Self {
        Self::with_timing(
            title,
            unit,
            max_value,
            color,
            Duration::from_millis(GAUGE_COUNT_DURATION_MS),
            Duration::from_millis(GAUGE_TICK_MS),
        )
    }

    pub fn with_timing(
        title: &str,
        unit: &'static str,
        max_value: f64,
        color: Color32,
        count_duration: Duration,
        tick: Duration,
    ) -> Self {
        Self {
            title: title.to_owned(),
            unit,
            value: 0.0,
            max_value,
            color,
            tick,
            steps: (count_duration.as_millis() / tick.as_millis()) as u32,
            mode: DisplayMode::Counting {
                displayed: 0.0,
                increment: 0.0,
                ticker: None,
            },
        }
    }

    pub fn fixed(title: &str, unit: &'static str, max_value: f64, color: Color32) -> Self {
        Self {
            title: title.to_owned(),
            unit,
            value: 0.0,
            max_value,
            color,
            tick: Duration::from_millis(GAUGE_TICK_MS),
            steps: 0,
            mode: DisplayMode::Static,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Устанавливает целевое значение. В счётном режиме смена значения
    /// перезапускает анимацию с нуля, а не с текущего показанного числа.
    pub fn set_value(&mut self, value: f64, now: Instant) {
        if value == self.value {
            return;
        }
        self.value = value;

        if let DisplayMode::Counting {
            displayed,
            increment,
            ticker,
        } = &mut self.mode
        {
            *displayed = 0.0;
            *increment = value / f64::from(self.steps);
            *ticker = Some(Interval::new(self.tick, now));
        }
    }

    pub fn advance(&mut self, now: Instant) {
        let DisplayMode::Counting {
            displayed,
            increment,
            ticker,
        } = &mut self.mode
        else {
            return;
        };
        let ticks = match ticker.as_mut() {
            Some(interval) => interval.due_ticks(now),
            None => return,
        };

        for _ in 0..ticks {
            *displayed += *increment;
            if *displayed >= self.value {
                *displayed = self.value;
                *ticker = None;
                break;
            }
        }
    }

    /// Доля заполнения дуги, без обрезки к [0, 1].
    pub fn fill_fraction(&self) -> f64 {
        self.value / self.max_value
    }

    pub fn display_value(&self) -> f64 {
        match &self.mode {
            DisplayMode::Static => self.value,
            DisplayMode::Counting { displayed, .. } => *displayed,
        }
    }

    fn formatted_value(&self) -> String {
        match &self.mode {
            DisplayMode::Static => self.value.to_string(),
            DisplayMode::Counting { displayed, .. } => {
                format_thousands(displayed.floor() as u64)
            }
        }
    }

    pub fn show(&self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(GAUGE_DIAMETER), Sense::hover());
            let painter = ui.painter_at(rect);
            let center = rect.center();
            let radius = GAUGE_DIAMETER / 2.0 - STROKE_WIDTH;

            // фоновое кольцо
            painter.circle_stroke(center, radius, Stroke::new(STROKE_WIDTH, GAUGE_TRACK_COLOR));

            // дуга заполнения, от верхней точки по часовой стрелке
            let sweep = self.fill_fraction() as f32 * TAU;
            if sweep > 0.0 {
                let points: Vec<Pos2> = (0..=ARC_SAMPLES)
                    .map(|i| {
                        let angle = -TAU / 4.0 + sweep * i as f32 / ARC_SAMPLES as f32;
                        center + radius * Vec2::new(angle.cos(), angle.sin())
                    })
                    .collect();
                painter.add(Shape::line(points, Stroke::new(STROKE_WIDTH, self.color)));
            }

            // значение и единица измерения в центре
            painter.text(
                center - Vec2::new(0.0, 8.0),
                egui::Align2::CENTER_CENTER,
                self.formatted_value(),
                FontId::proportional(26.0),
                self.color,
            );
            painter.text(
                center + Vec2::new(0.0, 16.0),
                egui::Align2::CENTER_CENTER,
                self.unit,
                FontId::proportional(12.0),
                Color32::from_gray(200),
            );

            ui.label(egui::RichText::new(&self.title).strong());
            ui.label(
                egui::RichText::new(format!("{:.1}%", self.fill_fraction() * 100.0))
                    .small()
                    .color(Color32::GRAY),
            );
        });
    }
}

fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GAUGE_RED;

    const MS: Duration = Duration::from_millis(1);

    fn counting_gauge() -> Gauge {
        Gauge::with_timing("Nodes Online", "", 56.0, GAUGE_RED, 2000 * MS, 50 * MS)
    }

    #[test]
    fn half_full_at_twenty_eight_of_fifty_six() {
        let t0 = Instant::now();
        let mut gauge = counting_gauge();
        gauge.set_value(28.0, t0);
        assert_eq!(gauge.fill_fraction(), 0.5);
    }

    #[test]
    fn fraction_is_not_clamped() {
        let t0 = Instant::now();
        let mut gauge = counting_gauge();
        gauge.set_value(70.0, t0);
        assert!(gauge.fill_fraction() > 1.0);
    }

    #[test]
    fn static_gauge_shows_value_immediately() {
        let t0 = Instant::now();
        let mut gauge = Gauge::fixed("Storage Capacity", "PB", 1.5, GAUGE_RED);
        gauge.set_value(1.5, t0);

        assert_eq!(gauge.display_value(), 1.5);
        assert_eq!(gauge.formatted_value(), "1.5");
        assert_eq!(gauge.fill_fraction(), 1.0);
    }

    #[test]
    fn counting_gauge_reaches_value_at_duration_end() {
        let t0 = Instant::now();
        let mut gauge = counting_gauge();
        gauge.set_value(40.0, t0);
        assert_eq!(gauge.display_value(), 0.0);

        // половина длительности - половина значения (линейные шаги)
        gauge.advance(t0 + 1000 * MS);
        assert!((gauge.display_value() - 20.0).abs() < 1e-9);

        gauge.advance(t0 + 2000 * MS);
        assert_eq!(gauge.display_value(), 40.0);
    }

    #[test]
    fn value_change_restarts_count_from_zero() {
        let t0 = Instant::now();
        let mut gauge = counting_gauge();
        gauge.set_value(40.0, t0);
        gauge.advance(t0 + 1000 * MS);
        assert!(gauge.display_value() > 0.0);

        // смена значения на середине анимации - счёт заново с нуля
        gauge.set_value(50.0, t0 + 1000 * MS);
        assert_eq!(gauge.display_value(), 0.0);

        gauge.advance(t0 + 1050 * MS);
        assert!((gauge.display_value() - 1.25).abs() < 1e-9);
    }

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(format_thousands(28), "28");
        assert_eq!(format_thousands(3584), "3,584");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}

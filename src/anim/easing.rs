/// Кубическая ease-out кривая: p = 1 - (1 - t)^3.
///
/// Аргумент вне [0, 1] обрезается, поэтому результат всегда в [0, 1].
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Индекс активного этапа: равномерное разбиение шкалы [0, 100]
/// на `steps` частей, с ограничением сверху последним индексом.
pub fn step_index(progress: u32, steps: usize) -> usize {
    let width = 100.0 / steps as f64;
    ((progress as f64 / width).floor() as usize).min(steps - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_index_uniform_partition() {
        assert_eq!(step_index(0, 6), 0);
        assert_eq!(step_index(10, 6), 0);
        assert_eq!(step_index(50, 6), 3);
        assert_eq!(step_index(100, 6), 5);
        // выше 100 всё равно последний этап
        assert_eq!(step_index(250, 6), 5);
    }

    #[test]
    fn ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
    }

    #[test]
    fn ease_out_cubic_is_monotone() {
        let mut prev = 0.0;
        for i in 0..=1000 {
            let p = ease_out_cubic(i as f64 / 1000.0);
            assert!(p >= prev);
            prev = p;
        }
    }

    #[test]
    fn lerp_midpoint() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(2.0, 2.0, 0.3), 2.0);
    }
}

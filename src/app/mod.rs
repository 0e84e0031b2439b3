// Модуль графического приложения - объединяет состояние и UI
pub mod state;
pub mod ui;

use std::time::Instant;

use eframe::egui::Context;
use eframe::Frame;

// Реэкспортируем основные типы для удобства использования
pub use state::{HpcApp, Page, StatusScreen};

impl eframe::App for HpcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.update_fps();
        self.advance(Instant::now());
        self.render_ui(ctx);

        // Просим egui перерисовать экран, чтобы получить плавную анимацию
        ctx.request_repaint();
    }
}

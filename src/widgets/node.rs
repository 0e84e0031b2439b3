use egui::{Color32, CornerRadius, FontId, Response, RichText, Sense, Stroke, Ui, Vec2};

use crate::anim::reveal::{NodeStatus, NodeVisual};
use crate::config::{
    CORES_PER_NODE, INITIALIZING_COLOR, MEMORY_PER_NODE_GB, NODE_LOAD_AVERAGE,
    NODE_TEMPERATURE_C, OFFLINE_COLOR, ONLINE_COLOR, PANEL_COLOR,
};

const CELL_SIZE: Vec2 = Vec2::new(72.0, 64.0);

fn status_color(status: NodeStatus) -> Color32 {
    match status {
        NodeStatus::Offline => OFFLINE_COLOR,
        NodeStatus::Initializing => INITIALIZING_COLOR,
        NodeStatus::Online => ONLINE_COLOR,
    }
}

/// Ячейка одного узла. Пока курсор над не-офлайн узлом, показывается
/// панель с деталями; офлайн узлы всплывающей панели не имеют.
pub fn node_cell(ui: &mut Ui, node: &NodeVisual) -> Response {
    let status = node.status();
    let (rect, response) = ui.allocate_exact_size(CELL_SIZE, Sense::hover());
    let painter = ui.painter_at(rect);

    // офлайн узлы приглушены
    let fill = if status == NodeStatus::Offline {
        PANEL_COLOR.gamma_multiply(0.4)
    } else {
        PANEL_COLOR
    };
    painter.rect(
        rect,
        CornerRadius::same(6),
        fill,
        Stroke::new(1.0, OFFLINE_COLOR),
        egui::StrokeKind::Inside,
    );

    let icon_color = if status == NodeStatus::Offline {
        Color32::from_gray(110)
    } else {
        Color32::WHITE
    };
    painter.text(
        rect.center() - Vec2::new(0.0, 14.0),
        egui::Align2::CENTER_CENTER,
        "🖥",
        FontId::proportional(16.0),
        icon_color,
    );
    painter.text(
        rect.center() + Vec2::new(0.0, 6.0),
        egui::Align2::CENTER_CENTER,
        format!("Node-{:02}", node.id()),
        FontId::monospace(10.0),
        Color32::from_gray(190),
    );
    painter.circle_filled(
        rect.center() + Vec2::new(0.0, 20.0),
        3.0,
        status_color(status),
    );

    if status != NodeStatus::Offline {
        response.clone().on_hover_ui(|ui| node_details(ui, node));
    }

    response
}

fn node_details(ui: &mut Ui, node: &NodeVisual) {
    ui.set_min_width(200.0);
    ui.label(RichText::new("Node Details").strong());
    ui.separator();

    detail_row(ui, "Status", node.status().label());
    detail_row(ui, "Cores", &format!("{} vCPUs", CORES_PER_NODE));
    detail_row(ui, "Memory", &format!("{} GB", MEMORY_PER_NODE_GB));
    detail_row(ui, "Temperature", &format!("{NODE_TEMPERATURE_C}°C"));
    detail_row(ui, "Load Average", &format!("{NODE_LOAD_AVERAGE:.2}"));

    // индикатор загрузки
    let load_percent = NODE_LOAD_AVERAGE / f64::from(CORES_PER_NODE) * 100.0;
    ui.add_space(4.0);
    detail_row(ui, "System Load", &format!("{load_percent:.1}%"));

    let (bar, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), 6.0), Sense::hover());
    let painter = ui.painter_at(bar);
    painter.rect_filled(bar, CornerRadius::same(3), OFFLINE_COLOR);
    let mut filled = bar;
    filled.set_width(bar.width() * (load_percent / 100.0) as f32);
    painter.rect_filled(filled, CornerRadius::same(3), ONLINE_COLOR);
}

fn detail_row(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(Color32::GRAY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
}

use egui::Color32;

// Cluster dimensions
pub const TOTAL_NODES: u32 = 56;
pub const CORES_PER_NODE: u32 = 64;
pub const MEMORY_PER_NODE_GB: u32 = 96;
pub const STORAGE_CAPACITY_PB: f64 = 1.5;
pub const TOTAL_CORES_MAX: u32 = TOTAL_NODES * CORES_PER_NODE;
pub const MEMORY_MAX_GB: u32 = TOTAL_NODES * MEMORY_PER_NODE_GB;

// Static per-node display metrics (identical for every node)
pub const NODE_TEMPERATURE_C: f64 = 45.5;
pub const NODE_LOAD_AVERAGE: f64 = 0.45;

// Launch sequence timing
pub const LAUNCH_TICK_MS: u64 = 100;
pub const LAUNCH_SETTLE_MS: u64 = 1500;

// Status dashboard animation timing
pub const STATUS_ANIM_DURATION_MS: u64 = 180_000;
pub const STATUS_TICK_MS: u64 = 50;
pub const GRID_TICK_MS: u64 = 50;

// Gauge counting animation timing
pub const GAUGE_COUNT_DURATION_MS: u64 = 2000;
pub const GAUGE_TICK_MS: u64 = 50;

// Per-node initialization delay: uniform in [min, min + range)
pub const NODE_INIT_MIN_MS: u64 = 1000;
pub const NODE_INIT_RANDOM_RANGE_MS: u64 = 2000;

// Этапы последовательности запуска
pub const LAUNCH_STEPS: [&str; 6] = [
    "Preparing Systems...",
    "Checking Services...",
    "Verifying Network Connectivity...",
    "Mounting Storage Systems...",
    "All Systems online...",
    "Launching HPC...",
];

// UI palette
pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(10, 10, 14);
pub const PANEL_COLOR: Color32 = Color32::from_rgb(20, 20, 26);
pub const ACCENT_COLOR: Color32 = Color32::from_rgb(220, 38, 38);
pub const OFFLINE_COLOR: Color32 = Color32::from_rgb(55, 65, 81);
pub const INITIALIZING_COLOR: Color32 = Color32::from_rgb(245, 158, 11);
pub const ONLINE_COLOR: Color32 = Color32::from_rgb(34, 197, 94);
pub const GAUGE_TRACK_COLOR: Color32 = Color32::from_rgb(55, 65, 81);
pub const GAUGE_RED: Color32 = Color32::from_rgb(239, 68, 68);
pub const GAUGE_BLUE: Color32 = Color32::from_rgb(59, 130, 246);
pub const GAUGE_GREEN: Color32 = Color32::from_rgb(34, 197, 94);
pub const GAUGE_PURPLE: Color32 = Color32::from_rgb(168, 85, 247);

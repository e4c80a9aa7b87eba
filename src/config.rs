//! Element ids and starting values for both demos.

use crate::params::{CatParams, TriangleParams};

#[derive(Debug, Clone)]
pub struct CatConfig {
    pub canvas_id: &'static str,
    pub rotation_slider_id: &'static str,
    pub zoom_slider_id: &'static str,
    pub color_picker_id: &'static str,
    pub initial: CatParams,
}

impl Default for CatConfig {
    fn default() -> Self {
        Self {
            canvas_id: "glcanvas",
            rotation_slider_id: "rotation-speed-slider",
            zoom_slider_id: "zoom-slider",
            color_picker_id: "cat-color-picker",
            initial: CatParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TriangleConfig {
    pub canvas_id: &'static str,
    pub vertex_editor_id: &'static str,
    pub fragment_editor_id: &'static str,
    pub update_button_id: &'static str,
    pub reset_button_id: &'static str,
    pub background_picker_id: &'static str,
    pub scale_slider_id: &'static str,
    pub rotation_slider_id: &'static str,
    pub initial: TriangleParams,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            canvas_id: "interactive-triangle-canvas",
            vertex_editor_id: "vs-editor",
            fragment_editor_id: "fs-editor",
            update_button_id: "update-shader-btn",
            reset_button_id: "reset-shader-btn",
            background_picker_id: "bg-color-picker",
            scale_slider_id: "triangle-scale-slider",
            rotation_slider_id: "triangle-rotation-slider",
            initial: TriangleParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub cat: CatConfig,
    pub triangle: TriangleConfig,
    /// Used unless `<body data-log-level="...">` says otherwise.
    pub log_level: log::Level,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            cat: CatConfig::default(),
            triangle: TriangleConfig::default(),
            log_level: log::Level::Info,
        }
    }
}

impl DemoConfig {
    /// Pick the log level from a page-supplied override, keeping the default when
    /// the override is absent or not a level name.
    pub fn log_level_from(&self, page_override: Option<&str>) -> log::Level {
        page_override
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(self.log_level)
    }
}

pub mod app;
pub mod model_switch;
pub mod stage_view;
pub mod status_panel;

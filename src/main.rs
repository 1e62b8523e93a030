mod components;
mod config;
mod error;
mod frame_loop;
mod geometry;
mod model;
mod render;
mod session;
mod state;
mod util;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("pinch-things starting");
    yew::Renderer::<components::app::App>::new().render();
}

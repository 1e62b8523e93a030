use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, PointerEvent, Window};
use yew::prelude::*;

use crate::config::StageConfig;
use crate::frame_loop::FrameLoop;
use crate::geometry::Point;
use crate::model::scatter;
use crate::render::DomSink;
use crate::session::Session;
use crate::util;

use super::status_panel::{StatusPanel, StatusPanelProps};

#[derive(Properties, PartialEq, Clone)]
pub struct StageViewProps {
    pub config: StageConfig,
}

fn event_point(e: &PointerEvent, window: &Window) -> Point {
    util::relative_point(
        f64::from(e.client_x()),
        f64::from(e.client_y()),
        util::viewport(window),
    )
}

#[function_component(StageView)]
pub fn stage_view(props: &StageViewProps) -> Html {
    let stage_ref = use_node_ref();
    let session = {
        let config = props.config.clone();
        use_mut_ref(move || {
            let things = scatter(config.things, config.thing_radius, js_sys::Math::random);
            log::info!("stage ready: {} things, {:?}", things.len(), config.tuning.model);
            Session::new(config, things)
        })
    };
    let status = use_state_eq(StatusPanelProps::default);

    {
        let stage_ref = stage_ref.clone();
        let session = session.clone();
        let status = status.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let stage_el: HtmlElement = stage_ref
                .cast::<HtmlElement>()
                .expect("stage_ref not attached to an element");

            // Frame loop
            let frame_loop = {
                let mut sink = DomSink::new(window.clone()).expect("should have a document on window");
                let session = session.clone();
                FrameLoop::start(window.clone(), move || {
                    sink.refresh_viewport();
                    match session.borrow_mut().frame(&mut sink) {
                        Ok(()) => true,
                        Err(e) => {
                            log::error!("stage stopped: {e}");
                            false
                        }
                    }
                })
            };

            // Pointer down: track, capture, recompute rect + selection
            let down_cb = {
                let session = session.clone();
                let window = window.clone();
                let stage_el = stage_el.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    e.prevent_default();
                    let _ = stage_el.set_pointer_capture(e.pointer_id());
                    let at = event_point(&e, &window);
                    session.borrow_mut().pointer_down(&e.pointer_id().to_string(), at);
                }) as Box<dyn FnMut(_)>)
            };
            // Pointer move: track, recompute rect
            let move_cb = {
                let session = session.clone();
                let window = window.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    e.prevent_default();
                    let at = event_point(&e, &window);
                    session.borrow_mut().pointer_move(&e.pointer_id().to_string(), at);
                }) as Box<dyn FnMut(_)>)
            };
            // Pointer up / cancel: forget, recompute rect + selection
            let up_cb = {
                let session = session.clone();
                Closure::wrap(Box::new(move |e: PointerEvent| {
                    session.borrow_mut().pointer_up(&e.pointer_id().to_string());
                }) as Box<dyn FnMut(_)>)
            };
            let listeners: [(&str, &Closure<dyn FnMut(PointerEvent)>); 4] = [
                ("pointerdown", &down_cb),
                ("pointermove", &move_cb),
                ("pointerup", &up_cb),
                ("pointercancel", &up_cb),
            ];
            for (name, cb) in listeners {
                if let Err(e) = stage_el.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref()) {
                    log::error!("could not listen for {name}: {e:?}");
                }
            }

            // Status overlay refresh
            let status_tick = {
                let session = session.clone();
                Closure::wrap(Box::new(move || {
                    let snapshot = StatusPanelProps::of(&session.borrow());
                    status.set(snapshot);
                }) as Box<dyn FnMut()>)
            };
            let status_tick_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    status_tick.as_ref().unchecked_ref(),
                    250,
                )
                .ok();

            // Cleanup
            move || {
                for (name, cb) in [
                    ("pointerdown", &down_cb),
                    ("pointermove", &move_cb),
                    ("pointerup", &up_cb),
                    ("pointercancel", &up_cb),
                ] {
                    let _ = stage_el.remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
                }
                if let Some(id) = status_tick_id {
                    window.clear_interval_with_handle(id);
                }
                drop(frame_loop);
                let _keep_alive = (&down_cb, &move_cb, &up_cb, &status_tick);
            }
        });
    }

    let things = session.borrow().stage().things.clone();
    let diameter = props.config.thing_radius * 200.0;
    let thing_style = format!(
        "position:absolute; left:0; top:0; width:{diameter:.2}vmin; height:{diameter:.2}vmin; border-radius:50%; will-change:transform;"
    );

    html! {<div style="position:absolute; inset:0;">
        <div ref={stage_ref} id="stage" style="position:absolute; inset:0; overflow:hidden; touch-action:none; background:#0e1116;">
            { for things.iter().map(|t| html! {
                <div key={t.id} id={util::thing_element_id(t.id)} class="thing" style={thing_style.clone()}></div>
            }) }
        </div>
        <StatusPanel ..(*status).clone() />
    </div>}
}

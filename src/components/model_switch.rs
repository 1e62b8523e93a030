use yew::prelude::*;

use crate::config::MotionModel;

#[derive(Properties, PartialEq, Clone)]
pub struct ModelSwitchProps {
    pub current: MotionModel,
    pub on_select: Callback<MotionModel>,
}

#[function_component]
pub fn ModelSwitch(props: &ModelSwitchProps) -> Html {
    let pick = |model: MotionModel| {
        let cb = props.on_select.clone();
        Callback::from(move |_: MouseEvent| cb.emit(model))
    };
    let button_style = |model: MotionModel| {
        if props.current == model {
            "font-weight:700; border:1px solid #58a6ff;"
        } else {
            "opacity:0.7;"
        }
    };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; z-index:1;">
        <button style={button_style(MotionModel::Drift)} onclick={pick(MotionModel::Drift)}>{"Drift"}</button>
        <button style={button_style(MotionModel::Attract)} onclick={pick(MotionModel::Attract)}>{"Attract"}</button>
    </div>}
}

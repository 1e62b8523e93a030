use yew::prelude::*;

use crate::config::MotionModel;
use crate::geometry::Point;
use crate::session::Session;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct StatusPanelProps {
    pub model: MotionModel,
    pub touches: usize,
    pub selected: usize,
    pub gesturing: bool,
    pub offset: Point,
    pub samples: usize,
    pub frame: u64,
}

impl StatusPanelProps {
    pub fn of(session: &Session) -> Self {
        let stage = session.stage();
        Self {
            model: session.config().tuning.model,
            touches: session.tracker().len(),
            selected: stage.selected_count(),
            gesturing: stage.gesture.phase.is_gesturing(),
            offset: stage.offset,
            samples: session.tracker().buffered_samples(),
            frame: stage.frame,
        }
    }
}

#[function_component]
pub fn StatusPanel(props: &StatusPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:90px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let model = match props.model {
        MotionModel::Drift => "Drift",
        MotionModel::Attract => "Attract",
    };
    let (phase, phase_color) = if props.gesturing {
        ("Gesturing", "#f0883e")
    } else {
        ("Idle", "#8b949e")
    };
    html! {
        <div style="position:absolute; bottom:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:8px; font-size:13px; color:#c9d1d9; pointer-events:none;">
            <div style={row_style}>
                <span style={label_style}>{"Model"}</span>
                <span style={value_style}>{ model }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Gesture"}</span>
                <span style={format!("{} color:{};", value_style, phase_color)}>{ phase }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Touches"}</span>
                <span style={value_style}>{ props.touches }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Selected"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ props.selected }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Offset"}</span>
                <span style={value_style}>{ format!("{:+.3}, {:+.3}", props.offset.x, props.offset.y) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Samples"}</span>
                <span style={value_style}>{ props.samples }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Frame"}</span>
                <span style={value_style}>{ props.frame }</span>
            </div>
        </div>
    }
}

use super::{model_switch::ModelSwitch, stage_view::StageView};
use crate::config::{MotionModel, StageConfig};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Stored override, read once at startup
    let stored = use_memo((), |_| StageConfig::load());
    let model = use_state(|| stored.tuning.model);

    let config = if stored.tuning.model == *model {
        (*stored).clone()
    } else {
        match *model {
            MotionModel::Drift => StageConfig::drift(),
            MotionModel::Attract => StageConfig::attract(),
        }
    };

    let on_select = {
        let model = model.clone();
        Callback::from(move |m: MotionModel| {
            log::info!("switching to {m:?}");
            model.set(m);
        })
    };

    // Keyed on the model so switching tears down and rebuilds the stage.
    let key = format!("{:?}", *model);
    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh;">
            <StageView key={key} config={config} />
            <ModelSwitch current={*model} on_select={on_select} />
        </div>
    }
}

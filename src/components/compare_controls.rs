use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CompareControlsProps {
    pub mousemove: bool,
    /// Last value delivered to `slideend` listeners, if any.
    pub last_slide: Option<f64>,
    pub on_toggle_mousemove: Callback<()>,
    pub on_center: Callback<()>,
}

#[function_component(CompareControls)]
pub fn compare_controls(props: &CompareControlsProps) -> Html {
    let toggle = {
        let cb = props.on_toggle_mousemove.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let center = {
        let cb = props.on_center.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let hover_label = if props.mousemove { "Follow hover: on" } else { "Follow hover: off" };
    let readout = match props.last_slide {
        Some(v) => format!("slideend {:+.0}px", v),
        None => "slideend -".to_string(),
    };
    html! {<div style="position:absolute; left:12px; top:12px; z-index:10; background:rgba(22,27,34,0.9); color:#e6edf3; border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center; font:12px sans-serif;">
        <button onclick={toggle}>{ hover_label }</button>
        <button onclick={center}>{"Center"}</button>
        <span style="width:8px;"></span>
        <span>{ readout }</span>
    </div>}
}

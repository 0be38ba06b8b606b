use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use super::compare_controls::CompareControls;
use crate::canvas_map::{CanvasMap, DAY, NIGHT, sync_move};
use crate::compare::Compare;
use crate::error::CompareError;
use crate::model::CompareOptions;
use crate::state::slide_listener;
use crate::util::clog;

const OPTIONS_KEY: &str = "compare_options";

fn load_options() -> CompareOptions {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(OPTIONS_KEY) {
                match CompareOptions::from_json(&raw) {
                    Ok(opts) => return opts,
                    Err(e) => clog(&format!("ignoring stored options: {}", e)),
                }
            }
        }
    }
    CompareOptions::default()
}

fn save_options(opts: &CompareOptions) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            let _ = store.set_item(OPTIONS_KEY, &opts.to_json());
        }
    }
}

/// Both maps plus the control overlaying them, torn down together.
struct Mounted {
    compare: Compare,
    maps: [Rc<CanvasMap>; 2],
}

impl Mounted {
    fn teardown(self) {
        self.compare.remove();
        for map in &self.maps {
            map.detach();
        }
    }
}

fn mount(
    base: HtmlElement,
    overlay: HtmlElement,
    options: CompareOptions,
    on_slide: Callback<f64>,
) -> Result<Mounted, CompareError> {
    let before = CanvasMap::attach(base, "before", DAY)?;
    let after = match CanvasMap::attach(overlay, "after", NIGHT) {
        Ok(map) => map,
        Err(e) => {
            before.detach();
            return Err(e);
        }
    };
    let (a, b) = (before.clone(), after.clone());
    let compare = match Compare::new(
        before.clone(),
        after.clone(),
        move |_, _| sync_move(&a, &b),
        options,
    ) {
        Ok(c) => c,
        Err(e) => {
            before.detach();
            after.detach();
            return Err(e);
        }
    };
    compare.on("slideend", slide_listener(move |v| on_slide.emit(v)));
    Ok(Mounted {
        compare,
        maps: [before, after],
    })
}

#[function_component(App)]
pub fn app() -> Html {
    let base_ref = use_node_ref();
    let overlay_ref = use_node_ref();
    let options = use_state(load_options);
    let last_slide = use_state(|| None::<f64>);
    let mounted = use_mut_ref(|| None::<Mounted>);

    // (Re)mount whenever options change; the control reads them only at construction.
    {
        let base_ref = base_ref.clone();
        let overlay_ref = overlay_ref.clone();
        let last_slide = last_slide.clone();
        let mounted = mounted.clone();
        use_effect_with(*options, move |opts| {
            save_options(opts);
            let on_slide = Callback::from(move |v: f64| last_slide.set(Some(v)));
            match (base_ref.cast::<HtmlElement>(), overlay_ref.cast::<HtmlElement>()) {
                (Some(base), Some(overlay)) => match mount(base, overlay, *opts, on_slide) {
                    Ok(m) => *mounted.borrow_mut() = Some(m),
                    Err(e) => clog(&format!("compare: mount failed: {}", e)),
                },
                _ => clog("compare: map containers not rendered"),
            }
            move || {
                let current = mounted.borrow_mut().take();
                if let Some(m) = current {
                    m.teardown();
                }
            }
        });
    }

    let toggle_mousemove = {
        let options = options.clone();
        Callback::from(move |()| {
            options.set(CompareOptions {
                mousemove: !options.mousemove,
            })
        })
    };
    let center = {
        let mounted = mounted.clone();
        Callback::from(move |()| {
            if let Some(m) = mounted.borrow().as_ref() {
                m.compare.set_slider(0.0);
            }
        })
    };

    html! {<div style="position:relative; width:100vw; height:100vh; overflow:hidden;">
        <div ref={base_ref} style="position:absolute; inset:0;"></div>
        <div ref={overlay_ref} style="position:absolute; inset:0;"></div>
        <CompareControls
            mousemove={options.mousemove}
            last_slide={*last_slide}
            on_toggle_mousemove={toggle_mousemove}
            on_center={center}
        />
    </div>}
}

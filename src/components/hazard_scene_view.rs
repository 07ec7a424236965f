use gloo::timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

use super::{feedback_panel::FeedbackPanel, progress_counter::ProgressCounter};
use crate::audio::CuePlayer;
use crate::model::{Rect, SCENE_IMAGE, SHAKE_MS, to_percent};
use crate::routes::Route;
use crate::state::{HazardAction, HazardScene, SceneStage};
use crate::storage::{LocalStorageFlags, mark_hazards_completed};
use crate::util::{clog, cwarn};

#[function_component(HazardSceneView)]
pub fn hazard_scene_view() -> Html {
    let scene = use_reducer(HazardScene::default);
    let scene_ref = use_node_ref();
    let player = use_mut_ref(CuePlayer::new);
    let navigator = use_navigator();

    // Each cue-producing outcome bumps the version: replay its cue and
    // schedule the shake reset after a miss.
    {
        let player = player.clone();
        let dispatcher = scene.dispatcher();
        let cue = scene.last_cue;
        let shake = scene.shake;
        use_effect_with(scene.version, move |_| {
            if let Some(cue) = cue {
                player.borrow().play(cue);
            }
            if shake {
                Timeout::new(SHAKE_MS, move || dispatcher.dispatch(HazardAction::ClearShake)).forget();
            }
            || ()
        });
    }

    {
        let found = scene.found.len();
        let total = scene.total();
        use_effect_with(found, move |found| {
            if *found > 0 {
                clog(&format!("hazards found: {found}/{total}"));
            }
            || ()
        });
    }

    let onclick = {
        let scene = scene.clone();
        let scene_ref = scene_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(el) = scene_ref.cast::<Element>() else {
                return;
            };
            let rect = Rect::from(&el.get_bounding_client_rect());
            if let Some(p) = to_percent(e.client_x() as f64, e.client_y() as f64, rect) {
                scene.dispatch(HazardAction::Click(p));
            }
        })
    };

    let action = match scene.stage {
        SceneStage::Searching => None,
        SceneStage::Completed => {
            let scene = scene.clone();
            Some((
                AttrValue::from("Continuar"),
                Callback::from(move |_| scene.dispatch(HazardAction::ShowSummary)),
            ))
        }
        SceneStage::Summary => {
            let navigator = navigator.clone();
            Some((
                AttrValue::from("Continuar al armado"),
                Callback::from(move |_| {
                    if let Err(e) = mark_hazards_completed(&LocalStorageFlags) {
                        cwarn(&format!("could not store completion flag: {e:?}"));
                    }
                    match &navigator {
                        Some(nav) => nav.push(&Route::Assembly),
                        None => cwarn("no router available, staying on the hazard scene"),
                    }
                }),
            ))
        }
    };

    let searching = scene.stage == SceneStage::Searching;
    let markers = scene.found_zones().map(|z| {
        let style = format!(
            "position:absolute; left:{}%; top:{}%; width:{}%; height:{}%; border:3px solid lime; border-radius:50%; transform:translate(-50%, -50%); pointer-events:none;",
            z.x,
            z.y,
            z.radius * 2.0,
            z.radius * 2.0
        );
        html! { <div key={z.id.as_str()} class="pulse" {style} /> }
    });

    html! {
        <div>
            <div>
                <strong>{"🛡️ Identificación de Riesgos en el Área de Trabajo"}</strong>
                <p style="margin-top:6px;">{"Observa la imagen y marca los lugares que representen un riesgo para la seguridad."}</p>
            </div>
            <div
                ref={scene_ref}
                {onclick}
                class={classes!(scene.shake.then_some("shake"))}
                style={format!(
                    "position:relative; width:800px; max-width:100%; user-select:none; cursor:{};",
                    if searching { "crosshair" } else { "default" }
                )}
            >
                <img src={SCENE_IMAGE} alt="Fábrica" style="width:100%; display:block;" />
                { for markers }
                <ProgressCounter done={scene.found.len()} total={scene.total()} />
            </div>
            <FeedbackPanel text={AttrValue::from(scene.feedback.clone())} {action} />
        </div>
    }
}

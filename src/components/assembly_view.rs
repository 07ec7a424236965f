use web_sys::{Element, HtmlImageElement};
use yew::prelude::*;

use super::completion_banner::CompletionBanner;
use crate::audio::CuePlayer;
use crate::model::{DRAG_FORMAT, DragPayload, MACHINE_IMAGE, PartId, Point, Rect, ZONES, to_percent};
use crate::state::{Assembly, AssemblyAction};
use crate::util::{clog, cwarn};

fn pointer_percent(machine_ref: &NodeRef, e: &DragEvent) -> Option<Point> {
    let el = machine_ref.cast::<Element>()?;
    let rect = Rect::from(&el.get_bounding_client_rect());
    to_percent(e.client_x() as f64, e.client_y() as f64, rect)
}

fn dragged_part(e: &DragEvent) -> Option<PartId> {
    let raw = e.data_transfer()?.get_data(DRAG_FORMAT).ok()?;
    DragPayload::decode(&raw).map(|p| p.part)
}

#[function_component(AssemblyView)]
pub fn assembly_view() -> Html {
    let assembly = use_reducer(Assembly::default);
    let machine_ref = use_node_ref();
    let player = use_mut_ref(CuePlayer::new);

    {
        let player = player.clone();
        let cue = assembly.last_cue;
        use_effect_with(assembly.version, move |_| {
            if let Some(cue) = cue {
                player.borrow().play(cue);
            }
            || ()
        });
    }

    {
        let complete = assembly.is_complete();
        use_effect_with(complete, move |complete| {
            if *complete {
                clog("machine assembled");
            }
            || ()
        });
    }

    let ondragover = {
        let assembly = assembly.clone();
        let machine_ref = machine_ref.clone();
        Callback::from(move |e: DragEvent| {
            // required for the element to accept drops
            e.prevent_default();
            if let Some(p) = pointer_percent(&machine_ref, &e) {
                assembly.dispatch(AssemblyAction::DragOver(p));
            }
        })
    };
    let ondrop = {
        let assembly = assembly.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            let dragged = dragged_part(&e);
            if dragged.is_none() {
                cwarn("drop without a readable part payload");
            }
            assembly.dispatch(AssemblyAction::Drop(dragged));
        })
    };
    let ondragleave = {
        let assembly = assembly.clone();
        Callback::from(move |_: DragEvent| assembly.dispatch(AssemblyAction::DragLeave))
    };

    let zone_markers = ZONES.iter().map(|z| {
        let class = classes!(
            "pm-zona",
            (assembly.hovered == Some(z.id)).then_some("brillo"),
            assembly.is_placed(z.id).then_some("colocada"),
        );
        html! {
            <div key={z.id.as_str()} {class} style={format!("left:{}%; top:{}%;", z.x, z.y)} />
        }
    });

    let placed = assembly.placed.iter().map(|(id, p)| {
        html! {
            <img
                key={id.as_str()}
                src={p.image}
                alt={id.as_str()}
                class="pm-parte-colocada"
                style={format!("left:{}%; top:{}%;", p.x, p.y)}
            />
        }
    });

    let palette = assembly.available_parts().map(|part| {
        let id = part.id;
        let ondragstart = Callback::from(move |e: DragEvent| {
            let Some(dt) = e.data_transfer() else {
                return;
            };
            if let Err(err) = dt.set_data(DRAG_FORMAT, &DragPayload { part: id }.encode()) {
                cwarn(&format!("could not attach drag payload: {err:?}"));
            }
            // centre the drag ghost on the part
            if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
                dt.set_drag_image(&img, (img.width() / 2) as i32, (img.height() / 2) as i32);
            }
        });
        html! {
            <img
                key={id.as_str()}
                src={part.image}
                alt={id.as_str()}
                draggable="true"
                class="pm-parte"
                {ondragstart}
            />
        }
    });

    html! {
        <div class="pm-container">
            <h2>{"🛠️ Armado seguro de la máquina"}</h2>
            <p class="pm-instruccion">{ assembly.feedback.clone() }</p>
            <div class="pm-zona-trabajo">
                <div
                    class="pm-maquina"
                    ref={machine_ref}
                    {ondragover}
                    {ondrop}
                    {ondragleave}
                >
                    <img src={MACHINE_IMAGE} alt="Máquina industrial" />
                    { for zone_markers }
                    { for placed }
                </div>
                <div class="pm-partes">
                    <strong>{"Partes disponibles"}</strong>
                    { for palette }
                </div>
            </div>
            <CompletionBanner show={assembly.is_complete()} />
        </div>
    }
}


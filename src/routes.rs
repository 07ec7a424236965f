use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{assembly_view::AssemblyView, hazard_scene_view::HazardSceneView};

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Hazards,
    #[at("/partes-maquina")]
    Assembly,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Hazards => html! { <HazardSceneView /> },
        Route::Assembly => html! { <AssemblyView /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Hazards} /> },
    }
}

mod audio;
mod components;
mod model;
mod routes;
mod state;
mod storage;
mod util;

fn main() {
    yew::Renderer::<components::app::App>::new().render();
}

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CompletionBannerProps {
    pub show: bool,
}

#[function_component]
pub fn CompletionBanner(props: &CompletionBannerProps) -> Html {
    if !props.show {
        return html! {};
    }
    html! {
        <div class="pm-exito">
            {"🎉 "}<strong>{"Actividad completada"}</strong>
            <p>{"Has armado correctamente la máquina. Un correcto montaje es fundamental para una operación segura y eficiente."}</p>
        </div>
    }
}

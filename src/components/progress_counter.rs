use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressCounterProps {
    pub done: usize,
    pub total: usize,
}

#[function_component]
pub fn ProgressCounter(props: &ProgressCounterProps) -> Html {
    html! {
        <div style="position:absolute; top:10px; right:10px; background:#000; color:white; padding:6px 10px; border-radius:6px;">
            { format!("{} / {}", props.done, props.total) }
        </div>
    }
}

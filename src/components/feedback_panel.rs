use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FeedbackPanelProps {
    pub text: AttrValue,
    /// Optional action rendered under the text (label, callback).
    #[prop_or_default]
    pub action: Option<(AttrValue, Callback<()>)>,
}

#[function_component]
pub fn FeedbackPanel(props: &FeedbackPanelProps) -> Html {
    let action = props.action.as_ref().map(|(label, cb)| {
        let cb = cb.clone();
        let onclick = Callback::from(move |_| cb.emit(()));
        html! {
            <div style="margin-top:12px; text-align:right;">
                <button {onclick} style="padding:8px 14px; background:#4caf50; border:none; border-radius:6px; color:white; cursor:pointer; font-weight:bold;">
                    { label.clone() }
                </button>
            </div>
        }
    });
    html! {
        <div style="margin-top:12px; padding:12px; background:#222; color:white; border-radius:8px; white-space:pre-line;">
            { props.text.clone() }
            { for action }
        </div>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub(crate) open: bool,
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) children: Children,
    #[prop_or_default]
    pub(crate) on_close: Callback<()>,
}

#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true">
            <div class="modal-box">
                {props.title.clone().map(|title| html! { <h3 class="modal-title">{title}</h3> }).unwrap_or_default()}
                { for props.children.iter() }
            </div>
            <button class="modal-backdrop" aria-label="Close" onclick={on_close}></button>
        </div>
    }
}

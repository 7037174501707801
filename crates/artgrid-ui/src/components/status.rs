use yew::prelude::*;

#[function_component(LoadingState)]
pub(crate) fn loading_state() -> Html {
    html! {
        <div class="status loading" role="status" aria-live="polite">
            <span class="loading loading-spinner"></span>
            <h3>{"Loading..."}</h3>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ErrorBannerProps {
    pub(crate) message: AttrValue,
}

/// Page-level fetch failure; no retry is offered.
#[function_component(ErrorBanner)]
pub(crate) fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="status alert alert-error" role="alert">
            <h3>{"Error occurred"}</h3>
            <p class="text-sm">{props.message.clone()}</p>
        </div>
    }
}

use crate::core::paging::{PAGE_LINK_SPAN, PageJumpError, page_links, parse_page_jump};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    #[prop_or(1)]
    pub(crate) current: u32,
    #[prop_or(1)]
    pub(crate) total_pages: u32,
    #[prop_or_default]
    pub(crate) on_change: Callback<u32>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let total = props.total_pages.max(1);
    let current = props.current.clamp(1, total);
    let jump_input = use_state(String::new);
    let jump_error = use_state(|| None as Option<PageJumpError>);

    let go_to = |target: u32| {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            if target != current {
                on_change.emit(target);
            }
        })
    };

    let on_jump_input = {
        let jump_input = jump_input.clone();
        let jump_error = jump_error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                jump_input.set(input.value());
                jump_error.set(None);
            }
        })
    };
    let on_jump = {
        let jump_input = jump_input.clone();
        let jump_error = jump_error.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match parse_page_jump(&jump_input, total) {
                Ok(page) => {
                    jump_input.set(String::new());
                    if page != current {
                        on_change.emit(page);
                    }
                }
                Err(err) => jump_error.set(Some(err)),
            }
        })
    };

    html! {
        <nav class="pagination" aria-label="Pagination">
            <div class="join">
                <button class="btn join-item" disabled={current <= 1} onclick={go_to(1)} aria-label="First page">{"«"}</button>
                <button class="btn join-item" disabled={current <= 1} onclick={go_to(current.saturating_sub(1).max(1))} aria-label="Previous page">{"‹"}</button>
                {for page_links(current, total, PAGE_LINK_SPAN).into_iter().map(|page| html! {
                    <button
                        class={classes!("btn", "join-item", (page == current).then_some("btn-active"))}
                        aria-current={(page == current).then_some("page")}
                        onclick={go_to(page)}
                    >
                        {page.to_string()}
                    </button>
                })}
                <button class="btn join-item" disabled={current >= total} onclick={go_to((current + 1).min(total))} aria-label="Next page">{"›"}</button>
                <button class="btn join-item" disabled={current >= total} onclick={go_to(total)} aria-label="Last page">{"»"}</button>
            </div>
            <form class="page-jump" onsubmit={on_jump}>
                <input
                    type="number"
                    class="input input-sm"
                    min="1"
                    max={total.to_string()}
                    placeholder="Page"
                    aria-label="Go to page"
                    value={(*jump_input).clone()}
                    oninput={on_jump_input}
                />
                <button type="submit" class="btn btn-sm">{"Go"}</button>
                {(*jump_error).map(|err| html! { <span class="text-error text-xs">{err.to_string()}</span> }).unwrap_or_default()}
            </form>
        </nav>
    }
}

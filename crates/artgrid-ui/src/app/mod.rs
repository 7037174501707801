use crate::app::api::ApiCtx;
use crate::components::status::{ErrorBanner, LoadingState};
use crate::components::toast::ToastHost;
use crate::core::paging::PageParams;
use crate::core::request::{
    PageRequest, PageState, RequestKey, ResponseOutcome, apply_page_response, begin_page_request,
};
use crate::core::store::{AppStore, ToastKind, dismiss_toast, push_toast};
use crate::features::artworks::actions::SelectionAction;
use crate::features::artworks::state::apply_selection_action;
use crate::features::artworks::view::{ArtworksTable, PageFooter, SelectionBar};
use crate::features::bulk_select::state::{
    BulkOutcome, BulkSubmitError, BulkTicket, close_dialog, complete, fail, open_dialog,
    set_input, submit,
};
use crate::features::bulk_select::view::BulkSelectModal;
use crate::services::api::ApiClient;
use artgrid_api_models::ArtworkId;
use gloo::console;
use preferences::api_base_url;
use routes::Route;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod preferences;
mod routes;

#[function_component(ArtGridApp)]
pub(crate) fn artgrid_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Artworks => html! { <BrowsePage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Artworks} /> },
    }
}

/// Page controller: derives the page from the URL and keeps one live request.
#[function_component(BrowsePage)]
fn browse_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let location = use_location();
    let dispatch = Dispatch::<AppStore>::new();

    let page = location
        .and_then(|location| location.query::<PageParams>().ok())
        .unwrap_or_default()
        .page_number();

    let page_state = use_selector(|store: &AppStore| store.page.state.clone());
    let shown_page = use_selector(|store: &AppStore| store.page.ready_page());
    let selection = use_selector(|store: &AppStore| store.selection.clone());
    let bulk_dialog = use_selector(|store: &AppStore| store.bulk.active_dialog().cloned());
    let toasts = use_selector(|store: &AppStore| store.toasts.items.clone());

    {
        let dispatch = dispatch.clone();
        let client = api_ctx.as_ref().map(|ctx| ctx.client.clone());
        use_effect_with_deps(
            move |page: &u32| {
                let page = *page;
                let mut request = None;
                dispatch.reduce_mut(|store| {
                    request = Some(begin_page_request(&mut store.page, page));
                });
                if let Some(PageRequest::Issue(key)) = request {
                    match client {
                        Some(client) => {
                            yew::platform::spawn_local(load_page(client, dispatch.clone(), key));
                        }
                        None => {
                            console::error!("api client context missing");
                            let mut message = Some("API client unavailable".to_string());
                            dispatch.reduce_mut(|store| {
                                if let Some(message) = message.take() {
                                    apply_page_response(&mut store.page, key, Err(message));
                                }
                            });
                        }
                    }
                }
                || ()
            },
            page,
        );
    }

    let on_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |action: SelectionAction| {
            dispatch.reduce_mut(|store| {
                let AppStore {
                    page: slice,
                    selection,
                    ..
                } = store;
                let rows = slice.data().map_or(&[][..], |data| data.data.as_slice());
                apply_selection_action(selection, rows, action);
            });
        })
    };

    let on_page = {
        let navigator = navigator.clone();
        Callback::from(move |target: u32| {
            let Some(navigator) = navigator.as_ref() else {
                console::error!("navigator unavailable; cannot change page");
                return;
            };
            if let Err(err) = navigator.push_with_query(&Route::Artworks, &PageParams::for_page(target)) {
                console::error!("page navigation failed", err.to_string());
            }
        })
    };

    let on_open_bulk = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| open_dialog(&mut store.bulk));
        })
    };
    let on_cancel_bulk = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| close_dialog(&mut store.bulk));
        })
    };
    let on_bulk_input = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: String| {
            let mut value = Some(value);
            dispatch.reduce_mut(|store| {
                if let Some(value) = value.take() {
                    set_input(&mut store.bulk, value);
                }
            });
        })
    };
    let on_confirm_bulk = {
        let dispatch = dispatch.clone();
        let client = api_ctx.as_ref().map(|ctx| ctx.client.clone());
        Callback::from(move |()| {
            let mut submitted = None;
            dispatch.reduce_mut(|store| {
                submitted = Some(submit(&mut store.bulk));
            });
            match submitted {
                Some(Ok(ticket)) => match client.clone() {
                    Some(client) => {
                        yew::platform::spawn_local(load_bulk(client, dispatch.clone(), ticket));
                    }
                    None => {
                        console::error!("api client context missing");
                        finish_bulk(&dispatch, ticket, Err("API client unavailable".to_string()));
                    }
                },
                Some(Err(BulkSubmitError::Count(err))) => {
                    console::debug!("bulk select rejected", err.to_string());
                }
                Some(Err(BulkSubmitError::Busy | BulkSubmitError::Closed)) | None => {}
            }
        })
    };
    let on_dismiss_toast = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| {
            dispatch.reduce_mut(|store| dismiss_toast(&mut store.toasts, id));
        })
    };

    let body = match &*page_state {
        PageState::Loading => html! { <LoadingState /> },
        PageState::Errored(message) => html! { <ErrorBanner message={message.clone()} /> },
        PageState::Ready(data) => {
            let limit = data.pagination.effective_limit();
            html! {
                <>
                    <ArtworksTable
                        page={data.clone()}
                        selection={(*selection).clone()}
                        on_select={on_select}
                    />
                    <PageFooter
                        current={(*shown_page).unwrap_or(page)}
                        limit={limit}
                        total={data.pagination.total}
                        on_page={on_page}
                    />
                </>
            }
        }
    };

    html! {
        <main class="artgrid">
            <SelectionBar count={selection.size()} on_open_bulk={on_open_bulk} />
            {body}
            <BulkSelectModal
                dialog={(*bulk_dialog).clone()}
                on_input={on_bulk_input}
                on_confirm={on_confirm_bulk}
                on_cancel={on_cancel_bulk}
            />
            <ToastHost toasts={(*toasts).clone()} on_dismiss={on_dismiss_toast} />
        </main>
    }
}

async fn load_page(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>, key: RequestKey) {
    let result = client.fetch_page(key.page).await.map_err(|err| {
        console::error!("page fetch failed", key.page, err.to_string());
        err.to_string()
    });
    let mut result = Some(result);
    let mut outcome = None;
    dispatch.reduce_mut(|store| {
        if let Some(result) = result.take() {
            outcome = Some(apply_page_response(&mut store.page, key, result));
        }
    });
    if outcome == Some(ResponseOutcome::Stale) {
        console::debug!("discarded stale page response", key.page);
    }
}

async fn load_bulk(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>, ticket: BulkTicket) {
    let result = client
        .fetch_first(ticket.count)
        .await
        .map(|page| page.ids())
        .map_err(|err| {
            console::error!("bulk select fetch failed", ticket.count, err.to_string());
            err.to_string()
        });
    finish_bulk(&dispatch, ticket, result);
}

fn finish_bulk(
    dispatch: &Dispatch<AppStore>,
    ticket: BulkTicket,
    result: Result<Vec<ArtworkId>, String>,
) {
    let mut result = Some(result);
    dispatch.reduce_mut(|store| {
        let Some(result) = result.take() else {
            return;
        };
        match result {
            Ok(ids) => {
                if let BulkOutcome::Applied { added, returned } =
                    complete(&mut store.bulk, &mut store.selection, ticket, ids)
                {
                    push_toast(
                        &mut store.toasts,
                        ToastKind::Success,
                        format!("Selected {returned} rows ({added} new)"),
                    );
                }
            }
            Err(message) => {
                if fail(&mut store.bulk, ticket, message.clone()) {
                    push_toast(
                        &mut store.toasts,
                        ToastKind::Error,
                        format!("Bulk select failed: {message}"),
                    );
                }
            }
        }
    });
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ArtGridApp>::with_root(root).render();
    } else {
        yew::Renderer::<ArtGridApp>::new().render();
    }
}

//! Artwork table, selection bar and pagination footer.

use crate::components::checkbox::Checkbox;
use crate::components::pagination::Pagination;
use crate::core::paging::{PageWindow, total_pages};
use crate::core::selection::SelectionStore;
use crate::features::artworks::actions::{SelectionAction, selection_label};
use crate::features::artworks::state::{ArtworkRow, COLUMNS};
use artgrid_api_models::ArtworkPage;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ArtworksTableProps {
    pub(crate) page: ArtworkPage,
    pub(crate) selection: SelectionStore,
    pub(crate) on_select: Callback<SelectionAction>,
}

/// Current page as rows; checkbox state is a membership test on the selection.
#[function_component(ArtworksTable)]
pub(crate) fn artworks_table(props: &ArtworksTableProps) -> Html {
    let all_checked = props.selection.all_visible_selected(&props.page.data);
    let on_header = {
        let on_select = props.on_select.clone();
        Callback::from(move |checked: bool| on_select.emit(SelectionAction::AllVisible { checked }))
    };

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra text-sm">
                <thead>
                    <tr>
                        <th class="w-12">
                            <Checkbox
                                checked={all_checked}
                                disabled={props.page.data.is_empty()}
                                aria_label="Select all rows on this page"
                                onchange={on_header}
                            />
                        </th>
                        {for COLUMNS.iter().map(|head| html! { <th>{*head}</th> })}
                    </tr>
                </thead>
                <tbody>
                    {for props.page.data.iter().map(|art| {
                        let row = ArtworkRow::from(art);
                        let id = row.id;
                        let checked = props.selection.contains(id);
                        let on_row = {
                            let on_select = props.on_select.clone();
                            Callback::from(move |checked: bool| on_select.emit(SelectionAction::Row { id, checked }))
                        };
                        html! {
                            <tr key={id.to_string()} class={classes!(checked.then_some("row-selected"))}>
                                <td>
                                    <Checkbox
                                        checked={checked}
                                        aria_label={format!("Select {}", row.title)}
                                        onchange={on_row}
                                    />
                                </td>
                                {for row.cells().into_iter().map(|cell| html! { <td>{cell.to_string()}</td> })}
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SelectionBarProps {
    pub(crate) count: usize,
    pub(crate) on_open_bulk: Callback<()>,
}

#[function_component(SelectionBar)]
pub(crate) fn selection_bar(props: &SelectionBarProps) -> Html {
    let on_open = {
        let on_open_bulk = props.on_open_bulk.clone();
        Callback::from(move |_| on_open_bulk.emit(()))
    };
    html! {
        <div class="selection-bar flex gap-1 m-4 items-center">
            <span class="text-md" aria-live="polite">{selection_label(props.count)}</span>
            <button class="btn btn-ghost btn-sm" title="Select rows" aria-label="Select rows" onclick={on_open}>{"▾"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PageFooterProps {
    pub(crate) current: u32,
    pub(crate) limit: u32,
    pub(crate) total: u64,
    pub(crate) on_page: Callback<u32>,
}

#[function_component(PageFooter)]
pub(crate) fn page_footer(props: &PageFooterProps) -> Html {
    let window = PageWindow::new(props.current, props.limit, props.total);
    html! {
        <div class="page-footer flex items-center justify-between px-4 py-4">
            <p class="text-sm font-medium">{window.label()}</p>
            <Pagination
                current={props.current}
                total_pages={total_pages(props.limit, props.total)}
                on_change={props.on_page.clone()}
            />
        </div>
    }
}

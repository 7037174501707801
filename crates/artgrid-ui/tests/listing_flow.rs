use artgrid_api_models::ArtworkId;
use artgrid_test_support::fixtures::decode_page;
use artgrid_ui::core::paging::PageWindow;
use artgrid_ui::core::request::{
    PageRequest, PageSlice, RequestKey, ResponseOutcome, apply_page_response, begin_page_request,
};
use artgrid_ui::core::selection::SelectionStore;
use artgrid_ui::features::artworks::actions::SelectionAction;
use artgrid_ui::features::artworks::state::{ArtworkRow, EMPTY_CELL, apply_selection_action};

const PAGE_ONE: &str = r#"{
    "pagination": { "total": 5, "limit": 3, "offset": 0, "total_pages": 2, "current_page": 1 },
    "data": [
        { "id": 11, "title": null, "artist_display": "Unknown", "date_start": 1500, "date_end": null },
        { "id": 12, "title": "Water Lilies", "place_of_origin": "France", "date_start": 1906, "date_end": 1906 },
        { "id": 13, "title": "Nighthawks", "inscriptions": null }
    ]
}"#;

const PAGE_TWO: &str = r#"{
    "pagination": { "total": 5, "limit": 3, "offset": 3, "total_pages": 2, "current_page": 2 },
    "data": [
        { "id": 14, "title": "The Bedroom" },
        { "id": 15, "title": "American Gothic" }
    ]
}"#;

fn issue(slice: &mut PageSlice, page: u32) -> anyhow::Result<RequestKey> {
    match begin_page_request(slice, page) {
        PageRequest::Issue(key) => Ok(key),
        PageRequest::Unchanged(key) => anyhow::bail!("page {page} was not reissued: {key:?}"),
    }
}

#[test]
fn raw_listing_renders_and_keeps_selection_across_pages() -> anyhow::Result<()> {
    let mut slice = PageSlice::default();
    let mut selection = SelectionStore::new();

    let key = issue(&mut slice, 1)?;
    let outcome = apply_page_response(&mut slice, key, Ok(decode_page(PAGE_ONE)?));
    assert_eq!(outcome, ResponseOutcome::Applied);

    let page_one = slice.data().cloned().unwrap_or_default();
    let rows: Vec<ArtworkRow> = page_one.data.iter().map(ArtworkRow::from).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].title, EMPTY_CELL);
    assert_eq!(rows[0].date_end, EMPTY_CELL);
    assert_eq!(rows[1].place_of_origin, "France");

    let window = PageWindow::new(1, page_one.pagination.effective_limit(), page_one.pagination.total);
    assert_eq!(window.label(), "Showing 1 to 3 of 5 entries");

    apply_selection_action(
        &mut selection,
        &page_one.data,
        SelectionAction::Row {
            id: ArtworkId(11),
            checked: true,
        },
    );

    let key = issue(&mut slice, 2)?;
    apply_page_response(&mut slice, key, Ok(decode_page(PAGE_TWO)?));
    let page_two = slice.data().cloned().unwrap_or_default();
    let window = PageWindow::new(2, page_two.pagination.effective_limit(), page_two.pagination.total);
    assert_eq!(window.label(), "Showing 4 to 5 of 5 entries");
    apply_selection_action(
        &mut selection,
        &page_two.data,
        SelectionAction::AllVisible { checked: false },
    );

    assert!(selection.contains(ArtworkId(11)));
    assert_eq!(selection.size(), 1);
    Ok(())
}

#[test]
fn late_raw_listing_for_a_left_page_is_dropped() -> anyhow::Result<()> {
    let mut slice = PageSlice::default();
    let first = issue(&mut slice, 1)?;
    let second = issue(&mut slice, 2)?;

    apply_page_response(&mut slice, second, Ok(decode_page(PAGE_TWO)?));
    let outcome = apply_page_response(&mut slice, first, Ok(decode_page(PAGE_ONE)?));

    assert_eq!(outcome, ResponseOutcome::Stale);
    assert_eq!(slice.page(), Some(2));
    assert_eq!(slice.ready_page(), Some(2));
    assert_eq!(
        slice.data().map(|page| page.pagination.current_page),
        Some(2)
    );
    Ok(())
}

use artgrid_api_models::{ApiErrorBody, ArtworkId, ArtworkPage};
use serde_json::json;

#[test]
fn listing_envelope_decodes_with_null_fields() -> Result<(), serde_json::Error> {
    let body = json!({
        "pagination": {
            "total": 129_884,
            "limit": 12,
            "offset": 0,
            "total_pages": 10_824,
            "current_page": 1,
            "next_url": "https://api.artic.edu/api/v1/artworks?page=2"
        },
        "data": [
            {
                "id": 27_992,
                "title": "A Sunday on La Grande Jatte, 1884",
                "place_of_origin": "France",
                "artist_display": "Georges Seurat\nFrench, 1859-1891",
                "inscriptions": null,
                "date_start": 1884,
                "date_end": 1886,
                "api_model": "artworks"
            },
            {
                "id": 4,
                "title": "Priest and Boy",
                "place_of_origin": null,
                "artist_display": null,
                "inscriptions": null,
                "date_start": null,
                "date_end": null
            }
        ],
        "info": { "license_text": "CC0" }
    });

    let page: ArtworkPage = serde_json::from_value(body)?;
    assert_eq!(page.pagination.total, 129_884);
    assert_eq!(page.pagination.limit, 12);
    assert_eq!(page.pagination.current_page, 1);
    assert_eq!(page.pagination.total_pages, Some(10_824));
    assert_eq!(page.ids(), vec![ArtworkId(27_992), ArtworkId(4)]);

    let seurat = &page.data[0];
    assert_eq!(seurat.place_of_origin.as_deref(), Some("France"));
    assert_eq!(seurat.inscriptions, None);
    assert_eq!(seurat.date_end, Some(1886));

    let sparse = &page.data[1];
    assert_eq!(sparse.artist_display, None);
    assert_eq!(sparse.date_start, None);
    Ok(())
}

#[test]
fn limit_envelope_tolerates_missing_pagination() -> Result<(), serde_json::Error> {
    let body = json!({
        "data": [{ "id": 1, "title": "One" }, { "id": 2, "title": "Two" }]
    });
    let page: ArtworkPage = serde_json::from_value(body)?;
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.pagination.total, 0);
    Ok(())
}

#[test]
fn null_title_keeps_the_rest_of_the_page() -> Result<(), serde_json::Error> {
    let body = json!({
        "pagination": { "total": 50, "limit": 12, "current_page": 1 },
        "data": [
            { "id": 1, "title": null },
            { "id": 2, "title": "Two" },
            { "id": 3 }
        ]
    });
    let page: ArtworkPage = serde_json::from_value(body)?;
    assert_eq!(page.ids(), vec![ArtworkId(1), ArtworkId(2), ArtworkId(3)]);
    assert_eq!(page.data[0].title, None);
    assert_eq!(page.data[1].title.as_deref(), Some("Two"));
    assert_eq!(page.data[2].title, None);
    Ok(())
}

#[test]
fn error_body_decodes_catalog_shape() -> Result<(), serde_json::Error> {
    let body = json!({
        "status": 403,
        "error": "Invalid limit",
        "detail": "You have requested too many resources per page. Please set a smaller limit."
    });
    let err: ApiErrorBody = serde_json::from_value(body)?;
    assert_eq!(err.status, Some(403));
    assert!(err.message().is_some_and(|msg| msg.contains("too many resources")));
    Ok(())
}

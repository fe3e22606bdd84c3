//! End-to-end behavior of the catalog filtering and inquiry flows,
//! exercised through the public crate API.

use ecotrade_frontend::catalog::{Catalog, Source};
use ecotrade_frontend::services::filter::{
    product_from_id_param, visible_products, CategoryFilter, FilterState,
};
use ecotrade_frontend::services::inquiry::{InquiryForm, SubmitError, SubmitStatus};

fn catalog() -> Catalog {
    Catalog::builtin()
}

#[test]
fn landing_on_products_without_params_shows_everything() {
    let catalog = catalog();
    let state = FilterState::from_source_param(None);

    let visible = visible_products(&catalog, &state);
    assert_eq!(visible.len(), catalog.len());
    assert!(product_from_id_param(&catalog, None).is_none());
}

#[test]
fn origin_link_from_home_preselects_the_facility() {
    // The origin cards on the home page navigate to /products?source=<key>.
    let catalog = catalog();
    for source in Source::ALL {
        let state = FilterState::from_source_param(Some(source.key()));
        assert_eq!(state.source, Some(source));

        let visible = visible_products(&catalog, &state);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|p| p.source == source));
    }
}

#[test]
fn shared_deep_link_opens_the_right_product() {
    let catalog = catalog();
    let product = product_from_id_param(&catalog, Some("3"));
    assert_eq!(product.map(|p| p.id), Some(3));
}

#[test]
fn deep_link_with_garbage_id_opens_nothing() {
    let catalog = catalog();
    assert!(product_from_id_param(&catalog, Some("abc")).is_none());
    assert!(product_from_id_param(&catalog, Some("999")).is_none());
    assert!(product_from_id_param(&catalog, Some("-1")).is_none());
    assert!(product_from_id_param(&catalog, Some("")).is_none());
}

#[test]
fn mistyped_source_param_falls_back_to_full_catalog() {
    let catalog = catalog();
    let state = FilterState::from_source_param(Some("navoiazot"));
    assert_eq!(state, FilterState::default());
    assert_eq!(visible_products(&catalog, &state).len(), catalog.len());
}

#[test]
fn clicking_a_category_overrides_a_source_deep_link() {
    let catalog = catalog();
    let mut state = FilterState::from_source_param(Some("dehkanabad"));
    assert_eq!(visible_products(&catalog, &state).len(), 1);

    state.select_category(CategoryFilter::Facility(Source::Navoiyazot));
    assert_eq!(state.source, None);
    let visible = visible_products(&catalog, &state);
    assert!(visible.iter().all(|p| p.source == Source::Navoiyazot));

    state.select_category(CategoryFilter::All);
    assert_eq!(visible_products(&catalog, &state).len(), catalog.len());
}

#[test]
fn inquiry_submit_lifecycle() {
    let mut form = InquiryForm {
        name: "Alisher".into(),
        email: "a@example.com".into(),
        phone: "+998 90 000 00 00".into(),
        company: None,
        message: "Interested in urea pricing.".into(),
    };
    assert!(form.validate().is_ok());

    // Oversized messages are rejected locally, no request goes out.
    form.message = "x".repeat(501);
    let err = form.validate().unwrap_err();
    assert!(matches!(err, SubmitError::MessageTooLong { len: 501 }));

    let status = SubmitStatus::from_result(&Err(err));
    assert_eq!(status, SubmitStatus::Error);
    // Touching any field dismisses the error banner.
    assert_eq!(status.on_edit(), SubmitStatus::Idle);

    let status = SubmitStatus::from_result(&Ok(()));
    assert_eq!(status, SubmitStatus::Success);
    assert_eq!(status.on_edit(), SubmitStatus::Success);
}

#[test]
fn quote_request_payload_is_form_urlencoded() {
    let form = InquiryForm {
        name: "Jane Doe".into(),
        email: "jane@corp.example".into(),
        phone: "+998 71 200 00 00".into(),
        company: Some("Agro LLC".into()),
        message: "Need 500t of Ammonium Nitrate".into(),
    };

    let body = form.encode();
    assert!(body.starts_with("name=Jane%20Doe&"));
    assert!(body.contains("&company=Agro%20LLC&"));
    assert!(body.ends_with("&message=Need%20500t%20of%20Ammonium%20Nitrate"));
    assert!(!body.contains(' '));
}

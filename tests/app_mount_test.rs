#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use ecotrade_frontend::app::App;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn app_mounts_without_panicking() {
    // Mounting renders the router with the home page at "/". The point of
    // this test is that no reactive closure panics during the first render.
    leptos::mount::mount_to_body(App);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("test runs in a browser");
    let body_html = document
        .body()
        .map(|b| b.inner_html())
        .unwrap_or_default();
    assert!(body_html.contains("ECOTRADE"));

    // The scroll listener is registered once at the app root, so firing a
    // scroll event after mount must hit a live signal and not panic.
    let window = web_sys::window().expect("test runs in a browser");
    let event = web_sys::Event::new("scroll").expect("scroll event");
    assert!(window.dispatch_event(&event).is_ok());
}

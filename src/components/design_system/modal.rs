use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, X};

/// A modal dialog with a blurred backdrop.
///
/// The page owns the open/closed state; this component only reports close
/// requests (backdrop click or the close button). Clicks inside the content
/// are stopped so they cannot fall through to the backdrop.
#[component]
pub fn Modal(
    /// Invoked on backdrop click or close-button click
    on_close: Callback<()>,
    /// Additional CSS classes for the content container
    #[prop(into, optional)]
    class: String,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle_backdrop_click = move |_: ev::MouseEvent| {
        on_close.run(());
    };

    let handle_content_click = move |evt: ev::MouseEvent| {
        evt.stop_propagation();
    };

    let handle_close_click = move |evt: ev::MouseEvent| {
        evt.stop_propagation();
        on_close.run(());
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/70 backdrop-blur-sm overflow-y-auto"
            on:click=handle_backdrop_click
        >
            <div
                class=format!("relative bg-white rounded-[32px] w-full my-8 shadow-[0_20px_80px_rgba(0,0,0,0.3)] overflow-hidden {class}")
                on:click=handle_content_click
            >
                <button
                    class="absolute top-6 right-6 w-12 h-12 rounded-full bg-white/90 backdrop-blur-sm flex items-center justify-center hover:rotate-90 transition-transform duration-300 cursor-pointer z-10"
                    on:click=handle_close_click
                    aria-label="Close"
                >
                    <Icon icon=X size="24px" />
                </button>
                {children()}
            </div>
        </div>
    }
}

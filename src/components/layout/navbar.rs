use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use phosphor_leptos::{Icon, LIST, X};

use crate::services::scroll::use_scroll_state;

const NAV_ITEMS: [(&str, &str); 3] = [("Home", "/"), ("Products", "/products"), ("Contact", "/contact")];

/// Fixed top navigation bar.
///
/// Gains a stronger backdrop once the page is scrolled past 50px; on small
/// screens the links collapse into a full-screen overlay menu. The scroll
/// listener itself lives at the app root, this component only reads it.
#[component]
pub fn Navbar() -> impl IntoView {
    let is_scrolled = use_scroll_state().is_scrolled;
    let menu_open = RwSignal::new(false);
    let location = use_location();

    let nav_class = move || {
        if is_scrolled.get() {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-700 bg-white/70 backdrop-blur-2xl shadow-[0_8px_32px_rgba(0,0,0,0.06)] border-b border-white/30"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-700 bg-white/50 backdrop-blur-xl"
        }
    };

    let toggle_menu = move |_: ev::MouseEvent| {
        menu_open.update(|open| *open = !*open);
    };

    let close_menu = move |_: ev::MouseEvent| {
        menu_open.set(false);
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-[1400px] mx-auto px-6 lg:px-12">
                <div class="flex items-center justify-between h-20">
                    // Logo
                    <A href="/" attr:class="flex items-center gap-3">
                        <img
                            src="/img/logo.png"
                            alt="ECOTRADE Logo"
                            class="h-10 w-auto drop-shadow-[0_2px_8px_rgba(45,95,63,0.15)]"
                        />
                    </A>

                    // Desktop navigation
                    <div class="hidden md:flex items-center gap-10">
                        {NAV_ITEMS
                            .iter()
                            .map(|(name, path)| {
                                let path = *path;
                                let name = *name;
                                let is_active = move || location.pathname.get() == path;
                                view! {
                                    <A
                                        href=path
                                        attr:class="relative text-[15px] font-medium text-gray-700 tracking-wide transition-all duration-500 hover:text-[#2D5F3F] whitespace-nowrap cursor-pointer"
                                    >
                                        {name}
                                        <Show when=is_active>
                                            <div class="absolute -bottom-2 left-0 right-0 h-0.5 bg-gradient-to-r from-[#2D5F3F]/50 via-[#2D5F3F] to-[#2D5F3F]/50 rounded-full shadow-[0_2px_8px_rgba(45,95,63,0.3)]"></div>
                                        </Show>
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>

                    // Mobile menu button
                    <button
                        on:click=toggle_menu
                        class="md:hidden w-10 h-10 flex items-center justify-center cursor-pointer text-gray-800"
                        aria-label="Toggle menu"
                    >
                        <Show
                            when=move || menu_open.get()
                            fallback=|| view! { <Icon icon=LIST size="26px" /> }
                        >
                            <Icon icon=X size="26px" />
                        </Show>
                    </button>
                </div>
            </div>
        </nav>

        // Mobile menu overlay
        <Show when=move || menu_open.get()>
            <div class="fixed inset-0 z-40 md:hidden bg-white/80 backdrop-blur-3xl">
                <div class="flex flex-col items-center justify-center h-full gap-10">
                    {NAV_ITEMS
                        .iter()
                        .map(|(name, path)| {
                            let name = *name;
                            view! {
                                <A
                                    href=*path
                                    attr:class="text-3xl font-semibold text-gray-800 hover:text-[#2D5F3F] transition-all duration-500 cursor-pointer whitespace-nowrap"
                                >
                                    <span on:click=close_menu>{name}</span>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}

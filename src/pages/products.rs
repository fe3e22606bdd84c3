//! Product catalog page.
//!
//! The visible grid is a pure function of (catalog, filter state); the
//! filter state is synchronized with the `source` query parameter and the
//! detail modal with the `id` parameter.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use phosphor_leptos::{Icon, CHECK_CIRCLE, FILE_TEXT, SQUARES_FOUR};

use crate::catalog::{Catalog, Product};
use crate::components::animated_background::AnimatedBackground;
use crate::components::design_system::{CategoryBadge, Modal, SectionHeader};
use crate::components::layout::{Footer, Navbar};
use crate::services::filter::{
    product_from_id_param, visible_products, CategoryFilter, FilterState,
};

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
pub fn Products() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let filter = RwSignal::new(FilterState::default());
    let selected = RwSignal::new(Option::<Product>::None);
    let query = use_query_map();

    // Re-derive the selection from the URL on mount and on every query
    // change. An unknown `id` leaves the modal state untouched.
    {
        let catalog = catalog.clone();
        Effect::new(move |_| {
            let q = query.get();
            filter.set(FilterState::from_source_param(q.get("source").as_deref()));
            if let Some(product) = product_from_id_param(&catalog, q.get("id").as_deref()) {
                selected.set(Some(product));
            }
            scroll_to_top();
        });
    }

    let close_modal = Callback::new(move |()| selected.set(None));

    let navigate = use_navigate();
    let request_quote = move |_: ev::MouseEvent| {
        selected.set(None);
        navigate("/contact", Default::default());
    };

    let grid_catalog = catalog.clone();

    view! {
        <div class="relative min-h-screen">
            <AnimatedBackground />
            <Navbar />

            <main class="pt-32 pb-20">
                <div class="max-w-[1400px] mx-auto px-6 lg:px-12">
                    <div class="mb-12">
                        <SectionHeader
                            title="Product Catalog"
                            subtitle="Explore our comprehensive range of chemical and petroleum products"
                        />
                    </div>

                    // Category filter buttons; a manual click always clears
                    // the source selector.
                    <div class="flex flex-wrap justify-center gap-4 mb-16">
                        {CategoryFilter::all()
                            .into_iter()
                            .map(|category| {
                                let button_class = move || {
                                    if filter.get().category == category {
                                        "px-8 py-3 rounded-full text-[15px] font-medium transition-all duration-300 cursor-pointer whitespace-nowrap bg-[#2D5F3F] text-white shadow-lg"
                                    } else {
                                        "px-8 py-3 rounded-full text-[15px] font-medium transition-all duration-300 cursor-pointer whitespace-nowrap bg-transparent border border-gray-300 text-gray-700 hover:border-[#2D5F3F]"
                                    }
                                };
                                view! {
                                    <button
                                        class=button_class
                                        on:click=move |_| filter.update(|f| f.select_category(category))
                                    >
                                        {category.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    // Products grid
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {move || {
                            visible_products(&grid_catalog, &filter.get())
                                .into_iter()
                                .map(|product| {
                                    let open_product = product.clone();
                                    view! {
                                        <div
                                            class="group bg-white rounded-2xl overflow-hidden shadow-[0_4px_30px_rgba(0,0,0,0.06)] hover:shadow-[0_8px_50px_rgba(0,0,0,0.12)] transition-all duration-500 hover:-translate-y-2 cursor-pointer"
                                            on:click=move |_| selected.set(Some(open_product.clone()))
                                        >
                                            <div class="relative aspect-[3/4] overflow-hidden">
                                                <img
                                                    src=product.image.clone()
                                                    alt=product.name.clone()
                                                    class="w-full h-full object-cover object-top transition-transform duration-700 group-hover:scale-110"
                                                />
                                            </div>
                                            <div class="p-6">
                                                <CategoryBadge
                                                    category=product.category()
                                                    class="px-3 py-1 text-[10px] mb-3"
                                                />
                                                <h3 class="text-[18px] font-semibold text-black mb-2 group-hover:text-[#2D5F3F] transition-colors">
                                                    {product.name.clone()}
                                                </h3>
                                                <p class="text-[14px] text-gray-600 leading-relaxed line-clamp-2">
                                                    {product.description.clone()}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </main>

            // Product detail modal
            {move || {
                selected.get().map(|product| {
                    let request_quote = request_quote.clone();
                    view! {
                        <Modal on_close=close_modal class="max-w-[1000px]">
                            <div class="grid grid-cols-1 lg:grid-cols-2 max-h-[85vh] overflow-y-auto">
                                <div class="relative h-[400px] lg:h-auto">
                                    <img
                                        src=product.image.clone()
                                        alt=product.name.clone()
                                        class="w-full h-full object-cover object-top"
                                    />
                                </div>

                                <div class="p-8 lg:p-12">
                                    <CategoryBadge
                                        category=product.category()
                                        class="px-4 py-1.5 text-[11px] mb-4"
                                    />

                                    <h2 class="text-[32px] lg:text-[36px] font-bold text-black mb-6">
                                        {product.name.clone()}
                                    </h2>

                                    <p class="text-[17px] text-gray-700 leading-relaxed mb-8">
                                        {product.full_description.clone()}
                                    </p>

                                    <div class="mb-8">
                                        <h3 class="text-[20px] font-semibold text-black mb-4 flex items-center gap-2">
                                            <span class="text-[#2D5F3F]">
                                                <Icon icon=FILE_TEXT size="20px" />
                                            </span>
                                            "Specifications"
                                        </h3>
                                        <ul class="space-y-2">
                                            {product
                                                .specifications
                                                .iter()
                                                .map(|spec| {
                                                    view! {
                                                        <li class="flex items-start gap-2 text-[15px] text-gray-600">
                                                            <span class="text-[#2D5F3F] mt-0.5">
                                                                <Icon icon=CHECK_CIRCLE size="16px" />
                                                            </span>
                                                            <span>{spec.clone()}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>

                                    <div class="mb-8">
                                        <h3 class="text-[20px] font-semibold text-black mb-4 flex items-center gap-2">
                                            <span class="text-[#2D5F3F]">
                                                <Icon icon=SQUARES_FOUR size="20px" />
                                            </span>
                                            "Applications"
                                        </h3>
                                        <div class="flex flex-wrap gap-2">
                                            {product
                                                .applications
                                                .iter()
                                                .map(|app| {
                                                    view! {
                                                        <span class="px-4 py-2 bg-gray-100 text-gray-700 text-[14px] rounded-lg">
                                                            {app.clone()}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>

                                    <button
                                        on:click=request_quote
                                        class="w-full py-4 bg-[#2D5F3F] text-white text-[16px] font-semibold rounded-xl hover:bg-[#1A4D2E] transition-all duration-300 cursor-pointer whitespace-nowrap"
                                    >
                                        "Request Quote"
                                    </button>
                                </div>
                            </div>
                        </Modal>
                    }
                })
            }}

            <Footer />
        </div>
    }
}

use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use phosphor_leptos::{Icon, IconData, ARROW_RIGHT, BUILDINGS, FLASK, LEAF};

use crate::catalog::Source;
use crate::components::design_system::SectionHeader;

struct Origin {
    source: Source,
    title: &'static str,
    description: &'static str,
    icon: IconData,
    image: &'static str,
}

const ORIGINS: [Origin; 3] = [
    Origin {
        source: Source::Navoiyazot,
        title: "Navoiyazot Plant",
        description: "Mineral fertilizers and products from one of Uzbekistan's largest chemical plants",
        icon: BUILDINGS,
        image: "/img/3.jpg",
    },
    Origin {
        source: Source::MaxamChirchiq,
        title: "Maxam-Chirchiq Plant",
        description: "Nitrogen-based fertilizers and chemicals from a major production facility",
        icon: FLASK,
        image: "/img/4.jpg",
    },
    Origin {
        source: Source::Dehkanabad,
        title: "Dehkanabad Potash Plant",
        description: "Potash fertilizers produced at a strategic mining and processing facility",
        icon: LEAF,
        image: "/img/5.jpg",
    },
];

/// "Product Origins" cards; each navigates to the catalog pre-filtered to
/// one facility via the `source` query parameter.
#[component]
pub fn OriginsSection() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <section id="products" class="relative py-24 lg:py-32 overflow-hidden bg-white">
            <div class="max-w-[1400px] mx-auto px-6 lg:px-12 relative z-10">
                <SectionHeader
                    title="Product Origins"
                    subtitle="Products supplied from key manufacturing facilities"
                />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-7xl mx-auto">
                    {ORIGINS
                        .iter()
                        .map(|origin| {
                            let nav = navigate.clone();
                            let source = origin.source;
                            let handle_click = move |_: ev::MouseEvent| {
                                nav(&format!("/products?source={}", source.key()), Default::default());
                            };
                            view! {
                                <div class="group cursor-pointer" on:click=handle_click>
                                    <div class="bg-white/70 backdrop-blur-sm rounded-2xl overflow-hidden transition-all duration-500 hover:-translate-y-2 border border-[#2D5F3F]/10 shadow-[0_8px_30px_rgba(0,0,0,0.08)]">
                                        <div class="relative h-[240px] overflow-hidden">
                                            <img
                                                src=origin.image
                                                alt=origin.title
                                                class="w-full h-full object-cover object-top transition-transform duration-700 group-hover:scale-105"
                                            />
                                            <div class="absolute inset-0 bg-gradient-to-t from-black/20 to-transparent"></div>
                                            <div class="absolute top-4 right-4 w-12 h-12 bg-white/90 backdrop-blur-sm rounded-xl flex items-center justify-center text-[#2D5F3F]">
                                                <Icon icon=origin.icon size="24px" />
                                            </div>
                                        </div>

                                        <div class="p-6">
                                            <h3 class="text-[22px] font-semibold text-black/90 mb-3">
                                                {origin.title}
                                            </h3>
                                            <p class="text-[16px] text-gray-600/80 leading-relaxed mb-4">
                                                {origin.description}
                                            </p>
                                            <span class="flex items-center gap-2 text-[#2D5F3F] font-medium group-hover:gap-3 transition-all duration-300">
                                                <span class="text-[15px]">"Learn more"</span>
                                                <Icon icon=ARROW_RIGHT size="18px" />
                                            </span>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

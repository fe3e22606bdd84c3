use leptos::prelude::*;
use phosphor_leptos::{Icon, ARROW_UP_RIGHT, BUILDINGS, CHECK, MAP_PIN};

use crate::catalog::{factories, Factory};
use crate::components::design_system::{Modal, SectionHeader};

/// Factories grid with a detail modal; exactly one factory or none is open
/// at a time.
#[component]
pub fn FactoriesSection() -> impl IntoView {
    let selected = RwSignal::new(Option::<Factory>::None);
    let close_modal = Callback::new(move |()| selected.set(None));

    view! {
        <section class="relative py-24 lg:py-32 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-[#E6F5EB]/70 via-[#F0F9F4]/60 to-[#E6F5EB]/70"></div>

            <div class="max-w-[1400px] mx-auto px-6 lg:px-12 relative z-10">
                <SectionHeader
                    title="Our Factories"
                    subtitle="State-of-the-art manufacturing facilities worldwide"
                />

                // 2x2 grid; the "large" factory spans the right column
                <div class="grid grid-cols-1 md:grid-cols-2 md:grid-rows-2 gap-4 lg:gap-6 max-w-6xl mx-auto">
                    {factories()
                        .into_iter()
                        .map(|factory| {
                            let cell_class = if factory.large {
                                "relative group cursor-pointer md:col-start-2 md:row-start-1 md:row-span-2"
                            } else {
                                "relative group cursor-pointer"
                            };
                            let open_factory = factory.clone();
                            view! {
                                <div
                                    class=cell_class
                                    on:click=move |_| selected.set(Some(open_factory.clone()))
                                >
                                    <div class="relative h-full min-h-[250px] rounded-2xl overflow-hidden border border-white/40 shadow-[0_8px_30px_rgba(0,0,0,0.08)]">
                                        <div class="relative h-full transition-transform duration-500 group-hover:-translate-y-1">
                                            <img
                                                src=factory.image.clone()
                                                alt=factory.name.clone()
                                                class="w-full h-full object-cover object-top transition-transform duration-700 group-hover:scale-105"
                                            />
                                            <div class="absolute inset-0 bg-gradient-to-t from-black/60 via-black/20 to-transparent"></div>

                                            <div class="absolute inset-0 p-6 flex flex-col justify-end">
                                                <h3 class="text-white text-[18px] lg:text-[22px] font-semibold mb-2">
                                                    {factory.name.clone()}
                                                </h3>
                                                <p class="text-white/90 text-[14px] flex items-center gap-2">
                                                    <Icon icon=MAP_PIN size="16px" />
                                                    {factory.location.clone()}
                                                </p>
                                            </div>

                                            <div class="absolute top-4 right-4 w-10 h-10 bg-white/20 backdrop-blur-md rounded-full flex items-center justify-center opacity-0 group-hover:opacity-100 transition-all duration-300 text-white">
                                                <Icon icon=ARROW_UP_RIGHT size="20px" />
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            // Factory detail modal
            {move || {
                selected.get().map(|factory| {
                    view! {
                        <Modal on_close=close_modal class="max-w-3xl max-h-[90vh] overflow-y-auto rounded-3xl">
                            <div class="relative h-[280px] overflow-hidden">
                                <img
                                    src=factory.image.clone()
                                    alt=factory.name.clone()
                                    class="w-full h-full object-cover object-top"
                                />
                                <div class="absolute inset-0 bg-gradient-to-t from-black/40 via-transparent to-transparent"></div>
                            </div>

                            <div class="p-8 lg:p-10">
                                <div class="flex items-start gap-3 mb-6">
                                    <div class="w-14 h-14 bg-[#E6F5EB] rounded-2xl flex items-center justify-center flex-shrink-0 text-[#2D5F3F]">
                                        <Icon icon=BUILDINGS size="30px" />
                                    </div>
                                    <div>
                                        <h3 class="text-[28px] lg:text-[32px] font-semibold text-black/90 mb-2">
                                            {factory.name.clone()}
                                        </h3>
                                        <p class="text-[16px] text-gray-600/80 flex items-center gap-2">
                                            <span class="text-[#2D5F3F]">
                                                <Icon icon=MAP_PIN size="16px" />
                                            </span>
                                            {factory.location.clone()}
                                        </p>
                                    </div>
                                </div>

                                <p class="text-[17px] text-gray-700/90 leading-relaxed mb-8">
                                    {factory.description.clone()}
                                </p>

                                <div class="space-y-4">
                                    <h4 class="text-[18px] font-semibold text-black/90 mb-4">
                                        "Key Features"
                                    </h4>
                                    {factory
                                        .features
                                        .iter()
                                        .map(|feature| {
                                            view! {
                                                <div class="flex items-start gap-3">
                                                    <div class="w-8 h-8 bg-[#E6F5EB] rounded-full flex items-center justify-center flex-shrink-0 mt-0.5 text-[#2D5F3F]">
                                                        <Icon icon=CHECK size="14px" />
                                                    </div>
                                                    <p class="text-[16px] text-gray-700/80 leading-relaxed">
                                                        {feature.clone()}
                                                    </p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </Modal>
                    }
                })
            }}
        </section>
    }
}

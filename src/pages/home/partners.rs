use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, IconData, CARET_DOWN, PACKAGE, STOREFRONT, TRUCK};

struct Partner {
    name: &'static str,
    description: &'static str,
}

struct PartnerCategory {
    title: &'static str,
    icon: IconData,
    partners: &'static [Partner],
}

const CATEGORIES: [PartnerCategory; 3] = [
    PartnerCategory {
        title: "Production and Extraction",
        icon: PACKAGE,
        partners: &[
            Partner {
                name: "АО \"MAXAM-CHIRCHIK\"",
                description: "over 1.5 million tons of products per year",
            },
            Partner {
                name: "АО \"NavoiAzot\"",
                description: "over 2.2 million tons of products per year",
            },
            Partner {
                name: "АО \"Dehkanabad Potash Plant\"",
                description: "over 330 thousand tons of products per year",
            },
        ],
    },
    PartnerCategory {
        title: "Logistics and Transport",
        icon: TRUCK,
        partners: &[
            Partner {
                name: "OOO \"KIMYOTRANS-LOGISTIC\"",
                description: "Logistics within the group of companies and intersectoral raw material transportation",
            },
            Partner {
                name: "OOO \"KIMYOTRANS\"",
                description: "Transportation and freight forwarding services for domestic and international shipments",
            },
        ],
    },
    PartnerCategory {
        title: "Trade",
        icon: STOREFRONT,
        partners: &[Partner {
            name: "OOO \"UZKIMYOIMPEX\"",
            description: "Logistics within the group of companies and intersectoral raw material transportation",
        }],
    },
];

/// Partner accordion: at most one category expanded at a time; clicking an
/// expanded header collapses it.
#[component]
pub fn PartnersSection() -> impl IntoView {
    let active_category = RwSignal::new(Option::<usize>::None);

    view! {
        <section class="relative py-24 lg:py-32 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-white via-[#E6F5EB]/20 to-white"></div>

            <div class="max-w-[1400px] mx-auto px-6 lg:px-12 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 lg:gap-16 items-start">
                    <div class="lg:sticky lg:top-32">
                        <span class="text-[12px] font-semibold text-[#2D5F3F] uppercase tracking-[2px] mb-5 block">
                            "Our Partners"
                        </span>
                        <h2 class="text-[42px] lg:text-[52px] font-semibold text-black/90 mb-6 leading-tight">
                            "Our Partners"
                        </h2>
                        <div class="space-y-5 text-[17px] lg:text-[18px] text-gray-700/80 leading-relaxed">
                            <p>
                                "AO \"Uzkimyosanoat\" unites leading enterprises of the \
                                 chemical industry in Uzbekistan, covering the full cycle from \
                                 raw material extraction and production to scientific \
                                 research, logistics, and trade."
                            </p>
                            <p>
                                "Thanks to modern technologies and highly qualified personnel, \
                                 the company produces millions of tons of products annually, \
                                 making a significant contribution to the country's economic \
                                 development."
                            </p>
                        </div>
                    </div>

                    <div class="space-y-4">
                        {CATEGORIES
                            .iter()
                            .enumerate()
                            .map(|(index, category)| {
                                let is_active = move || active_category.get() == Some(index);
                                let toggle = move |_: ev::MouseEvent| {
                                    active_category.update(|active| {
                                        *active = if *active == Some(index) { None } else { Some(index) };
                                    });
                                };
                                let caret_class = move || {
                                    if is_active() {
                                        "text-[#2D5F3F] transition-transform duration-300 rotate-180"
                                    } else {
                                        "text-[#2D5F3F] transition-transform duration-300"
                                    }
                                };
                                view! {
                                    <div class="bg-white/70 backdrop-blur-sm rounded-2xl overflow-hidden transition-all duration-300 border border-[#2D5F3F]/10 shadow-[0_8px_30px_rgba(0,0,0,0.08)]">
                                        <button
                                            on:click=toggle
                                            class="w-full px-6 py-5 flex items-center justify-between cursor-pointer hover:bg-[#E6F5EB]/30 transition-all duration-300"
                                        >
                                            <div class="flex items-center gap-4">
                                                <div class="w-12 h-12 bg-[#E6F5EB]/50 rounded-xl flex items-center justify-center flex-shrink-0 text-[#2D5F3F]">
                                                    <Icon icon=category.icon size="20px" />
                                                </div>
                                                <h3 class="text-[18px] lg:text-[20px] font-semibold text-black/90 text-left">
                                                    {category.title}
                                                </h3>
                                            </div>
                                            <span class=caret_class>
                                                <Icon icon=CARET_DOWN size="24px" />
                                            </span>
                                        </button>

                                        <Show when=is_active>
                                            <div class="px-6 pb-6 space-y-4">
                                                {category
                                                    .partners
                                                    .iter()
                                                    .map(|partner| {
                                                        view! {
                                                            <div class="bg-white/60 rounded-xl p-4 border border-[#E6F5EB]/50 shadow-[0_4px_16px_rgba(0,0,0,0.04)]">
                                                                <h4 class="text-[16px] font-semibold text-black/90 mb-2">
                                                                    {partner.name}
                                                                </h4>
                                                                <p class="text-[15px] text-gray-600/80 leading-relaxed">
                                                                    {partner.description}
                                                                </p>
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

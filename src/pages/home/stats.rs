use leptos::prelude::*;
use phosphor_leptos::{Icon, IconData, FILE_TEXT, LEAF, PATH, SHIELD_CHECK};

use crate::components::design_system::SectionHeader;

struct ImpactStat {
    icon: IconData,
    value: &'static str,
    label: &'static str,
    description: &'static str,
}

const IMPACT_STATS: [ImpactStat; 4] = [
    ImpactStat {
        icon: SHIELD_CHECK,
        value: "100%",
        label: "Quality Control Compliance",
        description: "Across all production stages",
    },
    ImpactStat {
        icon: PATH,
        value: "50+",
        label: "Verified Logistics Continuity",
        description: "Stable global supply routes",
    },
    ImpactStat {
        icon: FILE_TEXT,
        value: "100%",
        label: "Contract Fulfilment Commitment",
        description: "On-time and in-full delivery",
    },
    ImpactStat {
        icon: LEAF,
        value: "-30%",
        label: "Carbon Reduction",
        description: "Lower environmental footprint",
    },
];

#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section class="relative py-24 lg:py-32 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-[#E6F5EB]/70 via-[#F0F9F4]/60 to-[#E6F5EB]/70"></div>

            <div class="max-w-[1400px] mx-auto px-6 lg:px-12 relative z-10">
                <SectionHeader
                    title="Our Impact"
                    subtitle="Numbers that reflect our commitment to excellence"
                />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 max-w-7xl mx-auto">
                    {IMPACT_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="bg-white/70 backdrop-blur-sm rounded-2xl p-8 text-center transition-all duration-300 hover:-translate-y-1 border border-white/40 shadow-[0_8px_30px_rgba(0,0,0,0.08)]">
                                    <div class="w-16 h-16 bg-[#E6F5EB] rounded-2xl flex items-center justify-center mx-auto mb-6 text-[#2D5F3F]">
                                        <Icon icon=stat.icon size="36px" />
                                    </div>
                                    <div class="text-[48px] lg:text-[56px] font-bold text-[#2D5F3F] mb-3">
                                        {stat.value}
                                    </div>
                                    <h3 class="text-[18px] font-semibold text-black/90 mb-2">
                                        {stat.label}
                                    </h3>
                                    <p class="text-[15px] text-gray-600/80">
                                        {stat.description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

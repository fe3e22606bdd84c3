use leptos::prelude::*;

const COMPANY_STATS: [(&str, &str); 4] = [
    ("24/7", "Operational support availability"),
    ("3", "Production facilities in Uzbekistan"),
    ("50+", "Export destinations worldwide"),
    ("10+", "Years of international trading experience"),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section class="relative py-24 lg:py-32 overflow-hidden bg-white">
            <div class="max-w-[1400px] mx-auto px-6 lg:px-12 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 lg:gap-16 items-center">
                    <div>
                        <h2 class="text-[42px] lg:text-[52px] font-semibold text-black/90 mb-6 leading-tight">
                            "About ECOTRADE"
                        </h2>
                        <div class="space-y-5 text-[17px] lg:text-[18px] text-gray-700/80 leading-relaxed">
                            <p>
                                "ECOTRADE FZCO is an international trading company specializing \
                                 in the supply of mineral fertilizers produced in the Republic \
                                 of Uzbekistan. Our core expertise lies in organizing efficient \
                                 trade operations, coordinating logistics, and ensuring \
                                 reliable execution across all stages of cooperation."
                            </p>
                            <p>
                                "The company focuses on speed of execution, operational \
                                 flexibility, and continuous support throughout the entire \
                                 transaction cycle, from initial request to final delivery. A \
                                 structured approach to workflow management allows us to \
                                 respond promptly to market requirements and partner needs."
                            </p>
                            <p>
                                "Our competitive advantages include transparent communication, \
                                 consistent quality standards, and close cooperation with \
                                 production and logistics partners. ECOTRADE FZCO is committed \
                                 to long-term collaboration, reliability, and sustainable \
                                 business practices in international trade."
                            </p>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                        {COMPANY_STATS
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="bg-white/70 backdrop-blur-sm rounded-2xl p-8 text-center transition-all duration-300 hover:-translate-y-1 border border-[#2D5F3F]/10 shadow-[0_8px_30px_rgba(0,0,0,0.08)]">
                                        <div class="text-[48px] lg:text-[56px] font-bold text-[#2D5F3F] mb-2">
                                            {*value}
                                        </div>
                                        <div class="text-[16px] text-gray-600/80 font-medium">
                                            {*label}
                                        </div>
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

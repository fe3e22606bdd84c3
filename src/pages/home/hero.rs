use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20">
            // Background image with a white gradient wash
            <div
                class="absolute inset-0 -z-10 bg-center bg-cover opacity-[0.70]"
                style="background-image: url('/img/11.jpg');"
            ></div>
            <div class="absolute inset-0 -z-10 bg-gradient-to-b from-white/70 via-white/50 to-white/70"></div>

            <div class="relative z-10 max-w-[1400px] mx-auto px-6 lg:px-12 w-full">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="text-left">
                        <h1 class="text-[56px] md:text-[72px] lg:text-[96px] font-bold text-black/95 mb-4 md:mb-6 leading-tight">
                            "ECOTRADE FZCO"
                        </h1>

                        <div class="space-y-3 md:space-y-4 mb-8 md:mb-12">
                            <h2 class="text-[26px] md:text-[32px] lg:text-[42px] font-bold text-[#2D5F3F] leading-tight">
                                "Global Chemical Solutions"
                            </h2>
                        </div>

                        <p class="text-[16px] md:text-[18px] lg:text-[22px] font-medium text-gray-700 leading-relaxed mb-8 md:mb-12 max-w-2xl">
                            "Ecotrade FZCO specializes in the trading of mineral fertilizers \
                             produced in the Republic of Uzbekistan. The company works with \
                             products manufactured at major chemical enterprises, focusing on \
                             stable supply chains, efficient logistics, and consistent product \
                             quality."
                        </p>

                        <p class="text-[16px] md:text-[18px] lg:text-[22px] font-medium text-gray-700 leading-relaxed mb-8 md:mb-12 max-w-2xl">
                            "Cooperating with leading manufacturers such as JSC Navoiyazot, JSC \
                             Maxam-Chirchiq, and JSC Dehkanabad Potash Plant, Ecotrade FZCO \
                             delivers trading solutions designed to support long-term \
                             partnerships and reliable fulfillment of contractual obligations."
                        </p>

                        <div class="flex flex-col sm:flex-row flex-wrap gap-4 md:gap-6">
                            <a
                                href="#products"
                                class="px-8 md:px-10 py-3 md:py-4 bg-[#2D5F3F] text-white text-[15px] md:text-[17px] font-semibold rounded-full hover:bg-[#234a31] transition-all duration-300 whitespace-nowrap cursor-pointer text-center shadow-[0_8px_30px_rgba(45,95,63,0.25)]"
                            >
                                "Our Products"
                            </a>
                            <a
                                href="/contact"
                                class="px-8 md:px-10 py-3 md:py-4 bg-white/70 backdrop-blur-sm text-[#2D5F3F] text-[15px] md:text-[17px] font-semibold rounded-full hover:bg-white/90 transition-all duration-300 whitespace-nowrap cursor-pointer text-center border border-[#2D5F3F]/20 shadow-[0_8px_30px_rgba(0,0,0,0.1)]"
                            >
                                "Contact Us"
                            </a>
                        </div>
                    </div>

                    // Hidden on mobile
                    <div class="hidden lg:flex relative items-center justify-center lg:justify-end">
                        <div class="relative w-full max-w-[600px] h-[500px] lg:h-[600px]">
                            <img
                                src="/img/1.png"
                                alt="Petroleum Products"
                                class="w-full h-full object-contain drop-shadow-2xl"
                            />
                        </div>
                    </div>
                </div>

                // Scroll indicator
                <div class="absolute -bottom-20 left-1/2 -translate-x-1/2">
                    <div class="w-7 h-11 md:w-8 md:h-12 border-2 border-[#2D5F3F]/30 rounded-full flex items-start justify-center p-2">
                        <div class="w-1.5 h-3 bg-[#2D5F3F] rounded-full animate-bounce"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;

/// Site footer with the copy notice and the bottom bar.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative bg-gradient-to-br from-[#2D5F3F] via-[#1A4D2E] to-[#2D5F3F] text-white py-16 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-black/10 via-transparent to-black/10"></div>

            // Floating soft orbs
            <div
                class="absolute top-10 left-[10%] w-[300px] h-[300px] rounded-full pointer-events-none"
                style="background: radial-gradient(circle, rgba(255, 255, 255, 0.08) 0%, transparent 70%); filter: blur(60px);"
            ></div>
            <div
                class="absolute bottom-10 right-[15%] w-[250px] h-[250px] rounded-full pointer-events-none"
                style="background: radial-gradient(circle, rgba(255, 255, 255, 0.06) 0%, transparent 70%); filter: blur(50px);"
            ></div>

            <div class="max-w-[1400px] mx-auto px-6 lg:px-12 relative z-10">
                <div class="flex flex-col md:flex-row items-center md:items-start justify-between gap-6 mb-8">
                    <img
                        src="/img/logo.png"
                        alt="ECOTRADE"
                        class="h-10 brightness-0 invert drop-shadow-[0_2px_8px_rgba(255,255,255,0.2)]"
                    />
                    <p class="text-white/80 text-[14px] md:text-[13px] leading-relaxed max-w-md text-center md:text-right">
                        "The copying of information (quoting of data or messages) published \
                         on the company's website (hereinafter referred to as the \"Website\") \
                         is allowed only with a reference to the source of such information."
                    </p>
                </div>

                <div class="pt-8 border-t border-white/10 flex flex-col md:flex-row justify-between items-center gap-4">
                    <p class="text-white/70 text-sm">
                        "\u{a9} 2025 ECOTRADE. All rights reserved."
                    </p>
                </div>
            </div>
        </footer>
    }
}

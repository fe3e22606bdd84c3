use leptos::prelude::*;

use crate::components::design_system::SectionHeader;
use crate::components::inquiry_form::InquiryFormPanel;

/// Home-page inquiry section: the shared form without the company field.
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section class="relative py-24 lg:py-32 overflow-hidden bg-white">
            <div class="max-w-[1400px] mx-auto px-6 lg:px-12 relative z-10">
                <SectionHeader
                    title="Get in Touch"
                    subtitle="Send us a message and our team will respond promptly"
                />

                <div class="max-w-3xl mx-auto">
                    <div class="bg-white rounded-[30px] p-10 lg:p-12 shadow-[0_4px_40px_rgba(0,0,0,0.06)] border border-[#2D5F3F]/10">
                        <InquiryFormPanel />
                    </div>
                </div>
            </div>
        </section>
    }
}

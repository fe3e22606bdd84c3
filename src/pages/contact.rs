//! Contact page: info panel plus the full inquiry form.

use leptos::prelude::*;
use phosphor_leptos::{
    Icon, IconData, CLOCK, ENVELOPE, FACEBOOK_LOGO, INSTAGRAM_LOGO, LINKEDIN_LOGO, MAP_PIN,
    PHONE, TWITTER_LOGO,
};

use crate::components::animated_background::AnimatedBackground;
use crate::components::inquiry_form::InquiryFormPanel;
use crate::components::layout::{Footer, Navbar};

struct ContactInfo {
    icon: IconData,
    title: &'static str,
    lines: &'static [&'static str],
}

const CONTACT_INFO: [ContactInfo; 4] = [
    ContactInfo {
        icon: MAP_PIN,
        title: "Address",
        lines: &["Premises No. 5EB 644, Sixth Floor, Building Name 5 East B Dubai Airport Freezone, United Arab Emirate"],
    },
    ContactInfo {
        icon: PHONE,
        title: "Phone",
        lines: &["+1 (555) 123-4567", "+1 (555) 123-4568"],
    },
    ContactInfo {
        icon: ENVELOPE,
        title: "Email",
        lines: &["info@ecotrd.com"],
    },
    ContactInfo {
        icon: CLOCK,
        title: "Business Hours",
        lines: &["Monday - Friday: 9:00 AM - 6:00 PM"],
    },
];

const SOCIALS: [(&str, IconData); 4] = [
    ("LinkedIn", LINKEDIN_LOGO),
    ("Twitter", TWITTER_LOGO),
    ("Facebook", FACEBOOK_LOGO),
    ("Instagram", INSTAGRAM_LOGO),
];

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <div class="relative min-h-screen">
            <AnimatedBackground />
            <Navbar />

            <main class="pt-32 pb-20">
                <div class="max-w-[1400px] mx-auto px-6 lg:px-12">
                    <div class="text-center mb-16">
                        <h1 class="text-[56px] lg:text-[64px] font-bold text-black mb-4">
                            "Contact Us"
                        </h1>
                        <p class="text-[18px] text-gray-600">
                            "Get in touch with our team for inquiries and support"
                        </p>
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-5 gap-12">
                        // Contact information
                        <div class="lg:col-span-2 bg-[#E6F5EB] rounded-[30px] p-10 lg:p-12">
                            <h2 class="text-[36px] lg:text-[48px] font-bold text-[#1A4D2E] mb-12">
                                "Get in Touch"
                            </h2>

                            <div class="space-y-10">
                                {CONTACT_INFO
                                    .iter()
                                    .map(|info| {
                                        view! {
                                            <div class="flex items-start gap-4">
                                                <div class="w-14 h-14 rounded-xl bg-white flex items-center justify-center flex-shrink-0 text-[#2D5F3F]">
                                                    <Icon icon=info.icon size="24px" />
                                                </div>
                                                <div>
                                                    <h3 class="text-[18px] font-semibold text-[#1A4D2E] mb-2">
                                                        {info.title}
                                                    </h3>
                                                    {info
                                                        .lines
                                                        .iter()
                                                        .map(|line| {
                                                            view! {
                                                                <p class="text-[15px] text-gray-700 leading-relaxed">
                                                                    {*line}
                                                                </p>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            // Social media
                            <div class="mt-12 pt-8 border-t border-[#2D5F3F]/20">
                                <h3 class="text-[18px] font-semibold text-[#1A4D2E] mb-4">
                                    "Follow Us"
                                </h3>
                                <div class="flex gap-4">
                                    {SOCIALS
                                        .iter()
                                        .map(|(label, icon)| {
                                            view! {
                                                <a
                                                    href="#"
                                                    aria-label=*label
                                                    class="w-12 h-12 rounded-full bg-white flex items-center justify-center text-[#2D5F3F] hover:bg-[#2D5F3F] hover:text-white transition-all duration-300 cursor-pointer"
                                                >
                                                    <Icon icon=*icon size="20px" />
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>

                        // Inquiry form
                        <div class="lg:col-span-3">
                            <div class="bg-white rounded-[30px] p-10 lg:p-12 shadow-[0_4px_40px_rgba(0,0,0,0.06)]">
                                <h2 class="text-[32px] font-bold text-black mb-8">
                                    "Send us a Message"
                                </h2>
                                <InquiryFormPanel collect_company=true />
                            </div>
                        </div>
                    </div>
                </div>
            </main>

            <Footer />
        </div>
    }
}

//! Landing page, assembled from its sections.

mod about;
mod contact_section;
mod factories;
mod hero;
mod origins;
mod partners;
mod stats;

use leptos::prelude::*;

use crate::components::animated_background::AnimatedBackground;
use crate::components::layout::{Footer, Navbar};

use about::AboutSection;
use contact_section::ContactSection;
use factories::FactoriesSection;
use hero::HeroSection;
use origins::OriginsSection;
use partners::PartnersSection;
use stats::StatsSection;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="relative min-h-screen">
            <AnimatedBackground />
            <Navbar />

            <main>
                <HeroSection />
                <AboutSection />
                <StatsSection />
                <OriginsSection />
                <PartnersSection />
                <FactoriesSection />
                <ContactSection />
            </main>

            <Footer />
        </div>
    }
}

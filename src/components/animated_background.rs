use leptos::prelude::*;

/// Page-wide background tint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackgroundVariant {
    #[default]
    White,
    Green,
}

impl BackgroundVariant {
    fn class(&self) -> &'static str {
        match self {
            BackgroundVariant::White => "bg-white",
            BackgroundVariant::Green => {
                "bg-gradient-to-br from-[#E6F5EB] via-[#F0F9F4] to-[#E6F5EB]"
            }
        }
    }
}

/// Fixed decorative background layer behind all page content.
///
/// Purely presentational: a tinted base plus two slowly pulsing blurred
/// orbs, animated by the `animate-pulse-slow` keyframes in the stylesheet.
#[component]
pub fn AnimatedBackground(
    #[prop(default = BackgroundVariant::White)] variant: BackgroundVariant,
) -> impl IntoView {
    view! {
        <div class=format!("fixed inset-0 -z-10 {}", variant.class())>
            <div
                class="absolute top-[15%] left-[8%] w-[320px] h-[320px] rounded-full pointer-events-none animate-pulse-slow"
                style="background: radial-gradient(circle, rgba(45, 95, 63, 0.12) 0%, transparent 70%); filter: blur(60px);"
            ></div>
            <div
                class="absolute bottom-[12%] right-[10%] w-[260px] h-[260px] rounded-full pointer-events-none animate-pulse-slow"
                style="background: radial-gradient(circle, rgba(0, 194, 97, 0.10) 0%, transparent 70%); filter: blur(50px); animation-delay: -4s;"
            ></div>
        </div>
    }
}

use leptos::prelude::*;

/// Centered section heading with a one-line subtitle.
#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-[48px] lg:text-[56px] font-semibold text-black/90 mb-5">
                {title}
            </h2>
            <p class="text-[18px] lg:text-[20px] text-gray-600/80">
                {subtitle}
            </p>
        </div>
    }
}

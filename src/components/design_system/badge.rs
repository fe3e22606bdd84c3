use leptos::prelude::*;

/// Facility name pill shown on product cards and in the detail modal.
#[component]
pub fn CategoryBadge(
    /// Display name of the facility
    #[prop(into)]
    category: String,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let base_class = "inline-block bg-[#E6F5EB] text-[#2D5F3F] font-semibold uppercase tracking-wider rounded-full";
    let full_class = format!("{base_class} {class}");

    view! {
        <span class=full_class>
            {category}
        </span>
    }
}

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::services::inquiry::{
    submit_inquiry, InquiryForm, SubmitStatus, ERROR_BANNER, MAX_MESSAGE_LEN, SUCCESS_BANNER,
};

const INPUT_CLASS: &str = "w-full px-5 py-4 bg-gray-50 border border-gray-200 rounded-xl text-[16px] text-gray-800 placeholder-gray-400 focus:outline-none focus:border-[#2D5F3F] focus:ring-4 focus:ring-[#2D5F3F]/10 transition-all duration-300";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-2";

/// One labelled text input bound to a field signal.
///
/// Editing any field clears a stale error banner (`SubmitStatus::on_edit`).
#[component]
fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    #[prop(default = true)] required: bool,
    value: RwSignal<String>,
    status: RwSignal<SubmitStatus>,
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL_CLASS>{label}</label>
            <input
                type=input_type
                required=required
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |evt| {
                    value.set(event_target_value(&evt));
                    status.update(|s| *s = s.on_edit());
                }
            />
        </div>
    }
}

/// Inquiry form shared by the home-page contact section and the contact
/// page. The contact page additionally collects a company name
/// (`collect_company`) and shows a live character counter.
///
/// Submission: `Idle -> Submitting -> {Success, Error}`. The submit button
/// is disabled while a request is in flight, so each form instance has at
/// most one outstanding request. On success every field resets to empty.
#[component]
pub fn InquiryFormPanel(#[prop(default = false)] collect_company: bool) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitStatus::Idle);

    let handle_submit = move |evt: ev::SubmitEvent| {
        evt.prevent_default();

        if status.get().is_submitting() {
            return;
        }

        let form = InquiryForm {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            company: collect_company.then(|| company.get()),
            message: message.get(),
        };

        // Length violation surfaces the error banner without any network
        // activity.
        if form.validate().is_err() {
            status.set(SubmitStatus::Error);
            return;
        }

        status.set(SubmitStatus::Submitting);
        spawn_local(async move {
            let result = submit_inquiry(&form).await;
            if let Err(err) = &result {
                log::warn!("inquiry submission failed: {err}");
            }
            status.set(SubmitStatus::from_result(&result));
            if result.is_ok() {
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                company.set(String::new());
                message.set(String::new());
            }
        });
    };

    let counter = move || format!("{}/{MAX_MESSAGE_LEN} characters", message.get().chars().count());

    view! {
        <form on:submit=handle_submit class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <FormField label="Your Name *" input_type="text" value=name status=status />
                <FormField label="Email Address *" input_type="email" value=email status=status />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <FormField label="Phone Number *" input_type="tel" value=phone status=status />
                {collect_company.then(|| {
                    view! {
                        <FormField
                            label="Company Name"
                            input_type="text"
                            required=false
                            value=company
                            status=status
                        />
                    }
                })}
            </div>

            <div>
                <label class=LABEL_CLASS>
                    {format!("Your Message * (max {MAX_MESSAGE_LEN} characters)")}
                </label>
                <textarea
                    required=true
                    maxlength=MAX_MESSAGE_LEN.to_string()
                    rows="6"
                    class=format!("{INPUT_CLASS} resize-none")
                    prop:value=move || message.get()
                    on:input=move |evt| {
                        message.set(event_target_value(&evt));
                        status.update(|s| *s = s.on_edit());
                    }
                ></textarea>
                {collect_company.then(|| {
                    view! {
                        <p class="text-sm text-gray-500 mt-2 text-right">{counter}</p>
                    }
                })}
            </div>

            <button
                type="submit"
                disabled=move || status.get().is_submitting()
                class="w-full py-5 bg-[#2D5F3F] text-white text-[18px] font-semibold rounded-xl hover:bg-[#1A4D2E] hover:-translate-y-1 hover:shadow-lg transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed cursor-pointer whitespace-nowrap"
            >
                {move || if status.get().is_submitting() { "Sending..." } else { "Send Message" }}
            </button>

            <Show when=move || status.get() == SubmitStatus::Success>
                <div class="p-4 bg-green-50 border border-green-200 rounded-xl text-green-700 text-center">
                    {SUCCESS_BANNER}
                </div>
            </Show>

            <Show when=move || status.get() == SubmitStatus::Error>
                <div class="p-4 bg-red-50 border border-red-200 rounded-xl text-red-700 text-center">
                    {ERROR_BANNER}
                </div>
            </Show>
        </form>
    }
}

//! Contact section: the validated form and its simulated submission lifecycle

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::contact::{ContactForm, FieldId, SubmitPhase};
use crate::ui::common::{FormField, FormNotice, NoticeKind, TextAreaField};

const INVALID_NOTICE: &str = "Kérjük, javítsa ki a hibákat és próbálja újra!";
const SENDING_NOTICE: &str = "Üzenet küldése...";
const SUCCESS_NOTICE: &str =
    "Üzenetét sikeresen elküldtük! Hamarosan felvesszük Önnel a kapcsolatot.";
const FAILURE_NOTICE: &str =
    "Hiba történt az üzenet küldése során. Kérjük, próbálja újra később.";

/// Contact section with company details and the message form
#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    // Notices carry a sequence number so a stale auto-clear task cannot
    // dismiss a newer notice
    let notice = RwSignal::new(None::<(u64, NoticeKind, String)>);
    let notice_seq = RwSignal::new(0u64);
    // Flipped on teardown so in-flight submissions stop touching state
    let disposed = Arc::new(AtomicBool::new(false));
    {
        let disposed = disposed.clone();
        on_cleanup(move || disposed.store(true, Ordering::Relaxed));
    }

    let show_notice = move |kind: NoticeKind, text: &str| -> u64 {
        let id = notice_seq.get_untracked() + 1;
        notice_seq.set(id);
        notice.set(Some((id, kind, text.to_string())));
        id
    };

    let current_notice = Signal::derive(move || {
        notice.get().map(|(_, kind, text)| (kind, text))
    });

    // Per-field signal and callback bundle for the input components
    let bind = move |id: FieldId| {
        let value = Signal::derive(move || form.with(|f| f.field(id).value.clone()));
        let error =
            Signal::derive(move || form.with(|f| f.field(id).error.map(|e| e.to_string())));
        let on_input = Callback::new(move |v: String| form.update(|f| f.set_value(id, v)));
        let on_blur = Callback::new(move |_: ()| {
            form.update(|f| {
                f.validate_one(id);
            })
        });
        (value, error, on_input, on_blur)
    };

    let (name_value, name_error, name_input, name_blur) = bind(FieldId::Name);
    let (email_value, email_error, email_input, email_blur) = bind(FieldId::Email);
    let (phone_value, phone_error, phone_input, phone_blur) = bind(FieldId::Phone);
    let (message_value, message_error, message_input, message_blur) = bind(FieldId::Message);

    let on_submit = {
        let disposed = disposed.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();

            let submission = form.try_update(|f| f.begin_submit(Utc::now())).flatten();
            let Some(submission) = submission else {
                // Validation failures leave their marks on the fields; the
                // banner points the visitor at them
                if form.with_untracked(|f| f.has_errors()) {
                    show_notice(NoticeKind::Error, INVALID_NOTICE);
                }
                return;
            };

            show_notice(NoticeKind::Info, SENDING_NOTICE);

            #[cfg(not(feature = "ssr"))]
            {
                use gloo_timers::future::TimeoutFuture;
                use leptos::task::spawn_local;

                use crate::core::contact::{SUBMIT_DELAY_MS, SUCCESS_NOTICE_MS, simulate_outcome};
                use crate::core::random::BrowserRandom;

                let disposed = disposed.clone();
                spawn_local(async move {
                    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                    if disposed.load(Ordering::Relaxed) {
                        return;
                    }

                    let mut rng = BrowserRandom;
                    let outcome = simulate_outcome(&mut rng);
                    match &outcome {
                        Ok(()) => {
                            if let Ok(json) = serde_json::to_string(&submission) {
                                leptos::logging::log!("Form submitted: {json}");
                            }
                        }
                        Err(err) => {
                            leptos::logging::error!("Form submission failed: {err}");
                        }
                    }

                    form.update(|f| f.finish_submit(outcome));

                    match form.with_untracked(|f| f.phase()) {
                        SubmitPhase::Succeeded => {
                            let id = show_notice(NoticeKind::Success, SUCCESS_NOTICE);
                            let disposed = disposed.clone();
                            spawn_local(async move {
                                TimeoutFuture::new(SUCCESS_NOTICE_MS).await;
                                if disposed.load(Ordering::Relaxed) {
                                    return;
                                }
                                // Clear only if this notice is still on screen
                                if notice
                                    .get_untracked()
                                    .is_some_and(|(nid, _, _)| nid == id)
                                {
                                    notice.set(None);
                                }
                                form.update(|f| f.acknowledge());
                            });
                        }
                        SubmitPhase::Failed => {
                            show_notice(NoticeKind::Error, FAILURE_NOTICE);
                            // Failure keeps the typed values; the form is
                            // immediately ready for a retry
                            form.update(|f| f.acknowledge());
                        }
                        _ => {}
                    }
                });
            }
            #[cfg(feature = "ssr")]
            {
                let _ = (&disposed, submission);
            }
        }
    };

    view! {
        <section id="contact" class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Lépjen Kapcsolatba Velünk"
                    </h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                        "Kérdése van? Írjon nekünk, és hamarosan jelentkezünk."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-12 items-start">
                    // Contact details
                    <div class="space-y-6">
                        <ContactDetail glyph="📞" label="Telefon" value="+36 30 123 4567" />
                        <ContactDetail glyph="✉️" label="Email" value="info@debretech.hu" />
                        <ContactDetail
                            glyph="📍"
                            label="Helyszín"
                            value="Debrecen, országos lefedettséggel"
                        />
                    </div>

                    // Message form
                    <form class="card p-6 space-y-4" on:submit=on_submit novalidate=true>
                        <FormNotice notice=current_notice />

                        <div class="grid sm:grid-cols-2 gap-4">
                            <FormField
                                label="Név".to_string()
                                name="name"
                                required=true
                                value=name_value
                                on_input=name_input
                                on_blur=name_blur
                                error=name_error
                            />
                            <FormField
                                label="Email".to_string()
                                name="email"
                                required=true
                                input_type="email"
                                value=email_value
                                on_input=email_input
                                on_blur=email_blur
                                error=email_error
                            />
                        </div>
                        <FormField
                            label="Telefonszám".to_string()
                            name="phone"
                            input_type="tel"
                            value=phone_value
                            on_input=phone_input
                            on_blur=phone_blur
                            error=phone_error
                        />
                        <TextAreaField
                            label="Üzenet".to_string()
                            name="message"
                            required=true
                            value=message_value
                            on_input=message_input
                            on_blur=message_blur
                            error=message_error
                        />

                        <button
                            type="submit"
                            class="btn-primary w-full sm:w-auto"
                            disabled=move || form.with(|f| f.is_submitting())
                        >
                            {move || {
                                if form.with(|f| f.is_submitting()) {
                                    "Küldés..."
                                } else {
                                    "Üzenet Küldése"
                                }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

/// One row of the contact details column
#[component]
fn ContactDetail(
    glyph: &'static str,
    label: &'static str,
    value: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center text-xl">
                <span aria-hidden="true">{glyph}</span>
            </div>
            <div>
                <h3 class="font-semibold text-theme-primary">{label}</h3>
                <p class="text-theme-secondary">{value}</p>
            </div>
        </div>
    }
}

//! Contact section: details plus a form posting through the forms relay.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ToastKind {
    Success,
    Error,
}

#[component]
pub fn Contact() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (sending, set_sending) = signal(false);
    // Feedback stays until explicitly dismissed; no auto-dismiss timer.
    let (toast, set_toast) = signal::<Option<(ToastKind, String)>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        set_sending.set(true);
        set_toast.set(None);

        let name_value = name.get_untracked();
        let email_value = email.get_untracked();
        let message_value = message.get_untracked();

        spawn_local(async move {
            match api::send_contact(&name_value, &email_value, &message_value).await {
                Ok(()) => {
                    set_toast.set(Some((
                        ToastKind::Success,
                        "Thank you for reaching out! Your message has been sent successfully."
                            .to_string(),
                    )));
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_message.set(String::new());
                }
                Err(e) => {
                    log::warn!("contact form submission failed: {e}");
                    set_toast.set(Some((
                        ToastKind::Error,
                        "Oops! Something went wrong. Please try again later.".to_string(),
                    )));
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <section id="contact">
            <style>{include_str!("contact.css")}</style>
            <h5>"Get In Touch"</h5>
            <h2>"Contact Me"</h2>

            <div class="container contact__container">
                <div class="contact__options">
                    <article class="contact__option">
                        <h4>"Email"</h4>
                        <h5>"akeeb.0157cse@gmail.com"</h5>
                        <a
                            href="https://mail.google.com/mail/?view=cm&to=akeeb.0157cse@gmail.com"
                            target="_blank"
                        >
                            "Send a Message"
                        </a>
                    </article>
                    <article class="contact__option">
                        <h4>"WhatsApp"</h4>
                        <h5>"+918319638561"</h5>
                        <a href="https://wa.me/918319638561" target="_blank">"Send a Message"</a>
                    </article>
                </div>

                <form on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Your Full Name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Your Email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <textarea
                        rows="7"
                        placeholder="Your Message"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>

            {move || toast.get().map(|(kind, text)| {
                let class = match kind {
                    ToastKind::Success => "contact__toast contact__toast--success",
                    ToastKind::Error => "contact__toast contact__toast--error",
                };
                view! {
                    <div class=class>
                        <span>{text}</span>
                        <button
                            class="contact__toast-close"
                            on:click=move |_| set_toast.set(None)
                        >
                            "x"
                        </button>
                    </div>
                }
            })}
        </section>
    }
}

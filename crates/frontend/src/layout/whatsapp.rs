use crate::app::use_site;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const APPEAR_DELAY_MS: u32 = 1000;

/// Плавающая кнопка WhatsApp, появляется через секунду после загрузки
#[component]
pub fn WhatsAppButton() -> impl IntoView {
    let site = use_site();
    let href = site.config.contact.whatsapp_url.clone();

    let visible = RwSignal::new(false);
    let timer = StoredValue::new_local(Some(Timeout::new(APPEAR_DELAY_MS, move || {
        visible.set(true)
    })));
    on_cleanup(move || timer.dispose());

    view! {
        <a
            class=move || if visible.get() { "whatsapp-float whatsapp-float--visible" } else { "whatsapp-float" }
            href=href
            target="_blank"
            rel="noopener"
        >
            "WhatsApp"
        </a>
    }
}

use crate::app::use_site;
use chrono::{Datelike, Utc};
use contracts::hours::ShopStatus;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let hours = site.config.hours.clone();
    let contact = site.config.contact.clone();

    let status = RwSignal::new(ShopStatus::Checking);

    // Первая проверка при монтировании, дальше раз в `poll_secs`
    let check = {
        let hours = hours.clone();
        move || status.set(hours.status_now())
    };
    Effect::new({
        let check = check.clone();
        move |_| check()
    });
    let poll = StoredValue::new_local(Some(Interval::new(hours.poll_secs.max(1) * 1000, check)));
    on_cleanup(move || poll.dispose());

    let year = Utc::now().year();
    let schedule = format!(
        "Seg a Sáb, das {:02}h às {:02}h",
        hours.open_hour,
        (hours.close_hour + 1) % 24
    );

    view! {
        <footer id="contato" class="site-footer">
            <div class="site-footer__status">
                <span class=move || status.get().css_class()>
                    {move || status.get().label()}
                </span>
                <span class="site-footer__schedule">{schedule}</span>
            </div>

            <div class="site-footer__contact">
                <a href=contact.whatsapp_url.clone() target="_blank" rel="noopener">
                    {contact.whatsapp_label.clone()}
                </a>
                <a href=contact.instagram_url.clone() target="_blank" rel="noopener">
                    "Instagram"
                </a>
                <a href=contact.maps_url.clone() target="_blank" rel="noopener">
                    {contact.address.clone()}
                </a>
                <a href=contact.menu_pdf_url.clone() target="_blank" rel="noopener">
                    "Cardápio em PDF"
                </a>
            </div>

            <p class="site-footer__copyright">{format!("© {} Tapiocaria", year)}</p>
        </footer>
    }
}

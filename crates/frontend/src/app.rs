use crate::layout::{Footer, Header, WhatsAppButton};
use crate::pages::{HomePage, MenuPage, ProductDetail};
use crate::routing::{use_routing, RoutingContext};
use crate::search::SearchContext;
use contracts::catalog::Catalog;
use contracts::config::{load_config, SiteConfig};
use contracts::routing::Page;
use leptos::prelude::*;
use std::sync::Arc;

/// Неизменяемые данные сайта: каталог и конфигурация
#[derive(Clone)]
pub struct SiteData {
    pub catalog: Arc<Catalog>,
    pub config: Arc<SiteConfig>,
}

impl SiteData {
    /// Встроенные меню и конфиг. Ошибка разбора не роняет сайт:
    /// пишем в лог и работаем на значениях по умолчанию.
    pub fn load() -> Self {
        let config = load_config().unwrap_or_else(|err| {
            log::error!("site config: {}", err);
            SiteConfig::default()
        });
        let catalog = Catalog::embedded().unwrap_or_else(|err| {
            log::error!("menu: {}", err);
            Catalog::default()
        });
        log::debug!("catalog loaded: {} item(s)", catalog.len());

        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}

pub fn use_site() -> SiteData {
    use_context::<SiteData>().expect("SiteData context not found")
}

#[component]
pub fn App() -> impl IntoView {
    let site = SiteData::load();

    let routing = RoutingContext::new(site.catalog.clone(), &site.config.navigation);
    routing.init_history_integration();

    let search = SearchContext::new(site.catalog.clone(), site.config.search.debounce_ms);
    // Отложенный поиск не должен всплыть после смены страницы
    routing.on_view_change(move || search.clear());

    provide_context(site);
    provide_context(routing);
    provide_context(search);

    view! {
        <Header />
        <main>
            <CurrentPage />
        </main>
        <Footer />
        <WhatsAppButton />
        <SelectedItem />
    }
}

/// Страница по текущему `Location`. Пересоздаётся только при смене страницы.
#[component]
fn CurrentPage() -> impl IntoView {
    let routing = use_routing();
    let page = Memo::new(move |_| routing.location.with(|location| location.page));

    move || match page.get() {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Category(category) => view! { <MenuPage category=category /> }.into_any(),
    }
}

/// Модальное окно выбранной позиции
#[component]
fn SelectedItem() -> impl IntoView {
    let routing = use_routing();
    let selected = Memo::new(move |_| routing.selected_item());

    move || selected.get().map(|item| view! { <ProductDetail item=item /> })
}

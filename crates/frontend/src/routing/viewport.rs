use crate::shared::timers::{Debouncer, GlooTimerDriver};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{
    window, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

/// Класс подсветки карточки, к которой прокрутили из поиска
pub const HIGHLIGHT_CLASS: &str = "animate-highlight";

/// Прокрутка страницы
pub trait Viewport {
    fn scroll_to_top(&self);

    /// Плавно прокручивает к элементу. `false`, если селектор ничего не нашёл.
    fn scroll_into_view(&self, selector: &str) -> bool;
}

/// Viewport поверх DOM. Держит не больше одной подсветки: новая
/// снимает прежнюю, drop снимает последнюю и отменяет таймер.
pub struct DomViewport {
    highlighted: Rc<RefCell<Option<Element>>>,
    unhighlight: RefCell<Debouncer<GlooTimerDriver>>,
}

impl DomViewport {
    pub fn new(highlight_ms: u32) -> Self {
        Self {
            highlighted: Rc::default(),
            unhighlight: RefCell::new(Debouncer::new(GlooTimerDriver, highlight_ms)),
        }
    }

    fn highlight(&self, element: Element) {
        clear_highlight(&self.highlighted);
        let _ = element.class_list().add_1(HIGHLIGHT_CLASS);
        *self.highlighted.borrow_mut() = Some(element);

        let highlighted = self.highlighted.clone();
        self.unhighlight
            .borrow_mut()
            .call(move || clear_highlight(&highlighted));
    }
}

impl Drop for DomViewport {
    fn drop(&mut self) {
        clear_highlight(&self.highlighted);
    }
}

fn clear_highlight(slot: &RefCell<Option<Element>>) {
    if let Some(element) = slot.borrow_mut().take() {
        let _ = element.class_list().remove_1(HIGHLIGHT_CLASS);
    }
}

fn is_item_anchor(selector: &str) -> bool {
    selector.starts_with("#item-")
}

impl Viewport for DomViewport {
    fn scroll_to_top(&self) {
        let Some(w) = window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&self, selector: &str) -> bool {
        let Some(document) = window().and_then(|w| w.document()) else {
            return false;
        };
        let element = match document.query_selector(selector) {
            Ok(Some(element)) => element,
            Ok(None) => return false,
            Err(err) => {
                log::warn!("bad selector '{}': {:?}", selector, err);
                return false;
            }
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);

        // Карточку товара центрируем и подсвечиваем, секции к верху
        if is_item_anchor(selector) {
            options.set_block(ScrollLogicalPosition::Center);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            self.highlight(element);
        } else {
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        true
    }
}

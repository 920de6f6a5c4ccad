//! Location of the app and its path codec.
//!
//! Paths:
//! ```text
//! /                      -> Home
//! /{category}            -> category page
//! /{category}/{slug}     -> category page with a product opened
//! ```
//! Anything unresolvable degrades to the nearest valid location.

use crate::catalog::{Catalog, CatalogItem, Category, ItemId};

/// Page of the site. The rendering layer matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Category(Category),
}

impl Page {
    pub fn category(&self) -> Option<Category> {
        match self {
            Page::Home => None,
            Page::Category(category) => Some(*category),
        }
    }

    /// Path of the page without a selection
    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Category(category) => format!("/{}", category.segment()),
        }
    }
}

impl From<Category> for Page {
    fn from(category: Category) -> Self {
        Page::Category(category)
    }
}

/// Where the user is: page, opened product and a one-shot scroll target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub page: Page,
    pub selected_item: Option<ItemId>,
    /// In-page selector (`#menu`, `#item-12`); used once for scrolling and
    /// never written to history.
    pub anchor: Option<String>,
}

impl Location {
    pub fn home() -> Self {
        Self::default()
    }

    pub fn on_page(page: Page) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Page of the item's own category with the item selected
    pub fn with_item(item: &CatalogItem) -> Self {
        Self {
            page: Page::Category(item.category),
            selected_item: Some(item.id),
            anchor: None,
        }
    }

    /// Selection is only meaningful on the page of the item's category.
    pub fn is_consistent(&self, catalog: &Catalog) -> bool {
        match (self.page, self.selected_item) {
            (_, None) => true,
            (Page::Home, Some(_)) => false,
            (Page::Category(category), Some(id)) => catalog
                .get(id)
                .is_some_and(|item| item.category == category),
        }
    }

    /// Address-bar path of this location. A selection that does not resolve
    /// in `catalog` is left out.
    pub fn path(&self, catalog: &Catalog) -> String {
        let selected = self
            .selected_item
            .and_then(|id| catalog.get(id))
            .filter(|item| Some(item.category) == self.page.category());
        match selected {
            Some(item) => item_path(item),
            None => self.page.path(),
        }
    }
}

/// `/{category}/{slug}`
pub fn item_path(item: &CatalogItem) -> String {
    format!("/{}/{}", item.category.segment(), item.slug())
}

/// Decodes an address-bar path. Never fails: unknown first segment gives
/// Home, unknown slug gives the bare category page.
pub fn parse_path(path: &str, catalog: &Catalog) -> Location {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut segments = path.split('/').filter(|s| !s.is_empty());

    let Some(category) = segments.next().and_then(Category::from_segment) else {
        return Location::home();
    };

    let selected_item = segments
        .next()
        .and_then(|slug| catalog.find_by_slug(category, slug))
        .map(|item| item.id);

    Location {
        page: Page::Category(category),
        selected_item,
        anchor: None,
    }
}

//! Каталог меню: категории, позиции и плоский список всех позиций.

mod content;
mod slug;

pub use content::{RawMenuDocument, EMBEDDED_MENU};
pub use slug::slugify;

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

pub type ItemId = u32;

/// Категории меню
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Salgadas,
    Doces,
    Bebidas,
}

impl Category {
    /// Сегмент пути (`/doces`, `/salgadas`, `/bebidas`)
    pub fn segment(&self) -> &'static str {
        match self {
            Category::Salgadas => "salgadas",
            Category::Doces => "doces",
            Category::Bebidas => "bebidas",
        }
    }

    /// Заголовок страницы категории
    pub fn title(&self) -> &'static str {
        match self {
            Category::Salgadas => "Tapiocas Salgadas",
            Category::Doces => "Tapiocas Doces",
            Category::Bebidas => "Bebidas e Outros",
        }
    }

    /// Фон страницы категории
    pub fn background_image(&self) -> &'static str {
        match self {
            Category::Salgadas => {
                "https://i.pinimg.com/originals/52/7e/aa/527eaa0f9ced13fb93d73dbd414c8c3f.jpg"
            }
            Category::Doces => {
                "https://www.frimesa.com.br/upload/image/recipe/recipe_05_img2_tapioca-de-doce-de-leite.jpg"
            }
            Category::Bebidas => {
                "https://img.freepik.com/fotos-premium/bebidas-gaseificadas-salpicos-de-agua-cor-fundo-preto-natural_1091270-9168.jpg?semt=ais_hybrid&w=740"
            }
        }
    }

    /// Поисковые слова, которые сразу отдают всю категорию
    pub fn search_tokens(&self) -> &'static [&'static str] {
        match self {
            Category::Salgadas => &["salgada", "salgadas"],
            Category::Doces => &["doce", "doces"],
            Category::Bebidas => &["bebida", "bebidas"],
        }
    }

    /// Все категории в порядке сборки каталога
    pub fn all() -> [Category; 3] {
        [Category::Salgadas, Category::Doces, Category::Bebidas]
    }

    /// Парсинг сегмента пути
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.segment() == segment)
    }

    /// Категория по точному поисковому слову (уже нормализованному)
    pub fn from_search_token(token: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|c| c.search_tokens().contains(&token))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageInfo {
    pub url: String,
    #[serde(default)]
    pub is_main: bool,
}

/// Позиция меню в том виде, в каком она записана в контенте (без категории)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawMenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub images: Vec<ImageInfo>,
    #[serde(default)]
    pub rating: Option<u8>,
}

/// Как карточка вписывает картинку
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFit {
    Cover,
    Contain,
}

impl ImageFit {
    pub fn css_value(&self) -> &'static str {
        match self {
            ImageFit::Cover => "cover",
            ImageFit::Contain => "contain",
        }
    }
}

/// Позиция плоского каталога. Неизменяема после сборки.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub images: Vec<ImageInfo>,
    pub category: Category,
    pub rating: Option<u8>,
}

impl CatalogItem {
    pub fn from_raw(raw: RawMenuItem, category: Category) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            price: raw.price,
            images: raw.images,
            category,
            rating: raw.rating,
        }
    }

    /// Главная картинка; если флаг не стоит ни у одной, берётся первая.
    /// `None` только для позиции без картинок.
    pub fn main_image(&self) -> Option<&ImageInfo> {
        self.images
            .iter()
            .find(|img| img.is_main)
            .or_else(|| self.images.first())
    }

    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// `id` элемента карточки на странице категории
    pub fn dom_id(&self) -> String {
        format!("item-{}", self.id)
    }

    /// Селектор для прокрутки к карточке
    pub fn anchor(&self) -> String {
        format!("#{}", self.dom_id())
    }

    /// Напитки показываются целиком (бутылки и банки), кроме фасованной goma.
    pub fn image_fit(&self) -> ImageFit {
        if self.category == Category::Bebidas && self.name != "Goma de Tapioca 1kg" {
            ImageFit::Contain
        } else {
            ImageFit::Cover
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("menu content is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate item id {id}: '{first}' and '{second}'")]
    DuplicateId {
        id: ItemId,
        first: String,
        second: String,
    },
}

/// Плоский каталог всех категорий, порядок вставки сохраняется.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Собирает каталог из групп; категория присваивается здесь и больше не меняется.
    pub fn from_groups<I>(groups: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (Category, Vec<RawMenuItem>)>,
    {
        let mut items: Vec<CatalogItem> = Vec::new();
        let mut seen: HashMap<ItemId, usize> = HashMap::new();

        for (category, raw_items) in groups {
            for raw in raw_items {
                if let Some(&index) = seen.get(&raw.id) {
                    return Err(CatalogError::DuplicateId {
                        id: raw.id,
                        first: items[index].name.clone(),
                        second: raw.name,
                    });
                }
                seen.insert(raw.id, items.len());
                items.push(CatalogItem::from_raw(raw, category));
            }
        }

        Ok(Self { items })
    }

    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let document: RawMenuDocument = toml::from_str(source)?;
        Self::from_groups(document.into_groups())
    }

    /// Каталог из меню, встроенного в бинарник
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_toml(EMBEDDED_MENU)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &CatalogItem> {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }

    /// Поиск по slug только внутри категории: одинаковые имена в разных
    /// категориях различаются префиксом пути.
    pub fn find_by_slug(&self, category: Category, slug: &str) -> Option<&CatalogItem> {
        self.in_category(category).find(|item| item.slug() == slug)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn raw(id: ItemId, name: &str, description: &str, price: &str) -> RawMenuItem {
        RawMenuItem {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            images: vec![],
            rating: None,
        }
    }

    /// Каталог из примера: одна солёная и одна сладкая тапиока
    pub(crate) fn tapioca_catalog() -> Catalog {
        Catalog::from_groups([
            (
                Category::Salgadas,
                vec![raw(1, "Tapioca de Queijo", "Queijo coalho derretido", "R$ 10,00")],
            ),
            (
                Category::Doces,
                vec![raw(2, "Tapioca de Chocolate", "Chocolate ao leite", "R$ 12,00")],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_category_assigned_on_flatten() {
        let catalog = tapioca_catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().category, Category::Salgadas);
        assert_eq!(catalog.get(2).unwrap().category, Category::Doces);
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::from_groups([
            (Category::Salgadas, vec![raw(7, "Misto", "", "R$ 9,00")]),
            (Category::Bebidas, vec![raw(7, "Suco", "", "R$ 6,00")]),
        ]);
        match result {
            Err(CatalogError::DuplicateId { id, first, second }) => {
                assert_eq!(id, 7);
                assert_eq!(first, "Misto");
                assert_eq!(second, "Suco");
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_main_image_fallback() {
        let mut item = CatalogItem::from_raw(raw(1, "X", "", ""), Category::Doces);
        assert!(item.main_image().is_none());

        item.images = vec![
            ImageInfo { url: "a.jpg".into(), is_main: false },
            ImageInfo { url: "b.jpg".into(), is_main: false },
        ];
        assert_eq!(item.main_image().unwrap().url, "a.jpg");

        item.images[1].is_main = true;
        assert_eq!(item.main_image().unwrap().url, "b.jpg");
    }

    #[test]
    fn test_slug_lookup_scoped_to_category() {
        let catalog = Catalog::from_groups([
            (Category::Salgadas, vec![raw(1, "Especial da Casa", "", "R$ 15,00")]),
            (Category::Doces, vec![raw(2, "Especial da Casa", "", "R$ 14,00")]),
        ])
        .unwrap();

        assert_eq!(
            catalog.find_by_slug(Category::Salgadas, "especial-da-casa").map(|i| i.id),
            Some(1)
        );
        assert_eq!(
            catalog.find_by_slug(Category::Doces, "especial-da-casa").map(|i| i.id),
            Some(2)
        );
        assert!(catalog.find_by_slug(Category::Bebidas, "especial-da-casa").is_none());
    }

    #[test]
    fn test_category_tokens_and_segments() {
        assert_eq!(Category::from_search_token("doce"), Some(Category::Doces));
        assert_eq!(Category::from_search_token("salgadas"), Some(Category::Salgadas));
        assert_eq!(Category::from_search_token("bebida"), Some(Category::Bebidas));
        assert_eq!(Category::from_search_token("tapioca"), None);
        for category in Category::all() {
            assert_eq!(Category::from_segment(category.segment()), Some(category));
        }
        assert_eq!(Category::from_segment("home"), None);
    }

    #[test]
    fn test_image_fit() {
        let drink = CatalogItem::from_raw(raw(1, "Suco de Laranja", "", ""), Category::Bebidas);
        let goma = CatalogItem::from_raw(raw(2, "Goma de Tapioca 1kg", "", ""), Category::Bebidas);
        let sweet = CatalogItem::from_raw(raw(3, "Romeu e Julieta", "", ""), Category::Doces);
        assert_eq!(drink.image_fit(), ImageFit::Contain);
        assert_eq!(goma.image_fit(), ImageFit::Cover);
        assert_eq!(sweet.image_fit(), ImageFit::Cover);
        assert_eq!(drink.anchor(), "#item-1");
    }
}

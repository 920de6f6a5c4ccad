use super::{Category, RawMenuItem};
use serde::Deserialize;

/// Меню, встроенное в бинарник
pub const EMBEDDED_MENU: &str = include_str!("../../content/menu.toml");

/// Документ меню: позиции сгруппированы по категориям
#[derive(Debug, Default, Deserialize)]
pub struct RawMenuDocument {
    #[serde(default)]
    pub salgadas: Vec<RawMenuItem>,
    #[serde(default)]
    pub doces: Vec<RawMenuItem>,
    #[serde(default)]
    pub bebidas: Vec<RawMenuItem>,
}

impl RawMenuDocument {
    /// Группы в порядке сборки каталога: salgadas, doces, bebidas
    pub fn into_groups(self) -> [(Category, Vec<RawMenuItem>); 3] {
        [
            (Category::Salgadas, self.salgadas),
            (Category::Doces, self.doces),
            (Category::Bebidas, self.bebidas),
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, CatalogError, Category};

    #[test]
    fn test_embedded_menu_loads() {
        let catalog = Catalog::embedded().expect("embedded menu must parse");
        assert!(!catalog.is_empty());
        for category in Category::all() {
            assert!(
                catalog.in_category(category).count() > 0,
                "no items in {:?}",
                category
            );
        }
    }

    #[test]
    fn test_embedded_slugs_unique_per_category() {
        let catalog = Catalog::embedded().unwrap();
        for category in Category::all() {
            let mut slugs: Vec<String> = catalog.in_category(category).map(|i| i.slug()).collect();
            let total = slugs.len();
            slugs.sort();
            slugs.dedup();
            assert_eq!(slugs.len(), total, "slug collision in {:?}", category);
        }
    }

    #[test]
    fn test_flatten_order() {
        let source = r#"
            [[bebidas]]
            id = 30
            name = "Suco"
            description = ""
            price = "R$ 6,00"

            [[salgadas]]
            id = 10
            name = "Misto"
            description = ""
            price = "R$ 9,00"

            [[doces]]
            id = 20
            name = "Banana"
            description = ""
            price = "R$ 8,00"
        "#;
        let catalog = Catalog::from_toml(source).unwrap();
        let ids: Vec<_> = catalog.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Catalog::from_toml("[[doces]]\nid = \"x\""),
            Err(CatalogError::Parse(_))
        ));
    }
}

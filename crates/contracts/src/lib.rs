//! Платформенно-независимое ядро сайта тапиокерии: каталог, маршруты, поиск,
//! часы работы и встроенная конфигурация.
//!
//! Крейт не зависит от браузера и полностью тестируется на хосте.

pub mod catalog;
pub mod config;
pub mod hours;
pub mod routing;
pub mod search;

pub use catalog::{Catalog, CatalogError, CatalogItem, Category, ImageFit, ImageInfo, ItemId};
pub use config::{load_config, ConfigError, SiteConfig};
pub use hours::{OpeningHours, ShopStatus};
pub use routing::{Location, Page};

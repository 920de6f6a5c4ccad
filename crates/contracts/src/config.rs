use crate::hours::OpeningHours;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub hours: OpeningHours,
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Quiet window before a query is evaluated
    pub debounce_ms: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NavigationConfig {
    /// Fallback delay of the scroll-to-anchor when the page never reports
    /// that its content is mounted
    pub scroll_fallback_ms: u32,
    /// How long a revealed item card stays highlighted
    pub highlight_ms: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_fallback_ms: 100,
            highlight_ms: 2500,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HeroConfig {
    pub rotate_secs: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub subtitles: Vec<String>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            rotate_secs: 5,
            images: Vec::new(),
            subtitles: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ContactConfig {
    #[serde(default)]
    pub whatsapp_url: String,
    #[serde(default)]
    pub whatsapp_label: String,
    #[serde(default)]
    pub instagram_url: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub maps_url: String,
    #[serde(default)]
    pub menu_pdf_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[search]
debounce_ms = 300

[navigation]
scroll_fallback_ms = 100
highlight_ms = 2500

[hours]
utc_offset_hours = -3
open_hour = 17
close_hour = 23
closed_weekdays = ["Sun"]
poll_secs = 60

[hero]
rotate_secs = 5
images = [
    "https://i.pinimg.com/originals/01/86/6b/01866b9c1a1546c3d82b5d90dfcf2694.jpg",
    "https://cdn.create.vista.com/api/media/small/207936640/stock-photo-tapioca-filled-hazelnut-cream-banana-slices",
    "https://cdn.create.vista.com/api/media/small/207500020/stock-photo-tapioca-filled-hazelnuts-cream-fresh-strawberries",
    "https://img.freepik.com/fotos-premium/tapioca-recheada-com-tapioca-brasileira-de-frango_434193-1156.jpg?semt=ais_hybrid&w=740",
    "https://t3.ftcdn.net/jpg/05/46/01/62/360_F_546016297_G0pTcVLFOb5BkzqyDy7joxASlX3sorgz.jpg",
]
subtitles = [
    "O sabor autêntico da tradição, feito com carinho para você.",
    "A sua tapioca doce e salgada",
    "Gosto inesquecível a cada mordida",
    "Há mais de 20 anos presenteando sabores!",
]

[contact]
whatsapp_url = "https://wa.me/5511981672635"
whatsapp_label = "(11) 98167-2635"
instagram_url = "https://www.instagram.com/delegusty.tapioca"
address = "Estr. de Itapecerica, 7796 - Capao Redondo, São Paulo - SP, 05858-005"
maps_url = "https://www.google.com/maps/search/?api=1&query=Estr.+de+Itapecerica,+7796+-+Capao+Redondo,+S%C3%A3o+Paulo+-+SP,+05858-005"
menu_pdf_url = "https://drive.google.com/file/d/1xHKWC-VQ0GCZFWyXzZ7BccN3y_14EsEV/view?usp=sharing"
"#;

/// Parse a configuration document. Missing sections take their defaults.
pub fn parse_config(source: &str) -> Result<SiteConfig, ConfigError> {
    Ok(toml::from_str(source)?)
}

/// Load the embedded configuration
pub fn load_config() -> Result<SiteConfig, ConfigError> {
    parse_config(DEFAULT_CONFIG)
}

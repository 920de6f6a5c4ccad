pub mod hero;
pub mod home;
pub mod menu;
pub mod product_detail;

pub use home::HomePage;
pub use menu::MenuPage;
pub use product_detail::ProductDetail;

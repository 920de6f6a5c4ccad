pub mod footer;
pub mod header;
pub mod search_box;
pub mod whatsapp;

pub use footer::Footer;
pub use header::Header;
pub use whatsapp::WhatsAppButton;

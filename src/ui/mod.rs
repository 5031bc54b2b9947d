pub mod chat_widget;
pub mod common;
pub mod contact_form;
pub mod markdown;
pub mod nav;
pub mod pages;
pub mod perf;
pub mod reveal;
pub mod scroll;
pub mod theme;

pub use chat_widget::ChatbotWidget;
pub use contact_form::ContactSection;
pub use nav::SiteHeader;
pub use perf::LoadMetrics;
pub use reveal::{RevealScript, RevealStyles};
pub use scroll::ScrollToTopButton;
pub use theme::{provide_theme_context, use_theme_context};

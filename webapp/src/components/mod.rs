pub mod navigation;
pub mod reveal;
pub mod toast;

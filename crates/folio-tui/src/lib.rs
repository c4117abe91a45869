pub mod app;
pub mod assets;
pub mod event;
pub mod input;
pub mod keymap;
pub mod modal;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod themes;
pub mod typewriter;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
pub use themes::load_theme;

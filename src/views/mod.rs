pub mod advice_panel;
pub mod analysis_report;
pub mod camera_panel;
pub mod header;
pub mod history_tracker;
pub mod loading;
pub mod login;
pub mod main_screen;
pub mod promo;
pub mod upgrade_modal;

use iced::{font, Font};

pub use analysis_report::analysis_view;
pub use header::header;
pub use loading::{loading_screen, LOADING_MESSAGE_INTERVAL};
pub use login::login_screen;
pub use main_screen::main_screen;
pub use upgrade_modal::with_upgrade_modal;

pub(crate) const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

use super::BOLD;
use crate::components::surfaces::MUTED;
use crate::message::Message;
use iced::widget::{center, column, text};
use iced::{Alignment, Element};
use std::time::Duration;

pub const LOADING_MESSAGE_INTERVAL: Duration = Duration::from_millis(2500);

const LOADING_MESSAGES: [&str; 4] = [
    "Analizando los detalles de la imagen...",
    "La IA está identificando patrones...",
    "Consultando la base de conocimientos dermatológicos...",
    "Casi listo, generando el informe...",
];

const SPINNER_FRAMES: [&str; 4] = ["●○○", "○●○", "○○●", "○●○"];

fn loading_message(step: usize) -> &'static str {
    LOADING_MESSAGES[step % LOADING_MESSAGES.len()]
}

pub fn loading_screen(step: usize) -> Element<'static, Message> {
    center(
        column![
            text(SPINNER_FRAMES[step % SPINNER_FRAMES.len()]).size(36),
            text("Analizando...").size(22).font(BOLD),
            text(loading_message(step)).color(MUTED),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .into()
}

use super::BOLD;
use crate::components::surfaces::{self, MUTED};
use crate::message::Message;
use crate::model::Event;
use iced::widget::text::Wrapping;
use iced::widget::{button, center, column, container, text};
use iced::{Alignment, Element, Length};

pub fn login_screen() -> Element<'static, Message> {
    let start = button(container(text("Comenzar Análisis").font(BOLD)).center_x(Length::Fill))
        .width(Length::Fill)
        .padding([12, 16])
        .on_press(Event::Login.into());

    let content = column![
        text("DermaIA").size(40).font(BOLD),
        text("Tu asistente dermatológico con IA").size(16),
        text("Sube una foto de tu piel y obtén un análisis orientativo al instante.")
            .size(14)
            .color(MUTED)
            .wrapping(Wrapping::Word),
        start,
        text("Esta es una demostración. No se requiere inicio de sesión real.")
            .size(12)
            .color(MUTED),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    center(
        container(content)
            .padding(32)
            .max_width(440)
            .style(surfaces::card),
    )
    .into()
}

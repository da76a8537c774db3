use super::BOLD;
use crate::components::surfaces;
use crate::message::Message;
use crate::model::Event;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

pub fn disclaimer() -> Element<'static, Message> {
    container(
        column![
            text("Aviso Importante").font(BOLD),
            text(
                "DermaIA proporciona una orientación educativa y no sustituye un diagnóstico \
                 médico profesional. Los resultados son generados por una IA y deben ser \
                 considerados como informativos. Consulte siempre a un dermatólogo para obtener \
                 un diagnóstico y tratamiento precisos."
            )
            .size(14)
            .wrapping(Wrapping::Word),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::Fill)
    .style(surfaces::disclaimer)
    .into()
}

/// Shown to free users below a report.
pub fn upsell() -> Element<'static, Message> {
    container(
        column![
            text("Desbloquea Funciones Premium").size(26).font(BOLD),
            text(
                "Obtén seguimiento de evolución, consejos personalizados y elimina los \
                 anuncios con DermaIA Premium."
            )
            .wrapping(Wrapping::Word),
            button(text("¡Actualizar Ahora!").font(BOLD))
                .padding([10, 24])
                .style(button::secondary)
                .on_press(Event::OpenUpgradeModal.into()),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .width(Length::Fill)
    .style(surfaces::promo)
    .into()
}

pub fn ad_banner() -> Element<'static, Message> {
    container(
        column![
            text("Anuncio").size(13).font(BOLD),
            text("¡Descubre los mejores productos para el cuidado de la piel!"),
        ]
        .spacing(4)
        .align_x(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(surfaces::advert)
    .into()
}

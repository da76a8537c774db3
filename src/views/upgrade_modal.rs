use super::BOLD;
use crate::components::surfaces::{self, MUTED};
use crate::message::Message;
use crate::model::Event;
use iced::widget::{button, center, column, container, mouse_area, opaque, stack, text, Column};
use iced::{Alignment, Element, Length};

const PREMIUM_FEATURES: [(&str, &str); 4] = [
    ("Seguimiento de Evolución", "Compara fotos."),
    ("Consejos Personalizados", "Chat con la IA."),
    ("Recordatorios de Tratamiento", "No olvides tu rutina."),
    ("Sin Anuncios", "Una experiencia sin interrupciones."),
];

/// Lays the upgrade dialog over `base`. Clicking the backdrop closes it.
pub fn with_upgrade_modal<'a>(base: Element<'a, Message>) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(dialog())).style(surfaces::backdrop))
                .on_press(Event::CloseUpgradeModal.into())
        )
    ]
    .into()
}

fn dialog() -> Element<'static, Message> {
    let features = PREMIUM_FEATURES
        .iter()
        .map(|(title, detail)| -> Element<'static, Message> {
            column![text(*title).font(BOLD), text(*detail).size(14).color(MUTED)]
                .spacing(2)
                .into()
        });

    let upgrade_label =
        container(text("Actualizar por $9.99/mes").font(BOLD)).center_x(Length::Fill);
    let upgrade = button(upgrade_label)
        .width(Length::Fill)
        .padding([12, 24])
        .style(button::success)
        .on_press(Event::Upgrade.into());
    let later = button(container(text("Quizás más tarde")).center_x(Length::Fill))
        .width(Length::Fill)
        .style(button::text)
        .on_press(Event::CloseUpgradeModal.into());

    container(
        column![
            text("Obtén DermaIA Premium").size(28).font(BOLD),
            text("Desbloquea todo el potencial de tu asistente dermatológico.").color(MUTED),
            Column::with_children(features).spacing(10),
            upgrade,
            later,
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(32)
    .max_width(460)
    .style(surfaces::card)
    .into()
}

use super::BOLD;
use crate::components::surfaces::{self, MUTED};
use crate::message::Message;
use crate::model::advice::AdviceState;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text, text_input, Column};
use iced::{Element, Length};

pub fn advice_panel(advice: &AdviceState) -> Element<'_, Message> {
    let input = text_input("Ej: ¿Cómo puedo reducir los poros?", &advice.question).padding(10);
    let input = if advice.pending {
        input
    } else {
        input
            .on_input(Message::AdviceQuestionChanged)
            .on_submit(Message::AskAdvice)
    };

    let ask = button(text(if advice.pending { "..." } else { "Preguntar" }))
        .padding([10, 20])
        .style(button::success)
        .on_press_maybe((!advice.pending).then_some(Message::AskAdvice));

    let mut content = Column::new()
        .spacing(12)
        .push(text("Consejos Personalizados").size(22).font(BOLD))
        .push(text("Haz una pregunta sobre el cuidado de la piel a nuestra IA.").color(MUTED))
        .push(row![input, ask].spacing(8));

    if let Some(answer) = &advice.answer {
        content = content.push(
            container(
                column![
                    text("Respuesta de la IA:").font(BOLD),
                    text(answer.as_str()).wrapping(Wrapping::Word),
                ]
                .spacing(4),
            )
            .padding(12)
            .width(Length::Fill)
            .style(surfaces::inset),
        );
    }

    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(surfaces::card)
        .into()
}

use super::BOLD;
use crate::components::surfaces::{self, MUTED};
use crate::message::Message;
use crate::model::AnalysisHistory;
use crate::utils::{finding_summary, previous_analysis_label};
use iced::widget::text::Wrapping;
use iced::widget::{column, container, text, Column};
use iced::{Element, Length};

/// Earlier reports of this session, newest first. The current report is
/// the latest history entry and is not repeated here.
pub fn history_tracker(history: &AnalysisHistory) -> Element<'static, Message> {
    let mut content = Column::new()
        .spacing(12)
        .push(text("Historial de Análisis").size(22).font(BOLD));

    let entries: Vec<Element<'static, Message>> = history
        .previous()
        .map(|(position, report)| {
            container(
                column![
                    text(previous_analysis_label(position)).font(BOLD),
                    text(finding_summary(report)).size(14).color(MUTED),
                ]
                .spacing(4),
            )
            .padding(12)
            .width(Length::Fill)
            .style(surfaces::inset)
            .into()
        })
        .collect();

    if entries.is_empty() {
        content = content.push(
            text(
                "Este es tu primer análisis. Futuros análisis aparecerán aquí para que puedas \
                 comparar tu evolución.",
            )
            .color(MUTED)
            .wrapping(Wrapping::Word),
        );
    } else {
        content = content.push(Column::with_children(entries).spacing(8));
    }

    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(surfaces::card)
        .into()
}

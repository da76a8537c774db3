use super::advice_panel::advice_panel;
use super::history_tracker::history_tracker;
use super::promo::{ad_banner, disclaimer, upsell};
use super::BOLD;
use crate::components::probability_badge;
use crate::components::surfaces::{self, MUTED, WARNING};
use crate::message::Message;
use crate::model::advice::AdviceState;
use crate::model::{AnalysisCondition, Event, Report, Session};
use iced::widget::text::Wrapping;
use iced::widget::{
    button, column, container, horizontal_space, row, scrollable, text, Column,
};
use iced::{Alignment, Element, Length};

pub fn analysis_view<'a>(
    report: &'a Report,
    session: &'a Session,
    advice: &'a AdviceState,
) -> Element<'a, Message> {
    let mut content = Column::new().spacing(24).max_width(860);

    content = content.push(if report.is_empty() {
        no_findings()
    } else {
        findings(report)
    });

    if session.is_premium() {
        content = content
            .push(history_tracker(&session.history))
            .push(advice_panel(advice));
    } else {
        content = content.push(upsell()).push(ad_banner());
    }

    scrollable(container(content).center_x(Length::Fill).padding(24)).into()
}

fn new_analysis_button() -> Element<'static, Message> {
    button(text("Realizar Nuevo Análisis").font(BOLD))
        .padding([12, 24])
        .on_press(Event::NewAnalysis.into())
        .into()
}

fn no_findings() -> Element<'static, Message> {
    container(
        column![
            text("No se Detectaron Afecciones").size(26).font(BOLD).color(WARNING),
            text(
                "La IA no pudo identificar condiciones específicas en la imagen. Intenta con \
                 una foto más clara."
            )
            .color(MUTED)
            .wrapping(Wrapping::Word),
            new_analysis_button(),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(32)
    .width(Length::Fill)
    .style(surfaces::card)
    .into()
}

fn findings(report: &Report) -> Element<'_, Message> {
    let conditions = report.conditions.iter().map(condition_card);

    container(
        column![
            container(text("Resultados del Análisis").size(30).font(BOLD)).center_x(Length::Fill),
            disclaimer(),
            Column::with_children(conditions).spacing(16),
            container(new_analysis_button()).center_x(Length::Fill),
        ]
        .spacing(20),
    )
    .padding(28)
    .width(Length::Fill)
    .style(surfaces::card)
    .into()
}

fn condition_card(condition: &AnalysisCondition) -> Element<'_, Message> {
    let title = row![
        text(condition.name.as_str()).size(22).font(BOLD),
        horizontal_space(),
        probability_badge(condition.probability),
    ]
    .align_y(Alignment::Center)
    .spacing(12);

    container(
        column![
            title,
            text(condition.description.as_str()).wrapping(Wrapping::Word),
            row![
                bullet_list("Tratamientos Sugeridos", &condition.suggested_treatments),
                bullet_list("Posibles Consecuencias", &condition.untreated_consequences),
            ]
            .spacing(24),
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(surfaces::inset)
    .into()
}

fn bullet_list<'a>(heading: &'static str, items: &'a [String]) -> Element<'a, Message> {
    let items = items
        .iter()
        .map(|item| -> Element<'a, Message> {
            text(format!("• {item}")).size(14).wrapping(Wrapping::Word).into()
        });

    column![
        text(heading).size(17).font(BOLD),
        Column::with_children(items).spacing(6)
    ]
    .spacing(8)
    .width(Length::FillPortion(1))
    .into()
}

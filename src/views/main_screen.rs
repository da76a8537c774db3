use super::camera_panel::camera_panel;
use super::BOLD;
use crate::components::surfaces::{self, MUTED};
use crate::message::Message;
use crate::model::{CaptureMode, Draft, Event, ImagePayload, Notice};
use iced::widget::image::Handle;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, scrollable, text, text_input, Image};
use iced::{Alignment, Element, Length};

const SYMPTOMS_PLACEHOLDER: &str =
    "Describe tus síntomas (opcional): picor, dolor, desde cuándo...";

pub fn main_screen<'a>(draft: &'a Draft, preview: Option<&'a Handle>) -> Element<'a, Message> {
    let body = match (&draft.capture, &draft.image) {
        (CaptureMode::Open { facing, error }, _) => {
            camera_panel(*facing, error.as_deref(), preview)
        }
        (CaptureMode::Closed, None) => source_picker(),
        (CaptureMode::Closed, Some(image)) => selected_image(image, &draft.symptoms),
    };

    let mut content = column![body].spacing(16).max_width(720);
    if let Some(notice) = &draft.notice {
        content = content.push(notice_banner(notice));
    }

    scrollable(
        container(container(content).padding(28).style(surfaces::card))
            .center_x(Length::Fill)
            .padding(24),
    )
    .into()
}

fn source_picker() -> Element<'static, Message> {
    let upload = button(container(text("Subir Imagen").font(BOLD)).center_x(Length::Fill))
        .width(Length::FillPortion(1))
        .padding([16, 24])
        .style(button::secondary)
        .on_press(Message::PickImage);
    let camera = button(container(text("Tomar Foto").font(BOLD)).center_x(Length::Fill))
        .width(Length::FillPortion(1))
        .padding([16, 24])
        .on_press(Event::OpenCamera.into());

    column![
        text("Comienza tu Análisis").size(26).font(BOLD),
        text("Elige una opción para proporcionar una imagen de tu piel.").color(MUTED),
        row![upload, camera].spacing(16),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

fn selected_image<'a>(image: &'a ImagePayload, symptoms: &'a str) -> Element<'a, Message> {
    let preview = Image::new(image.preview.clone()).height(Length::Fixed(320.0));
    let clear = button(text("Quitar imagen").size(14))
        .style(button::danger)
        .on_press(Event::ClearImage.into());

    let symptoms = text_input(SYMPTOMS_PLACEHOLDER, symptoms)
        .on_input(|value| Event::SymptomsChanged(value).into())
        .on_submit(Event::SubmitAnalysis.into())
        .padding(10);

    let analyze_label =
        container(text("Analizar Ahora").size(18).font(BOLD)).center_x(Length::Fill);
    let analyze = button(analyze_label)
        .width(Length::Fill)
        .padding([12, 24])
        .style(button::success)
        .on_press(Event::SubmitAnalysis.into());

    column![
        text("Imagen Seleccionada").size(26).font(BOLD),
        preview,
        clear,
        symptoms,
        analyze,
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .into()
}

fn notice_banner(notice: &Notice) -> Element<'_, Message> {
    container(
        column![
            text(notice.title).font(BOLD),
            text(notice.message.as_str()).wrapping(Wrapping::Word),
        ]
        .spacing(4),
    )
    .padding(12)
    .width(Length::Fill)
    .style(surfaces::notice)
    .into()
}

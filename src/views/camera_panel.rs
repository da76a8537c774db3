use super::BOLD;
use crate::camera::Facing;
use crate::components::facing_toggle;
use crate::components::surfaces::{self, DANGER};
use crate::message::Message;
use crate::model::Event;
use iced::widget::image::Handle;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text, Image};
use iced::{Alignment, Element, Length};

const VIEWFINDER_HEIGHT: f32 = 320.0;

/// Live capture controls. With `error` set the stream is not running and
/// only retry and back are offered.
pub fn camera_panel<'a>(
    facing: Facing,
    error: Option<&'a str>,
    preview: Option<&'a Handle>,
) -> Element<'a, Message> {
    if let Some(error) = error {
        return column![
            text(error).color(DANGER).font(BOLD).wrapping(Wrapping::Word),
            button("Probar otra cámara").on_press(Event::SwitchFacing.into()),
            button("Volver")
                .style(button::secondary)
                .on_press(Event::CloseCamera.into()),
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .into();
    }

    let frame: Element<'a, Message> = match preview {
        Some(handle) => Image::new(handle.clone())
            .height(Length::Fixed(VIEWFINDER_HEIGHT))
            .into(),
        None => text(format!("Iniciando cámara {}...", facing.describe())).into(),
    };
    let viewfinder = container(frame)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(VIEWFINDER_HEIGHT))
        .style(surfaces::inset);

    let controls = row![
        button("Cancelar")
            .style(button::secondary)
            .on_press(Event::CloseCamera.into()),
        button(text("Tomar foto").font(BOLD))
            .padding([10, 24])
            .on_press(Message::CaptureFrame),
    ]
    .spacing(16);

    column![viewfinder, facing_toggle(facing), controls]
        .spacing(16)
        .align_x(Alignment::Center)
        .into()
}

use crate::camera::Facing;
use crate::message::Message;
use crate::model::Event;
use iced::border::{Border, Radius};
use iced::widget::button::{self, Button, Status};
use iced::widget::text::Wrapping;
use iced::widget::{container, row, text, Container};
use iced::{Alignment, Background, Color, Length, Shadow, Theme};

/// Rear/front camera switch. Pressing the inactive side swaps the stream.
pub fn facing_toggle(current: Facing) -> Container<'static, Message> {
    let toggle_row = row![
        segment("Trasera", Facing::Environment, current, Side::Left).width(Length::FillPortion(1)),
        segment("Frontal", Facing::User, current, Side::Right).width(Length::FillPortion(1)),
    ];

    container(toggle_row)
        .padding(3)
        .width(Length::Fixed(260.0))
        .style(track_style)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

fn segment(
    label: &'static str,
    facing: Facing,
    current: Facing,
    side: Side,
) -> Button<'static, Message> {
    let is_active = facing == current;
    let content = container(text(label).size(14).wrapping(Wrapping::None))
        .width(Length::Fill)
        .height(Length::Fixed(32.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center);

    iced::widget::button(content)
        .padding(0)
        .on_press_maybe((!is_active).then_some(Message::Session(Event::SwitchFacing)))
        .style(move |theme, status| segment_style(theme, status, is_active, side))
}

fn track_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Radius::new(999.0),
        },
        ..Default::default()
    }
}

fn segment_style(theme: &Theme, status: Status, is_active: bool, side: Side) -> button::Style {
    let palette = theme.extended_palette();

    let (background, text_color) = if is_active {
        (palette.primary.strong.color, palette.primary.strong.text)
    } else {
        let base = palette.background.base.color;
        let hovered = matches!(status, Status::Hovered | Status::Pressed);
        (base.scale_alpha(if hovered { 0.9 } else { 0.5 }), palette.background.base.text)
    };

    let (outer, inner) = (999.0, 10.0);
    let radius = match side {
        Side::Left => Radius {
            top_left: outer,
            top_right: inner,
            bottom_right: inner,
            bottom_left: outer,
        },
        Side::Right => Radius {
            top_left: inner,
            top_right: outer,
            bottom_right: outer,
            bottom_left: inner,
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius,
        },
        shadow: Shadow::default(),
    }
}

use crate::message::Message;
use crate::model::Probability;
use crate::utils::probability_caption;
use iced::border::{Border, Radius};
use iced::widget::{container, text, Container};
use iced::{Background, Color, Theme};

pub fn probability_badge(probability: Probability) -> Container<'static, Message> {
    container(text(probability_caption(probability)).size(13))
        .padding([4, 12])
        .style(move |theme| badge_style(theme, probability))
}

fn badge_colors(probability: Probability) -> (Color, Color) {
    match probability {
        Probability::High => (
            Color::from_rgb8(0xFE, 0xE2, 0xE2),
            Color::from_rgb8(0x99, 0x1B, 0x1B),
        ),
        Probability::Medium => (
            Color::from_rgb8(0xFE, 0xF9, 0xC3),
            Color::from_rgb8(0x85, 0x4D, 0x0E),
        ),
        Probability::Low => (
            Color::from_rgb8(0xDC, 0xFC, 0xE7),
            Color::from_rgb8(0x16, 0x65, 0x34),
        ),
    }
}

fn badge_style(_theme: &Theme, probability: Probability) -> container::Style {
    let (background, foreground) = badge_colors(probability);

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(foreground),
        border: Border {
            color: foreground.scale_alpha(0.3),
            width: 1.0,
            radius: Radius::new(999.0),
        },
        ..Default::default()
    }
}

use iced::border::{Border, Radius};
use iced::widget::container;
use iced::{Background, Color, Shadow, Theme, Vector};

pub const DANGER: Color = Color::from_rgb(0.86, 0.15, 0.15);
pub const WARNING: Color = Color::from_rgb(0.92, 0.70, 0.03);
pub const MUTED: Color = Color::from_rgb(0.42, 0.45, 0.50);

/// White rounded panel used for every screen section.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: Radius::new(16.0),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Nested block inside a card, such as one condition of a report.
pub fn inset(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: Radius::new(12.0),
        },
        ..Default::default()
    }
}

pub fn disclaimer(_theme: &Theme) -> container::Style {
    tinted(Color::from_rgb8(0xFE, 0xF9, 0xC3), Color::from_rgb8(0x85, 0x4D, 0x0E))
}

pub fn notice(_theme: &Theme) -> container::Style {
    tinted(Color::from_rgb8(0xFE, 0xE2, 0xE2), Color::from_rgb8(0x99, 0x1B, 0x1B))
}

pub fn promo(_theme: &Theme) -> container::Style {
    tinted(Color::from_rgb8(0x4F, 0x46, 0xE5), Color::WHITE)
}

pub fn advert(_theme: &Theme) -> container::Style {
    tinted(Color::from_rgb8(0xF3, 0xF4, 0xF6), Color::from_rgb8(0x4B, 0x55, 0x63))
}

pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.6))),
        ..Default::default()
    }
}

fn tinted(background: Color, text: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Radius::new(12.0),
        },
        ..Default::default()
    }
}

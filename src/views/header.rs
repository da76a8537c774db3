use super::BOLD;
use crate::components::surfaces;
use crate::message::Message;
use crate::model::{Event, User};
use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

pub fn header(user: User) -> Element<'static, Message> {
    let status: Element<'static, Message> = if user.is_premium {
        container(text("Premium").size(14).font(BOLD))
            .padding([4, 12])
            .style(surfaces::promo)
            .into()
    } else {
        button(text("Upgrade").size(14))
            .style(button::success)
            .on_press(Event::OpenUpgradeModal.into())
            .into()
    };

    let logout = button(text("Cerrar sesión").size(14))
        .style(button::text)
        .on_press(Event::Logout.into());

    container(
        row![
            text("DermaIA").size(22).font(BOLD),
            horizontal_space(),
            status,
            logout
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding([12, 24])
    .width(Length::Fill)
    .style(surfaces::card)
    .into()
}

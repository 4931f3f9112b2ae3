// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The playground is a single screen: trigger controls on a base layer
//! and the toast overlay stacked on top.

use super::{App, Message};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ThemeMode;
use crate::ui::Toast;
use iced::widget::{button, pick_list, text, Button, Column, Container, Row, Space, Stack};
use iced::{alignment, Element, Length};

/// Renders the playground view.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let header = text("IcedToast playground").size(typography::TITLE_MD);
    let hint = text("Trigger toasts and watch the manager enforce capacity and timers.")
        .size(typography::BODY_SM);

    let severity_row = Row::new()
        .spacing(spacing::XS)
        .push(trigger_button("Info", Message::ShowInfo))
        .push(trigger_button("Success", Message::ShowSuccess))
        .push(trigger_button("Warning", Message::ShowWarning))
        .push(trigger_button("Error", Message::ShowError));

    let control_row = Row::new()
        .spacing(spacing::XS)
        .push(trigger_button("Persistent", Message::ShowPersistent))
        .push(trigger_button("Clear all", Message::ClearAll));

    let theme_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(text("Theme").size(typography::BODY))
        .push(pick_list(
            ThemeMode::ALL,
            Some(app.theme_mode),
            Message::ThemeSelected,
        ));

    let status = text(format!(
        "{} visible, {} diagnostic events",
        app.notifications.visible_count(),
        app.diagnostics.len()
    ))
    .size(typography::CAPTION);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(hint)
        .push(severity_row)
        .push(control_row)
        .push(theme_row)
        .push(Space::new().height(Length::Fill))
        .push(status);

    let base = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG);

    let overlay = Toast::view_overlay(&app.notifications).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(overlay)
        .into()
}

fn trigger_button(label: &'static str, message: Message) -> Button<'static, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
}

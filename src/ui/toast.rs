// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents and optional dismiss buttons.
//! The widget is a pure observer: it renders the manager's visible
//! collection and emits [`Message::Dismiss`] when a close affordance is
//! pressed; all mutation happens back in the manager.

use crate::notifications::{Manager, Message, Notification, Severity};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        // Severity glyph in a fixed-width column so text lines up across
        // severities.
        let glyph = Text::new(Self::severity_glyph(severity))
            .size(typography::BODY)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            })
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });
        let glyph_widget = Container::new(glyph)
            .width(Length::Fixed(sizing::GLYPH_WIDTH))
            .align_x(alignment::Horizontal::Center);

        // Title and message rows; either may be absent.
        let mut text_column = Column::new().spacing(spacing::XXS);
        if let Some(title) = notification.title() {
            text_column = text_column.push(
                Text::new(title)
                    .size(typography::BODY)
                    .font(Font {
                        weight: iced::font::Weight::Bold,
                        ..Font::DEFAULT
                    })
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }
        if let Some(message) = notification.message() {
            text_column = text_column.push(
                Text::new(message)
                    .size(typography::BODY_SM)
                    .style(|theme: &Theme| text::Style {
                        color: Some(Color {
                            a: opacity::OVERLAY_STRONG,
                            ..theme.palette().text
                        }),
                    }),
            );
        }

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph_widget).padding(spacing::XXS))
            .push(
                Container::new(text_column)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if notification.dismissible() {
            let dismiss_button = button(Text::new("\u{2715}").size(typography::BODY_SM))
                .on_press(Message::Dismiss(notification.id()))
                .padding(spacing::XXS)
                .style(dismiss_button_style);
            content = content.push(dismiss_button);
        }

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically
    /// with the newest at the bottom.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> =
            manager.visible().map(Self::view).collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            // Position in bottom-right with padding
            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }

    /// Returns the glyph for the severity level.
    fn severity_glyph(severity: Severity) -> &'static str {
        match severity {
            Severity::Info => "i",
            Severity::Success => "\u{2713}",
            Severity::Warning => "!",
            Severity::Error => "\u{2715}",
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

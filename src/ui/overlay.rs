// SPDX-License-Identifier: MPL-2.0
//! Banner overlay view.
//!
//! Draws every banner attached to a host surface at the frame and opacity
//! it presents at a given instant. Layer the returned element above the
//! application content with an iced `Stack` and redraw on every frame
//! while [`is_animating`] returns true.
//!
//! Presses on a card produce [`Message::Pressed`]; hand the banner to
//! [`Coordinator::activate`] to run its tap behavior.

use crate::banner::Banner;
use crate::coordinator::Coordinator;
use crate::domain::banner::{Category, SurfaceId};
use crate::surface::HostSurface;
use crate::ui::design_tokens::{border, palette, radius, shadow, spacing, typography};
use iced::widget::{container, mouse_area, text, Column, Container, Stack, Text};
use iced::{Color, Element, Length, Padding, Rectangle, Theme};
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Pressed(Banner),
}

/// Renders the banners of `surface` as they appear at `now`.
pub fn view<'a>(coordinator: &Coordinator, surface: SurfaceId, now: Instant) -> Element<'a, Message> {
    let children = coordinator
        .surface(surface)
        .map(|host| host.children())
        .unwrap_or_default();

    let cards: Vec<Element<'a, Message>> = children
        .into_iter()
        .filter_map(|banner| card(banner, now))
        .collect();

    Stack::with_children(cards)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Returns true while any banner of `surface` is attached and may move.
#[must_use]
pub fn is_animating(coordinator: &Coordinator, surface: SurfaceId) -> bool {
    coordinator
        .surface(surface)
        .is_some_and(|host| !host.children().is_empty())
}

fn card<'a>(banner: Banner, now: Instant) -> Option<Element<'a, Message>> {
    let (frame, opacity) = banner.presented(now);
    if opacity <= 0.0 || frame.width <= 0.0 || frame.height <= 0.0 {
        return None;
    }

    let accent = accent_color(banner.category());
    let title = Text::new(banner.title().to_owned())
        .size(typography::BODY_LG)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().text, opacity)),
        });
    let message = Text::new(banner.message().to_owned())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().text, opacity)),
        });

    let content = Container::new(Column::new().spacing(spacing::XXS).push(title).push(message))
        .width(Length::Fixed(frame.width))
        .height(Length::Fixed(frame.height))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent, opacity));

    let pressable = mouse_area(content).on_press(Message::Pressed(banner));

    Some(
        Container::new(pressable)
            .padding(placement(frame))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    )
}

/// Offsets a card to its frame. Frames partly outside the surface are
/// pinned to its edge.
fn placement(frame: Rectangle) -> Padding {
    Padding {
        top: frame.y.max(0.0),
        right: 0.0,
        bottom: 0.0,
        left: frame.x.max(0.0),
    }
}

/// Accent color of a banner category.
#[must_use]
pub fn accent_color(category: Option<Category>) -> Color {
    match category.unwrap_or_default() {
        Category::Info => palette::INFO_500,
        Category::Success => palette::SUCCESS_500,
        Category::Warning => palette::WARNING_500,
        Category::Error => palette::ERROR_500,
    }
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Style function for a banner card.
fn card_style(theme: &Theme, accent: Color, opacity: f32) -> container::Style {
    let background = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(faded(background, opacity))),
        border: iced::Border {
            color: faded(accent, opacity),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, opacity),
            ..shadow::MD
        },
        text_color: Some(faded(theme.palette().text, opacity)),
        ..Default::default()
    }
}

// SPDX-License-Identifier: GPL-3.0-only

use iced::widget::{button, row, text};
use iced::{Alignment, Element, Length};

use crate::styling::{GLOBAL_BUTTON_HEIGHT, GLOBAL_SPACING, TEXT_SIZE};

/// Previous and Next buttons for a paginated list.
///
/// The control keeps no state and does no validation, it just emits the
/// messages it was built with. Page bounds are the caller's business.
#[derive(Debug, Clone)]
pub struct PaginationControl<Message> {
    on_previous: Message,
    on_next: Message,
    previous_label: String,
    next_label: String,
    width: Length,
}

impl<Message> PaginationControl<Message> {
    pub fn new(on_previous: Message, on_next: Message) -> Self {
        Self {
            on_previous,
            on_next,
            previous_label: String::from("Previous"),
            next_label: String::from("Next"),
            width: Length::Shrink,
        }
    }

    pub fn previous_label(mut self, label: impl Into<String>) -> Self {
        self.previous_label = label.into();
        self
    }

    pub fn next_label(mut self, label: impl Into<String>) -> Self {
        self.next_label = label.into();
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn on_previous(&self) -> &Message {
        &self.on_previous
    }

    pub fn on_next(&self) -> &Message {
        &self.on_next
    }

    /// (previous, next) button labels
    pub fn labels(&self) -> (&str, &str) {
        (&self.previous_label, &self.next_label)
    }
}

impl<'a, Message: Clone + 'a> From<PaginationControl<Message>> for Element<'a, Message> {
    fn from(control: PaginationControl<Message>) -> Self {
        let previous_button = button(
            text(control.previous_label)
                .size(TEXT_SIZE)
                .center()
                .width(Length::Fill)
                .height(GLOBAL_BUTTON_HEIGHT),
        )
        .on_press(control.on_previous);

        let next_button = button(
            text(control.next_label)
                .size(TEXT_SIZE)
                .center()
                .width(Length::Fill)
                .height(GLOBAL_BUTTON_HEIGHT),
        )
        .on_press(control.on_next);

        row![previous_button, next_button]
            .width(control.width)
            .spacing(GLOBAL_SPACING)
            .align_y(Alignment::Center)
            .into()
    }
}

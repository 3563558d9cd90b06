// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use iced::widget::{Column, column, container, scrollable, text};
use iced::{Alignment, Element, Font, Length, Task};

use photopager_core::models::photo::Photo;
use photopager_core::{Config, PicsumClient};
use photopager_utils::pagination::*;
use photopager_utils::styling::{CONTENT_WIDTH, GLOBAL_SPACING, TEXT_SIZE, TITLE_TEXT_SIZE};

use crate::fl;

pub struct Photos {
    pagination: Paginated<Photo>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Try to go left or right a page
    PaginationAction(PaginationAction),
    /// Callback after a page request settles, successfully or not
    PageFetched(Fetched<Photo>),
}

pub enum Action {
    None,
    Run(Task<Message>),
}

impl Photos {
    pub fn new(client: &Arc<PicsumClient>, config: &Config) -> (Self, Task<Message>) {
        let client = client.clone();
        let (pagination, pending) = Paginated::new(
            move |page| Photo::get_page(client.clone(), page),
            config.initial_page,
            config.show_controls,
        );

        (Self { pagination }, fetch(pending))
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::PaginationAction(pagination_action) => {
                match self.pagination.update(pagination_action) {
                    Some(pending) => Action::Run(fetch(pending)),
                    None => Action::None,
                }
            }
            Message::PageFetched(fetched) => {
                let page = fetched.ticket().page();
                if !self.pagination.resolve(fetched) {
                    tracing::debug!(page, "ignoring page superseded by a newer request");
                }
                Action::None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        if self.pagination.loading() {
            return container(text(fl!("loading")).size(TITLE_TEXT_SIZE))
                .center(Length::Fill)
                .into();
        }

        // Navigating away is the only way out of an error
        if let Some(error) = self.pagination.error() {
            let content = column![
                text(fl!("fetch-failed")).size(TITLE_TEXT_SIZE),
                text(error).size(TEXT_SIZE)
            ]
            .push_maybe(self.controls())
            .spacing(GLOBAL_SPACING)
            .width(CONTENT_WIDTH)
            .align_x(Alignment::Center);

            return container(content).center(Length::Fill).into();
        }

        let listing = serde_json::to_string_pretty(self.pagination.data())
            .unwrap_or_else(|err| err.to_string());

        let content = Column::new()
            .push(text(fl!("page", page = self.pagination.page())).size(TITLE_TEXT_SIZE))
            .push(
                scrollable(text(listing).font(Font::MONOSPACE).size(TEXT_SIZE))
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push_maybe(self.controls())
            .spacing(GLOBAL_SPACING)
            .width(CONTENT_WIDTH)
            .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .padding(50.)
            .into()
    }

    fn controls(&self) -> Option<Element<'_, Message>> {
        self.pagination
            .control(Message::PaginationAction)
            .map(|control| {
                control
                    .previous_label(fl!("previous"))
                    .next_label(fl!("next"))
                    .width(CONTENT_WIDTH)
                    .into()
            })
    }
}

fn fetch(pending: PendingFetch<Photo>) -> Task<Message> {
    Task::perform(pending.run(), Message::PageFetched)
}

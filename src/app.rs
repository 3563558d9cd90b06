// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use iced::widget::{center, column, text};
use iced::{Alignment, Element, Task};
use photopager_core::{Config, PicsumClient};
use photopager_utils::styling::{GLOBAL_SPACING, TEXT_SIZE, TITLE_TEXT_SIZE};

use crate::fl;
use crate::photopager::screen::{self, Screen, photos};

pub struct PhotoPager {
    state: State,
}

enum State {
    Loading,
    Failed(String),
    Ready { screen: Screen },
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Callback after reading the configuration and building the API client
    Booted(Result<(Arc<PicsumClient>, Config), anywho::Error>),

    Photos(photos::Message),
}

impl PhotoPager {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                state: State::Loading,
            },
            Task::perform(boot(), Message::Booted),
        )
    }

    pub fn title(&self) -> String {
        fl!("app-title")
    }

    pub fn theme(&self) -> iced::Theme {
        iced::Theme::GruvboxLight
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.state {
            State::Loading => center(text(fl!("loading")).size(TITLE_TEXT_SIZE)).into(),
            State::Failed(err) => center(
                column![
                    text(fl!("startup-failed")).size(TITLE_TEXT_SIZE),
                    text(err).size(TEXT_SIZE)
                ]
                .spacing(GLOBAL_SPACING)
                .align_x(Alignment::Center),
            )
            .into(),
            State::Ready { screen } => match screen {
                Screen::Photos(photos) => photos.view().map(Message::Photos),
            },
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Booted(res) => match res {
                Ok((client, config)) => {
                    tracing::info!(
                        base_url = %config.base_url,
                        page_limit = config.page_limit,
                        "photo pager ready"
                    );

                    let (photos, task) = screen::Photos::new(&client, &config);
                    self.state = State::Ready {
                        screen: Screen::Photos(photos),
                    };
                    task.map(Message::Photos)
                }
                Err(err) => {
                    tracing::error!("startup failed: {err}");
                    self.state = State::Failed(err.to_string());
                    Task::none()
                }
            },

            Message::Photos(message) => {
                let State::Ready { screen } = &mut self.state else {
                    return Task::none();
                };

                match screen {
                    Screen::Photos(photos) => match photos.update(message) {
                        photos::Action::None => Task::none(),
                        photos::Action::Run(task) => task.map(Message::Photos),
                    },
                }
            }
        }
    }
}

async fn boot() -> Result<(Arc<PicsumClient>, Config), anywho::Error> {
    let config = Config::from_env()?;
    let client = PicsumClient::new(&config)?;

    Ok((Arc::new(client), config))
}

// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use iced::futures::future::BoxFuture;

mod control;

pub use control::PaginationControl;

/// Identifies a pagination action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    Back,
    Forward,
}

/// Where the latest fetch stands. Loading and a failure can never coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Status {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// Every way the fetch lifecycle can change a [`PaginationState`]
#[derive(Debug)]
enum Transition<T> {
    Loading,
    Success(Vec<T>),
    Failure(String),
}

/// Holds the pagination state (generic, for various entities)
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState<T> {
    data: Vec<T>,
    status: Status,
    page: u32,
}

impl<T> PaginationState<T> {
    fn new(page: u32) -> Self {
        Self {
            data: Vec::new(),
            status: Status::Idle,
            page: page.max(1),
        }
    }

    /// Items of the last accepted fetch, in arrival order
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn loading(&self) -> bool {
        matches!(self.status, Status::Loading)
    }

    /// Message of the last fetch, if it failed
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Currently requested page, always >= 1
    pub fn page(&self) -> u32 {
        self.page
    }

    fn reduce(&mut self, transition: Transition<T>) {
        match transition {
            Transition::Loading => self.status = Status::Loading,
            Transition::Success(data) => {
                self.data = data;
                self.status = Status::Idle;
            }
            Transition::Failure(message) => self.status = Status::Failed(message),
        }
    }
}

/// Tags a fetch with the request that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    sequence: u64,
    page: u32,
}

impl FetchTicket {
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// A fetch that has been issued but not run yet.
///
/// The host runs it (e.g. through `Task::perform`) and hands the [`Fetched`]
/// outcome back to [`Paginated::resolve`].
pub struct PendingFetch<T> {
    ticket: FetchTicket,
    future: BoxFuture<'static, Result<Vec<T>, String>>,
}

impl<T> PendingFetch<T> {
    pub fn ticket(&self) -> FetchTicket {
        self.ticket
    }

    pub async fn run(self) -> Fetched<T> {
        let result = self.future.await;

        Fetched {
            ticket: self.ticket,
            result,
        }
    }
}

impl<T> fmt::Debug for PendingFetch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingFetch")
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

/// Outcome of a [`PendingFetch`]
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    ticket: FetchTicket,
    result: Result<Vec<T>, String>,
}

impl<T> Fetched<T> {
    pub fn ticket(&self) -> FetchTicket {
        self.ticket
    }
}

type FetchFn<T> = Arc<dyn Fn(u32) -> BoxFuture<'static, Result<Vec<T>, String>> + Send + Sync>;

/// Keeps one page of remote data in sync with the requested page number.
///
/// Every page change issues exactly one fetch through the callback given on
/// creation. Only the outcome of the most recently issued fetch is applied;
/// older outcomes are dropped so the view always reflects the latest page.
pub struct Paginated<T> {
    state: PaginationState<T>,
    fetch: FetchFn<T>,
    show_controls: bool,
    sequence: u64,
    in_flight: Option<FetchTicket>,
}

impl<T: Send + 'static> Paginated<T> {
    /// Creates the controller and the fetch for `initial_page` (clamped to 1).
    pub fn new<F, Fut, E>(fetch: F, initial_page: u32, show_controls: bool) -> (Self, PendingFetch<T>)
    where
        F: Fn(u32) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<T>, E>> + Send + 'static,
        E: fmt::Display + 'static,
    {
        if initial_page == 0 {
            tracing::warn!("initial page 0 requested, starting at page 1");
        }

        let fetch: FetchFn<T> =
            Arc::new(move |page| -> BoxFuture<'static, Result<Vec<T>, String>> {
                let request = fetch(page);
                Box::pin(async move { request.await.map_err(|err| err.to_string()) })
            });

        let mut paginated = Self {
            state: PaginationState::new(initial_page),
            fetch,
            show_controls,
            sequence: 0,
            in_flight: None,
        };
        let pending = paginated.issue();

        (paginated, pending)
    }

    /// Goes to the following page. There is no bound on the data; the page
    /// number saturates at `u32::MAX`, where it refetches the same page.
    pub fn next(&mut self) -> PendingFetch<T> {
        self.state.page = self.state.page.saturating_add(1);
        self.issue()
    }

    /// Goes to the preceding page, does nothing on page 1
    pub fn previous(&mut self) -> Option<PendingFetch<T>> {
        if self.state.page > 1 {
            self.state.page -= 1;
            Some(self.issue())
        } else {
            None
        }
    }

    pub fn update(&mut self, action: PaginationAction) -> Option<PendingFetch<T>> {
        match action {
            PaginationAction::Back => self.previous(),
            PaginationAction::Forward => Some(self.next()),
        }
    }

    /// Applies a fetch outcome. Returns false if it was stale and got dropped.
    pub fn resolve(&mut self, fetched: Fetched<T>) -> bool {
        if self.in_flight != Some(fetched.ticket) {
            tracing::debug!(
                page = fetched.ticket.page,
                sequence = fetched.ticket.sequence,
                "dropping stale page"
            );
            return false;
        }
        self.in_flight = None;

        match fetched.result {
            Ok(data) => {
                tracing::debug!(page = fetched.ticket.page, items = data.len(), "page loaded");
                self.state.reduce(Transition::Success(data));
            }
            Err(message) => {
                tracing::warn!(page = fetched.ticket.page, "page fetch failed: {message}");
                self.state.reduce(Transition::Failure(message));
            }
        }

        true
    }

    fn issue(&mut self) -> PendingFetch<T> {
        self.sequence += 1;
        let ticket = FetchTicket {
            sequence: self.sequence,
            page: self.state.page,
        };

        self.state.reduce(Transition::Loading);
        self.in_flight = Some(ticket);
        tracing::debug!(page = ticket.page, sequence = ticket.sequence, "fetching page");

        PendingFetch {
            ticket,
            future: (self.fetch)(ticket.page),
        }
    }
}

impl<T> Paginated<T> {
    pub fn state(&self) -> &PaginationState<T> {
        &self.state
    }

    pub fn data(&self) -> &[T] {
        self.state.data()
    }

    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn page(&self) -> u32 {
        self.state.page()
    }

    /// Returns the Previous/Next control if this controller was created with
    /// controls enabled
    pub fn control<Message>(
        &self,
        on_action: impl Fn(PaginationAction) -> Message,
    ) -> Option<PaginationControl<Message>> {
        self.show_controls.then(|| {
            PaginationControl::new(
                on_action(PaginationAction::Back),
                on_action(PaginationAction::Forward),
            )
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for Paginated<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginated")
            .field("state", &self.state)
            .field("show_controls", &self.show_controls)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;

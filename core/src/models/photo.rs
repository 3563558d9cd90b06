// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

use crate::client::PicsumClient;
use crate::error::Result;

/// One entry of the photo listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Photo {
    pub id: String,
    pub author: String,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub download_url: String,
}

impl fmt::Display for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} by {} ({}x{})", self.id, self.author, self.width, self.height)
    }
}

impl Photo {
    /// Fetches one page of the listing, in the order the API returns it
    pub async fn get_page(client: Arc<PicsumClient>, page: u32) -> Result<Vec<Photo>> {
        let photos: Vec<Photo> = client.get_json(client.list_url(page)).await?;
        tracing::info!(
            page,
            limit = client.page_limit(),
            count = photos.len(),
            "fetched photos"
        );

        Ok(photos)
    }
}

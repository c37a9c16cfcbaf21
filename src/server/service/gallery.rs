//! Gallery orchestration: fetch, filter and extract.

use crate::server::{
    error::upstream::UpstreamError,
    model::{
        fetch::FetchReport,
        gallery::{GalleryItem, GalleryRequest},
        message::DiscordMessage,
    },
    service::{discord::MessageFetcher, extract},
};

/// Items of one gallery request together with the fetch report they came from.
#[derive(Debug)]
pub struct Gallery {
    /// Items sorted newest first
    pub items: Vec<GalleryItem>,
    pub report: FetchReport,
}

pub struct GalleryService<'a> {
    fetcher: MessageFetcher<'a>,
}

impl<'a> GalleryService<'a> {
    /// Creates a new GalleryService instance.
    ///
    /// # Arguments
    /// - `fetcher` - Configured message fetcher for the request's credential
    ///
    /// # Returns
    /// - `GalleryService` - New service instance
    pub fn new(fetcher: MessageFetcher<'a>) -> Self {
        Self { fetcher }
    }

    /// Retrieves the upstream messages of a request without extracting anything.
    ///
    /// When the request names a user, messages from other authors are dropped.
    ///
    /// # Arguments
    /// - `request` - Validated gallery request
    ///
    /// # Returns
    /// - `Ok(FetchReport)` - Filtered messages plus fetch diagnostics
    /// - `Err(UpstreamError)` - Discord could not be read at all
    pub async fn messages(&self, request: &GalleryRequest) -> Result<FetchReport, UpstreamError> {
        let mut report = self.fetcher.fetch(request).await?;

        if let Some(user_id) = request.user_id.as_deref() {
            let before = report.messages.len();
            report.messages.retain(|message| {
                DiscordMessage::from_value(message)
                    .is_some_and(|message| message.author_id() == Some(user_id))
            });

            tracing::debug!(
                "Kept {} of {} messages from user {}",
                report.messages.len(),
                before,
                user_id
            );
        }

        Ok(report)
    }

    /// Builds the gallery for a request.
    ///
    /// # Arguments
    /// - `request` - Validated gallery request
    ///
    /// # Returns
    /// - `Ok(Gallery)` - Items newest first, possibly empty
    /// - `Err(UpstreamError)` - Discord could not be read at all
    pub async fn collect(&self, request: &GalleryRequest) -> Result<Gallery, UpstreamError> {
        let report = self.messages(request).await?;
        let items = extract::aggregate(&report.messages);

        Ok(Gallery { items, report })
    }
}

#[cfg(test)]
mod test;

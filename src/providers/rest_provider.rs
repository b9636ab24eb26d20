use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::Client;

use crate::config::Config;
use crate::note::Note;
use crate::providers::provider::NotesProvider;

/// Notes backend over HTTP. One blocking client, JSON bodies, and a uniform
/// failure model: any non-2xx status or transport error surfaces as an error
/// with no further taxonomy.
pub struct RestNotesProvider {
    client: Client,
    base_url: String,
}

impl RestNotesProvider {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.get_request_timeout_secs()))
            .build()
            .context("could not build http client")?;

        Ok(RestNotesProvider {
            client,
            base_url: config.get_backend_url().trim_end_matches('/').to_string(),
        })
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn post_url(&self, id: &str) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }
}

impl NotesProvider for RestNotesProvider {
    fn fetch_notes(&self) -> Result<Vec<Note>> {
        let url = self.posts_url();
        debug!("GET {}", url);
        let notes = self
            .client
            .get(&url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .with_context(|| format!("could not fetch notes from {}", url))?
            .json::<Vec<Note>>()
            .context("could not decode notes list")?;
        Ok(notes)
    }

    fn create_note(&self, note: &Note) -> Result<Note> {
        let url = self.posts_url();
        debug!("POST {}", url);
        let created = self
            .client
            .post(&url)
            .json(note)
            .send()
            .and_then(|resp| resp.error_for_status())
            .with_context(|| format!("could not create note at {}", url))?
            .json::<Note>()
            .context("could not decode created note")?;
        Ok(created)
    }

    fn update_note(&self, note: &Note) -> Result<Note> {
        let url = self.post_url(&note.id);
        debug!("PUT {}", url);
        let updated = self
            .client
            .put(&url)
            .json(note)
            .send()
            .and_then(|resp| resp.error_for_status())
            .with_context(|| format!("could not update note {}", note.id))?
            .json::<Note>()
            .context("could not decode updated note")?;
        Ok(updated)
    }

    fn delete_note(&self, id: &str) -> Result<()> {
        let url = self.post_url(id);
        debug!("DELETE {}", url);
        self.client
            .delete(&url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .with_context(|| format!("could not delete note {}", id))?;
        Ok(())
    }
}

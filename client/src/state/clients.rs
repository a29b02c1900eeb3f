//! Client registry: the ordered client list plus the single selected client.
//!
//! DESIGN
//! ======
//! The selection is stored as an id and the selected record is always read
//! back out of the list, so a status change on the selected client is visible
//! to every observer in the same update. Removing the selected client moves
//! the selection to the first remaining client (or clears it).

#[cfg(test)]
#[path = "clients_test.rs"]
mod clients_test;

use serde::{Deserialize, Serialize};

use crate::util::clock::Timestamp;

/// Simulated state of a client's link to the accounting system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
    #[default]
    Disconnected,
    Expired,
    Error,
}

/// Account status of a client relationship.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl ClientStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Pending];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }
}

/// A client business managed by the firm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub industry: String,
    pub phone: String,
    pub status: ClientStatus,
    pub connection_status: ConnectionStatus,
    /// RFC 3339 time of the last successful sync, if any.
    pub last_sync: Option<String>,
    /// Calendar date (`YYYY-MM-DD`) the client was added.
    pub created_at: String,
}

/// User-entered fields for a new client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub industry: String,
    pub phone: String,
    pub status: ClientStatus,
}

impl ClientDraft {
    /// Check the fields the add-client form marks as required.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first missing field.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Contact name is required".to_owned());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required".to_owned());
        }
        if self.company_name.trim().is_empty() {
            return Err("Company name is required".to_owned());
        }
        Ok(())
    }
}

/// Ordered client collection with one selection pointer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientRegistry {
    clients: Vec<Client>,
    selected: Option<String>,
}

impl ClientRegistry {
    /// Build a registry from existing records, selecting the first one.
    #[must_use]
    pub fn new(clients: Vec<Client>) -> Self {
        let selected = clients.first().map(|c| c.id.clone());
        Self { clients, selected }
    }

    /// All clients in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Client] {
        &self.clients
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// The currently selected client, read from the live list.
    #[must_use]
    pub fn selected(&self) -> Option<&Client> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Append a new client built from `draft`.
    ///
    /// The record starts disconnected with no sync history. If the registry
    /// was empty the new client becomes the selection.
    pub fn add(&mut self, draft: ClientDraft, now: Timestamp) -> &Client {
        let client = Client {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            email: draft.email,
            company_name: draft.company_name,
            industry: draft.industry,
            phone: draft.phone,
            status: draft.status,
            connection_status: ConnectionStatus::Disconnected,
            last_sync: None,
            created_at: now.to_iso_date(),
        };
        if self.selected().is_none() {
            self.selected = Some(client.id.clone());
        }
        self.clients.push(client);
        let last = self.clients.len() - 1;
        &self.clients[last]
    }

    /// Delete the client with `id`. No-op when absent.
    pub fn remove(&mut self, id: &str) -> Option<Client> {
        let index = self.clients.iter().position(|c| c.id == id)?;
        let removed = self.clients.remove(index);
        if self.selected.as_deref() == Some(id) {
            self.selected = self.clients.first().map(|c| c.id.clone());
        }
        Some(removed)
    }

    /// Point the selection at `id`. Returns `false` (and leaves the selection
    /// alone) when no such client exists.
    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected = Some(id.to_owned());
        true
    }

    /// Overwrite connection status and last-sync time for `id`.
    pub fn set_connection_status(&mut self, id: &str, status: ConnectionStatus, last_sync: Option<String>) -> bool {
        let Some(client) = self.clients.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        client.connection_status = status;
        client.last_sync = last_sync;
        true
    }

    /// Mark `id` connected and synced at `now`.
    pub fn connect(&mut self, id: &str, now: Timestamp) -> bool {
        self.set_connection_status(id, ConnectionStatus::Connected, Some(now.to_rfc3339()))
    }

    /// Mark `id` disconnected and forget its sync history.
    pub fn disconnect(&mut self, id: &str) -> bool {
        self.set_connection_status(id, ConnectionStatus::Disconnected, None)
    }

    /// Record a sync at `now` without changing connection status.
    pub fn sync(&mut self, id: &str, now: Timestamp) -> bool {
        let Some(status) = self.get(id).map(|c| c.connection_status) else {
            return false;
        };
        self.set_connection_status(id, status, Some(now.to_rfc3339()))
    }

    /// Case-insensitive substring match over company, contact name and email.
    /// An empty query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Client> {
        let needle = query.to_lowercase();
        self.clients
            .iter()
            .filter(|c| {
                needle.is_empty()
                    || c.company_name.to_lowercase().contains(&needle)
                    || c.name.to_lowercase().contains(&needle)
                    || c.email.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

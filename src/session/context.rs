//! Session context: profile + slot + client.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::api::{
    ApiClient, CombatResults, Improvements, SaveDeckRequest, Transport, User,
    DEFAULT_SIMULATIONS,
};
use crate::deck::{Deck, DeckSlot, RequestTicket};
use crate::error::{DeckError, Result};
use crate::games::{BuildParams, GameProfile};
use crate::projection::{export_to_text, ExportFile, EXPORT_MIME};
use crate::view::{AnalysisView, DeckView};

/// Outcome of a deck-replacing request.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckUpdate {
    /// The response became the current deck.
    Applied(Deck),
    /// A newer request or a local replacement got there first; the
    /// response was dropped.
    Superseded,
}

impl DeckUpdate {
    /// Check whether the response was applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, DeckUpdate::Applied(_))
    }

    /// The applied deck, if any.
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        match self {
            DeckUpdate::Applied(deck) => Some(deck),
            DeckUpdate::Superseded => None,
        }
    }
}

/// Outcome of a request that reads the current deck.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckReport<T> {
    /// The deck was still current when the response arrived.
    Current(T),
    /// The deck was replaced while the request was in flight; the
    /// response describes a deck that is no longer shown.
    Superseded,
}

impl<T> DeckReport<T> {
    /// Check whether the report still describes the current deck.
    #[must_use]
    pub fn is_current(&self) -> bool {
        matches!(self, DeckReport::Current(_))
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        match self {
            DeckReport::Current(value) => Some(value),
            DeckReport::Superseded => None,
        }
    }

    #[must_use]
    pub fn into_current(self) -> Option<T> {
        match self {
            DeckReport::Current(value) => Some(value),
            DeckReport::Superseded => None,
        }
    }
}

/// One deck-builder page.
///
/// ## Key Operations
///
/// - `build_deck` / `suggest_from_collection`: Validate, request, commit
/// - `load_saved_deck` / `adopt_improvement`: Replace from the backend
/// - `analyze_current` / `simulate_current`: Read the deck, checked against
///   its generation when the answer arrives
/// - `save_current` / `update_current`: Persist the deck
/// - `deck_view` / `export_current`: Local projections
/// - `logout` / `fresh_builder`: Drop the deck
///
/// Every operation that needs a deck fails with `NoCurrentDeck` before
/// anything is sent when the slot is empty.
#[derive(Debug)]
pub struct Session<T> {
    profile: GameProfile,
    client: ApiClient<T>,
    slot: Mutex<DeckSlot>,
}

impl<T: Transport> Session<T> {
    /// Create a session over a transport.
    pub fn new(profile: GameProfile, transport: T) -> Self {
        Self::with_client(profile, ApiClient::new(transport))
    }

    /// Create a session over an existing client.
    pub fn with_client(profile: GameProfile, client: ApiClient<T>) -> Self {
        Self {
            profile,
            client,
            slot: Mutex::new(DeckSlot::new()),
        }
    }

    /// Game profile.
    #[must_use]
    pub fn profile(&self) -> &GameProfile {
        &self.profile
    }

    /// Backend client, for endpoints that do not touch the deck.
    #[must_use]
    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    // The guard never lives across an await.
    fn slot(&self) -> MutexGuard<'_, DeckSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current deck.
    #[must_use]
    pub fn current_deck(&self) -> Option<Deck> {
        self.slot().snapshot()
    }

    /// Check whether a deck is loaded.
    #[must_use]
    pub fn has_deck(&self) -> bool {
        self.slot().is_set()
    }

    /// Slot generation; changes on every replacement.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.slot().generation()
    }

    /// Replace the current deck locally. Pending responses are dropped.
    pub fn set_current_deck(&self, deck: Option<Deck>) {
        self.slot().set(deck);
    }

    /// Return to an empty builder.
    pub fn fresh_builder(&self) {
        self.slot().clear();
    }

    fn require_deck(&self) -> Result<Deck> {
        self.current_deck().ok_or(DeckError::NoCurrentDeck)
    }

    // Current deck together with the generation it was read at.
    fn require_deck_at(&self) -> Result<(Deck, u64)> {
        let slot = self.slot();
        let deck = slot.snapshot().ok_or(DeckError::NoCurrentDeck)?;
        Ok((deck, slot.generation()))
    }

    fn report<R>(&self, generation: u64, what: &str, value: R) -> DeckReport<R> {
        let now = self.generation();
        if now == generation {
            DeckReport::Current(value)
        } else {
            warn!(sent = generation, now, "dropping {} for a replaced deck", what);
            DeckReport::Superseded
        }
    }

    fn issue(&self) -> RequestTicket {
        self.slot().issue()
    }

    fn apply(&self, ticket: RequestTicket, deck: Deck) -> DeckUpdate {
        if self.slot().commit(ticket, deck.clone()) {
            DeckUpdate::Applied(deck)
        } else {
            DeckUpdate::Superseded
        }
    }

    // =========================================================================
    // Deck-replacing operations
    // =========================================================================

    /// Build a new deck.
    ///
    /// Parameters are validated against the profile first; invalid ones
    /// never reach the backend.
    pub async fn build_deck(&self, params: &BuildParams) -> Result<DeckUpdate> {
        let request = self.profile.build_request(params)?;
        let ticket = self.issue();
        debug!(game = %self.profile.display_name, ticket = ticket.raw(), "building deck");

        let deck = self.client.build_deck(&self.profile, &request).await?;
        Ok(self.apply(ticket, deck))
    }

    /// Build a deck from the user's collection.
    pub async fn suggest_from_collection(&self, params: &BuildParams) -> Result<DeckUpdate> {
        let request = self.profile.build_request(params)?;
        let ticket = self.issue();
        debug!(game = %self.profile.display_name, ticket = ticket.raw(), "suggesting deck from collection");

        let deck = self.client.suggest_deck(&self.profile, &request).await?;
        if let Some(info) = deck.ownership() {
            info!(percentage_owned = info.percentage_owned, "collection coverage");
        }
        Ok(self.apply(ticket, deck))
    }

    /// Load a saved deck.
    pub async fn load_saved_deck(&self, id: u64) -> Result<DeckUpdate> {
        let ticket = self.issue();
        let deck = self.client.get_deck(id).await?;
        Ok(self.apply(ticket, deck))
    }

    /// Improvement options for the current deck.
    pub async fn suggest_improvements(&self) -> Result<Improvements> {
        let deck = self.require_deck()?;
        self.client.suggest_improvements(&self.profile, &deck).await
    }

    /// Replace the current deck with one of its improvements.
    ///
    /// Options are fetched fresh so they match the deck as it is now.
    pub async fn adopt_improvement(&self, kind: &str) -> Result<DeckUpdate> {
        let deck = self.require_deck()?;
        let ticket = self.issue();

        let mut improvements = self.client.suggest_improvements(&self.profile, &deck).await?;
        let improvement = improvements.remove(kind).ok_or_else(|| {
            DeckError::validation(format!("No '{}' improvement is available for this deck", kind))
        })?;
        Ok(self.apply(ticket, improvement.deck))
    }

    // =========================================================================
    // Operations on the current deck
    // =========================================================================

    /// Ask the backend to analyze the current main deck.
    ///
    /// `Superseded` if the deck was replaced before the analysis came back.
    pub async fn analyze_current(&self) -> Result<DeckReport<AnalysisView>> {
        let (deck, generation) = self.require_deck_at()?;
        let analysis = self.client.analyze_deck(&self.profile, &deck.main_deck).await?;
        let view = AnalysisView::from_analysis(&analysis, generation);
        Ok(self.report(generation, "analysis", view))
    }

    /// Simulate the current deck against an opponent.
    ///
    /// `None` runs `DEFAULT_SIMULATIONS` games. `Superseded` if the deck
    /// was replaced before the results came back.
    pub async fn simulate_current(
        &self,
        opponent_deck_id: &str,
        num_simulations: Option<u32>,
    ) -> Result<DeckReport<CombatResults>> {
        let (deck, generation) = self.require_deck_at()?;
        let opponent = opponent_deck_id.trim();
        if opponent.is_empty() {
            return Err(DeckError::validation("Please select an opponent deck"));
        }
        let num_simulations = num_simulations.unwrap_or(DEFAULT_SIMULATIONS);
        if num_simulations == 0 {
            return Err(DeckError::validation(
                "Number of simulations must be at least 1",
            ));
        }

        let results = self
            .client
            .simulate_combat(&deck, opponent, num_simulations)
            .await?;
        Ok(self.report(generation, "simulation results", results))
    }

    /// Save the current deck under `name`.
    pub async fn save_current(&self, name: &str) -> Result<Deck> {
        let deck = self.require_deck()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(DeckError::validation("Please enter a deck name"));
        }

        let saved = self.client.save_deck(&self.save_request(&deck, name)).await?;
        info!(id = ?saved.id, name, "deck saved");
        Ok(saved)
    }

    /// Overwrite the saved copy of the current deck.
    ///
    /// The current deck must have come from the backend's saved list.
    pub async fn update_current(&self, name: &str) -> Result<Deck> {
        let deck = self.require_deck()?;
        let id = deck
            .id
            .ok_or_else(|| DeckError::validation("This deck has not been saved yet"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(DeckError::validation("Please enter a deck name"));
        }

        let saved = self.client.update_deck(id, &self.save_request(&deck, name)).await?;
        info!(id, name, "deck updated");
        Ok(saved)
    }

    fn save_request<'a>(&'a self, deck: &'a Deck, name: &'a str) -> SaveDeckRequest<'a> {
        SaveDeckRequest {
            name,
            strategy: &deck.strategy,
            color: &deck.color,
            leader: deck.leader.as_ref(),
            main_deck: &deck.main_deck,
            game: self.profile.saved_deck_tag.as_deref(),
        }
    }

    /// Project the current deck for display.
    pub fn deck_view(&self, filter: &str) -> Result<DeckView> {
        let slot = self.slot();
        let deck = slot.current().ok_or(DeckError::NoCurrentDeck)?;
        Ok(DeckView::project(deck, &self.profile, filter, slot.generation()))
    }

    /// Export the current deck as a text file.
    pub fn export_current(&self) -> Result<ExportFile> {
        let slot = self.slot();
        let contents = export_to_text(slot.current(), self.profile.export_style)?;
        Ok(ExportFile {
            file_name: self.profile.export_file_name.clone(),
            mime: EXPORT_MIME,
            contents,
        })
    }

    // =========================================================================
    // Saved decks and account
    // =========================================================================

    /// Saved decks belonging to this game.
    pub async fn saved_decks(&self) -> Result<Vec<Deck>> {
        let decks = self.client.list_decks().await?;
        Ok(decks
            .into_iter()
            .filter(|d| self.profile.owns_saved_deck(d.game.as_deref()))
            .collect())
    }

    /// Delete a saved deck. The current deck is unaffected.
    pub async fn delete_saved_deck(&self, id: u64) -> Result<()> {
        self.client.delete_deck(id).await
    }

    /// Log in.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let username = credentials(username, password)?;
        let user = self.client.login(username, password).await?;
        info!(user = %user.username, "logged in");
        Ok(user)
    }

    /// Create an account and log in as it.
    pub async fn register(&self, username: &str, password: &str) -> Result<User> {
        let username = credentials(username, password)?;
        let user = self.client.register(username, password).await?;
        info!(user = %user.username, "registered");
        Ok(user)
    }

    /// The logged-in user, if any.
    pub async fn current_user(&self) -> Result<Option<User>> {
        self.client.current_user().await
    }

    /// Log out and drop the current deck.
    ///
    /// The deck is dropped even if the backend call fails.
    pub async fn logout(&self) -> Result<()> {
        let result = self.client.logout().await;
        self.fresh_builder();
        result
    }
}

// Trimmed username, or `Validation` when either field is blank.
fn credentials<'a>(username: &'a str, password: &str) -> Result<&'a str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(DeckError::validation(
            "Please enter a username and password",
        ));
    }
    Ok(username)
}

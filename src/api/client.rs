//! Typed backend client.
//!
//! One method per endpoint. Each serializes its request, hands it to the
//! transport, and decodes the envelope. Failures are logged here once and
//! returned unchanged; nothing is retried.

use im::Vector;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};

use super::envelope::{decode_ack, decode_flat, decode_payload};
use super::transport::{Method, Transport};
use super::types::{
    AddCardRequest, AddStructureDeckRequest, Analysis, AnalyzeRequest, CollectionItem,
    CombatResults, Credentials, Improvements, ImprovementsRequest, OpponentDeck, SaveDeckRequest,
    SimulateRequest, StructureDeck, StructureDeckSummary, User,
};
use crate::cards::Card;
use crate::deck::Deck;
use crate::error::{DeckError, Result};
use crate::games::{BuildRequest, GameProfile};

/// Default number of simulated games per combat request.
pub const DEFAULT_SIMULATIONS: u32 = 1000;

/// Result of adding a structure deck to the collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StructureDeckAdded {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub deck_code: String,
}

#[derive(Deserialize)]
struct AuthStatus {
    #[serde(default)]
    authenticated: bool,
    #[serde(default)]
    user: Option<User>,
}

/// Backend client over a transport.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    /// Wrap a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, method: Method, path: &str, body: Option<Value>) -> Result<String> {
        self.transport.send(method, path, body).await.map_err(|err| {
            error!(%method, path, error = %err, "transport failure");
            err
        })
    }

    async fn fetch<P: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        key: &str,
    ) -> Result<P> {
        let text = self.call(method, path, body).await?;
        decode_payload(&text, key).map_err(|err| log_decode_failure(method, path, err))
    }

    async fn ack(&self, method: Method, path: &str, body: Option<Value>) -> Result<()> {
        let text = self.call(method, path, body).await?;
        decode_ack(&text).map_err(|err| log_decode_failure(method, path, err))
    }

    // =========================================================================
    // Game endpoints
    // =========================================================================

    /// Build a deck from validated parameters.
    pub async fn build_deck(&self, profile: &GameProfile, request: &BuildRequest) -> Result<Deck> {
        let body = to_body(request)?;
        self.fetch(Method::Post, &profile.endpoint("build-deck"), Some(body), "deck")
            .await
    }

    /// Build a deck biased toward the user's collection.
    pub async fn suggest_deck(
        &self,
        profile: &GameProfile,
        request: &BuildRequest,
    ) -> Result<Deck> {
        let body = to_body(request)?;
        self.fetch(Method::Post, &profile.endpoint("suggest-deck"), Some(body), "deck")
            .await
    }

    /// Analyze a main deck.
    pub async fn analyze_deck(
        &self,
        profile: &GameProfile,
        cards: &Vector<Card>,
    ) -> Result<Analysis> {
        let body = to_body(&AnalyzeRequest { deck: cards })?;
        self.fetch(
            Method::Post,
            &profile.endpoint("analyze-deck"),
            Some(body),
            "analysis",
        )
        .await
    }

    /// Improvement options for a deck.
    pub async fn suggest_improvements(
        &self,
        profile: &GameProfile,
        deck: &Deck,
    ) -> Result<Improvements> {
        let body = to_body(&ImprovementsRequest { deck })?;
        self.fetch(
            Method::Post,
            &profile.endpoint("suggest-improvements"),
            Some(body),
            "improvements",
        )
        .await
    }

    /// Preconstructed structure decks.
    pub async fn structure_decks(&self) -> Result<Vec<StructureDeckSummary>> {
        self.fetch(Method::Get, "/api/structure-decks", None, "decks")
            .await
    }

    /// One structure deck with its card list.
    pub async fn structure_deck(&self, code: &str) -> Result<StructureDeck> {
        let path = format!("/api/structure-decks/{}", code.trim());
        self.fetch(Method::Get, &path, None, "deck").await
    }

    /// Opponents available for simulation.
    pub async fn opponent_decks(&self) -> Result<Vec<OpponentDeck>> {
        self.fetch(Method::Get, "/api/opponent-decks", None, "decks")
            .await
    }

    /// Simulate games against a named opponent.
    pub async fn simulate_combat(
        &self,
        deck: &Deck,
        opponent_deck_id: &str,
        num_simulations: u32,
    ) -> Result<CombatResults> {
        let body = to_body(&SimulateRequest {
            player_deck: deck,
            opponent_deck_id,
            num_simulations,
        })?;
        self.fetch(Method::Post, "/api/simulate-combat", Some(body), "results")
            .await
    }

    // =========================================================================
    // Saved decks
    // =========================================================================

    /// Saved decks of the logged-in user.
    pub async fn list_decks(&self) -> Result<Vec<Deck>> {
        self.fetch(Method::Get, "/api/decks", None, "decks").await
    }

    /// One saved deck.
    pub async fn get_deck(&self, id: u64) -> Result<Deck> {
        self.fetch(Method::Get, &format!("/api/decks/{}", id), None, "deck")
            .await
    }

    /// Save a deck under a name.
    pub async fn save_deck(&self, request: &SaveDeckRequest<'_>) -> Result<Deck> {
        let body = to_body(request)?;
        self.fetch(Method::Post, "/api/decks", Some(body), "deck")
            .await
    }

    /// Overwrite a saved deck.
    pub async fn update_deck(&self, id: u64, request: &SaveDeckRequest<'_>) -> Result<Deck> {
        let body = to_body(request)?;
        self.fetch(Method::Put, &format!("/api/decks/{}", id), Some(body), "deck")
            .await
    }

    /// Delete a saved deck.
    pub async fn delete_deck(&self, id: u64) -> Result<()> {
        self.ack(Method::Delete, &format!("/api/decks/{}", id), None)
            .await
    }

    // =========================================================================
    // Collection
    // =========================================================================

    /// The user's collection.
    pub async fn collection(&self) -> Result<Vec<CollectionItem>> {
        self.fetch(Method::Get, "/api/collection", None, "collection")
            .await
    }

    /// Add copies of a card to the collection.
    pub async fn add_to_collection(&self, card_name: &str, quantity: u32) -> Result<()> {
        let body = to_body(&AddCardRequest {
            card_name,
            quantity,
        })?;
        self.ack(Method::Post, "/api/collection", Some(body)).await
    }

    /// Remove a collection row.
    pub async fn remove_from_collection(&self, item_id: u64) -> Result<()> {
        self.ack(Method::Delete, &format!("/api/collection/{}", item_id), None)
            .await
    }

    /// Add every card of a structure deck to the collection.
    pub async fn add_structure_deck(&self, deck_code: &str) -> Result<StructureDeckAdded> {
        let body = to_body(&AddStructureDeckRequest { deck_code })?;
        let path = "/api/collection/add-structure-deck";
        let text = self.call(Method::Post, path, Some(body)).await?;
        decode_flat(&text).map_err(|err| log_decode_failure(Method::Post, path, err))
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// The logged-in user, if any.
    ///
    /// This endpoint has no `success` flag.
    pub async fn current_user(&self) -> Result<Option<User>> {
        let path = "/api/current-user";
        let text = self.call(Method::Get, path, None).await?;
        let status: AuthStatus = serde_json::from_str(&text)
            .map_err(|err| log_decode_failure(Method::Get, path, err.into()))?;
        Ok(status.user.filter(|_| status.authenticated))
    }

    /// Log in.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let body = to_body(&Credentials { username, password })?;
        self.fetch(Method::Post, "/api/login", Some(body), "user")
            .await
    }

    /// Create an account. The backend logs the new user in.
    pub async fn register(&self, username: &str, password: &str) -> Result<User> {
        let body = to_body(&Credentials { username, password })?;
        self.fetch(Method::Post, "/api/register", Some(body), "user")
            .await
    }

    /// Log out.
    pub async fn logout(&self) -> Result<()> {
        self.ack(Method::Post, "/api/logout", None).await
    }
}

#[cfg(feature = "http")]
impl ApiClient<super::transport::HttpTransport> {
    /// Client over HTTP with the given configuration.
    pub fn http(config: super::config::ClientConfig) -> Result<Self> {
        super::transport::HttpTransport::new(config).map(Self::new)
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body)
        .map_err(|e| DeckError::transport(format!("failed to encode request: {}", e)))
}

fn log_decode_failure(method: Method, path: &str, err: DeckError) -> DeckError {
    match &err {
        DeckError::Backend(message) => warn!(%method, path, %message, "backend reported failure"),
        other => error!(%method, path, error = %other, "malformed response"),
    }
    err
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::games::{BuildParams, Strategy};

    /// Replies with one canned body and records what was sent.
    struct Canned {
        body: String,
        sent: Mutex<Vec<(Method, String, Option<Value>)>>,
    }

    impl Canned {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn last(&self) -> (Method, String, Option<Value>) {
            self.sent.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl Transport for Canned {
        async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<String> {
            self.sent
                .lock()
                .unwrap()
                .push((method, path.to_string(), body));
            Ok(self.body.clone())
        }
    }

    #[tokio::test]
    async fn test_build_deck_uses_profile_prefix() {
        let client = ApiClient::new(Canned::new(
            r#"{"success": true, "deck": {"strategy": "aggressive", "color": "Amber", "main_deck": []}}"#,
        ));
        let profile = GameProfile::lorcana();
        let request = profile
            .build_request(&BuildParams::new(Strategy::Aggressive, ["Amber", "Steel"]))
            .unwrap();

        let deck = client.build_deck(&profile, &request).await.unwrap();
        assert_eq!(deck.strategy, "aggressive");

        let (method, path, body) = client.transport().last();
        assert_eq!(method, Method::Post);
        assert_eq!(path, "/api/lorcana/build-deck");
        assert_eq!(
            body.unwrap(),
            serde_json::json!({"strategy": "aggressive", "colors": ["Amber", "Steel"]})
        );
    }

    #[tokio::test]
    async fn test_delete_deck_path() {
        let client = ApiClient::new(Canned::new(r#"{"success": true, "message": "Deck deleted"}"#));
        client.delete_deck(42).await.unwrap();

        let (method, path, body) = client.transport().last();
        assert_eq!(method, Method::Delete);
        assert_eq!(path, "/api/decks/42");
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn test_update_deck_uses_put() {
        let client = ApiClient::new(Canned::new(
            r#"{"success": true, "deck": {"id": 5, "name": "Renamed", "main_deck": []}}"#,
        ));
        let cards = Vector::new();
        let request = SaveDeckRequest {
            name: "Renamed",
            strategy: "balanced",
            color: "Red",
            leader: None,
            main_deck: &cards,
            game: None,
        };

        let deck = client.update_deck(5, &request).await.unwrap();
        assert_eq!(deck.name.as_deref(), Some("Renamed"));

        let (method, path, body) = client.transport().last();
        assert_eq!(method, Method::Put);
        assert_eq!(path, "/api/decks/5");
        assert_eq!(body.unwrap()["name"], "Renamed");
    }

    #[tokio::test]
    async fn test_backend_failure_surfaces_message() {
        let client = ApiClient::new(Canned::new(r#"{"success": false, "error": "Login required"}"#));
        let err = client.list_decks().await.unwrap_err();
        assert_eq!(err, DeckError::backend("Login required"));
    }

    #[tokio::test]
    async fn test_current_user_without_envelope() {
        let client = ApiClient::new(Canned::new(
            r#"{"authenticated": true, "user": {"id": 3, "username": "nami"}}"#,
        ));
        let user = client.current_user().await.unwrap().unwrap();
        assert_eq!(user.username, "nami");

        let client = ApiClient::new(Canned::new(r#"{"authenticated": false}"#));
        assert!(client.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_structure_deck_flat_payload() {
        let client = ApiClient::new(Canned::new(
            r#"{"success": true, "message": "Added 51 cards", "deck_code": "ST-01", "added_cards": []}"#,
        ));
        let added = client.add_structure_deck("ST-01").await.unwrap();
        assert_eq!(added.deck_code, "ST-01");
        assert_eq!(added.message, "Added 51 cards");
    }
}

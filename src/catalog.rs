use crate::api::client::RiotApiClient;
use crate::error::{LeagueError, Result};
use crate::model::champion::Champion;
use log::{debug, info};
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// Champion metadata keyed by champion name, fetched at most once.
///
/// Share one catalog (usually behind an `Arc`) between everything that
/// resolves champion names. The first `ensure_loaded` performs the fetch;
/// concurrent first callers block on that single fetch and then observe the
/// fully populated map. A failed fetch leaves the catalog unloaded so a
/// later call can try again.
#[derive(Debug, Default)]
pub struct ChampionCatalog {
    champions: OnceCell<HashMap<String, Champion>>,
}

impl ChampionCatalog {
    pub fn new() -> Self {
        ChampionCatalog {
            champions: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.champions.get().is_some()
    }

    pub fn ensure_loaded(&self, client: &RiotApiClient) -> Result<()> {
        self.loaded(client).map(|_| ())
    }

    /// Throws the current catalog away and fetches it again. On failure the
    /// previous contents stay in place.
    ///
    /// Needs exclusive access: call it before the catalog is handed to a
    /// `Summoner`, or through `Arc::get_mut` while no other handle exists.
    /// A shared catalog only ever loads once, through `ensure_loaded`.
    pub fn reload(&mut self, client: &RiotApiClient) -> Result<()> {
        let fresh = Self::fetch(client)?;
        self.champions = OnceCell::with_value(fresh);
        Ok(())
    }

    /// Looks up a loaded champion. Exact name first, then case-insensitive.
    pub fn lookup(&self, name: &str) -> Result<&Champion> {
        let champions = self
            .champions
            .get()
            .ok_or_else(|| LeagueError::ChampionNotFound(name.to_string()))?;

        champions
            .get(name)
            .or_else(|| champions.values().find(|c| c.name.eq_ignore_ascii_case(name)))
            .ok_or_else(|| LeagueError::ChampionNotFound(name.to_string()))
    }

    /// Loads the catalog if needed, then looks `name` up.
    pub fn resolve(&self, client: &RiotApiClient, name: &str) -> Result<&Champion> {
        self.ensure_loaded(client)?;
        self.lookup(name)
    }

    pub fn get_by_id(&self, id: i64) -> Option<&Champion> {
        self.champions().find(|c| c.id == id)
    }

    pub fn champions(&self) -> impl Iterator<Item = &Champion> {
        self.champions.get().into_iter().flat_map(|map| map.values())
    }

    pub fn free_to_play(&self) -> impl Iterator<Item = &Champion> {
        self.champions().filter(|c| c.free_to_play)
    }

    pub fn len(&self) -> usize {
        self.champions.get().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn loaded(&self, client: &RiotApiClient) -> Result<&HashMap<String, Champion>> {
        self.champions.get_or_try_init(|| Self::fetch(client))
    }

    fn fetch(client: &RiotApiClient) -> Result<HashMap<String, Champion>> {
        debug!("Loading champion catalog for region {}", client.region());
        let list = client.champions()?;

        let champions: HashMap<String, Champion> = list
            .champions
            .into_iter()
            .map(Champion::from)
            .map(|c| (c.name.clone(), c))
            .collect();

        info!("Loaded {} champions", champions.len());
        Ok(champions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn client(transport: &Arc<FakeTransport>) -> RiotApiClient {
        RiotApiClient::with_transport(test_config(), transport.clone())
    }

    #[test]
    fn loads_once_across_sequential_calls() {
        let transport = Arc::new(FakeTransport::new().route("v1.1/champion", 200, CHAMPIONS));
        let client = client(&transport);
        let catalog = ChampionCatalog::new();

        assert!(!catalog.is_loaded());
        catalog.ensure_loaded(&client).unwrap();
        assert!(catalog.is_loaded());
        catalog.ensure_loaded(&client).unwrap();

        assert_eq!(transport.hits("v1.1/champion"), 1);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn is_loaded_stays_false_while_the_fetch_is_in_flight() {
        let transport = Arc::new(
            FakeTransport::new()
                .route("v1.1/champion", 200, CHAMPIONS)
                .with_delay(Duration::from_millis(200)),
        );
        let client = Arc::new(client(&transport));
        let catalog = Arc::new(ChampionCatalog::new());

        let loader = {
            let client = Arc::clone(&client);
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || catalog.ensure_loaded(&client))
        };
        thread::sleep(Duration::from_millis(20));
        assert!(!catalog.is_loaded());
        assert!(catalog.lookup("Ashe").is_err());

        loader.join().unwrap().unwrap();
        assert!(catalog.is_loaded());
        assert_eq!(transport.hits("v1.1/champion"), 1);
    }

    #[test]
    fn reload_needs_an_unshared_handle() {
        let transport = Arc::new(FakeTransport::new().route("v1.1/champion", 200, CHAMPIONS));
        let client = client(&transport);
        let mut catalog = Arc::new(ChampionCatalog::new());
        catalog.ensure_loaded(&client).unwrap();

        Arc::get_mut(&mut catalog).unwrap().reload(&client).unwrap();
        assert_eq!(transport.hits("v1.1/champion"), 2);

        let shared = Arc::clone(&catalog);
        assert!(Arc::get_mut(&mut catalog).is_none());
        drop(shared);
        assert!(Arc::get_mut(&mut catalog).is_some());
    }

    #[test]
    fn concurrent_first_access_fetches_once() {
        let transport = Arc::new(
            FakeTransport::new()
                .route("v1.1/champion", 200, CHAMPIONS)
                .with_delay(Duration::from_millis(50)),
        );
        let client = Arc::new(client(&transport));
        let catalog = Arc::new(ChampionCatalog::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let client = Arc::clone(&client);
                let catalog = Arc::clone(&catalog);
                thread::spawn(move || {
                    catalog.ensure_loaded(&client).unwrap();
                    catalog.len()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 3);
        }
        assert_eq!(transport.hits("v1.1/champion"), 1);
    }

    #[test]
    fn failed_load_stays_unloaded_and_can_retry() {
        let failing = Arc::new(FakeTransport::new().route("v1.1/champion", 500, ""));
        let catalog = ChampionCatalog::new();

        assert_eq!(
            catalog.ensure_loaded(&client(&failing)).unwrap_err(),
            LeagueError::UnknownRequestFailure { status: 500 }
        );
        assert!(!catalog.is_loaded());

        let working = Arc::new(FakeTransport::new().route("v1.1/champion", 200, CHAMPIONS));
        catalog.ensure_loaded(&client(&working)).unwrap();
        assert!(catalog.is_loaded());
    }

    #[test]
    fn lookup_by_name() {
        let transport = Arc::new(FakeTransport::new().route("v1.1/champion", 200, CHAMPIONS));
        let catalog = ChampionCatalog::new();

        assert!(matches!(catalog.lookup("Ashe"), Err(LeagueError::ChampionNotFound(_))));

        let ashe = catalog.resolve(&client(&transport), "Ashe").unwrap();
        assert_eq!(ashe.id, ASHE_CHAMPION_ID);
        assert_eq!(ashe.ranks.attack, 7);

        assert_eq!(catalog.lookup("garen").unwrap().id, 86);
        assert!(!catalog.lookup("Garen").unwrap().bot_mm_enabled);
        assert_eq!(
            catalog.lookup("Zed").unwrap_err(),
            LeagueError::ChampionNotFound("Zed".to_string())
        );
    }

    #[test]
    fn id_and_free_rotation_queries() {
        let transport = Arc::new(FakeTransport::new().route("v1.1/champion", 200, CHAMPIONS));
        let catalog = ChampionCatalog::new();
        catalog.ensure_loaded(&client(&transport)).unwrap();

        assert_eq!(catalog.get_by_id(17).unwrap().name, "Teemo");
        let free: Vec<&str> = catalog.free_to_play().map(|c| c.name.as_str()).collect();
        assert_eq!(free, vec!["Ashe"]);
    }

    #[test]
    fn reload_refetches() {
        let transport = Arc::new(FakeTransport::new().route("v1.1/champion", 200, CHAMPIONS));
        let client = client(&transport);
        let mut catalog = ChampionCatalog::new();

        catalog.ensure_loaded(&client).unwrap();
        catalog.reload(&client).unwrap();
        assert_eq!(transport.hits("v1.1/champion"), 2);
        assert_eq!(catalog.len(), 3);
    }
}

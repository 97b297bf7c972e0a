use super::notifier;
use crate::objects::{
    keys, non_empty, record_watch, ContentRecord, ContinueWatchingEntry, Credentials, JsError,
    Platform, PlatformSelection, ViewingStats,
};
use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashSet;
use yew_agent::{Agent, AgentLink, Context, Dispatched, Dispatcher, HandlerId};

#[derive(Debug)]
pub enum Request {
    GetState,
    SetTmdbKey(String),
    SetYoutubeKey(String),
    SetPlatformEnabled(Platform, bool),
    RecordWatch(ContentRecord, f64),
}

#[derive(Debug, Clone)]
pub enum Response {
    State(HubState),
}

/// Snapshot of everything persisted across sessions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HubState {
    pub credentials: Credentials,
    pub platforms: PlatformSelection,
    pub continue_watching: Vec<ContinueWatchingEntry>,
    pub stats: ViewingStats,
}

/// Single-writer browser-storage store. Every mutation reads-modifies-writes
/// the whole named entry and broadcasts the new state to all subscribers.
pub struct Store {
    link: AgentLink<Store>,
    subscribers: HashSet<HandlerId>,
    notifier: Dispatcher<notifier::Notifier>,
    state: HubState,
}

impl Store {
    fn broadcast(&self) {
        for subscriber in &self.subscribers {
            self.link
                .respond(*subscriber, Response::State(self.state.clone()));
        }
    }

    fn process_handle_input(&mut self, msg: Request, id: HandlerId) -> Result<(), JsError> {
        match msg {
            Request::GetState => {
                self.link.respond(id, Response::State(self.state.clone()));
                return Ok(());
            }
            Request::SetTmdbKey(value) => {
                write_raw(keys::TMDB_API_KEY, &value)?;
                self.state.credentials.tmdb_api_key = non_empty(value);
            }
            Request::SetYoutubeKey(value) => {
                write_raw(keys::YOUTUBE_API_KEY, &value)?;
                self.state.credentials.youtube_api_key = non_empty(value);
            }
            Request::SetPlatformEnabled(platform, enabled) => {
                self.state.platforms.set_enabled(platform, enabled);
                write_json(keys::SELECTED_PLATFORMS, &self.state.platforms)?;
            }
            Request::RecordWatch(record, resume_time_seconds) => {
                record_watch(
                    &mut self.state.continue_watching,
                    &mut self.state.stats,
                    &record,
                    resume_time_seconds,
                    Utc::now(),
                );
                write_json(keys::CONTINUE_WATCHING, &self.state.continue_watching)?;
                write_json(keys::VIEWING_STATS, &self.state.stats)?;
            }
        }

        self.broadcast();
        Ok(())
    }
}

impl Agent for Store {
    type Reach = Context<Self>;
    type Message = ();
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
            notifier: notifier::Notifier::dispatcher(),
            state: load_state(),
        }
    }

    fn update(&mut self, _msg: Self::Message) {}

    fn handle_input(&mut self, msg: Self::Input, id: HandlerId) {
        if let Err(e) = self.process_handle_input(msg, id) {
            self.notifier.send(notifier::Request::NotifyError(e));
        }
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}

/// Reads all persisted entries, defaulting each one that is missing or does
/// not parse. A broken entry is logged and skipped rather than wedging the
/// whole application.
fn load_state() -> HubState {
    let mut state = HubState::default();

    state.credentials.tmdb_api_key = read_raw(keys::TMDB_API_KEY).and_then(non_empty);
    state.credentials.youtube_api_key = read_raw(keys::YOUTUBE_API_KEY).and_then(non_empty);

    if let Some(platforms) = read_json(keys::SELECTED_PLATFORMS) {
        state.platforms = platforms;
    }
    if let Some(continue_watching) = read_json(keys::CONTINUE_WATCHING) {
        state.continue_watching = continue_watching;
    }
    if let Some(stats) = read_json(keys::VIEWING_STATS) {
        state.stats = stats;
    }

    state
}

fn storage() -> Result<web_sys::Storage, JsError> {
    web_sys::window()
        .ok_or("error getting window")?
        .local_storage()?
        .ok_or_else(|| "local storage not available".into())
}

fn read_raw(key: &str) -> Option<String> {
    match storage().and_then(|storage| storage.get_item(key).map_err(Into::into)) {
        Ok(value) => value,
        Err(e) => {
            log::error!("error reading \"{}\": {}", key, e);
            None
        }
    }
}

fn read_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let value = read_raw(key)?;

    match serde_json::from_str(&value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::error!("error parsing \"{}\": {}", key, e);
            None
        }
    }
}

fn write_raw(key: &str, value: &str) -> Result<(), JsError> {
    storage()?.set_item(key, value).map_err(Into::into)
}

fn write_json<T: Serialize>(key: &str, value: &T) -> Result<(), JsError> {
    write_raw(key, &serde_json::to_string(value)?)
}

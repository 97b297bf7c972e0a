use crate::agents::{
    fetcher::{self, Fetcher},
    notifier::{self, Notifier},
    store::{self, Store},
};
use crate::catalog::{
    aggregate::{self, HomeCatalog},
    dispatch::{self, DispatchAction},
    local,
    plan::{self, HomeSection},
};
use crate::components::{
    input_element_from_event, nav_bar::NavBar, player::Player, settings::SettingsPanel,
    tile::ContentTile,
};
use crate::objects::{ContentRecord, JsError, Platform};
use chrono::{TimeZone, Utc};
use wasm_bindgen::JsValue;
use web_sys::{HtmlInputElement, Url};
use yew::prelude::*;
use yew_agent::{Bridge, Bridged, Dispatched, Dispatcher};

pub struct HomePage {
    store: Box<dyn Bridge<Store>>,
    fetcher: Box<dyn Bridge<Fetcher>>,
    notifier: Dispatcher<Notifier>,
    state: Option<store::HubState>,
    catalog: HomeCatalog,
    local_files: Vec<ContentRecord>,
    pending_sections: usize,
    catalog_requested: bool,
    filter_query: String,
    search_results: Option<Vec<ContentRecord>>,
    search_pending: bool,
    current_video: Option<ContentRecord>,
    settings_open: bool,
    folder_input_ref: NodeRef,
}

pub enum Message {
    StoreResponse(store::Response),
    FetcherResponse(fetcher::Response),
    QueryChange(String),
    SearchSubmit(String),
    Refresh,
    OpenSettings,
    CloseSettings,
    SetTmdbKey(String),
    SetYoutubeKey(String),
    TogglePlatform((Platform, bool)),
    SelectFolder,
    FolderSelected(Event),
    Play(ContentRecord),
    PlayerProgress(f64),
    ClosePlayer,
}

impl HomePage {
    fn pull_home(&mut self) {
        let credentials = match &self.state {
            Some(state) => state.credentials.clone(),
            None => return,
        };

        if !credentials.any() {
            return;
        }

        self.catalog_requested = true;
        self.pending_sections = 4;
        self.catalog = HomeCatalog::default();
        self.fetcher.send(fetcher::Request::PullHome(credentials));
    }

    fn collect_folder_selection(&mut self, ev: Event) -> Result<usize, JsError> {
        let input = input_element_from_event(&ev)?;
        let files = input.files().ok_or("error getting selected files")?;

        for record in &self.local_files {
            if let Some(url) = &record.url {
                Url::revoke_object_url(url)?;
            }
        }
        self.local_files.clear();

        for index in 0..files.length() {
            let file = match files.item(index) {
                Some(file) => file,
                None => continue,
            };

            if !local::is_video_file(&file.name()) {
                continue;
            }

            let object_url = Url::create_object_url_with_blob(&file)?;
            let last_modified = Utc.timestamp_millis_opt(file.last_modified() as i64).single();

            self.local_files.push(local::local_record(
                &file.name(),
                file.size() as u64,
                last_modified,
                object_url,
            ));
        }

        Ok(self.local_files.len())
    }

    fn process_update(&mut self, msg: Message) -> Result<bool, JsError> {
        match msg {
            Message::StoreResponse(store::Response::State(state)) => {
                let first_credentials = !self.catalog_requested && state.credentials.any();

                self.state = Some(state);

                if first_credentials {
                    self.pull_home();
                }

                Ok(true)
            }
            Message::FetcherResponse(resp) => match resp {
                fetcher::Response::Section(section, records) => {
                    match section {
                        HomeSection::Trending => self.catalog.trending = records,
                        HomeSection::NewReleases => self.catalog.new_releases = records,
                        HomeSection::TopRated => self.catalog.top_rated = records,
                        HomeSection::Highlights => self.catalog.highlights = records,
                    }
                    self.pending_sections = self.pending_sections.saturating_sub(1);
                    // partial results are held back until every rail settled
                    Ok(self.pending_sections == 0)
                }
                fetcher::Response::SearchResults(records) => {
                    self.search_results = Some(records);
                    self.search_pending = false;
                    Ok(true)
                }
            },
            Message::QueryChange(query) => {
                self.filter_query = query.trim().to_lowercase();
                Ok(true)
            }
            Message::SearchSubmit(query) => {
                let credentials = self
                    .state
                    .as_ref()
                    .map(|state| state.credentials.clone())
                    .unwrap_or_default();

                match plan::validate_search(&credentials, &query) {
                    Ok((api_key, query)) => {
                        self.search_pending = true;
                        self.fetcher.send(fetcher::Request::Search(api_key, query));
                        Ok(true)
                    }
                    Err(text) => {
                        self.notifier
                            .send(notifier::Request::Notify(notifier::Notification::error(
                                text,
                            )));
                        Ok(false)
                    }
                }
            }
            Message::Refresh => {
                self.search_results = None;
                self.pull_home();
                Ok(true)
            }
            Message::OpenSettings => {
                self.settings_open = true;
                Ok(true)
            }
            Message::CloseSettings => {
                self.settings_open = false;
                Ok(true)
            }
            Message::SetTmdbKey(value) => {
                self.store.send(store::Request::SetTmdbKey(value));
                Ok(false)
            }
            Message::SetYoutubeKey(value) => {
                self.store.send(store::Request::SetYoutubeKey(value));
                Ok(false)
            }
            Message::TogglePlatform((platform, enabled)) => {
                self.store
                    .send(store::Request::SetPlatformEnabled(platform, enabled));
                Ok(false)
            }
            Message::SelectFolder => {
                let input = self
                    .folder_input_ref
                    .cast::<HtmlInputElement>()
                    .ok_or("error getting folder input")?;

                match js_sys::Reflect::has(input.as_ref(), &JsValue::from_str("webkitdirectory"))? {
                    true => {
                        input.click();
                        Ok(false)
                    }
                    false => {
                        self.notifier.send(notifier::Request::Notify(
                            notifier::Notification::error(
                                "folder selection is not supported by this browser",
                            ),
                        ));
                        Ok(false)
                    }
                }
            }
            Message::FolderSelected(ev) => {
                let count = self.collect_folder_selection(ev)?;

                self.notifier
                    .send(notifier::Request::Notify(notifier::Notification::info(
                        format!("{} video files loaded", count),
                    )));
                Ok(true)
            }
            Message::Play(record) => {
                match dispatch::dispatch(&record) {
                    DispatchAction::OpenPlayer(record) => {
                        if record.url.is_none() {
                            self.notifier.send(notifier::Request::Notify(
                                notifier::Notification::error(
                                    "this local file is no longer available; select its folder again",
                                ),
                            ));
                            return Ok(false);
                        }

                        self.store
                            .send(store::Request::RecordWatch(record.clone(), 0.0));
                        self.current_video = Some(record);
                    }
                    DispatchAction::OpenTab(url) => {
                        web_sys::window()
                            .ok_or("error getting window")?
                            .open_with_url_and_target(&url, "_blank")?;
                        self.store.send(store::Request::RecordWatch(record, 0.0));
                    }
                }
                Ok(true)
            }
            Message::PlayerProgress(resume_time_seconds) => {
                if let Some(record) = &self.current_video {
                    self.store.send(store::Request::RecordWatch(
                        record.clone(),
                        resume_time_seconds,
                    ));
                }
                Ok(false)
            }
            Message::ClosePlayer => {
                self.current_video = None;
                Ok(true)
            }
        }
    }

    fn view_rail(&self, ctx: &Context<Self>, title: &str, records: Vec<ContentRecord>) -> Html {
        if records.is_empty() {
            return html! {};
        }

        html! {
            <section class="section content-rail">
                <h2 class="title is-4">{title}</h2>
                <div class="columns is-mobile rail-scroll">
                    {records.into_iter().map(|record| html! {
                        <div class="column is-narrow" key={record.id.clone()}>
                            <ContentTile record={record} on_play={ctx.link().callback(Message::Play)}/>
                        </div>
                    }).collect::<Html>()}
                </div>
            </section>
        }
    }

    fn view_search(&self, ctx: &Context<Self>, results: &[ContentRecord]) -> Html {
        match results.is_empty() {
            true => html! {
                <section class="section">
                    <p class="has-text-grey">{"No results found. Try a different title."}</p>
                </section>
            },
            false => self.view_rail(ctx, "Search Results", results.to_vec()),
        }
    }

    fn view_home(&self, ctx: &Context<Self>, state: &store::HubState) -> Html {
        let filter =
            |records: &[ContentRecord]| -> Vec<ContentRecord> {
                records
                    .iter()
                    .filter(|record| {
                        aggregate::is_visible(record, &state.platforms, &self.filter_query)
                    })
                    .cloned()
                    .collect()
            };
        let continue_watching: Vec<ContentRecord> = state
            .continue_watching
            .iter()
            .map(|entry| entry.record.clone())
            .filter(|record| aggregate::is_visible(record, &state.platforms, &self.filter_query))
            .collect();
        let nothing_visible = aggregate::aggregate(
            &self.catalog,
            &self.local_files,
            &state.platforms,
            &self.filter_query,
        )
        .is_empty()
            && filter(&self.catalog.highlights).is_empty();

        html! {
            <>
                {self.view_rail(ctx, "Continue Watching", continue_watching)}
                {self.view_rail(ctx, "Trending Now", filter(&self.catalog.trending))}
                {self.view_rail(ctx, "New Releases", filter(&self.catalog.new_releases))}
                {self.view_rail(ctx, "Top Rated", filter(&self.catalog.top_rated))}
                {self.view_rail(ctx, "YouTube Highlights", filter(&self.catalog.highlights))}
                {self.view_rail(ctx, "Local Files", filter(&self.local_files))}
                {match nothing_visible && !self.filter_query.is_empty() {
                    true => html! {
                        <section class="section">
                            <p class="has-text-grey">{"Nothing matches the current filter."}</p>
                        </section>
                    },
                    false => html! {},
                }}
            </>
        }
    }

    fn view_setup_prompt(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="hero is-medium">
                <div class="hero-body has-text-centered">
                    <p class="title">{"Welcome to your streaming hub"}</p>
                    <p class="subtitle">{"Add an API key or select a local video folder to get started."}</p>
                    <button class="button is-primary" onclick={ctx.link().callback(|_| Message::OpenSettings)}>
                        {"Open Settings"}
                    </button>
                </div>
            </section>
        }
    }
}

impl Component for HomePage {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut store = Store::bridge(ctx.link().callback(Message::StoreResponse));

        store.send(store::Request::GetState);

        Self {
            store,
            fetcher: Fetcher::bridge(ctx.link().callback(Message::FetcherResponse)),
            notifier: Notifier::dispatcher(),
            state: None,
            catalog: HomeCatalog::default(),
            local_files: Vec::new(),
            pending_sections: 0,
            catalog_requested: false,
            filter_query: String::new(),
            search_results: None,
            search_pending: false,
            current_video: None,
            settings_open: false,
            folder_input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match self.process_update(msg) {
            Ok(res) => res,
            Err(e) => {
                self.notifier.send(notifier::Request::NotifyError(e));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = match &self.state {
            Some(state) => state,
            None => {
                return html! {<progress class="progress is-small is-primary">{"loading"}</progress>}
            }
        };
        let loading = self.pending_sections > 0 || self.search_pending;
        let on_refresh = state
            .credentials
            .any()
            .then(|| ctx.link().callback(|_| Message::Refresh));
        let body = match (&self.search_results, state.credentials.any() || !self.local_files.is_empty()) {
            (Some(results), _) => self.view_search(ctx, results),
            (None, true) => self.view_home(ctx, state),
            (None, false) => self.view_setup_prompt(ctx),
        };

        html! {
            <>
                <NavBar
                    on_query_change={ctx.link().callback(Message::QueryChange)}
                    on_search={ctx.link().callback(Message::SearchSubmit)}
                    on_refresh={on_refresh}
                    on_settings={ctx.link().callback(|_| Message::OpenSettings)}
                    loading={loading}
                />
                {body}
                <input
                    type="file"
                    multiple=true
                    webkitdirectory=""
                    style="display: none"
                    ref={self.folder_input_ref.clone()}
                    onchange={ctx.link().callback(Message::FolderSelected)}
                />
                {match self.settings_open {
                    true => html! {
                        <SettingsPanel
                            credentials={state.credentials.clone()}
                            platforms={state.platforms}
                            local_file_count={self.local_files.len()}
                            loading={loading}
                            on_close={ctx.link().callback(|_| Message::CloseSettings)}
                            on_tmdb_key={ctx.link().callback(Message::SetTmdbKey)}
                            on_youtube_key={ctx.link().callback(Message::SetYoutubeKey)}
                            on_toggle_platform={ctx.link().callback(Message::TogglePlatform)}
                            on_select_folder={ctx.link().callback(|_| Message::SelectFolder)}
                            on_load={ctx.link().callback(|_| Message::Refresh)}
                        />
                    },
                    false => html! {},
                }}
                {match &self.current_video {
                    Some(record) => html! {
                        <Player
                            record={record.clone()}
                            on_close={ctx.link().callback(|_| Message::ClosePlayer)}
                            on_progress={ctx.link().callback(Message::PlayerProgress)}
                        />
                    },
                    None => html! {},
                }}
            </>
        }
    }
}

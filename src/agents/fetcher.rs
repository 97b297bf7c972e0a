use crate::{
    catalog::{
        plan::{self, HomeSection, SectionPull},
        tmdb, youtube,
    },
    objects::{ContentRecord, Credentials, JsError, Platform},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashSet;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use yew_agent::{Agent, AgentLink, HandlerId, Public};

/// Records kept per home rail after mapping.
pub const SECTION_CAP: usize = 10;

#[derive(Debug, Serialize, Deserialize)]
pub enum Request {
    /// Fans out one pull per home rail; every rail settles with a
    /// `Response::Section`, immediately and empty when the credential for its
    /// service is absent.
    PullHome(Credentials),
    Search(String, String),
}

#[derive(Debug, Serialize, Deserialize)]
pub enum Response {
    Section(HomeSection, Vec<ContentRecord>),
    SearchResults(Vec<ContentRecord>),
}

#[derive(Debug)]
pub enum Message {
    SectionLoaded(HandlerId, HomeSection, Result<Vec<ContentRecord>, JsError>),
    SearchLoaded(HandlerId, Result<Vec<ContentRecord>, JsError>),
}

pub struct Fetcher {
    link: AgentLink<Self>,
    subscribers: HashSet<HandlerId>,
}

impl Fetcher {
    fn process_update(&mut self, msg: Message) {
        match msg {
            Message::SectionLoaded(handler_id, section, res) => {
                self.link
                    .respond(handler_id, Response::Section(section, settle(res)));
            }
            Message::SearchLoaded(handler_id, res) => {
                self.link
                    .respond(handler_id, Response::SearchResults(settle(res)));
            }
        }
    }

    fn process_handle_input(&mut self, msg: Request, id: HandlerId) {
        match msg {
            Request::PullHome(credentials) => {
                for (section, pull) in plan::plan_home_pull(&credentials) {
                    match pull {
                        SectionPull::Skip => {
                            self.link.respond(id, Response::Section(section, Vec::new()))
                        }
                        SectionPull::Catalog { url, platform } => {
                            self.link.send_future(async move {
                                Message::SectionLoaded(
                                    id,
                                    section,
                                    pull_catalog(&url, platform).await,
                                )
                            })
                        }
                        SectionPull::Highlights { api_key } => {
                            self.link.send_future(async move {
                                Message::SectionLoaded(
                                    id,
                                    section,
                                    pull_highlights(&api_key).await,
                                )
                            })
                        }
                    }
                }
            }
            Request::Search(api_key, query) => {
                let url = tmdb::search_url(&api_key, &query);

                self.link
                    .send_future(async move { Message::SearchLoaded(id, pull_search(&url).await) });
            }
        }
    }
}

impl Agent for Fetcher {
    type Reach = Public<Self>;
    type Message = Message;
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
        }
    }

    fn update(&mut self, msg: Self::Message) {
        self.process_update(msg);
    }

    fn handle_input(&mut self, msg: Self::Input, id: HandlerId) {
        self.process_handle_input(msg, id);
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}

/// Transport and parse failures collapse to an empty sequence; the aggregator
/// treats "service down" the same as "service disabled".
fn settle(res: Result<Vec<ContentRecord>, JsError>) -> Vec<ContentRecord> {
    match res {
        Ok(records) => records,
        Err(e) => {
            log::error!("fetch failed: {}", e);
            Vec::new()
        }
    }
}

async fn pull_catalog(url: &str, platform: Platform) -> Result<Vec<ContentRecord>, JsError> {
    let page: tmdb::CatalogPage = fetch_json(url).await?;
    let mut records: Vec<ContentRecord> = page
        .results
        .iter()
        .map(|entry| tmdb::map_entry(entry, platform))
        .collect();

    records.truncate(SECTION_CAP);
    Ok(records)
}

async fn pull_highlights(api_key: &str) -> Result<Vec<ContentRecord>, JsError> {
    let mut records = Vec::new();

    for query in youtube::HIGHLIGHT_QUERIES {
        let page: youtube::SearchPage =
            fetch_json(&youtube::search_query_url(api_key, query)).await?;

        records.extend(page.items.iter().filter_map(youtube::map_item));
    }

    records.truncate(youtube::HIGHLIGHT_CAP);
    Ok(records)
}

async fn pull_search(url: &str) -> Result<Vec<ContentRecord>, JsError> {
    let page: tmdb::CatalogPage = fetch_json(url).await?;

    Ok(tmdb::map_search_results(&page))
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, JsError> {
    let mut opts = web_sys::RequestInit::new();

    opts.method("GET");

    let request = web_sys::Request::new_with_str_and_init(url, &opts)?;
    let window = web_sys::window().ok_or("error getting window")?;
    let resp: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    if !resp.ok() {
        return Err(
            (&*format!("fetcher error: {}: {}", resp.status(), resp.status_text())).into(),
        );
    }

    JsFuture::from(resp.json()?)
        .await
        .map(|val| serde_wasm_bindgen::from_value(val).map_err(Into::into))?
}

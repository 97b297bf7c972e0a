use super::input_element_from_event;
use crate::agents::notifier::{self, Notifier};
use crate::objects::{Credentials, JsError, Platform, PlatformSelection};
use yew::prelude::*;
use yew_agent::{Dispatched, Dispatcher};

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub credentials: Credentials,
    pub platforms: PlatformSelection,
    pub local_file_count: usize,
    pub loading: bool,
    pub on_close: Callback<()>,
    pub on_tmdb_key: Callback<String>,
    pub on_youtube_key: Callback<String>,
    pub on_toggle_platform: Callback<(Platform, bool)>,
    pub on_select_folder: Callback<()>,
    pub on_load: Callback<()>,
}

pub struct SettingsPanel {
    notifier: Dispatcher<Notifier>,
}

pub enum Message {
    Close,
    TmdbKeyChange(Event),
    YoutubeKeyChange(Event),
    TogglePlatform(Platform, Event),
    SelectFolder,
    Load,
}

impl SettingsPanel {
    fn process_update(&mut self, ctx: &Context<Self>, msg: Message) -> Result<bool, JsError> {
        match msg {
            Message::Close => {
                ctx.props().on_close.emit(());
                Ok(false)
            }
            Message::TmdbKeyChange(ev) => {
                ctx.props()
                    .on_tmdb_key
                    .emit(input_element_from_event(&ev)?.value());
                Ok(false)
            }
            Message::YoutubeKeyChange(ev) => {
                ctx.props()
                    .on_youtube_key
                    .emit(input_element_from_event(&ev)?.value());
                Ok(false)
            }
            Message::TogglePlatform(platform, ev) => {
                ctx.props()
                    .on_toggle_platform
                    .emit((platform, input_element_from_event(&ev)?.checked()));
                Ok(false)
            }
            Message::SelectFolder => {
                ctx.props().on_select_folder.emit(());
                Ok(false)
            }
            Message::Load => {
                ctx.props().on_load.emit(());
                Ok(false)
            }
        }
    }

    fn view_platform_toggles(&self, ctx: &Context<Self>) -> Html {
        let platforms = ctx.props().platforms;

        Platform::selectable()
            .into_iter()
            .map(|platform| {
                html! {
                    <div class="column is-half">
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                checked={platforms.is_enabled(platform)}
                                onchange={ctx.link().callback(move |ev| Message::TogglePlatform(platform, ev))}
                            />
                            {" "}{platform.slug()}
                        </label>
                    </div>
                }
            })
            .collect::<Html>()
    }
}

impl Component for SettingsPanel {
    type Message = Message;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            notifier: Notifier::dispatcher(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match self.process_update(ctx, msg) {
            Ok(res) => res,
            Err(e) => {
                self.notifier.send(notifier::Request::NotifyError(e));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="modal is-active">
                <div class="modal-background" onclick={ctx.link().callback(|_| Message::Close)}></div>
                <div class="modal-card">
                    <header class="modal-card-head">
                        <p class="modal-card-title">{"Settings"}</p>
                        <button class="delete" aria-label="close" onclick={ctx.link().callback(|_| Message::Close)}></button>
                    </header>
                    <section class="modal-card-body">
                        <h3 class="title is-5">{"API Keys"}</h3>
                        <div class="field">
                            <label class="label">
                                {"TMDB API Key (movies/TV shows) "}
                                <a href="https://www.themoviedb.org/settings/api" target="_blank" rel="noopener noreferrer">{"Get free key"}</a>
                            </label>
                            <input
                                class="input"
                                type="password"
                                placeholder="Enter your TMDB API key"
                                value={props.credentials.tmdb_api_key.clone().unwrap_or_default()}
                                onchange={ctx.link().callback(Message::TmdbKeyChange)}
                            />
                        </div>
                        <div class="field">
                            <label class="label">
                                {"YouTube API Key "}
                                <a href="https://console.developers.google.com/" target="_blank" rel="noopener noreferrer">{"Get free key"}</a>
                            </label>
                            <input
                                class="input"
                                type="password"
                                placeholder="Enter your YouTube API key"
                                value={props.credentials.youtube_api_key.clone().unwrap_or_default()}
                                onchange={ctx.link().callback(Message::YoutubeKeyChange)}
                            />
                        </div>
                        {match props.credentials.any() {
                            true => html! {
                                <button class={classes!("button", "is-success", props.loading.then(|| "is-loading"))} onclick={ctx.link().callback(|_| Message::Load)}>
                                    {"Load Content"}
                                </button>
                            },
                            false => html! {},
                        }}
                        <h3 class="title is-5 mt-5">{"Platforms"}</h3>
                        <div class="columns is-multiline is-mobile">
                            {self.view_platform_toggles(ctx)}
                        </div>
                        <h3 class="title is-5">{"Local Files"}</h3>
                        <button class="button is-link" onclick={ctx.link().callback(|_| Message::SelectFolder)}>
                            {"Select Video Folder"}
                        </button>
                        {match props.local_file_count {
                            0 => html! {},
                            count => html! {<p class="help">{format!("{} local files loaded", count)}</p>},
                        }}
                    </section>
                    <footer class="modal-card-foot">
                        <button class="button" onclick={ctx.link().callback(|_| Message::Close)}>{"Close"}</button>
                    </footer>
                </div>
            </div>
        }
    }
}

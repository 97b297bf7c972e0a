use super::{
    icon::{Icon, IconStyle},
    input_element_from_event,
};
use crate::agents::notifier::{self, Notifier};
use crate::objects::{ContentRecord, JsError};
use web_sys::HtmlVideoElement;
use yew::prelude::*;
use yew_agent::{Dispatched, Dispatcher};

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub record: ContentRecord,
    pub on_close: Callback<()>,
    /// Emitted with the current position, at most once per second of playback.
    pub on_progress: Callback<f64>,
}

#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Loading,
    Playing,
    Paused,
}

pub struct Player {
    video_ref: NodeRef,
    phase: Phase,
    duration: f64,
    current_time: f64,
    volume: f64,
    last_nonzero_volume: f64,
    last_reported_second: u64,
    notifier: Dispatcher<Notifier>,
}

pub enum Message {
    CanPlay,
    Play,
    Pause,
    TogglePlayback,
    TimeUpdate,
    LoadedMetadata,
    Seek(Event),
    ToggleMute,
    Fullscreen,
    Close,
}

impl Player {
    fn video_element(&self) -> Result<HtmlVideoElement, JsError> {
        self.video_ref
            .cast::<HtmlVideoElement>()
            .ok_or_else(|| "error getting video element".into())
    }

    fn process_update(&mut self, ctx: &Context<Self>, msg: Message) -> Result<bool, JsError> {
        match msg {
            Message::CanPlay => {
                let _ = self.video_element()?.play();
                Ok(false)
            }
            Message::Play => {
                self.phase = Phase::Playing;
                Ok(true)
            }
            Message::Pause => {
                self.phase = Phase::Paused;
                Ok(true)
            }
            Message::TogglePlayback => {
                let video = self.video_element()?;

                match self.phase {
                    Phase::Playing => video.pause().map_err(Into::into).map(|_| false),
                    _ => {
                        let _ = video.play();
                        Ok(false)
                    }
                }
            }
            Message::TimeUpdate => {
                let video = self.video_element()?;

                self.current_time = video.current_time();

                let second = self.current_time.floor() as u64;

                if second != self.last_reported_second {
                    self.last_reported_second = second;

                    if second % 10 == 0 {
                        ctx.props().on_progress.emit(self.current_time);
                    }
                }

                Ok(true)
            }
            Message::LoadedMetadata => {
                self.duration = self.video_element()?.duration();
                Ok(true)
            }
            Message::Seek(ev) => {
                let position = input_element_from_event(&ev)?.value().parse::<f64>()?;

                self.video_element()?.set_current_time(position);
                self.current_time = position;
                Ok(true)
            }
            Message::ToggleMute => {
                let video = self.video_element()?;

                match self.volume == 0.0 {
                    true => self.volume = self.last_nonzero_volume,
                    false => {
                        self.last_nonzero_volume = self.volume;
                        self.volume = 0.0;
                    }
                }

                video.set_volume(self.volume);
                Ok(true)
            }
            Message::Fullscreen => {
                self.video_element()?.request_fullscreen()?;
                Ok(false)
            }
            Message::Close => {
                ctx.props().on_progress.emit(self.current_time);
                ctx.props().on_close.emit(());
                Ok(false)
            }
        }
    }
}

impl Component for Player {
    type Message = Message;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            video_ref: NodeRef::default(),
            phase: Phase::Loading,
            duration: 0.0,
            current_time: 0.0,
            volume: 1.0,
            last_nonzero_volume: 1.0,
            last_reported_second: u64::MAX,
            notifier: Notifier::dispatcher(),
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Some(video) = self.video_ref.cast::<HtmlVideoElement>() {
                video.set_autoplay(true);
            }
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
        let record = &ctx.props().record;
        let source = record.url.clone().unwrap_or_default();
        let playback_icon = match self.phase {
            Phase::Playing => "pause",
            _ => "play_arrow",
        };
        let volume_icon = match self.volume == 0.0 {
            true => "volume_off",
            false => "volume_up",
        };

        html! {
            <div class="modal is-active player-overlay">
                <div class="modal-background"></div>
                <div class="modal-card is-fullwidth">
                    <header class="modal-card-head">
                        <p class="modal-card-title">{&record.title}</p>
                        <button class="delete" aria-label="close" onclick={ctx.link().callback(|_| Message::Close)}></button>
                    </header>
                    <section class="modal-card-body">
                        <video
                            ref={self.video_ref.clone()}
                            src={source}
                            oncanplay={ctx.link().callback(|_| Message::CanPlay)}
                            onplay={ctx.link().callback(|_| Message::Play)}
                            onpause={ctx.link().callback(|_| Message::Pause)}
                            ontimeupdate={ctx.link().callback(|_| Message::TimeUpdate)}
                            onloadedmetadata={ctx.link().callback(|_| Message::LoadedMetadata)}
                        />
                        {match self.phase {
                            Phase::Loading => html! {<progress class="progress is-small is-primary">{"loading"}</progress>},
                            _ => html! {},
                        }}
                        <div class="level is-mobile">
                            <div class="level-left">
                                <button class="button" onclick={ctx.link().callback(|_| Message::TogglePlayback)}>
                                    <Icon name={playback_icon} style={IconStyle::Filled}/>
                                </button>
                                <button class="button" onclick={ctx.link().callback(|_| Message::ToggleMute)}>
                                    <Icon name={volume_icon} style={IconStyle::Outlined}/>
                                </button>
                            </div>
                            <div class="level-item">
                                <input
                                    class="slider is-fullwidth"
                                    type="range"
                                    min="0"
                                    max={self.duration.to_string()}
                                    step="1"
                                    value={self.current_time.to_string()}
                                    onchange={ctx.link().callback(Message::Seek)}
                                />
                            </div>
                            <div class="level-right">
                                <span>{format!("{} / {}", format_time(self.current_time), format_time(self.duration))}</span>
                                <button class="button" onclick={ctx.link().callback(|_| Message::Fullscreen)}>
                                    <Icon name="fullscreen" style={IconStyle::Outlined}/>
                                </button>
                            </div>
                        </div>
                    </section>
                </div>
            </div>
        }
    }
}

fn format_time(seconds: f64) -> String {
    let total = match seconds.is_finite() && seconds >= 0.0 {
        true => seconds.floor() as u64,
        false => 0,
    };

    format!("{}:{:02}", total / 60, total % 60)
}

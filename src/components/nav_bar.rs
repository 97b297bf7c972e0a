use super::{
    icon::{Icon, IconStyle},
    input_element_from_event,
    router::AppRoute,
};
use crate::agents::notifier::{self, Notifier};
use crate::objects::JsError;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_agent::{Dispatched, Dispatcher};
use yew_router::prelude::Link;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    /// Live client-side filter input.
    #[prop_or_default]
    pub on_query_change: Option<Callback<String>>,
    /// Enter-submitted dedicated search.
    #[prop_or_default]
    pub on_search: Option<Callback<String>>,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
    #[prop_or_default]
    pub on_settings: Option<Callback<()>>,
    #[prop_or_default]
    pub loading: bool,
}

pub struct NavBar {
    menu_expanded: bool,
    search_ref: NodeRef,
    notifier: Dispatcher<Notifier>,
}

pub enum Message {
    ToggleMenu,
    QueryInput(InputEvent),
    SearchKeyDown(KeyboardEvent),
    Refresh,
    Settings,
}

impl NavBar {
    fn search_value(&self) -> Result<String, JsError> {
        self.search_ref
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .ok_or_else(|| "error getting search input".into())
    }

    fn process_update(&mut self, ctx: &Context<Self>, msg: Message) -> Result<bool, JsError> {
        match msg {
            Message::ToggleMenu => {
                self.menu_expanded = !self.menu_expanded;
                Ok(true)
            }
            Message::QueryInput(ev) => {
                if let Some(on_query_change) = &ctx.props().on_query_change {
                    on_query_change.emit(input_element_from_event(&ev)?.value());
                }
                Ok(false)
            }
            Message::SearchKeyDown(ev) => {
                if ev.key() == "Enter" {
                    if let Some(on_search) = &ctx.props().on_search {
                        on_search.emit(self.search_value()?);
                    }
                }
                Ok(false)
            }
            Message::Refresh => {
                if let Some(on_refresh) = &ctx.props().on_refresh {
                    on_refresh.emit(());
                }
                Ok(false)
            }
            Message::Settings => {
                if let Some(on_settings) = &ctx.props().on_settings {
                    on_settings.emit(());
                }
                Ok(false)
            }
        }
    }
}

impl Component for NavBar {
    type Message = Message;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            menu_expanded: false,
            search_ref: NodeRef::default(),
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
        let is_active_class = match self.menu_expanded {
            true => Some("is-active"),
            false => None,
        };

        html! {
            <nav class="navbar is-black" role="navigation">
                <div class="navbar-brand">
                    <div class="navbar-item title">{"Kinsfolk Streaming Hub"}</div>
                    <a role="button" onclick={ctx.link().callback(|_| Message::ToggleMenu)} class={classes!("navbar-burger", is_active_class)} aria-label="menu" aria-expanded="false" data-target="navbarMenu">
                        <span aria-hidden="true"></span>
                        <span aria-hidden="true"></span>
                        <span aria-hidden="true"></span>
                    </a>
                </div>
                <div id="navbarMenu" class={classes!("navbar-menu", is_active_class)}>
                    <div class="navbar-start">
                        <Link<AppRoute> classes={"navbar-item"} to={AppRoute::Home}>{"Home"}</Link<AppRoute>>
                        <Link<AppRoute> classes={"navbar-item"} to={AppRoute::Stats}>{"Stats"}</Link<AppRoute>>
                        {match &props.on_refresh {
                            Some(_) => html! {
                                <div class="navbar-item">
                                    <button class={classes!("button", "is-small", props.loading.then(|| "is-loading"))} onclick={ctx.link().callback(|_| Message::Refresh)}>
                                        <Icon name="refresh" style={IconStyle::Outlined}/>
                                        <span>{"Refresh"}</span>
                                    </button>
                                </div>
                            },
                            None => html! {},
                        }}
                    </div>
                    <div class="navbar-end">
                        {match &props.on_search {
                            Some(_) => html! {
                                <div class="navbar-item">
                                    <input
                                        class="input"
                                        type="text"
                                        placeholder="Search and press Enter..."
                                        ref={self.search_ref.clone()}
                                        oninput={ctx.link().callback(Message::QueryInput)}
                                        onkeydown={ctx.link().callback(Message::SearchKeyDown)}
                                    />
                                </div>
                            },
                            None => html! {},
                        }}
                        {match &props.on_settings {
                            Some(_) => html! {
                                <div class="navbar-item">
                                    <button class="button is-small" onclick={ctx.link().callback(|_| Message::Settings)}>
                                        <Icon name="settings" style={IconStyle::Outlined}/>
                                    </button>
                                </div>
                            },
                            None => html! {},
                        }}
                    </div>
                </div>
            </nav>
        }
    }
}

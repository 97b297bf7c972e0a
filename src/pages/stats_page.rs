use crate::agents::store::{self, Store};
use crate::components::nav_bar::NavBar;
use yew::prelude::*;
use yew_agent::{Bridge, Bridged};

pub struct StatsPage {
    _store: Box<dyn Bridge<Store>>,
    state: Option<store::HubState>,
}

pub enum Message {
    StoreResponse(store::Response),
}

impl Component for StatsPage {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut store = Store::bridge(ctx.link().callback(Message::StoreResponse));

        store.send(store::Request::GetState);

        Self {
            _store: store,
            state: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::StoreResponse(store::Response::State(state)) => {
                self.state = Some(state);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let state = match &self.state {
            Some(state) => state,
            None => {
                return html! {<progress class="progress is-small is-primary">{"loading"}</progress>}
            }
        };

        html! {
            <>
                <NavBar/>
                <section class="section">
                    <h1 class="title">{"Viewing Stats"}</h1>
                    <div class="columns">
                        <div class="column">
                            <div class="box has-text-centered">
                                <p class="heading">{"Total Hours"}</p>
                                <p class="title">{format!("{:.1}", state.stats.total_hours)}</p>
                            </div>
                        </div>
                        <div class="column">
                            <div class="box has-text-centered">
                                <p class="heading">{"Continue Watching"}</p>
                                <p class="title">{state.continue_watching.len()}</p>
                            </div>
                        </div>
                        <div class="column">
                            <div class="box has-text-centered">
                                <p class="heading">{"Recent Watches"}</p>
                                <p class="title">{state.stats.recent_watches.len()}</p>
                            </div>
                        </div>
                    </div>
                    <h2 class="title is-4">{"Recently Watched"}</h2>
                    {match state.stats.recent_watches.is_empty() {
                        true => html! {<p class="has-text-grey">{"Nothing watched yet."}</p>},
                        false => html! {
                            <table class="table is-fullwidth is-striped">
                                <thead>
                                    <tr>
                                        <th>{"Title"}</th>
                                        <th>{"Platform"}</th>
                                        <th>{"Watched"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {state.stats.recent_watches.iter().map(|watch| html! {
                                        <tr>
                                            <td>{&watch.title}</td>
                                            <td><span class={classes!("tag", watch.platform.theme_class())}>{watch.platform.slug()}</span></td>
                                            <td>{watch.watched_at.format("%Y-%m-%d %H:%M").to_string()}</td>
                                        </tr>
                                    }).collect::<Html>()}
                                </tbody>
                            </table>
                        },
                    }}
                </section>
            </>
        }
    }
}

use crate::pages::{HomePage, StatsPage};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Routable, Clone, PartialEq)]
pub enum AppRoute {
    #[at("/stats")]
    Stats,
    #[not_found]
    #[at("/")]
    Home,
}

pub struct Router {}
pub enum Message {}

impl Component for Router {
    type Message = Message;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn update(&mut self, _ctx: &Context<Self>, _msg: Self::Message) -> bool {
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <Switch<AppRoute> render={Switch::render(switch)} />
        }
    }
}

fn switch(route: &AppRoute) -> Html {
    match route {
        AppRoute::Home => html! {<HomePage/>},
        AppRoute::Stats => html! {<StatsPage/>},
    }
}

use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum IconStyle {
    Filled,
    Outlined,
}

#[derive(Clone, PartialEq, Properties)]
pub struct IconProperties {
    pub name: String,
    #[prop_or(IconStyle::Outlined)]
    pub style: IconStyle,
}

pub struct Icon {}
pub enum Message {}

impl Component for Icon {
    type Message = Message;
    type Properties = IconProperties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn update(&mut self, _ctx: &Context<Self>, _msg: Self::Message) -> bool {
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        match props.style {
            IconStyle::Filled => {
                html! {<span class="icon"><span class="material-icons">{&props.name}</span></span>}
            }
            IconStyle::Outlined => {
                html! {<span class="icon"><span class="material-icons-outlined">{&props.name}</span></span>}
            }
        }
    }
}

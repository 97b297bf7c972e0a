use super::icon::{Icon, IconStyle};
use crate::objects::{ContentRecord, Platform};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub record: ContentRecord,
    pub on_play: Callback<ContentRecord>,
}

pub struct ContentTile {}

pub enum Message {
    Play,
}

impl Component for ContentTile {
    type Message = Message;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Play => {
                ctx.props().on_play.emit(ctx.props().record.clone());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let record = &ctx.props().record;

        html! {
            <div class="card content-tile" onclick={ctx.link().callback(|_| Message::Play)}>
                <div class="card-image">
                    <figure class="image is-2by3">
                        <img src={record.image.clone()} alt={record.title.clone()} loading="lazy"/>
                    </figure>
                </div>
                <div class="card-content">
                    <p class="title is-6">{&record.title}</p>
                    <div class="level is-mobile">
                        <div class="level-left">
                            <span class={classes!("tag", record.platform.theme_class())}>{record.platform.slug()}</span>
                        </div>
                        <div class="level-right">
                            <span class="icon-text">
                                <Icon name="star" style={IconStyle::Filled}/>
                                <span>{&record.rating}</span>
                            </span>
                        </div>
                    </div>
                    <p class="is-size-7 has-text-grey">{format!("{} • {}", record.genre, record.year_label())}</p>
                    {match record.size {
                        Some(size) => html! {<p class="is-size-7 has-text-grey-light">{format_file_size(size)}</p>},
                        None => html! {},
                    }}
                    {match &record.channel_title {
                        Some(channel_title) => html! {<p class="is-size-7 has-text-grey-light">{channel_title}</p>},
                        None => html! {},
                    }}
                    {match record.platform {
                        Platform::Local => html! {},
                        _ => html! {<span class="icon is-small external-hint"><Icon name="open_in_new" style={IconStyle::Outlined}/></span>},
                    }}
                </div>
            </div>
        }
    }
}

fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return String::from("0 Byte");
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    format!("{} {}", (value * 100.0).round() / 100.0, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::format_file_size;

    #[test]
    fn sizes_are_scaled_to_the_nearest_unit() {
        assert_eq!(format_file_size(0), "0 Byte");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(3_221_225_472), "3 GB");
    }
}

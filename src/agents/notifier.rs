use crate::objects::JsError;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use yew_agent::{Agent, AgentLink, HandlerId, Public};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NotificationSeverity {
    Error,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
    pub severity: NotificationSeverity,
}

impl Notification {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: NotificationSeverity::Error,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: NotificationSeverity::Info,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub enum Request {
    Notify(Notification),
    NotifyError(JsError),
    Dismiss,
}

#[derive(Debug, Serialize, Deserialize)]
pub enum Response {
    Notification(Option<Notification>),
}

/// Queue of user-facing notices; subscribers always see the oldest
/// undismissed one.
pub struct Notifier {
    link: AgentLink<Self>,
    subscribers: HashSet<HandlerId>,
    notifications: VecDeque<Notification>,
}

impl Notifier {
    fn notify_subscribed(&self) {
        for subscriber in &self.subscribers {
            if subscriber.is_respondable() {
                self.link.respond(
                    *subscriber,
                    Response::Notification(self.notifications.front().cloned()),
                );
            }
        }
    }
}

impl Agent for Notifier {
    type Reach = Public<Self>;
    type Message = ();
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
            notifications: VecDeque::new(),
        }
    }

    fn update(&mut self, _msg: Self::Message) {}

    fn handle_input(&mut self, msg: Self::Input, _id: HandlerId) {
        match msg {
            Request::Notify(notification) => {
                match notification.severity {
                    NotificationSeverity::Error => log::error!("{}", notification.text),
                    NotificationSeverity::Info => log::info!("{}", notification.text),
                }
                self.notifications.push_back(notification);
            }
            Request::NotifyError(err) => {
                log::error!("{}", err);
                self.notifications
                    .push_back(Notification::error(err.description));
            }
            Request::Dismiss => {
                self.notifications.pop_front();
            }
        }
        self.notify_subscribed();
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
        self.notify_subscribed();
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}

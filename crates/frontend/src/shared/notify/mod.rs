//! Notification tray: the visible surfacing layer for fetch/mutation
//! failures and save confirmations.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::shared::icons::icon;

const DISMISS_AFTER_MS: u32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub level: Level,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(Level::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Level::Error, message.into());
    }

    fn push(&self, level: Level, message: String) {
        let id = Uuid::new_v4();
        let items = self.items;
        items.update(|list| {
            list.push(Notification { id, level, message });
        });
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            let _ = items.try_update(|list| list.retain(|n| n.id != id));
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|list| list.retain(|n| n.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

#[component]
pub fn NotificationTray() -> impl IntoView {
    let service = use_notifications();
    let items = service.items;

    view! {
        <div class="notification-tray">
            <For
                each=move || items.get()
                key=|notification| notification.id
                children=move |notification| {
                    let id = notification.id;
                    let level_class = match notification.level {
                        Level::Info => "notification notification--info",
                        Level::Error => "notification notification--error",
                    };
                    view! {
                        <div class=level_class>
                            <span class="notification__message">{notification.message}</span>
                            <button
                                class="notification__close"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

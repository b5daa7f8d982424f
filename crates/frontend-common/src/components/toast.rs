//! Transient notifications shown in the top-right corner

use gloo::timers::callback::Timeout;
use prescripto_core::{Notification, NotificationKind};
use std::rc::Rc;
use yew::prelude::*;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Upper bound on toasts kept at once; the oldest is dropped first
pub const MAX_TOASTS: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notification: Notification,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

pub enum ToastAction {
    Push(Notification),
    Dismiss(u32),
}

pub type ToastContext = UseReducerHandle<ToastState>;

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(notification) => {
                let mut toasts = self.toasts.clone();
                toasts.push(Toast {
                    id: self.next_id,
                    notification,
                });
                if toasts.len() > MAX_TOASTS {
                    toasts.remove(0);
                }

                Rc::new(Self {
                    toasts,
                    next_id: self.next_id.wrapping_add(1),
                })
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|toast| toast.id == id) {
                    return self;
                }

                Rc::new(Self {
                    toasts: self
                        .toasts
                        .iter()
                        .filter(|toast| toast.id != id)
                        .cloned()
                        .collect(),
                    next_id: self.next_id,
                })
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastState::default);

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastContext> context={toasts.clone()}>
            {props.children.clone()}
            <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-80">
                { for toasts.toasts.iter().map(|toast| html! {
                    <ToastItem
                        key={toast.id.to_string()}
                        toast={toast.clone()}
                        on_dismiss={on_dismiss.clone()}
                    />
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            let handle = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
            move || drop(handle)
        });
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let tone = match props.toast.notification.kind {
        NotificationKind::Success => "bg-green-50 border-green-300 text-green-800",
        NotificationKind::Error => "bg-red-50 border-red-300 text-red-800",
    };

    html! {
        <div role="status" class={classes!("flex", "items-start", "gap-3", "border", "rounded-lg", "shadow-md", "p-3", "text-sm", tone)}>
            <p class="flex-1 m-0">{&props.toast.notification.message}</p>
            <button type="button" class="opacity-60 hover:opacity-100" aria-label="Dismiss" {onclick}>
                {"×"}
            </button>
        </div>
    }
}

/// Hook to access the toast queue
#[hook]
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>()
        .expect("ToastContext not found. Make sure to wrap your app with ToastProvider")
}

//! Admin and doctor login view

use prescripto_core::{LoginError, LoginForm, LoginOutcome, Notification};
use prescripto_frontend_common::{
    SessionContext, Spinner, ToastAction, complete_login, use_app_context, use_toasts,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Default)]
struct FormState {
    form: LoginForm,
}

enum FormAction {
    Email(String),
    Password(String),
    ToggleRole,
    /// Adopt a form that has already accepted a submission
    Submitting(LoginForm),
    FinishSubmit,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.form.clone();

        match action {
            FormAction::Email(email) => form.set_email(email),
            FormAction::Password(password) => form.set_password(password),
            FormAction::ToggleRole => {
                if let Err(err) = form.toggle_role() {
                    tracing::debug!(%err, "Role toggle ignored");
                }
            }
            FormAction::Submitting(submitted) => {
                if form.is_submitting() {
                    tracing::debug!("Submit ignored while a request is in flight");
                } else {
                    form = submitted;
                }
            }
            FormAction::FinishSubmit => form.finish_submit(),
        }

        Rc::new(Self { form })
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    /// Session that receives the issued token
    pub session: SessionContext,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let app = use_app_context();
    let toasts = use_toasts();
    let state = use_reducer(FormState::default);
    // Set before the request is spawned, cleared when it settles
    let in_flight = use_mut_ref(|| false);

    let on_email_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FormAction::Email(input.value()));
        })
    };

    let on_password_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FormAction::Password(input.value()));
        })
    };

    let on_toggle_role = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(FormAction::ToggleRole))
    };

    let on_submit = {
        let state = state.clone();
        let session = props.session.clone();
        let toasts = toasts.clone();
        let app = app.clone();
        let in_flight = in_flight.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *in_flight.borrow() {
                return;
            }

            let mut draft = state.form.clone();
            let credentials = match draft.begin_submit() {
                Ok(credentials) => credentials,
                Err(LoginError::Busy) => return,
                Err(err) => {
                    toasts.dispatch(ToastAction::Push(Notification::error(err.to_string())));
                    return;
                }
            };

            let Some(client) = app.client().cloned() else {
                toasts.dispatch(ToastAction::Push(LoginOutcome::failed(None).notification()));
                return;
            };

            let role = draft.role();
            *in_flight.borrow_mut() = true;
            state.dispatch(FormAction::Submitting(draft));

            let state = state.clone();
            let session = session.clone();
            let toasts = toasts.clone();
            let in_flight = in_flight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = client.authenticate(role, &credentials).await;
                let notification = complete_login(&session, &outcome);
                toasts.dispatch(ToastAction::Push(notification));
                *in_flight.borrow_mut() = false;
                state.dispatch(FormAction::FinishSubmit);
            });
        })
    };

    let form = &state.form;
    let role = form.role();
    let is_submitting = form.is_submitting();

    html! {
        <form onsubmit={on_submit} class="min-h-[80vh] flex items-center">
            <div class="flex flex-col gap-3 m-auto items-start p-8 min-w-[340px] sm:min-w-96 border rounded-xl text-[#5E5E5E] text-sm shadow-lg">
                <p class="text-2xl font-semibold m-auto">
                    <span class="text-primary">{role.label()}</span>{" Login"}
                </p>

                <div class="w-full">
                    <label for="email" class="block mb-1">{"Email"}</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        class="border border-[#DADADA] rounded w-full p-2"
                        autocomplete="email"
                        required={true}
                        value={form.email().to_string()}
                        oninput={on_email_input}
                        disabled={is_submitting}
                    />
                </div>

                <div class="w-full">
                    <label for="password" class="block mb-1">{"Password"}</label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        class="border border-[#DADADA] rounded w-full p-2"
                        autocomplete="current-password"
                        required={true}
                        value={form.password().to_string()}
                        oninput={on_password_input}
                        disabled={is_submitting}
                    />
                </div>

                <button
                    type="submit"
                    class="bg-primary text-white w-full py-2 rounded-md text-base disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled={is_submitting}
                >
                    if is_submitting {
                        <Spinner text={Some("Logging in...".to_string())} />
                    } else {
                        {"Login"}
                    }
                </button>

                <p class="text-center w-full">
                    {format!("{} Login? ", role.toggle().label())}
                    <button
                        type="button"
                        class="text-primary underline cursor-pointer"
                        onclick={on_toggle_role}
                        disabled={is_submitting}
                    >
                        {"Click here"}
                    </button>
                </p>
            </div>
        </form>
    }
}

//! Landing view for a signed-in admin or doctor

use prescripto_core::Role;
use prescripto_frontend_common::{
    SessionContext, ToastAction, complete_logout, use_app_context, use_toasts,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub session: SessionContext,
    pub role: Role,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let app = use_app_context();
    let toasts = use_toasts();
    let role = props.role;

    let on_logout = {
        let session = props.session.clone();
        Callback::from(move |_: MouseEvent| {
            let notification = complete_logout(&session, role);
            toasts.dispatch(ToastAction::Push(notification));
        })
    };

    html! {
        <div class="min-h-screen bg-[#F8F9FD]">
            <div class="flex justify-between items-center px-4 sm:px-10 py-3 border-b bg-white">
                <div class="flex items-center gap-2 text-xs">
                    <span class="text-lg font-semibold text-primary">{"Prescripto"}</span>
                    <span class="border px-2.5 py-0.5 rounded-full border-gray-500 text-gray-600">
                        {role.label()}
                    </span>
                </div>
                <button
                    onclick={on_logout}
                    class="bg-primary text-white text-sm px-10 py-2 rounded-full"
                >
                    {"Logout"}
                </button>
            </div>

            <div class="m-5 bg-white border rounded p-6 max-w-xl text-sm text-gray-600 space-y-2">
                <p class="text-xl font-medium text-gray-800">{format!("{role} Dashboard")}</p>
                <p>{"Connected to "}<span class="font-mono">{app.backend_url().to_string()}</span></p>
                <p>{format!("Fees are shown in {}", app.currency())}</p>
            </div>
        </div>
    }
}

//! Application context provider component

use super::context::AppContext;
use prescripto_core::AppConfig;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AppContextProviderProps {
    /// Configuration to use instead of loading it
    #[prop_or_default]
    pub config: Option<AppConfig>,
    pub children: Children,
}

#[function_component(AppContextProvider)]
pub fn app_context_provider(props: &AppContextProviderProps) -> Html {
    let context = {
        let config = props.config.clone();
        use_state(move || AppContext::new(config.unwrap_or_else(load_config)))
    };

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            { props.children.clone() }
        </ContextProvider<AppContext>>
    }
}

fn load_config() -> AppConfig {
    AppConfig::load().unwrap_or_else(|err| {
        tracing::error!(%err, "Invalid configuration, falling back to defaults");
        AppConfig::default()
    })
}

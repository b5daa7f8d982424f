mod app;
mod pages;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    prescripto_frontend_common::init_logging();
    yew::Renderer::<App>::new().render();
}

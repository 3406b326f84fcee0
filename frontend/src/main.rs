use yew::prelude::*;
mod components;
use components::{Layout, Pokedex};

#[function_component]
fn App() -> Html {
    html! {
        <Layout>
            <Pokedex />
        </Layout>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

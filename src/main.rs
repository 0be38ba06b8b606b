use map_compare::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}

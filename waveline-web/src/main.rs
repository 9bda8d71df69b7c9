use waveline_web::App;

fn main() {
    dioxus::launch(App);
}

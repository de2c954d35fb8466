use maud::{Markup, html};

pub fn render(message: &str, retry_path: &str) -> Markup {
    let content = html! {
        h1 { "Something went wrong" }
        p { (message) }
        p { a href=(retry_path) { "Start again" } }
    };

    super::page("Quiz Error", content)
}

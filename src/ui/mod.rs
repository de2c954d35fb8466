//! HTML pages, rendered with maud.

mod error;
mod quiz;
mod result;
mod welcome;

use maud::{DOCTYPE, Markup, PreEscaped, html};

pub use error::render as render_error;
pub use quiz::render as render_quiz;
pub use result::render as render_result;
pub use welcome::render as render_welcome;

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 44rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
h1 { color: #1f6feb; }
.question { border-bottom: 1px solid #ddd; padding: 1rem 0; }
.progress, .muted { color: #777; }
.option { display: block; margin: 0.3rem 0; }
.grade-a { color: #1a7f37; } .grade-b { color: #0a7ea4; }
.grade-c { color: #9a6700; } .grade-d { color: #cf222e; }
"#;

fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                main { (content) }
            }
        }
    }
}

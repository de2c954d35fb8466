use maud::{Markup, html};

use crate::models::Topic;
use crate::quiz::TopicStage;

pub fn render(stages: &[(Topic, TopicStage)], total_questions: usize) -> Markup {
    let content = html! {
        h1 { "WEB QUIZ" }
        p.muted { (total_questions) " questions · " (stages.len()) " topics" }
        ul {
            @for (topic, stage) in stages {
                li { (topic.title()) " " span.muted { "(" (stage.label()) ")" } }
            }
        }
        p {
            a href=(Topic::ALL[0].path()) { "Start the quiz" }
        }
    };

    super::page("Web Quiz", content)
}

use maud::{Markup, html};

use crate::quiz::{RenderPayload, RenderedQuestion};

const OPTION_LABELS: [&str; 4] = ["A", "B", "C", "D"];

pub fn render(payload: &RenderPayload) -> Markup {
    let total = payload.questions.len();
    let content = html! {
        h1 { (payload.topic.title()) }
        form method="post" action=(payload.topic.path()) {
            @for (index, question) in payload.questions.iter().enumerate() {
                (render_question(question, index + 1, total))
            }
            button type="submit" { "Submit answers" }
        }
    };

    super::page(payload.topic.title(), content)
}

fn render_question(question: &RenderedQuestion, number: usize, total: usize) -> Markup {
    html! {
        fieldset.question {
            p.progress { (number) "/" (total) }
            legend { strong { (question.text) } }
            @for (index, option) in question.options.iter().enumerate() {
                @let input_id = format!("{}_{}", question.id, index);
                label.option for=(input_id) {
                    input type="radio" id=(input_id) name=(question.id) value=(option);
                    " " (OPTION_LABELS.get(index).copied().unwrap_or("")) ". " (option)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Topic;

    #[test]
    fn test_radio_names_are_question_ids() {
        let payload = RenderPayload {
            topic: Topic::Math,
            questions: vec![RenderedQuestion {
                id: "math_1".to_string(),
                text: "Is {1} < {2}?".to_string(),
                options: vec!["True".to_string(), "False".to_string()],
            }],
        };

        let html = render(&payload).into_string();
        assert!(html.contains(r#"name="math_1""#));
        assert!(html.contains(r#"value="True""#));
        assert!(html.contains(r#"action="/quiz/math/""#));
        assert!(html.contains("Is {1} &lt; {2}?"));
    }
}

use maud::{Markup, html};

use crate::models::{QuestionBanks, Topic};
use crate::quiz::QuizResult;

pub fn render(result: &QuizResult, banks: &QuestionBanks) -> Markup {
    let grade_class = get_grade_class(result.percentage_score);

    let content = html! {
        h1 { "RESULTS" }
        p class=(grade_class) {
            strong {
                (result.total_score) " / " (result.total_questions)
                "  (" (format!("{:.1}%", result.percentage_score)) ")"
            }
        }
        ul {
            @for topic in Topic::ALL {
                li {
                    (topic.title()) ": " (result.score(topic)) " / " (banks.get(topic).len())
                    @if result.skipped.contains(&topic) {
                        " " span.muted { "(not taken)" }
                    }
                }
            }
        }
        p { a href="/" { "Back to start" } }
    };

    super::page("Quiz Results", content)
}

fn get_grade_class(percentage: f64) -> &'static str {
    match percentage as u32 {
        90..=100 => "grade-a",
        70..=89 => "grade-b",
        50..=69 => "grade-c",
        _ => "grade-d",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_class() {
        assert_eq!(get_grade_class(100.0), "grade-a");
        assert_eq!(get_grade_class(70.0), "grade-b");
        assert_eq!(get_grade_class(50.0), "grade-c");
        assert_eq!(get_grade_class(0.0), "grade-d");
    }
}

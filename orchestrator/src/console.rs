use crate::models::AgentResponse;
use std::fmt::Display;

pub fn format_agent_response(name: &str, content: &str) -> String {
    format!("# {}\n{}", name, content)
}

/// Default response callback: one header line with the agent name, then its reply.
pub fn print_agent_response(response: &AgentResponse) {
    println!("{}", format_agent_response(&response.name, &response.content));
}

pub fn format_final_report(task: &str, value: &str) -> String {
    format!(
        "\n****** Task Input ******\n{}\n***** Final Result *****\n{}",
        task, value
    )
}

pub fn format_failure(err: &impl Display) -> String {
    format!("Error invoking orchestration: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrchestratorError;

    #[test]
    fn agent_response_is_header_then_content() {
        assert_eq!(
            format_agent_response("ClassifierAgent", "Negative"),
            "# ClassifierAgent\nNegative"
        );
    }

    #[test]
    fn agent_response_keeps_arbitrary_text_verbatim() {
        let cases = [
            ("", ""),
            ("Agent With Spaces", "line one\nline two"),
            ("ÄgentØ", "  # not a header  "),
        ];
        for (name, content) in cases {
            let rendered = format_agent_response(name, content);
            assert_eq!(rendered, format!("# {}\n{}", name, content));
            assert!(rendered.starts_with("# "));
        }
    }

    #[test]
    fn final_report_echoes_task_and_result() {
        assert_eq!(
            format_final_report("app froze", "Escalate."),
            "\n****** Task Input ******\napp froze\n***** Final Result *****\nEscalate."
        );
    }

    #[test]
    fn failure_message_carries_error() {
        assert_eq!(
            format_failure(&OrchestratorError::NoAgents),
            "Error invoking orchestration: Orchestration has no member agents"
        );
    }
}

pub const CHAT: &str = include_str!("../data/prompts/chat.txt");
pub const VOICE_REPLY: &str = include_str!("../data/prompts/voice_reply.txt");
pub const TRANSCRIBE: &str = include_str!("../data/prompts/transcribe.txt");
pub const DESCRIBE_VIDEO: &str = include_str!("../data/prompts/describe_video.txt");

/// Replace `{{key}}` placeholders in a template string.
///
/// Substituted values are never rescanned, so a user message containing
/// `{{persona}}` stays literal.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        let key = &rest[start + 2..start + 2 + len];
        result.push_str(&rest[..start]);
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&rest[start..start + len + 4]),
        }
        rest = &rest[start + len + 4..];
    }

    result.push_str(rest);
    result
}

/// Persona-framed prompt for a typed question.
pub fn chat(persona: &str, question: &str) -> String {
    render(CHAT, &[("persona", persona), ("question", question)])
}

/// Persona-framed prompt for a transcribed voice question.
pub fn voice_reply(persona: &str, transcription: &str) -> String {
    render(
        VOICE_REPLY,
        &[("persona", persona), ("question", transcription)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(render("Hello {{name}}!", &[("name", "world")]), "Hello world!");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(render("{{a}} {{b}}", &[("a", "x")]), "x {{b}}");
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        assert_eq!(
            render("{{persona}}|{{question}}", &[("persona", "P"), ("question", "{{persona}}")]),
            "P|{{persona}}"
        );
    }

    #[test]
    fn test_render_unterminated_placeholder() {
        assert_eq!(render("a {{b", &[("b", "x")]), "a {{b");
    }

    #[test]
    fn test_chat_prompt_layout() {
        let prompt = chat("PERSONA", "Where did you study?");
        assert!(prompt.starts_with("PERSONA\n\nUser question: Where did you study?\n\n"));
        assert!(prompt.ends_with("if the question is not related to the resume."));
    }

    #[test]
    fn test_voice_reply_has_no_refusal_reminder() {
        let prompt = voice_reply("PERSONA", "hello");
        assert_eq!(
            prompt,
            "PERSONA\n\nUser question: hello\n\nProvide a helpful response based on the resume information above."
        );
    }

    #[test]
    fn test_instructions_are_exact() {
        assert_eq!(
            TRANSCRIBE,
            "Transcribe this audio accurately. Provide only the transcription text, nothing else."
        );
        assert_eq!(
            DESCRIBE_VIDEO,
            "Describe this video and only give the description and nothing else"
        );
    }
}

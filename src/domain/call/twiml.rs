//! Speech-response document (TwiML) for outbound calls

/// Voice used for every `<Say>` verb
pub const VOICE: &str = "Polly.Joanna";
pub const LANGUAGE: &str = "en-US";
/// Seconds of silence between the message and the closing line
pub const PAUSE_SECONDS: u32 = 2;
pub const CLOSING_LINE: &str =
    "If you need to speak with someone, please call us back. Goodbye!";

/// Escape the five XML special characters in a single left-to-right pass.
///
/// Not idempotent: escaping `&lt;` again yields `&amp;lt;`.
pub fn escape_xml(unsafe_text: &str) -> String {
    let mut escaped = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Document that speaks a message, pauses, then speaks a fixed goodbye
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechDocument {
    message: String,
}

impl SpeechDocument {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Response>
  <Say voice="{voice}" language="{language}">{message}</Say>
  <Pause length="{pause}"/>
  <Say voice="{voice}" language="{language}">{closing}</Say>
</Response>"#,
            voice = VOICE,
            language = LANGUAGE,
            message = escape_xml(&self.message),
            pause = PAUSE_SECONDS,
            closing = CLOSING_LINE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECIALS: [char; 5] = ['<', '>', '&', '\'', '"'];

    #[test]
    fn test_escape_each_character() {
        assert_eq!(escape_xml("<"), "&lt;");
        assert_eq!(escape_xml(">"), "&gt;");
        assert_eq!(escape_xml("&"), "&amp;");
        assert_eq!(escape_xml("'"), "&apos;");
        assert_eq!(escape_xml("\""), "&quot;");
    }

    #[test]
    fn test_escape_mixed_text() {
        assert_eq!(
            escape_xml(r#"Tom & Jerry's "<show>""#),
            "Tom &amp; Jerry&apos;s &quot;&lt;show&gt;&quot;"
        );
        assert_eq!(escape_xml("héllo → wörld"), "héllo → wörld");
        assert_eq!(escape_xml(""), "");
    }

    #[test]
    fn test_escaped_output_has_no_raw_specials() {
        let inputs = [
            "a<b>c",
            "&&&&",
            r#"say "hi" & 'bye'"#,
            "<Say>injected</Say>",
            "x > y && y < z",
        ];
        for input in inputs {
            let escaped = escape_xml(input);
            // Every '&' left in the output starts an entity we produced
            let without_entities = escaped
                .replace("&lt;", "")
                .replace("&gt;", "")
                .replace("&amp;", "")
                .replace("&apos;", "")
                .replace("&quot;", "");
            assert!(
                !without_entities.contains(&SPECIALS[..]),
                "raw special character left in {escaped:?}"
            );
        }
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        let once = escape_xml("<");
        assert_eq!(once, "&lt;");
        assert_eq!(escape_xml(&once), "&amp;lt;");
        assert_ne!(escape_xml(&once), once);
    }

    #[test]
    fn test_escape_length_relationship() {
        for input in ["plain text", "", "123 Main St."] {
            assert_eq!(escape_xml(input).len(), input.len());
        }
        for input in ["a & b", "<", "it's", "\"quoted\""] {
            assert!(escape_xml(input).len() > input.len());
        }
    }

    #[test]
    fn test_render_document() {
        let doc = SpeechDocument::new("Your appointment is at 3 & 4 <pm>").render();
        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<Response>
  <Say voice="Polly.Joanna" language="en-US">Your appointment is at 3 &amp; 4 &lt;pm&gt;</Say>
  <Pause length="2"/>
  <Say voice="Polly.Joanna" language="en-US">If you need to speak with someone, please call us back. Goodbye!</Say>
</Response>"#;
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_render_escapes_message_once() {
        let doc = SpeechDocument::new("&lt;").render();
        assert!(doc.contains(">&amp;lt;</Say>"));
        assert!(!doc.contains("&amp;amp;"));
    }
}

use async_trait::async_trait;

/// Optional synopsis collaborator. Implementations swallow their own
/// failures; `None` always reads as "no suggestion available", never as an
/// error the caller should handle.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Option<String>;
}

/// A generator that never suggests anything, for hosts running without a
/// text-generation collaborator wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSuggestions;

#[async_trait]
impl TextGenerator for NoSuggestions {
    async fn generate(&self, _prompt: &str) -> Option<String> {
        None
    }
}

/// Prompt for a two-sentence synopsis in the product's voice.
pub fn synopsis_prompt(title: &str, genre: &str) -> String {
    format!(
        "Write a captivating, 2-sentence plot summary for a movie titled \"{title}\" \
         with genre \"{genre}\". Style: Premium streaming service."
    )
}

/// Ask the collaborator to draft a synopsis for the metadata editor. An
/// entry with no title yet gets no suggestion.
pub async fn suggest_synopsis(
    generator: &dyn TextGenerator,
    title: &str,
    genre: &str,
) -> Option<String> {
    if title.is_empty() {
        return None;
    }
    generator.generate(&synopsis_prompt(title, genre)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, _prompt: &str) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[test]
    fn prompt_carries_title_and_genre() {
        let prompt = synopsis_prompt("Static Horizon", "SciFi Epic");
        assert!(prompt.contains("\"Static Horizon\""));
        assert!(prompt.contains("\"SciFi Epic\""));
        assert!(prompt.contains("2-sentence"));
        assert!(prompt.ends_with("Style: Premium streaming service."));
    }

    #[tokio::test]
    async fn blank_titles_get_no_suggestion() {
        let generator = CannedGenerator("Two sentences.");
        assert_eq!(suggest_synopsis(&generator, "", "Drama").await, None);
        assert_eq!(
            suggest_synopsis(&generator, "Copper Lanes", "Comedy Heist").await,
            Some("Two sentences.".to_string())
        );
    }
}

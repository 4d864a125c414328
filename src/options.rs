//! Match configuration options.

/// Input that means "hit" at the decision prompt.
pub const DEFAULT_HIT_TOKEN: &str = "h";

/// Presentation options for a match.
///
/// The table rules themselves are fixed; these only shape the session.
///
/// ```
/// use bjvs::MatchOptions;
///
/// let options = MatchOptions::default()
///     .with_hit_token("hit")
///     .with_pause_between_rounds(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    /// Exact, case-sensitive input that requests another card.
    pub hit_token: &'static str,
    /// Whether to wait for enter between rounds.
    pub pause_between_rounds: bool,
    /// Whether to print the score block after every scoring event.
    pub show_score: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            hit_token: DEFAULT_HIT_TOKEN,
            pause_between_rounds: true,
            show_score: true,
        }
    }
}

impl MatchOptions {
    /// Sets the hit token.
    ///
    /// # Example
    ///
    /// ```
    /// use bjvs::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_hit_token("hit");
    /// assert_eq!(options.hit_token, "hit");
    /// ```
    #[must_use]
    pub const fn with_hit_token(mut self, token: &'static str) -> Self {
        self.hit_token = token;
        self
    }

    /// Sets whether to pause between rounds.
    #[must_use]
    pub const fn with_pause_between_rounds(mut self, pause: bool) -> Self {
        self.pause_between_rounds = pause;
        self
    }

    /// Sets whether to print the score block.
    ///
    /// # Example
    ///
    /// ```
    /// use bjvs::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_show_score(false);
    /// assert!(!options.show_score);
    /// ```
    #[must_use]
    pub const fn with_show_score(mut self, show: bool) -> Self {
        self.show_score = show;
        self
    }
}

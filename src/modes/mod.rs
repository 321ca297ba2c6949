//! Reading-mode catalog.
//!
//! A reading mode selects the evaluative intent the model is asked to apply:
//! skimming cares about main ideas, critical reading about arguments and
//! evidence, and so on. The catalog is a fixed, process-wide table; unknown
//! identifiers resolve to [`ReadingMode::Detailed`].


/// Evaluative intent applied when scoring a summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReadingMode {
    Skimming,
    Comprehension,
    Study,
    Review,
    Summary,
    #[default]
    Detailed,
    Critical,
    Comparison,
}

impl ReadingMode {
    /// Resolves a mode identifier, case-insensitively.
    ///
    /// Anything unrecognized (including the empty string) resolves to
    /// [`ReadingMode::Detailed`]; callers never need to validate the
    /// identifier up front.
    pub fn parse(identifier: &str) -> Self {
        match identifier.to_ascii_lowercase().as_str() {
            "skimming" => ReadingMode::Skimming,
            "comprehension" => ReadingMode::Comprehension,
            "study" => ReadingMode::Study,
            "review" => ReadingMode::Review,
            "summary" => ReadingMode::Summary,
            "detailed" => ReadingMode::Detailed,
            "critical" => ReadingMode::Critical,
            "comparison" => ReadingMode::Comparison,
            _ => ReadingMode::Detailed,
        }
    }

    /// Natural-language description of the mode's intent, embedded verbatim
    /// into the evaluation prompt.
    pub fn description(&self) -> &'static str {
        match self {
            ReadingMode::Skimming => "Quick overview focusing on main ideas and key points",
            ReadingMode::Comprehension => {
                "Understanding check and verification of key concepts"
            }
            ReadingMode::Study => {
                "Educational focus with detailed analysis of learning objectives"
            }
            ReadingMode::Review => {
                "Revision and retention focus with emphasis on important details"
            }
            ReadingMode::Summary => {
                "Summary generation and evaluation with focus on conciseness"
            }
            ReadingMode::Detailed => "Comprehensive analysis of all content and details",
            ReadingMode::Critical => "Analysis and evaluation of arguments and evidence",
            ReadingMode::Comparison => {
                "Compare multiple texts or versions with emphasis on differences"
            }
        }
    }

    /// The canonical identifier (useful for logging).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingMode::Skimming => "skimming",
            ReadingMode::Comprehension => "comprehension",
            ReadingMode::Study => "study",
            ReadingMode::Review => "review",
            ReadingMode::Summary => "summary",
            ReadingMode::Detailed => "detailed",
            ReadingMode::Critical => "critical",
            ReadingMode::Comparison => "comparison",
        }
    }

    /// All recognized modes, in catalog order.
    pub const ALL: [ReadingMode; 8] = [
        ReadingMode::Skimming,
        ReadingMode::Comprehension,
        ReadingMode::Study,
        ReadingMode::Review,
        ReadingMode::Summary,
        ReadingMode::Detailed,
        ReadingMode::Critical,
        ReadingMode::Comparison,
    ];
}

impl std::fmt::Display for ReadingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

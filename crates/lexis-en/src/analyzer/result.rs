// Aggregated statistics for one analyzed text

use std::collections::BTreeMap;

use hashbrown::HashMap;

use lexis_core::{CefrLevel, PartOfSpeech, Word};

/// Per-word occurrence counts within one part of speech.
pub type Occurrences = HashMap<Word, usize>;

/// Immutable snapshot of a text's lexical statistics.
///
/// `words` holds the retained words in text order. Both breakdowns are
/// derived from it when the result is built; nothing is computed lazily
/// here. Words compare by `(term, part_of_speech)`, so inflected tokens that
/// resolved to the same entry are counted together.
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    words: Vec<Word>,
    token_count: usize,
    by_part_of_speech: BTreeMap<PartOfSpeech, Occurrences>,
    level_counts: BTreeMap<CefrLevel, usize>,
    level_distribution: BTreeMap<CefrLevel, f64>,
}

impl AnalysisResult {
    /// Aggregate one classified word per token.
    ///
    /// With `exclude_functional`, closed-class words are dropped before any
    /// table is built; they still count toward [`token_count`](Self::token_count).
    pub fn from_classified(classified: Vec<Word>, exclude_functional: bool) -> Self {
        let token_count = classified.len();
        let words: Vec<Word> = classified
            .into_iter()
            .filter(|w| !(exclude_functional && w.is_functional()))
            .collect();

        let mut by_part_of_speech: BTreeMap<PartOfSpeech, Occurrences> = BTreeMap::new();
        let mut level_counts: BTreeMap<CefrLevel, usize> = BTreeMap::new();
        for word in &words {
            *by_part_of_speech
                .entry(word.part_of_speech())
                .or_default()
                .entry(word.clone())
                .or_default() += 1;
            *level_counts.entry(word.cefr_level()).or_default() += 1;
        }

        let total = words.len() as f64;
        let level_distribution = level_counts
            .iter()
            .map(|(&level, &count)| (level, count as f64 / total))
            .collect();

        Self {
            words,
            token_count,
            by_part_of_speech,
            level_counts,
            level_distribution,
        }
    }

    /// Retained words, one per token, in text order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of word runs in the text, functional or not.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    pub fn retained_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Part of speech -> (word -> occurrence count).
    pub fn part_of_speech_breakdown(&self) -> &BTreeMap<PartOfSpeech, Occurrences> {
        &self.by_part_of_speech
    }

    /// Occurrence counts for one part of speech, if any word had it.
    pub fn occurrences(&self, part_of_speech: PartOfSpeech) -> Option<&Occurrences> {
        self.by_part_of_speech.get(&part_of_speech)
    }

    /// How often `word` (by term and part of speech) was retained.
    pub fn count_of(&self, word: &Word) -> usize {
        self.occurrences(word.part_of_speech())
            .and_then(|counts| counts.get(word))
            .copied()
            .unwrap_or(0)
    }

    pub fn level_counts(&self) -> &BTreeMap<CefrLevel, usize> {
        &self.level_counts
    }

    /// Share of retained words at each CEFR level. Values sum to 1; the map
    /// is empty when no word was retained.
    pub fn level_distribution(&self) -> &BTreeMap<CefrLevel, f64> {
        &self.level_distribution
    }

    /// Share of retained words in each part of speech.
    pub fn part_of_speech_proportions(&self) -> BTreeMap<PartOfSpeech, f64> {
        let total = self.words.len() as f64;
        self.by_part_of_speech
            .iter()
            .map(|(&pos, counts)| (pos, counts.values().sum::<usize>() as f64 / total))
            .collect()
    }

    /// Distinct `(term, part_of_speech)` entries among retained words.
    pub fn unique_words(&self) -> usize {
        self.by_part_of_speech.values().map(|counts| counts.len()).sum()
    }

    /// Distinct entries over retained words; 0 for an empty result.
    pub fn type_token_ratio(&self) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        self.unique_words() as f64 / self.words.len() as f64
    }

    /// Retained words over all tokens; 0 for an empty text.
    ///
    /// When functional words are excluded this is the share of content words.
    pub fn lexical_density(&self) -> f64 {
        if self.token_count == 0 {
            return 0.0;
        }
        self.words.len() as f64 / self.token_count as f64
    }

    /// Retained tokens that no lookup strategy could classify.
    pub fn unclassified_count(&self) -> usize {
        self.occurrences(PartOfSpeech::Unclassified)
            .map(|counts| counts.values().sum())
            .unwrap_or(0)
    }
}

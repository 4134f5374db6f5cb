//! Match score captions.
//!
//! Thresholds are half-open from below: a score exactly on a boundary falls
//! into the lower tier.

use std::fmt;

/// Similarity tier derived from a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    /// s > 0.95
    VerySimilar,
    /// 0.85 < s <= 0.95
    GoodSimilarity,
    /// 0.70 < s <= 0.85
    LowSimilarity,
    /// s <= 0.70, or no score
    NoMatch,
}

impl ScoreTier {
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            Some(s) if s > 0.95 => ScoreTier::VerySimilar,
            Some(s) if s > 0.85 => ScoreTier::GoodSimilarity,
            Some(s) if s > 0.70 => ScoreTier::LowSimilarity,
            _ => ScoreTier::NoMatch,
        }
    }

    /// Short caption used for live and static results.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::VerySimilar => "very similar",
            ScoreTier::GoodSimilarity => "good similarity",
            ScoreTier::LowSimilarity => "low similarity",
            ScoreTier::NoMatch => "no match/not analyzed",
        }
    }

    /// Sentence shown in the compare modal.
    pub fn analysis(&self) -> &'static str {
        match self {
            ScoreTier::VerySimilar => "Sangat Mirip! Posisi tubuh hampir identik dengan referensi.",
            ScoreTier::GoodSimilarity => {
                "Kemiripan Baik. Beberapa bagian tubuh mungkin perlu sedikit penyesuaian."
            }
            ScoreTier::LowSimilarity => {
                "Kemiripan Rendah. Periksa kembali sudut tangan atau kaki Anda."
            }
            ScoreTier::NoMatch => "Tidak Cocok atau Belum ada analisis bidang.",
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caption for an optional score.
pub fn score_label(score: Option<f64>) -> &'static str {
    ScoreTier::from_score(score).as_str()
}

/// "97.0% Match Score", or "N/A% Match Score" when there is no usable score.
pub fn match_score_text(score: Option<f64>) -> String {
    match score {
        Some(s) if s != 0.0 && !s.is_nan() => format!("{:.1}% Match Score", s * 100.0),
        _ => "N/A% Match Score".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(score_label(Some(0.96)), "very similar");
        assert_eq!(score_label(Some(0.90)), "good similarity");
        assert_eq!(score_label(Some(0.80)), "low similarity");
        assert_eq!(score_label(Some(0.50)), "no match/not analyzed");
        assert_eq!(score_label(None), "no match/not analyzed");
    }

    #[test]
    fn test_boundaries_fall_into_lower_tier() {
        assert_eq!(ScoreTier::from_score(Some(0.95)), ScoreTier::GoodSimilarity);
        assert_eq!(ScoreTier::from_score(Some(0.85)), ScoreTier::LowSimilarity);
        assert_eq!(ScoreTier::from_score(Some(0.70)), ScoreTier::NoMatch);
        assert_eq!(ScoreTier::from_score(Some(0.9500001)), ScoreTier::VerySimilar);
    }

    #[test]
    fn test_nan_is_no_match() {
        assert_eq!(ScoreTier::from_score(Some(f64::NAN)), ScoreTier::NoMatch);
    }

    #[test]
    fn test_analysis_text() {
        assert!(ScoreTier::VerySimilar.analysis().starts_with("Sangat Mirip!"));
        assert!(ScoreTier::NoMatch.analysis().starts_with("Tidak Cocok"));
    }

    #[test]
    fn test_match_score_text() {
        assert_eq!(match_score_text(Some(0.97)), "97.0% Match Score");
        assert_eq!(match_score_text(Some(0.8765)), "87.7% Match Score");
        assert_eq!(match_score_text(Some(0.0)), "N/A% Match Score");
        assert_eq!(match_score_text(None), "N/A% Match Score");
    }
}

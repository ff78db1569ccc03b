//! Overlap scorer: fraction of description tokens that appear anywhere in the résumé.

use std::collections::HashSet;

use crate::scoring::ScoreError;

/// Returns `c / len(description)` where `c` counts description tokens
/// (duplicates included) present in the résumé token set.
///
/// An empty description has no defined score and yields
/// [`ScoreError::EmptyDescription`]. An empty résumé scores `0.0`.
pub fn overlap_score<S: AsRef<str>>(resume: &[S], description: &[S]) -> Result<f64, ScoreError> {
    if description.is_empty() {
        return Err(ScoreError::EmptyDescription);
    }

    let vocabulary: HashSet<&str> = resume.iter().map(|t| t.as_ref()).collect();

    let matched = description
        .iter()
        .filter(|t| vocabulary.contains(AsRef::<str>::as_ref(*t)))
        .count();

    Ok(matched as f64 / description.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tokenizer::tokenize;
    use proptest::prelude::*;

    fn score(resume: &str, description: &str) -> Result<f64, ScoreError> {
        overlap_score(&tokenize(resume), &tokenize(description))
    }

    #[test]
    fn test_full_coverage_scores_one() {
        let s = score(
            "Requires experience in early childhood development",
            "Requires experience in early childhood development...",
        )
        .unwrap();
        assert_eq!(s, 1.0);
    }

    #[test]
    fn test_five_of_six_tokens() {
        let s = score(
            "I have experience in early childhood development",
            "Requires experience in early childhood development...",
        )
        .unwrap();
        assert_eq!(s, 5.0 / 6.0);
        assert_eq!(s, 0.8333333333333334);
    }

    #[test]
    fn test_disjoint_vocabulary_scores_zero() {
        assert_eq!(score("rust tokio axum", "java spring hibernate").unwrap(), 0.0);
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        assert_eq!(score("", "anything").unwrap(), 0.0);
    }

    #[test]
    fn test_empty_description_is_an_error() {
        assert_eq!(score("anything", ""), Err(ScoreError::EmptyDescription));
        assert_eq!(score("anything", "?!..."), Err(ScoreError::EmptyDescription));
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        assert_eq!(score("AWS, Experience!", "aws experience").unwrap(), 1.0);
    }

    #[test]
    fn test_description_duplicates_are_counted() {
        // "rust" x3 matched, "go" unmatched → 3/4
        assert_eq!(score("rust", "rust rust go rust").unwrap(), 0.75);
    }

    #[test]
    fn test_resume_duplicates_do_not_inflate() {
        assert_eq!(score("rust rust rust rust", "rust go").unwrap(), 0.5);
    }

    fn token_vec() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z0-9_]{1,6}", 0..30)
    }

    proptest! {
        #[test]
        fn score_is_bounded(resume in token_vec(), description in token_vec()) {
            prop_assume!(!description.is_empty());
            let s = overlap_score(&resume, &description).unwrap();
            prop_assert!((0.0..=1.0).contains(&s));
        }

        #[test]
        fn superset_resume_scores_one(resume in token_vec(), description in token_vec()) {
            prop_assume!(!description.is_empty());
            let mut superset = resume.clone();
            superset.extend(description.iter().cloned());
            prop_assert_eq!(overlap_score(&superset, &description).unwrap(), 1.0);
        }

        #[test]
        fn disjoint_resume_scores_zero(resume in token_vec(), description in token_vec()) {
            prop_assume!(!description.is_empty());
            // prefixing keeps the two vocabularies apart
            let resume: Vec<String> = resume.iter().map(|t| format!("r{t}")).collect();
            let description: Vec<String> = description.iter().map(|t| format!("d{t}")).collect();
            prop_assert_eq!(overlap_score(&resume, &description).unwrap(), 0.0);
        }
    }
}

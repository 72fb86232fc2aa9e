/// Computes the Levenshtein edit distance between two strings.
///
/// Counted over characters, not bytes. Uses the classic two-row dynamic
/// programming formulation.
///
/// # Parameters
/// - `a`: First string.
/// - `b`: Second string.
///
/// # Returns
/// The minimum number of single-character insertions, deletions, and
/// substitutions turning `a` into `b`.
///
/// # Example
/// ```
/// use unical::util::text::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("rent", "rent"), 0);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Scores how closely a candidate name matches a requested name.
///
/// The score is the average of two parts:
/// - the length of the common leading-character run, relative to the length of
///   the requested name, and
/// - the normalized Levenshtein similarity (`1 - distance / longest length`).
///
/// Identical strings score `1.0`; strings sharing nothing score `0.0`.
///
/// # Parameters
/// - `requested`: The name as written.
/// - `candidate`: The bound name being considered.
///
/// # Returns
/// A score in `[0.0, 1.0]`, higher meaning more alike.
///
/// # Example
/// ```
/// use unical::util::text::similarity;
///
/// let score = similarity("r", "rent");
/// assert!((score - 0.625).abs() < 1e-9);
///
/// assert!(similarity("rent", "rent") > similarity("rant", "rent"));
/// assert!(similarity("xyz", "rent") < 0.2);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn similarity(requested: &str, candidate: &str) -> f64 {
    let requested_chars: Vec<char> = requested.chars().collect();
    let candidate_chars: Vec<char> = candidate.chars().collect();
    if requested_chars.is_empty() && candidate_chars.is_empty() {
        return 1.0;
    }
    if requested_chars.is_empty() || candidate_chars.is_empty() {
        return 0.0;
    }

    let run = requested_chars.iter()
                             .zip(&candidate_chars)
                             .take_while(|(a, b)| a == b)
                             .count();
    let prefix = run as f64 / requested_chars.len() as f64;

    let longest = requested_chars.len().max(candidate_chars.len()) as f64;
    let edit = 1.0 - levenshtein(requested, candidate) as f64 / longest;

    0.5 * prefix + 0.5 * edit
}

use once_cell::sync::Lazy;
use std::collections::HashSet;

// Apostrophe forms are omitted: punctuation is blanked before tokens are checked.
const ENGLISH: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "cannot", "could", "did", "do", "does", "doing", "down", "during",
    "each", "few", "for", "from", "further",
    "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how",
    "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now",
    "of", "off", "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "she", "should", "so", "some", "such",
    "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "would", "you", "your", "yours", "yourself", "yourselves",
];

const RUSSIAN: &[&str] = &[
    "без", "более", "бы", "был", "была", "были", "было", "быть", "вам", "вас", "вдруг", "ведь", "во",
    "вот", "все", "всего", "всех", "всю", "вы", "где", "да", "даже", "для", "до", "его", "ее", "ей",
    "ему", "если", "есть", "еще", "же", "за", "здесь", "из", "или", "им", "их", "как", "какая",
    "какой", "когда", "кто", "ли", "либо", "между", "меня", "мне", "много", "может", "мой", "моя",
    "мы", "на", "над", "надо", "наконец", "нас", "не", "него", "нее", "нет", "ни", "нибудь", "никогда",
    "ним", "них", "ничего", "но", "ну", "об", "однако", "он", "она", "они", "оно", "опять", "от",
    "перед", "по", "под", "после", "потом", "потому", "почти", "при", "про", "раз", "разве", "себе",
    "себя", "сейчас", "со", "совсем", "так", "такой", "там", "тебя", "тем", "теперь", "то", "тогда",
    "того", "тоже", "только", "том", "тот", "три", "тут", "ты", "уж", "уже", "хорошо", "хоть", "чего",
    "чем", "через", "что", "чтоб", "чтобы", "чуть", "эти", "этого", "этой", "этом", "этот", "эту",
    "это",
];

static STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH.iter().chain(RUSSIAN.iter()).copied().collect());

/// `word` must already be lowercased.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords() {
        assert!(is_stopword("the"));
        assert!(is_stopword("для"));
        assert!(!is_stopword("python"));
        assert!(!is_stopword("данных"));
        assert!(!is_stopword("The"));
    }
}

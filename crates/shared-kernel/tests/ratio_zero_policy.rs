use line_ratio_shared_kernel::{SpaceCount, WordCount, ratio};

#[test]
fn per_word_is_zero_without_words() {
    assert_eq!(SpaceCount::from(4).per_word(WordCount::zero()), 0.0);
}

#[test]
fn per_word_matches_free_function() {
    let spaces = SpaceCount::from(3);
    let words = WordCount::from(4);
    assert_eq!(spaces.per_word(words), ratio(3, 4));
    assert_eq!(spaces.per_word(words), 0.75);
}

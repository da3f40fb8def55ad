use line_ratio_shared_kernel::{LineCount, SpaceCount, WordCount};

#[test]
fn spacecount_sum() {
    let total = [1usize, 2, 3].into_iter().map(SpaceCount::from).sum::<SpaceCount>();
    assert_eq!(usize::from(total), 6);
}

#[test]
fn wordcount_sum_ref() {
    let values = [WordCount::from(5), WordCount::from(7)];
    let total: WordCount = values.iter().sum();
    assert_eq!(usize::from(total), 12);
}

#[test]
fn linecount_add_assign() {
    let mut lines = LineCount::from(10);
    lines += LineCount::from(5);
    assert_eq!(usize::from(lines), 15);
    lines += 1usize;
    assert_eq!(lines, 16usize);
}

#[test]
fn mixed_arithmetic_keeps_type() {
    let spaces = SpaceCount::from(2);
    let next = spaces + 3usize;
    assert_eq!(next, SpaceCount::new(5));
    assert!(!next.is_zero());
    assert!(SpaceCount::default().is_zero());
}

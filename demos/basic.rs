use tre::Regex;

fn main() {
    let re = Regex::new("a+b").unwrap();
    assert!(re.is_match(b"ab"));
    assert!(re.is_match(b"aaab"));
    assert!(!re.is_match(b"b"));

    let re = Regex::new(r"\d+").unwrap();
    assert!(re.is_match(b"42 apples"));

    let re = Regex::new("cat|dog").unwrap();
    assert!(re.is_match(b"cat"));
    assert!(re.is_match(b"dog"));
    assert!(!re.is_match(b"cow"));

    // Matching is left-anchored: it asks whether a prefix of the haystack
    // matches, not whether the pattern occurs anywhere in it.
    let re = Regex::new("b+").unwrap();
    assert!(!re.is_match(b"abb"));

    // Share one compiled Regex across threads; each call borrows its own
    // scratch space from an internal pool.
    let shared = re.clone();
    let handle = std::thread::spawn(move || shared.is_match(b"bbb"));
    assert!(handle.join().unwrap());
}

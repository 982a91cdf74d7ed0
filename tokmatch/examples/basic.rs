use tokmatch::Matcher;

fn main() {
    let matcher = Matcher::new("[anum::]@[anum::].[str::>=2<=4]").unwrap();
    assert!(matcher.is_full_match("example@mail.com"));
    assert!(matcher.is_full_match("user123@domain.co"));
    assert!(matcher.is_full_match("invalid@domain.x") == false);

    // Each class token captures the span it settled on.
    let haystack = "reach me at support@example.org today";
    let m = matcher.find(haystack).unwrap();
    println!("address: {}", &haystack[m.range()]);
    for span in m.captures() {
        println!("  part: {}", &haystack[span.range()]);
    }

    let matcher = Matcher::new("[dec::]").unwrap();
    let haystack = "order 66, table 4, year 1977";
    for m in matcher.find_iter(haystack) {
        println!("number: {}", &haystack[m.range()]);
    }

    // Custom ranges replace a type's default character set.
    let matcher = Matcher::new("[str:S|s:1][str::]").unwrap();
    assert!(matcher.is_full_match("Sajjad"));
    assert!(matcher.is_full_match("sadiq"));
    assert!(matcher.is_full_match("Mark") == false);
}

use super::*;

#[test]
fn copyright_line_includes_year_and_name() {
    assert_eq!(copyright_line(2025, "Antonio Espinosa"), "© 2025 Antonio Espinosa. All rights reserved.");
}

#[test]
fn current_year_is_plausible() {
    assert!(current_year() >= 2025);
}

#[test]
fn credits_link_out() {
    for credit in BUILT_WITH {
        assert!(credit.url.starts_with("https://"), "{}", credit.name);
        assert!(credit.logo.starts_with("assets/"), "{}", credit.name);
    }
}

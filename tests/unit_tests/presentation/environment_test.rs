use interviewer::presentation::config::Environment;

#[test]
fn given_environment_aliases_when_parsing_then_canonical_variant() {
    assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
    assert_eq!("Development".parse::<Environment>().unwrap(), Environment::Local);
    assert_eq!(" TEST ".parse::<Environment>().unwrap(), Environment::Test);
    assert_eq!("production".parse::<Environment>().unwrap(), Environment::Prod);
}

#[test]
fn given_unknown_environment_when_parsing_then_error_lists_choices() {
    let err = "staging".parse::<Environment>().unwrap_err();

    assert!(err.contains("staging"));
    assert!(err.contains("local, test, or prod"));
}

#[test]
fn given_environment_when_displayed_then_capitalized_name() {
    assert_eq!(Environment::default().to_string(), "Local");
    assert_eq!(Environment::Prod.as_str(), "Prod");
}

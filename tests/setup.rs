//! Integration tests for reading the game input.

use district_tournament::{parse_panem, read_panem, SetupError};

const SAMPLE: &str = "\
3
1
2
12
6
Katniss Everdeen 5 16 12 80
Peeta Mellark 4 17 12 60
Haymitch Abernathy 1 40 12 30
Glimmer Shine 8 12 1 70
Cato Hadley 3 18 2 90
Clove Kentwell 6 11 2 75
";

#[test]
fn districts_are_read_in_order_with_people_routed_by_parity() {
    let districts = parse_panem(SAMPLE).unwrap();
    let ids: Vec<i32> = districts.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 2, 12]);

    let twelve = &districts[2];
    let odd: Vec<&str> = twelve
        .odd_population()
        .iter()
        .map(|p| p.first_name.as_str())
        .collect();
    assert_eq!(odd, vec!["Katniss", "Haymitch"]);
    assert_eq!(twelve.even_population()[0].first_name, "Peeta");
    assert!(twelve.odd_population().iter().all(|p| p.birth_month() % 2 == 1));

    assert_eq!(districts[0].even_population().len(), 1);
    assert!(districts[0].odd_population().is_empty());
}

#[test]
fn tessera_applies_from_twelve_up_to_seventeen() {
    let districts = parse_panem(SAMPLE).unwrap();
    let tessera = |name: &str| {
        districts
            .iter()
            .flat_map(|d| d.odd_population().iter().chain(d.even_population().iter()))
            .find(|p| p.first_name == name)
            .map(|p| p.tessera())
            .unwrap()
    };
    assert!(tessera("Glimmer")); // 12
    assert!(tessera("Katniss")); // 16
    assert!(tessera("Peeta")); // 17
    assert!(!tessera("Cato")); // 18
    assert!(!tessera("Clove")); // 11
    assert!(!tessera("Haymitch")); // 40
}

#[test]
fn read_people_expose_their_fixed_fields_through_getters() {
    let districts = parse_panem(SAMPLE).unwrap();
    let cato = &districts[1].odd_population()[0];
    assert_eq!(cato.full_name(), "Cato Hadley");
    assert_eq!(cato.birth_month(), 3);
    assert_eq!(cato.age(), 18);
    assert_eq!(cato.district_id(), 2);
    assert!(!cato.tessera());

    let peeta = &districts[2].even_population()[0];
    assert_ne!(peeta.id(), cato.id());
    assert_eq!(peeta.district_id(), 12);
    assert!(peeta.tessera());
}

#[test]
fn repeated_spaces_and_blank_lines_are_tolerated() {
    let input = "2\n  7\n\n3  \n1\nFinnick   Odair 9 24 7 85\n";
    let districts = read_panem(input.as_bytes()).unwrap();
    assert_eq!(districts.len(), 2);
    assert_eq!(districts[0].odd_population()[0].last_name, "Odair");
}

#[test]
fn duplicate_districts_and_unknown_district_people_are_skipped() {
    let input = "3\n4\n4\n5\n2\nJohanna Mason 2 22 7 88\nWiress Tech 3 50 4 20\n";
    let districts = parse_panem(input).unwrap();
    let ids: Vec<i32> = districts.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![4, 5]);
    let people: usize = districts.iter().map(|d| d.len()).sum();
    assert_eq!(people, 1);
}

#[test]
fn birth_month_must_be_a_month() {
    let input = "1\n1\n1\nBad Month 13 20 1 10\n";
    assert!(matches!(
        parse_panem(input),
        Err(SetupError::InvalidBirthMonth { month: 13, .. })
    ));
}

#[test]
fn truncated_input_is_an_error() {
    let input = "2\n1\n2\n3\nA B 1 20 1 10\n";
    assert!(matches!(
        parse_panem(input),
        Err(SetupError::UnexpectedEnd {
            expected: "person record"
        })
    ));
    assert!(matches!(
        parse_panem(""),
        Err(SetupError::UnexpectedEnd { .. })
    ));
}

#[test]
fn malformed_values_report_the_line() {
    assert!(matches!(
        parse_panem("two\n"),
        Err(SetupError::InvalidValue { line: 1, .. })
    ));
    assert!(matches!(
        parse_panem("1\n1\n1\nShort Row 3\n"),
        Err(SetupError::InvalidPerson { line: 4, .. })
    ));
}

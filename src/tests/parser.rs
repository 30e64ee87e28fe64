// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::argument::Argument;
use crate::error::Error;
use crate::parser::Parser;

fn args(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| (*a).to_owned()).collect()
}

#[test]
fn test_parse_empty_args() {
    let mut parser = Parser::new();
    parser.add(Argument::keyword("i", "input", "")).unwrap();
    parser.parse(&args(&[])).unwrap();
    assert!(!parser.argument("input").is_present());
}

#[test]
fn test_long_name_with_separate_value() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("i", "input", "").has_value())
        .unwrap();
    parser.parse(&args(&["--input", "file.txt"])).unwrap();

    let input = parser.argument("input");
    assert!(input.is_present());
    assert_eq!(&["file.txt".to_owned()], input.values());
    assert_eq!("file.txt", input.get_value());
}

#[test]
fn test_short_name_with_separate_value() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("i", "input", "").has_value())
        .unwrap();
    parser.parse(&args(&["-i", "file.txt"])).unwrap();
    assert_eq!("file.txt", parser.argument("input").get_value());
}

#[test]
fn test_assignment_form() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("o", "output", "").has_value())
        .unwrap();
    parser.parse(&args(&["-o=result.txt"])).unwrap();
    assert_eq!(&["result.txt".to_owned()], parser.argument("o").values());
}

#[test]
fn test_assignment_form_with_long_name() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("o", "output", "").has_value())
        .unwrap();
    parser.parse(&args(&["--output=result.txt"])).unwrap();
    assert_eq!("result.txt", parser.argument("output").get_value());
}

#[test]
fn test_assignment_form_requires_single_equals() {
    // A value containing a further '=' is not treated as an assignment; the
    // whole token surfaces as unrecognized instead.
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("o", "output", "").has_value())
        .unwrap();
    match parser.parse(&args(&["--output=a=b"])).unwrap_err() {
        Error::UnknownArgument(token) => assert_eq!("--output=a=b", token),
        e => panic!("expected UnknownArgument, got: {}", e),
    }
}

#[test]
fn test_concatenated_short_flags() {
    let mut parser = Parser::new();
    parser.add(Argument::keyword("a", "alpha", "")).unwrap();
    parser.add(Argument::keyword("b", "bravo", "")).unwrap();
    parser.add(Argument::keyword("c", "charlie", "")).unwrap();
    parser.parse(&args(&["-abc"])).unwrap();

    for name in &["alpha", "bravo", "charlie"] {
        let argument = parser.argument(name);
        assert!(argument.is_present(), "'{}' was not marked present", name);
        assert!(argument.values().is_empty());
    }
}

#[test]
fn test_concatenated_flags_with_assigned_value() {
    let mut parser = Parser::new();
    parser.add(Argument::keyword("a", "alpha", "")).unwrap();
    parser
        .add(Argument::keyword("b", "bravo", "").has_value())
        .unwrap();
    parser.parse(&args(&["-ab=x"])).unwrap();

    assert!(parser.argument("alpha").is_present());
    assert_eq!(&["x".to_owned()], parser.argument("bravo").values());
}

#[test]
fn test_concatenation_supports_multi_character_short_names() {
    let mut parser = Parser::new();
    parser.add(Argument::keyword("a", "alpha", "")).unwrap();
    parser.add(Argument::keyword("bc", "bravo", "")).unwrap();
    parser.parse(&args(&["-abc"])).unwrap();

    assert!(parser.argument("alpha").is_present());
    assert!(parser.argument("bravo").is_present());
}

#[test]
fn test_unexpandable_concatenation_is_unrecognized() {
    let mut parser = Parser::new();
    parser.add(Argument::keyword("a", "alpha", "")).unwrap();
    parser.add(Argument::keyword("b", "bravo", "")).unwrap();
    match parser.parse(&args(&["-axb"])).unwrap_err() {
        Error::UnknownArgument(token) => assert_eq!("-axb", token),
        e => panic!("expected UnknownArgument, got: {}", e),
    }
}

#[test]
fn test_concatenation_scans_shortest_prefix_first() {
    // With short names "a" and "ab" registered, "-aab" scans "a", then "a"
    // again, leaving "b" unmatched. The scan never backtracks to prefer the
    // longer "ab".
    let mut parser = Parser::new();
    parser.add(Argument::keyword("a", "alpha", "")).unwrap();
    parser.add(Argument::keyword("ab", "bravo", "")).unwrap();
    match parser.parse(&args(&["-aab"])).unwrap_err() {
        Error::UnknownArgument(token) => assert_eq!("-aab", token),
        e => panic!("expected UnknownArgument, got: {}", e),
    }
}

#[test]
fn test_positional_argument_collects_value() {
    let mut parser = Parser::new();
    parser
        .add(Argument::positional("output", "").has_value())
        .unwrap();
    parser.parse(&args(&["output", "result.txt"])).unwrap();

    let output = parser.argument("output");
    assert!(output.is_present());
    assert_eq!("result.txt", output.get_value());
}

#[test]
fn test_multiple_values_are_collected_in_order() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("f", "files", "").has_value())
        .unwrap();
    parser.add(Argument::keyword("v", "verbose", "")).unwrap();
    parser.parse(&args(&["--files", "a", "b", "c", "-v"])).unwrap();

    assert_eq!(
        &["a".to_owned(), "b".to_owned(), "c".to_owned()],
        parser.argument("files").values()
    );
    assert!(parser.argument("verbose").is_present());
}

#[test]
fn test_missing_required_argument() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("i", "input", "").required())
        .unwrap();
    match parser.parse(&args(&[])).unwrap_err() {
        Error::MissingRequiredArgument(name) => assert_eq!("input", name),
        e => panic!("expected MissingRequiredArgument, got: {}", e),
    }
}

#[test]
fn test_too_many_values_for_single_valued_argument() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("f", "flag", "").has_value().single_value())
        .unwrap();
    match parser.parse(&args(&["--flag", "a", "b"])).unwrap_err() {
        Error::TooManyValues(name) => assert_eq!("--flag", name),
        e => panic!("expected TooManyValues, got: {}", e),
    }
}

#[test]
fn test_too_many_values_across_occurrences() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("f", "flag", "").has_value().single_value())
        .unwrap();
    match parser.parse(&args(&["--flag", "a", "--flag", "b"])).unwrap_err() {
        Error::TooManyValues(name) => assert_eq!("--flag", name),
        e => panic!("expected TooManyValues, got: {}", e),
    }
}

#[test]
fn test_default_value_applies_when_flag_is_absent() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("l", "level", "").default_value("info"))
        .unwrap();
    parser.parse(&args(&[])).unwrap();

    let level = parser.argument("level");
    assert!(!level.is_present());
    assert_eq!(&["info".to_owned()], level.values());
}

#[test]
fn test_default_value_applies_when_flag_has_no_value() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("l", "level", "").default_value("info"))
        .unwrap();
    parser.parse(&args(&["--level"])).unwrap();

    let level = parser.argument("level");
    assert!(level.is_present());
    assert_eq!("info", level.get_value());
}

#[test]
fn test_explicit_value_overrides_default() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("l", "level", "").default_value("info"))
        .unwrap();
    parser.parse(&args(&["--level", "debug"])).unwrap();
    assert_eq!(&["debug".to_owned()], parser.argument("level").values());
}

#[test]
fn test_missing_value_without_default() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("l", "level", "").requires_value())
        .unwrap();
    match parser.parse(&args(&["--level"])).unwrap_err() {
        Error::MissingArgumentValue(name) => assert_eq!("level", name),
        e => panic!("expected MissingArgumentValue, got: {}", e),
    }
}

#[test]
fn test_absent_optional_argument_requiring_value_is_fine() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("l", "level", "").requires_value())
        .unwrap();
    parser.parse(&args(&[])).unwrap();
    assert!(!parser.argument("level").is_present());
    assert!(parser.argument("level").values().is_empty());
}

#[test]
fn test_unknown_argument() {
    let mut parser = Parser::new();
    parser.add(Argument::keyword("i", "input", "")).unwrap();
    match parser.parse(&args(&["--bogus"])).unwrap_err() {
        Error::UnknownArgument(token) => assert_eq!("--bogus", token),
        e => panic!("expected UnknownArgument, got: {}", e),
    }
}

#[test]
fn test_value_given_to_valueless_argument() {
    let mut parser = Parser::new();
    parser.add(Argument::keyword("v", "verbose", "")).unwrap();
    match parser.parse(&args(&["--verbose", "stray"])).unwrap_err() {
        Error::ValueNotAllowed { name, value } => {
            assert_eq!("--verbose", name);
            assert_eq!("stray", value);
        }
        e => panic!("expected ValueNotAllowed, got: {}", e),
    }
}

#[test]
fn test_value_not_allowed_hints_at_unrecognized_flag() {
    let mut parser = Parser::new();
    parser.add(Argument::keyword("v", "verbose", "")).unwrap();
    let message = parser
        .parse(&args(&["--verbose", "-x"]))
        .unwrap_err()
        .to_string();
    assert!(message.contains("unrecognized argument '-x'"));
    assert!(message.contains("may not have a value"));
}

#[test]
fn test_valueless_argument_followed_by_another_argument() {
    let mut parser = Parser::new();
    parser.add(Argument::keyword("v", "verbose", "")).unwrap();
    parser.add(Argument::keyword("q", "quiet", "")).unwrap();
    parser.parse(&args(&["--verbose", "--quiet"])).unwrap();
    assert!(parser.argument("verbose").is_present());
    assert!(parser.argument("quiet").is_present());
}

#[test]
fn test_program_help_short_circuits_validation() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("i", "input", "").required())
        .unwrap();

    // Even though a required argument is missing, a help request means no
    // validation error surfaces.
    parser.parse(&args(&["-h"])).unwrap();
    assert!(parser.is_program_help_requested());
    assert!(!parser.is_argument_help_requested());
    assert!(parser.help_requested_argument().is_absent());
}

#[test]
fn test_argument_help_is_attributed_to_preceding_argument() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("i", "input", "").requires_value())
        .unwrap();
    parser.parse(&args(&["--input", "-h"])).unwrap();

    assert!(parser.is_argument_help_requested());
    assert!(!parser.is_program_help_requested());
    assert_eq!("input", parser.help_requested_argument().get_name());
    assert!(parser.argument("input").is_help_requested());
}

#[test]
fn test_help_after_free_value_is_program_help() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("i", "input", "").has_value())
        .unwrap();
    parser.parse(&args(&["--input", "file.txt", "--help"])).unwrap();
    assert!(parser.is_program_help_requested());
}

#[test]
fn test_registered_h_takes_precedence_over_help() {
    let mut parser = Parser::new();
    parser.add(Argument::keyword("h", "host", "")).unwrap();
    parser.parse(&args(&["-h"])).unwrap();

    assert!(!parser.is_program_help_requested());
    assert!(parser.argument("host").is_present());
}

#[test]
fn test_disabled_help_still_records_the_request() {
    let mut parser = Parser::new();
    parser.add(Argument::keyword("v", "verbose", "")).unwrap();
    parser.disable_help();
    parser.parse(&args(&["-v", "--help"])).unwrap();

    // Parsing ran to completion, but the request is still queryable.
    assert!(parser.argument("verbose").is_present());
    assert!(parser.is_argument_help_requested());
}

#[test]
fn test_disabled_help_does_not_suppress_validation() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("i", "input", "").required())
        .unwrap();
    parser.disable_help();
    match parser.parse(&args(&["-h"])).unwrap_err() {
        Error::MissingRequiredArgument(name) => assert_eq!("input", name),
        e => panic!("expected MissingRequiredArgument, got: {}", e),
    }
}

#[test]
fn test_unknown_flag_after_values_is_consumed_as_a_value() {
    // Value harvesting consumes the whole run of tokens which are not
    // registered names, so an unrecognized flag in that run becomes a value
    // rather than an error.
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("i", "input", "").has_value())
        .unwrap();
    parser.parse(&args(&["--input", "a", "--bogus"])).unwrap();
    assert_eq!(
        &["a".to_owned(), "--bogus".to_owned()],
        parser.argument("input").values()
    );
}

#[test]
fn test_failed_parse_leaves_state_mutated() {
    let mut parser = Parser::new();
    parser
        .add(Argument::keyword("i", "input", "").has_value())
        .unwrap();
    parser.add(Argument::keyword("v", "verbose", "")).unwrap();
    assert!(parser
        .parse(&args(&["--input", "a", "--verbose", "stray"]))
        .is_err());

    // Presence and values harvested before the error stick around; a parser
    // is not reusable after a failed parse.
    assert!(parser.argument("input").is_present());
    assert_eq!(&["a".to_owned()], parser.argument("input").values());
}

#[test]
fn test_display_groups_arguments_by_kind() {
    let mut parser = Parser::new();
    parser.add(Argument::keyword("i", "input", "")).unwrap();
    parser.add(Argument::positional("output", "")).unwrap();

    let formatted = format!("{}", parser);
    assert!(formatted.contains("Keyword Arguments:"));
    assert!(formatted.contains("--input"));
    assert!(formatted.contains("Positional Arguments:"));
    assert!(formatted.contains("output"));
}

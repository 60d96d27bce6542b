use crate::config::Config;
use crate::element::{Element, Tag};
use crate::lexer::lex;
use crate::parser::MarkupParser;

pub fn parse_elements(input: &str) -> Vec<Element> {
    parse_with(input, &Config::default())
}

pub fn parse_with(input: &str, config: &Config) -> Vec<Element> {
    let tokens = lex(input);
    MarkupParser::new(&tokens, config).parse()
}

/// One display line per element.
pub fn dump_lines(elements: &[Element]) -> Vec<String> {
    elements.iter().map(ToString::to_string).collect()
}

pub fn assert_elements(input: &str, expected: &[&str]) {
    let actual = dump_lines(&parse_elements(input));
    assert_eq!(
        actual, expected,
        "Elements did not match for input:\n{:?}",
        input
    );
}

pub fn assert_elements_with(input: &str, config: &Config, expected: &[&str]) {
    let actual = dump_lines(&parse_with(input, config));
    assert_eq!(
        actual, expected,
        "Elements did not match for input:\n{:?}",
        input
    );
}

pub fn find_all(elements: &[Element], tag: Tag) -> Vec<&Element> {
    elements.iter().filter(|e| e.is_open(tag)).collect()
}

/// Opening minus closing markers of a tag.
pub fn unbalanced(elements: &[Element], tag: Tag) -> isize {
    elements.iter().fold(0, |n, e| match (e.tag == tag, e.closing) {
        (true, false) => n + 1,
        (true, true) => n - 1,
        _ => n,
    })
}

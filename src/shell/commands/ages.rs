//! Ages command implementation.

use regex::Regex;
use std::sync::LazyLock;

use crate::collector::REJECTION_NOTICE;
use crate::error::Result;
use crate::query::{AgeComparison, compare_ages};
use crate::shell::command::{Command, CommandResult, ShellContext, complete_from};

use super::show_records;

static AGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{1,3}$").expect("age pattern"));

fn parse_age(input: &str) -> Option<u32> {
    if AGE.is_match(input) {
        input.parse().ok()
    } else {
        None
    }
}

/// Lists people older than, younger than, or exactly a given age.
pub struct AgesCommand;

impl Command for AgesCommand {
    fn name(&self) -> &str {
        "ages"
    }

    fn menu_number(&self) -> Option<u8> {
        Some(11)
    }

    fn aliases(&self) -> &[&str] {
        &["compare"]
    }

    fn description(&self) -> &str {
        "Compare ages of people with a number"
    }

    fn usage(&self) -> &str {
        "ages [comparison] [years]"
    }

    fn help(&self) -> &str {
        "Show people whose age is above, below or equal to a number of\n\
         years. People without a birth date are not listed.\n\n\
         Examples:\n  \
           ages above 30\n  \
           ages equals 25"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        let mut comparison = args.first().and_then(|a| a.parse::<AgeComparison>().ok());
        let mut years = args.get(1).and_then(|a| parse_age(a));

        let years = loop {
            if let Some(years) = years {
                break years;
            }
            years = parse_age(&ctx.console.read_line("AGE >> ")?);
            if years.is_none() {
                ctx.say(&format!("\n{}\n", REJECTION_NOTICE));
            }
        };

        let prompt = format!("COMPARISON TYPE ({}) >> ", AgeComparison::NAMES.join("/"));
        let comparison = loop {
            if let Some(comparison) = comparison {
                break comparison;
            }
            comparison = ctx.console.read_line(&prompt)?.parse().ok();
            if comparison.is_none() {
                ctx.say(&format!("\n{}\n", REJECTION_NOTICE));
            }
        };

        let records = ctx.book.session()?.records()?;
        let found = compare_ages(&records, comparison, years, ctx.today);
        log::debug!("{} records are {} {}", found.len(), comparison, years);
        show_records(ctx.console, &found);
        Ok(CommandResult::ok())
    }

    fn completions(&self, arg_index: usize, partial: &str) -> Vec<String> {
        if arg_index == 0 {
            complete_from(&AgeComparison::NAMES, partial)
        } else {
            vec![]
        }
    }

    fn max_args(&self) -> Option<usize> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::shell::commands::fixtures::{book_with, person};
    use chrono::NaiveDate;

    fn book() -> crate::storage::PhoneBook {
        book_with(&[
            person("Anna", "Lee", "89990000001", Some((1994, 1, 1))),
            person("Bob", "Stone", "89990000002", Some((1980, 6, 1))),
            person("Carl", "Moss", "89990000003", None),
        ])
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("30"), Some(30));
        assert_eq!(parse_age("007"), Some(7));
        assert_eq!(parse_age("1000"), None);
        assert_eq!(parse_age("-1"), None);
        assert_eq!(parse_age(""), None);
    }

    #[test]
    fn test_ages_inline_arguments() {
        let mut book = book();
        let mut console = ScriptedConsole::default();
        let mut ctx = ShellContext::new(&mut book, &mut console).with_today(today());

        AgesCommand.execute(&["equals", "30"], &mut ctx).unwrap();
        let transcript = console.transcript();
        assert!(transcript.contains("Anna"));
        assert!(!transcript.contains("Bob"));
        assert!(!transcript.contains("Carl"));
    }

    #[test]
    fn test_ages_prompts() {
        let mut book = book();
        let mut console = ScriptedConsole::new(["abc", "35", "older", "above"]);
        let mut ctx = ShellContext::new(&mut book, &mut console).with_today(today());

        AgesCommand.execute(&[], &mut ctx).unwrap();
        let transcript = console.transcript();
        assert_eq!(transcript.matches(REJECTION_NOTICE).count(), 2);
        assert!(transcript.contains("Bob"));
        assert!(!transcript.contains("Anna"));
    }

    #[test]
    fn test_ages_completions() {
        assert_eq!(AgesCommand.completions(0, "b"), vec!["below".to_string()]);
        assert!(AgesCommand.completions(1, "").is_empty());
    }
}

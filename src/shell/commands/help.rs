//! Help command implementation.

use crate::error::Result;
use crate::shell::command::{CommandRegistry, Command, CommandResult, ShellContext};

/// The numbered menu, followed by the unnumbered commands.
pub fn menu_text(registry: &CommandRegistry) -> String {
    let mut output = String::from("MENU\n\n");

    for cmd in registry.menu() {
        let label = match cmd.menu_number() {
            Some(n) => format!("{:>2}.", n),
            None => "   ".to_string(),
        };
        output.push_str(&format!(
            "  {} {:<40} ({})\n",
            label,
            cmd.description(),
            cmd.name()
        ));
    }

    output.push_str("\nEnter a number or a command. Type 'help <command>' for details.");
    output
}

/// Command to display the menu and per-command help.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn aliases(&self) -> &[&str] {
        &["menu", "h", "?"]
    }

    fn description(&self) -> &str {
        "Show this menu"
    }

    fn usage(&self) -> &str {
        "help [command]"
    }

    fn help(&self) -> &str {
        "Show the menu of commands.\n\n\
         With a command name or number, shows detailed help for it.\n\n\
         Examples:\n  \
           help\n  \
           help sort\n  \
           ? 9"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult> {
        let Some(registry) = ctx.registry else {
            return Ok(CommandResult::error("Help not available (no registry)"));
        };

        let Some(cmd_name) = args.first() else {
            return Ok(CommandResult::success(menu_text(registry)));
        };

        match registry.get(cmd_name) {
            Some(cmd) => {
                let mut aliases: Vec<String> = cmd.aliases().iter().map(|a| a.to_string()).collect();
                if let Some(n) = cmd.menu_number() {
                    aliases.insert(0, n.to_string());
                }
                let alias_str = if aliases.is_empty() {
                    String::new()
                } else {
                    format!("\nAliases: {}", aliases.join(", "))
                };

                Ok(CommandResult::success(format!(
                    "{}\n\nUsage: {}{}\n\n{}",
                    cmd.name().to_uppercase(),
                    cmd.usage(),
                    alias_str,
                    cmd.help()
                )))
            }
            None => Ok(CommandResult::error(format!(
                "Unknown command: '{}'\nType 'help' to see available commands.",
                cmd_name
            ))),
        }
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}

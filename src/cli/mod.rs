pub mod context;
pub mod contact_commands;
pub mod birthday_commands;

use chrono::NaiveDate;
use tracing::info;

use crate::error::BookResult;
use crate::model::AddressBook;
use context::CLIContext;

/// Run the interactive REPL over an empty in-memory book.
pub fn run(today_override: Option<NaiveDate>) {
    println!("Welcome to the assistant bot!");
    println!("Type 'help' for commands, 'close' to quit.");
    println!();

    let mut ctx = CLIContext::new(AddressBook::new(), today_override);
    info!(today = %ctx.today(), "session started");

    repl_loop(&mut ctx);

    info!(contacts = ctx.book.len(), "session ended");
    println!("Good bye!");
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("Enter a command: ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);
        let command = command.to_lowercase();

        let result: BookResult<()> = match command.as_str() {
            "help" | "?" => {
                print_help();
                Ok(())
            }
            "close" | "exit" | "quit" | "q" => break,
            "hello" => {
                println!("How can I help you?");
                Ok(())
            }

            // Contacts
            "add" => contact_commands::add(ctx, args),
            "change" => contact_commands::change(ctx, args),
            "remove-phone" => contact_commands::remove_phone(ctx, args),
            "phone" => contact_commands::phone(ctx, args),
            "all" => contact_commands::all(ctx, args),
            "delete" => contact_commands::delete(ctx, args),

            // Birthdays
            "add-birthday" => birthday_commands::add_birthday(ctx, args),
            "show-birthday" => birthday_commands::show_birthday(ctx, args),
            "birthdays" => birthday_commands::birthdays(ctx, args),

            _ => {
                println!("Unknown command: {}. Type 'help' for commands.", command);
                Ok(())
            }
        };

        if let Err(e) = result {
            ctx.print_error(&e);
        }
    }
}

/// Split input into the command word and the rest of the line.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Contacts:
    add <name> <phone>               Add a contact, or a phone to an existing one
    change <name> <old> <new>        Replace a phone number
    remove-phone <name> <phone>      Remove a phone number
    phone <name>                     Show a contact's phone numbers
    all [--json]                     List every contact
    delete <name>                    Delete a contact

  Birthdays:
    add-birthday <name> <DD.MM.YYYY> Set a contact's birthday
    show-birthday <name>             Show a contact's birthday
    birthdays [--json]               Who to congratulate in the next 7 days

  Other:
    hello                            Greet the bot
    help                             Show this help
    close / exit / quit / q          Exit

TIPS:
  - Weekend birthdays are congratulated on the following Monday
  - Contacts live in memory only and are gone when you exit"#);
}

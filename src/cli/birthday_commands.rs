use crate::cli::context::CLIContext;
use crate::error::BookResult;
use crate::ops::birthday_ops;
use crate::validation::format_date;

pub fn add_birthday(ctx: &mut CLIContext, args: &str) -> BookResult<()> {
    let parts = CLIContext::require_args(args, 2, "add-birthday <name> <DD.MM.YYYY>")?;
    birthday_ops::set_birthday(&mut ctx.book, parts[0], parts[1])?;
    println!("Birthday added.");
    Ok(())
}

pub fn show_birthday(ctx: &CLIContext, args: &str) -> BookResult<()> {
    let parts = CLIContext::require_args(args, 1, "show-birthday <name>")?;
    match birthday_ops::birthday_of(&ctx.book, parts[0])? {
        Some(date) => println!("{}: {}", parts[0], format_date(date)),
        None => println!("No birthday set for {}.", parts[0]),
    }
    Ok(())
}

pub fn birthdays(ctx: &CLIContext, args: &str) -> BookResult<()> {
    let json = CLIContext::json_flag(args, "birthdays [--json]")?;
    let upcoming = ctx.book.get_upcoming_birthdays(ctx.today());

    if json {
        println!("{}", serde_json::to_string_pretty(&upcoming)?);
        return Ok(());
    }

    if upcoming.is_empty() {
        println!("No birthdays in the next week.");
        return Ok(());
    }

    println!("Upcoming birthdays:");
    for entry in &upcoming {
        let when = match entry.days_until {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {} days", n),
        };
        println!("  {} ({})", entry, when);
    }
    Ok(())
}

use crate::cli::context::CLIContext;
use crate::error::BookResult;
use crate::ops::contact_ops;

pub fn add(ctx: &mut CLIContext, args: &str) -> BookResult<()> {
    let parts = CLIContext::require_args(args, 2, "add <name> <phone>")?;
    let (name, phone) = (parts[0], parts[1]);

    if contact_ops::add_contact(&mut ctx.book, name, phone)? {
        println!("Contact added.");
    } else {
        println!("Contact updated.");
    }
    Ok(())
}

pub fn change(ctx: &mut CLIContext, args: &str) -> BookResult<()> {
    let parts = CLIContext::require_args(args, 3, "change <name> <old phone> <new phone>")?;
    contact_ops::change_phone(&mut ctx.book, parts[0], parts[1], parts[2])?;
    println!("Contact updated.");
    Ok(())
}

pub fn remove_phone(ctx: &mut CLIContext, args: &str) -> BookResult<()> {
    let parts = CLIContext::require_args(args, 2, "remove-phone <name> <phone>")?;
    contact_ops::remove_phone(&mut ctx.book, parts[0], parts[1])?;
    println!("Phone removed.");
    Ok(())
}

pub fn phone(ctx: &CLIContext, args: &str) -> BookResult<()> {
    let parts = CLIContext::require_args(args, 1, "phone <name>")?;
    let phones = contact_ops::phones_of(&ctx.book, parts[0])?;
    if phones.is_empty() {
        println!("{} has no phone numbers.", parts[0]);
    } else {
        println!("{}", phones.join("; "));
    }
    Ok(())
}

pub fn all(ctx: &CLIContext, args: &str) -> BookResult<()> {
    if CLIContext::json_flag(args, "all [--json]")? {
        println!("{}", serde_json::to_string_pretty(&ctx.book)?);
        return Ok(());
    }

    if ctx.book.is_empty() {
        println!("No contacts yet. Use 'add <name> <phone>' to add someone.");
        return Ok(());
    }

    println!("Contacts ({}):", ctx.book.len());
    for record in ctx.book.records() {
        println!("  {}", record);
    }
    Ok(())
}

pub fn delete(ctx: &mut CLIContext, args: &str) -> BookResult<()> {
    let parts = CLIContext::require_args(args, 1, "delete <name>")?;
    let removed = contact_ops::delete_contact(&mut ctx.book, parts[0])?;
    println!("Deleted {}.", removed.name());
    Ok(())
}

use tablekeep_core::types::AttributeType;

use crate::commands::{AttributeDecl, Command};

/// Tokenize an input line into whitespace-separated words, treating
/// double-quoted spans as single tokens (quotes stripped).
fn tokenize(input: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if c == '"' {
            chars.next();
            let mut token = String::new();
            loop {
                match chars.next() {
                    Some('"') => break,
                    Some(ch) => token.push(ch),
                    None => return Err("unterminated quoted string".to_string()),
                }
            }
            tokens.push(token);
            continue;
        }
        let mut token = String::new();
        while let Some(&ch) = chars.peek() {
            if ch.is_whitespace() || ch == '"' {
                break;
            }
            token.push(ch);
            chars.next();
        }
        tokens.push(token);
    }

    Ok(tokens)
}

fn keyword(token: &str) -> String {
    token.to_ascii_uppercase()
}

fn parse_type(token: &str) -> Result<AttributeType, String> {
    token.parse::<AttributeType>()
}

/// Parse one console line into a [`Command`].
///
/// Grammar:
/// - `CREATE TABLE <name> <attr> <TYPE> [PK] [<attr> <TYPE> [PK] ...]`
/// - `DROP TABLE <name>` | `DROP ALL TABLES` | `DROP ATTRIBUTE <table> <attr>`
/// - `ADD ATTRIBUTE <table> <attr> <TYPE>`
/// - `LIST TABLES` | `DESCRIBE <table>` | `HELP [topic]` | `EXIT` / `QUIT`
pub fn parse(input: &str) -> Result<Option<Command>, String> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Ok(None);
    }

    let cmd = match keyword(&tokens[0]).as_str() {
        "CREATE" => parse_create(&tokens)?,
        "DROP" => parse_drop(&tokens)?,
        "ADD" => parse_add(&tokens)?,
        "LIST" => {
            expect_arity(&tokens, 2, "LIST TABLES")?;
            if keyword(&tokens[1]) != "TABLES" {
                return Err("expected: LIST TABLES".to_string());
            }
            Command::ListTables
        }
        "DESCRIBE" => {
            expect_arity(&tokens, 2, "DESCRIBE <table>")?;
            Command::DescribeTable {
                name: tokens[1].clone(),
            }
        }
        "HELP" => Command::Help(tokens.get(1).map(|t| keyword(t))),
        "EXIT" | "QUIT" => Command::Exit,
        other => return Err(format!("unknown command: {other} (try HELP)")),
    };
    Ok(Some(cmd))
}

fn expect_arity(tokens: &[String], want: usize, usage: &str) -> Result<(), String> {
    if tokens.len() != want {
        return Err(format!("expected: {usage}"));
    }
    Ok(())
}

fn parse_create(tokens: &[String]) -> Result<Command, String> {
    if tokens.len() < 3 || keyword(&tokens[1]) != "TABLE" {
        return Err("expected: CREATE TABLE <name> <attr> <TYPE> [PK] ...".to_string());
    }
    let name = tokens[2].clone();

    let mut attributes = Vec::new();
    let mut i = 3;
    while i < tokens.len() {
        let attr_name = tokens[i].clone();
        let Some(type_token) = tokens.get(i + 1) else {
            return Err(format!("attribute '{attr_name}' is missing a type"));
        };
        let attr_type = parse_type(type_token)?;
        i += 2;

        let primary_key = tokens.get(i).is_some_and(|t| keyword(t) == "PK");
        if primary_key {
            i += 1;
        }
        attributes.push(AttributeDecl {
            name: attr_name,
            attr_type,
            primary_key,
        });
    }
    if attributes.is_empty() {
        return Err("CREATE TABLE needs at least one attribute".to_string());
    }

    Ok(Command::CreateTable { name, attributes })
}

fn parse_drop(tokens: &[String]) -> Result<Command, String> {
    match tokens.get(1).map(|t| keyword(t)).as_deref() {
        Some("TABLE") => {
            expect_arity(tokens, 3, "DROP TABLE <name>")?;
            Ok(Command::DropTable {
                name: tokens[2].clone(),
            })
        }
        Some("ALL") => {
            expect_arity(tokens, 3, "DROP ALL TABLES")?;
            if keyword(&tokens[2]) != "TABLES" {
                return Err("expected: DROP ALL TABLES".to_string());
            }
            Ok(Command::DropAllTables)
        }
        Some("ATTRIBUTE") => {
            expect_arity(tokens, 4, "DROP ATTRIBUTE <table> <attr>")?;
            Ok(Command::DropAttribute {
                table: tokens[2].clone(),
                name: tokens[3].clone(),
            })
        }
        _ => Err("expected: DROP TABLE | DROP ALL TABLES | DROP ATTRIBUTE".to_string()),
    }
}

fn parse_add(tokens: &[String]) -> Result<Command, String> {
    if tokens.get(1).map(|t| keyword(t)).as_deref() != Some("ATTRIBUTE") {
        return Err("expected: ADD ATTRIBUTE <table> <attr> <TYPE>".to_string());
    }
    expect_arity(tokens, 5, "ADD ATTRIBUTE <table> <attr> <TYPE>")?;
    Ok(Command::AddAttribute {
        table: tokens[2].clone(),
        name: tokens[3].clone(),
        attr_type: parse_type(&tokens[4])?,
    })
}

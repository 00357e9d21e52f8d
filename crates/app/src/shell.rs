use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::render::{mode_label, write_comment, write_comments, write_draft};
use guestbook_core::{CommentId, CommentStorage, CommentStore, StoreError, Submitted};

const HELP: &str = "\
commands:
  author <text>   set the form's author
  body <text>     set the form's comment body
  submit          add the comment, or update the one being edited
  edit <id>       load a comment into the form for editing
  cancel          leave edit mode and clear the form
  delete <id>     remove a comment
  list            show all comments, newest first
  draft           show the form's current contents
  help            show this message
  quit            leave the shell";

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Author(String),
    Body(String),
    Submit,
    Edit(CommentId),
    Cancel,
    Delete(CommentId),
    List,
    Draft,
    Help,
    Quit,
}

/// Drives the store as the comment form would, one command per input line.
pub fn run<S, R, W>(store: &mut CommentStore<S>, input: R, out: &mut W) -> Result<(), ShellError>
where
    S: CommentStorage,
    R: BufRead,
    W: Write,
{
    write_comments(out, store.list())?;
    prompt(store, out)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(store, out)?;
            continue;
        }
        match parse_command(&line) {
            Ok(ShellCommand::Quit) => return Ok(()),
            Ok(command) => execute(store, command, out)?,
            Err(message) => writeln!(out, "{message}")?,
        }
        prompt(store, out)?;
    }
    writeln!(out)?;
    Ok(())
}

fn prompt<S: CommentStorage, W: Write>(store: &CommentStore<S>, out: &mut W) -> io::Result<()> {
    write!(out, "[{}]> ", mode_label(store.mode()))?;
    out.flush()
}

fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim_start();
    let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let command = match name {
        "author" => ShellCommand::Author(rest.to_string()),
        "body" => ShellCommand::Body(rest.to_string()),
        "submit" => ShellCommand::Submit,
        "edit" => ShellCommand::Edit(parse_id(rest)?),
        "cancel" => ShellCommand::Cancel,
        "delete" => ShellCommand::Delete(parse_id(rest)?),
        "list" => ShellCommand::List,
        "draft" => ShellCommand::Draft,
        "help" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("unknown command: {other} (try `help`)")),
    };
    Ok(command)
}

fn parse_id(raw: &str) -> Result<CommentId, String> {
    raw.parse()
        .map_err(|_| format!("expected a comment id, got `{}`", raw.trim()))
}

fn execute<S, W>(
    store: &mut CommentStore<S>,
    command: ShellCommand,
    out: &mut W,
) -> Result<(), ShellError>
where
    S: CommentStorage,
    W: Write,
{
    debug!(?command, "shell command");
    match command {
        ShellCommand::Author(author) => store.set_draft_author(author),
        ShellCommand::Body(body) => store.set_draft_body(body),
        ShellCommand::Submit => match store.submit_draft() {
            Ok(Submitted::Created(comment)) => {
                write!(out, "added ")?;
                write_comment(out, &comment)?;
            }
            Ok(Submitted::Updated(comment)) => {
                write!(out, "updated ")?;
                write_comment(out, &comment)?;
            }
            Err(StoreError::NotFound(id)) => writeln!(
                out,
                "comment #{id} no longer exists; the form is back in add mode"
            )?,
            Err(err) => report(out, &err)?,
        },
        ShellCommand::Edit(id) => match store.begin_edit(id) {
            Ok(_) => write_draft(out, store.mode(), store.draft())?,
            Err(StoreError::NotFound(id)) => writeln!(out, "no comment #{id}")?,
            Err(err) => report(out, &err)?,
        },
        ShellCommand::Cancel => store.cancel_edit(),
        ShellCommand::Delete(id) => match store.delete(id) {
            Ok(()) => writeln!(out, "deleted #{id}")?,
            Err(err) => report(out, &err)?,
        },
        ShellCommand::List => write_comments(out, store.list())?,
        ShellCommand::Draft => write_draft(out, store.mode(), store.draft())?,
        ShellCommand::Help => writeln!(out, "{HELP}")?,
        ShellCommand::Quit => {}
    }
    Ok(())
}

fn report<W: Write>(out: &mut W, err: &StoreError) -> io::Result<()> {
    match err {
        StoreError::Validation(err) => writeln!(out, "cannot submit: {err}"),
        StoreError::NotFound(id) => writeln!(out, "no comment #{id}"),
        StoreError::Persistence(err) => writeln!(
            out,
            "warning: change applied for this session but may not survive a restart ({err})"
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use guestbook_core::{EditCursor, StoreOptions};
    use guestbook_infra::storage::MemoryStorage;

    use super::*;

    fn run_script(
        store: &mut CommentStore<MemoryStorage>,
        script: &str,
    ) -> String {
        let mut out = Vec::new();
        run(store, Cursor::new(script.as_bytes()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn new_store() -> CommentStore<MemoryStorage> {
        CommentStore::initialize(MemoryStorage::new(), StoreOptions::default())
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_command("author  Ada Lovelace"),
            Ok(ShellCommand::Author(" Ada Lovelace".to_string()))
        );
        assert_eq!(parse_command("edit #12"), Ok(ShellCommand::Edit(CommentId::new(12))));
        assert_eq!(parse_command("quit"), Ok(ShellCommand::Quit));
        assert!(parse_command("delete").is_err());
        assert!(parse_command("frobnicate").is_err());
    }

    #[test]
    fn submit_adds_then_updates() {
        let mut store = new_store();
        let output = run_script(&mut store, "author Ada\nbody hello\nsubmit\n");
        assert!(output.contains("added #"));
        assert_eq!(store.len(), 1);
        let id = store.list()[0].id;

        let script = format!("edit {id}\nbody hello again\nsubmit\nquit\n");
        let output = run_script(&mut store, &script);
        assert!(output.contains(&format!("[update #{id}]> ")));
        assert!(output.contains("updated #"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].body, "hello again");
        assert_eq!(store.cursor(), EditCursor::Idle);
    }

    #[test]
    fn blank_submission_is_reported() {
        let mut store = new_store();
        let output = run_script(&mut store, "author Ada\nsubmit\n");
        assert!(output.contains("cannot submit: comment body is required"));
        assert!(store.is_empty());
        assert_eq!(store.draft().author, "Ada");
    }

    #[test]
    fn deleting_edited_comment_returns_to_add_mode() {
        let mut store = new_store();
        let comment = store.add("Ada", "hello").unwrap();
        let script = format!("edit {0}\ndelete {0}\ndraft\n", comment.id);
        let output = run_script(&mut store, &script);
        assert!(output.contains(&format!("deleted #{}", comment.id)));
        assert!(output.ends_with("mode:   add\nauthor: \nbody:   \n[add]> \n"));
        assert!(store.is_empty());
    }

    #[test]
    fn editing_unknown_comment_is_reported() {
        let mut store = new_store();
        let output = run_script(&mut store, "edit 5\n");
        assert!(output.contains("no comment #5"));
        assert!(!output.contains("add mode"));
    }

    #[test]
    fn failed_edit_keeps_current_edit() {
        let mut store = new_store();
        let comment = store.add("Ada", "hello").unwrap();
        let script = format!("edit {}\nedit 99\n", comment.id);
        let output = run_script(&mut store, &script);
        assert!(output.contains("no comment #99\n"));
        assert!(output.ends_with(&format!("[update #{}]> \n", comment.id)));
        assert_eq!(store.cursor(), EditCursor::Editing(comment.id));
    }

    #[test]
    fn failed_save_warns() {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        let mut store = CommentStore::initialize(storage, StoreOptions::default());
        let output = run_script(&mut store, "author Ada\nbody hi\nsubmit\n");
        assert!(output.contains("may not survive a restart"));
        assert_eq!(store.len(), 1);
    }
}
